use crate::shared::frame::Frame;

/// A raw detector candidate: a confidence score and a bounding box in
/// relative coordinates (fractions of frame width/height, `[x1, y1, x2, y2]`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceCandidate {
    pub confidence: f32,
    pub rel_box: [f32; 4],
}

/// Domain interface for face detection.
///
/// Implementations may hold session state, hence `&mut self`. Candidates
/// are returned unfiltered, in the detector's internal ranking order;
/// confidence filtering belongs to the caller.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &Frame)
        -> Result<Vec<FaceCandidate>, Box<dyn std::error::Error>>;
}
