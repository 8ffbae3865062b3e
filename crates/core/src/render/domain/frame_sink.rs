use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// One overlay to draw on a presented frame: a box plus a label drawn
/// just above it, both in the given (R, G, B) color.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub face: FaceBox,
    pub label: String,
    pub color: (u8, u8, u8),
}

/// Presents annotated frames and reports keypresses.
pub trait FrameSink: Send {
    /// Draws the annotations onto the frame, shows it, and polls briefly
    /// for a keypress. Returns the pressed key, if any.
    fn present(
        &mut self,
        frame: &Frame,
        annotations: &[Annotation],
    ) -> Result<Option<char>, Box<dyn std::error::Error>>;

    /// Closes any display windows.
    fn close(&mut self);
}
