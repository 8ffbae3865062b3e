use crate::classification::domain::mask_classifier::{MaskClassifier, MaskPrediction};
use crate::classification::domain::preprocessing;
use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// One detected face with its classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskedFace {
    pub location: FaceBox,
    pub prediction: MaskPrediction,
}

/// Per-frame inference routine.
///
/// Detects faces, keeps candidates strictly above the confidence threshold,
/// crops and preprocesses the survivors, and classifies them in a single
/// batched call. Results are index-aligned with the surviving candidates,
/// in the detector's ranking order.
pub struct DetectMasksUseCase {
    detector: Box<dyn FaceDetector>,
    classifier: Box<dyn MaskClassifier>,
    confidence: f32,
}

impl DetectMasksUseCase {
    pub fn new(
        detector: Box<dyn FaceDetector>,
        classifier: Box<dyn MaskClassifier>,
        confidence: f32,
    ) -> Self {
        Self {
            detector,
            classifier,
            confidence,
        }
    }

    pub fn execute(&mut self, frame: &Frame) -> Result<Vec<MaskedFace>, Box<dyn std::error::Error>> {
        let candidates = self.detector.detect(frame)?;

        // Strictly above threshold; candidates whose box degenerates after
        // clamping are dropped with it.
        let locations: Vec<FaceBox> = candidates
            .iter()
            .filter(|c| c.confidence > self.confidence)
            .filter_map(|c| FaceBox::from_relative(c.rel_box, frame.width(), frame.height()))
            .collect();

        if locations.is_empty() {
            return Ok(Vec::new());
        }

        // One batched classifier call per frame, never per face.
        let batch = preprocessing::face_batch(frame, &locations);
        let predictions = self.classifier.predict(&batch)?;
        if predictions.len() != locations.len() {
            return Err(format!(
                "classifier returned {} predictions for {} faces",
                predictions.len(),
                locations.len()
            )
            .into());
        }

        Ok(locations
            .into_iter()
            .zip(predictions)
            .map(|(location, prediction)| MaskedFace {
                location,
                prediction,
            })
            .collect())
    }
}
