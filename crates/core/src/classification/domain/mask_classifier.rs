use ndarray::Array4;

/// A 2-class probability pair for one face crop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskPrediction {
    pub mask: f32,
    pub without_mask: f32,
}

impl MaskPrediction {
    /// Strict comparison: a tie renders as [`MaskLabel::NoMask`].
    pub fn label(&self) -> MaskLabel {
        if self.mask > self.without_mask {
            MaskLabel::Mask
        } else {
            MaskLabel::NoMask
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskLabel {
    Mask,
    NoMask,
}

impl MaskLabel {
    pub fn text(&self) -> &'static str {
        match self {
            MaskLabel::Mask => "Wearing a Mask",
            MaskLabel::NoMask => "No Mask",
        }
    }

    /// Overlay color as (R, G, B).
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            MaskLabel::Mask => (0, 255, 0),
            MaskLabel::NoMask => (255, 0, 0),
        }
    }
}

/// Domain interface for mask classification.
///
/// `predict` receives one NHWC batch of preprocessed face crops
/// (`[N, 224, 224, 3]`, values in [-1, 1]) and returns one prediction per
/// row, index-aligned. Callers never pass an empty batch and call at most
/// once per frame.
pub trait MaskClassifier: Send {
    fn predict(
        &mut self,
        faces: &Array4<f32>,
    ) -> Result<Vec<MaskPrediction>, Box<dyn std::error::Error>>;
}
