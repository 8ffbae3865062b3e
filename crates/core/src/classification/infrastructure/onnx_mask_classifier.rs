/// Mask classifier using ONNX Runtime via `ort`.
use std::path::{Path, PathBuf};

use ndarray::Array4;
use thiserror::Error;

use crate::classification::domain::mask_classifier::{MaskClassifier, MaskPrediction};

#[derive(Error, Debug)]
pub enum ClassifierLoadError {
    #[error("mask classifier model not found: {0}")]
    MissingFile(PathBuf),
    #[error("failed to load mask classifier: {0}")]
    Ort(#[from] ort::Error),
}

/// Binary mask/no-mask classifier backed by an ONNX Runtime session.
///
/// Expects a model taking `[N, 224, 224, 3]` float input and producing
/// `[N, 2]` probabilities `(mask, without_mask)`.
pub struct OnnxMaskClassifier {
    session: ort::session::Session,
}

impl OnnxMaskClassifier {
    /// Deserializes the classifier from the configured path.
    pub fn load(model_path: &Path) -> Result<Self, ClassifierLoadError> {
        if !model_path.exists() {
            return Err(ClassifierLoadError::MissingFile(model_path.to_path_buf()));
        }
        let session = ort::session::Session::builder()?.commit_from_file(model_path)?;
        Ok(Self { session })
    }
}

impl MaskClassifier for OnnxMaskClassifier {
    fn predict(
        &mut self,
        faces: &Array4<f32>,
    ) -> Result<Vec<MaskPrediction>, Box<dyn std::error::Error>> {
        let batch = faces.shape()[0];

        let input = ort::value::Tensor::from_array(faces.clone())?;
        let outputs = self.session.run(ort::inputs![input])?;
        if outputs.len() == 0 {
            return Err("mask classifier produced no outputs".into());
        }

        let probs = outputs[0].try_extract_array::<f32>()?;
        let data = probs.as_slice().ok_or("Cannot get prediction slice")?;
        if data.len() != batch * 2 {
            return Err(format!(
                "expected {} prediction values for batch of {batch}, got {}",
                batch * 2,
                data.len()
            )
            .into());
        }

        Ok(data
            .chunks_exact(2)
            .map(|pair| MaskPrediction {
                mask: pair[0],
                without_mask: pair[1],
            })
            .collect())
    }
}
