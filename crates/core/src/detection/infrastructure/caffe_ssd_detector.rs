/// ResNet-10 SSD face detector via OpenCV's DNN module.
///
/// Loads the fixed-topology Caffe network (`deploy.prototxt` + trained
/// weights) and emits relative bounding-box candidates per frame.
use std::path::{Path, PathBuf};

use opencv::core::{self, Scalar, Size};
use opencv::dnn;
use opencv::prelude::*;
use thiserror::Error;

use crate::detection::domain::face_detector::{FaceCandidate, FaceDetector};
use crate::shared::constants::{
    CAFFEMODEL_FILE, DETECTOR_INPUT_SIZE, DETECTOR_MEAN, PROTOTXT_FILE,
};
use crate::shared::frame::Frame;
use crate::shared::mat_convert::frame_to_bgr_mat;

#[derive(Error, Debug)]
pub enum DetectorLoadError {
    #[error("face detector file not found: {0}")]
    MissingFile(PathBuf),
    #[error("failed to load face detector network: {0}")]
    OpenCv(#[from] opencv::Error),
}

pub struct CaffeSsdDetector {
    net: dnn::Net,
}

impl CaffeSsdDetector {
    /// Loads the network topology and weights from `face_dir`.
    ///
    /// Both files are checked up front so a missing one fails with a
    /// diagnostic naming the exact path.
    pub fn load(face_dir: &Path) -> Result<Self, DetectorLoadError> {
        let prototxt = face_dir.join(PROTOTXT_FILE);
        let weights = face_dir.join(CAFFEMODEL_FILE);
        for path in [&prototxt, &weights] {
            if !path.exists() {
                return Err(DetectorLoadError::MissingFile(path.clone()));
            }
        }
        let net =
            dnn::read_net_from_caffe(&prototxt.to_string_lossy(), &weights.to_string_lossy())?;
        Ok(Self { net })
    }
}

impl FaceDetector for CaffeSsdDetector {
    fn detect(
        &mut self,
        frame: &Frame,
    ) -> Result<Vec<FaceCandidate>, Box<dyn std::error::Error>> {
        let mat = frame_to_bgr_mat(frame)?;

        // The exact preprocessing contract the SSD was trained with:
        // 300x300, scale 1.0, per-channel BGR mean, no channel swap.
        let blob = dnn::blob_from_image(
            &mat,
            1.0,
            Size::new(DETECTOR_INPUT_SIZE, DETECTOR_INPUT_SIZE),
            Scalar::new(DETECTOR_MEAN.0, DETECTOR_MEAN.1, DETECTOR_MEAN.2, 0.0),
            false,
            false,
            core::CV_32F,
        )?;
        self.net.set_input(&blob, "", 1.0, Scalar::default())?;
        let output = self.net.forward_single("")?;

        // Output layout [1, 1, N, 7], one row per candidate:
        // [image_id, label, confidence, x1, y1, x2, y2]
        let sizes = output.mat_size();
        if sizes.len() != 4 || sizes[3] != 7 {
            return Err(format!("unexpected SSD output shape: {:?}", &sizes[..]).into());
        }

        let count = sizes[2];
        let mut candidates = Vec::with_capacity(count as usize);
        for i in 0..count {
            let confidence = *output.at_nd::<f32>(&[0, 0, i, 2])?;
            let rel_box = [
                *output.at_nd::<f32>(&[0, 0, i, 3])?,
                *output.at_nd::<f32>(&[0, 0, i, 4])?,
                *output.at_nd::<f32>(&[0, 0, i, 5])?,
                *output.at_nd::<f32>(&[0, 0, i, 6])?,
            ];
            candidates.push(FaceCandidate {
                confidence,
                rel_box,
            });
        }

        Ok(candidates)
    }
}
