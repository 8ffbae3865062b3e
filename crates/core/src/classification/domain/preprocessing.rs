use ndarray::Array4;

use crate::shared::constants::CLASSIFIER_INPUT_SIZE;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// Builds the classifier input batch from the detected face regions.
///
/// Each box is cropped from the RGB frame, resized to 224x224 with
/// center-sampled lookup, and mapped to [-1, 1] (MobileNetV2
/// `preprocess_input`: `x / 127.5 - 1`). Output shape is `[N, 224, 224, 3]`
/// NHWC, row `n` aligned with `boxes[n]`.
pub fn face_batch(frame: &Frame, boxes: &[FaceBox]) -> Array4<f32> {
    let size = CLASSIFIER_INPUT_SIZE;
    let mut batch = Array4::<f32>::zeros((boxes.len(), size, size, 3));
    let src = frame.as_ndarray();

    for (n, b) in boxes.iter().enumerate() {
        let x0 = b.start_x as usize;
        let y0 = b.start_y as usize;
        let crop_w = b.width() as usize;
        let crop_h = b.height() as usize;

        for y in 0..size {
            let sy = y0 + (((y as f64 + 0.5) * crop_h as f64 / size as f64) as usize)
                .min(crop_h - 1);
            for x in 0..size {
                let sx = x0 + (((x as f64 + 0.5) * crop_w as f64 / size as f64) as usize)
                    .min(crop_w - 1);
                for c in 0..3 {
                    batch[[n, y, x, c]] = src[[sy, sx, c]] as f32 / 127.5 - 1.0;
                }
            }
        }
    }

    batch
}
