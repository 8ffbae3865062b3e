use opencv::core;
use opencv::prelude::*;

use crate::shared::frame::Frame;

/// Converts an RGB [`Frame`] into an interleaved BGR `Mat` (CV_8UC3),
/// the layout OpenCV's DNN and drawing APIs expect.
pub fn frame_to_bgr_mat(frame: &Frame) -> opencv::Result<core::Mat> {
    // Swap channels directly into the Mat's own buffer so the per-frame
    // conversion copies the pixels exactly once.
    let mut mat = core::Mat::new_rows_cols_with_default(
        frame.height() as i32,
        frame.width() as i32,
        core::CV_8UC3,
        core::Scalar::default(),
    )?;
    let bytes = mat.data_bytes_mut()?;
    for (dst, src) in bytes.chunks_exact_mut(3).zip(frame.data().chunks_exact(3)) {
        dst[0] = src[2];
        dst[1] = src[1];
        dst[2] = src[0];
    }
    Ok(mat)
}

/// Converts a BGR `Mat` captured from the camera into an RGB [`Frame`],
/// stamping the capture index.
pub fn bgr_mat_to_frame(mat: &core::Mat, index: usize) -> opencv::Result<Frame> {
    if mat.channels() != 3 {
        return Err(opencv::Error::new(
            core::StsUnmatchedFormats,
            format!("expected a 3-channel BGR mat, got {} channels", mat.channels()),
        ));
    }
    let bytes = mat.data_bytes()?;
    let mut rgb = Vec::with_capacity(bytes.len());
    for px in bytes.chunks_exact(3) {
        rgb.push(px[2]);
        rgb.push(px[1]);
        rgb.push(px[0]);
    }
    Ok(Frame::new(
        rgb,
        mat.cols() as u32,
        mat.rows() as u32,
        3,
        index,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_pixels() {
        // 2x1 RGB: red then blue
        let frame = Frame::new(vec![255, 0, 0, 0, 0, 255], 2, 1, 3, 3);
        let mat = frame_to_bgr_mat(&frame).unwrap();
        let back = bgr_mat_to_frame(&mat, frame.index()).unwrap();
        assert_eq!(back.data(), frame.data());
        assert_eq!(back.width(), 2);
        assert_eq!(back.height(), 1);
        assert_eq!(back.index(), 3);
    }

    #[test]
    fn test_channels_are_swapped_in_mat() {
        // Single red RGB pixel becomes (0, 0, 255) in BGR
        let frame = Frame::new(vec![255, 0, 0], 1, 1, 3, 0);
        let mat = frame_to_bgr_mat(&frame).unwrap();
        assert_eq!(mat.data_bytes().unwrap(), &[0, 0, 255]);
    }

    #[test]
    fn test_mat_dimensions() {
        let frame = Frame::new(vec![0; 4 * 2 * 3], 4, 2, 3, 0);
        let mat = frame_to_bgr_mat(&frame).unwrap();
        assert_eq!(mat.cols(), 4);
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.channels(), 3);
    }
}
