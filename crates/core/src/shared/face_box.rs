/// A detected face location in pixel coordinates, clamped to frame bounds.
///
/// Invariant: `0 <= start_x < end_x <= width` and `0 <= start_y < end_y <= height`
/// for the frame the box was built against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceBox {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

impl FaceBox {
    /// Scales a relative `[x1, y1, x2, y2]` box (fractions of frame size)
    /// to pixel coordinates and clamps it to the frame extent.
    ///
    /// Coordinates are truncated toward zero, starts clamped to 0 and ends
    /// to `dim - 1`, matching the SSD post-processing the detector was
    /// shipped with. Returns `None` when the clamped box is empty.
    pub fn from_relative(rel: [f32; 4], frame_width: u32, frame_height: u32) -> Option<Self> {
        let w = frame_width as f32;
        let h = frame_height as f32;

        let start_x = (rel[0] * w) as i32;
        let start_y = (rel[1] * h) as i32;
        let end_x = (rel[2] * w) as i32;
        let end_y = (rel[3] * h) as i32;

        let start_x = start_x.max(0);
        let start_y = start_y.max(0);
        let end_x = end_x.min(frame_width as i32 - 1);
        let end_y = end_y.min(frame_height as i32 - 1);

        if start_x >= end_x || start_y >= end_y {
            return None;
        }

        Some(Self {
            start_x,
            start_y,
            end_x,
            end_y,
        })
    }

    pub fn width(&self) -> u32 {
        (self.end_x - self.start_x) as u32
    }

    pub fn height(&self) -> u32 {
        (self.end_y - self.start_y) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_scales_relative_box_to_pixels() {
        let b = FaceBox::from_relative([0.1, 0.1, 0.5, 0.5], 400, 400).unwrap();
        assert_eq!(b, FaceBox {
            start_x: 40,
            start_y: 40,
            end_x: 200,
            end_y: 200,
        });
        assert_eq!(b.width(), 160);
        assert_eq!(b.height(), 160);
    }

    #[test]
    fn test_clamps_to_frame_extent() {
        let b = FaceBox::from_relative([-0.2, -0.1, 1.5, 1.2], 400, 300).unwrap();
        assert_eq!(b.start_x, 0);
        assert_eq!(b.start_y, 0);
        assert_eq!(b.end_x, 399);
        assert_eq!(b.end_y, 299);
    }

    #[rstest]
    #[case([0.5, 0.1, 0.5, 0.5])] // zero width
    #[case([0.1, 0.5, 0.5, 0.5])] // zero height
    #[case([0.6, 0.6, 0.2, 0.2])] // inverted
    #[case([1.2, 1.2, 1.5, 1.5])] // entirely outside
    fn test_rejects_degenerate_boxes(#[case] rel: [f32; 4]) {
        assert!(FaceBox::from_relative(rel, 400, 400).is_none());
    }

    #[rstest]
    #[case([0.1, 0.1, 0.5, 0.5], 400, 400)]
    #[case([-0.3, 0.0, 0.9, 2.0], 640, 480)]
    #[case([0.0, 0.0, 1.0, 1.0], 100, 50)]
    #[case([0.99, 0.0, 1.0, 1.0], 800, 600)]
    fn test_invariant_holds(#[case] rel: [f32; 4], #[case] w: u32, #[case] h: u32) {
        if let Some(b) = FaceBox::from_relative(rel, w, h) {
            assert!(0 <= b.start_x && b.start_x < b.end_x && b.end_x <= w as i32);
            assert!(0 <= b.start_y && b.start_y < b.end_y && b.end_y <= h as i32);
        }
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 0.333 * 300 = 99.9 -> 99
        let b = FaceBox::from_relative([0.0, 0.0, 0.333, 0.333], 300, 300).unwrap();
        assert_eq!(b.end_x, 99);
        assert_eq!(b.end_y, 99);
    }
}
