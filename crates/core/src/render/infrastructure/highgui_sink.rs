/// On-screen display via OpenCV highgui.
use opencv::core::{Point, Rect, Scalar};
use opencv::{highgui, imgproc};

use crate::render::domain::frame_sink::{Annotation, FrameSink};
use crate::shared::frame::Frame;
use crate::shared::mat_convert::frame_to_bgr_mat;

const WINDOW_NAME: &str = "Frame";
const LABEL_FONT_SCALE: f64 = 0.45;
const LINE_THICKNESS: i32 = 2;

/// Vertical offset of the label baseline above the box.
const LABEL_OFFSET_Y: i32 = 10;

/// Keypress poll timeout in milliseconds.
const KEY_POLL_MS: i32 = 1;

pub struct HighguiSink {
    window_created: bool,
}

impl HighguiSink {
    pub fn new() -> Self {
        Self {
            window_created: false,
        }
    }
}

impl Default for HighguiSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for HighguiSink {
    fn present(
        &mut self,
        frame: &Frame,
        annotations: &[Annotation],
    ) -> Result<Option<char>, Box<dyn std::error::Error>> {
        if !self.window_created {
            highgui::named_window(WINDOW_NAME, highgui::WINDOW_AUTOSIZE)?;
            self.window_created = true;
        }

        let mut mat = frame_to_bgr_mat(frame)?;
        for a in annotations {
            let (r, g, b) = a.color;
            let color = Scalar::new(b as f64, g as f64, r as f64, 0.0);
            imgproc::put_text(
                &mut mat,
                &a.label,
                Point::new(a.face.start_x, a.face.start_y - LABEL_OFFSET_Y),
                imgproc::FONT_HERSHEY_SIMPLEX,
                LABEL_FONT_SCALE,
                color,
                LINE_THICKNESS,
                imgproc::LINE_8,
                false,
            )?;
            imgproc::rectangle(
                &mut mat,
                Rect::new(
                    a.face.start_x,
                    a.face.start_y,
                    a.face.width() as i32,
                    a.face.height() as i32,
                ),
                color,
                LINE_THICKNESS,
                imgproc::LINE_8,
                0,
            )?;
        }

        highgui::imshow(WINDOW_NAME, &mat)?;

        let key = highgui::wait_key(KEY_POLL_MS)?;
        if key < 0 {
            Ok(None)
        } else {
            Ok(char::from_u32((key & 0xFF) as u32))
        }
    }

    fn close(&mut self) {
        if self.window_created {
            let _ = highgui::destroy_all_windows();
            self.window_created = false;
        }
    }
}
