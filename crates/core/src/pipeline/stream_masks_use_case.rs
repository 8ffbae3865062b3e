use std::time::Duration;

use crate::capture::domain::frame_source::FrameSource;
use crate::pipeline::detect_masks_use_case::{DetectMasksUseCase, MaskedFace};
use crate::render::domain::frame_sink::{Annotation, FrameSink};
use crate::shared::constants::{CAMERA_WARMUP, MAX_RENDER_WIDTH, QUIT_KEY};
use crate::shared::imaging::resize_to_width;

/// Loop policy knobs; the defaults mirror the interactive demo behavior.
pub struct StreamOptions {
    /// Sensor stabilization delay after the source starts.
    pub warmup: Duration,
    /// Maximum display width, aspect ratio preserved.
    pub max_width: u32,
    /// Stop after presenting this many frames. `None` runs until the quit key.
    pub max_frames: Option<usize>,
    /// When set, a failed per-frame inference is logged and the frame
    /// presented without annotations instead of ending the stream.
    pub skip_failed_frames: bool,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            warmup: CAMERA_WARMUP,
            max_width: MAX_RENDER_WIDTH,
            max_frames: None,
            skip_failed_frames: false,
        }
    }
}

/// Capture-and-render loop: read the latest frame, downscale, run mask
/// inference, overlay a label and box per face, present, and poll for the
/// quit key.
pub struct StreamMasksUseCase {
    source: Box<dyn FrameSource>,
    sink: Box<dyn FrameSink>,
    inference: DetectMasksUseCase,
    options: StreamOptions,
}

impl StreamMasksUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        sink: Box<dyn FrameSink>,
        inference: DetectMasksUseCase,
        options: StreamOptions,
    ) -> Self {
        Self {
            source,
            sink,
            inference,
            options,
        }
    }

    /// Runs the loop until the quit key, the frame limit, or an error.
    ///
    /// Once the source has started, it is stopped and the sink closed on
    /// every exit path.
    pub fn execute(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.source.start()?;
        std::thread::sleep(self.options.warmup);

        let result = self.run_loop();

        self.sink.close();
        self.source.stop();
        result
    }

    fn run_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut presented: usize = 0;

        loop {
            if let Some(limit) = self.options.max_frames {
                if presented >= limit {
                    return Ok(());
                }
            }

            let frame = self.source.read()?;
            let frame = resize_to_width(&frame, self.options.max_width);

            // A failed frame is still presented (unannotated) so the quit
            // key stays reachable and the frame limit keeps counting.
            let faces = match self.inference.execute(&frame) {
                Ok(faces) => faces,
                Err(e) if self.options.skip_failed_frames => {
                    log::warn!("inference failed on frame {}: {e}", frame.index());
                    Vec::new()
                }
                Err(e) => return Err(e),
            };

            let key = self.sink.present(&frame, &annotate(&faces))?;
            presented += 1;

            if key == Some(QUIT_KEY) {
                return Ok(());
            }
        }
    }
}

fn annotate(faces: &[MaskedFace]) -> Vec<Annotation> {
    faces
        .iter()
        .map(|f| {
            let label = f.prediction.label();
            Annotation {
                face: f.location,
                label: label.text().to_string(),
                color: label.color(),
            }
        })
        .collect()
}
