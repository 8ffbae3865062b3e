/// Webcam source with one background acquisition thread.
///
/// The thread continuously reads the device into a single-slot buffer;
/// `read` hands out the latest frame so rendering never blocks acquisition.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use crate::capture::domain::frame_source::FrameSource;
use crate::shared::frame::Frame;
use crate::shared::mat_convert::bgr_mat_to_frame;

/// Poll interval while waiting for the first frame.
const READ_POLL: Duration = Duration::from_millis(5);

pub struct CameraSource {
    camera_index: i32,
    slot: Arc<Mutex<Option<Frame>>>,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl CameraSource {
    pub fn new(camera_index: i32) -> Self {
        Self {
            camera_index,
            slot: Arc::new(Mutex::new(None)),
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }
}

impl FrameSource for CameraSource {
    fn start(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut capture = VideoCapture::new(self.camera_index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(format!("cannot open camera device {}", self.camera_index).into());
        }

        self.running.store(true, Ordering::Relaxed);
        let running = self.running.clone();
        let slot = self.slot.clone();

        self.worker = Some(std::thread::spawn(move || {
            let mut mat = opencv::core::Mat::default();
            let mut index: usize = 0;
            while running.load(Ordering::Relaxed) {
                match capture.read(&mut mat) {
                    Ok(true) => match bgr_mat_to_frame(&mat, index) {
                        Ok(frame) => {
                            index += 1;
                            *slot.lock().unwrap() = Some(frame);
                        }
                        Err(e) => {
                            log::warn!("dropping unconvertible camera frame: {e}");
                        }
                    },
                    Ok(false) => {
                        log::warn!("camera produced no frame, stopping acquisition");
                        break;
                    }
                    Err(e) => {
                        log::warn!("camera read failed, stopping acquisition: {e}");
                        break;
                    }
                }
            }
            running.store(false, Ordering::Relaxed);
            // VideoCapture releases the device on drop
        }));

        Ok(())
    }

    fn read(&mut self) -> Result<Frame, Box<dyn std::error::Error>> {
        loop {
            if let Some(frame) = self.slot.lock().unwrap().clone() {
                return Ok(frame);
            }
            if !self.running.load(Ordering::Relaxed) {
                return Err("camera stopped before producing a frame".into());
            }
            std::thread::sleep(READ_POLL);
        }
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        *self.slot.lock().unwrap() = None;
    }
}
