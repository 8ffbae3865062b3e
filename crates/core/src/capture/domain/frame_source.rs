use crate::shared::frame::Frame;

/// Live frame supplier.
///
/// Sources buffer at most one frame and drop stale ones, so a slow consumer
/// always sees the most recent capture and never queues behind the device.
pub trait FrameSource: Send {
    /// Begins frame acquisition.
    fn start(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Returns the latest available frame, blocking until one exists.
    fn read(&mut self) -> Result<Frame, Box<dyn std::error::Error>>;

    /// Stops acquisition and releases the device.
    fn stop(&mut self);
}
