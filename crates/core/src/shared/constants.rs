use std::time::Duration;

/// Network topology file expected inside the face detector directory.
pub const PROTOTXT_FILE: &str = "deploy.prototxt";

/// Learned weights file expected inside the face detector directory.
pub const CAFFEMODEL_FILE: &str = "res10_300x300_ssd_iter_140000.caffemodel";

/// SSD input resolution the detector was trained with.
pub const DETECTOR_INPUT_SIZE: i32 = 300;

/// Per-channel (B, G, R) mean subtracted from the detector input blob.
pub const DETECTOR_MEAN: (f64, f64, f64) = (104.0, 177.0, 123.0);

/// Mask classifier input resolution (MobileNetV2).
pub const CLASSIFIER_INPUT_SIZE: usize = 224;

/// Maximum display width; captured frames are downscaled to this,
/// aspect ratio preserved.
pub const MAX_RENDER_WIDTH: u32 = 800;

/// Sensor stabilization delay before the first frame is consumed.
pub const CAMERA_WARMUP: Duration = Duration::from_secs(2);

/// Keypress that ends the stream loop.
pub const QUIT_KEY: char = 'q';
