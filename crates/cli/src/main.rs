use std::path::PathBuf;
use std::process;

use clap::Parser;

use maskcam_core::capture::infrastructure::camera_source::CameraSource;
use maskcam_core::classification::infrastructure::onnx_mask_classifier::OnnxMaskClassifier;
use maskcam_core::detection::infrastructure::caffe_ssd_detector::CaffeSsdDetector;
use maskcam_core::pipeline::detect_masks_use_case::DetectMasksUseCase;
use maskcam_core::pipeline::stream_masks_use_case::{StreamMasksUseCase, StreamOptions};
use maskcam_core::render::infrastructure::highgui_sink::HighguiSink;

/// Live webcam face mask detection.
#[derive(Parser)]
#[command(name = "maskcam")]
struct Cli {
    /// Directory containing the face detector topology and weights.
    #[arg(short = 'f', long, default_value = "face_detector")]
    face: PathBuf,

    /// Path to the trained mask classifier model (ONNX format).
    #[arg(short = 'm', long, default_value = "mask_detector.model")]
    model: PathBuf,

    /// Minimum detection confidence to keep a face (0.0-1.0).
    #[arg(short = 'c', long, default_value = "0.5")]
    confidence: f32,

    /// Camera device index.
    #[arg(long, default_value = "0")]
    camera: i32,

    /// Stop after presenting this many frames (default: run until 'q').
    #[arg(long)]
    max_frames: Option<usize>,

    /// Log and skip frames whose inference fails instead of exiting.
    #[arg(long)]
    skip_failed_frames: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    log::info!("Loading face detector from {}", cli.face.display());
    let detector = CaffeSsdDetector::load(&cli.face)?;

    log::info!("Loading mask classifier from {}", cli.model.display());
    let classifier = OnnxMaskClassifier::load(&cli.model)?;

    let inference =
        DetectMasksUseCase::new(Box::new(detector), Box::new(classifier), cli.confidence);

    let options = StreamOptions {
        max_frames: cli.max_frames,
        skip_failed_frames: cli.skip_failed_frames,
        ..StreamOptions::default()
    };

    log::info!("Starting video stream on camera {}", cli.camera);
    let mut stream = StreamMasksUseCase::new(
        Box::new(CameraSource::new(cli.camera)),
        Box::new(HighguiSink::new()),
        inference,
        options,
    );
    stream.execute()
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !(0.0..=1.0).contains(&cli.confidence) {
        return Err(format!(
            "Confidence must be between 0.0 and 1.0, got {}",
            cli.confidence
        )
        .into());
    }
    Ok(())
}
