pub mod mask_classifier;
pub mod preprocessing;
