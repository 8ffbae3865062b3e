pub mod detect_masks_use_case;
pub mod stream_masks_use_case;
