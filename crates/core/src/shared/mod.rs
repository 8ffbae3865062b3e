pub mod constants;
pub mod face_box;
pub mod frame;
pub mod imaging;
pub mod mat_convert;
