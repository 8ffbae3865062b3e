use crate::shared::frame::Frame;

/// Downscales a frame to at most `max_width` pixels wide, preserving
/// aspect ratio. Frames already within the limit are returned unchanged.
pub fn resize_to_width(frame: &Frame, max_width: u32) -> Frame {
    if frame.width() <= max_width {
        return frame.clone();
    }
    let scale = max_width as f64 / frame.width() as f64;
    let new_height = ((frame.height() as f64 * scale).round() as u32).max(1);
    resize(frame, max_width, new_height)
}

/// Center-sampled nearest-neighbor resize.
pub fn resize(frame: &Frame, new_width: u32, new_height: u32) -> Frame {
    let src = frame.as_ndarray();
    let src_w = frame.width() as usize;
    let src_h = frame.height() as usize;
    let channels = frame.channels() as usize;

    let nw = new_width as usize;
    let nh = new_height as usize;
    let mut data = Vec::with_capacity(nw * nh * channels);

    for y in 0..nh {
        let src_y = (((y as f64 + 0.5) * src_h as f64 / nh as f64) as usize).min(src_h - 1);
        for x in 0..nw {
            let src_x = (((x as f64 + 0.5) * src_w as f64 / nw as f64) as usize).min(src_w - 1);
            for c in 0..channels {
                data.push(src[[src_y, src_x, c]]);
            }
        }
    }

    Frame::new(data, new_width, new_height, channels as u8, frame.index())
}
