use std::sync::atomic::{AtomicBool, Ordering};

/// Log the first presented frame, once.
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: AtomicBool = AtomicBool::new(false);
    if !PRESENTED.swap(true, Ordering::Relaxed) {
        tracing::info!(width, height, ?format, "first frame presented");
    }
}
