use std::sync::atomic::{AtomicBool, Ordering};

/// Log the first frame presentation (once per process).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: AtomicBool = AtomicBool::new(false);
    if !PRESENTED.swap(true, Ordering::Relaxed) {
        tracing::info!("first frame presented ({width}x{height}, format={format:?})");
    }
}

/// Transparent clear: the desktop shows through everywhere the scene doesn't draw.
pub(crate) const CLEAR_COLOR: wgpu::Color = wgpu::Color::TRANSPARENT;
