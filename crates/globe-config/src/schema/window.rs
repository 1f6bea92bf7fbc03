//! Window configuration types.

use serde::{Deserialize, Serialize};

/// How the backdrop window sits on the desktop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum WindowMode {
    /// Regular window that receives cursor events.
    #[default]
    Windowed,
    /// Undecorated, always-on-bottom, click-through.
    Backdrop,
}

/// Window appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub mode: WindowMode,
    pub title: String,
    /// Initial logical width (valid range: 200-7680).
    pub width: u32,
    /// Initial logical height (valid range: 200-4320).
    pub height: u32,
    pub decorations: bool,
    pub transparent: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            mode: WindowMode::Windowed,
            title: "Globe".into(),
            width: 1280,
            height: 800,
            decorations: true,
            transparent: true,
        }
    }
}
