//! GlobeApp struct definition and constructor.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use winit::window::Window;

use globe_common::CursorPosition;
use globe_config::GlobeConfig;
use globe_renderer::{Backdrop, FrameTimer};
use globe_scene::{FrameClock, SceneState};

use super::frame_loop::FrameLoop;
use super::subscriptions::Subscriptions;
use super::types::TextureEvent;

/// Top-level application state.
pub struct GlobeApp {
    pub(super) config: GlobeConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) backdrop: Option<Backdrop>,

    // Scene
    pub(super) scene: Option<SceneState>,
    pub(super) clock: FrameClock,
    pub(super) cursor: Option<CursorPosition>,

    // Frame scheduling
    pub(super) frame_loop: FrameLoop,
    pub(super) frame_timer: FrameTimer,
    pub(super) subscriptions: Subscriptions,

    // Background texture fetch
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) texture_rx: Option<std::sync::mpsc::Receiver<TextureEvent>>,
    pub(super) texture_cancel: Option<CancellationToken>,

    pub(super) should_exit: bool,
    pub(super) shut_down: bool,
}

impl GlobeApp {
    pub fn new(config: GlobeConfig) -> Self {
        let clock = FrameClock::new(config.animation.time_source);
        let frame_timer = FrameTimer::new(config.performance.fps_log_interval);
        Self {
            config,
            window: None,
            backdrop: None,
            scene: None,
            clock,
            cursor: None,
            frame_loop: FrameLoop::new(),
            frame_timer,
            subscriptions: Subscriptions::default(),
            tokio_runtime: None,
            texture_rx: None,
            texture_cancel: None,
            should_exit: false,
            shut_down: false,
        }
    }
}
