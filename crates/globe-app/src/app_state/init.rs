//! Window creation, scene bootstrap and renderer initialization.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio_util::sync::CancellationToken;
use winit::event_loop::ActiveEventLoop;
use winit::window::{WindowAttributes, WindowLevel};

use globe_common::Viewport;
use globe_config::schema::{WindowConfig, WindowMode};
use globe_renderer::Backdrop;
use globe_scene::{FrameClock, SceneState};

use super::core::GlobeApp;
use super::texture_task::{texture_task, TextureSource};
use super::types::TextureEvent;

/// Window attributes for the configured mode.
pub(super) fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_transparent(config.transparent)
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.width as f64,
            config.height as f64,
        ));

    match config.mode {
        WindowMode::Windowed => attrs.with_decorations(config.decorations),
        WindowMode::Backdrop => attrs
            .with_decorations(false)
            .with_resizable(false)
            .with_maximized(true)
            .with_active(false)
            .with_window_level(WindowLevel::AlwaysOnBottom),
    }
}

impl GlobeApp {
    /// Create the window, build the scene and allocate GPU resources.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = window_attributes(&self.config.window);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                return false;
            }
        };

        if self.config.window.mode == WindowMode::Backdrop {
            if let Err(e) = window.set_cursor_hittest(false) {
                tracing::warn!("click-through unavailable on this platform: {e}");
            }
        }

        let size = window.inner_size();
        let viewport = Viewport::new(size.width, size.height);
        let mut rng = match self.config.particles.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scene = match SceneState::bootstrap(&self.config, viewport, &mut rng) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("failed to build scene: {e}");
                return false;
            }
        };

        let backdrop = match pollster::block_on(Backdrop::new(window.clone(), &self.config, &scene))
        {
            Ok(b) => b,
            Err(e) => {
                tracing::error!("failed to initialize renderer: {e}");
                return false;
            }
        };

        let max_texture = backdrop.max_texture_dimension();
        self.scene = Some(scene);
        self.backdrop = Some(backdrop);
        self.clock = FrameClock::new(self.config.animation.time_source);
        self.subscriptions.register_all();
        self.start_texture_fetch(max_texture);
        self.frame_loop.start(&window);
        self.window = Some(window);

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            mode = ?self.config.window.mode,
            "window created and scene bootstrapped"
        );
        true
    }

    /// Spawn the one-shot texture fetch on a single-worker runtime.
    fn start_texture_fetch(&mut self, max_dimension: u32) {
        let source = TextureSource::parse(&self.config.globe.texture);
        if source == TextureSource::None {
            tracing::info!("no globe texture configured, rendering base color");
            return;
        }

        if self.tokio_runtime.is_none() {
            match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
            {
                Ok(rt) => self.tokio_runtime = Some(rt),
                Err(e) => {
                    tracing::warn!("failed to create tokio runtime, globe stays untextured: {e}");
                    return;
                }
            }
        }

        let (event_tx, event_rx) = std::sync::mpsc::channel::<TextureEvent>();
        let cancel = CancellationToken::new();
        self.texture_rx = Some(event_rx);
        self.texture_cancel = Some(cancel.clone());

        tracing::info!(?source, "fetching globe texture");
        if let Some(rt) = self.tokio_runtime.as_ref() {
            rt.spawn(texture_task(source, max_dimension, cancel, event_tx));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windowed_attributes_follow_config() {
        let config = WindowConfig::default();
        let attrs = window_attributes(&config);
        assert_eq!(attrs.title, "Globe");
        assert!(attrs.transparent);
        assert!(attrs.decorations);
        assert_eq!(attrs.window_level, WindowLevel::Normal);
    }

    #[test]
    fn backdrop_attributes_sit_behind_everything() {
        let config = WindowConfig {
            mode: WindowMode::Backdrop,
            ..WindowConfig::default()
        };
        let attrs = window_attributes(&config);
        assert!(!attrs.decorations);
        assert!(attrs.maximized);
        assert!(!attrs.active);
        assert_eq!(attrs.window_level, WindowLevel::AlwaysOnBottom);
    }
}
