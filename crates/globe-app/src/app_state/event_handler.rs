//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use globe_common::{CursorPosition, Viewport};
use globe_config::schema::WindowMode;
use globe_renderer::FrameStatus;

use super::core::GlobeApp;
use super::subscriptions::Subscription;

impl ApplicationHandler for GlobeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.shut_down {
            return;
        }

        if !self.initialize_window(event_loop) {
            self.shutdown();
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if self.subscriptions.is_active(Subscription::Resize) {
                    self.handle_resize(size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if self.subscriptions.is_active(Subscription::Pointer) {
                    self.cursor = Some(CursorPosition::new(position.x, position.y));
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if self.is_exit_key(&event) {
                    tracing::info!("escape pressed, exiting");
                    self.should_exit = true;
                }
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    return;
                }
                self.run_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_texture();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

impl GlobeApp {
    /// Escape closes a normal window; the backdrop never has focus to receive it.
    fn is_exit_key(&self, event: &KeyEvent) -> bool {
        self.config.window.mode == WindowMode::Windowed
            && event.state == ElementState::Pressed
            && event.logical_key == Key::Named(NamedKey::Escape)
    }

    fn handle_resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width, height);
        if let Some(scene) = self.scene.as_mut() {
            if !scene.resize(viewport) {
                return;
            }
        }
        if let Some(backdrop) = self.backdrop.as_mut() {
            backdrop.resize(width, height);
        }
    }

    /// Advance the scene to the current time, draw it and re-arm the loop.
    fn run_frame(&mut self) {
        if !self.frame_loop.is_running() {
            return;
        }
        let (Some(scene), Some(backdrop)) = (self.scene.as_mut(), self.backdrop.as_mut()) else {
            return;
        };

        let t = self.clock.now_secs();
        scene.update_frame(self.cursor, t);

        match backdrop.render(scene) {
            Ok(FrameStatus::Presented) => {
                if let Some(report) = self.frame_timer.tick(Instant::now()) {
                    tracing::debug!(
                        fps = report.fps,
                        frame_ms = report.frame_time_ms,
                        worst_ms = report.worst_frame_ms,
                        frames = report.frames,
                        "frame stats"
                    );
                }
            }
            Ok(FrameStatus::Skipped) => {}
            Err(e) => {
                tracing::error!("render failed, stopping animation: {e}");
                self.frame_loop.cancel();
                self.should_exit = true;
                return;
            }
        }

        if let Some(window) = self.window.as_ref() {
            self.frame_loop.rearm(window);
        }
    }
}
