//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the scene, the GPU backdrop, the frame loop and the
//! background texture fetch.

mod core;
mod event_handler;
mod frame_loop;
mod init;
mod polling;
mod shutdown;
mod subscriptions;
mod texture_task;
mod types;

pub use core::GlobeApp;
