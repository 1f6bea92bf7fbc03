//! Non-blocking polling of background texture events.

use std::sync::mpsc::TryRecvError;

use super::core::GlobeApp;
use super::types::TextureEvent;

impl GlobeApp {
    /// Apply a finished texture fetch, if one has arrived.
    pub(super) fn poll_texture(&mut self) {
        let event = match self.texture_rx.as_ref().map(|rx| rx.try_recv()) {
            Some(Ok(event)) => event,
            Some(Err(TryRecvError::Disconnected)) => {
                // Task ended without a result (cancelled or runtime gone).
                self.texture_rx = None;
                return;
            }
            Some(Err(TryRecvError::Empty)) | None => return,
        };
        self.texture_rx = None;
        self.texture_cancel = None;

        match event {
            TextureEvent::Loaded(image) => {
                let Some(backdrop) = self.backdrop.as_mut() else {
                    return;
                };
                match backdrop.set_globe_texture(&image) {
                    Ok(()) => tracing::info!(
                        width = image.width,
                        height = image.height,
                        "globe texture applied"
                    ),
                    Err(e) => tracing::warn!("globe texture upload failed: {e}"),
                }
            }
            TextureEvent::Failed(msg) => {
                tracing::warn!("globe texture unavailable, rendering untextured: {msg}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use globe_config::GlobeConfig;
    use globe_renderer::DecodedImage;

    use super::*;

    #[test]
    fn poll_without_fetch_is_noop() {
        let mut app = GlobeApp::new(GlobeConfig::default());
        app.poll_texture();
        assert!(app.texture_rx.is_none());
    }

    #[test]
    fn failure_event_clears_channel() {
        let mut app = GlobeApp::new(GlobeConfig::default());
        let (tx, rx) = std::sync::mpsc::channel();
        app.texture_rx = Some(rx);
        tx.send(TextureEvent::Failed("404".into())).unwrap();

        app.poll_texture();

        assert!(app.texture_rx.is_none());
        assert!(app.backdrop.is_none());
    }

    #[test]
    fn loaded_event_without_backdrop_is_dropped() {
        let mut app = GlobeApp::new(GlobeConfig::default());
        let (tx, rx) = std::sync::mpsc::channel();
        app.texture_rx = Some(rx);
        tx.send(TextureEvent::Loaded(DecodedImage::white())).unwrap();

        app.poll_texture();

        assert!(app.texture_rx.is_none());
    }

    #[test]
    fn pending_fetch_keeps_channel() {
        let mut app = GlobeApp::new(GlobeConfig::default());
        let (_tx, rx) = std::sync::mpsc::channel::<TextureEvent>();
        app.texture_rx = Some(rx);

        app.poll_texture();

        assert!(app.texture_rx.is_some());
    }

    #[test]
    fn disconnected_channel_is_released() {
        let mut app = GlobeApp::new(GlobeConfig::default());
        let (tx, rx) = std::sync::mpsc::channel::<TextureEvent>();
        app.texture_rx = Some(rx);
        drop(tx);

        app.poll_texture();

        assert!(app.texture_rx.is_none());
    }
}
