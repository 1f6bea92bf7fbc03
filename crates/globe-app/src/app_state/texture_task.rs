//! Background globe texture fetch.

use std::path::PathBuf;
use std::sync::mpsc::Sender;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use globe_common::{GlobeError, Result};
use globe_renderer::{decode_image, DecodedImage};

use super::types::{TextureEvent, TEXTURE_FETCH_TIMEOUT};

/// Where the globe image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum TextureSource {
    None,
    Url(String),
    File(PathBuf),
}

impl TextureSource {
    pub(super) fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            TextureSource::None
        } else if s.starts_with("http://") || s.starts_with("https://") {
            TextureSource::Url(s.to_string())
        } else {
            TextureSource::File(PathBuf::from(s))
        }
    }
}

/// Load, decode and report the texture once. Sends nothing if cancelled.
pub(super) async fn texture_task(
    source: TextureSource,
    max_dimension: u32,
    cancel: CancellationToken,
    event_tx: Sender<TextureEvent>,
) {
    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!("texture fetch cancelled");
            return;
        }
        r = load_texture(&source, max_dimension) => r,
    };

    let event = match result {
        Ok(image) => TextureEvent::Loaded(image),
        Err(e) => TextureEvent::Failed(e.to_string()),
    };
    let _ = event_tx.send(event);
}

async fn load_texture(
    source: &TextureSource,
    max_dimension: u32,
) -> Result<DecodedImage> {
    let bytes = match source {
        TextureSource::None => {
            return Err(GlobeError::Texture("no texture configured".into()));
        }
        TextureSource::Url(url) => fetch_url(url).await?,
        TextureSource::File(path) => tokio::fs::read(path).await?,
    };
    info!(bytes = bytes.len(), "globe texture fetched");

    tokio::task::spawn_blocking(move || decode_image(&bytes, max_dimension))
        .await
        .map_err(|e| GlobeError::Texture(format!("decode task failed: {e}")))?
        .map_err(GlobeError::from)
}

async fn fetch_url(url: &str) -> Result<Vec<u8>> {
    let texture_err = |e: reqwest::Error| GlobeError::Texture(format!("{url}: {e}"));

    let client = reqwest::Client::builder()
        .timeout(TEXTURE_FETCH_TIMEOUT)
        .build()
        .map_err(texture_err)?;
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(texture_err)?;
    let bytes = response.bytes().await.map_err(texture_err)?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("earth.png");
        image::RgbaImage::from_pixel(8, 4, image::Rgba([0, 80, 160, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn parses_sources() {
        assert_eq!(TextureSource::parse(""), TextureSource::None);
        assert_eq!(TextureSource::parse("   "), TextureSource::None);
        assert_eq!(
            TextureSource::parse("https://example.com/earth.jpg"),
            TextureSource::Url("https://example.com/earth.jpg".into())
        );
        assert_eq!(
            TextureSource::parse("http://localhost/e.png"),
            TextureSource::Url("http://localhost/e.png".into())
        );
        assert_eq!(
            TextureSource::parse("assets/earth.jpg"),
            TextureSource::File(PathBuf::from("assets/earth.jpg"))
        );
    }

    #[tokio::test]
    async fn loads_local_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path());
        let (tx, rx) = std::sync::mpsc::channel();

        texture_task(TextureSource::File(path), 8192, CancellationToken::new(), tx).await;

        match rx.try_recv().unwrap() {
            TextureEvent::Loaded(img) => assert_eq!((img.width, img.height), (8, 4)),
            TextureEvent::Failed(e) => panic!("unexpected failure: {e}"),
        }
    }

    #[tokio::test]
    async fn missing_file_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, rx) = std::sync::mpsc::channel();

        texture_task(
            TextureSource::File(dir.path().join("nope.jpg")),
            8192,
            CancellationToken::new(),
            tx,
        )
        .await;

        assert!(matches!(rx.try_recv().unwrap(), TextureEvent::Failed(_)));
    }

    #[tokio::test]
    async fn corrupt_file_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"not a png").unwrap();
        let (tx, rx) = std::sync::mpsc::channel();

        texture_task(TextureSource::File(path), 8192, CancellationToken::new(), tx).await;

        assert!(matches!(rx.try_recv().unwrap(), TextureEvent::Failed(_)));
    }

    #[tokio::test]
    async fn cancelled_fetch_sends_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path());
        let (tx, rx) = std::sync::mpsc::channel();
        let cancel = CancellationToken::new();
        cancel.cancel();

        texture_task(TextureSource::File(path), 8192, cancel, tx).await;

        // Sender dropped without sending.
        assert!(matches!(
            rx.try_recv(),
            Err(std::sync::mpsc::TryRecvError::Disconnected)
        ));
    }
}
