//! Internal types and constants for the app state module.

use std::time::Duration;

use globe_renderer::DecodedImage;

/// Result of the background texture fetch.
#[derive(Debug)]
pub(super) enum TextureEvent {
    Loaded(DecodedImage),
    Failed(String),
}

/// Upper bound on the texture download.
pub(super) const TEXTURE_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Grace period for the background runtime at teardown.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(500);
