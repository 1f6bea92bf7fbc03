//! Teardown: stop the frame loop, drop listeners, release GPU resources.

use super::core::GlobeApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

impl GlobeApp {
    /// Tear everything down. Safe to call more than once.
    ///
    /// Order:
    /// 1. Cancel the frame loop and remove resize/pointer listeners
    /// 2. Cancel the texture fetch and shut down its runtime
    /// 3. Dispose GPU resources, then drop the scene
    pub(super) fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        tracing::info!("tearing down globe backdrop");

        self.frame_loop.cancel();
        self.subscriptions.unregister_all();

        if let Some(cancel) = self.texture_cancel.take() {
            cancel.cancel();
        }
        self.texture_rx = None;
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        if let Some(mut backdrop) = self.backdrop.take() {
            backdrop.dispose();
        }
        self.scene = None;
        self.cursor = None;

        self.shut_down = true;
        tracing::info!(frames = self.frame_loop.frames(), "teardown complete");
    }
}
