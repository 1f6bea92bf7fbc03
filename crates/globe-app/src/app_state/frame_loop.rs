//! Self re-arming redraw loop with cooperative cancellation.

use tokio_util::sync::CancellationToken;
use winit::window::Window;

/// Runs one frame per `RedrawRequested` and requests the next one until cancelled.
#[derive(Debug)]
pub(super) struct FrameLoop {
    token: CancellationToken,
    started: bool,
    frames: u64,
}

impl FrameLoop {
    pub(super) fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            started: false,
            frames: 0,
        }
    }

    /// Arm the loop and request the first frame.
    pub(super) fn start(&mut self, window: &Window) {
        if self.token.is_cancelled() {
            return;
        }
        self.started = true;
        window.request_redraw();
    }

    pub(super) fn is_running(&self) -> bool {
        self.started && !self.token.is_cancelled()
    }

    /// Record a finished frame and report whether another should follow.
    pub(super) fn frame_done(&mut self) -> bool {
        self.frames += 1;
        self.is_running()
    }

    /// Count a finished frame and request the next, unless cancelled.
    pub(super) fn rearm(&mut self, window: &Window) {
        if self.frame_done() {
            window.request_redraw();
        }
    }

    pub(super) fn cancel(&self) {
        self.token.cancel();
    }

    pub(super) fn frames(&self) -> u64 {
        self.frames
    }

    #[cfg(test)]
    fn mark_started(&mut self) {
        self.started = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_loop_is_idle() {
        let fl = FrameLoop::new();
        assert!(!fl.is_running());
        assert_eq!(fl.frames(), 0);
    }

    #[test]
    fn started_loop_keeps_going() {
        let mut fl = FrameLoop::new();
        fl.mark_started();
        assert!(fl.frame_done());
        assert!(fl.frame_done());
        assert_eq!(fl.frames(), 2);
    }

    #[test]
    fn cancel_stops_after_current_frame() {
        let mut fl = FrameLoop::new();
        fl.mark_started();
        assert!(fl.frame_done());
        fl.cancel();
        // The in-flight frame still completes, but nothing is re-armed.
        assert!(!fl.frame_done());
        assert_eq!(fl.frames(), 2);
        assert!(!fl.is_running());
    }

    #[test]
    fn cancel_is_idempotent() {
        let fl = FrameLoop::new();
        fl.cancel();
        fl.cancel();
        assert!(!fl.is_running());
    }
}
