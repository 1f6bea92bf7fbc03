//! Frame time source.

use std::time::Instant;

use globe_config::schema::TimeSource;

/// Supplies the `t_secs` fed to the per-frame update.
#[derive(Debug, Clone)]
pub struct FrameClock {
    source: TimeSource,
    started: Instant,
}

impl FrameClock {
    pub fn new(source: TimeSource) -> Self {
        Self {
            source,
            started: Instant::now(),
        }
    }

    pub fn source(&self) -> TimeSource {
        self.source
    }

    /// Current animation time in seconds.
    pub fn now_secs(&self) -> f64 {
        match self.source {
            TimeSource::Elapsed => self.started.elapsed().as_secs_f64(),
            TimeSource::WallClock => chrono::Utc::now().timestamp_millis() as f64 / 1000.0,
        }
    }
}
