//! Frame timing and periodic statistics.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frame statistics emitted once per reporting interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub fps: f64,
    pub frame_time_ms: f64,
    pub worst_frame_ms: f64,
    pub frames: u64,
}

/// Rolling window of frame durations plus a reporting cadence.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Option<Instant>,
    last_report: Instant,
    report_interval: Option<Duration>,
    total_frames: u64,
    max_samples: usize,
}

impl FrameTimer {
    /// `report_interval_secs <= 0` disables reports.
    pub fn new(report_interval_secs: f64) -> Self {
        Self::starting_at(Instant::now(), report_interval_secs)
    }

    fn starting_at(now: Instant, report_interval_secs: f64) -> Self {
        let report_interval = Duration::try_from_secs_f64(report_interval_secs)
            .ok()
            .filter(|d| !d.is_zero());
        Self {
            frame_times: VecDeque::new(),
            last_frame: None,
            last_report: now,
            report_interval,
            total_frames: 0,
            max_samples: 240,
        }
    }

    /// Record a frame at `now`. Returns a report when the interval has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<FrameReport> {
        if let Some(last) = self.last_frame {
            self.frame_times.push_back(now.saturating_duration_since(last));
            if self.frame_times.len() > self.max_samples {
                self.frame_times.pop_front();
            }
        }
        self.last_frame = Some(now);
        self.total_frames += 1;

        let interval = self.report_interval?;
        if now.saturating_duration_since(self.last_report) < interval {
            return None;
        }
        self.last_report = now;
        Some(self.report())
    }

    pub fn report(&self) -> FrameReport {
        FrameReport {
            fps: self.fps(),
            frame_time_ms: self.frame_time_ms(),
            worst_frame_ms: self
                .frame_times
                .iter()
                .max()
                .map_or(0.0, |d| d.as_secs_f64() * 1000.0),
            frames: self.total_frames,
        }
    }

    pub fn fps(&self) -> f64 {
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        total / self.frame_times.len() as f64 * 1000.0
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}
