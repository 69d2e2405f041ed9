use std::time::Duration;

/// Averaged timings over one reporting window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StatsReport {
    pub fps: f32,
    pub frame_ms: f32,
    pub frames: u32,
}

/// Accumulates frame deltas and emits a report once per window.
#[derive(Debug, Clone)]
pub struct FrameStats {
    window: f32,
    elapsed: f32,
    frames: u32,
}

impl FrameStats {
    pub fn new(window: Duration) -> Self {
        Self {
            window: window.as_secs_f32().max(f32::EPSILON),
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Records one frame of `dt` seconds. Returns a report when the window fills.
    pub fn record(&mut self, dt: f32) -> Option<StatsReport> {
        self.elapsed += dt.max(0.0);
        self.frames += 1;

        if self.elapsed < self.window {
            return None;
        }

        let report = StatsReport {
            fps: self.frames as f32 / self.elapsed,
            frame_ms: self.elapsed * 1000.0 / self.frames as f32,
            frames: self.frames,
        };
        self.elapsed = 0.0;
        self.frames = 0;
        Some(report)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_report_before_window_fills() {
        let mut stats = FrameStats::default();
        for _ in 0..10 {
            assert!(stats.record(0.05).is_none());
        }
    }

    #[test]
    fn report_averages_the_window() {
        let mut stats = FrameStats::new(Duration::from_millis(100));
        assert!(stats.record(0.025).is_none());
        assert!(stats.record(0.025).is_none());
        assert!(stats.record(0.025).is_none());
        let report = stats.record(0.025).expect("window filled");
        assert_eq!(report.frames, 4);
        assert!((report.fps - 40.0).abs() < 1e-3);
        assert!((report.frame_ms - 25.0).abs() < 1e-3);
    }

    #[test]
    fn window_resets_after_report() {
        let mut stats = FrameStats::new(Duration::from_millis(10));
        assert!(stats.record(0.02).is_some());
        assert!(stats.record(0.001).is_none());
    }
}
