use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds (clamped).
    pub dt: f32,

    /// Zero-based index of this frame.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Interaction steps in the demos are per frame, not per second; `dt` only
/// feeds the slow-frame diagnostics.
///
/// Delta time is clamped so a stall (debugger, minimized window) doesn't
/// produce a huge value.
#[derive(Debug, Clone)]
pub struct FrameClock {
    started: Instant,
    last: Instant,
    frames: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0.1 ms to 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            started: now,
            last: now,
            frames: 0,
            dt_min,
            dt_max,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frames,
        };
        self.frames = self.frames.wrapping_add(1);
        ft
    }

    /// Number of ticks so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Mean frames per second since the clock was created, if any time passed.
    pub fn average_fps(&self) -> Option<f64> {
        let secs = self.last.saturating_duration_since(self.started).as_secs_f64();
        (secs > 0.0 && self.frames > 0).then(|| self.frames as f64 / secs)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
