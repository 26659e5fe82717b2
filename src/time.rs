//! Clocks and frame timing.
//!
//! The frame loop passes the current time into
//! [`SimulationState::frame`](crate::SimulationState::frame) as a
//! [`Duration`] since startup. [`SystemClock`] supplies it in the real
//! application; [`ManualClock`] lets tests step time explicitly.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source measured from an arbitrary start.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time since creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Frame counter with a periodically refreshed FPS estimate.
#[derive(Debug)]
pub struct FrameTimer {
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Duration,
    fps_update_interval: Duration,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: Duration::ZERO,
            fps_update_interval: Duration::from_secs(1),
        }
    }

    /// Record a frame at `now`.
    ///
    /// Returns the new FPS estimate when it was refreshed this frame.
    pub fn tick(&mut self, now: Duration) -> Option<f32> {
        self.frame_count += 1;

        let since = now.saturating_sub(self.fps_update_time);
        if since < self.fps_update_interval {
            return None;
        }

        let frames = self.frame_count - self.fps_frame_count;
        self.fps = frames as f32 / since.as_secs_f32();
        self.fps_frame_count = self.frame_count;
        self.fps_update_time = now;
        Some(self.fps)
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Most recent FPS estimate.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.advance(Duration::from_millis(16));
        clock.advance(Duration::from_millis(16));
        assert_eq!(clock.now(), Duration::from_millis(32));
        clock.set(Duration::from_secs(5));
        assert_eq!(clock.now(), Duration::from_secs(5));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn fps_refreshes_once_per_interval() {
        let mut timer = FrameTimer::new();
        let frame = Duration::from_micros(16_667);
        let mut refreshed = Vec::new();
        for i in 1..=120u32 {
            if let Some(fps) = timer.tick(frame * i) {
                refreshed.push(fps);
            }
        }
        assert_eq!(timer.frame(), 120);
        assert_eq!(refreshed.len(), 1);
        assert!((refreshed[0] - 60.0).abs() < 1.0);
    }
}
