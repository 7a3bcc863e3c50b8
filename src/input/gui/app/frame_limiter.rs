use std::time::{Duration, Instant};

/// Paces redraws to a fixed frame rate without accumulating drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLimiter {
    frame_duration: Duration,
    next_frame: Instant,
}

impl FrameLimiter {
    /// A zero frame rate is treated as one frame per second.
    #[must_use]
    pub fn new(frames_per_second: u32, now: Instant) -> Self {
        Self {
            frame_duration: Duration::from_secs(1) / frames_per_second.max(1),
            next_frame: now,
        }
    }

    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    #[must_use]
    pub fn next_deadline(&self) -> Instant {
        self.next_frame
    }

    #[must_use]
    pub fn frame_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Schedules the next frame. When more than a frame behind, the schedule
    /// restarts from `now` instead of bursting to catch up.
    pub fn mark_frame(&mut self, now: Instant) {
        self.next_frame += self.frame_duration;

        if self.next_frame < now {
            self.next_frame = now + self.frame_duration;
        }
    }
}
