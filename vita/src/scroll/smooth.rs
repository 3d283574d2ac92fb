use std::time::{Duration, Instant};

use crate::motion::ease_out_cubic;

pub(crate) const SCROLL_DURATION: Duration = Duration::from_millis(450);

/// Eased vertical scroll between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SmoothScroll {
    from: f32,
    to: f32,
    started: Instant,
}

impl SmoothScroll {
    pub(crate) fn new(from: f32, to: f32, started: Instant) -> Self {
        Self { from, to, started }
    }

    #[cfg(test)]
    pub(crate) fn target(&self) -> f32 {
        self.to
    }

    pub(crate) fn offset_at(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }

        let elapsed = now.saturating_duration_since(self.started);
        let t = elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32();
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    pub(crate) fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= SCROLL_DURATION
    }
}
