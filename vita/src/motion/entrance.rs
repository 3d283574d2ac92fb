use std::time::{Duration, Instant};

use super::easing::ease_out_back;

pub(crate) const ENTRANCE_DURATION: Duration = Duration::from_millis(800);
pub(crate) const ENTRANCE_STAGGER: Duration = Duration::from_millis(150);

/// Staggered fade-in of the top-level sections.
///
/// Progress is sampled against the last frame instant so views stay pure.
#[derive(Debug, Default)]
pub(crate) struct Entrance {
    started: Option<Instant>,
    now: Option<Instant>,
    sections: usize,
}

impl Entrance {
    pub(crate) fn start(&mut self, now: Instant, sections: usize) {
        self.started = Some(now);
        self.now = Some(now);
        self.sections = sections;
    }

    /// Record a frame. Returns `true` on the frame that completes the run.
    pub(crate) fn advance(&mut self, now: Instant) -> bool {
        let was_running = self.is_running();
        self.now = Some(now);
        was_running && !self.is_running()
    }

    pub(crate) fn is_running(&self) -> bool {
        match (self.started, self.now) {
            (Some(started), Some(now)) => {
                now.saturating_duration_since(started) < self.total()
            },
            _ => false,
        }
    }

    /// Opacity of the section at `index`, in `0.0..=1.0`.
    pub(crate) fn opacity(&self, index: usize) -> f32 {
        let (Some(started), Some(now)) = (self.started, self.now) else {
            return 1.0;
        };

        let delay = ENTRANCE_STAGGER * index as u32;
        let elapsed = now.saturating_duration_since(started);
        let Some(local) = elapsed.checked_sub(delay) else {
            return 0.0;
        };

        let t = local.as_secs_f32() / ENTRANCE_DURATION.as_secs_f32();
        ease_out_back(t).clamp(0.0, 1.0)
    }

    /// Forget the run; every section renders fully opaque afterwards.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    fn total(&self) -> Duration {
        let last = self.sections.saturating_sub(1) as u32;
        ENTRANCE_STAGGER * last + ENTRANCE_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_idle_entrance_when_sampled_then_sections_are_opaque() {
        let entrance = Entrance::default();
        assert_eq!(entrance.opacity(3), 1.0);
        assert!(!entrance.is_running());
    }

    #[test]
    fn given_started_entrance_when_sampled_then_later_sections_lag() {
        let start = Instant::now();
        let mut entrance = Entrance::default();
        entrance.start(start, 7);

        entrance.advance(start + Duration::from_millis(300));

        assert!(entrance.opacity(0) > entrance.opacity(1));
        assert_eq!(entrance.opacity(2), 0.0);
        assert!(entrance.is_running());
    }

    #[test]
    fn given_last_section_done_when_advanced_then_completion_is_reported_once()
    {
        let start = Instant::now();
        let mut entrance = Entrance::default();
        entrance.start(start, 3);

        let end = start + ENTRANCE_STAGGER * 2 + ENTRANCE_DURATION;
        assert!(entrance.advance(end));
        assert!(!entrance.advance(end + Duration::from_millis(16)));
        assert_eq!(entrance.opacity(2), 1.0);
    }
}
