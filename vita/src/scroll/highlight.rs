use std::time::{Duration, Instant};

pub(crate) const HIGHLIGHT_WINDOW: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
struct ActiveHighlight {
    section: String,
    generation: u64,
    revert_at: Instant,
}

/// Transient emphasis applied to the last navigation target.
///
/// Only one highlight exists at a time. Scheduling a new one replaces the
/// previous one, and reverts carry the generation they were scheduled for.
#[derive(Debug, Default)]
pub(crate) struct Highlight {
    active: Option<ActiveHighlight>,
    generation: u64,
}

impl Highlight {
    // --- Read access ---

    pub(crate) fn section(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.section.as_str())
    }

    pub(crate) fn is_highlighted(&self, id: &str) -> bool {
        self.section() == Some(id)
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.is_some()
    }

    // --- Write access ---

    /// Emphasize `section` until `now + HIGHLIGHT_WINDOW`.
    pub(crate) fn schedule(&mut self, section: &str, now: Instant) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.active = Some(ActiveHighlight {
            section: section.to_string(),
            generation: self.generation,
            revert_at: now + HIGHLIGHT_WINDOW,
        });
        self.generation
    }

    /// Clear the highlight only if it still belongs to `generation`.
    pub(crate) fn revert(&mut self, generation: u64) -> Option<String> {
        match &self.active {
            Some(active) if active.generation == generation => {
                self.active.take().map(|active| active.section)
            },
            _ => None,
        }
    }

    /// Revert the highlight whose window has elapsed by `now`.
    pub(crate) fn expire(&mut self, now: Instant) -> Option<String> {
        let generation = self
            .active
            .as_ref()
            .filter(|active| now >= active.revert_at)
            .map(|active| active.generation)?;

        self.revert(generation)
    }

    pub(crate) fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_scheduled_highlight_when_window_elapses_then_it_reverts() {
        let start = Instant::now();
        let mut highlight = Highlight::default();
        highlight.schedule("skills", start);

        assert!(highlight.is_highlighted("skills"));
        assert_eq!(highlight.expire(start + Duration::from_millis(999)), None);
        assert_eq!(
            highlight.expire(start + HIGHLIGHT_WINDOW),
            Some(String::from("skills"))
        );
        assert!(!highlight.is_active());
    }

    #[test]
    fn given_newer_highlight_when_stale_revert_arrives_then_newer_one_survives()
    {
        let start = Instant::now();
        let mut highlight = Highlight::default();
        let stale = highlight.schedule("skills", start);
        highlight.schedule("projects", start + Duration::from_millis(400));

        assert_eq!(highlight.revert(stale), None);
        assert!(highlight.is_highlighted("projects"));
        assert!(!highlight.is_highlighted("skills"));
    }

    #[test]
    fn given_rescheduled_highlight_when_first_window_elapses_then_it_persists()
    {
        let start = Instant::now();
        let mut highlight = Highlight::default();
        highlight.schedule("contact", start);
        highlight.schedule("contact", start + Duration::from_millis(600));

        assert_eq!(highlight.expire(start + HIGHLIGHT_WINDOW), None);
        assert!(highlight.is_highlighted("contact"));
    }
}
