//! Anchor navigation over the content scrollable.

mod highlight;
mod smooth;
mod viewport;

use std::time::Instant;

pub(crate) use highlight::HIGHLIGHT_WINDOW;
pub(crate) use viewport::ViewportMetrics;

use crate::registry::SectionRegistry;
use highlight::Highlight;
use smooth::SmoothScroll;

/// Drives smooth scrolling and the transient navigation highlight.
#[derive(Debug, Default)]
pub(crate) struct ScrollCoordinator {
    viewport: ViewportMetrics,
    animation: Option<SmoothScroll>,
    highlight: Highlight,
}

impl ScrollCoordinator {
    // --- Read access ---

    pub(crate) fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }

    /// Section currently carrying the navigation highlight.
    pub(crate) fn highlighted(&self) -> Option<&str> {
        self.highlight.section()
    }

    pub(crate) fn is_highlighted(&self, id: &str) -> bool {
        self.highlight.is_highlighted(id)
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub(crate) fn has_highlight(&self) -> bool {
        self.highlight.is_active()
    }

    // --- Write access ---

    /// Record scrollable geometry reported by the view or the layout probe.
    pub(crate) fn set_viewport(&mut self, metrics: ViewportMetrics) {
        if self.animation.is_some() {
            // Keep the animated offset authoritative while a scroll runs.
            let offset = self.viewport.offset();
            self.viewport = metrics;
            self.viewport.set_offset(offset);
        } else {
            self.viewport = metrics;
        }
    }

    /// Scroll to the registered section `id` and highlight it.
    ///
    /// Returns the clamped target offset, or `None` when `id` is not
    /// registered.
    pub(crate) fn navigate(
        &mut self,
        registry: &SectionRegistry,
        id: &str,
        now: Instant,
    ) -> Option<f32> {
        let Some(handle) = registry.lookup(id) else {
            log::debug!("navigate: section {id:?} is not registered");
            return None;
        };

        let from = self
            .animation
            .map(|animation| animation.offset_at(now))
            .unwrap_or(self.viewport.offset());
        let to = self.viewport.clamp_offset(handle.top());

        self.animation = Some(SmoothScroll::new(from, to, now));
        self.highlight.clear();
        self.highlight.schedule(id, now);

        Some(to)
    }

    /// Step the running scroll. Returns the offset to apply, if any.
    pub(crate) fn advance(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        let offset = animation.offset_at(now);

        if animation.is_finished(now) {
            self.animation = None;
        }

        self.viewport.set_offset(offset);
        Some(offset)
    }

    /// Revert the highlight once its window elapsed.
    pub(crate) fn expire_highlight(&mut self, now: Instant) -> Option<String> {
        self.highlight.expire(now)
    }

    /// Cancel every running animation.
    pub(crate) fn reset(&mut self) {
        self.animation = None;
        self.highlight.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::registry::SectionHandle;

    fn registry() -> SectionRegistry {
        let mut registry = SectionRegistry::default();
        registry.register("skills", Some(SectionHandle::new(800.0, 400.0)));
        registry.register("other-info", Some(SectionHandle::new(2600.0, 200.0)));
        registry
    }

    fn coordinator() -> ScrollCoordinator {
        let mut coordinator = ScrollCoordinator::default();
        coordinator.set_viewport(ViewportMetrics::new(0.0, 600.0, 2800.0));
        coordinator
    }

    #[test]
    fn given_unregistered_section_when_navigated_then_nothing_changes() {
        let mut coordinator = coordinator();

        let target = coordinator.navigate(&registry(), "missing", Instant::now());

        assert_eq!(target, None);
        assert!(!coordinator.is_animating());
        assert!(!coordinator.has_highlight());
    }

    #[test]
    fn given_registered_section_when_navigated_then_scroll_lands_on_top() {
        let start = Instant::now();
        let mut coordinator = coordinator();

        let target = coordinator.navigate(&registry(), "skills", start);
        let last = coordinator.advance(start + Duration::from_millis(450));

        assert_eq!(target, Some(800.0));
        assert_eq!(last, Some(800.0));
        assert!(!coordinator.is_animating());
        assert_eq!(coordinator.viewport().offset(), 800.0);
    }

    #[test]
    fn given_tail_section_when_navigated_then_target_is_clamped() {
        let mut coordinator = coordinator();

        let target =
            coordinator.navigate(&registry(), "other-info", Instant::now());

        assert_eq!(target, Some(2200.0));
    }

    #[test]
    fn given_navigation_when_window_passes_then_highlight_goes_on_and_off() {
        let start = Instant::now();
        let mut coordinator = coordinator();
        assert!(!coordinator.is_highlighted("skills"));

        coordinator.navigate(&registry(), "skills", start);
        assert!(coordinator.is_highlighted("skills"));

        let reverted = coordinator.expire_highlight(start + HIGHLIGHT_WINDOW);
        assert_eq!(reverted.as_deref(), Some("skills"));
        assert!(!coordinator.is_highlighted("skills"));
    }

    #[test]
    fn given_running_scroll_when_retargeted_then_it_starts_from_current_offset()
    {
        let start = Instant::now();
        let mut coordinator = coordinator();
        coordinator.navigate(&registry(), "other-info", start);
        let mid = start + Duration::from_millis(200);
        let reached = coordinator.advance(mid).unwrap_or_default();

        coordinator.navigate(&registry(), "skills", mid);
        let first = coordinator
            .advance(mid + Duration::from_millis(1))
            .unwrap_or_default();

        assert!((first - reached).abs() < 20.0);
        assert!(coordinator.is_highlighted("skills"));
        assert!(!coordinator.is_highlighted("other-info"));
    }

    #[test]
    fn given_running_scroll_when_viewport_reported_then_offset_is_kept() {
        let start = Instant::now();
        let mut coordinator = coordinator();
        coordinator.navigate(&registry(), "skills", start);
        coordinator.advance(start + Duration::from_millis(100));
        let offset = coordinator.viewport().offset();

        coordinator.set_viewport(ViewportMetrics::new(0.0, 700.0, 2800.0));

        assert_eq!(coordinator.viewport().offset(), offset);
        assert_eq!(coordinator.viewport().height(), 700.0);
    }

    #[test]
    fn given_running_animations_when_reset_then_everything_stops() {
        let mut coordinator = coordinator();
        coordinator.navigate(&registry(), "skills", Instant::now());

        coordinator.reset();

        assert!(!coordinator.is_animating());
        assert!(!coordinator.has_highlight());
    }
}
