use std::collections::BTreeSet;

use crate::registry::SectionHandle;
use crate::scroll::ViewportMetrics;

/// Fraction of a section's height that must be on screen to count as in view.
pub(crate) const VISIBILITY_THRESHOLD: f32 = 0.5;

/// One in-view/out-of-view crossing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VisibilityChange {
    pub(crate) id: String,
    pub(crate) in_view: bool,
}

/// Tracks which sections are at least half visible.
#[derive(Debug, Default)]
pub(crate) struct VisibilityWatcher {
    in_view: BTreeSet<String>,
}

impl VisibilityWatcher {
    pub(crate) fn is_in_view(&self, id: &str) -> bool {
        self.in_view.contains(id)
    }

    /// Re-evaluate `sections` against `viewport` and report crossings.
    pub(crate) fn observe<'a>(
        &mut self,
        viewport: ViewportMetrics,
        sections: impl IntoIterator<Item = (&'a str, SectionHandle)>,
    ) -> Vec<VisibilityChange> {
        let mut changes = Vec::new();
        let mut seen = BTreeSet::new();

        for (id, handle) in sections {
            seen.insert(id.to_string());
            let in_view = visible_fraction(handle, viewport) >= VISIBILITY_THRESHOLD;
            let was_in_view = self.in_view.contains(id);

            if in_view == was_in_view {
                continue;
            }

            if in_view {
                self.in_view.insert(id.to_string());
            } else {
                self.in_view.remove(id);
            }
            changes.push(VisibilityChange {
                id: id.to_string(),
                in_view,
            });
        }

        // Sections that left the layout are no longer observed.
        let gone: Vec<String> = self
            .in_view
            .iter()
            .filter(|id| !seen.contains(*id))
            .cloned()
            .collect();
        for id in gone {
            self.in_view.remove(&id);
            changes.push(VisibilityChange { id, in_view: false });
        }

        changes
    }

    pub(crate) fn clear(&mut self) {
        self.in_view.clear();
    }
}

/// Share of `handle`'s height inside the viewport, in `0.0..=1.0`.
pub(crate) fn visible_fraction(
    handle: SectionHandle,
    viewport: ViewportMetrics,
) -> f32 {
    if handle.height() <= 0.0 {
        return 0.0;
    }

    let top = viewport.offset();
    let bottom = top + viewport.height();
    let overlap = handle.bottom().min(bottom) - handle.top().max(top);

    (overlap / handle.height()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_half_visible_section_when_observed_then_it_counts_as_in_view() {
        let mut watcher = VisibilityWatcher::default();
        let viewport = ViewportMetrics::new(0.0, 500.0, 3000.0);

        let skills = SectionHandle::new(300.0, 400.0);
        let changes = watcher.observe(viewport, [("skills", skills)]);

        assert_eq!(
            changes,
            vec![VisibilityChange {
                id: String::from("skills"),
                in_view: true,
            }]
        );
        assert!(watcher.is_in_view("skills"));
    }

    #[test]
    fn given_steady_viewport_when_observed_twice_then_no_repeat_changes() {
        let mut watcher = VisibilityWatcher::default();
        let viewport = ViewportMetrics::new(0.0, 500.0, 3000.0);
        let sections = [("contact", SectionHandle::new(0.0, 200.0))];

        assert_eq!(watcher.observe(viewport, sections).len(), 1);
        assert!(watcher.observe(viewport, sections).is_empty());
    }

    #[test]
    fn given_scrolled_past_section_when_observed_then_it_leaves_view() {
        let mut watcher = VisibilityWatcher::default();
        let sections = [
            ("contact", SectionHandle::new(0.0, 200.0)),
            ("skills", SectionHandle::new(600.0, 200.0)),
        ];
        watcher.observe(ViewportMetrics::new(0.0, 500.0, 3000.0), sections);

        let changes =
            watcher.observe(ViewportMetrics::new(450.0, 500.0, 3000.0), sections);

        assert!(changes.contains(&VisibilityChange {
            id: String::from("contact"),
            in_view: false,
        }));
        assert!(changes.contains(&VisibilityChange {
            id: String::from("skills"),
            in_view: true,
        }));
    }

    #[test]
    fn given_unmounted_section_when_observed_then_it_is_reported_out_of_view() {
        let mut watcher = VisibilityWatcher::default();
        let viewport = ViewportMetrics::new(0.0, 500.0, 3000.0);
        watcher.observe(viewport, [("education", SectionHandle::new(0.0, 100.0))]);

        let changes =
            watcher.observe(viewport, Vec::<(&str, SectionHandle)>::new());

        assert_eq!(
            changes,
            vec![VisibilityChange {
                id: String::from("education"),
                in_view: false,
            }]
        );
    }

    #[test]
    fn given_zero_height_section_when_measured_then_fraction_is_zero() {
        let viewport = ViewportMetrics::new(0.0, 500.0, 3000.0);
        assert_eq!(visible_fraction(SectionHandle::new(10.0, 0.0), viewport), 0.0);
    }
}
