use std::collections::HashMap;

/// Vertical extent of a rendered section inside the scroll content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SectionHandle {
    top: f32,
    height: f32,
}

impl SectionHandle {
    pub(crate) fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    /// Offset of the section's top edge from the content top.
    pub(crate) fn top(&self) -> f32 {
        self.top
    }

    pub(crate) fn height(&self) -> f32 {
        self.height
    }

    pub(crate) fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Session-scoped map from section id to its layout handle.
///
/// Registration order is not guaranteed relative to navigation, so lookups
/// for ids that were never registered are a normal state.
#[derive(Debug, Default)]
pub(crate) struct SectionRegistry {
    entries: HashMap<String, SectionHandle>,
}

impl SectionRegistry {
    /// Store `handle` for `id`, or drop the entry when `handle` is `None`.
    ///
    /// The last registration for an id wins.
    pub(crate) fn register(&mut self, id: &str, handle: Option<SectionHandle>) {
        match handle {
            Some(handle) => {
                self.entries.insert(id.to_string(), handle);
            },
            None => {
                self.entries.remove(id);
            },
        }
    }

    pub(crate) fn lookup(&self, id: &str) -> Option<SectionHandle> {
        self.entries.get(id).copied()
    }

    /// Register every measured section and deregister the ones that
    /// disappeared from the layout.
    pub(crate) fn sync(&mut self, measured: Vec<(String, SectionHandle)>) {
        let stale: Vec<String> = self
            .entries
            .keys()
            .filter(|id| !measured.iter().any(|(seen, _)| seen == *id))
            .cloned()
            .collect();

        for id in stale {
            self.register(&id, None);
        }

        for (id, handle) in measured {
            self.register(&id, Some(handle));
        }
    }

    /// Drop every entry.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, SectionHandle)> {
        self.entries
            .iter()
            .map(|(id, handle)| (id.as_str(), *handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_registered_section_when_looked_up_then_handle_is_returned() {
        let mut registry = SectionRegistry::default();
        registry.register("skills", Some(SectionHandle::new(120.0, 300.0)));

        assert_eq!(
            registry.lookup("skills"),
            Some(SectionHandle::new(120.0, 300.0))
        );
        assert_eq!(registry.lookup("contact"), None);
    }

    #[test]
    fn given_duplicate_registration_when_looked_up_then_last_one_wins() {
        let mut registry = SectionRegistry::default();
        registry.register("projects", Some(SectionHandle::new(10.0, 5.0)));
        registry.register("projects", Some(SectionHandle::new(40.0, 5.0)));

        assert_eq!(registry.lookup("projects").map(|h| h.top()), Some(40.0));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn given_none_handle_when_registered_then_entry_is_removed() {
        let mut registry = SectionRegistry::default();
        registry.register("contact", Some(SectionHandle::new(0.0, 10.0)));

        registry.register("contact", None);
        registry.register("never-mounted", None);

        assert!(registry.is_empty());
    }

    #[test]
    fn given_measurement_without_section_when_synced_then_section_is_dropped() {
        let mut registry = SectionRegistry::default();
        registry.register("contact", Some(SectionHandle::new(0.0, 10.0)));
        registry.register("skills", Some(SectionHandle::new(10.0, 10.0)));

        registry.sync(vec![(
            String::from("skills"),
            SectionHandle::new(12.0, 10.0),
        )]);

        assert_eq!(registry.lookup("contact"), None);
        assert_eq!(registry.lookup("skills").map(|h| h.top()), Some(12.0));
    }

    #[test]
    fn given_negative_height_when_handle_built_then_height_is_clamped() {
        let handle = SectionHandle::new(50.0, -4.0);
        assert_eq!(handle.height(), 0.0);
        assert_eq!(handle.bottom(), 50.0);
    }
}
