use super::model::{ProjectDetail, TechCategory, TechStackItem};

/// Per-category share of a project's technology composition.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryStats<'a> {
    pub(crate) category: TechCategory,
    /// Sum of the author-asserted percentages, not normalized.
    pub(crate) total: f32,
    pub(crate) items: Vec<&'a TechStackItem>,
}

/// Lookup table of project detail records keyed by detail id.
#[derive(Debug, Clone, Default)]
pub(crate) struct ProjectCatalog {
    details: Vec<ProjectDetail>,
}

impl ProjectCatalog {
    pub(crate) fn new(details: Vec<ProjectDetail>) -> Self {
        let mut unique: Vec<ProjectDetail> = Vec::with_capacity(details.len());
        for detail in details {
            if let Some(existing) =
                unique.iter_mut().find(|known| known.id == detail.id)
            {
                log::warn!(
                    "duplicate project detail id {:?}, keeping the last one",
                    detail.id
                );
                *existing = detail;
            } else {
                unique.push(detail);
            }
        }

        Self { details: unique }
    }

    /// Return the detail record for `id`, if one exists.
    pub(crate) fn get(&self, id: &str) -> Option<&ProjectDetail> {
        self.details.iter().find(|detail| detail.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.details.len()
    }
}

/// Group `items` by category in first-seen order.
pub(crate) fn tech_stack_stats(
    items: &[TechStackItem],
) -> Vec<CategoryStats<'_>> {
    let mut stats: Vec<CategoryStats<'_>> = Vec::new();

    for item in items {
        match stats.iter_mut().find(|entry| entry.category == item.category) {
            Some(entry) => {
                entry.total += item.percentage;
                entry.items.push(item);
            },
            None => stats.push(CategoryStats {
                category: item.category,
                total: item.percentage,
                items: vec![item],
            }),
        }
    }

    stats
}
