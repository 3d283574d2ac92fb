use vita_ui_menu::{ExpandedKeys, MenuNode};

use crate::content::sections::INITIALLY_EXPANDED;

/// Runtime state for the navigation menu.
#[derive(Debug)]
pub(crate) struct NavigationState {
    nodes: Vec<MenuNode>,
    expanded: ExpandedKeys,
    hovered: Option<String>,
}

impl NavigationState {
    pub(crate) fn new(nodes: Vec<MenuNode>) -> Self {
        Self {
            nodes,
            expanded: INITIALLY_EXPANDED.into_iter().collect(),
            hovered: None,
        }
    }

    // --- Read access ---

    pub(crate) fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    pub(crate) fn expanded(&self) -> &ExpandedKeys {
        &self.expanded
    }

    pub(crate) fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    // --- Write access ---

    pub(super) fn expanded_mut(&mut self) -> &mut ExpandedKeys {
        &mut self.expanded
    }

    pub(super) fn set_hovered(&mut self, key: Option<String>) {
        self.hovered = key;
    }
}
