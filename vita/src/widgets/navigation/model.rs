use vita_ui_menu::{ExpandedKeys, MenuNode};

/// Read-only view model for the menu panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavigationViewModel<'a> {
    pub(crate) nodes: &'a [MenuNode],
    pub(crate) expanded: &'a ExpandedKeys,
    pub(crate) hovered: Option<&'a str>,
    pub(crate) active: Option<&'a str>,
}
