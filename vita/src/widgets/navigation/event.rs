use vita_ui_menu::MenuAction;

/// UI events emitted by the menu panel.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    /// A menu row was pressed.
    RowPressed(MenuAction),
    /// The pointer entered (`Some`) or left (`None`) a row.
    RowHovered(Option<String>),
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NavigationEffect {
    /// Scroll the content to the section with this id.
    NavigateRequested { section_id: String },
}
