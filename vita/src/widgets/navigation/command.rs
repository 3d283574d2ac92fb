use vita_ui_menu::MenuAction;

/// Commands dispatched to the navigation reducer.
#[derive(Debug, Clone)]
pub(crate) enum NavigationCommand {
    Activate(MenuAction),
    Hover(Option<String>),
}
