use iced::Task;
use vita_ui_menu::{MenuAction, activate};

use super::command::NavigationCommand;
use super::event::NavigationEffect;
use super::state::NavigationState;

/// Reduce a navigation command into state updates and effects.
pub(crate) fn reduce(
    state: &mut NavigationState,
    command: NavigationCommand,
) -> Task<NavigationEffect> {
    match command {
        NavigationCommand::Activate(action) => reduce_activate(state, action),
        NavigationCommand::Hover(key) => {
            state.set_hovered(key);
            Task::none()
        },
    }
}

fn reduce_activate(
    state: &mut NavigationState,
    action: MenuAction,
) -> Task<NavigationEffect> {
    match activate(action, state.expanded_mut()) {
        Some(section_id) => {
            Task::done(NavigationEffect::NavigateRequested { section_id })
        },
        None => Task::none(),
    }
}
