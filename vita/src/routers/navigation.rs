use iced::Task;

use super::scroll;
use crate::app::{App, AppEvent};
use crate::widgets::navigation::{
    NavigationCommand, NavigationEffect, NavigationEvent,
};

/// Route a menu UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: NavigationEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

pub(crate) fn route_command(
    app: &mut App,
    command: NavigationCommand,
) -> Task<AppEvent> {
    app.widgets
        .navigation
        .reduce(command)
        .map(AppEvent::NavigationEffect)
}

/// Route a navigation effect to the scroll coordinator.
pub(crate) fn route_effect(
    app: &mut App,
    effect: NavigationEffect,
) -> Task<AppEvent> {
    match effect {
        NavigationEffect::NavigateRequested { section_id } => {
            scroll::navigate_to(app, &section_id)
        },
    }
}

fn map_event_to_command(event: NavigationEvent) -> NavigationCommand {
    use {NavigationCommand as C, NavigationEvent as E};

    match event {
        E::RowPressed(action) => C::Activate(action),
        E::RowHovered(key) => C::Hover(key),
    }
}
