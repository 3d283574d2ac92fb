use iced::Task;

use super::{App, AppEvent};
use crate::guards::{OverlayGuard, overlay_guard};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    if app.widgets.project_detail.is_open()
        && overlay_guard(&event) == OverlayGuard::Ignore
    {
        return Task::none();
    }

    route(app, event)
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => routers::window::handle_ready(app),
        // Navigation widget
        AppEvent::NavigationUi(event) => {
            routers::navigation::route_event(app, event)
        },
        AppEvent::NavigationEffect(effect) => {
            routers::navigation::route_effect(app, effect)
        },
        // Resume widget
        AppEvent::ResumeUi(event) => routers::resume::route_event(app, event),
        AppEvent::ResumeEffect(effect) => {
            routers::resume::route_effect(app, effect)
        },
        // Project detail widget
        AppEvent::ProjectDetailUi(event) => {
            routers::project_detail::route_event(app, event)
        },
        AppEvent::ProjectDetailEffect(effect) => {
            routers::project_detail::route_effect(effect)
        },
        AppEvent::ProjectDetailCommand(command) => {
            routers::project_detail::route_command(app, command)
        },
        // Scroll coordination
        AppEvent::LayoutMeasured(snapshot) => {
            routers::scroll::apply_layout(app, snapshot)
        },
        AppEvent::Frame(now) => routers::scroll::handle_frame(app, now),
        AppEvent::HighlightTick(now) => {
            routers::scroll::handle_highlight_tick(app, now)
        },
        // Direct operations
        AppEvent::Keyboard(event) => {
            routers::keyboard::handle_keyboard(app, event)
        },
        AppEvent::Window(event) => routers::window::handle_window(app, event),
    }
}
