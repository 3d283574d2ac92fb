use std::time::Instant;

use iced::{Task, window};

use super::{project_detail, scroll};
use crate::app::{App, AppEvent};
use crate::content::sections::SECTION_IDS;
use crate::widgets::project_detail::ProjectDetailCommand;

/// Kick off the first measurement and the entrance fade.
pub(crate) fn handle_ready(app: &mut App) -> Task<AppEvent> {
    app.entrance.start(Instant::now(), SECTION_IDS.len());
    scroll::measure_layout(app)
}

/// Handle window lifecycle events.
pub(crate) fn handle_window(
    app: &mut App,
    event: window::Event,
) -> Task<AppEvent> {
    match event {
        window::Event::Opened { .. } | window::Event::Resized(_) => {
            scroll::measure_layout(app)
        },
        window::Event::CloseRequested => teardown(app).chain(iced::exit()),
        window::Event::Closed => teardown(app),
        _ => Task::none(),
    }
}

/// Drop every session-scoped registration and cancel pending timers.
pub(crate) fn teardown(app: &mut App) -> Task<AppEvent> {
    log::info!("tearing down session state");

    app.registry.clear();
    app.coordinator.reset();
    app.visibility.clear();
    app.entrance.reset();
    app.widgets.navigation.reset();
    project_detail::route_command(app, ProjectDetailCommand::Reset)
}
