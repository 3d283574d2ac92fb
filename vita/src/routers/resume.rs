use iced::Task;

use super::scroll;
use crate::app::{App, AppEvent};
use crate::widgets::project_detail::ProjectDetailCommand;
use crate::widgets::resume::{ResumeCommand, ResumeEffect, ResumeEvent};

/// Route a résumé page UI event through the widget reducer.
pub(crate) fn route_event(app: &mut App, event: ResumeEvent) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

pub(crate) fn route_command(
    app: &mut App,
    command: ResumeCommand,
) -> Task<AppEvent> {
    app.widgets.resume.reduce(command).map(AppEvent::ResumeEffect)
}

/// Route a résumé effect to the scroll state or the detail overlay.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ResumeEffect,
) -> Task<AppEvent> {
    match effect {
        ResumeEffect::ViewportChanged(viewport) => {
            scroll::apply_viewport(app, viewport)
        },
        ResumeEffect::OpenProjectDetail { detail_id } => Task::done(
            AppEvent::ProjectDetailCommand(ProjectDetailCommand::Open {
                detail_id,
            }),
        ),
    }
}

fn map_event_to_command(event: ResumeEvent) -> ResumeCommand {
    use {ResumeCommand as C, ResumeEvent as E};

    match event {
        E::Scrolled(viewport) => C::ReportViewport(viewport),
        E::DetailsPressed { detail_id } => C::RequestDetails { detail_id },
    }
}
