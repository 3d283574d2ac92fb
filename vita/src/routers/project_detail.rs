use iced::Task;

use crate::app::{App, AppEvent};
use crate::components::primitive::fallback_image::{
    self, Fallback, ImageSource,
};
use crate::widgets::project_detail::{
    ProjectDetailCommand, ProjectDetailCtx, ProjectDetailEffect,
    ProjectDetailEvent,
};

/// Route an overlay UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: ProjectDetailEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route an overlay command directly (used by the résumé router and the
/// keyboard handler).
pub(crate) fn route_command(
    app: &mut App,
    command: ProjectDetailCommand,
) -> Task<AppEvent> {
    let ctx = ProjectDetailCtx {
        catalog: &app.catalog,
        content_dir: &app.content_dir,
    };
    app.widgets
        .project_detail
        .reduce(command, &ctx)
        .map(AppEvent::ProjectDetailEffect)
}

/// Route an overlay effect to async image decoding or the desktop opener.
pub(crate) fn route_effect(effect: ProjectDetailEffect) -> Task<AppEvent> {
    match effect {
        ProjectDetailEffect::LoadImages { sources } => load_images(sources),
        ProjectDetailEffect::OpenLink { url } => {
            if let Err(err) = open::that_detached(&url) {
                log::warn!("failed to open {url}: {err}");
            }
            Task::none()
        },
    }
}

fn load_images(sources: Vec<ImageSource>) -> Task<AppEvent> {
    let fallback = Fallback::bundled();
    Task::batch(sources.into_iter().map(|source| {
        fallback_image::load(source, fallback.clone()).map(|(source, slot)| {
            AppEvent::ProjectDetailUi(ProjectDetailEvent::ImageLoaded {
                source,
                slot,
            })
        })
    }))
}

fn map_event_to_command(event: ProjectDetailEvent) -> ProjectDetailCommand {
    use {ProjectDetailCommand as C, ProjectDetailEvent as E};

    match event {
        E::CloseRequested | E::BackdropPressed => C::Close,
        E::PreviousPressed => C::Previous,
        E::NextPressed => C::Next,
        E::ThumbnailPressed(index) => C::Select(index),
        E::LinkPressed(url) => C::OpenLink(url),
        E::AutoplayTick => C::AutoplayTick,
        E::ImageLoaded { source, slot } => C::ImageLoaded { source, slot },
    }
}
