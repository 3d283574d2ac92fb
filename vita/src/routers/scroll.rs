use std::time::Instant;

use iced::Task;
use iced::advanced::widget::operation::scrollable::AbsoluteOffset;
use iced::widget::operation;

use crate::app::{App, AppEvent};
use crate::content::sections::is_top_level;
use crate::probe::{self, CONTENT_SCROLL_ID, LayoutSnapshot};
use crate::scroll::ViewportMetrics;

/// Measure every anchor the page renders and report it for registration.
pub(crate) fn measure_layout(app: &App) -> Task<AppEvent> {
    probe::measure_sections(app.widgets.resume.anchor_keys())
        .map(AppEvent::LayoutMeasured)
}

/// Replace the registry contents with a fresh measurement.
pub(crate) fn apply_layout(
    app: &mut App,
    snapshot: LayoutSnapshot,
) -> Task<AppEvent> {
    let LayoutSnapshot { sections, viewport } = snapshot;

    app.registry.sync(sections);
    log::debug!("layout measured: {} anchors", app.registry.len());
    app.coordinator.set_viewport(viewport);
    refresh_visibility(app);
    Task::none()
}

/// Record scrollable geometry from the page and re-measure when the content
/// height changed underneath the registry.
pub(crate) fn apply_viewport(
    app: &mut App,
    viewport: ViewportMetrics,
) -> Task<AppEvent> {
    let relayout = app.coordinator.viewport().content_height()
        != viewport.content_height();

    app.coordinator.set_viewport(viewport);
    refresh_visibility(app);

    if relayout { measure_layout(app) } else { Task::none() }
}

/// Start a smooth scroll to `section_id`. Frames drive the motion.
pub(crate) fn navigate_to(app: &mut App, section_id: &str) -> Task<AppEvent> {
    if let Some(target) =
        app.coordinator
            .navigate(&app.registry, section_id, Instant::now())
    {
        log::debug!("navigating to {section_id} at {target:.1}");
    }
    Task::none()
}

/// Step the entrance and the running scroll by one frame.
pub(crate) fn handle_frame(app: &mut App, now: Instant) -> Task<AppEvent> {
    let mut tasks = Vec::new();

    if app.entrance.advance(now) {
        log::debug!("entrance animation finished");
        tasks.push(measure_layout(app));
    }

    if let Some(offset) = app.coordinator.advance(now) {
        tasks.push(operation::scroll_to(
            CONTENT_SCROLL_ID,
            AbsoluteOffset {
                x: None,
                y: Some(offset),
            },
        ));
        refresh_visibility(app);
    }

    Task::batch(tasks)
}

/// Revert the navigation highlight once its window elapsed.
pub(crate) fn handle_highlight_tick(
    app: &mut App,
    now: Instant,
) -> Task<AppEvent> {
    if let Some(section) = app.coordinator.expire_highlight(now) {
        log::debug!("highlight on {section} reverted");
    }
    Task::none()
}

/// Re-evaluate which top-level sections are in view.
pub(crate) fn refresh_visibility(app: &mut App) {
    let viewport = app.coordinator.viewport();
    let sections = app.registry.iter().filter(|(id, _)| is_top_level(id));

    for change in app.visibility.observe(viewport, sections) {
        log::trace!("section {} in view: {}", change.id, change.in_view);
    }
}
