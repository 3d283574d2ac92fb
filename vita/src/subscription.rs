use std::time::Duration;

use iced::{Subscription, window};

use crate::app::{App, AppEvent};
use crate::widgets::project_detail::ProjectDetailEvent;
use crate::widgets::project_detail::event::AUTOPLAY_INTERVAL_MS;

/// Poll interval for reverting the navigation highlight.
const HIGHLIGHT_TICK_MS: u64 = 100;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    let mut subs = vec![win_subs, key_subs];

    // Frame clock only while something animates.
    if app.entrance.is_running() || app.coordinator.is_animating() {
        subs.push(window::frames().map(AppEvent::Frame));
    }

    if app.coordinator.has_highlight() {
        let tick = iced::time::every(Duration::from_millis(HIGHLIGHT_TICK_MS))
            .map(AppEvent::HighlightTick);
        subs.push(tick);
    }

    if app.widgets.project_detail.is_open()
        && app.widgets.project_detail.autoplay_active()
    {
        let autoplay =
            iced::time::every(Duration::from_millis(AUTOPLAY_INTERVAL_MS)).map(
                |_| AppEvent::ProjectDetailUi(ProjectDetailEvent::AutoplayTick),
            );
        subs.push(autoplay);
    }

    Subscription::batch(subs)
}
