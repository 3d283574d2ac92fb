use iced::Task;

use super::project_detail;
use crate::app::{App, AppEvent};
use crate::guards::overlay_key_command;

/// Handle global key presses. Keys only act while the overlay is open.
pub(crate) fn handle_keyboard(
    app: &mut App,
    event: iced::keyboard::Event,
) -> Task<AppEvent> {
    if !app.widgets.project_detail.is_open() {
        return Task::none();
    }

    match overlay_key_command(&event) {
        Some(command) => project_detail::route_command(app, command),
        None => Task::none(),
    }
}
