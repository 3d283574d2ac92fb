use iced::keyboard::{self, Key, key::Named};

use crate::app::AppEvent;
use crate::widgets::project_detail::ProjectDetailCommand;

/// Determines how the event loop treats an incoming event while the project
/// detail overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OverlayGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event.
    Ignore,
}

/// Classify an incoming event when the overlay is open.
pub(crate) fn overlay_guard(event: &AppEvent) -> OverlayGuard {
    use OverlayGuard::*;

    match event {
        // The page underneath must not start a navigation or open another
        // detail through a stale click.
        AppEvent::NavigationUi(_) | AppEvent::NavigationEffect(_) => Ignore,
        AppEvent::ResumeUi(event) => {
            use crate::widgets::resume::ResumeEvent as E;
            match event {
                E::Scrolled(_) => Allow,
                E::DetailsPressed { .. } => Ignore,
            }
        },
        _ => Allow,
    }
}

/// Map a key press to an overlay command: Escape closes, arrows page the
/// carousel.
pub(crate) fn overlay_key_command(
    event: &keyboard::Event,
) -> Option<ProjectDetailCommand> {
    let keyboard::Event::KeyPressed { key, .. } = event else {
        return None;
    };

    match key {
        Key::Named(Named::Escape) => Some(ProjectDetailCommand::Close),
        Key::Named(Named::ArrowLeft) => Some(ProjectDetailCommand::Previous),
        Key::Named(Named::ArrowRight) => Some(ProjectDetailCommand::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::{Location, Modifiers};
    use vita_ui_menu::MenuAction;

    use super::*;
    use crate::scroll::ViewportMetrics;
    use crate::widgets::navigation::NavigationEvent;
    use crate::widgets::resume::ResumeEvent;

    fn pressed(key: Key) -> keyboard::Event {
        keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: Location::Standard,
            modifiers: Modifiers::empty(),
            text: None,
            repeat: false,
        }
    }

    #[test]
    fn given_open_overlay_when_menu_row_pressed_then_event_is_ignored() {
        let event = AppEvent::NavigationUi(NavigationEvent::RowPressed(
            MenuAction::Navigate(String::from("skills")),
        ));

        assert_eq!(overlay_guard(&event), OverlayGuard::Ignore);
    }

    #[test]
    fn given_open_overlay_when_page_scrolls_then_event_is_allowed() {
        let event = AppEvent::ResumeUi(ResumeEvent::Scrolled(
            ViewportMetrics::new(0.0, 600.0, 1800.0),
        ));

        assert_eq!(overlay_guard(&event), OverlayGuard::Allow);
        assert_eq!(
            overlay_guard(&AppEvent::ResumeUi(ResumeEvent::DetailsPressed {
                detail_id: String::from("atlas"),
            })),
            OverlayGuard::Ignore
        );
    }

    #[test]
    fn given_escape_and_arrows_when_mapped_then_overlay_commands_follow() {
        assert!(matches!(
            overlay_key_command(&pressed(Key::Named(Named::Escape))),
            Some(ProjectDetailCommand::Close)
        ));
        assert!(matches!(
            overlay_key_command(&pressed(Key::Named(Named::ArrowLeft))),
            Some(ProjectDetailCommand::Previous)
        ));
        assert!(matches!(
            overlay_key_command(&pressed(Key::Named(Named::ArrowRight))),
            Some(ProjectDetailCommand::Next)
        ));
        assert!(
            overlay_key_command(&pressed(Key::Character("a".into()))).is_none()
        );
    }
}
