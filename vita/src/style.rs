use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color};

use crate::theme::{IcedColorPalette, ThemeProps, with_alpha};

const CARD_RADIUS: f32 = 8.0;
const CARD_BORDER_WIDTH: f32 = 1.0;
const BACKDROP_ALPHA: f32 = 0.72;

/// How strongly a section card is emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Emphasis {
    None,
    /// The section is at least half visible.
    InView,
    /// The section was just navigated to.
    Highlight,
}

/// Return a scrollbar style closure with thin rails and reduced alpha.
pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;
        style.horizontal_rail.border.radius = radius;
        style.horizontal_rail.scroller.border.radius = radius;

        let mut scroller_color = match style.vertical_rail.scroller.background {
            Background::Color(color) => color,
            _ => palette.dim_foreground,
        };
        scroller_color.a = (scroller_color.a * 0.7).min(1.0);
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);
        style.horizontal_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

/// Return a container style for menu rows with selection/hover highlights.
pub(crate) fn menu_row_style(
    palette: &IcedColorPalette,
    is_selected: bool,
    is_hovered: bool,
) -> container::Style {
    let background = if is_selected {
        Some(with_alpha(palette.dim_accent, 0.7).into())
    } else if is_hovered {
        Some(with_alpha(palette.overlay, 0.6).into())
    } else {
        None
    };

    container::Style {
        background,
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}

pub(crate) fn menu_panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 0.0,
            color: palette.overlay,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Card style for a résumé section.
///
/// The border width never changes so emphasis does not shift layout.
pub(crate) fn section_card_style(
    palette: &IcedColorPalette,
    emphasis: Emphasis,
    opacity: f32,
) -> container::Style {
    let (background, border_color) = match emphasis {
        Emphasis::Highlight => (
            with_alpha(palette.highlight, 0.12),
            palette.highlight,
        ),
        Emphasis::InView => {
            (palette.surface, with_alpha(palette.accent, 0.45))
        },
        Emphasis::None => (palette.surface, with_alpha(palette.overlay, 0.8)),
    };

    container::Style {
        background: Some(with_alpha(background, opacity).into()),
        text_color: Some(with_alpha(palette.foreground, opacity)),
        border: Border {
            width: CARD_BORDER_WIDTH,
            color: with_alpha(border_color, opacity),
            radius: CARD_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Translucent layer behind the project detail panel.
pub(crate) fn backdrop_style(palette: &IcedColorPalette) -> container::Style {
    container::Style {
        background: Some(
            with_alpha(Color::BLACK, BACKDROP_ALPHA).into(),
        ),
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}

pub(crate) fn overlay_panel_style(
    palette: &IcedColorPalette,
) -> container::Style {
    container::Style {
        background: Some(palette.background.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: CARD_BORDER_WIDTH,
            color: palette.overlay,
            radius: CARD_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Flat text button that lights up on hover.
pub(crate) fn link_button_style(
    palette: &IcedColorPalette,
    is_selected: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    let accent = palette.accent;
    let overlay = palette.overlay;
    let foreground = palette.foreground;

    move |_theme, status| {
        let hovered =
            matches!(status, button::Status::Hovered | button::Status::Pressed);
        let background = if is_selected || hovered {
            Some(overlay.into())
        } else {
            None
        };

        button::Style {
            background,
            text_color: if hovered { foreground } else { accent },
            border: Border {
                width: CARD_BORDER_WIDTH,
                color: if is_selected { accent } else { Color::TRANSPARENT },
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }
}
