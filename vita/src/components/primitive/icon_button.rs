use iced::widget::{button, container, svg};
use iced::{Element, Length, alignment};

use crate::theme::{IcedColorPalette, ThemeProps};

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) enum IconButtonVariant {
    Standard,
    Danger,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

const ICON_BUTTON_PADDING: f32 = 0.0;
const ICON_BUTTON_RADIUS: f32 = 4.0;

/// Render a square icon button used by overlay controls.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let (base_color, hover_color) = resolve_variant_colors(props.variant, palette);
    let hover_background = palette.overlay;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(hover_background.into())
                },
                _ => None,
            };

            button::Style {
                background,
                border: iced::Border {
                    radius: ICON_BUTTON_RADIUS.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    palette: &IcedColorPalette,
) -> (iced::Color, iced::Color) {
    match variant {
        IconButtonVariant::Standard => (palette.dim_foreground, palette.accent),
        IconButtonVariant::Danger => (palette.dim_foreground, palette.red),
    }
}

#[cfg(test)]
mod tests {
    use super::{IconButtonVariant, resolve_variant_colors};
    use crate::theme::AppTheme;

    #[test]
    fn given_standard_variant_when_resolving_then_hover_uses_accent() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let (base, hover) =
            resolve_variant_colors(IconButtonVariant::Standard, palette);

        assert_eq!(base, palette.dim_foreground);
        assert_eq!(hover, palette.accent);
    }

    #[test]
    fn given_danger_variant_when_resolving_then_hover_uses_danger() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let (_, hover) = resolve_variant_colors(IconButtonVariant::Danger, palette);

        assert_eq!(hover, palette.red);
    }
}
