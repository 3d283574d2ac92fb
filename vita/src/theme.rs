use iced::theme::Palette;
use iced::{Color, Theme};

/// Palette in hex form, the way colors appear in content files.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) overlay: String,
    pub(crate) accent: String,
    pub(crate) dim_accent: String,
    pub(crate) dim_foreground: String,
    pub(crate) highlight: String,
    pub(crate) green: String,
    pub(crate) red: String,
    pub(crate) yellow: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            surface: String::from("#1C1F2B"),
            overlay: String::from("#232530"),
            accent: String::from("#4FA6ED"),
            dim_accent: String::from("#2F638F"),
            dim_foreground: String::from("#6B7280"),
            highlight: String::from("#E5C07B"),
            green: String::from("#98C379"),
            red: String::from("#E06C75"),
            yellow: String::from("#E5C07B"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) overlay: Color,
    pub(crate) accent: Color,
    pub(crate) dim_accent: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) highlight: Color,
    pub(crate) green: Color,
    pub(crate) red: Color,
    pub(crate) yellow: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: hex_or(&p.foreground, Color::WHITE),
            background: hex_or(&p.background, Color::BLACK),
            surface: hex_or(&p.surface, Color::BLACK),
            overlay: hex_or(&p.overlay, Color::BLACK),
            accent: hex_or(&p.accent, Color::WHITE),
            dim_accent: hex_or(&p.dim_accent, Color::WHITE),
            dim_foreground: hex_or(&p.dim_foreground, Color::WHITE),
            highlight: hex_or(&p.highlight, Color::WHITE),
            green: hex_or(&p.green, Color::WHITE),
            red: hex_or(&p.red, Color::WHITE),
            yellow: hex_or(&p.yellow, Color::WHITE),
        }
    }
}

/// Application theme shared by every widget view.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        let raw_palette = ColorPalette::default();

        Self {
            id: String::from("default"),
            iced_palette: IcedColorPalette::from(&raw_palette),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(self)
    }
}

/// Theme props passed through App -> Widget -> View.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`; the leading `#` is optional.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel =
        |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match hex.len() {
        6 => Some(Color::from_rgb8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
        )),
        8 => Some(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            f32::from(channel(6..8)?) / 255.0,
        )),
        _ => None,
    }
}

/// Parse a hex color, logging and using `fallback` when it is malformed.
pub(crate) fn hex_or(value: &str, fallback: Color) -> Color {
    parse_hex_color(value).unwrap_or_else(|| {
        log::warn!("invalid hex color {value:?}, using fallback");
        fallback
    })
}

/// Return `color` with its alpha multiplied by `factor`.
pub(crate) fn with_alpha(mut color: Color, factor: f32) -> Color {
    color.a = (color.a * factor).clamp(0.0, 1.0);
    color
}
