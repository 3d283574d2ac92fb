use iced::widget::svg;

use crate::content::sections::icon;

pub(crate) const USER: &[u8] = include_bytes!("../assets/svg/user.svg");
pub(crate) const CONTACTS: &[u8] =
    include_bytes!("../assets/svg/contacts.svg");
pub(crate) const TOOL: &[u8] = include_bytes!("../assets/svg/tool.svg");
pub(crate) const BANK: &[u8] = include_bytes!("../assets/svg/bank.svg");
pub(crate) const PROJECT: &[u8] = include_bytes!("../assets/svg/project.svg");
pub(crate) const BOOK: &[u8] = include_bytes!("../assets/svg/book.svg");
pub(crate) const TROPHY: &[u8] = include_bytes!("../assets/svg/trophy.svg");
pub(crate) const WINDOW_CLOSE: &[u8] =
    include_bytes!("../assets/svg/window_close.svg");
pub(crate) const CHEVRON_LEFT: &[u8] =
    include_bytes!("../assets/svg/chevron_left.svg");
pub(crate) const CHEVRON_RIGHT: &[u8] =
    include_bytes!("../assets/svg/chevron_right.svg");
pub(crate) const EXTERNAL_LINK: &[u8] =
    include_bytes!("../assets/svg/external_link.svg");
pub(crate) const IMAGE_PLACEHOLDER: &[u8] =
    include_bytes!("../assets/svg/image_placeholder.svg");
pub(crate) const APP_ICON_DATA: &[u8] =
    include_bytes!("../assets/logo/logo-small.png");

/// Map a symbolic section icon name to its SVG bytes.
pub(crate) fn section_icon_bytes(name: &str) -> Option<&'static [u8]> {
    match name {
        icon::USER => Some(USER),
        icon::CONTACTS => Some(CONTACTS),
        icon::TOOL => Some(TOOL),
        icon::BANK => Some(BANK),
        icon::PROJECT => Some(PROJECT),
        icon::BOOK => Some(BOOK),
        icon::TROPHY => Some(TROPHY),
        _ => None,
    }
}

pub(crate) fn section_icon(name: &str) -> Option<svg::Handle> {
    section_icon_bytes(name).map(svg::Handle::from_memory)
}
