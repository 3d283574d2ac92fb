pub(crate) mod fallback_image;
pub(crate) mod icon_button;
