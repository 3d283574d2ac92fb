pub(crate) mod keyboard;
pub(crate) mod navigation;
pub(crate) mod project_detail;
pub(crate) mod resume;
pub(crate) mod scroll;
pub(crate) mod window;
