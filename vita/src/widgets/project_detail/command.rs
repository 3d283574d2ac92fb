use crate::components::primitive::fallback_image::{ImageSlot, ImageSource};

/// Commands dispatched to the project detail reducer.
#[derive(Debug, Clone)]
pub(crate) enum ProjectDetailCommand {
    Open { detail_id: String },
    Close,
    Previous,
    Next,
    Select(usize),
    OpenLink(String),
    AutoplayTick,
    ImageLoaded { source: ImageSource, slot: ImageSlot },
    Reset,
}
