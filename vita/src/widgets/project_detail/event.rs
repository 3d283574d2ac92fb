use crate::components::primitive::fallback_image::{ImageSlot, ImageSource};

/// Carousel autoplay interval.
pub(crate) const AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// UI events emitted by the project detail overlay.
#[derive(Debug, Clone)]
pub(crate) enum ProjectDetailEvent {
    CloseRequested,
    BackdropPressed,
    PreviousPressed,
    NextPressed,
    ThumbnailPressed(usize),
    LinkPressed(String),
    AutoplayTick,
    ImageLoaded { source: ImageSource, slot: ImageSlot },
}

/// Effect events produced by the project detail reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ProjectDetailEffect {
    /// Decode these sources off the update loop.
    LoadImages { sources: Vec<ImageSource> },
    /// Hand a demo or source link to the desktop.
    OpenLink { url: String },
}
