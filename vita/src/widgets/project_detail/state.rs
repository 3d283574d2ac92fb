use crate::components::primitive::fallback_image::ImageCache;

use super::model::{wrap_next, wrap_previous};

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenDetail {
    detail_id: String,
    index: usize,
    count: usize,
}

/// Runtime state for the project detail overlay.
#[derive(Debug, Default)]
pub(crate) struct ProjectDetailState {
    open: Option<OpenDetail>,
    images: ImageCache,
}

impl ProjectDetailState {
    // --- Read access ---

    pub(crate) fn detail_id(&self) -> Option<&str> {
        self.open.as_ref().map(|open| open.detail_id.as_str())
    }

    /// Selected screenshot, `0` while closed.
    pub(crate) fn index(&self) -> usize {
        self.open.as_ref().map_or(0, |open| open.index)
    }

    pub(crate) fn screenshot_count(&self) -> usize {
        self.open.as_ref().map_or(0, |open| open.count)
    }

    pub(crate) fn images(&self) -> &ImageCache {
        &self.images
    }

    // --- Write access ---

    /// Show `detail_id`, replacing any open detail and rewinding the
    /// carousel.
    pub(super) fn open(&mut self, detail_id: String, count: usize) {
        self.open = Some(OpenDetail {
            detail_id,
            index: 0,
            count,
        });
    }

    /// Returns `true` when a detail was open.
    pub(super) fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub(super) fn next(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.index = wrap_next(open.index, open.count);
        }
    }

    pub(super) fn previous(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.index = wrap_previous(open.index, open.count);
        }
    }

    pub(super) fn select(&mut self, index: usize) {
        if let Some(open) = self.open.as_mut() {
            if index < open.count {
                open.index = index;
            }
        }
    }

    pub(super) fn images_mut(&mut self) -> &mut ImageCache {
        &mut self.images
    }

    /// Close the overlay and forget every loaded image.
    pub(super) fn reset(&mut self) {
        self.open = None;
        self.images.clear();
    }
}
