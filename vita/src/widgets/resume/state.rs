use crate::content::model::ResumeConfig;
use crate::scroll::ViewportMetrics;

/// Runtime state for the résumé page.
#[derive(Debug)]
pub(crate) struct ResumeState {
    resume: ResumeConfig,
    last_viewport: Option<ViewportMetrics>,
}

impl ResumeState {
    pub(crate) fn new(resume: ResumeConfig) -> Self {
        Self {
            resume,
            last_viewport: None,
        }
    }

    // --- Read access ---

    pub(crate) fn resume(&self) -> &ResumeConfig {
        &self.resume
    }

    #[cfg(test)]
    pub(crate) fn last_viewport(&self) -> Option<ViewportMetrics> {
        self.last_viewport
    }

    // --- Write access ---

    /// Store `viewport`. Returns `false` when nothing changed.
    pub(super) fn set_last_viewport(&mut self, viewport: ViewportMetrics) -> bool {
        if self.last_viewport == Some(viewport) {
            return false;
        }

        self.last_viewport = Some(viewport);
        true
    }
}
