use crate::scroll::ViewportMetrics;

/// UI events emitted by the résumé page.
#[derive(Debug, Clone)]
pub(crate) enum ResumeEvent {
    /// The content scrollable moved or was resized.
    Scrolled(ViewportMetrics),
    /// The "Details" action of a project card was pressed.
    DetailsPressed { detail_id: String },
}

/// Effect events produced by the résumé reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResumeEffect {
    ViewportChanged(ViewportMetrics),
    OpenProjectDetail { detail_id: String },
}
