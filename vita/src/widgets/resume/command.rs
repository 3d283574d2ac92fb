use crate::scroll::ViewportMetrics;

/// Commands dispatched to the résumé reducer.
#[derive(Debug, Clone)]
pub(crate) enum ResumeCommand {
    ReportViewport(ViewportMetrics),
    RequestDetails { detail_id: String },
}
