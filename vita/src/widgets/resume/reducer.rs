use iced::Task;

use super::command::ResumeCommand;
use super::event::ResumeEffect;
use super::state::ResumeState;

/// Reduce a résumé command into state updates and effects.
pub(crate) fn reduce(
    state: &mut ResumeState,
    command: ResumeCommand,
) -> Task<ResumeEffect> {
    match command {
        ResumeCommand::ReportViewport(viewport) => {
            if !state.set_last_viewport(viewport) {
                return Task::none();
            }

            Task::done(ResumeEffect::ViewportChanged(viewport))
        },
        ResumeCommand::RequestDetails { detail_id } => {
            let known = state.resume().projects.iter().any(|project| {
                project.detail_id.as_deref() == Some(detail_id.as_str())
            });
            if !known {
                log::debug!("details requested for unlisted project {detail_id}");
            }

            Task::done(ResumeEffect::OpenProjectDetail { detail_id })
        },
    }
}
