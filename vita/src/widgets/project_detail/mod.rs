mod errors;
pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::ProjectDetailCommand;
pub(crate) use event::{ProjectDetailEffect, ProjectDetailEvent};
use iced::Task;
pub(crate) use reducer::ProjectDetailCtx;
use state::ProjectDetailState;

/// Project detail widget: the full-window overlay with the screenshot
/// carousel and the technology chart of one project.
pub(crate) struct ProjectDetailWidget {
    state: ProjectDetailState,
}

impl ProjectDetailWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: ProjectDetailState::default(),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: ProjectDetailCommand,
        ctx: &ProjectDetailCtx<'_>,
    ) -> Task<ProjectDetailEffect> {
        reducer::reduce(&mut self.state, command, ctx)
    }

    /// Return the overlay view model, or `None` while closed.
    pub(crate) fn vm<'a>(
        &'a self,
        ctx: &ProjectDetailCtx<'a>,
    ) -> Option<model::ProjectDetailViewModel<'a>> {
        let detail_id = self.state.detail_id()?;
        let detail = ctx.catalog.get(detail_id)?;

        Some(model::ProjectDetailViewModel {
            detail,
            index: self.state.index(),
            images: self.state.images(),
            content_dir: ctx.content_dir,
        })
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.detail_id().is_some()
    }

    /// Whether the carousel should advance on its own.
    pub(crate) fn autoplay_active(&self) -> bool {
        self.state.screenshot_count() > 1
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &ProjectDetailState {
        &self.state
    }
}
