use std::path::Path;

use iced::Task;

use super::command::ProjectDetailCommand;
use super::errors::ProjectDetailError;
use super::event::ProjectDetailEffect;
use super::model::screenshot_sources;
use super::state::ProjectDetailState;
use crate::content::ProjectCatalog;
use crate::content::model::ProjectDetail;

/// Runtime context for the project detail reducer.
pub(crate) struct ProjectDetailCtx<'a> {
    pub(crate) catalog: &'a ProjectCatalog,
    /// Base for relative screenshot paths.
    pub(crate) content_dir: &'a Path,
}

/// Reduce a project detail command into state updates and effects.
pub(crate) fn reduce(
    state: &mut ProjectDetailState,
    command: ProjectDetailCommand,
    ctx: &ProjectDetailCtx<'_>,
) -> Task<ProjectDetailEffect> {
    match command {
        ProjectDetailCommand::Open { detail_id } => {
            reduce_open(state, detail_id, ctx)
        },
        ProjectDetailCommand::Close => {
            if state.close() {
                log::debug!("project detail closed");
            }
            Task::none()
        },
        ProjectDetailCommand::Previous => {
            state.previous();
            Task::none()
        },
        ProjectDetailCommand::Next | ProjectDetailCommand::AutoplayTick => {
            state.next();
            Task::none()
        },
        ProjectDetailCommand::Select(index) => {
            state.select(index);
            Task::none()
        },
        ProjectDetailCommand::OpenLink(url) => {
            if url.trim().is_empty() {
                return Task::none();
            }
            Task::done(ProjectDetailEffect::OpenLink { url })
        },
        ProjectDetailCommand::ImageLoaded { source, slot } => {
            state.images_mut().resolve(source, slot);
            Task::none()
        },
        ProjectDetailCommand::Reset => {
            state.reset();
            Task::none()
        },
    }
}

fn reduce_open(
    state: &mut ProjectDetailState,
    detail_id: String,
    ctx: &ProjectDetailCtx<'_>,
) -> Task<ProjectDetailEffect> {
    let detail = match find_detail(ctx.catalog, &detail_id) {
        Ok(detail) => detail,
        Err(err) => {
            log::debug!("{err}");
            return Task::none();
        },
    };

    state.open(detail_id, detail.screenshots.len());

    let sources: Vec<_> = screenshot_sources(detail, ctx.content_dir)
        .into_iter()
        .filter(|source| state.images_mut().begin(source))
        .collect();

    if sources.is_empty() {
        return Task::none();
    }

    Task::done(ProjectDetailEffect::LoadImages { sources })
}

fn find_detail<'a>(
    catalog: &'a ProjectCatalog,
    detail_id: &str,
) -> Result<&'a ProjectDetail, ProjectDetailError> {
    catalog
        .get(detail_id)
        .ok_or_else(|| ProjectDetailError::NotFound(detail_id.to_string()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::components::primitive::fallback_image::{
        Fallback, ImageSlot, ImageSource,
    };
    use crate::content::model::Screenshot;

    fn screenshot(id: &str) -> Screenshot {
        Screenshot {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            image_url: format!("screenshots/{id}.png"),
            thumbnail_url: None,
            alt: format!("{id} screen"),
        }
    }

    fn detail(id: &str, shots: usize) -> ProjectDetail {
        ProjectDetail {
            id: id.to_string(),
            name: id.to_string(),
            overview: String::from("overview"),
            description: String::new(),
            features: Vec::new(),
            challenges: Vec::new(),
            solutions: Vec::new(),
            results: Vec::new(),
            technologies: Vec::new(),
            screenshots: (0..shots)
                .map(|index| screenshot(&format!("{id}-{index}")))
                .collect(),
            demo_url: None,
            github_url: None,
            duration: String::from("6 months"),
            team_size: 5,
            role: String::from("Lead"),
            responsibilities: Vec::new(),
        }
    }

    fn catalog() -> ProjectCatalog {
        ProjectCatalog::new(vec![detail("atlas", 3), detail("orbit", 0)])
    }

    fn reduce_with(
        state: &mut ProjectDetailState,
        command: ProjectDetailCommand,
    ) {
        let catalog = catalog();
        let dir = PathBuf::from("/tmp/vita");
        let ctx = ProjectDetailCtx {
            catalog: &catalog,
            content_dir: &dir,
        };
        let _task = reduce(state, command, &ctx);
    }

    fn open(id: &str) -> ProjectDetailCommand {
        ProjectDetailCommand::Open {
            detail_id: id.to_string(),
        }
    }

    #[test]
    fn given_unknown_id_when_opened_then_state_is_unchanged() {
        let mut state = ProjectDetailState::default();

        reduce_with(&mut state, open("missing"));

        assert_eq!(state.detail_id(), None);
        assert_eq!(state.images().len(), 0);
    }

    #[test]
    fn given_open_detail_when_unknown_id_opened_then_current_detail_stays() {
        let mut state = ProjectDetailState::default();
        reduce_with(&mut state, open("atlas"));

        reduce_with(&mut state, open("missing"));

        assert_eq!(state.detail_id(), Some("atlas"));
    }

    #[test]
    fn given_open_detail_when_other_opened_then_it_replaces_and_rewinds() {
        let mut state = ProjectDetailState::default();
        reduce_with(&mut state, open("atlas"));
        reduce_with(&mut state, ProjectDetailCommand::Next);
        assert_eq!(state.index(), 1);

        reduce_with(&mut state, open("orbit"));

        assert_eq!(state.detail_id(), Some("orbit"));
        assert_eq!(state.index(), 0);
        assert_eq!(state.screenshot_count(), 0);
    }

    #[test]
    fn given_first_screenshot_when_previous_then_it_wraps_to_last() {
        let mut state = ProjectDetailState::default();
        reduce_with(&mut state, open("atlas"));

        reduce_with(&mut state, ProjectDetailCommand::Previous);

        assert_eq!(state.index(), 2);
    }

    #[test]
    fn given_out_of_range_thumbnail_when_selected_then_index_is_kept() {
        let mut state = ProjectDetailState::default();
        reduce_with(&mut state, open("atlas"));
        reduce_with(&mut state, ProjectDetailCommand::Select(2));

        reduce_with(&mut state, ProjectDetailCommand::Select(9));

        assert_eq!(state.index(), 2);
    }

    #[test]
    fn given_open_detail_when_closed_then_overlay_is_gone_and_images_stay() {
        let mut state = ProjectDetailState::default();
        reduce_with(&mut state, open("atlas"));

        reduce_with(&mut state, ProjectDetailCommand::Close);

        assert_eq!(state.detail_id(), None);
        assert_eq!(state.images().len(), 3);
    }

    #[test]
    fn given_reopened_detail_when_opened_then_images_are_not_requested_again() {
        let mut state = ProjectDetailState::default();
        reduce_with(&mut state, open("atlas"));
        let source = ImageSource::File(PathBuf::from(
            "/tmp/vita/screenshots/atlas-0.png",
        ));
        reduce_with(
            &mut state,
            ProjectDetailCommand::ImageLoaded {
                source: source.clone(),
                slot: ImageSlot::Fallback(Fallback::bundled()),
            },
        );

        reduce_with(&mut state, ProjectDetailCommand::Close);
        reduce_with(&mut state, open("atlas"));

        assert!(matches!(
            state.images().slot(&source),
            ImageSlot::Fallback(_)
        ));
    }

    #[test]
    fn given_loaded_state_when_reset_then_everything_is_cleared() {
        let mut state = ProjectDetailState::default();
        reduce_with(&mut state, open("atlas"));

        reduce_with(&mut state, ProjectDetailCommand::Reset);

        assert_eq!(state.detail_id(), None);
        assert_eq!(state.images().len(), 0);
    }

    #[test]
    fn given_missing_id_when_looked_up_then_not_found_error_is_returned() {
        let catalog = catalog();

        assert_eq!(
            find_detail(&catalog, "missing").err(),
            Some(ProjectDetailError::NotFound(String::from("missing")))
        );
    }
}
