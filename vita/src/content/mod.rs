mod catalog;
mod errors;
pub(crate) mod model;
pub(crate) mod sections;
mod storage;

use std::path::PathBuf;

pub(crate) use catalog::{ProjectCatalog, tech_stack_stats};
use errors::ContentError;
use model::ResumeConfig;
use storage::{ContentLoad, ContentLoadStatus};

/// Read-only content rendered during the session.
#[derive(Debug, Clone)]
pub(crate) struct Content {
    resume: ResumeConfig,
    catalog: ProjectCatalog,
    base_dir: PathBuf,
}

impl Content {
    pub(crate) fn new(
        resume: ResumeConfig,
        catalog: ProjectCatalog,
        base_dir: PathBuf,
    ) -> Self {
        Self {
            resume,
            catalog,
            base_dir,
        }
    }

    /// Load user content or the bundled defaults. Never fails.
    pub(crate) fn load() -> Self {
        let base_dir = storage::content_dir();

        let resume = settle(
            "resume",
            storage::load_resume(&base_dir),
            storage::bundled_resume,
        );
        let details = settle(
            "project details",
            storage::load_projects(&base_dir),
            storage::bundled_projects,
        );

        let catalog = ProjectCatalog::new(details);
        log::info!(
            "content ready: {} experiences, {} projects, {} project details",
            resume.experiences.len(),
            resume.projects.len(),
            catalog.len()
        );

        Self::new(resume, catalog, base_dir)
    }

    /// Consume the content and return résumé, catalog and the directory
    /// relative screenshot paths resolve against.
    pub(crate) fn into_parts(self) -> (ResumeConfig, ProjectCatalog, PathBuf) {
        (self.resume, self.catalog, self.base_dir)
    }
}

fn settle<T>(
    what: &str,
    load: Result<ContentLoad<T>, ContentError>,
    bundled: fn() -> T,
) -> T {
    match load {
        Ok(load) => {
            let (value, status) = load.into_parts();
            match status {
                ContentLoadStatus::Loaded => {
                    log::info!("loaded {what} from user config");
                },
                ContentLoadStatus::Missing => {
                    log::info!("no user {what} found, using bundled copy");
                },
                ContentLoadStatus::Invalid(message) => {
                    log::warn!("user {what} is invalid: {message}");
                },
            }
            value
        },
        Err(err) => {
            log::warn!("failed to read {what}: {err}");
            bundled()
        },
    }
}
