use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::errors::ContentError;
use super::model::{ProjectDetail, ResumeConfig};

const RESUME_FILE: &str = "resume.json";
const PROJECTS_FILE: &str = "projects.json";

const BUNDLED_RESUME: &str = include_str!("../../assets/content/resume.json");
const BUNDLED_PROJECTS: &str =
    include_str!("../../assets/content/projects.json");

/// Status describing how a content file was loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading one content file.
#[derive(Debug, Clone)]
pub(crate) struct ContentLoad<T> {
    value: T,
    status: ContentLoadStatus,
}

impl<T> ContentLoad<T> {
    /// Build a load result from explicit parts.
    pub(crate) fn new(value: T, status: ContentLoadStatus) -> Self {
        Self { value, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (T, ContentLoadStatus) {
        (self.value, self.status)
    }
}

/// Load the résumé from the config dir, falling back to the bundled copy.
pub(crate) fn load_resume(
    dir: &Path,
) -> Result<ContentLoad<ResumeConfig>, ContentError> {
    load_from_path(&dir.join(RESUME_FILE), bundled_resume)
}

/// Load project details from the config dir, falling back to the bundled
/// copy.
pub(crate) fn load_projects(
    dir: &Path,
) -> Result<ContentLoad<Vec<ProjectDetail>>, ContentError> {
    load_from_path(&dir.join(PROJECTS_FILE), bundled_projects)
}

/// Bundled résumé, or an empty one if the bundled file is broken.
pub(crate) fn bundled_resume() -> ResumeConfig {
    parse_bundled(BUNDLED_RESUME).unwrap_or_else(|err| {
        log::warn!("bundled resume is invalid: {err}");
        ResumeConfig::default()
    })
}

/// Bundled project details, or none if the bundled file is broken.
pub(crate) fn bundled_projects() -> Vec<ProjectDetail> {
    parse_bundled(BUNDLED_PROJECTS).unwrap_or_else(|err| {
        log::warn!("bundled project details are invalid: {err}");
        Vec::new()
    })
}

/// Directory holding user content files and relative screenshot paths.
pub(crate) fn content_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join("vita");
    }

    std::env::temp_dir().join("vita")
}

fn load_from_path<T: DeserializeOwned>(
    path: &Path,
    bundled: fn() -> T,
) -> Result<ContentLoad<T>, ContentError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ContentLoad::new(bundled(), ContentLoadStatus::Missing));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<T>(&data) {
        Ok(value) => Ok(ContentLoad::new(value, ContentLoadStatus::Loaded)),
        Err(err) => Ok(ContentLoad::new(
            bundled(),
            ContentLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn parse_bundled<T: DeserializeOwned>(raw: &str) -> Result<T, ContentError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{
        ContentLoadStatus, bundled_projects, bundled_resume, load_projects,
        load_resume,
    };

    #[test]
    fn given_bundled_content_when_parsed_then_it_is_complete() {
        let resume = bundled_resume();
        let projects = bundled_projects();

        assert!(!resume.basic_info.name.is_empty());
        assert!(!resume.experiences.is_empty());
        assert!(!resume.projects.is_empty());
        assert!(!projects.is_empty());
        for project in &resume.projects {
            if let Some(detail_id) = &project.detail_id {
                assert!(
                    projects.iter().any(|detail| &detail.id == detail_id),
                    "detail {detail_id} should be bundled"
                );
            }
        }
    }

    #[test]
    fn given_missing_files_when_loaded_then_bundled_content_is_used() {
        let root = test_temp_dir("missing");

        let (resume, status) = load_resume(&root)
            .expect("missing file should not fail")
            .into_parts();

        assert_eq!(status, ContentLoadStatus::Missing);
        assert_eq!(resume, bundled_resume());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_user_file_when_loaded_then_user_content_wins() {
        let root = test_temp_dir("valid");
        fs::write(
            root.join("projects.json"),
            r#"[{"id":"solo","name":"Solo","overview":"o",
                "duration":"1 month","teamSize":1,"role":"Owner"}]"#,
        )
        .expect("test payload should be written");

        let (projects, status) = load_projects(&root)
            .expect("valid file should load")
            .into_parts();

        assert_eq!(status, ContentLoadStatus::Loaded);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].team_size, 1);
        assert!(projects[0].screenshots.is_empty());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_loaded_then_bundled_content_with_invalid_status()
    {
        let root = test_temp_dir("invalid_json");
        fs::write(root.join("resume.json"), "{ this is not valid json")
            .expect("invalid test payload should be written");

        let (resume, status) = load_resume(&root)
            .expect("loading invalid content should not fail with io error")
            .into_parts();

        assert_eq!(resume, bundled_resume());
        match status {
            ContentLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "vita-content-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
