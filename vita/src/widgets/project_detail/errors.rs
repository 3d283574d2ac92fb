use thiserror::Error;

/// Errors raised while opening a project detail.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ProjectDetailError {
    #[error("project detail {0:?} not found")]
    NotFound(String),
}
