use crate::model::Category;
use std::path::PathBuf;
use thiserror::Error;

/// Field-level problems found while turning form input into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required.")]
    NameRequired,

    #[error("Email address is not valid: {0}")]
    InvalidEmail(String),

    #[error("LinkedIn URL must start with http:// or https:// (got {0})")]
    InvalidUrl(String),

    #[error("Years of experience must be a whole number (got {0})")]
    InvalidExperience(String),

    #[error("Document label is required.")]
    LabelRequired,
}

#[derive(Error, Debug)]
pub enum StaffError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("No {category} staff member with id '{id}'")]
    NotFound { category: Category, id: String },

    #[error("A {category} staff member with id '{id}' already exists")]
    AlreadyExists { category: Category, id: String },

    #[error("Staff directory at {} is not valid JSON: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Interactive editing needs a terminal; use --generate or --export for scripts")]
    NotInteractive,

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StaffError>;
