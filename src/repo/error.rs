use std::path::PathBuf;

use thiserror::Error;

/// Describes the potential error conditions that might arise from minigit `Repo` operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),

    #[error("configuration file missing: {0}")]
    MissingConfiguration(PathBuf),

    #[error("unsupported repositoryformatversion {0}")]
    UnsupportedFormatVersion(i64),

    #[error("configuration key core.{0} is missing")]
    MissingConfigKey(String),

    #[error("invalid value {value:?} for configuration key {key}")]
    InvalidConfigValue { key: String, value: String },

    #[error("malformed configuration at line {line}: {reason}")]
    MalformedConfig { line: usize, reason: String },

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("{0} already contains a repository")]
    RepositoryAlreadyExists(PathBuf),

    #[error("not a git repository (or any of the parent directories): {0}")]
    NoRepositoryFound(PathBuf),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// A specialized `Result` type for minigit `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;
