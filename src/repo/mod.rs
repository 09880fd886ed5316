//! A repository that stores its metadata on the local file system.
//!
//! The layout intentionally follows command-line git's `.git` folder so that
//! the results can be inspected with familiar tools:
//!
//! ```text
//! .git/
//!     branches/
//!     objects/
//!     refs/heads/
//!     refs/tags/
//!     config
//!     description
//!     HEAD
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::Config;

pub mod path;

mod find;
pub use find::{find, find_required};

mod init;
pub use init::init;

/// Name of the metadata directory inside the working directory.
pub const GIT_DIR: &str = ".git";

/// Branch that `HEAD` points to in a freshly created repository.
pub const DEFAULT_BRANCH: &str = "master";

/// Handle to a repository on the local file system.
///
/// A `Repo` binds a working directory to its `.git` directory and the
/// configuration read from `.git/config`. Handles are never modified once
/// constructed.
#[derive(Debug)]
pub struct Repo {
    work_dir: PathBuf,
    git_dir: PathBuf,
    config: Config,
}

impl Repo {
    /// Open an existing repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.git` directory
    /// containing a valid `config` file must exist at this path. Use [`init`]
    /// to create an empty repository if necessary, or [`find`] to search the
    /// parent directories.
    pub fn open<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        Repo::open_with(work_dir.as_ref(), false)
    }

    /// Open a repository that may not be fully created yet.
    ///
    /// Neither the `.git` directory nor its `config` file need to exist. If a
    /// config file is present it is still parsed, but not validated.
    pub fn open_force<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        Repo::open_with(work_dir.as_ref(), true)
    }

    fn open_with(work_dir: &Path, force: bool) -> Result<Self> {
        let work_dir = absolute(work_dir)?;
        let git_dir = work_dir.join(GIT_DIR);

        if !force && !git_dir.is_dir() {
            return Err(Error::NotARepository(work_dir));
        }

        let config = match path::file(&git_dir, &["config"], false)? {
            Some(config_path) => read_config(&config_path)?,
            None => None,
        };

        let config = match config {
            Some(config) => {
                config.validate(!force)?;
                config
            }
            None if force => Config::empty(),
            None => return Err(Error::MissingConfiguration(git_dir.join("config"))),
        };

        debug!(work_dir = %work_dir.display(), force, "opened repository");

        Ok(Repo {
            work_dir,
            git_dir,
            config,
        })
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    /// Return the configuration read from `.git/config`.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compute a path inside the `.git` directory. See [`path::path`].
    pub fn path<S: AsRef<Path>>(&self, segments: &[S]) -> PathBuf {
        path::path(&self.git_dir, segments)
    }

    /// Resolve (and optionally create) a directory inside `.git`. See [`path::dir`].
    pub fn dir<S: AsRef<Path>>(&self, segments: &[S], create: bool) -> Result<Option<PathBuf>> {
        path::dir(&self.git_dir, segments, create)
    }

    /// Resolve a file inside `.git`, optionally creating its parent. See [`path::file`].
    pub fn file<S: AsRef<Path>>(
        &self,
        segments: &[S],
        create_dirs: bool,
    ) -> Result<Option<PathBuf>> {
        path::file(&self.git_dir, segments, create_dirs)
    }
}

// A config file that disappears between the existence check and the read
// is treated the same as one that was never there.
fn read_config(config_path: &Path) -> Result<Option<Config>> {
    match fs::read_to_string(config_path) {
        Ok(text) => Config::parse(&text).map(Some),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

// Make `path` absolute without touching the file system. The directory may
// not exist yet when creating a repository, so `fs::canonicalize` won't do.
fn absolute(path: &Path) -> io::Result<PathBuf> {
    let base = if path.is_absolute() {
        PathBuf::new()
    } else {
        env::current_dir()?
    };

    Ok(path
        .components()
        .filter(|c| *c != Component::CurDir)
        .fold(base, |acc, c| acc.join(c)))
}

#[cfg(test)]
mod tests;
