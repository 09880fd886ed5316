//! Computes paths inside a repository's `.git` directory.
//!
//! `dir` and `file` optionally create the directories they resolve, which is
//! how `init` builds nested structure while writing leaf files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::{Error, Result};

/// Join `segments` onto `git_dir`. Performs no I/O.
pub fn path<S: AsRef<Path>>(git_dir: &Path, segments: &[S]) -> PathBuf {
    segments
        .iter()
        .fold(git_dir.to_path_buf(), |acc, segment| acc.join(segment))
}

/// Resolve a directory inside `git_dir`.
///
/// Returns `Ok(None)` if the directory doesn't exist and `create` is false.
/// If `create` is true, any missing directories along the way are created.
/// Fails with `Error::NotADirectory` if something other than a directory
/// already occupies the path.
pub fn dir<S: AsRef<Path>>(git_dir: &Path, segments: &[S], create: bool) -> Result<Option<PathBuf>> {
    let dir = path(git_dir, segments);

    if dir.exists() {
        if dir.is_dir() {
            return Ok(Some(dir));
        }
        return Err(Error::NotADirectory(dir));
    }

    if create {
        fs::create_dir_all(&dir)?;
        trace!(dir = %dir.display(), "created directory");
        Ok(Some(dir))
    } else {
        Ok(None)
    }
}

/// Resolve a file inside `git_dir`.
///
/// Only the directories leading up to the last segment are considered (and
/// created if `create_dirs` is true). The file itself is neither checked nor
/// created.
pub fn file<S: AsRef<Path>>(
    git_dir: &Path,
    segments: &[S],
    create_dirs: bool,
) -> Result<Option<PathBuf>> {
    let parent = &segments[..segments.len().saturating_sub(1)];

    match dir(git_dir, parent, create_dirs)? {
        Some(_) => Ok(Some(path(git_dir, segments))),
        None => Ok(None),
    }
}
