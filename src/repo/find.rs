use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Error, Repo, Result, GIT_DIR};

/// Discover the repository enclosing `path`.
///
/// Starting at `path` (resolved to an absolute path with symlinks removed),
/// each directory is checked for a `.git` directory, moving up one level at a
/// time until the file system root. The first match is opened in strict mode,
/// so a `.git` directory with a missing or invalid config is an error rather
/// than a reason to keep searching.
///
/// Returns `Ok(None)` if no directory up to the root contains a repository.
pub fn find<P: AsRef<Path>>(path: P) -> Result<Option<Repo>> {
    let mut dir = fs::canonicalize(path.as_ref())?;

    loop {
        if dir.join(GIT_DIR).is_dir() {
            debug!(work_dir = %dir.display(), "found repository");
            return Repo::open(&dir).map(Some);
        }

        dir = match dir.parent() {
            Some(parent) => parent.to_path_buf(),
            None => {
                debug!(start = %path.as_ref().display(), "no repository up to the root");
                return Ok(None);
            }
        };
    }
}

/// Like [`find`], but a missing repository is an error.
pub fn find_required<P: AsRef<Path>>(path: P) -> Result<Repo> {
    let path = path.as_ref();
    find(path)?.ok_or_else(|| Error::NoRepositoryFound(path.to_path_buf()))
}
