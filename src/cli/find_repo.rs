use std::{env, path::Path};

use minigit::repo::{self, Repo, Result};

// Discover the repository enclosing the given path.
//
// Every command other than `init` needs a repository to work on and
// should find it through here, so that all of them agree on how the
// search is done.
//
// Returns `repo::Error::NoRepositoryFound` if neither the path nor
// any of its parents contains a `.git` directory.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Repo> {
    repo::find_required(path)
}

// Discover the repository enclosing the current working directory.
pub fn from_current_dir() -> Result<Repo> {
    let path = env::current_dir()?;
    from_path(path)
}
