use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, trace};

use super::{path, Config, Error, Repo, Result, DEFAULT_BRANCH};

const DESCRIPTION_TXT: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

/// Creates a new, empty repository on the local file system.
///
/// Analogous to [`git init`](https://git-scm.com/docs/git-init). The
/// directory `work_dir` is created if it doesn't exist. An existing but empty
/// `.git` directory is reused; a non-empty one is left alone and reported as
/// `Error::RepositoryAlreadyExists`.
///
/// The individual steps are not transactional. If creation is interrupted,
/// the partially written `.git` directory must be removed by hand before
/// trying again.
pub fn init<P: AsRef<Path>>(work_dir: P) -> Result<Repo> {
    let repo = Repo::open_force(work_dir)?;
    let work_dir = repo.work_dir();

    if work_dir.exists() {
        if !work_dir.is_dir() {
            return Err(Error::NotADirectory(work_dir.to_path_buf()));
        }
        if has_entries(repo.git_dir())? {
            return Err(Error::RepositoryAlreadyExists(work_dir.to_path_buf()));
        }
    } else {
        fs::create_dir_all(work_dir)?;
    }

    let git_dir = repo.git_dir();

    create_dir(git_dir, &["branches"])?;
    create_dir(git_dir, &["objects"])?;
    create_dir(git_dir, &["refs", "tags"])?;
    create_dir(git_dir, &["refs", "heads"])?;

    create_file(git_dir, &["description"], DESCRIPTION_TXT)?;
    create_file(
        git_dir,
        &["HEAD"],
        &format!("ref: refs/heads/{}\n", DEFAULT_BRANCH),
    )?;

    let config = Config::default();
    create_file(git_dir, &["config"], &config.to_string())?;

    info!(git_dir = %git_dir.display(), "initialized empty repository");

    Ok(Repo { config, ..repo })
}

fn has_entries(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(false);
    }

    Ok(fs::read_dir(dir)?.next().is_some())
}

fn create_dir(git_dir: &Path, segments: &[&str]) -> Result<PathBuf> {
    match path::dir(git_dir, segments, true)? {
        Some(dir) => Ok(dir),
        None => unreachable!("path::dir always yields a directory when asked to create it"),
    }
}

fn create_file(git_dir: &Path, segments: &[&str], contents: &str) -> Result<()> {
    match path::file(git_dir, segments, true)? {
        Some(file) => {
            fs::write(&file, contents)?;
            trace!(file = %file.display(), "wrote file");
            Ok(())
        }
        None => unreachable!("path::file always yields a file path when asked to create parents"),
    }
}
