use std::fs;

use super::super::*;

#[test]
fn happy_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path();
    init(work_dir).unwrap();

    let r = Repo::open(work_dir).unwrap();
    assert_eq!(r.work_dir(), work_dir);
    assert_eq!(r.git_dir(), work_dir.join(".git").as_path());
    assert_eq!(r.config(), &Config::default());
}

#[test]
fn error_no_git_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path();

    let err = Repo::open(work_dir).unwrap_err();
    if let Error::NotARepository(err_path) = err {
        assert_eq!(err_path, work_dir);
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_no_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path();
    fs::create_dir_all(work_dir.join(".git")).unwrap();

    let err = Repo::open(work_dir).unwrap_err();
    if let Error::MissingConfiguration(err_path) = err {
        assert_eq!(err_path, work_dir.join(".git/config"));
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_unsupported_version() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path();
    init(work_dir).unwrap();

    fs::write(
        work_dir.join(".git/config"),
        "[core]\n\trepositoryformatversion = 1\n\tfilemode = false\n\tbare = false\n",
    )
    .unwrap();

    let err = Repo::open(work_dir).unwrap_err();
    if let Error::UnsupportedFormatVersion(version) = err {
        assert_eq!(version, 1);
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_malformed_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path();
    init(work_dir).unwrap();

    fs::write(work_dir.join(".git/config"), "[core\n").unwrap();

    let err = Repo::open(work_dir).unwrap_err();
    if let Error::MalformedConfig { line, .. } = err {
        assert_eq!(line, 1);
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn force_without_git_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path().join("not-yet");

    let r = Repo::open_force(&work_dir).unwrap();
    assert_eq!(r.work_dir(), work_dir.as_path());
    assert_eq!(r.config(), &Config::empty());
    assert!(!work_dir.exists());
}

#[test]
fn force_reads_but_does_not_validate() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path();
    fs::create_dir_all(work_dir.join(".git")).unwrap();
    fs::write(
        work_dir.join(".git/config"),
        "[core]\n\trepositoryformatversion = 3\n",
    )
    .unwrap();

    let r = Repo::open_force(work_dir).unwrap();
    assert_eq!(
        r.config().get_int("core", "repositoryformatversion").unwrap(),
        Some(3)
    );
}

#[test]
fn handle_paths() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path();
    let r = init(work_dir).unwrap();

    assert_eq!(r.path(&["refs", "heads"]), work_dir.join(".git/refs/heads"));
    assert_eq!(
        r.dir(&["refs", "heads"], false).unwrap(),
        Some(work_dir.join(".git/refs/heads"))
    );
    assert_eq!(r.dir(&["info"], false).unwrap(), None);
    assert_eq!(
        r.file(&["refs", "remotes", "origin", "HEAD"], true).unwrap(),
        Some(work_dir.join(".git/refs/remotes/origin/HEAD"))
    );
    assert!(work_dir.join(".git/refs/remotes/origin").is_dir());
}

#[test]
fn relative_work_dir_is_made_absolute() {
    let r = Repo::open_force("./some/where").unwrap();
    assert!(r.work_dir().is_absolute());
    assert!(r.work_dir().ends_with("some/where"));
    assert!(r.git_dir().ends_with("some/where/.git"));
}
