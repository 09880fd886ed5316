use std::{
    env,
    path::{Path, PathBuf},
};

// Changes the process working directory for as long as the guard
// lives and puts the previous one back on drop.
//
// The working directory is shared by every test thread, so each
// test that creates one of these must be marked #[serial].
// Test-only, hence the panics.
pub(crate) struct TempCwd {
    restore_to: PathBuf,
}

impl TempCwd {
    pub fn new<P: AsRef<Path>>(path: P) -> TempCwd {
        let restore_to = env::current_dir().unwrap();
        env::set_current_dir(path.as_ref()).unwrap();

        TempCwd { restore_to }
    }
}

impl Drop for TempCwd {
    fn drop(&mut self) {
        env::set_current_dir(&self.restore_to).unwrap();
    }
}
