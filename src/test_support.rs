use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

// The working directory is process-wide; tests that change it take turns.
static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Switches the working directory until dropped.
pub struct CurrentDirGuard {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CurrentDirGuard {
    pub fn enter(dir: &Path) -> Self {
        let lock = CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = env::current_dir().expect("current dir");
        env::set_current_dir(dir).expect("set current dir");
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}
