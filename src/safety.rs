use std::fs;
use std::path::{self, Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum SafetyVerdict {
    Allowed,
    Refused(String),
}

pub struct SafetyChecker {
    protected_paths: Vec<PathBuf>,
}

impl SafetyChecker {
    pub fn new() -> Self {
        let mut protected_paths: Vec<PathBuf> = [
            "/",
            "/System",
            "/Applications",
            "/Library",
            "/Users",
            "/usr",
            "/bin",
            "/sbin",
            "/etc",
            "/var",
            "/home",
            "/root",
            "C:\\",
            "C:\\Windows",
            "C:\\Program Files",
            "C:\\Users",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();

        if let Some(home) = dirs::home_dir() {
            protected_paths.push(home);
        }

        Self { protected_paths }
    }

    /// Decides whether `target` may be recursively deleted as a child of `root`.
    ///
    /// Both paths are made absolute first, and the protected-path comparison
    /// uses the target with its parent resolved on disk, so `.` and `..`
    /// spellings of a system folder are still caught.
    pub fn check(&self, root: &Path, target: &Path) -> SafetyVerdict {
        let (root, target) = match (path::absolute(root), path::absolute(target)) {
            (Ok(root), Ok(target)) => (root, target),
            _ => {
                return SafetyVerdict::Refused(format!(
                    "{} could not be resolved to an absolute path",
                    target.display()
                ))
            }
        };

        if target.parent() != Some(root.as_path()) {
            return SafetyVerdict::Refused(format!(
                "{} is not inside {}",
                target.display(),
                root.display()
            ));
        }

        let resolved = resolve_parent(&target);
        if self
            .protected_paths
            .iter()
            .any(|p| p == &target || p == &resolved)
        {
            return SafetyVerdict::Refused(format!(
                "{} is a protected location",
                target.display()
            ));
        }

        if let Ok(meta) = fs::symlink_metadata(&target) {
            if meta.file_type().is_symlink() {
                return SafetyVerdict::Refused(format!(
                    "{} is a symbolic link",
                    target.display()
                ));
            }
        }

        SafetyVerdict::Allowed
    }

}

// Canonicalizes only the parent: the target itself may be a symlink, which
// `check` refuses separately.
fn resolve_parent(target: &Path) -> PathBuf {
    match (target.parent(), target.file_name()) {
        (Some(parent), Some(name)) => fs::canonicalize(parent)
            .map(|p| p.join(name))
            .unwrap_or_else(|_| target.to_path_buf()),
        _ => target.to_path_buf(),
    }
}

impl Default for SafetyChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_child_allowed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let child = dir.path().join("Some Game");
        fs::create_dir(&child).expect("mkdir");

        let checker = SafetyChecker::new();
        assert_eq!(checker.check(dir.path(), &child), SafetyVerdict::Allowed);
    }

    #[test]
    fn test_grandchild_refused() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).expect("mkdir");

        let checker = SafetyChecker::new();
        assert!(matches!(
            checker.check(dir.path(), &nested),
            SafetyVerdict::Refused(_)
        ));
    }

    #[test]
    fn test_protected_location_refused() {
        let checker = SafetyChecker::new();
        assert!(matches!(
            checker.check(Path::new("/"), Path::new("/usr")),
            SafetyVerdict::Refused(_)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_relative_spelling_of_protected_location_refused() {
        let _cwd = crate::test_support::CurrentDirGuard::enter(Path::new("/"));
        let checker = SafetyChecker::new();

        match checker.check(Path::new("."), Path::new("./usr")) {
            SafetyVerdict::Refused(reason) => assert!(reason.contains("protected")),
            SafetyVerdict::Allowed => panic!("./usr from / must be refused"),
        }
        assert!(matches!(
            checker.check(Path::new("/usr/.."), Path::new("/usr/../etc")),
            SafetyVerdict::Refused(_)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_refused() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = tempfile::tempdir().expect("target");
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(target.path(), &link).expect("symlink");

        let checker = SafetyChecker::new();
        match checker.check(dir.path(), &link) {
            SafetyVerdict::Refused(reason) => assert!(reason.contains("symbolic link")),
            SafetyVerdict::Allowed => panic!("symlink should be refused"),
        }
        assert!(target.path().exists());
    }
}
