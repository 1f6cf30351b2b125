/// Filesystem helpers shared by the generator.
pub mod fs {
    use std::fs;
    use std::io;

    use anyhow::{Context, Result};
    use camino::Utf8Path;
    use tracing::debug;

    /// Ensure a directory exists, creating it recursively if needed.
    pub fn ensure_dir(path: &Utf8Path) -> io::Result<()> {
        if !path.is_dir() {
            debug!(dir = %path, "creating directory");
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Ensure the directory that will hold `file` exists.
    ///
    /// A bare file name has an empty parent and resolves against the working
    /// directory, so nothing is created for it.
    pub fn ensure_parent_dir(file: &Utf8Path) -> Result<()> {
        match file.parent() {
            Some(parent) if !parent.as_str().is_empty() => {
                ensure_dir(parent).with_context(|| format!("creating directory {}", parent))
            }
            _ => Ok(()),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use camino::Utf8PathBuf;
        use std::time::{SystemTime, UNIX_EPOCH};

        fn unique_temp_dir() -> Utf8PathBuf {
            let mut dir = std::env::temp_dir();
            let ts = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos();
            dir.push(format!("gridgen-util-test-{ts}"));
            Utf8PathBuf::from_path_buf(dir).unwrap()
        }

        #[test]
        fn ensure_parent_dir_creates_nested_chain() {
            let root = unique_temp_dir();
            let file = root.join("a").join("b").join("c").join("out.txt");

            ensure_parent_dir(&file).unwrap();

            assert!(root.join("a/b/c").is_dir());
            assert!(!file.exists());
            let _ = fs::remove_dir_all(root.as_std_path());
        }

        #[test]
        fn ensure_parent_dir_ignores_bare_file_name() {
            assert_eq!(Utf8Path::new("out.txt").parent(), Some(Utf8Path::new("")));
            assert!(ensure_parent_dir(Utf8Path::new("out.txt")).is_ok());
        }

        #[test]
        fn ensure_dir_is_idempotent() {
            let root = unique_temp_dir();
            ensure_dir(&root).unwrap();
            ensure_dir(&root).unwrap();
            assert!(root.is_dir());
            let _ = fs::remove_dir_all(root.as_std_path());
        }

        #[test]
        fn ensure_dir_fails_when_component_is_a_file() {
            let root = unique_temp_dir();
            fs::create_dir_all(root.as_std_path()).unwrap();
            let blocker = root.join("blocker");
            fs::write(blocker.as_std_path(), "not a directory").unwrap();

            let err = ensure_parent_dir(&blocker.join("out.txt")).unwrap_err();
            assert_eq!(err.to_string(), format!("creating directory {}", blocker));

            let _ = fs::remove_dir_all(root.as_std_path());
        }
    }
}
