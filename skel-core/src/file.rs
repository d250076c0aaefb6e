use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated skeleton file.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Write `content` to `path`, creating missing parent directories.
///
/// The write truncates: existing content is never read or merged.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for regenerated files: clobber whatever is on disk.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Rules for stub files that a maintainer may have hand-edited.
    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated content)
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Stub {
        rules: FileRules,
    }

    impl GeneratedFile for Stub {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("nested").join("stub.txt")
        }

        fn rules(&self) -> FileRules {
            self.rules
        }

        fn render(&self) -> String {
            "stub content\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_generated_file_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let stub = Stub {
            rules: FileRules::always_overwrite(),
        };

        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(stub.path(temp.path()), "original").unwrap();

        let result = stub.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(stub.path(temp.path())).unwrap(),
            "stub content\n"
        );
    }

    #[test]
    fn test_generated_file_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let stub = Stub {
            rules: FileRules::if_missing(),
        };

        let result = stub.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert!(stub.path(temp.path()).exists());
    }

    #[test]
    fn test_generated_file_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let stub = Stub {
            rules: FileRules::if_missing(),
        };

        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(stub.path(temp.path()), "hand edited").unwrap();

        let result = stub.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(stub.path(temp.path())).unwrap(),
            "hand edited"
        );
    }
}
