use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use hpx_skel_core::GeneratedFile;

use crate::files::{
    DocsIndexRst, ExamplesCmakeLists, ReadmeMd, RootCmakeLists, SrcCmakeLists, TestCategory,
    TestStubCmakeLists, TestsCmakeLists,
};
use crate::library::LibraryName;

/// Directories created under the library root, in addition to
/// `include/hpx/<name>`.
const LAYOUT_DIRS: &[&str] = &[
    "cmake",
    "docs",
    "examples",
    "src",
    "tests",
    "tests/unit",
    "tests/regressions",
    "tests/performance",
];

/// A rendered skeleton file with its path relative to the library root.
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Generator for the canonical layout of a new HPX library.
///
/// Directory creation is idempotent; every file write is a full overwrite.
/// Generation is a pure function of the library name, so re-running it
/// yields byte-identical output.
pub struct Skeleton {
    lib: LibraryName,
}

impl Skeleton {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            lib: LibraryName::new(name),
        }
    }

    pub fn library(&self) -> &LibraryName {
        &self.lib
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile>> {
        vec![
            Box::new(ReadmeMd::new(self.lib.clone())),
            Box::new(RootCmakeLists::new(self.lib.clone())),
            Box::new(DocsIndexRst::new(self.lib.clone())),
            Box::new(ExamplesCmakeLists::new(self.lib.clone())),
            Box::new(SrcCmakeLists),
            Box::new(TestsCmakeLists::new(self.lib.clone())),
            Box::new(TestStubCmakeLists::new(TestCategory::Unit)),
            Box::new(TestStubCmakeLists::new(TestCategory::Regressions)),
            Box::new(TestStubCmakeLists::new(TestCategory::Performance)),
        ]
    }

    /// Render every skeleton file without touching the filesystem.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")),
                content: file.render(),
            })
            .collect()
    }

    /// Create the library's directory layout and write all skeleton files
    /// under `base/<name>/`.
    pub fn generate(&self, base: &Path) -> Result<()> {
        let root = base.join(self.lib.as_str());

        for dir in LAYOUT_DIRS {
            let path = root.join(dir);
            fs::create_dir_all(&path)
                .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
        }

        // Public headers live under include/hpx/<name>; the project indexer
        // later links everything under include/hpx into the staging area.
        let include_path = root.join("include").join("hpx").join(self.lib.as_str());
        fs::create_dir_all(&include_path)
            .wrap_err_with(|| format!("Failed to create {}", include_path.display()))?;

        for file in self.files() {
            file.write(&root)?;
        }

        Ok(())
    }
}
