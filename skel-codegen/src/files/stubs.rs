use std::path::{Path, PathBuf};

use hpx_skel_core::{FileRules, GeneratedFile};

use super::CMAKE_HEADER;

/// The `src/CMakeLists.txt` stub: license header only. This is the file a
/// library's maintainer fills in with real targets afterwards.
pub struct SrcCmakeLists;

impl GeneratedFile for SrcCmakeLists {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("CMakeLists.txt")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        CMAKE_HEADER.to_string()
    }
}

/// The three test categories with their own subdirectory under `tests/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestCategory {
    Unit,
    Regressions,
    Performance,
}

impl TestCategory {
    pub fn dir_name(self) -> &'static str {
        match self {
            TestCategory::Unit => "unit",
            TestCategory::Regressions => "regressions",
            TestCategory::Performance => "performance",
        }
    }
}

/// The `tests/<category>/CMakeLists.txt` stub.
///
/// The regressions variant carries one trailing blank line the others lack;
/// kept for byte compatibility with previously generated trees.
pub struct TestStubCmakeLists {
    category: TestCategory,
}

impl TestStubCmakeLists {
    pub fn new(category: TestCategory) -> Self {
        Self { category }
    }
}

impl GeneratedFile for TestStubCmakeLists {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tests")
            .join(self.category.dir_name())
            .join("CMakeLists.txt")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        match self.category {
            TestCategory::Regressions => format!("{CMAKE_HEADER}\n"),
            _ => CMAKE_HEADER.to_string(),
        }
    }
}
