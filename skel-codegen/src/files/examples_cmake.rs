use std::path::{Path, PathBuf};

use hpx_skel_core::{FileRules, GeneratedFile};

use super::CMAKE_HEADER;
use crate::library::LibraryName;

/// The `examples/CMakeLists.txt`: registers the `tests.examples.<name>`
/// pseudo-target behind the global examples flag.
pub struct ExamplesCmakeLists {
    lib: LibraryName,
}

impl ExamplesCmakeLists {
    pub fn new(lib: LibraryName) -> Self {
        Self { lib }
    }
}

impl GeneratedFile for ExamplesCmakeLists {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("examples").join("CMakeLists.txt")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        format!(
            "{header}
if (HPX_WITH_TESTS_EXAMPLES)
  add_hpx_pseudo_target(tests.examples.{name})
  add_hpx_pseudo_dependencies(tests.examples tests.examples.{name})
endif()

",
            header = CMAKE_HEADER,
            name = self.lib.as_str()
        )
    }
}
