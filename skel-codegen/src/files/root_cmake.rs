use std::path::{Path, PathBuf};

use hpx_skel_core::{FileRules, GeneratedFile};

use super::{CMAKE_HEADER, CMAKE_MIN_VERSION};
use crate::library::LibraryName;

/// The library's top-level `CMakeLists.txt`.
///
/// Declares the sub-project, registers the `HPX_<NAME>_WITH_TESTS` option
/// (default `On`), and pulls in `examples`, `src`, and `tests` in that order.
pub struct RootCmakeLists {
    lib: LibraryName,
}

impl RootCmakeLists {
    pub fn new(lib: LibraryName) -> Self {
        Self { lib }
    }
}

impl GeneratedFile for RootCmakeLists {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("CMakeLists.txt")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        format!(
            "{header}
# We require at least CMake V{version}
cmake_minimum_required(VERSION {version} FATAL_ERROR)

project(HPX.{name} CXX)

list(APPEND CMAKE_MODULE_PATH \"${{CMAKE_CURRENT_SOURCE_DIR}}/cmake\")

option(HPX_{token}_WITH_TESTS \"Include tests for {name}\" On)

message(STATUS \"{name}: Configuring\")

add_subdirectory(examples)
add_subdirectory(src)
add_subdirectory(tests)

message(STATUS \"{name}: Configuring done\")
",
            header = CMAKE_HEADER,
            version = CMAKE_MIN_VERSION,
            name = self.lib.as_str(),
            token = self.lib.option_token()
        )
    }
}
