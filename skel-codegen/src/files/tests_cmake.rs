use std::path::{Path, PathBuf};

use hpx_skel_core::{FileRules, GeneratedFile};

use super::CMAKE_HEADER;
use crate::library::LibraryName;

/// The `tests/CMakeLists.txt`: all registration is gated on the global tests
/// flag and on this library's own `HPX_<NAME>_WITH_TESTS` option, then each
/// test category is wired behind its own global flag.
pub struct TestsCmakeLists {
    lib: LibraryName,
}

impl TestsCmakeLists {
    pub fn new(lib: LibraryName) -> Self {
        Self { lib }
    }
}

impl GeneratedFile for TestsCmakeLists {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tests").join("CMakeLists.txt")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        format!(
            "{header}
if (NOT HPX_WITH_TESTS AND HPX_TOP_LEVEL)
  return()
endif()
if (NOT HPX_{token}_WITH_TESTS)
  message(STATUS \"Tests for {name} disabled\")
  return()
endif()

if (HPX_WITH_TESTS_UNIT)
  add_hpx_pseudo_target(tests.unit.{name})
  add_hpx_pseudo_dependencies(tests.unit tests.unit.{name})
  add_subdirectory(unit)
endif()

if (HPX_WITH_TESTS_REGRESSIONS)
  add_hpx_pseudo_target(tests.regressions.{name})
  add_hpx_pseudo_dependencies(tests.regressions tests.regressions.{name})
  add_subdirectory(regressions)
endif()

if (HPX_WITH_TESTS_BENCHMARKS)
  add_hpx_pseudo_target(tests.performance.{name})
  add_hpx_pseudo_dependencies(tests.performance tests.performance.{name})
  add_subdirectory(performance)
endif()

if (HPX_WITH_TESTS_HEADERS)
  add_hpx_lib_header_tests({name})
endif()
",
            header = CMAKE_HEADER,
            name = self.lib.as_str(),
            token = self.lib.option_token()
        )
    }
}
