use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use hpx_skel_core::write_file;

use crate::files::CMAKE_HEADER;

/// Fixed prologue of the aggregate manifest: the staging include directory
/// is rebuilt from scratch before any library re-populates it, so stale
/// symbolic links never survive a regeneration.
const MANIFEST_PROLOGUE: &str = "
# This file is auto generated. Please do not edit manually

include(HPX_CreateSymbolicLink)

# We create a special directory to collect all our modular headers, to make
# it easier to include those files. The directory is created from scratch if
# changes occured to avoid dangling links
execute_process(COMMAND \"${CMAKE_COMMAND}\" -E remove_directory ${CMAKE_BINARY_DIR}/include/hpx)
execute_process(COMMAND \"${CMAKE_COMMAND}\" -E make_directory ${CMAKE_BINARY_DIR}/include/hpx)
";

/// Fixed header of the aggregate documentation index.
const DOCS_INDEX_HEADER: &str = "\
..
    Copyright (c) 2018-2019 The STE||AR-Group

    Distributed under the Boost Software License, Version 1.0. (See accompanying
    file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)

.. toctree::
   :caption: Libraries
   :maxdepth: 2

";

/// The discovered library set and the two aggregate files derived from it.
///
/// The set is recomputed from a directory listing on every run; both
/// aggregates are pure functions of it and are rewritten in full, never
/// merged with prior content.
pub struct ProjectIndex {
    libraries: Vec<String>,
}

impl ProjectIndex {
    /// List the immediate subdirectories of `root`, sorted
    /// byte-lexicographically. Nothing is filtered out here; names starting
    /// with `_` are skipped by the manifest rendering only.
    pub fn scan(root: &Path) -> Result<Self> {
        let mut libraries = Vec::new();

        let entries = fs::read_dir(root)
            .wrap_err_with(|| format!("Failed to list {}", root.display()))?;
        for entry in entries {
            let entry = entry?;
            // Path::is_dir follows symbolic links, so a linked library
            // directory still counts.
            if !entry.path().is_dir() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                libraries.push(name);
            }
        }
        libraries.sort();

        Ok(Self { libraries })
    }

    /// The sorted library names, underscore-prefixed entries included.
    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    /// Render the aggregate `CMakeLists.txt`: the fixed prologue plus one
    /// inclusion block per library whose name does not start with `_`.
    pub fn render_manifest(&self) -> String {
        let mut out = format!("{CMAKE_HEADER}{MANIFEST_PROLOGUE}");

        for lib in &self.libraries {
            if lib.starts_with('_') {
                continue;
            }
            out.push_str(&format!(
                "
add_subdirectory({lib})
file(GLOB PP_INCLUDE_LIST
  LIST_DIRECTORIES true ${{DO_CONFIGURE_DEPENDS}}
  RELATIVE ${{CMAKE_CURRENT_SOURCE_DIR}}/{lib}/include/hpx/
  ${{CMAKE_CURRENT_SOURCE_DIR}}/{lib}/include/hpx/*)
foreach(include ${{PP_INCLUDE_LIST}})
  create_symbolic_link(
    ${{CMAKE_CURRENT_SOURCE_DIR}}/{lib}/include/hpx/${{include}}
    ${{CMAKE_BINARY_DIR}}/include/hpx/${{include}})
endforeach()
"
            ));
        }

        out
    }

    /// Render the aggregate `index.rst`: the fixed header plus one toctree
    /// entry per library, underscore-prefixed entries included.
    pub fn render_docs_index(&self) -> String {
        let mut out = DOCS_INDEX_HEADER.to_string();

        for lib in &self.libraries {
            out.push_str(&format!("   /libs/{lib}/docs/index.rst\n"));
        }

        out
    }

    /// Overwrite `<root>/CMakeLists.txt` and `<root>/index.rst` in full.
    pub fn write(&self, root: &Path) -> Result<()> {
        write_file(&root.join("CMakeLists.txt"), &self.render_manifest())?;
        write_file(&root.join("index.rst"), &self.render_docs_index())?;
        Ok(())
    }
}
