use std::path::{Path, PathBuf};

use hpx_skel_core::{FileRules, GeneratedFile};

use crate::library::LibraryName;

/// The `docs/index.rst` stub: a `libs_<name>` cross-reference label and the
/// library name as an `=`-ruled title.
pub struct DocsIndexRst {
    lib: LibraryName,
}

impl DocsIndexRst {
    pub fn new(lib: LibraryName) -> Self {
        Self { lib }
    }
}

impl GeneratedFile for DocsIndexRst {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("docs").join("index.rst")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        format!(
            "\
..
    Copyright (c) 2019 The STE||AR-Group

    Distributed under the Boost Software License, Version 1.0. (See accompanying
    file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)

.. _libs_{name}:

{rule}
{name}
{rule}

",
            name = self.lib.as_str(),
            rule = self.lib.underline()
        )
    }
}
