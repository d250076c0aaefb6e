use std::path::{Path, PathBuf};

use hpx_skel_core::{FileRules, GeneratedFile};

use crate::library::LibraryName;

/// The `Readme.md` description stub pointing at the hosted documentation.
pub struct ReadmeMd {
    lib: LibraryName,
}

impl ReadmeMd {
    pub fn new(lib: LibraryName) -> Self {
        Self { lib }
    }
}

impl GeneratedFile for ReadmeMd {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("Readme.md")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        format!(
            "\
<!-- Copyright (c) 2019 The STE||AR-Group                                         -->
<!--                                                                              -->
<!-- Distributed under the Boost Software License, Version 1.0. (See accompanying -->
<!-- file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)        -->

# {name}

This library is part of HPX.

Extensive documentation can be found at
https://stellar-group.github.io/hpx/docs/sphinx/latest/html/libs/{name}/docs/index.html
",
            name = self.lib.as_str()
        )
    }
}
