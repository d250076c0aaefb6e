//! One struct per generated skeleton file.
//!
//! Each type implements [`hpx_skel_core::GeneratedFile`]; paths are relative
//! to the library root directory.

mod docs_index;
mod examples_cmake;
mod readme;
mod root_cmake;
mod stubs;
mod tests_cmake;

pub use docs_index::DocsIndexRst;
pub use examples_cmake::ExamplesCmakeLists;
pub use readme::ReadmeMd;
pub use root_cmake::RootCmakeLists;
pub use stubs::{SrcCmakeLists, TestCategory, TestStubCmakeLists};
pub use tests_cmake::TestsCmakeLists;

/// License header opening every generated CMake script.
pub(crate) const CMAKE_HEADER: &str = "\
# Copyright (c) 2019 The STE||AR-Group
#
# Distributed under the Boost Software License, Version 1.0. (See accompanying
# file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)
";

/// Minimum CMake version required by every generated library.
pub(crate) const CMAKE_MIN_VERSION: &str = "3.3.2";
