//! Skeleton generation and project reindexing for HPX libraries.
//!
//! A library component of HPX is a directory with a fixed internal layout:
//! CMake scripts, a docs stub, and per-category test directories. This crate
//! renders that layout from templates ([`Skeleton`]) and rebuilds the two
//! project-level aggregate files from a directory scan ([`ProjectIndex`]).

mod files;
mod index;
mod library;
mod skeleton;

pub use files::{
    DocsIndexRst, ExamplesCmakeLists, ReadmeMd, RootCmakeLists, SrcCmakeLists, TestCategory,
    TestStubCmakeLists, TestsCmakeLists,
};
pub use index::ProjectIndex;
pub use library::LibraryName;
pub use skeleton::{PreviewFile, Skeleton};
