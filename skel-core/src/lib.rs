//! File-writing substrate for the HPX library skeleton generator.
//!
//! Every generated artifact is described by a type implementing
//! [`GeneratedFile`]; writing is always a full truncate-and-overwrite unless
//! the file opts into [`Overwrite::IfMissing`].

mod file;

pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult, write_file};
