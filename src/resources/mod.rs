//! Filesystem-level building blocks used by the tasks.
pub mod bundle;
pub mod font_archive;
pub mod fs;
