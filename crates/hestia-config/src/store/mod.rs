//! File-backed persistence.

mod file;

pub use file::JsonFileStore;
