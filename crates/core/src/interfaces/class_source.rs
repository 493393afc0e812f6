//! Class loading interface
//!
//! Provides abstraction over where class metadata comes from, so the analyzer
//! works the same on parsed sources and on descriptor files.

use crate::{error::Result, types::ClassMetadata};
use std::path::PathBuf;

/// Trait for looking up declared class shapes by fully-qualified name
pub trait ClassSource: Send + Sync {
    /// Load the metadata of `qualified_name`, `Ok(None)` when this source
    /// does not provide the class
    fn load(&self, qualified_name: &str) -> Result<Option<ClassMetadata>>;

    /// Short label used in log output
    fn describe(&self) -> String;
}

/// Relative path of a class file below a source root: `com/example/User.<extension>`
pub fn class_file_path(qualified_name: &str, extension: &str) -> PathBuf {
    let mut path: PathBuf = qualified_name.split('.').collect();
    path.set_extension(extension);
    path
}
