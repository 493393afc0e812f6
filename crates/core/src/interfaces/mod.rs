//! Trait seams between the analyzer and the class front ends

pub mod class_source;

pub use class_source::{ClassSource, class_file_path};
