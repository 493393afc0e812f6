//! Tree-sitter based class source over a Java source root

use crate::{
    error::Result,
    interfaces::{ClassSource, class_file_path},
    parser::JavaParser,
    types::ClassMetadata,
};
use std::path::PathBuf;
use tracing::{debug, trace};

/// Reads `<root>/<package path>/<Name>.java`
pub struct JavaSourceLoader {
    root: PathBuf,
}

impl JavaSourceLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ClassSource for JavaSourceLoader {
    fn load(&self, qualified_name: &str) -> Result<Option<ClassMetadata>> {
        let path = self.root.join(class_file_path(qualified_name, "java"));
        if !path.is_file() {
            trace!("No Java source for {} at {:?}", qualified_name, path);
            return Ok(None);
        }

        debug!("Parsing {:?}", path);
        let source = std::fs::read_to_string(&path)?;
        let simple_name = qualified_name.rsplit('.').next().unwrap_or(qualified_name);
        // Parsers are not shared between threads, so one per load
        let mut parser = JavaParser::new()?;
        parser.extract_class(&source, simple_name)
    }

    fn describe(&self) -> String {
        format!("java sources at {}", self.root.display())
    }
}
