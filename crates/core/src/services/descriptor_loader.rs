//! Class source over serialized metadata files
//!
//! A descriptor is the JSON form of [`ClassMetadata`] stored at
//! `<root>/<package path>/<Name>.class.json`. Build plugins that can reflect
//! on compiled classes write these, and Kotlin signatures such as `String?`
//! pass through them unchanged.

use crate::{
    error::{Error, Result},
    interfaces::{ClassSource, class_file_path},
    types::ClassMetadata,
};
use std::path::PathBuf;
use tracing::{debug, trace};

pub const DESCRIPTOR_EXTENSION: &str = "class.json";

pub struct DescriptorLoader {
    root: PathBuf,
}

impl DescriptorLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ClassSource for DescriptorLoader {
    fn load(&self, qualified_name: &str) -> Result<Option<ClassMetadata>> {
        let path = self.root.join(class_file_path(qualified_name, DESCRIPTOR_EXTENSION));
        if !path.is_file() {
            trace!("No descriptor for {} at {:?}", qualified_name, path);
            return Ok(None);
        }

        debug!("Reading descriptor {:?}", path);
        let content = std::fs::read_to_string(&path)?;
        let metadata: ClassMetadata = serde_json::from_str(&content).map_err(|e| {
            Error::ParseError(format!("Invalid class descriptor {}: {e}", path.display()))
        })?;
        Ok(Some(metadata))
    }

    fn describe(&self) -> String {
        format!("descriptors at {}", self.root.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_descriptor() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("com/example");
        fs::create_dir_all(&dir).unwrap();
        let descriptor = json!({
            "qualified_name": "com.example.Greeter",
            "kind": "Class",
            "annotations": ["org.springframework.stereotype.Service"],
            "methods": [{ "name": "greet", "return_type": "String?" }]
        });
        fs::write(dir.join("Greeter.class.json"), descriptor.to_string()).unwrap();

        let loader = DescriptorLoader::new(temp.path());
        let meta = loader.load("com.example.Greeter").unwrap().unwrap();
        assert!(meta.has_annotation("Service"));
        assert_eq!(meta.methods[0].return_type, "String?");
    }

    #[test]
    fn test_malformed_descriptor_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Broken.class.json"), "{ not json").unwrap();

        let loader = DescriptorLoader::new(temp.path());
        let err = loader.load("Broken").unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
    }
}
