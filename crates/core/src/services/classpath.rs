use crate::{
    error::Result,
    interfaces::ClassSource,
    services::{DescriptorLoader, JavaSourceLoader},
    types::ClassMetadata,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// Ordered list of class sources; the first source that knows a class wins.
///
/// Lookups are cached for the lifetime of the classpath, misses included.
#[derive(Default)]
pub struct Classpath {
    sources: Vec<Box<dyn ClassSource>>,
    cache: Mutex<HashMap<String, Option<ClassMetadata>>>,
}

impl Classpath {
    pub fn new() -> Self {
        Self::default()
    }

    /// One entry per root directory, each trying descriptors before Java sources
    pub fn from_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        roots.into_iter().fold(Self::new(), |classpath, root| {
            let root = root.into();
            classpath
                .with_source(DescriptorLoader::new(root.clone()))
                .with_source(JavaSourceLoader::new(root))
        })
    }

    pub fn with_source(mut self, source: impl ClassSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl ClassSource for Classpath {
    fn load(&self, qualified_name: &str) -> Result<Option<ClassMetadata>> {
        {
            let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(cached) = cache.get(qualified_name) {
                return Ok(cached.clone());
            }
        }

        let mut found = None;
        for source in &self.sources {
            if let Some(metadata) = source.load(qualified_name)? {
                debug!("Loaded {} from {}", qualified_name, source.describe());
                found = Some(metadata);
                break;
            }
        }

        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(qualified_name.to_string(), found.clone());
        Ok(found)
    }

    fn describe(&self) -> String {
        let entries: Vec<String> = self.sources.iter().map(|s| s.describe()).collect();
        format!("classpath [{}]", entries.join(", "))
    }
}
