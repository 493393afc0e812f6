use serde::{Deserialize, Serialize};

use crate::types::annotation_matches;

/// Name prefixes that classify a method as state-changing
pub const MUTATOR_PREFIXES: &[&str] = &["create", "update", "delete", "add", "remove"];

/// Annotation names the analyzer looks for, compared by simple name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// A class must carry one of these to be scaffolded
    pub service: Vec<String>,
    pub transactional: Vec<String>,
    pub mutator: Vec<String>,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            service: vec!["Service".to_string()],
            transactional: vec!["Transactional".to_string()],
            mutator: vec!["DataMutator".to_string()],
        }
    }
}

impl Markers {
    pub fn matches_any(annotations: &[String], markers: &[String]) -> bool {
        annotations
            .iter()
            .any(|annotation| markers.iter().any(|marker| annotation_matches(annotation, marker)))
    }

    /// Name used in diagnostics when the service marker is missing
    pub fn service_label(&self) -> String {
        if self.service.is_empty() {
            "Service".to_string()
        } else {
            self.service.join("/@")
        }
    }
}

/// Mutator by explicit marker or by conventional name prefix
pub fn is_mutator(name: &str, annotations: &[String], markers: &Markers) -> bool {
    Markers::matches_any(annotations, &markers.mutator)
        || MUTATOR_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}
