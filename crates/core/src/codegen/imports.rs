use std::collections::{BTreeMap, BTreeSet};

/// Packages Kotlin imports implicitly
const DEFAULT_PACKAGES: &[&str] = &["kotlin", "kotlin.collections"];

/// Sorted, de-duplicated imports of one generated file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    current_package: String,
    imports: BTreeSet<String>,
    /// simple name -> qualified name that owns it in this file
    claimed: BTreeMap<String, String>,
}

impl ImportSet {
    pub fn new(current_package: impl Into<String>) -> Self {
        Self {
            current_package: current_package.into(),
            ..Self::default()
        }
    }

    /// Register a qualified name and return the text to refer to it by.
    ///
    /// Unqualified names, members of the current package and Kotlin default
    /// imports need no import line. When two packages contribute the same
    /// simple name, the later one stays fully qualified.
    pub fn reference(&mut self, qualified: &str) -> String {
        let Some((package, simple)) = qualified.rsplit_once('.') else {
            return qualified.to_string();
        };

        match self.claimed.get(simple) {
            Some(owner) if owner == qualified => return simple.to_string(),
            Some(_) => return qualified.to_string(),
            None => {}
        }

        self.claimed
            .insert(simple.to_string(), qualified.to_string());
        if package != self.current_package && !DEFAULT_PACKAGES.contains(&package) {
            self.imports.insert(qualified.to_string());
        }
        simple.to_string()
    }

    /// Add an import line for a top-level function or member (`io.mockk.mockk`)
    pub fn add_member(&mut self, qualified: &str) {
        self.imports.insert(qualified.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }
}
