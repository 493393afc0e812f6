use crate::impl_case_insensitive_deserialize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    Class,
    Interface,
}

impl_case_insensitive_deserialize!(
    ClassKind,
    Class => "class",
    Interface => "interface"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    Internal,
    Private,
}

impl_case_insensitive_deserialize!(
    Visibility,
    Public => "public",
    Protected => "protected",
    Internal => "internal",
    Private => "private"
);

fn default_visibility() -> Visibility {
    Visibility::Public
}

/// Declared shape of a class, as produced by a class source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMetadata {
    pub qualified_name: String,
    pub kind: ClassKind,
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Names of the class's own type parameters (`T` in `Repo<T>`)
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub constructors: Vec<ConstructorMetadata>,
    #[serde(default)]
    pub methods: Vec<MethodMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorMetadata {
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodMetadata {
    pub name: String,
    #[serde(default = "default_visibility")]
    pub visibility: Visibility,
    #[serde(default)]
    pub parameters: Vec<ParameterMetadata>,
    pub return_type: String,
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Declared by a supertype rather than the class itself
    #[serde(default)]
    pub inherited: bool,
}

/// Compare annotation names by simple name, ignoring `@` and package qualifiers
pub fn annotation_matches(annotation: &str, marker: &str) -> bool {
    let simple = |name: &str| -> String {
        let name = name.trim().trim_start_matches('@');
        let name = name.split('(').next().unwrap_or(name);
        name.rsplit('.').next().unwrap_or(name).to_string()
    };
    simple(annotation) == simple(marker)
}

impl ClassMetadata {
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }

    pub fn package(&self) -> &str {
        match self.qualified_name.rfind('.') {
            Some(idx) => &self.qualified_name[..idx],
            None => "",
        }
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    pub fn has_annotation(&self, marker: &str) -> bool {
        self.annotations
            .iter()
            .any(|annotation| annotation_matches(annotation, marker))
    }

    /// The designated constructor: the one flagged primary, else the first declared
    pub fn primary_constructor(&self) -> Option<&ConstructorMetadata> {
        self.constructors
            .iter()
            .find(|c| c.primary)
            .or_else(|| self.constructors.first())
    }
}

impl MethodMetadata {
    pub fn has_annotation(&self, marker: &str) -> bool {
        self.annotations
            .iter()
            .any(|annotation| annotation_matches(annotation, marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_matches_ignores_qualifiers() {
        assert!(annotation_matches("Service", "Service"));
        assert!(annotation_matches("@Service", "Service"));
        assert!(annotation_matches(
            "org.springframework.stereotype.Service",
            "Service"
        ));
        assert!(annotation_matches(
            "Transactional(readOnly = true)",
            "org.springframework.transaction.annotation.Transactional"
        ));
        assert!(!annotation_matches("ServiceLocator", "Service"));
    }

    #[test]
    fn test_primary_constructor_selection() {
        let meta: ClassMetadata = serde_json::from_str(
            r#"{
                "qualified_name": "com.example.UserService",
                "kind": "CLASS",
                "constructors": [
                    { "parameters": [] },
                    { "primary": true, "parameters": [{ "name": "repo", "type": "com.example.Repo" }] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(meta.kind, ClassKind::Class);
        assert_eq!(meta.simple_name(), "UserService");
        assert_eq!(meta.package(), "com.example");
        let primary = meta.primary_constructor().unwrap();
        assert_eq!(primary.parameters.len(), 1);
    }

    #[test]
    fn test_method_visibility_defaults_to_public() {
        let method: MethodMetadata =
            serde_json::from_str(r#"{ "name": "find", "return_type": "String" }"#).unwrap();
        assert_eq!(method.visibility, Visibility::Public);
        assert!(!method.inherited);
    }
}
