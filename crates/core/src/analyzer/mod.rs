//! Service class analysis
//!
//! Turns the declared shape of a service class into the
//! [`StubGenerationInfo`] the test scaffold composer consumes.

pub mod markers;

pub use markers::{MUTATOR_PREFIXES, Markers, is_mutator};

use crate::{
    error::{Error, Result},
    interfaces::ClassSource,
    parser::resolve,
    types::{
        ClassMetadata, MethodMetadata, MockDependency, ParameterInfo, ParameterMetadata,
        StubGenerationInfo, TestMethodInfo, TypeKind, Visibility,
    },
    utils::decapitalize,
};
use tracing::{debug, warn};

/// Methods every class has that are never worth a test
const EXCLUDED_METHODS: &[&str] = &["equals", "hashCode", "toString", "copy"];

pub struct ServiceAnalyzer<'a> {
    classes: &'a dyn ClassSource,
    markers: Markers,
}

impl<'a> ServiceAnalyzer<'a> {
    pub fn new(classes: &'a dyn ClassSource) -> Self {
        Self {
            classes,
            markers: Markers::default(),
        }
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn analyze(&self, class_name: &str) -> Result<StubGenerationInfo> {
        debug!("Analyzing {}", class_name);
        let class = self
            .classes
            .load(class_name)?
            .ok_or_else(|| Error::ClassNotFound {
                class_name: class_name.to_string(),
            })?;

        if !Markers::matches_any(&class.annotations, &self.markers.service) {
            return Err(Error::MissingRequiredMarker {
                class_name: class_name.to_string(),
                marker: self.markers.service_label(),
            });
        }

        let mock_dependencies = match class.primary_constructor() {
            Some(constructor) => constructor
                .parameters
                .iter()
                .map(|parameter| self.dependency(&class, parameter))
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        let test_methods: Vec<TestMethodInfo> = class
            .methods
            .iter()
            .filter(|method| is_testable(method))
            .map(|method| self.test_method(method))
            .collect();

        debug!(
            "{}: {} dependencies, {} methods",
            class_name,
            mock_dependencies.len(),
            test_methods.len()
        );

        let simple_class_name = class.simple_name().to_string();
        Ok(StubGenerationInfo {
            package_name: class.package().to_string(),
            test_class_name: format!("{simple_class_name}Test"),
            service_instance_name: decapitalize(&simple_class_name),
            simple_class_name,
            mock_dependencies,
            test_methods,
        })
    }

    fn dependency(&self, class: &ClassMetadata, parameter: &ParameterMetadata) -> Result<MockDependency> {
        let type_name = parameter.type_name.trim();
        let unresolvable = || Error::UnresolvableParameterType {
            class_name: class.qualified_name.clone(),
            parameter: parameter.name.clone(),
            type_name: parameter.type_name.clone(),
        };

        let bare = type_name.trim_end_matches('?').trim();
        if bare.is_empty() || bare == "*" || bare.starts_with('?') {
            return Err(unresolvable());
        }

        let resolved = resolve(type_name);
        let base_name = bare.split('<').next().unwrap_or(bare).trim();
        if class.type_parameters.iter().any(|tp| tp == base_name) {
            return Err(unresolvable());
        }
        // An invalid name falls back to Any during resolution
        if resolved.kind == TypeKind::Any && !matches!(resolved.simple_name(), "Any" | "Object") {
            return Err(unresolvable());
        }

        let relaxed = match resolved.kind {
            TypeKind::UserDefined => match self.classes.load(&resolved.name) {
                Ok(Some(dependency)) => dependency.is_interface(),
                Ok(None) => {
                    debug!("Dependency type {} not on the classpath, using a relaxed mock", resolved.name);
                    true
                }
                Err(e) => {
                    warn!("Could not inspect dependency type {}: {}", resolved.name, e);
                    true
                }
            },
            _ => true,
        };

        Ok(MockDependency {
            name: parameter.name.clone(),
            declared_type: type_name.to_string(),
            relaxed,
        })
    }

    fn test_method(&self, method: &MethodMetadata) -> TestMethodInfo {
        TestMethodInfo {
            function_name: method.name.clone(),
            parameters: method
                .parameters
                .iter()
                .map(|p| ParameterInfo::new(p.name.clone(), p.type_name.clone()))
                .collect(),
            return_type: method.return_type.clone(),
            is_transactional: Markers::matches_any(&method.annotations, &self.markers.transactional),
            is_mutator: is_mutator(&method.name, &method.annotations, &self.markers),
        }
    }
}

fn is_testable(method: &MethodMetadata) -> bool {
    method.visibility == Visibility::Public
        && !method.inherited
        && !EXCLUDED_METHODS.contains(&method.name.as_str())
        && !is_component_accessor(&method.name)
}

/// `component1`, `component2`, ... generated for data classes
fn is_component_accessor(name: &str) -> bool {
    name.strip_prefix("component")
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}
