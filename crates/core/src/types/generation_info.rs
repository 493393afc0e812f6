use serde::Serialize;

use super::stub_info::ParameterInfo;

/// A constructor dependency of the analyzed service that gets replaced by a mock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockDependency {
    pub name: String,
    /// Qualified type signature of the constructor parameter
    pub declared_type: String,
    /// Interfaces (and types we could not inspect) get relaxed mocks
    pub relaxed: bool,
}

/// Read-only summary of one public method of the analyzed service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestMethodInfo {
    pub function_name: String,
    pub parameters: Vec<ParameterInfo>,
    pub return_type: String,
    pub is_transactional: bool,
    pub is_mutator: bool,
}

impl TestMethodInfo {
    /// Failure-path tests are only worth scaffolding for state-changing methods
    pub fn needs_failure_test(&self) -> bool {
        self.is_transactional || self.is_mutator
    }
}

/// Everything the test scaffold composer needs about one service class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubGenerationInfo {
    pub package_name: String,
    pub simple_class_name: String,
    pub test_class_name: String,
    pub service_instance_name: String,
    pub mock_dependencies: Vec<MockDependency>,
    pub test_methods: Vec<TestMethodInfo>,
}

impl StubGenerationInfo {
    pub fn qualified_class_name(&self) -> String {
        if self.package_name.is_empty() {
            self.simple_class_name.clone()
        } else {
            format!("{}.{}", self.package_name, self.simple_class_name)
        }
    }
}
