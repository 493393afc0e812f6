//! JUnit 5 + MockK test class skeletons for analyzed services

use super::write_source;
use crate::{
    codegen::{CodeBlock, FunBody, FunSpec, KotlinFile, PropertySpec, TypeModifier, TypeSpec, render},
    error::Result,
    parser::resolve,
    synth::{ArgumentValue, argument_for, assertion_for},
    types::{MockDependency, StubGenerationInfo, TestMethodInfo},
    utils::{capitalize, decapitalize, string_literal},
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const JUNIT: &str = "org.junit.jupiter.api";
const MOCKK: &str = "io.mockk.mockk";

#[derive(Debug, Clone, Copy, Default)]
pub struct TestScaffoldComposer;

impl TestScaffoldComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(&self, info: &StubGenerationInfo) -> String {
        render(&self.build(info))
    }

    pub fn build(&self, info: &StubGenerationInfo) -> KotlinFile {
        debug!(
            "Composing {} ({} dependencies, {} methods)",
            info.test_class_name,
            info.mock_dependencies.len(),
            info.test_methods.len()
        );
        ScaffoldBuilder::new(info).build()
    }

    /// Write `<output_dir>/<package path>/<TestClass>.kt` and return its path
    pub fn write_to(&self, info: &StubGenerationInfo, output_dir: &Path) -> Result<PathBuf> {
        let text = self.compose(info);
        write_source(output_dir, &info.package_name, &info.test_class_name, &text)
    }
}

/// A dependency with its rendered (non-null) type
struct Mock<'a> {
    dependency: &'a MockDependency,
    type_name: String,
}

struct ScaffoldBuilder<'a> {
    info: &'a StubGenerationInfo,
    file: KotlinFile,
    mocks: Vec<Mock<'a>>,
}

impl<'a> ScaffoldBuilder<'a> {
    fn new(info: &'a StubGenerationInfo) -> Self {
        Self {
            info,
            file: KotlinFile::new(info.package_name.clone()),
            mocks: Vec::new(),
        }
    }

    fn junit(&mut self, name: &str) -> String {
        format!("@{}", self.file.imports.reference(&format!("{JUNIT}.{name}")))
    }

    fn build(mut self) -> KotlinFile {
        let info = self.info;
        let service_type = self.file.imports.reference(&info.qualified_class_name());

        for dependency in &info.mock_dependencies {
            let type_name = resolve(&dependency.declared_type)
                .with_nullable(false)
                .to_kotlin(&mut self.file.imports);
            self.mocks.push(Mock { dependency, type_name });
        }

        let mut class = TypeSpec::class(info.test_class_name.clone())
            .with_kdoc(format!("Generated by stubsmith for [{}].", info.simple_class_name))
            .with_kdoc("Follow the TODO comments to fill in data, stubbing and assertions.");

        for mock in &self.mocks {
            class = class.with_property(
                PropertySpec::var(mock.dependency.name.clone(), format!("{}?", mock.type_name))
                    .private()
                    .with_initializer("null"),
            );
        }
        class = class.with_property(
            PropertySpec::var(info.service_instance_name.clone(), service_type.clone())
                .private()
                .lateinit(),
        );

        class = class.with_function(self.set_up(&service_type));

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for method in &info.test_methods {
            let count = seen.entry(method.function_name.as_str()).or_insert(0);
            *count += 1;
            // Overloads share a name; nested classes must not
            let suffix = if *count > 1 { count.to_string() } else { String::new() };
            let nested = self.method_tests(method, &suffix);
            class = class.with_nested_type(nested);
        }

        let mut file = self.file;
        file.types.push(class);
        file
    }

    fn set_up(&mut self, service_type: &str) -> FunSpec {
        let mut body = CodeBlock::new();
        if !self.mocks.is_empty() {
            self.file.imports.add_member(MOCKK);
            body.comment("Mock initialization");
            for mock in &self.mocks {
                let arguments = if mock.dependency.relaxed { "relaxed = true" } else { "" };
                body.line(format!(
                    "{} = mockk<{}>({arguments})",
                    mock.dependency.name, mock.type_name
                ));
            }
        }
        let arguments: Vec<String> = self
            .mocks
            .iter()
            .map(|mock| format!("{}!!", mock.dependency.name))
            .collect();
        body.line(format!(
            "{} = {service_type}({})",
            self.info.service_instance_name,
            arguments.join(", ")
        ));

        FunSpec::new("setUp")
            .with_annotation(self.junit("BeforeEach"))
            .with_kdoc("Creates fresh mocks and a new service instance before each test.")
            .with_body(FunBody::Block(body))
    }

    fn method_tests(&mut self, method: &TestMethodInfo, suffix: &str) -> TypeSpec {
        let name = &method.function_name;
        let mut nested = TypeSpec::class(format!("{}{suffix}Test", capitalize(name)))
            .with_modifier(TypeModifier::Inner)
            .with_annotation(self.junit("Nested"))
            .with_annotation(format!(
                "{}({})",
                self.junit("DisplayName"),
                string_literal(&format!("{name}() tests"))
            ));

        nested = nested.with_function(self.success_test(method));
        if method.needs_failure_test() {
            nested = nested.with_function(self.failure_test(method));
        }
        nested
    }

    /// `val <param>: <Type> = <sentinel>` lines; returns the argument names
    fn given_arguments(&mut self, method: &TestMethodInfo, body: &mut CodeBlock) -> Vec<String> {
        let mut names = Vec::new();
        for parameter in &method.parameters {
            let ty = resolve(&parameter.type_name);
            let type_name = ty.to_kotlin(&mut self.file.imports);
            let value = match argument_for(&parameter.name, &ty) {
                ArgumentValue::Value(value) => value.expression().unwrap_or("Unit").to_string(),
                ArgumentValue::RelaxedMock(mocked) => {
                    self.file.imports.add_member(MOCKK);
                    let mocked = mocked.to_kotlin(&mut self.file.imports);
                    format!("mockk<{mocked}>(relaxed = true)")
                }
            };
            body.line(format!(
                "val {}: {type_name} = {value} // TODO: assign realistic test data to '{}'",
                parameter.name, parameter.name
            ));
            names.push(parameter.name.clone());
        }
        names
    }

    fn invocation(&self, method: &TestMethodInfo, arguments: &[String]) -> String {
        format!(
            "{}.{}({})",
            self.info.service_instance_name,
            method.function_name,
            arguments.join(", ")
        )
    }

    fn success_test(&mut self, method: &TestMethodInfo) -> FunSpec {
        let name = &method.function_name;
        let return_type = resolve(&method.return_type);
        let mut body = CodeBlock::new();

        body.comment("Given");
        let arguments = self.given_arguments(method, &mut body);
        if !self.mocks.is_empty() {
            body.comment("TODO: stub the dependency calls this method relies on");
            for mock in &self.mocks {
                body.comment(format!(
                    "every {{ {}!!.someMethod(any()) }} returns someValue",
                    mock.dependency.name
                ));
            }
        }

        body.blank();
        body.comment("When");
        let assertion = assertion_for(&return_type);
        let result_name = if arguments.iter().any(|a| a == "result") {
            "actualResult"
        } else {
            "result"
        };
        let call = self.invocation(method, &arguments);
        match assertion.statement(result_name) {
            Some(statement) => {
                body.line(format!("val {result_name} = {call}"));
                body.blank();
                body.comment("Then");
                body.line(statement);
                if let Some(import) = assertion.import() {
                    self.file.imports.add_member(import);
                }
            }
            None => {
                body.line(call);
                body.blank();
                body.comment("Then");
                body.comment(format!("TODO: {}", assertion.todo));
            }
        }

        if !self.mocks.is_empty() {
            body.blank();
            body.comment("Verify");
            for mock in &self.mocks {
                body.comment(format!(
                    "verify(exactly = 1) {{ {0}!!.someMethod(any()) }} // TODO: name the method actually called on '{0}'",
                    mock.dependency.name
                ));
            }
        }

        FunSpec::new(format!("should_successfully_{}", decapitalize(name)))
            .with_annotation(self.junit("Test"))
            .with_annotation(format!(
                "{}({})",
                self.junit("DisplayName"),
                string_literal(&format!("{name} succeeds"))
            ))
            .with_body(FunBody::Block(body))
    }

    fn failure_test(&mut self, method: &TestMethodInfo) -> FunSpec {
        let name = &method.function_name;
        let mut body = CodeBlock::new();

        body.comment("Given");
        let arguments = self.given_arguments(method, &mut body);
        for mock in &self.mocks {
            body.comment(format!(
                "every {{ {}!!.someMethod(any()) }} throws RuntimeException()",
                mock.dependency.name
            ));
        }
        body.comment(format!("TODO: set up the condition that makes {name} fail"));

        body.blank();
        body.comment("When & Then");
        self.file.imports.add_member(&format!("{JUNIT}.assertThrows"));
        body.comment("TODO: replace Exception with the type actually thrown");
        body.open("assertThrows<Exception>");
        body.line(self.invocation(method, &arguments));
        body.close();

        if !self.mocks.is_empty() {
            body.blank();
            body.comment("Verify");
            for mock in &self.mocks {
                body.comment(format!(
                    "verify(exactly = 1) {{ {0}!!.someMethod(any()) }} // TODO: calls made before the failure",
                    mock.dependency.name
                ));
                body.comment(format!(
                    "verify(exactly = 0) {{ {0}!!.someOtherMethod(any()) }} // TODO: calls that must not happen after the failure",
                    mock.dependency.name
                ));
            }
        }

        FunSpec::new(format!("should_throw_exception_when_{}_fails", decapitalize(name)))
            .with_annotation(self.junit("Test"))
            .with_annotation(format!(
                "{}({})",
                self.junit("DisplayName"),
                string_literal(&format!("{name} fails"))
            ))
            .with_body(FunBody::Block(body))
    }
}
