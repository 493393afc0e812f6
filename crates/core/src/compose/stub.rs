use super::write_source;
use crate::{
    codegen::{FunSpec, KotlinFile, PropertySpec, TypeSpec, render},
    error::Result,
    parser::resolve,
    synth::{body_for, body_from_template, initializer_for},
    types::{FieldInfo, MethodInfo, StubInfo},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Composes data-holder stub classes from a [`StubInfo`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StubComposer;

impl StubComposer {
    pub fn new() -> Self {
        Self
    }

    /// Kotlin source for the stub. Fields and methods keep their input order.
    pub fn compose(&self, info: &StubInfo) -> String {
        render(&self.build(info))
    }

    pub fn build(&self, info: &StubInfo) -> KotlinFile {
        debug!(
            "Composing stub {}.{} ({} fields, {} methods)",
            info.package_name,
            info.class_name,
            info.fields.len(),
            info.methods.len()
        );

        let mut file = KotlinFile::new(info.package_name.clone());
        let mut class = TypeSpec::data_class(info.class_name.clone());

        for field in &info.fields {
            class = class.with_constructor_property(field_property(&mut file, field));
        }
        for method in &info.methods {
            class = class.with_function(method_function(&mut file, method));
        }

        file.with_type(class)
    }

    /// Write `<output_dir>/<package path>/<ClassName>.kt`
    pub fn write_to(&self, info: &StubInfo, output_dir: &Path) -> Result<PathBuf> {
        let text = self.compose(info);
        write_source(output_dir, &info.package_name, &info.class_name, &text)
    }
}

fn field_property(file: &mut KotlinFile, field: &FieldInfo) -> PropertySpec {
    let ty = resolve(&field.type_name);
    let property = PropertySpec::val(field.name.clone(), ty.to_kotlin(&mut file.imports));
    match initializer_for(&ty, field.default_value.as_deref()).expression() {
        Some(initializer) => property.with_initializer(initializer),
        None => property,
    }
}

fn method_function(file: &mut KotlinFile, method: &MethodInfo) -> FunSpec {
    let return_type = resolve(&method.return_type);
    let mut function = FunSpec::new(method.name.clone());

    for parameter in &method.parameters {
        let type_name = resolve(&parameter.type_name).to_kotlin(&mut file.imports);
        function = function.with_parameter(parameter.name.clone(), type_name);
    }
    if !return_type.is_unit() || return_type.nullable {
        function = function.returns(return_type.to_kotlin(&mut file.imports));
    }

    let body = match &method.body_template {
        Some(template) => body_from_template(template),
        None => body_for(&return_type, &method.name),
    };
    function.with_body(body.into_fun_body())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldInfo, MethodInfo};

    #[test]
    fn test_empty_stub() {
        let info = StubInfo::new("com.okdori.test", "MyDataStub");
        assert_eq!(
            StubComposer::new().compose(&info),
            "package com.okdori.test\n\ndata class MyDataStub()\n"
        );
    }

    #[test]
    fn test_stub_with_fields() {
        let info = StubInfo::new("com.okdori.test", "UserStub")
            .with_field(FieldInfo::new("id", "Long").with_default("123L"))
            .with_field(FieldInfo::new("name", "String"))
            .with_field(FieldInfo::new("isActive", "Boolean").with_default("true"))
            .with_field(FieldInfo::new("tags", "List<String>"))
            .with_field(FieldInfo::new("metadata", "Map<String, Any?>"))
            .with_field(FieldInfo::new("optionalValue", "java.util.Optional<String>"))
            .with_field(FieldInfo::new("nickname", "String?"));

        insta::assert_snapshot!(StubComposer::new().compose(&info), @r#"
        package com.okdori.test

        import java.util.Optional

        data class UserStub(
            val id: Long = 123L,
            val name: String = "",
            val isActive: Boolean = true,
            val tags: List<String> = emptyList(),
            val metadata: Map<String, Any?> = emptyMap(),
            val optionalValue: Optional<String> = Optional.empty(),
            val nickname: String? = null,
        )
        "#);
    }

    #[test]
    fn test_stub_with_methods() {
        let info = StubInfo::new("com.okdori.api", "ServiceStub")
            .with_method(MethodInfo::new("doSomething", "Unit"))
            .with_method(
                MethodInfo::new("calculate", "Int")
                    .with_parameter("a", "Int")
                    .with_parameter("b", "Int"),
            )
            .with_method(MethodInfo::new("getData", "String?"))
            .with_method(MethodInfo::new("fetchUser", "com.okdori.model.User").with_parameter("id", "Long"))
            .with_method(
                MethodInfo::new("processList", "List<String>")
                    .with_parameter("items", "List<String>")
                    .with_body("return items.map { it.uppercase() }"),
            );

        insta::assert_snapshot!(StubComposer::new().compose(&info), @r#"
        package com.okdori.api

        import com.okdori.model.User

        data class ServiceStub() {
            fun doSomething() {
            }

            fun calculate(a: Int, b: Int): Int = 0

            fun getData(): String? = null

            fun fetchUser(id: Long): User = throw NotImplementedError("Method 'fetchUser' not implemented")

            fun processList(items: List<String>): List<String> = items.map { it.uppercase() }
        }
        "#);
    }

    #[test]
    fn test_block_template_is_kept_verbatim() {
        let info = StubInfo::new("p", "S").with_method(
            MethodInfo::new("log", "Unit").with_body("println(\"a\")\nprintln(\"b\")"),
        );
        let text = StubComposer::new().compose(&info);
        assert!(text.contains("    fun log() {\n        println(\"a\")\n        println(\"b\")\n    }\n"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let info = StubInfo::new("com.example", "Stub")
            .with_field(FieldInfo::new("b", "com.example.model.B"))
            .with_field(FieldInfo::new("a", "com.example.other.A"))
            .with_field(FieldInfo::new("o", "Optional<Int>"));
        let composer = StubComposer::new();
        let first = composer.compose(&info);
        assert_eq!(first, composer.compose(&info));
        assert!(first.contains(
            "import com.example.model.B\nimport com.example.other.A\nimport java.util.Optional\n"
        ));
        // Fields keep their declaration order even though imports are sorted
        assert!(first.find("val b").unwrap() < first.find("val a").unwrap());
    }
}
