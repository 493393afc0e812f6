//! Single-pass serialization of a [`KotlinFile`] tree

use super::model::{CodeBlock, FunBody, FunSpec, KotlinFile, PropertySpec, TypeSpec};

pub const INDENT: &str = "    ";

struct CodeWriter {
    out: String,
    level: usize,
}

impl CodeWriter {
    fn new() -> Self {
        Self {
            out: String::new(),
            level: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn indent(&mut self) {
        self.level += 1;
    }

    fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }
}

/// Render a file to Kotlin source text ending in a single newline
pub fn render(file: &KotlinFile) -> String {
    let mut writer = CodeWriter::new();

    if !file.package.is_empty() {
        writer.line(&format!("package {}", file.package));
        writer.blank();
    }

    if !file.imports.is_empty() {
        for import in file.imports.iter() {
            writer.line(&format!("import {import}"));
        }
        writer.blank();
    }

    for (i, type_spec) in file.types.iter().enumerate() {
        if i > 0 {
            writer.blank();
        }
        write_type(&mut writer, type_spec);
    }

    writer.out
}

fn write_kdoc(writer: &mut CodeWriter, kdoc: &[String]) {
    if kdoc.is_empty() {
        return;
    }
    writer.line("/**");
    for line in kdoc {
        if line.is_empty() {
            writer.line(" *");
        } else {
            writer.line(&format!(" * {line}"));
        }
    }
    writer.line(" */");
}

fn write_type(writer: &mut CodeWriter, type_spec: &TypeSpec) {
    write_kdoc(writer, &type_spec.kdoc);
    for annotation in &type_spec.annotations {
        writer.line(annotation);
    }

    let mut header = String::new();
    for modifier in &type_spec.modifiers {
        header.push_str(modifier.keyword());
        header.push(' ');
    }
    header.push_str("class ");
    header.push_str(&type_spec.name);

    let body_open = if type_spec.has_body() { " {" } else { "" };

    if type_spec.constructor_properties.is_empty() {
        if type_spec.is_data() {
            header.push_str("()");
        }
        writer.line(&format!("{header}{body_open}"));
    } else {
        writer.line(&format!("{header}("));
        writer.indent();
        for property in &type_spec.constructor_properties {
            writer.line(&format!("{},", property_declaration(property)));
        }
        writer.dedent();
        writer.line(&format!("){body_open}"));
    }

    if !type_spec.has_body() {
        return;
    }

    writer.indent();
    let mut first = true;
    for property in &type_spec.properties {
        writer.line(&property_declaration(property));
        first = false;
    }
    for function in &type_spec.functions {
        if !first {
            writer.blank();
        }
        write_function(writer, function);
        first = false;
    }
    for nested in &type_spec.nested_types {
        if !first {
            writer.blank();
        }
        write_type(writer, nested);
        first = false;
    }
    writer.dedent();
    writer.line("}");
}

fn property_declaration(property: &PropertySpec) -> String {
    let mut text = String::new();
    if property.private {
        text.push_str("private ");
    }
    if property.lateinit {
        text.push_str("lateinit ");
    }
    text.push_str(if property.mutable { "var " } else { "val " });
    text.push_str(&property.name);
    text.push_str(": ");
    text.push_str(&property.type_name);
    if let Some(initializer) = &property.initializer {
        text.push_str(" = ");
        text.push_str(initializer);
    }
    text
}

fn write_function(writer: &mut CodeWriter, function: &FunSpec) {
    write_kdoc(writer, &function.kdoc);
    for annotation in &function.annotations {
        writer.line(annotation);
    }

    let parameters: Vec<String> = function
        .parameters
        .iter()
        .map(|(name, type_name)| format!("{name}: {type_name}"))
        .collect();
    let mut signature = format!("fun {}({})", function.name, parameters.join(", "));
    if let Some(return_type) = &function.return_type {
        signature.push_str(": ");
        signature.push_str(return_type);
    }

    match &function.body {
        FunBody::Expression(expression) => {
            writer.line(&format!("{signature} = {expression}"));
        }
        FunBody::Block(block) => {
            writer.line(&format!("{signature} {{"));
            write_block(writer, block);
            writer.line("}");
        }
    }
}

fn write_block(writer: &mut CodeWriter, block: &CodeBlock) {
    writer.indent();
    for line in block.lines() {
        match line {
            Some((indent, text)) => {
                let nested = INDENT.repeat(indent);
                writer.line(&format!("{nested}{text}"));
            }
            None => writer.blank(),
        }
    }
    writer.dedent();
}
