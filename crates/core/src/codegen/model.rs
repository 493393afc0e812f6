//! In-memory structure of a generated Kotlin file
//!
//! Composers build these values first and hand the finished tree to
//! [`render`](super::render) once, so a file is never half written.

use super::imports::ImportSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KotlinFile {
    pub package: String,
    pub imports: ImportSet,
    pub types: Vec<TypeSpec>,
}

impl KotlinFile {
    pub fn new(package: impl Into<String>) -> Self {
        let package = package.into();
        Self {
            imports: ImportSet::new(package.clone()),
            package,
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, type_spec: TypeSpec) -> Self {
        self.types.push(type_spec);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeModifier {
    Data,
    Inner,
}

impl TypeModifier {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeModifier::Data => "data",
            TypeModifier::Inner => "inner",
        }
    }
}

/// A class declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    pub kdoc: Vec<String>,
    pub annotations: Vec<String>,
    pub modifiers: Vec<TypeModifier>,
    /// `val` parameters of the primary constructor
    pub constructor_properties: Vec<PropertySpec>,
    pub properties: Vec<PropertySpec>,
    pub functions: Vec<FunSpec>,
    pub nested_types: Vec<TypeSpec>,
}

impl TypeSpec {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kdoc: Vec::new(),
            annotations: Vec::new(),
            modifiers: Vec::new(),
            constructor_properties: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
            nested_types: Vec::new(),
        }
    }

    pub fn data_class(name: impl Into<String>) -> Self {
        Self::class(name).with_modifier(TypeModifier::Data)
    }

    pub fn with_modifier(mut self, modifier: TypeModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_kdoc(mut self, line: impl Into<String>) -> Self {
        self.kdoc.push(line.into());
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn with_constructor_property(mut self, property: PropertySpec) -> Self {
        self.constructor_properties.push(property);
        self
    }

    pub fn with_property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_function(mut self, function: FunSpec) -> Self {
        self.functions.push(function);
        self
    }

    pub fn with_nested_type(mut self, nested: TypeSpec) -> Self {
        self.nested_types.push(nested);
        self
    }

    pub fn is_data(&self) -> bool {
        self.modifiers.contains(&TypeModifier::Data)
    }

    pub fn has_body(&self) -> bool {
        !(self.properties.is_empty() && self.functions.is_empty() && self.nested_types.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: String,
    /// Rendered Kotlin type text
    pub type_name: String,
    pub mutable: bool,
    pub private: bool,
    pub lateinit: bool,
    pub initializer: Option<String>,
}

impl PropertySpec {
    pub fn val(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            mutable: false,
            private: false,
            lateinit: false,
            initializer: None,
        }
    }

    pub fn var(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            mutable: true,
            ..Self::val(name, type_name)
        }
    }

    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn lateinit(mut self) -> Self {
        self.lateinit = true;
        self
    }

    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunBody {
    /// `= expr`
    Expression(String),
    /// `{ ... }`, possibly empty
    Block(CodeBlock),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunSpec {
    pub name: String,
    pub kdoc: Vec<String>,
    pub annotations: Vec<String>,
    /// (name, rendered type)
    pub parameters: Vec<(String, String)>,
    /// `None` for Unit functions
    pub return_type: Option<String>,
    pub body: FunBody,
}

impl FunSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kdoc: Vec::new(),
            annotations: Vec::new(),
            parameters: Vec::new(),
            return_type: None,
            body: FunBody::Block(CodeBlock::new()),
        }
    }

    pub fn with_kdoc(mut self, line: impl Into<String>) -> Self {
        self.kdoc.push(line.into());
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.parameters.push((name.into(), type_name.into()));
        self
    }

    pub fn returns(mut self, type_name: impl Into<String>) -> Self {
        self.return_type = Some(type_name.into());
        self
    }

    pub fn with_body(mut self, body: FunBody) -> Self {
        self.body = body;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CodeLine {
    Text { indent: usize, text: String },
    Blank,
}

/// Lines of a function body, each with a nesting level relative to the body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    lines: Vec<CodeLine>,
    indent: usize,
}

impl CodeBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A block holding `text` verbatim, one code line per input line
    pub fn verbatim(text: &str) -> Self {
        let mut block = Self::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                block.blank();
            } else {
                block.line(line.trim_end());
            }
        }
        block
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(CodeLine::Text {
            indent: self.indent,
            text: text.into(),
        });
        self
    }

    pub fn comment(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.line(format!("// {}", text.as_ref()))
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(CodeLine::Blank);
        self
    }

    /// Emit `header {` and nest the following lines until [`CodeBlock::close`]
    pub fn open(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.line(format!("{} {{", header.as_ref()));
        self.indent += 1;
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        self.line("}")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines as `(indent, text)`; blank lines are `None`
    pub fn lines(&self) -> impl Iterator<Item = Option<(usize, &str)>> {
        self.lines.iter().map(|line| match line {
            CodeLine::Text { indent, text } => Some((*indent, text.as_str())),
            CodeLine::Blank => None,
        })
    }
}
