use crate::{
    error::{Error, Result},
    parser::type_signature::resolve,
    types::{
        ClassKind, ClassMetadata, ConstructorMetadata, MethodMetadata, ParameterMetadata,
        TypeKind, Visibility, annotation_matches,
    },
};
use std::collections::HashMap;
use tree_sitter::{Node, Parser, Tree};

/// Constructor annotations that mark the injection constructor
const INJECTION_MARKERS: &[&str] = &["Autowired", "Inject"];

/// `java.lang` members referenced by simple name that the resolver does not model
const JAVA_LANG_TYPES: &[&str] = &[
    "Number",
    "CharSequence",
    "Comparable",
    "Runnable",
    "Thread",
    "Throwable",
    "Exception",
    "RuntimeException",
    "Class",
    "Enum",
    "Record",
    "StringBuilder",
];

pub struct JavaParser {
    parser: Parser,
}

impl JavaParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| Error::ParseError("Failed to parse source code".to_string()))
    }

    /// Extract the top-level type named `simple_name` from a compilation unit
    pub fn extract_class(&mut self, source: &str, simple_name: &str) -> Result<Option<ClassMetadata>> {
        let tree = self.parse(source)?;
        let root = tree.root_node();
        let mut extractor = ClassExtractor::new(source);
        extractor.read_header(root);

        let mut cursor = root.walk();
        let declaration = root.children(&mut cursor).find(|child| {
            is_type_declaration(child.kind())
                && child
                    .child_by_field_name("name")
                    .is_some_and(|name| extractor.text(name) == simple_name)
        });

        Ok(declaration.map(|node| extractor.extract(node, simple_name)))
    }
}

fn is_type_declaration(kind: &str) -> bool {
    matches!(
        kind,
        "class_declaration" | "interface_declaration" | "record_declaration" | "enum_declaration"
    )
}

struct ClassExtractor<'a> {
    source: &'a str,
    package: String,
    /// simple name -> qualified name
    imports: HashMap<String, String>,
    type_parameters: Vec<String>,
}

impl<'a> ClassExtractor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            package: String::new(),
            imports: HashMap::new(),
            type_parameters: Vec::new(),
        }
    }

    fn text(&self, node: Node) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    fn read_header(&mut self, root: Node) {
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "package_declaration" => {
                    let mut inner = child.walk();
                    for part in child.named_children(&mut inner) {
                        if matches!(part.kind(), "scoped_identifier" | "identifier") {
                            self.package = self.text(part).to_string();
                        }
                    }
                }
                "import_declaration" => {
                    let statement = self.text(child);
                    let path = statement
                        .trim()
                        .trim_start_matches("import")
                        .trim_end_matches(';')
                        .trim();
                    if path.starts_with("static ") || path.ends_with('*') {
                        continue;
                    }
                    let path: String = path.chars().filter(|c| !c.is_whitespace()).collect();
                    if let Some((_, simple)) = path.rsplit_once('.') {
                        self.imports.insert(simple.to_string(), path.clone());
                    }
                }
                _ => {}
            }
        }
    }

    fn extract(&mut self, node: Node, simple_name: &str) -> ClassMetadata {
        let kind = if node.kind() == "interface_declaration" {
            ClassKind::Interface
        } else {
            ClassKind::Class
        };

        if let Some(parameters) = node.child_by_field_name("type_parameters") {
            self.type_parameters = self.type_parameter_names(parameters);
        }

        let qualified_name = if self.package.is_empty() {
            simple_name.to_string()
        } else {
            format!("{}.{}", self.package, simple_name)
        };

        let annotations = self.annotations(node);
        let mut constructors = Vec::new();
        let mut methods = Vec::new();
        let mut fields = Vec::new();

        if let Some(body) = node.child_by_field_name("body") {
            let mut cursor = body.walk();
            for member in body.children(&mut cursor) {
                match member.kind() {
                    "constructor_declaration" => constructors.push(self.constructor(member)),
                    "method_declaration" => {
                        if let Some(method) = self.method(member, kind) {
                            methods.push(method);
                        }
                    }
                    "field_declaration" => fields.extend(self.fields(member)),
                    _ => {}
                }
            }
        }

        if node.kind() == "record_declaration" {
            if let Some(parameters) = node.child_by_field_name("parameters") {
                constructors.push(ConstructorMetadata {
                    primary: true,
                    parameters: self.parameters(parameters),
                });
            }
        }

        // Lombok-generated constructors
        if constructors.is_empty() {
            let generated = if annotations.iter().any(|a| annotation_matches(a, "RequiredArgsConstructor")) {
                Some(
                    fields
                        .iter()
                        .filter(|field| field.is_final && !field.initialized)
                        .collect::<Vec<_>>(),
                )
            } else if annotations.iter().any(|a| annotation_matches(a, "AllArgsConstructor")) {
                Some(fields.iter().collect())
            } else {
                None
            };
            if let Some(generated) = generated {
                constructors.push(ConstructorMetadata {
                    primary: true,
                    parameters: generated.into_iter().map(|field| field.parameter.clone()).collect(),
                });
            }
        }

        if constructors.len() == 1 {
            constructors[0].primary = true;
        }

        ClassMetadata {
            qualified_name,
            kind,
            annotations,
            type_parameters: self.type_parameters.clone(),
            constructors,
            methods,
        }
    }

    fn type_parameter_names(&self, node: Node) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = node.walk();
        for parameter in node.named_children(&mut cursor) {
            if parameter.kind() != "type_parameter" {
                continue;
            }
            let mut inner = parameter.walk();
            if let Some(name) = parameter
                .named_children(&mut inner)
                .find(|child| matches!(child.kind(), "type_identifier" | "identifier"))
            {
                names.push(self.text(name).to_string());
            }
        }
        names
    }

    /// Annotation names from the `modifiers` child of a declaration
    fn annotations(&self, node: Node) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() != "modifiers" {
                continue;
            }
            let mut inner = child.walk();
            for modifier in child.children(&mut inner) {
                if matches!(modifier.kind(), "marker_annotation" | "annotation") {
                    if let Some(name) = modifier.child_by_field_name("name") {
                        names.push(self.text(name).to_string());
                    }
                }
            }
        }
        names
    }

    fn has_modifier(&self, node: Node, keyword: &str) -> bool {
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .filter(|child| child.kind() == "modifiers")
            .any(|modifiers| {
                let mut inner = modifiers.walk();
                modifiers.children(&mut inner).any(|m| m.kind() == keyword)
            })
    }

    fn visibility(&self, node: Node, owner: ClassKind) -> Visibility {
        if self.has_modifier(node, "public") {
            Visibility::Public
        } else if self.has_modifier(node, "protected") {
            Visibility::Protected
        } else if self.has_modifier(node, "private") {
            Visibility::Private
        } else if owner == ClassKind::Interface {
            Visibility::Public
        } else {
            // package-private
            Visibility::Internal
        }
    }

    fn is_nullable(&self, node: Node) -> bool {
        self.annotations(node)
            .iter()
            .any(|annotation| annotation_matches(annotation, "Nullable"))
    }

    fn constructor(&self, node: Node) -> ConstructorMetadata {
        let annotations = self.annotations(node);
        let primary = annotations
            .iter()
            .any(|a| INJECTION_MARKERS.iter().any(|marker| annotation_matches(a, marker)));
        let parameters = node
            .child_by_field_name("parameters")
            .map(|parameters| self.parameters(parameters))
            .unwrap_or_default();
        ConstructorMetadata { primary, parameters }
    }

    fn method(&self, node: Node, owner: ClassKind) -> Option<MethodMetadata> {
        if self.has_modifier(node, "static") {
            return None;
        }
        let name = self.text(node.child_by_field_name("name")?).to_string();

        let mut return_type = node
            .child_by_field_name("type")
            .map(|ty| self.type_signature(ty))
            .unwrap_or_else(|| "void".to_string());
        if self.is_nullable(node) {
            return_type.push('?');
        }

        let parameters = node
            .child_by_field_name("parameters")
            .map(|parameters| self.parameters(parameters))
            .unwrap_or_default();

        Some(MethodMetadata {
            name,
            visibility: self.visibility(node, owner),
            parameters,
            return_type,
            annotations: self.annotations(node),
            inherited: false,
        })
    }

    fn parameters(&self, node: Node) -> Vec<ParameterMetadata> {
        let mut parameters = Vec::new();
        let mut cursor = node.walk();
        for parameter in node.named_children(&mut cursor) {
            match parameter.kind() {
                "formal_parameter" => {
                    let Some(name) = parameter.child_by_field_name("name") else {
                        continue;
                    };
                    let mut type_name = parameter
                        .child_by_field_name("type")
                        .map(|ty| self.type_signature(ty))
                        .unwrap_or_default();
                    if self.is_nullable(parameter) && !type_name.is_empty() {
                        type_name.push('?');
                    }
                    parameters.push(ParameterMetadata {
                        name: self.text(name).to_string(),
                        type_name,
                    });
                }
                "spread_parameter" => {
                    let mut inner = parameter.walk();
                    let children: Vec<Node> = parameter.named_children(&mut inner).collect();
                    let element = children
                        .iter()
                        .find(|child| !matches!(child.kind(), "modifiers" | "variable_declarator"));
                    let name = children
                        .iter()
                        .find(|child| child.kind() == "variable_declarator")
                        .and_then(|declarator| declarator.child_by_field_name("name"));
                    if let (Some(element), Some(name)) = (element, name) {
                        parameters.push(ParameterMetadata {
                            name: self.text(name).to_string(),
                            type_name: format!("Array<{}>", self.type_signature(*element)),
                        });
                    }
                }
                _ => {}
            }
        }
        parameters
    }

    fn fields(&self, node: Node) -> Vec<FieldDeclaration> {
        if self.has_modifier(node, "static") {
            return Vec::new();
        }
        let Some(ty) = node.child_by_field_name("type") else {
            return Vec::new();
        };
        let mut type_name = self.type_signature(ty);
        if self.is_nullable(node) {
            type_name.push('?');
        }
        let is_final = self.has_modifier(node, "final");

        let mut cursor = node.walk();
        node.children_by_field_name("declarator", &mut cursor)
            .filter_map(|declarator| {
                let name = declarator.child_by_field_name("name")?;
                Some(FieldDeclaration {
                    parameter: ParameterMetadata {
                        name: self.text(name).to_string(),
                        type_name: type_name.clone(),
                    },
                    is_final,
                    initialized: declarator.child_by_field_name("value").is_some(),
                })
            })
            .collect()
    }

    /// Render a type node as a signature the resolver understands, with
    /// simple names qualified through imports or the current package
    fn type_signature(&self, node: Node) -> String {
        match node.kind() {
            "type_identifier" => self.qualify(self.text(node)),
            "scoped_type_identifier" => {
                let text: String = self.text(node).chars().filter(|c| !c.is_whitespace()).collect();
                match text.split_once('.') {
                    // Nested type such as `Map.Entry`
                    Some((outer, rest)) if outer.starts_with(char::is_uppercase) => {
                        format!("{}.{}", self.qualify(outer), rest)
                    }
                    _ => text,
                }
            }
            "generic_type" => {
                let mut cursor = node.walk();
                let children: Vec<Node> = node.named_children(&mut cursor).collect();
                let base = children
                    .iter()
                    .find(|child| matches!(child.kind(), "type_identifier" | "scoped_type_identifier"))
                    .map(|base| self.type_signature(*base))
                    .unwrap_or_default();
                let arguments = children
                    .iter()
                    .find(|child| child.kind() == "type_arguments")
                    .map(|arguments| {
                        let mut inner = arguments.walk();
                        arguments
                            .named_children(&mut inner)
                            .map(|argument| self.type_signature(argument))
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                format!("{base}<{arguments}>")
            }
            "array_type" => {
                let element = node
                    .child_by_field_name("element")
                    .map(|element| self.type_signature(element))
                    .unwrap_or_default();
                format!("Array<{element}>")
            }
            "wildcard" => {
                let mut cursor = node.walk();
                let bound = node
                    .named_children(&mut cursor)
                    .filter(|child| !matches!(child.kind(), "marker_annotation" | "annotation" | "super"))
                    .last();
                match bound {
                    Some(bound) => {
                        let keyword = if self.text(node).contains("super") { "super" } else { "extends" };
                        format!("? {keyword} {}", self.type_signature(bound))
                    }
                    None => "?".to_string(),
                }
            }
            "annotated_type" => {
                let mut cursor = node.walk();
                let children: Vec<Node> = node.named_children(&mut cursor).collect();
                let nullable = children.iter().any(|child| {
                    matches!(child.kind(), "marker_annotation" | "annotation")
                        && child
                            .child_by_field_name("name")
                            .is_some_and(|name| annotation_matches(self.text(name), "Nullable"))
                });
                let inner = children
                    .iter()
                    .find(|child| !matches!(child.kind(), "marker_annotation" | "annotation"))
                    .map(|inner| self.type_signature(*inner))
                    .unwrap_or_default();
                if nullable { format!("{inner}?") } else { inner }
            }
            _ => self.text(node).split_whitespace().collect(),
        }
    }

    fn qualify(&self, simple: &str) -> String {
        if self.type_parameters.iter().any(|parameter| parameter == simple) {
            return simple.to_string();
        }
        if let Some(qualified) = self.imports.get(simple) {
            return qualified.clone();
        }
        if resolve(simple).kind != TypeKind::UserDefined {
            return simple.to_string();
        }
        if JAVA_LANG_TYPES.contains(&simple) {
            return format!("java.lang.{simple}");
        }
        if self.package.is_empty() {
            simple.to_string()
        } else {
            format!("{}.{}", self.package, simple)
        }
    }
}

struct FieldDeclaration {
    parameter: ParameterMetadata,
    is_final: bool,
    initialized: bool,
}
