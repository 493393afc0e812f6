//! Type signature resolution
//!
//! Turns textual signatures such as `Map<String, List<Int>>?` into
//! [`TypeDescriptor`] trees. Resolution is total: any input string yields a
//! descriptor. Malformed generic nesting degrades to wildcard (`*`) arguments
//! instead of failing.

use crate::types::{Primitive, TypeDescriptor, TypeKind};
use tracing::trace;

/// Deeper generic nesting than this resolves to a wildcard
const MAX_DEPTH: usize = 64;

/// Packages whose members are matched by simple name
const KNOWN_PACKAGES: &[&str] = &["kotlin", "kotlin.collections", "java.lang", "java.util"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    TopLevel,
    Argument,
}

/// Resolve a type signature into a structured descriptor.
///
/// A trailing `?` marks the type nullable. Generic arguments are taken from
/// between the first `<` and the last `>` and split on top-level commas only.
pub fn resolve(signature: &str) -> TypeDescriptor {
    resolve_at(signature, 0, Position::TopLevel)
}

fn fallback(position: Position) -> TypeDescriptor {
    match position {
        Position::TopLevel => TypeDescriptor::any(),
        Position::Argument => TypeDescriptor::star(),
    }
}

fn resolve_at(signature: &str, depth: usize, position: Position) -> TypeDescriptor {
    if depth > MAX_DEPTH {
        trace!(signature, "generic nesting too deep, using wildcard");
        return fallback(position);
    }

    // Runs of variance prefixes and `?` are unbounded, so peel them in a loop
    let mut trimmed = signature.trim();
    let mut nullable = false;
    loop {
        if position == Position::Argument {
            if trimmed == "*" || trimmed == "?" {
                return TypeDescriptor::star().with_nullable(nullable);
            }
            if let Some(bounded) = strip_variance(trimmed) {
                trimmed = bounded;
                continue;
            }
        }
        match trimmed.strip_suffix('?') {
            Some(inner) => {
                nullable = true;
                trimmed = inner.trim();
            }
            None => break,
        }
    }

    resolve_shape(signature, trimmed, depth, position).with_nullable(nullable)
}

fn resolve_shape(signature: &str, trimmed: &str, depth: usize, position: Position) -> TypeDescriptor {
    if trimmed.is_empty() || trimmed == "*" {
        return fallback(position);
    }

    let (base, arguments) = split_generic(trimmed);
    if !is_valid_name(base) {
        trace!(signature, "unrecognised type name, using fallback");
        return fallback(position);
    }

    let kind = shape_of(base);
    let descriptor = TypeDescriptor::new(kind, base);

    let type_arguments = match kind {
        TypeKind::List | TypeKind::Set | TypeKind::Optional => {
            match resolve_arguments(signature, arguments, depth) {
                Some(mut args) if args.len() == 1 => vec![args.remove(0)],
                _ => vec![TypeDescriptor::star()],
            }
        }
        TypeKind::Map => match resolve_arguments(signature, arguments, depth) {
            Some(args) if args.len() == 2 => args,
            _ => vec![TypeDescriptor::star(), TypeDescriptor::star()],
        },
        TypeKind::UserDefined => match arguments {
            GenericArguments::None => Vec::new(),
            GenericArguments::Unbalanced => vec![TypeDescriptor::star()],
            GenericArguments::Content(content) if content.trim().is_empty() => Vec::new(),
            GenericArguments::Content(content) => split_top_level(content)
                .into_iter()
                .map(|arg| resolve_at(arg, depth + 1, Position::Argument))
                .collect(),
        },
        _ => Vec::new(),
    };

    descriptor.with_arguments(type_arguments)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GenericArguments<'a> {
    None,
    Content(&'a str),
    /// `<` without a later `>`
    Unbalanced,
}

fn split_generic(signature: &str) -> (&str, GenericArguments<'_>) {
    let Some(open) = signature.find('<') else {
        return (signature, GenericArguments::None);
    };
    let base = signature[..open].trim();
    match signature.rfind('>') {
        Some(close) if close > open => (base, GenericArguments::Content(&signature[open + 1..close])),
        _ => (base, GenericArguments::Unbalanced),
    }
}

/// `None` when the arguments are missing or malformed
fn resolve_arguments(
    signature: &str,
    arguments: GenericArguments<'_>,
    depth: usize,
) -> Option<Vec<TypeDescriptor>> {
    match arguments {
        GenericArguments::None => None,
        GenericArguments::Unbalanced => {
            trace!(signature, "malformed generic signature, using wildcard arguments");
            None
        }
        GenericArguments::Content(content) => Some(
            split_top_level(content)
                .into_iter()
                .map(|arg| resolve_at(arg, depth + 1, Position::Argument))
                .collect(),
        ),
    }
}

/// Split generic argument text on commas at bracket depth zero.
///
/// `String, Map<Int, Long>` splits into `String` and `Map<Int, Long>`.
pub fn split_top_level(content: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in content.char_indices() {
        match ch {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(content[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(content[start..].trim());
    parts
}

/// `? extends T`, `? super T`, `out T` and `in T` all resolve to `T`
fn strip_variance(argument: &str) -> Option<&str> {
    ["? extends ", "? super ", "out ", "in "]
        .iter()
        .find_map(|prefix| argument.strip_prefix(prefix))
        .map(str::trim)
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
                    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
                }
                _ => false,
            }
        })
}

fn shape_of(base: &str) -> TypeKind {
    let simple = match base.rfind('.') {
        Some(idx) if KNOWN_PACKAGES.contains(&&base[..idx]) => &base[idx + 1..],
        Some(_) => return TypeKind::UserDefined,
        None => base,
    };

    match simple {
        "String" => TypeKind::String,
        "Int" | "int" | "Integer" => TypeKind::Primitive(Primitive::Int),
        "Long" | "long" => TypeKind::Primitive(Primitive::Long),
        "Short" | "short" => TypeKind::Primitive(Primitive::Short),
        "Byte" | "byte" => TypeKind::Primitive(Primitive::Byte),
        "Double" | "double" => TypeKind::Primitive(Primitive::Double),
        "Float" | "float" => TypeKind::Primitive(Primitive::Float),
        "Boolean" | "boolean" => TypeKind::Primitive(Primitive::Boolean),
        "Char" | "char" | "Character" => TypeKind::Primitive(Primitive::Char),
        "Unit" | "void" | "Void" => TypeKind::Unit,
        "Any" | "Object" => TypeKind::Any,
        "List" | "MutableList" | "ArrayList" | "LinkedList" | "Collection"
        | "MutableCollection" | "Iterable" => TypeKind::List,
        "Set" | "MutableSet" | "HashSet" | "LinkedHashSet" | "TreeSet" => TypeKind::Set,
        "Map" | "MutableMap" | "HashMap" | "LinkedHashMap" | "TreeMap" => TypeKind::Map,
        "Optional" => TypeKind::Optional,
        _ => TypeKind::UserDefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(signature: &str) -> TypeKind {
        resolve(signature).kind
    }

    #[test]
    fn test_resolve_scalars() {
        assert_eq!(kind("String"), TypeKind::String);
        assert_eq!(kind("kotlin.String"), TypeKind::String);
        assert_eq!(kind("java.lang.String"), TypeKind::String);
        assert_eq!(kind("Long"), TypeKind::Primitive(Primitive::Long));
        assert_eq!(kind("long"), TypeKind::Primitive(Primitive::Long));
        assert_eq!(kind("java.lang.Integer"), TypeKind::Primitive(Primitive::Int));
        assert_eq!(kind("kotlin.Boolean"), TypeKind::Primitive(Primitive::Boolean));
        assert_eq!(kind("kotlin.Unit"), TypeKind::Unit);
        assert_eq!(kind("void"), TypeKind::Unit);
        assert_eq!(kind("Object"), TypeKind::Any);
    }

    #[test]
    fn test_resolve_user_defined_keeps_raw_name() {
        let ty = resolve("com.example.model.User");
        assert_eq!(ty.kind, TypeKind::UserDefined);
        assert_eq!(ty.name, "com.example.model.User");
        assert!(!ty.nullable);

        // Only well-known packages are matched by simple name
        assert_eq!(kind("com.example.List"), TypeKind::UserDefined);
    }

    #[test]
    fn test_resolve_nested_generics() {
        let ty = resolve("Map<String, List<Int>>?");
        assert_eq!(ty.kind, TypeKind::Map);
        assert!(ty.nullable);
        assert_eq!(ty.type_arguments.len(), 2);
        assert_eq!(ty.type_arguments[0].kind, TypeKind::String);
        let value = &ty.type_arguments[1];
        assert_eq!(value.kind, TypeKind::List);
        assert_eq!(
            value.type_arguments[0].kind,
            TypeKind::Primitive(Primitive::Int)
        );
    }

    #[test]
    fn test_map_key_with_nested_comma_splits_at_depth_zero() {
        let ty = resolve("Map<Pair<String, Int>, Long>");
        assert_eq!(ty.type_arguments.len(), 2);
        let key = &ty.type_arguments[0];
        assert_eq!(key.kind, TypeKind::UserDefined);
        assert_eq!(key.name, "Pair");
        assert_eq!(key.type_arguments.len(), 2);
        assert_eq!(
            ty.type_arguments[1].kind,
            TypeKind::Primitive(Primitive::Long)
        );
    }

    #[test]
    fn test_collection_arity_falls_back_to_wildcards() {
        let list = resolve("List");
        assert_eq!(list.type_arguments, vec![TypeDescriptor::star()]);

        let map = resolve("Map<String>");
        assert_eq!(
            map.type_arguments,
            vec![TypeDescriptor::star(), TypeDescriptor::star()]
        );

        let unbalanced = resolve("List<Map<String, Int>");
        assert_eq!(unbalanced.kind, TypeKind::List);
        let inner = &unbalanced.type_arguments[0];
        assert_eq!(inner.kind, TypeKind::Map);
        assert_eq!(
            inner.type_arguments,
            vec![TypeDescriptor::star(), TypeDescriptor::star()]
        );
    }

    #[test]
    fn test_wildcards_and_variance() {
        let ty = resolve("List<*>");
        assert_eq!(ty.type_arguments[0].kind, TypeKind::Star);

        let java = resolve("List<? extends com.example.Animal>");
        assert_eq!(java.type_arguments[0].name, "com.example.Animal");

        let kotlin = resolve("Map<String, out Number>");
        assert_eq!(kotlin.type_arguments[1].name, "Number");

        let question = resolve("Optional<?>");
        assert_eq!(question.type_arguments[0].kind, TypeKind::Star);
    }

    #[test]
    fn test_resolver_is_total() {
        let inputs = [
            "",
            " ",
            "?",
            "??",
            "<",
            ">",
            "<>",
            "><",
            "List<",
            "List>",
            "List<<<",
            "Map<,>",
            "Map<String,>",
            "Foo<>",
            "Foo<Bar",
            "List<String>trailing",
            "123",
            "a b c",
            "*",
            "?extends",
            "Map<<String, Int>, List<>>",
            "日本語",
            "🦀<🦀>",
            ",,,",
            "List<String,,>",
        ];
        for input in inputs {
            let ty = resolve(input);
            assert_ne!(ty.kind, TypeKind::Star, "top level never resolves to *: {input:?}");
        }

        let deep = format!("{}Int{}", "List<".repeat(500), ">".repeat(500));
        assert_eq!(resolve(&deep).kind, TypeKind::List);

        let many_marks = resolve(&format!("Int{}", "?".repeat(20_000)));
        assert_eq!(many_marks.kind, TypeKind::Primitive(Primitive::Int));
        assert!(many_marks.nullable);

        let many_variances = resolve(&format!("List<{}String>", "out ".repeat(300_000)));
        assert_eq!(many_variances.kind, TypeKind::List);
        assert_eq!(many_variances.type_arguments[0].kind, TypeKind::String);
    }

    #[test]
    fn test_nullability_round_trip() {
        let shapes = [
            "String",
            "Int",
            "Unit",
            "Any",
            "List<String>",
            "Set<Long>",
            "Map<String, List<Int?>>",
            "java.util.Optional<String>",
            "com.example.User",
            "Page<com.example.User>",
            "",
            "List<",
            "*",
            "  Boolean  ",
        ];
        for shape in shapes {
            let plain = resolve(shape);
            let nullable = resolve(&format!("{shape}?"));
            assert_eq!(nullable, plain.clone().with_nullable(true), "shape {shape:?}");
            assert!(nullable.nullable);
        }
    }

    #[test]
    fn test_invalid_names_fall_back() {
        assert_eq!(kind("123"), TypeKind::Any);
        assert_eq!(resolve("List<123>").type_arguments[0].kind, TypeKind::Star);
        assert_eq!(kind(""), TypeKind::Any);
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(split_top_level("A, B"), vec!["A", "B"]);
        assert_eq!(
            split_top_level("Map<A, B>, List<C>"),
            vec!["Map<A, B>", "List<C>"]
        );
        assert_eq!(split_top_level(""), vec![""]);
    }
}
