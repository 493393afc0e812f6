//! Default and sentinel values per type shape

use crate::{
    types::{Primitive, TypeDescriptor, TypeKind},
    utils::string_literal,
};

/// Value synthesized for a field initializer, parameter or return expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    Literal(String),
    Null,
    /// Unit has no value to write
    NoValue,
}

impl DefaultValue {
    pub fn literal(text: impl Into<String>) -> Self {
        DefaultValue::Literal(text.into())
    }

    /// Kotlin expression text, `None` for [`DefaultValue::NoValue`]
    pub fn expression(&self) -> Option<&str> {
        match self {
            DefaultValue::Literal(text) => Some(text),
            DefaultValue::Null => Some("null"),
            DefaultValue::NoValue => None,
        }
    }
}

/// Zero value for a type. Nullable types always default to `null`.
///
/// `Optional.empty()` relies on `java.util.Optional` being imported, which
/// rendering the type itself takes care of.
pub fn default_for(ty: &TypeDescriptor) -> DefaultValue {
    if ty.nullable {
        return DefaultValue::Null;
    }

    match ty.kind {
        TypeKind::String => DefaultValue::literal("\"\""),
        TypeKind::Primitive(primitive) => DefaultValue::literal(match primitive {
            Primitive::Int | Primitive::Short | Primitive::Byte => "0",
            Primitive::Long => "0L",
            Primitive::Double => "0.0",
            Primitive::Float => "0.0f",
            Primitive::Boolean => "false",
            Primitive::Char => "'\\u0000'",
        }),
        TypeKind::List if ty.is_mutable_collection() => DefaultValue::literal("mutableListOf()"),
        TypeKind::Set if ty.is_mutable_collection() => DefaultValue::literal("mutableSetOf()"),
        TypeKind::Map if ty.is_mutable_collection() => DefaultValue::literal("mutableMapOf()"),
        TypeKind::List => DefaultValue::literal("emptyList()"),
        TypeKind::Set => DefaultValue::literal("emptySet()"),
        TypeKind::Map => DefaultValue::literal("emptyMap()"),
        TypeKind::Optional => DefaultValue::literal("Optional.empty()"),
        TypeKind::Unit => DefaultValue::NoValue,
        TypeKind::Any | TypeKind::UserDefined | TypeKind::Star => DefaultValue::Null,
    }
}

/// Field initializer: an explicit override is used verbatim, otherwise the
/// shape default applies.
pub fn initializer_for(ty: &TypeDescriptor, override_value: Option<&str>) -> DefaultValue {
    match override_value {
        Some(value) => DefaultValue::literal(value),
        None => default_for(ty),
    }
}

/// Argument passed to a method under test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentValue {
    Value(DefaultValue),
    /// `mockk<T>(relaxed = true)` for types with no constructible default
    RelaxedMock(TypeDescriptor),
}

/// Distinguishable test argument for a parameter.
///
/// Scalars get non-zero sentinels so a mix-up between arguments shows up in
/// a failing test. Non-null user types are mocked.
pub fn argument_for(name: &str, ty: &TypeDescriptor) -> ArgumentValue {
    if ty.nullable {
        return ArgumentValue::Value(DefaultValue::Null);
    }

    let sentinel = match ty.kind {
        TypeKind::String => string_literal(&format!("test-value-{name}")),
        TypeKind::Primitive(primitive) => match primitive {
            Primitive::Int | Primitive::Short | Primitive::Byte => "1".to_string(),
            Primitive::Long => "1L".to_string(),
            Primitive::Double => "1.0".to_string(),
            Primitive::Float => "1.0f".to_string(),
            Primitive::Boolean => "true".to_string(),
            Primitive::Char => "'a'".to_string(),
        },
        TypeKind::UserDefined | TypeKind::Any | TypeKind::Star => {
            return ArgumentValue::RelaxedMock(ty.clone());
        }
        _ => return ArgumentValue::Value(default_for(ty)),
    };
    ArgumentValue::Value(DefaultValue::Literal(sentinel))
}
