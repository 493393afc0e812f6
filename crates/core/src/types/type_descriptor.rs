use serde::Serialize;
use std::fmt;

/// Built-in scalar types with a natural zero value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Primitive {
    Int,
    Long,
    Short,
    Byte,
    Double,
    Float,
    Boolean,
    Char,
}

impl Primitive {
    pub fn kotlin_name(self) -> &'static str {
        match self {
            Primitive::Int => "Int",
            Primitive::Long => "Long",
            Primitive::Short => "Short",
            Primitive::Byte => "Byte",
            Primitive::Double => "Double",
            Primitive::Float => "Float",
            Primitive::Boolean => "Boolean",
            Primitive::Char => "Char",
        }
    }
}

/// The shape of a type, which drives every default and assertion decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeKind {
    Primitive(Primitive),
    String,
    Unit,
    Any,
    List,
    Set,
    Map,
    Optional,
    UserDefined,
    /// Wildcard argument (`*`), also used when a generic signature is malformed
    Star,
}

/// Structured representation of a type signature such as `Map<String, List<Int>>?`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeDescriptor {
    pub kind: TypeKind,
    /// Declared name without generic arguments, e.g. `kotlin.collections.MutableList`
    pub name: String,
    pub nullable: bool,
    pub type_arguments: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            nullable: false,
            type_arguments: Vec::new(),
        }
    }

    pub fn star() -> Self {
        Self::new(TypeKind::Star, "*")
    }

    pub fn any() -> Self {
        Self::new(TypeKind::Any, "Any")
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        // `*` already admits null
        self.nullable = nullable && self.kind != TypeKind::Star;
        self
    }

    pub fn with_arguments(mut self, arguments: Vec<TypeDescriptor>) -> Self {
        self.type_arguments = arguments;
        self
    }

    /// Last segment of the declared name
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Package part of the declared name, empty when unqualified
    pub fn package(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }

    pub fn is_unit(&self) -> bool {
        self.kind == TypeKind::Unit
    }

    pub fn is_collection(&self) -> bool {
        matches!(self.kind, TypeKind::List | TypeKind::Set | TypeKind::Map)
    }

    /// Mutable collection flavours (`MutableList`, `ArrayList`, `HashMap`, ...)
    pub fn is_mutable_collection(&self) -> bool {
        self.is_collection()
            && matches!(
                self.simple_name(),
                "MutableList"
                    | "MutableCollection"
                    | "ArrayList"
                    | "LinkedList"
                    | "MutableSet"
                    | "HashSet"
                    | "LinkedHashSet"
                    | "TreeSet"
                    | "MutableMap"
                    | "HashMap"
                    | "LinkedHashMap"
                    | "TreeMap"
            )
    }

    /// A type with no usable default besides `null`: user types, `Any` and `*`
    pub fn lacks_known_default(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::UserDefined | TypeKind::Any | TypeKind::Star
        )
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.type_arguments.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.type_arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        if self.nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name_and_package() {
        let ty = TypeDescriptor::new(TypeKind::UserDefined, "com.example.model.User");
        assert_eq!(ty.simple_name(), "User");
        assert_eq!(ty.package(), "com.example.model");

        let bare = TypeDescriptor::new(TypeKind::UserDefined, "User");
        assert_eq!(bare.simple_name(), "User");
        assert_eq!(bare.package(), "");
    }

    #[test]
    fn test_star_is_never_nullable() {
        assert!(!TypeDescriptor::star().with_nullable(true).nullable);
    }

    #[test]
    fn test_display_nested() {
        let ty = TypeDescriptor::new(TypeKind::Map, "Map")
            .with_arguments(vec![
                TypeDescriptor::new(TypeKind::String, "String"),
                TypeDescriptor::new(TypeKind::List, "List")
                    .with_arguments(vec![TypeDescriptor::new(
                        TypeKind::Primitive(Primitive::Int),
                        "Int",
                    )])
                    .with_nullable(true),
            ])
            .with_nullable(true);
        assert_eq!(ty.to_string(), "Map<String, List<Int>?>?");
    }

    #[test]
    fn test_mutable_collection_detection() {
        let mutable = TypeDescriptor::new(TypeKind::List, "kotlin.collections.MutableList");
        let readonly = TypeDescriptor::new(TypeKind::List, "kotlin.collections.List");
        let user = TypeDescriptor::new(TypeKind::UserDefined, "MutableList");
        assert!(mutable.is_mutable_collection());
        assert!(!readonly.is_mutable_collection());
        assert!(!user.is_mutable_collection());
    }
}
