//! Kotlin spelling of resolved types

use super::imports::ImportSet;
use crate::types::{TypeDescriptor, TypeKind};

impl TypeDescriptor {
    /// Render as Kotlin type text, registering the imports it needs.
    ///
    /// Java collection classes render as the Kotlin interface of the same
    /// mutability (`ArrayList<T>` becomes `MutableList<T>`) so the synthesized
    /// `mutableListOf()` style defaults stay assignable.
    pub fn to_kotlin(&self, imports: &mut ImportSet) -> String {
        let base = match self.kind {
            TypeKind::Primitive(primitive) => imports.reference(&format!("kotlin.{}", primitive.kotlin_name())),
            TypeKind::String => imports.reference("kotlin.String"),
            TypeKind::Unit => imports.reference("kotlin.Unit"),
            TypeKind::Any => imports.reference("kotlin.Any"),
            TypeKind::Star => return "*".to_string(),
            TypeKind::List | TypeKind::Set | TypeKind::Map => {
                imports.reference(&format!("kotlin.collections.{}", self.collection_interface()))
            }
            TypeKind::Optional => imports.reference("java.util.Optional"),
            TypeKind::UserDefined => imports.reference(&self.name),
        };

        let mut rendered = base;
        if !self.type_arguments.is_empty() {
            let arguments: Vec<String> = self
                .type_arguments
                .iter()
                .map(|argument| argument.to_kotlin(imports))
                .collect();
            rendered.push('<');
            rendered.push_str(&arguments.join(", "));
            rendered.push('>');
        }
        if self.nullable {
            rendered.push('?');
        }
        rendered
    }

    fn collection_interface(&self) -> &'static str {
        match (self.simple_name(), self.kind) {
            ("Collection", _) => "Collection",
            ("MutableCollection", _) => "MutableCollection",
            ("Iterable", _) => "Iterable",
            (_, TypeKind::List) if self.is_mutable_collection() => "MutableList",
            (_, TypeKind::Set) if self.is_mutable_collection() => "MutableSet",
            (_, TypeKind::Map) if self.is_mutable_collection() => "MutableMap",
            (_, TypeKind::Set) => "Set",
            (_, TypeKind::Map) => "Map",
            _ => "List",
        }
    }
}
