//! Method bodies for stubs and result assertions for test scaffolds

use super::defaults::default_for;
use crate::codegen::{CodeBlock, FunBody};
use crate::types::{Primitive, TypeDescriptor, TypeKind};
use crate::utils::string_literal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodBody {
    /// `{ }`
    Empty,
    /// `= expr`
    Expression(String),
    /// `= throw NotImplementedError(message)`
    Throw(String),
    /// Hand-written statements, kept verbatim
    Block(String),
}

impl MethodBody {
    pub fn into_fun_body(self) -> FunBody {
        match self {
            MethodBody::Empty => FunBody::Block(CodeBlock::new()),
            MethodBody::Expression(expression) => FunBody::Expression(expression),
            MethodBody::Throw(message) => {
                FunBody::Expression(format!("throw NotImplementedError({})", string_literal(&message)))
            }
            MethodBody::Block(statements) => FunBody::Block(CodeBlock::verbatim(&statements)),
        }
    }
}

/// Placeholder body for a method returning `return_type`.
///
/// Types without a usable non-null default throw instead of returning `null`
/// so the generated stub still compiles.
pub fn body_for(return_type: &TypeDescriptor, method_name: &str) -> MethodBody {
    if return_type.is_unit() && !return_type.nullable {
        return MethodBody::Empty;
    }
    if !return_type.nullable && return_type.lacks_known_default() {
        return MethodBody::Throw(format!("Method '{method_name}' not implemented"));
    }
    match default_for(return_type).expression() {
        Some(expression) => MethodBody::Expression(expression.to_string()),
        None => MethodBody::Empty,
    }
}

/// Body from a user template: `return <expr>` becomes an expression body
pub fn body_from_template(template: &str) -> MethodBody {
    let trimmed = template.trim();
    match trimmed.strip_prefix("return ") {
        Some(expression) if !expression.contains('\n') && !expression.trim().is_empty() => {
            MethodBody::Expression(expression.trim().to_string())
        }
        _ => MethodBody::Block(trimmed.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionKind {
    /// Unit results: interactions are checked with `verify` instead
    VerifyBehavior,
    NotNull,
    IsPresent,
    NotEmpty,
    /// `Iterable` has no `isEmpty()`
    HasElements,
    IsTrue,
}

/// Placeholder assertion on a method result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assertion {
    pub kind: AssertionKind,
    pub message: &'static str,
    pub todo: &'static str,
}

impl Assertion {
    /// Statement checking `subject`, `None` for Unit results
    pub fn statement(&self, subject: &str) -> Option<String> {
        let message = string_literal(self.message);
        let call = match self.kind {
            AssertionKind::VerifyBehavior => return None,
            AssertionKind::NotNull => format!("assertNotNull({subject}, {message})"),
            AssertionKind::IsPresent => format!("assertTrue({subject}.isPresent, {message})"),
            AssertionKind::NotEmpty => format!("assertFalse({subject}.isEmpty(), {message})"),
            AssertionKind::HasElements => format!("assertTrue({subject}.any(), {message})"),
            AssertionKind::IsTrue => format!("assertTrue({subject}, {message})"),
        };
        Some(format!("{call} // TODO: {}", self.todo))
    }

    /// JUnit function the statement calls
    pub fn import(&self) -> Option<&'static str> {
        match self.kind {
            AssertionKind::VerifyBehavior => None,
            AssertionKind::NotNull => Some("org.junit.jupiter.api.Assertions.assertNotNull"),
            AssertionKind::IsPresent | AssertionKind::HasElements | AssertionKind::IsTrue => {
                Some("org.junit.jupiter.api.Assertions.assertTrue")
            }
            AssertionKind::NotEmpty => Some("org.junit.jupiter.api.Assertions.assertFalse"),
        }
    }
}

pub fn assertion_for(return_type: &TypeDescriptor) -> Assertion {
    let (kind, message, todo) = if return_type.is_unit() {
        (
            AssertionKind::VerifyBehavior,
            "",
            "the method returns nothing; verify its effect on the mocks",
        )
    } else if return_type.nullable {
        (
            AssertionKind::NotNull,
            "result should not be null",
            "decide whether null is a valid result here",
        )
    } else {
        match return_type.kind {
            TypeKind::Optional => (
                AssertionKind::IsPresent,
                "result should not be Optional.empty()",
                "check the wrapped value",
            ),
            TypeKind::List if return_type.simple_name() == "Iterable" => (
                AssertionKind::HasElements,
                "result should not be empty",
                "check the collection contents",
            ),
            TypeKind::List | TypeKind::Set | TypeKind::Map => (
                AssertionKind::NotEmpty,
                "result should not be empty",
                "check the collection contents",
            ),
            TypeKind::Primitive(Primitive::Boolean) => (
                AssertionKind::IsTrue,
                "result should be true",
                "assert the expected boolean outcome",
            ),
            _ => (
                AssertionKind::NotNull,
                "result should not be null",
                "check the properties of the returned value",
            ),
        }
    };
    Assertion {
        kind,
        message,
        todo,
    }
}
