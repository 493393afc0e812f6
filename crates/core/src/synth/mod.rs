//! Value and body synthesis driven by [`TypeDescriptor`](crate::types::TypeDescriptor) shape

pub mod bodies;
pub mod defaults;

pub use bodies::{Assertion, AssertionKind, MethodBody, assertion_for, body_for, body_from_template};
pub use defaults::{ArgumentValue, DefaultValue, argument_for, default_for, initializer_for};
