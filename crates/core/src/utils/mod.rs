pub mod naming;
pub mod serde_helpers;

pub use naming::{capitalize, decapitalize, string_literal};
