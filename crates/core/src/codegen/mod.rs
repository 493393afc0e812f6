pub mod imports;
pub mod model;
pub mod render;
pub mod type_name;

pub use imports::ImportSet;
pub use model::{CodeBlock, FunBody, FunSpec, KotlinFile, PropertySpec, TypeModifier, TypeSpec};
pub use render::render;
