pub mod class_metadata;
pub mod generation_info;
pub mod stub_info;
pub mod type_descriptor;

// Re-export commonly used types
pub use class_metadata::{
    ClassKind, ClassMetadata, ConstructorMetadata, MethodMetadata, ParameterMetadata, Visibility,
    annotation_matches,
};
pub use generation_info::{MockDependency, StubGenerationInfo, TestMethodInfo};
pub use stub_info::{FieldInfo, MethodInfo, ParameterInfo, StubInfo};
pub use type_descriptor::{Primitive, TypeDescriptor, TypeKind};
