//! Class source implementations
//!
//! Concrete front ends behind the [`ClassSource`](crate::interfaces::ClassSource)
//! trait, plus the ordered classpath that combines them.

pub mod classpath;
pub mod descriptor_loader;
pub mod java_source_loader;

pub use classpath::Classpath;
pub use descriptor_loader::DescriptorLoader;
pub use java_source_loader::JavaSourceLoader;
