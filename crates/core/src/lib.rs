//! stubsmith - Kotlin stub and test scaffold generation from type signatures
//!
//! This crate provides functionality to:
//! - Resolve textual type signatures into structured type descriptors
//! - Synthesize default values, method bodies and test assertions per type shape
//! - Compose data-holder stubs and JUnit 5 / MockK test scaffolds
//! - Analyze service classes from Java sources or metadata descriptors
pub mod analyzer;
pub mod batch;
pub mod codegen;
pub mod compose;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod parser;
pub mod services;
pub mod synth;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use analyzer::{Markers, ServiceAnalyzer};
pub use batch::{BatchReport, BatchRunner, ClassOutcome};
pub use compose::{StubComposer, TestScaffoldComposer};
pub use config::Config;
pub use interfaces::ClassSource;
pub use parser::resolve;
pub use services::Classpath;
