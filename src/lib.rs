//! End-to-end entry point re-exporting the stubsmith core API
pub use stubsmith_core::*;
