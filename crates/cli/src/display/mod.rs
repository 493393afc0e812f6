pub mod formatter;

pub use formatter::{format_analysis, print_batch_report};
