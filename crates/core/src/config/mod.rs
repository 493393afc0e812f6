pub mod settings;

pub use settings::{CONFIG_FILE_NAMES, Config, DEFAULT_OUTPUT_DIR};
