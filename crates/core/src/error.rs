use std::io;

/// Errors that can occur during stubsmith operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Class '{class_name}' was not found on the classpath. Make sure the project sources are on it.")]
    ClassNotFound { class_name: String },

    #[error("Class '{class_name}' must carry the @{marker} marker to generate a test scaffold")]
    MissingRequiredMarker { class_name: String, marker: String },

    #[error(
        "Cannot determine the type of constructor parameter '{parameter}' ('{type_name}') of class '{class_name}'"
    )]
    UnresolvableParameterType {
        class_name: String,
        parameter: String,
        type_name: String,
    },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for stubsmith operations
pub type Result<T> = std::result::Result<T, Error>;
