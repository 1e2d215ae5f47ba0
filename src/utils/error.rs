use thiserror::Error;

#[derive(Error, Debug)]
pub enum HierarchyError {
    #[error("Unexpected mode of transportation (kind: {}): {object}", .kind.as_deref().unwrap_or("<missing>"))]
    UnknownVariant {
        kind: Option<String>,
        object: String,
    },

    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl HierarchyError {
    pub fn is_unknown_variant(&self) -> bool {
        matches!(self, HierarchyError::UnknownVariant { .. })
    }
}

pub type Result<T> = std::result::Result<T, HierarchyError>;
