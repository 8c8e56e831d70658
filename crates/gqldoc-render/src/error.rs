use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to parse schema: {0}")]
    ParseError(String),

    #[error("Invalid introspection result: {0}")]
    InvalidIntrospection(String),

    #[error("Type not found: {0}")]
    TypeNotFound(String),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
