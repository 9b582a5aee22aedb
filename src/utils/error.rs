use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokeApiError {
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error("API Error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{resource} is required")]
    MissingIdentifier { resource: &'static str },

    #[error("Invalid limit or offset: '{value}'")]
    InvalidNumber { value: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValue { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, PokeApiError>;
