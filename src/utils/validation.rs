use crate::utils::error::{PokeApiError, Result};
use url::Url;

/// Require a non-empty identifier and normalize it to a lowercase slug.
/// PokeAPI resource names are case-sensitive lowercase.
pub fn require_slug(resource: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PokeApiError::MissingIdentifier { resource });
    }
    Ok(trimmed.to_lowercase())
}

/// Require a non-empty identifier without case normalization (numeric ids).
pub fn require_identifier(resource: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PokeApiError::MissingIdentifier { resource });
    }
    Ok(trimmed.to_string())
}

/// Parse a numeric string argument, falling back to `default` when blank.
pub fn parse_numeric_arg(value: &str, default: usize) -> Result<usize> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed.parse().map_err(|_| PokeApiError::InvalidNumber {
        value: trimmed.to_string(),
    })
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PokeApiError::InvalidConfigValue {
            field: field_name.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PokeApiError::InvalidConfigValue {
                field: field_name.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PokeApiError::InvalidConfigValue {
            field: field_name.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}
