//! # Validation Module
//!
//! Request boundary validation for MediaHub.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractors (axum)                                       │
//! │  ├── Path / query / body are pulled out as raw strings or JSON         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Raw input → typed value, or ValidationError                       │
//! │  └── Nothing malformed reaches the repository                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Repository                                                   │
//! │  └── Works on typed values only                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mediahub_core::validation::{parse_media_id, validate_search_query};
//!
//! assert_eq!(parse_media_id("7").unwrap(), 7);
//! assert_eq!(validate_search_query(Some("pop")).unwrap(), "pop");
//! assert!(validate_search_query(None).is_err());
//! ```

use serde_json::Value;

use crate::error::ValidationError;
use crate::types::ConvertRequest;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Search
// =============================================================================

/// Validates the `q` search parameter.
///
/// ## Rules
/// - Must be present
/// - Must not be empty
///
/// Whitespace is kept as-is; `" "` is a legal query.
pub fn validate_search_query(query: Option<&str>) -> ValidationResult<String> {
    match query {
        Some(q) if !q.is_empty() => Ok(q.to_string()),
        _ => Err(ValidationError::required("q")),
    }
}

// =============================================================================
// Identifiers
// =============================================================================

/// Parses a media id taken from a path segment.
///
/// The whole segment must be a base-10 integer that fits in `i32`.
/// Negative and zero ids parse fine; they simply never match a record.
///
/// ## Example
/// ```rust
/// use mediahub_core::validation::parse_media_id;
///
/// assert!(parse_media_id("12").is_ok());
/// assert!(parse_media_id("12abc").is_err());
/// assert!(parse_media_id("").is_err());
/// ```
pub fn parse_media_id(raw: &str) -> ValidationResult<i32> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::required("id"));
    }

    raw.parse::<i32>()
        .map_err(|_| ValidationError::invalid_format("id", "must be an integer"))
}

// =============================================================================
// Conversion
// =============================================================================

/// Parses a conversion request body.
///
/// ## Rules
/// - Must be a JSON object
/// - `fromFormat` and `toFormat` must be strings
/// - `fileUrl` is optional, but a string when present (`null` is rejected)
pub fn parse_convert_request(body: Value) -> ValidationResult<ConvertRequest> {
    let Some(fields) = body.as_object() else {
        return Err(ValidationError::invalid_format("body", "expected a JSON object"));
    };

    if matches!(fields.get("fileUrl"), Some(Value::Null)) {
        return Err(ValidationError::invalid_format("fileUrl", "must be a string when present"));
    }

    serde_json::from_value(body)
        .map_err(|e| ValidationError::invalid_format("body", e.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query(Some("Electronic")).unwrap(), "Electronic");
        assert_eq!(validate_search_query(Some(" ")).unwrap(), " ");

        assert!(matches!(
            validate_search_query(None),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_search_query(Some("")).is_err());
    }

    #[test]
    fn test_parse_media_id() {
        assert_eq!(parse_media_id("1").unwrap(), 1);
        assert_eq!(parse_media_id(" 42 ").unwrap(), 42);
        assert_eq!(parse_media_id("-3").unwrap(), -3);

        assert!(parse_media_id("abc").is_err());
        assert!(parse_media_id("1.5").is_err());
        assert!(parse_media_id("99999999999").is_err());
        assert!(parse_media_id("").is_err());
    }

    #[test]
    fn test_parse_convert_request() {
        let req = parse_convert_request(json!({
            "fromFormat": "mp4",
            "toFormat": "mp3"
        }))
        .unwrap();
        assert_eq!(req.from_format, "mp4");
        assert_eq!(req.to_format, "mp3");
        assert_eq!(req.file_url, None);

        let req = parse_convert_request(json!({
            "fromFormat": "wav",
            "toFormat": "flac",
            "fileUrl": "/downloads/a.wav"
        }))
        .unwrap();
        assert_eq!(req.file_url.as_deref(), Some("/downloads/a.wav"));
    }

    #[test]
    fn test_parse_convert_request_rejects_bad_shapes() {
        assert!(parse_convert_request(json!({ "fromFormat": "mp4" })).is_err());
        assert!(parse_convert_request(json!({ "fromFormat": 1, "toFormat": "mp3" })).is_err());
        assert!(parse_convert_request(json!(["mp4", "mp3"])).is_err());
        assert!(parse_convert_request(Value::Null).is_err());

        let err = parse_convert_request(json!({
            "fromFormat": "mp4",
            "toFormat": "mp3",
            "fileUrl": null
        }))
        .unwrap_err();
        assert_eq!(err.field(), "fileUrl");
    }
}
