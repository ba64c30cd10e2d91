//! Request-shape validation
//!
//! Pure functions that check the decoded request body before classification
//! runs. The classifier itself is total over validated input, so this is the
//! only place a request can be rejected.

use serde_json::Value;

/// Error type for request-shape violations.
///
/// Each variant carries a human-readable message; the boundary maps all of
/// them to an HTTP 400 response.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("missing required field: data")]
    MissingData,

    #[error("field 'data' must be an array")]
    DataNotArray,

    #[error("element {0} of 'data' must be a string")]
    NonStringElement(usize),
}

/// Extract the token list from a decoded request body.
///
/// The body must be an object with a `data` field holding an array of
/// strings. Returns the owned tokens in input order, or the first shape
/// violation encountered.
pub fn extract_tokens(body: &Value) -> Result<Vec<String>, ValidationError> {
    let object = body.as_object().ok_or(ValidationError::NotAnObject)?;
    let data = object.get("data").ok_or(ValidationError::MissingData)?;
    let items = data.as_array().ok_or(ValidationError::DataNotArray)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(str::to_owned)
                .ok_or(ValidationError::NonStringElement(index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_tokens_valid() {
        let body = json!({ "data": ["a", "1", "$"] });
        let tokens = extract_tokens(&body).unwrap();
        assert_eq!(tokens, vec!["a", "1", "$"]);
    }

    #[test]
    fn test_extract_tokens_empty_array() {
        let body = json!({ "data": [] });
        let tokens = extract_tokens(&body).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_extract_tokens_ignores_extra_fields() {
        let body = json!({ "data": ["x"], "unrelated": 42 });
        let tokens = extract_tokens(&body).unwrap();
        assert_eq!(tokens, vec!["x"]);
    }

    #[test]
    fn test_extract_tokens_not_an_object() {
        let body = json!(["a", "b"]);
        assert_eq!(extract_tokens(&body), Err(ValidationError::NotAnObject));
    }

    #[test]
    fn test_extract_tokens_missing_data() {
        let body = json!({ "items": [] });
        assert_eq!(extract_tokens(&body), Err(ValidationError::MissingData));
    }

    #[test]
    fn test_extract_tokens_data_not_array() {
        let body = json!({ "data": "abc" });
        assert_eq!(extract_tokens(&body), Err(ValidationError::DataNotArray));
    }

    #[test]
    fn test_extract_tokens_non_string_element() {
        let body = json!({ "data": ["a", 1, "b"] });
        assert_eq!(
            extract_tokens(&body),
            Err(ValidationError::NonStringElement(1))
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::MissingData.to_string(),
            "missing required field: data"
        );
        assert_eq!(
            ValidationError::NonStringElement(3).to_string(),
            "element 3 of 'data' must be a string"
        );
    }
}
