use serde::{Deserialize, Serialize};

/// Error payload returned by the API on non-2xx responses: `{"detail": "..."}`
///
/// Validation failures carry a list of objects in `detail` instead of a string,
/// so the field is kept as raw JSON and narrowed by [`ErrorBody::message`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Human readable message, if the payload carries one
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_validation_detail() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail":[{"loc":["body","base_price"],"msg":"Base price must be greater than 0","type":"value_error"}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("Base price must be greater than 0")
        );
    }

    #[test]
    fn test_missing_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);

        let blank: ErrorBody = serde_json::from_str(r#"{"detail":"  "}"#).unwrap();
        assert_eq!(blank.message(), None);
    }
}
