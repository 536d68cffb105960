use serde::Serialize;
use serde_json::Value;

/// Decoded response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Json(Value),
    Text(String),
}

impl ApiResponse {
    pub fn is_json(&self) -> bool {
        matches!(self, ApiResponse::Json(_))
    }

    /// JSON body as-is; text bodies become a JSON string.
    pub fn into_json(self) -> Value {
        match self {
            ApiResponse::Json(value) => value,
            ApiResponse::Text(text) => Value::String(text),
        }
    }

    /// Body formatted for display: pretty JSON or the raw text.
    pub fn to_pretty_string(&self) -> String {
        match self {
            ApiResponse::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ApiResponse::Text(text) => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_becomes_json_string() {
        let resp = ApiResponse::Text("hello".into());
        assert!(!resp.is_json());
        assert_eq!(resp.into_json(), json!("hello"));
    }

    #[test]
    fn pretty_string_formats_json() {
        let resp = ApiResponse::Json(json!({"a": 1}));
        assert_eq!(resp.to_pretty_string(), "{\n  \"a\": 1\n}");
    }
}
