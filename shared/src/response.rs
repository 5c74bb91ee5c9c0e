//! API response envelope
//!
//! Every backend response body is wrapped in the same envelope:
//! ```json
//! {
//!     "success": true,
//!     "data": { ... },
//!     "message": "optional"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Message used when a failed envelope carries none.
pub const DEFAULT_FAILURE_MESSAGE: &str = "API request failed";

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Application-level success flag, independent of HTTP status.
    /// A body without it counts as a failure.
    #[serde(default)]
    pub success: bool,
    /// Response payload (optional)
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Human-readable message (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Split the envelope into its payload or the failure message.
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self
                .message
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()))
        }
    }
}

/// Body of an error response, read only for its message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_success_yields_payload() {
        let resp: ApiResponse<Value> =
            serde_json::from_value(json!({ "success": true, "data": { "id": 1 } })).unwrap();
        assert_eq!(resp.into_result().unwrap(), Some(json!({ "id": 1 })));
    }

    #[test]
    fn test_failure_yields_message() {
        let resp: ApiResponse<Value> =
            serde_json::from_value(json!({ "success": false, "message": "m" })).unwrap();
        assert_eq!(resp.into_result().unwrap_err(), "m");
    }

    #[test]
    fn test_failure_without_message_uses_default() {
        let resp: ApiResponse<Value> =
            serde_json::from_value(json!({ "success": false, "data": null })).unwrap();
        assert_eq!(resp.into_result().unwrap_err(), DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_missing_success_flag_is_failure() {
        let resp: ApiResponse<Value> =
            serde_json::from_value(json!({ "message": "quota exceeded" })).unwrap();
        assert_eq!(resp.into_result().unwrap_err(), "quota exceeded");

        let resp: ApiResponse<Value> = serde_json::from_value(json!({})).unwrap();
        assert_eq!(resp.into_result().unwrap_err(), DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_error_serializes_without_data() {
        let json = serde_json::to_value(ApiResponse::<()>::error("boom")).unwrap();
        assert_eq!(json, json!({ "success": false, "data": null, "message": "boom" }));
    }
}
