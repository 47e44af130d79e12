use serde::{Deserialize, Serialize};

/// Envelope wrapping every JSON payload the API returns
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn message<S: Into<String>>(message: S) -> Self {
        Self {
            status: "success".to_string(),
            data: None,
            message: Some(message.into()),
        }
    }
}
