//! Response envelope shared by the catalog endpoints
//!
//! List endpoints wrap their payload in `{code, message, data}` with an
//! optional `pagination` block. Single-resource reads return the bare
//! object and errors are shaped by [`crate::Error`].

use crate::models::PageMeta;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: &'static str,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: &'static str, data: T) -> Self {
        Self {
            code: 200,
            message,
            data,
            pagination: None,
        }
    }

    pub fn paginated(message: &'static str, data: T, pagination: PageMeta) -> Self {
        Self {
            code: 200,
            message,
            data,
            pagination: Some(pagination),
        }
    }
}
