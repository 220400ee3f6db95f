use gloo::net::http::{Request, Response};
use serde::Deserialize;
use shared::{CreateGuideRequest, Guide, GuideStatus, UpdateGuideStatusRequest};

/// Error payload convention: a failed request may carry a human-readable
/// `detail` field with the reason.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Failure classification shared by every remote call.
///
/// `Server` means the round-trip completed and the backend rejected the
/// request; `Connection` means the request was sent and no response
/// arrived; `Unexpected` covers request construction and response
/// decoding failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Server error: {}", .detail.as_deref().unwrap_or("invalid data."))]
    Server { detail: Option<String> },
    #[error("Could not reach the server. Check your connection.")]
    Connection,
    #[error("Unexpected error. Try again later.")]
    Unexpected(String),
}

/// API client for communicating with the guide service
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the full guide collection
    pub async fn get_guides(&self) -> Result<Vec<Guide>, ApiError> {
        let url = format!("{}/guias/", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<Vec<Guide>>()
                        .await
                        .map_err(|e| ApiError::Unexpected(e.to_string()))
                } else {
                    Err(server_rejection(response).await)
                }
            }
            Err(_) => Err(ApiError::Connection),
        }
    }

    /// Register a new guide. The request must already be validated and
    /// normalized; the server returns the created record.
    pub async fn create_guide(&self, request: &CreateGuideRequest) -> Result<Guide, ApiError> {
        let url = format!("{}/guias/crear-guia/", self.base_url);

        let request = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;

        match request.send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<Guide>()
                        .await
                        .map_err(|e| ApiError::Unexpected(e.to_string()))
                } else {
                    Err(server_rejection(response).await)
                }
            }
            Err(_) => Err(ApiError::Connection),
        }
    }

    /// Move a guide to `status`; the server returns the updated record.
    pub async fn update_guide_status(
        &self,
        id: &str,
        status: GuideStatus,
    ) -> Result<Guide, ApiError> {
        let url = format!("{}/guias/{}/actualizar-guia/", self.base_url, id);

        let request = Request::put(&url)
            .json(&UpdateGuideStatusRequest { status })
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;

        match request.send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<Guide>()
                        .await
                        .map_err(|e| ApiError::Unexpected(e.to_string()))
                } else {
                    Err(server_rejection(response).await)
                }
            }
            Err(_) => Err(ApiError::Connection),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the backend's error payload. A missing or unreadable `detail`
/// falls back to the generic message in `ApiError::Server`'s Display.
async fn server_rejection(response: Response) -> ApiError {
    let detail = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    ApiError::Server { detail }
}
