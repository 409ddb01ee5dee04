//! HTTP client for the recommendation service.
//!
//! Two endpoints: `/upload-image` takes the selfie as multipart form data
//! and answers with the detected skin tone; `/full-makeup-recommend` takes
//! the tone plus the quiz answers and returns the product list. Responses
//! are decoded into typed records; a shape mismatch surfaces as
//! [`QuizError::Parse`] rather than trusting arbitrary fields.

use reqwest::multipart;
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, QuizResult};
use crate::photo::PhotoFile;
use crate::types::Product;

/// Default address of the local recommendation service.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

const UPLOAD_ENDPOINT: &str = "/upload-image";
const RECOMMEND_ENDPOINT: &str = "/full-makeup-recommend";

/// Skin tone detection result from `/upload-image`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkinToneReport {
    pub skin_tone: String,
}

/// Request body for `/full-makeup-recommend`.
///
/// Field names follow the service's wire format exactly: snake case for
/// the tone, camel case for the quiz fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendRequest {
    pub skin_tone: String,
    #[serde(rename = "makeupStyle")]
    pub makeup_style: String,
    #[serde(rename = "skinType")]
    pub skin_type: String,
    pub finish: String,
}

/// Response body from `/full-makeup-recommend`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Product>,
}

/// Client for the external recommendation service.
pub struct RecommendClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecommendClient {
    /// Create a client against the given base URL.
    ///
    /// No request timeout is configured: a submission waits until the
    /// transport resolves or fails.
    pub fn new(base_url: impl Into<String>) -> QuizResult<Self> {
        let http = reqwest::Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload the selfie and read back the detected skin tone.
    pub async fn detect_skin_tone(&self, photo: &PhotoFile) -> QuizResult<SkinToneReport> {
        let part = multipart::Part::bytes(photo.bytes.clone())
            .file_name(photo.file_name.clone())
            .mime_str(photo.mime)?;
        let form = multipart::Form::new().part("image", part);

        tracing::debug!(
            file = %photo.file_name,
            size = photo.bytes.len(),
            "uploading selfie for skin tone detection"
        );

        let response = self
            .http
            .post(format!("{}{}", self.base_url, UPLOAD_ENDPOINT))
            .multipart(form)
            .send()
            .await?;

        decode(UPLOAD_ENDPOINT, response).await
    }

    /// Fetch product recommendations for the detected tone plus answers.
    pub async fn recommend(&self, request: &RecommendRequest) -> QuizResult<Vec<Product>> {
        tracing::debug!(skin_tone = %request.skin_tone, "requesting recommendations");

        let response = self
            .http
            .post(format!("{}{}", self.base_url, RECOMMEND_ENDPOINT))
            .json(request)
            .send()
            .await?;

        let decoded: RecommendResponse = decode(RECOMMEND_ENDPOINT, response).await?;
        Ok(decoded.recommendations)
    }
}

/// Check the status, then decode the body into the expected shape.
async fn decode<T: serde::de::DeserializeOwned>(
    endpoint: &'static str,
    response: reqwest::Response,
) -> QuizResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(QuizError::UnexpectedStatus {
            endpoint,
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| QuizError::Parse {
        endpoint,
        message: e.to_string(),
    })
}
