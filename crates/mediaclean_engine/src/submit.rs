use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::{
    MediaKind, SubmitError, SubmitFailureKind, SubmitRequest, SubmitResponse, SubmitSource,
};

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    /// Root endpoint of the processing backend; submissions POST here.
    pub server_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080/".to_string(),
            connect_timeout: Duration::from_secs(10),
            // Processing happens synchronously behind the POST, so the
            // request budget is generous.
            request_timeout: Duration::from_secs(300),
        }
    }
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, request: &SubmitRequest) -> Result<SubmitResponse, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: SubmitSettings,
}

impl ReqwestSubmitter {
    pub fn new(settings: SubmitSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SubmitError::new(SubmitFailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(&self, request: &SubmitRequest) -> Result<SubmitResponse, SubmitError> {
        let endpoint = reqwest::Url::parse(&self.settings.server_url)
            .map_err(|err| SubmitError::new(SubmitFailureKind::InvalidServerUrl, err.to_string()))?;
        let client = self.build_client()?;

        let form = match &request.source {
            SubmitSource::Url(text) => Form::new().text("url", text.clone()),
            SubmitSource::File { name, bytes } => Form::new().part(
                "file",
                Part::bytes(bytes.to_vec()).file_name(name.clone()),
            ),
        };

        let response = client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::new(
                SubmitFailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        parse_response(&body)
    }
}

/// Wire shape of the backend response.
#[derive(Debug, Deserialize)]
struct RawResponse {
    status: String,
    #[serde(default)]
    media_url: Option<String>,
    #[serde(default)]
    file_type: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

fn parse_response(body: &str) -> Result<SubmitResponse, SubmitError> {
    let raw: RawResponse = serde_json::from_str(body)
        .map_err(|err| SubmitError::new(SubmitFailureKind::MalformedResponse, err.to_string()))?;

    if raw.status != "completed" {
        return Ok(SubmitResponse::Rejected {
            message: raw.message,
        });
    }

    // The contract says a completed response carries both fields.
    let media_url = raw.media_url.ok_or_else(|| {
        SubmitError::new(
            SubmitFailureKind::MalformedResponse,
            "completed response without media_url",
        )
    })?;
    let kind = match raw.file_type.as_deref() {
        Some("audio") => MediaKind::Audio,
        Some("video") => MediaKind::Video,
        other => {
            return Err(SubmitError::new(
                SubmitFailureKind::MalformedResponse,
                format!("completed response with file_type {other:?}"),
            ))
        }
    };

    Ok(SubmitResponse::Completed { media_url, kind })
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::new(SubmitFailureKind::Timeout, err.to_string());
    }
    SubmitError::new(SubmitFailureKind::Network, err.to_string())
}
