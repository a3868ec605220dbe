use crate::gates::config::AppConfig;
use crate::gates::types::{ErrorBody, GateList};
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{}", .0.first_message().unwrap_or("Validation failed"))]
    Validation(ErrorBody),
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub const VALIDATION_STATUS: u16 = 400;

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation(_) => Some(Self::VALIDATION_STATUS),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidUrl(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Thin client over the quality gate web service.
#[derive(Clone, Debug)]
pub struct GateClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GateClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base_url = config.server_url.trim().trim_end_matches('/').to_string();
        let invalid = || ApiError::InvalidUrl(config.server_url.clone());
        let url = Url::parse(&base_url).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none_or(str::is_empty) {
            return Err(invalid());
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/qualitygates/{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.basic_auth(token, Some("")),
            None => request,
        }
    }

    pub async fn list(&self) -> Result<GateList> {
        let request = self.authorize(self.http.get(self.endpoint("list")));
        let response = check_status(request.send().await?).await?;
        Ok(response.json::<GateList>().await?)
    }

    pub async fn destroy(&self, id: u64) -> Result<()> {
        let id = id.to_string();
        let request = self.authorize(
            self.http
                .post(self.endpoint("destroy"))
                .form(&[("id", id.as_str())]),
        );
        check_status(request.send().await?).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let bytes = response.bytes().await?;
    // Bodies that are not the usual errors/warnings document decode as empty.
    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap_or_default();

    if status == StatusCode::BAD_REQUEST {
        return Err(ApiError::Validation(body));
    }

    let message = body
        .first_message()
        .map(str::to_string)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Request failed".to_string());

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}
