use std::time::Duration;

use directory_core::{Candidate, CandidateId};
use engine_logging::engine_debug;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::wire::{decode_candidates, decode_jobs};
use crate::{FailureKind, FetchError, FetchMetadata, FetchOutput};

pub const CANDIDATES_PATH: &str = "/api/candidates";
pub const JOBS_PATH: &str = "/api/jobs";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
        }
    }
}

impl FetchSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Source of the candidate and job-title lists.
#[async_trait::async_trait]
pub trait DirectorySource: Send + Sync {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, FetchError>;
    async fn fetch_jobs(&self) -> Result<Vec<String>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSource {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestSource {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    /// GET `path` relative to the base URL, enforcing status, type and size limits.
    pub async fn fetch(&self, path: &str) -> Result<FetchOutput, FetchError> {
        let url = endpoint_url(&self.settings.base_url, path)?;
        engine_debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        let metadata = FetchMetadata {
            url: url.to_string(),
            content_type,
            byte_len: bytes.len() as u64,
        };

        Ok(FetchOutput { bytes, metadata })
    }
}

#[async_trait::async_trait]
impl DirectorySource for ReqwestSource {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, FetchError> {
        let output = self.fetch(CANDIDATES_PATH).await?;
        log_fetched(&output.metadata);
        decode_candidates(&output.bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }

    async fn fetch_jobs(&self) -> Result<Vec<String>, FetchError> {
        let output = self.fetch(JOBS_PATH).await?;
        log_fetched(&output.metadata);
        decode_jobs(&output.bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn log_fetched(metadata: &FetchMetadata) {
    engine_debug!(
        "Fetched {} bytes from {} ({})",
        metadata.byte_len,
        metadata.url,
        metadata.content_type.as_deref().unwrap_or("no content type")
    );
}

/// Full URL of the backend-rendered detail page for `id`.
pub fn detail_url(base_url: &str, id: &CandidateId) -> Result<String, FetchError> {
    endpoint_url(base_url, &id.detail_path()).map(|url| url.to_string())
}

/// Joins an absolute `path` onto the origin of `base_url`.
fn endpoint_url(base_url: &str, path: &str) -> Result<Url, FetchError> {
    Url::parse(base_url)
        .and_then(|base| base.join(path))
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
