use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use shared::{
    domain::{Language, ModelInfo, ModelKind},
    protocol::{
        ApiOutcome, EnvelopeError, HealthResponse, LanguagesResponse, ModelsResponse,
        SummarizeRequest, SummarizeResponse, TranslateRequest, TranslateResponse,
    },
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub mod config;

pub use config::{load_settings, ClientSettings, DEFAULT_API_BASE_URL};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid backend base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("backend base url '{0}' must use http or https")]
    UnsupportedScheme(String),
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        source: reqwest::Error,
    },
    #[error("response from {path} is not valid JSON: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },
    #[error("response from {path} is not a valid envelope: {source}")]
    Envelope {
        path: String,
        source: EnvelopeError,
    },
}

/// Backend operations. Every call resolves to an [`ApiOutcome`]; transport
/// problems never surface as Rust errors.
#[async_trait]
pub trait TextToolsApi: Send + Sync {
    async fn translate(&self, request: &TranslateRequest) -> ApiOutcome<TranslateResponse>;
    async fn summarize(&self, request: &SummarizeRequest) -> ApiOutcome<SummarizeResponse>;
    async fn languages(&self) -> ApiOutcome<Vec<Language>>;
    async fn models(&self, kind: ModelKind) -> ApiOutcome<Vec<ModelInfo>>;
    async fn health(&self) -> ApiOutcome<HealthResponse>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        Ok(Self {
            http: Client::new(),
            base_url: normalize_base_url(base_url.as_ref())?,
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientError> {
        Self::new(&settings.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, ClientError> {
        let response = request.send().await.map_err(|source| ClientError::Transport {
            path: path.to_string(),
            source,
        })?;
        let status = response.status();
        // Error statuses still carry a `{success:false,error}` body worth reading.
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport {
                path: path.to_string(),
                source,
            })?;
        debug!(path, %status, bytes = bytes.len(), "backend responded");
        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiOutcome<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let request = self.http.post(self.endpoint(path)).json(body);
        normalize(path, self.send(path, request).await)
    }

    async fn get_json<T>(&self, path: &str) -> ApiOutcome<T>
    where
        T: DeserializeOwned + Send,
    {
        let request = self.http.get(self.endpoint(path));
        normalize(path, self.send(path, request).await)
    }
}

fn normalize<T: DeserializeOwned>(path: &str, body: Result<Value, ClientError>) -> ApiOutcome<T> {
    let result = body.and_then(|body| {
        ApiOutcome::from_envelope(body).map_err(|source| ClientError::Envelope {
            path: path.to_string(),
            source,
        })
    });

    match result {
        Ok(outcome) => {
            if let ApiOutcome::Failure(err) = &outcome {
                warn!(path, error = %err, "backend reported failure");
            }
            outcome
        }
        Err(err) => {
            warn!(path, error = %err, "backend request failed");
            ApiOutcome::connection_failure()
        }
    }
}

pub fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|source| ClientError::InvalidBaseUrl {
        url: trimmed.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::UnsupportedScheme(trimmed.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[async_trait]
impl TextToolsApi for ApiClient {
    async fn translate(&self, request: &TranslateRequest) -> ApiOutcome<TranslateResponse> {
        self.post_json("/translate", request).await
    }

    async fn summarize(&self, request: &SummarizeRequest) -> ApiOutcome<SummarizeResponse> {
        self.post_json("/summarize", request).await
    }

    async fn languages(&self) -> ApiOutcome<Vec<Language>> {
        self.get_json::<LanguagesResponse>("/languages")
            .await
            .map(|body| body.languages)
    }

    async fn models(&self, kind: ModelKind) -> ApiOutcome<Vec<ModelInfo>> {
        self.get_json::<ModelsResponse>(&format!("/models/{}", kind.as_str()))
            .await
            .map(|body| body.models)
    }

    async fn health(&self) -> ApiOutcome<HealthResponse> {
        let path = "/";
        let body = self.send(path, self.http.get(self.endpoint(path))).await;
        match body.and_then(|body| {
            serde_json::from_value::<HealthResponse>(body).map_err(|source| ClientError::Decode {
                path: path.to_string(),
                source,
            })
        }) {
            Ok(health) => ApiOutcome::Success(health),
            Err(err) => {
                warn!(path, error = %err, "health check failed");
                ApiOutcome::connection_failure()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
