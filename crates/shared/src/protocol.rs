use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{Language, ModelInfo, SummaryFormat, SummaryLength},
    error::{ApiError, CONNECTION_FAILURE_MESSAGE},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source: String,
    pub target: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub model: String,
    pub length: SummaryLength,
    pub format: SummaryFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    #[serde(default)]
    pub processing_time: f64,
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
    #[serde(default)]
    pub model_used: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    #[serde(default)]
    pub processing_time: f64,
    #[serde(default)]
    pub model_used: Option<String>,
    #[serde(default)]
    pub length: Option<SummaryLength>,
    #[serde(default)]
    pub format: Option<SummaryFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
}

/// Body of `GET /`; unlike every other endpoint it carries no `success` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub version: String,
}

impl HealthResponse {
    pub fn is_online(&self) -> bool {
        self.status.eq_ignore_ascii_case("online")
    }
}

/// Normalized result of one request/response round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Failure(ApiError),
}

impl<T> ApiOutcome<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        ApiOutcome::Failure(ApiError::new(message))
    }

    pub fn connection_failure() -> Self {
        Self::failure(CONNECTION_FAILURE_MESSAGE)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Success(value) => ApiOutcome::Success(f(value)),
            ApiOutcome::Failure(err) => ApiOutcome::Failure(err),
        }
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiOutcome::Success(value) => Ok(value),
            ApiOutcome::Failure(err) => Err(err),
        }
    }
}

/// Why a JSON body could not be read as a `{success, ...}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("response body is not a JSON object")]
    NotAnObject,
    #[error("success payload did not match the expected shape: {0}")]
    Payload(#[from] serde_json::Error),
}

impl<T: DeserializeOwned> ApiOutcome<T> {
    /// Reads a backend envelope. A missing or false `success` flag is a domain
    /// failure carrying the server's `error` text; a `success:true` body must
    /// decode as `T`.
    pub fn from_envelope(body: Value) -> Result<Self, EnvelopeError> {
        let Some(object) = body.as_object() else {
            return Err(EnvelopeError::NotAnObject);
        };

        let success = object
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !success {
            let message = object
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Ok(ApiOutcome::Failure(ApiError::new(message)));
        }

        Ok(ApiOutcome::Success(serde_json::from_value(body)?))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_envelope_decodes_payload() {
        let outcome = ApiOutcome::<TranslateResponse>::from_envelope(json!({
            "success": true,
            "translated_text": "नमस्ते दुनिया",
            "source_language": "en",
            "target_language": "hi",
            "model_used": "nllb",
            "processing_time": 1.25
        }))
        .expect("envelope");

        let ApiOutcome::Success(response) = outcome else {
            panic!("expected success");
        };
        assert_eq!(response.translated_text, "नमस्ते दुनिया");
        assert_eq!(response.processing_time, 1.25);
        assert_eq!(response.model_used.as_deref(), Some("nllb"));
    }

    #[test]
    fn failure_envelope_keeps_server_message_verbatim() {
        let outcome = ApiOutcome::<SummarizeResponse>::from_envelope(json!({
            "success": false,
            "error": "Text must be at least 50 characters long"
        }))
        .expect("envelope");

        assert_eq!(
            outcome,
            ApiOutcome::failure("Text must be at least 50 characters long")
        );
    }

    #[test]
    fn success_without_expected_fields_is_a_payload_error() {
        let err = ApiOutcome::<LanguagesResponse>::from_envelope(json!({ "success": true }))
            .expect_err("payload must not decode");
        assert!(matches!(err, EnvelopeError::Payload(_)));

        let err = ApiOutcome::<LanguagesResponse>::from_envelope(json!(["not", "an", "object"]))
            .expect_err("array body");
        assert!(matches!(err, EnvelopeError::NotAnObject));
    }

    #[test]
    fn summarize_request_serializes_wire_names() {
        let body = serde_json::to_value(SummarizeRequest {
            text: "text".to_string(),
            model: "bart".to_string(),
            length: SummaryLength::Medium,
            format: SummaryFormat::Bullets,
        })
        .expect("json");
        assert_eq!(
            body,
            json!({ "text": "text", "model": "bart", "length": "medium", "format": "bullets" })
        );
    }
}
