use reqwest::{multipart, Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::config::Config;
pub use crate::logic::errors::SubmitError;
use crate::utils;

/// Text verification response: `{"result": [verdict, confidence, reason, [tag, ...]]}`
#[derive(Debug, Clone, Deserialize)]
struct TextResponse {
    result: (bool, f64, String, Vec<String>),
}

/// Decoded text verification answer
#[derive(Debug, Clone, PartialEq)]
pub struct TextVerdict {
    pub verdict: bool,
    pub confidence: f64,
    pub reason_to_trust: String,
    pub tags: Vec<String>,
}

impl From<TextResponse> for TextVerdict {
    fn from(response: TextResponse) -> Self {
        let (verdict, confidence, reason_to_trust, tags) = response.result;
        Self {
            verdict,
            confidence,
            reason_to_trust,
            tags,
        }
    }
}

#[derive(Debug, Deserialize)]
struct VideoResponse {
    deepfake_result: DeepfakeVerdict,
}

/// Deepfake model answer; `label` is "Real" for authentic footage
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeepfakeVerdict {
    pub label: String,
    pub probability: f64,
}

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    query: &'a str,
}

/// Client for the external verification service
///
/// Both request shapes go to the same endpoint; the service dispatches on
/// content type (JSON body vs multipart upload).
#[derive(Clone)]
pub struct VerifyClient {
    client: Client,
    endpoint_url: String,
    timeout: Option<Duration>,
}

impl VerifyClient {
    pub fn new(endpoint_url: String, timeout: Option<Duration>) -> Self {
        Self {
            client: Client::new(),
            endpoint_url,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint_url(), config.request_timeout())
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// POST to the endpoint, bounded by the configured timeout if any
    fn post(&self) -> RequestBuilder {
        let request = self.client.post(&self.endpoint_url);
        match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    /// Submit a claim for text verification
    pub async fn verify_text(&self, query: &str) -> Result<TextVerdict, SubmitError> {
        tracing::debug!("POST {} text query ({} chars)", self.endpoint_url, query.len());

        let response = self
            .post()
            .json(&TextRequest { query })
            .send()
            .await
            .map_err(|e| SubmitError::from_reqwest(&e))?
            .error_for_status()
            .map_err(|e| SubmitError::from_reqwest(&e))?;

        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::from_reqwest(&e))?;

        let parsed: TextResponse =
            serde_json::from_str(&body).map_err(|e| SubmitError::Decode(e.to_string()))?;

        Ok(parsed.into())
    }

    /// Upload a video for deepfake detection
    pub async fn verify_video(&self, file: &Path) -> Result<DeepfakeVerdict, SubmitError> {
        let bytes = tokio::fs::read(file).await.map_err(|e| SubmitError::File {
            path: file.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            "POST {} video upload {} ({} bytes)",
            self.endpoint_url,
            file.display(),
            bytes.len()
        );

        let part = multipart::Part::bytes(bytes).file_name(utils::display_file_name(file));
        let form = multipart::Form::new().part("video", part);

        let response = self
            .post()
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::from_reqwest(&e))?
            .error_for_status()
            .map_err(|e| SubmitError::from_reqwest(&e))?;

        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::from_reqwest(&e))?;

        let parsed: VideoResponse =
            serde_json::from_str(&body).map_err(|e| SubmitError::Decode(e.to_string()))?;

        Ok(parsed.deepfake_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_response_decodes_positional_array() {
        let body = r#"{"result": [true, 73.5, "Verified by search", ["politics", "health"]]}"#;
        let parsed: TextResponse = serde_json::from_str(body).unwrap();
        let verdict = TextVerdict::from(parsed);
        assert!(verdict.verdict);
        assert_eq!(verdict.confidence, 73.5);
        assert_eq!(verdict.reason_to_trust, "Verified by search");
        assert_eq!(verdict.tags, vec!["politics", "health"]);
    }

    #[test]
    fn test_text_response_integer_confidence() {
        let body = r#"{"result": [false, 40, "reason", []]}"#;
        let parsed: TextResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.result.1, 40.0);
    }

    #[test]
    fn test_text_response_short_array_rejected() {
        let body = r#"{"result": [true, 50]}"#;
        assert!(serde_json::from_str::<TextResponse>(body).is_err());
    }

    #[test]
    fn test_video_response_decodes() {
        let body = r#"{"deepfake_result": {"label": "Real", "probability": 0.87}}"#;
        let parsed: VideoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.deepfake_result.label, "Real");
        assert_eq!(parsed.deepfake_result.probability, 0.87);
    }

    #[test]
    fn test_endpoint_url_from_config() {
        let client = VerifyClient::from_config(&Config::default());
        assert_eq!(client.endpoint_url(), "http://127.0.0.1:5000/process");
    }
}
