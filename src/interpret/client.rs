//! HTTP client for the remote interpretation service.

use super::types::{InterpretError, Interpretation, RequestBody, ResponseBody};
use crate::draw::EncodedImage;
use log::{debug, info, warn};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Sentinel endpoint value shipped in the default configuration.
pub const ENDPOINT_UNSET: &str = "YOUR_DEPLOYMENT_URL";

/// Where interpretation requests go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// No deployment configured yet; requests get a local placeholder answer
    Unconfigured,
    /// Deployed service URL
    Remote(Url),
}

/// Why a configured endpoint value was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("unsupported scheme '{0}'")]
    UnsupportedScheme(String),

    #[error(transparent)]
    Invalid(#[from] url::ParseError),
}

impl Endpoint {
    /// Parses a configured endpoint value, reporting why it was rejected.
    ///
    /// Empty strings and the sentinel are `Unconfigured`; only `http(s)` URLs are
    /// accepted as remote endpoints.
    pub fn try_parse(value: &str) -> Result<Self, EndpointError> {
        let value = value.trim();
        if value.is_empty() || value == ENDPOINT_UNSET {
            return Ok(Endpoint::Unconfigured);
        }
        let url = Url::parse(value)?;
        if matches!(url.scheme(), "http" | "https") {
            Ok(Endpoint::Remote(url))
        } else {
            Err(EndpointError::UnsupportedScheme(url.scheme().to_string()))
        }
    }

    /// Like [`Endpoint::try_parse`], but falls back to `Unconfigured` with a warning.
    pub fn parse(value: &str) -> Self {
        Self::try_parse(value).unwrap_or_else(|err| {
            warn!("Invalid endpoint '{}' ({}), running unconfigured", value.trim(), err);
            Endpoint::Unconfigured
        })
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Endpoint::Remote(_))
    }
}

/// Client for the interpretation service.
#[derive(Debug, Clone)]
pub struct InterpretClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl InterpretClient {
    /// Builds a client with a request timeout.
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Requests an interpretation of `question` and the drawn character.
    ///
    /// With an unconfigured endpoint no request is made and a placeholder answer
    /// is returned instead.
    pub async fn interpret(
        &self,
        question: &str,
        image: &EncodedImage,
    ) -> Result<Interpretation, InterpretError> {
        let url = match &self.endpoint {
            Endpoint::Unconfigured => {
                warn!("Interpretation endpoint not configured, answering with placeholder");
                return Ok(placeholder(question, image));
            }
            Endpoint::Remote(url) => url,
        };

        info!(
            "Requesting interpretation ({} chars question, {} chars image)",
            question.chars().count(),
            image.len()
        );

        let body = RequestBody {
            question,
            image_base64: image.as_base64(),
        };

        let response = self
            .http
            .post(url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Interpretation request failed: {}", e);
                InterpretError::BackendUnavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Interpretation service answered with status {}", status);
            return Err(InterpretError::BackendUnavailable);
        }

        let text = response.text().await.map_err(|e| {
            warn!("Failed to read interpretation response: {}", e);
            InterpretError::BackendUnavailable
        })?;
        debug!("Interpretation response body: {} bytes", text.len());

        let parsed: ResponseBody = serde_json::from_str(&text)
            .map_err(|e| InterpretError::MalformedResponse(e.to_string()))?;
        parsed.into_result()
    }
}

/// Deterministic answer used while the endpoint is unconfigured.
///
/// Echoes the question and the base64 length of the image so the whole flow can be
/// exercised before deployment.
pub fn placeholder(question: &str, image: &EncodedImage) -> Interpretation {
    Interpretation::new(format!(
        "### Test mode: configuration needed\n\n\
         Finish the following setup first:\n\n\
         1. Deploy the interpretation service\n\
         2. Set `service.endpoint` in the cezi config file to the deployment URL\n\n\
         **Your question**: {question}\n\n\
         **Image received** (base64 length: {})",
        image.len()
    ))
}
