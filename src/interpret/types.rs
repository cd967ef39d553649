//! Data types for the interpretation service exchange.

use crate::draw::EncodedImage;
use crate::wizard::Generation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic message shown when the service cannot be reached.
pub const BACKEND_UNAVAILABLE_MESSAGE: &str = "Could not reach the interpretation service";

/// Free-text interpretation in the Markdown-like dialect, unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub text: String,
}

impl Interpretation {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Errors that can occur while requesting an interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// Transport failure or non-success HTTP status
    #[error("{}", BACKEND_UNAVAILABLE_MESSAGE)]
    BackendUnavailable,

    /// The service was reached and reported a semantic error
    #[error("{0}")]
    Application(String),

    /// The service answered with a body that is neither a result nor an error
    #[error("Interpretation service returned an invalid response: {0}")]
    MalformedResponse(String),

    /// The background worker is gone
    #[error("Interpretation worker not running")]
    WorkerStopped,
}

/// JSON request body: `{ "question": ..., "imageBase64": ... }`.
#[derive(Debug, Serialize)]
pub(crate) struct RequestBody<'a> {
    pub(crate) question: &'a str,
    #[serde(rename = "imageBase64")]
    pub(crate) image_base64: &'a str,
}

/// JSON response body: `{ "interpretation": ... }` or `{ "error": ... }`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResponseBody {
    #[serde(default)]
    pub(crate) interpretation: Option<String>,
    #[serde(default)]
    pub(crate) error: Option<String>,
}

impl ResponseBody {
    /// An error field wins over an interpretation; an empty error field is ignored.
    pub(crate) fn into_result(self) -> Result<Interpretation, InterpretError> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Err(InterpretError::Application(error));
        }
        self.interpretation
            .map(Interpretation::new)
            .ok_or_else(|| InterpretError::MalformedResponse("missing interpretation".into()))
    }
}

/// One submission queued for the background worker.
#[derive(Debug, Clone)]
pub struct InterpretRequest {
    pub generation: Generation,
    pub question: String,
    pub image: EncodedImage,
}

/// Completed submission, tagged with the generation it was issued under.
#[derive(Debug, Clone)]
pub struct InterpretOutcome {
    pub generation: Generation,
    pub result: Result<Interpretation, InterpretError>,
}

