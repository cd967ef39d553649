use std::time::Duration;

use thiserror::Error;

use crate::draw::{EncodedImage, SurfaceError};
use crate::input::{PointerEvent, TouchEvent};
use crate::markup::{ErrorPanel, Rendered};
use crate::share::ShareError;
use crate::util::Bounds;
use crate::wizard::TransitionError;

/// Every user action a front end can report.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The question text changed
    QuestionInput(String),
    /// Forward control on the question step
    NextFromQuestion,
    /// The drawing container was laid out (or changed size / pixel ratio)
    Resize { bounds: Bounds, pixel_ratio: f64 },
    Pointer(PointerEvent),
    Touch(TouchEvent),
    /// Clear control on the draw step
    Clear,
    /// Back control on the draw step
    BackToQuestion,
    /// Forward control on the draw step
    Interpret,
    /// Retry control of the error panel
    Retry,
    /// Start over from the result step
    Restart,
    Share,
}

/// What the result step currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    /// Nothing submitted yet
    Empty,
    /// Waiting for the interpretation service
    Loading,
    Content(Rendered),
    Failed(ErrorPanel),
}

/// The question and drawing that were sent for interpretation.
///
/// Kept so a retry sends exactly the same payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub question: String,
    pub image: EncodedImage,
}

impl Submission {
    /// Data URI of the drawing for the recap thumbnail.
    pub fn image_data_uri(&self) -> String {
        self.image.data_uri()
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("Drawing surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Share failed: {0}")]
    Share(#[from] ShareError),

    #[error("No interpretation to share")]
    NothingToShare,

    #[error("No failed interpretation to retry")]
    NothingToRetry,

    #[error("Interpretation did not finish within {0:?}")]
    Timeout(Duration),
}
