//! Remote interpretation of a question plus a drawn character.
//!
//! This module provides:
//! - The HTTP client for the interpretation service
//! - A deterministic placeholder answer while the endpoint is unconfigured
//! - A background worker that keeps the UI responsive while a request is in flight

pub mod client;
pub mod dependencies;
pub mod types;

mod manager;

pub use client::{ENDPOINT_UNSET, Endpoint, EndpointError, InterpretClient, placeholder};
pub use dependencies::{InterpretBackend, SharedBackend};
pub use manager::InterpretationManager;
pub use types::{
    BACKEND_UNAVAILABLE_MESSAGE, InterpretError, InterpretOutcome, InterpretRequest,
    Interpretation,
};
