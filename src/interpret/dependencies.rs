use std::sync::Arc;

use async_trait::async_trait;

use crate::draw::EncodedImage;
use crate::interpret::{
    client::InterpretClient,
    types::{Interpretation, InterpretError},
};

/// Abstraction over the interpretation service so the worker can be tested without a network.
#[async_trait]
pub trait InterpretBackend: Send + Sync {
    async fn interpret(
        &self,
        question: &str,
        image: &EncodedImage,
    ) -> Result<Interpretation, InterpretError>;
}

#[async_trait]
impl InterpretBackend for InterpretClient {
    async fn interpret(
        &self,
        question: &str,
        image: &EncodedImage,
    ) -> Result<Interpretation, InterpretError> {
        InterpretClient::interpret(self, question, image).await
    }
}

/// Shared handle to whichever backend the worker uses.
pub type SharedBackend = Arc<dyn InterpretBackend>;
