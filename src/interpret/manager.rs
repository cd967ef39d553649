use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use crate::draw::EncodedImage;
use crate::interpret::{
    dependencies::SharedBackend,
    types::{InterpretError, InterpretOutcome, InterpretRequest},
};
use crate::wizard::Generation;

/// Runs interpretation requests off the UI thread.
///
/// The UI submits requests without waiting and later collects finished outcomes
/// with [`InterpretationManager::try_take_outcomes`]. Requests are processed one at a
/// time in submission order.
#[derive(Clone)]
pub struct InterpretationManager {
    /// Channel for sending interpretation requests.
    request_tx: mpsc::UnboundedSender<InterpretRequest>,
    /// Finished outcomes not yet collected by the UI.
    completed: Arc<Mutex<VecDeque<InterpretOutcome>>>,
}

impl InterpretationManager {
    /// Create a new manager, spawning its worker task on `runtime_handle`.
    pub fn new(runtime_handle: &tokio::runtime::Handle, backend: SharedBackend) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<InterpretRequest>();
        let completed = Arc::new(Mutex::new(VecDeque::new()));

        let completed_clone = completed.clone();

        runtime_handle.spawn(async move {
            while let Some(request) = request_rx.recv().await {
                log::debug!(
                    "Processing interpretation request {:?}",
                    request.generation
                );
                let result = backend.interpret(&request.question, &request.image).await;
                match &result {
                    Ok(interpretation) => log::info!(
                        "Interpretation {:?} received ({} chars)",
                        request.generation,
                        interpretation.text.chars().count()
                    ),
                    Err(err) => log::error!(
                        "Interpretation {:?} failed: {}",
                        request.generation,
                        err
                    ),
                }

                completed_clone.lock().await.push_back(InterpretOutcome {
                    generation: request.generation,
                    result,
                });
            }
        });

        Self {
            request_tx,
            completed,
        }
    }

    /// Queue an interpretation request. Returns immediately.
    pub fn submit(
        &self,
        generation: Generation,
        question: String,
        image: EncodedImage,
    ) -> Result<(), InterpretError> {
        let request = InterpretRequest {
            generation,
            question,
            image,
        };
        self.request_tx
            .send(request)
            .map_err(|_| InterpretError::WorkerStopped)
    }

    /// Collect every finished outcome without waiting.
    ///
    /// Returns an empty list when the worker is currently publishing a result; the
    /// next call picks it up.
    pub fn try_take_outcomes(&self) -> Vec<InterpretOutcome> {
        self.completed
            .try_lock()
            .map(|mut queue| queue.drain(..).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl InterpretationManager {
    pub(crate) fn with_closed_channel_for_test() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<InterpretRequest>();
        drop(rx);
        Self {
            request_tx: tx,
            completed: Arc::new(Mutex::new(VecDeque::new())),
        }
    }
}
