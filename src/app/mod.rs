//! Application context tying the wizard, drawing surface, interpretation worker,
//! result renderer, and share adapter together.
//!
//! Front ends feed every user action through [`App::dispatch`] and call
//! [`App::poll`] regularly (e.g. once per frame) to pick up finished
//! interpretations. Nothing here blocks on the network.

mod types;


pub use types::{AppError, ResultView, Submission, UiEvent};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::config::Config;
use crate::draw::Surface;
use crate::input::{Disposition, handle_pointer, handle_touch};
use crate::interpret::{InterpretOutcome, InterpretationManager, SharedBackend};
use crate::markup::{render, render_error};
use crate::share::{ShareProvider, Sharer, share_text};
use crate::util::Bounds;
use crate::wizard::{Generation, Step, Wizard};

/// How often [`App::settle`] checks for a finished interpretation.
const SETTLE_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Owned state of one interactive session.
pub struct App {
    wizard: Wizard,
    surface: Surface,
    interpreter: InterpretationManager,
    sharer: Arc<Sharer>,
    share_label: String,
    runtime: tokio::runtime::Handle,
    view: ResultView,
    submission: Option<Submission>,
}

impl App {
    /// Builds the context. The drawing surface starts at the default container size;
    /// front ends send [`UiEvent::Resize`] once the real layout is known.
    pub fn new(
        config: &Config,
        runtime: tokio::runtime::Handle,
        backend: SharedBackend,
        sharer: Sharer,
    ) -> Result<Self, AppError> {
        let surface = Surface::with_style(
            Bounds::default(),
            1.0,
            config.stroke_style(),
            config.background(),
        )?;
        let interpreter = InterpretationManager::new(&runtime, backend);
        info!("Interpretation worker started");

        Ok(Self {
            wizard: Wizard::new(),
            surface,
            interpreter,
            sharer: Arc::new(sharer),
            share_label: config.share.label.clone(),
            runtime,
            view: ResultView::Empty,
            submission: None,
        })
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    /// Question and snapshot of the current submission, for the result recap.
    pub fn recap(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Whether an interpretation is outstanding for the current generation.
    pub fn is_pending(&self) -> bool {
        matches!(self.view, ResultView::Loading)
    }

    /// Processes one UI event to completion.
    ///
    /// Refused transitions return [`AppError::Transition`] and change nothing.
    /// Interpretation failures never surface here; they end up in the result view.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Disposition, AppError> {
        debug!("Dispatching {:?}", event);
        match event {
            UiEvent::QuestionInput(text) => {
                if self.wizard.step() == Step::Question {
                    self.wizard.set_question(text);
                } else {
                    debug!("Ignoring question input outside the question step");
                }
            }
            UiEvent::NextFromQuestion => self.wizard.advance_to_draw()?,
            UiEvent::Resize {
                bounds,
                pixel_ratio,
            } => {
                if self.surface.resize(bounds, pixel_ratio)? {
                    self.sync_drawing_flag();
                }
            }
            UiEvent::Pointer(pointer) => {
                if self.accepts_drawing() {
                    handle_pointer(&mut self.surface, pointer)?;
                    self.sync_drawing_flag();
                }
            }
            UiEvent::Touch(touch) => {
                if self.accepts_drawing() {
                    let disposition = handle_touch(&mut self.surface, &touch)?;
                    self.sync_drawing_flag();
                    return Ok(disposition);
                }
            }
            UiEvent::Clear => {
                self.surface.clear()?;
                self.sync_drawing_flag();
            }
            UiEvent::BackToQuestion => {
                self.surface.end();
                self.wizard.back_to_question()?;
            }
            UiEvent::Interpret => self.interpret()?,
            UiEvent::Retry => self.retry()?,
            UiEvent::Restart => self.restart()?,
            UiEvent::Share => self.spawn_share()?,
        }
        Ok(Disposition::Default)
    }

    /// Applies every finished interpretation that still belongs to the current
    /// generation. Returns true when the result view changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for outcome in self.interpreter.try_take_outcomes() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Polls until the current interpretation finishes or `timeout` elapses.
    pub async fn settle(&mut self, timeout: Duration) -> Result<(), AppError> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            self.poll();
            if !self.is_pending() {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(AppError::Timeout(timeout));
            }
            tokio::time::sleep(SETTLE_POLL_INTERVAL).await;
        }
    }

    /// Share text for the displayed interpretation, if there is one.
    pub fn share_text(&self) -> Option<String> {
        match (&self.view, &self.submission) {
            (ResultView::Content(rendered), Some(submission)) => Some(share_text(
                &self.share_label,
                &submission.question,
                &rendered.plain_text,
            )),
            _ => None,
        }
    }

    /// Provider a share would use right now.
    pub fn share_provider(&self) -> ShareProvider {
        self.sharer.probe()
    }

    /// Shares the displayed interpretation and waits for the provider to finish.
    pub async fn share(&self) -> Result<ShareProvider, AppError> {
        let text = self.share_text().ok_or(AppError::NothingToShare)?;
        let provider = self.sharer.share(&text).await?;
        Ok(provider)
    }

    fn accepts_drawing(&self) -> bool {
        if self.wizard.step() == Step::Draw {
            true
        } else {
            debug!("Ignoring drawing input outside the draw step");
            false
        }
    }

    fn sync_drawing_flag(&mut self) {
        self.wizard.set_has_drawing(self.surface.has_content());
    }

    fn interpret(&mut self) -> Result<(), AppError> {
        self.surface.end();
        let generation = self.wizard.advance_to_result()?;
        let Some(submission) = self.capture_or_fail() else {
            return Ok(());
        };
        info!(
            "Submitting interpretation {:?} ({} base64 chars)",
            generation,
            submission.image.len()
        );
        self.submit(generation, submission);
        Ok(())
    }

    /// Resends the last submission. When the failure happened before anything was
    /// sent (the snapshot could not be taken), the drawing is captured again.
    fn retry(&mut self) -> Result<(), AppError> {
        if !matches!(self.view, ResultView::Failed(_)) {
            return Err(AppError::NothingToRetry);
        }
        let submission = match self.submission.clone() {
            Some(submission) => submission,
            None => match self.capture_or_fail() {
                Some(submission) => submission,
                None => return Ok(()),
            },
        };
        let generation = self.wizard.retry()?;
        info!("Retrying interpretation as {:?}", generation);
        self.submit(generation, submission);
        Ok(())
    }

    /// Snapshots the drawing with the current question. On failure the error
    /// panel is shown instead and `None` is returned.
    fn capture_or_fail(&mut self) -> Option<Submission> {
        match self.surface.snapshot() {
            Ok(image) => Some(Submission {
                question: self.wizard.session().question.clone(),
                image,
            }),
            Err(err) => {
                warn!("Failed to capture drawing: {}", err);
                self.view = ResultView::Failed(render_error(&err.to_string()));
                None
            }
        }
    }

    fn submit(&mut self, generation: Generation, submission: Submission) {
        let result = self.interpreter.submit(
            generation,
            submission.question.clone(),
            submission.image.clone(),
        );
        self.submission = Some(submission);
        self.view = match result {
            Ok(()) => ResultView::Loading,
            Err(err) => {
                warn!("Could not queue interpretation: {}", err);
                ResultView::Failed(render_error(&err.to_string()))
            }
        };
    }

    fn restart(&mut self) -> Result<(), AppError> {
        self.wizard.restart()?;
        self.surface.clear()?;
        self.view = ResultView::Empty;
        self.submission = None;
        Ok(())
    }

    fn apply(&mut self, outcome: InterpretOutcome) -> bool {
        if !self.wizard.accepts(outcome.generation) {
            warn!(
                "Discarding stale interpretation {:?} (current {:?})",
                outcome.generation,
                self.wizard.generation()
            );
            return false;
        }

        self.view = match outcome.result {
            Ok(interpretation) => {
                info!("Showing interpretation {:?}", outcome.generation);
                ResultView::Content(render(&interpretation.text))
            }
            Err(err) => ResultView::Failed(render_error(&err.to_string())),
        };
        true
    }

    fn spawn_share(&self) -> Result<(), AppError> {
        let text = self.share_text().ok_or(AppError::NothingToShare)?;
        let sharer = Arc::clone(&self.sharer);
        self.runtime.spawn(async move {
            match sharer.share(&text).await {
                Ok(provider) => info!("Result shared via {:?}", provider),
                Err(err) => warn!("Sharing failed: {}", err),
            }
        });
        Ok(())
    }
}
