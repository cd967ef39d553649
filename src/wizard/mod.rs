//! Three-step wizard state machine (question → draw → result).
//!
//! The wizard owns the session state and gates forward navigation on input
//! validity. Every entry into the result step starts a new submission
//! [`Generation`]; outcomes carrying an older generation are stale.

use log::debug;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Wizard steps. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Typing the question (initial step)
    Question,
    /// Drawing the character
    Draw,
    /// Waiting for or showing the interpretation
    Result,
}

/// Per-session user input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Question text exactly as typed
    pub question: String,
    /// Mirrors the drawing surface's content flag
    pub has_drawing: bool,
}

impl Session {
    /// Whether the question contains anything besides whitespace.
    pub fn has_question(&self) -> bool {
        !self.question.trim().is_empty()
    }
}

/// Submission counter used to discard outcomes that arrive after a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

/// Reasons a transition was refused. The wizard state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("question is empty")]
    EmptyQuestion,

    #[error("nothing has been drawn yet")]
    NoDrawing,

    #[error("transition requires the {expected:?} step, but {actual:?} is active")]
    WrongStep { expected: Step, actual: Step },
}

/// Owns the active step, the session state, and the submission generation.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    session: Session,
    generation: Generation,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Creates a wizard on the question step with an empty session.
    pub fn new() -> Self {
        Self {
            step: Step::Question,
            session: Session::default(),
            generation: Generation(0),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Generation of the most recent submission.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Replaces the question text (called on every input change).
    pub fn set_question(&mut self, text: impl Into<String>) {
        self.session.question = text.into();
    }

    /// Mirrors the drawing surface's content flag into the session.
    pub fn set_has_drawing(&mut self, has_drawing: bool) {
        self.session.has_drawing = has_drawing;
    }

    /// Whether the forward control of the active step should be enabled.
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::Question => self.session.has_question(),
            Step::Draw => self.session.has_drawing,
            Step::Result => false,
        }
    }

    /// Question → Draw. Refused while the trimmed question is empty.
    pub fn advance_to_draw(&mut self) -> Result<(), TransitionError> {
        self.expect_step(Step::Question)?;
        if !self.session.has_question() {
            return Err(TransitionError::EmptyQuestion);
        }
        self.enter(Step::Draw);
        Ok(())
    }

    /// Draw → Question. Always allowed from the draw step.
    pub fn back_to_question(&mut self) -> Result<(), TransitionError> {
        self.expect_step(Step::Draw)?;
        self.enter(Step::Question);
        Ok(())
    }

    /// Draw → Result. Refused until something has been drawn.
    ///
    /// Returns the generation the caller must tag its submission with.
    pub fn advance_to_result(&mut self) -> Result<Generation, TransitionError> {
        self.expect_step(Step::Draw)?;
        if !self.session.has_drawing {
            return Err(TransitionError::NoDrawing);
        }
        self.enter(Step::Result);
        Ok(self.next_generation())
    }

    /// Starts a new submission generation for a retry from the result step.
    pub fn retry(&mut self) -> Result<Generation, TransitionError> {
        self.expect_step(Step::Result)?;
        Ok(self.next_generation())
    }

    /// Result → Question. Clears the question and the drawing flag.
    pub fn restart(&mut self) -> Result<(), TransitionError> {
        self.expect_step(Step::Result)?;
        self.session = Session::default();
        // Bumping the generation invalidates whatever is still in flight
        self.next_generation();
        self.enter(Step::Question);
        Ok(())
    }

    /// Whether an outcome tagged with `generation` may still be applied.
    pub fn accepts(&self, generation: Generation) -> bool {
        self.step == Step::Result && self.generation == generation
    }

    fn expect_step(&self, expected: Step) -> Result<(), TransitionError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(TransitionError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    fn enter(&mut self, step: Step) {
        debug!("Wizard step {:?} -> {:?}", self.step, step);
        self.step = step;
    }

    fn next_generation(&mut self) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        self.generation
    }
}
