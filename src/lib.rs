//! Library exports for cezi.
//!
//! The crate is headless: the [`app::App`] context owns the wizard, the drawing
//! surface, the interpretation worker, and the share adapter, and front ends
//! drive it with [`app::UiEvent`]s. The `cezi` binary replays recorded sessions
//! through the same context.

pub mod app;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod interpret;
pub mod markup;
pub mod script;
pub mod share;
pub mod util;
pub mod wizard;

pub use app::{App, AppError, ResultView, UiEvent};
pub use config::Config;
