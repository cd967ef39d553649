//! Replay of recorded drawing sessions.
//!
//! A session script describes one pass through the wizard: the question, where the
//! drawing container sat in the viewport, and the strokes in viewport coordinates.
//!
//! ```json
//! {
//!   "question": "Will it rain tomorrow?",
//!   "container": { "left": 10, "top": 80, "width": 300, "height": 300 },
//!   "pixel_ratio": 2.0,
//!   "strokes": [[[40, 40], [120, 160], [200, 60]]]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::app::{App, UiEvent};
use crate::input::PointerEvent;
use crate::util::Bounds;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionScript {
    pub question: String,
    #[serde(default)]
    pub container: Bounds,
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f64,
    /// One entry per stroke, each a list of `[x, y]` viewport points
    #[serde(default)]
    pub strokes: Vec<Vec<(f64, f64)>>,
}

fn default_pixel_ratio() -> f64 {
    1.0
}

impl SessionScript {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session script {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse session script {}", path.display()))
    }

    /// Feeds the session through `app` up to and including the interpretation request.
    ///
    /// The caller waits for the outcome (see [`App::settle`]).
    pub fn replay(&self, app: &mut App) -> Result<()> {
        app.dispatch(UiEvent::QuestionInput(self.question.clone()))?;
        app.dispatch(UiEvent::NextFromQuestion)
            .context("Script question is empty")?;
        app.dispatch(UiEvent::Resize {
            bounds: self.container,
            pixel_ratio: self.pixel_ratio,
        })?;

        for stroke in &self.strokes {
            let mut points = stroke.iter().copied();
            let Some((x, y)) = points.next() else {
                continue;
            };
            app.dispatch(UiEvent::Pointer(PointerEvent::Down { x, y }))?;
            for (x, y) in points {
                app.dispatch(UiEvent::Pointer(PointerEvent::Move { x, y }))?;
            }
            app.dispatch(UiEvent::Pointer(PointerEvent::Up))?;
        }
        log::debug!("Replayed {} strokes", self.strokes.len());

        app.dispatch(UiEvent::Interpret)
            .context("Script strokes left the drawing empty")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_defaults_fill_missing_fields() {
        let script: SessionScript =
            serde_json::from_str(r#"{ "question": "q", "strokes": [[[1, 2], [3, 4]]] }"#).unwrap();
        assert_eq!(script.pixel_ratio, 1.0);
        assert_eq!(script.container, Bounds::default());
        assert_eq!(script.strokes, vec![vec![(1.0, 2.0), (3.0, 4.0)]]);
    }

    #[test]
    fn load_reports_path_on_parse_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{").unwrap();
        let err = SessionScript::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
