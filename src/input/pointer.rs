//! Translation of pointer and touch events into surface strokes.

use super::events::{Disposition, PointerEvent, TouchEvent};
use crate::draw::{Surface, SurfaceError};

/// Processes a pointer event against the surface.
///
/// # Behavior
/// - Down: starts a stroke at the surface-relative position
/// - Move: extends the active stroke (ignored when no stroke is active)
/// - Up / Leave: ends the stroke
pub fn handle_pointer(surface: &mut Surface, event: PointerEvent) -> Result<(), SurfaceError> {
    match event {
        PointerEvent::Down { x, y } => {
            let point = surface.to_surface_point(x, y);
            surface.begin(point);
        }
        PointerEvent::Move { x, y } => {
            let point = surface.to_surface_point(x, y);
            surface.extend(point)?;
        }
        PointerEvent::Up | PointerEvent::Leave => surface.end(),
    }
    Ok(())
}

/// Processes a touch event against the surface.
///
/// Touch start and move map onto the same coordinate space as pointer input and
/// ask the host to suppress scrolling and zooming.
pub fn handle_touch(surface: &mut Surface, event: &TouchEvent) -> Result<Disposition, SurfaceError> {
    match event {
        TouchEvent::Start { .. } => {
            if let Some((x, y)) = event.primary() {
                handle_pointer(surface, PointerEvent::Down { x, y })?;
            }
            Ok(Disposition::PreventDefault)
        }
        TouchEvent::Move { .. } => {
            if let Some((x, y)) = event.primary() {
                handle_pointer(surface, PointerEvent::Move { x, y })?;
            }
            Ok(Disposition::PreventDefault)
        }
        TouchEvent::End => {
            handle_pointer(surface, PointerEvent::Up)?;
            Ok(Disposition::Default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Bounds;

    fn offset_surface() -> Surface {
        Surface::new(Bounds::new(100.0, 50.0, 200.0, 200.0), 1.0).unwrap()
    }

    #[test]
    fn pointer_drag_draws_and_marks_content() {
        let mut surface = offset_surface();
        handle_pointer(&mut surface, PointerEvent::Down { x: 110.0, y: 60.0 }).unwrap();
        assert!(surface.is_drawing());
        handle_pointer(&mut surface, PointerEvent::Move { x: 150.0, y: 90.0 }).unwrap();
        handle_pointer(&mut surface, PointerEvent::Up).unwrap();

        assert!(surface.has_content());
        assert!(!surface.is_drawing());
    }

    #[test]
    fn hover_without_press_does_not_draw() {
        let mut surface = offset_surface();
        handle_pointer(&mut surface, PointerEvent::Move { x: 150.0, y: 90.0 }).unwrap();
        assert!(!surface.has_content());
    }

    #[test]
    fn leaving_the_surface_ends_the_stroke() {
        let mut surface = offset_surface();
        handle_pointer(&mut surface, PointerEvent::Down { x: 110.0, y: 60.0 }).unwrap();
        handle_pointer(&mut surface, PointerEvent::Leave).unwrap();
        handle_pointer(&mut surface, PointerEvent::Move { x: 150.0, y: 90.0 }).unwrap();
        assert!(!surface.has_content());
    }

    #[test]
    fn touch_prevents_default_and_matches_pointer_pixels() {
        let mut by_touch = offset_surface();
        let start = TouchEvent::Start {
            touches: vec![(120.0, 70.0), (5.0, 5.0)],
        };
        let movement = TouchEvent::Move {
            touches: vec![(180.0, 140.0)],
        };
        assert_eq!(
            handle_touch(&mut by_touch, &start).unwrap(),
            Disposition::PreventDefault
        );
        assert_eq!(
            handle_touch(&mut by_touch, &movement).unwrap(),
            Disposition::PreventDefault
        );
        assert_eq!(
            handle_touch(&mut by_touch, &TouchEvent::End).unwrap(),
            Disposition::Default
        );

        let mut by_pointer = offset_surface();
        handle_pointer(&mut by_pointer, PointerEvent::Down { x: 120.0, y: 70.0 }).unwrap();
        handle_pointer(&mut by_pointer, PointerEvent::Move { x: 180.0, y: 140.0 }).unwrap();
        handle_pointer(&mut by_pointer, PointerEvent::Up).unwrap();

        assert!(by_touch.has_content());
        assert_eq!(
            by_touch.snapshot_png().unwrap(),
            by_pointer.snapshot_png().unwrap()
        );
    }

    #[test]
    fn empty_touch_list_is_ignored() {
        let mut surface = offset_surface();
        let start = TouchEvent::Start { touches: vec![] };
        assert_eq!(
            handle_touch(&mut surface, &start).unwrap(),
            Disposition::PreventDefault
        );
        assert!(!surface.is_drawing());
    }
}
