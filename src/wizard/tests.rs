use super::*;

fn wizard_on_draw() -> Wizard {
    let mut wizard = Wizard::new();
    wizard.set_question("Will it rain?");
    wizard.advance_to_draw().unwrap();
    wizard
}

#[test]
fn starts_on_question_step() {
    let wizard = Wizard::new();
    assert_eq!(wizard.step(), Step::Question);
    assert!(!wizard.can_advance());
}

#[test]
fn empty_or_whitespace_question_is_refused() {
    let mut wizard = Wizard::new();
    assert_eq!(wizard.advance_to_draw(), Err(TransitionError::EmptyQuestion));

    wizard.set_question(" ");
    assert!(!wizard.can_advance());
    assert_eq!(wizard.advance_to_draw(), Err(TransitionError::EmptyQuestion));

    wizard.set_question("\t\n  ");
    assert_eq!(wizard.advance_to_draw(), Err(TransitionError::EmptyQuestion));
    assert_eq!(wizard.step(), Step::Question);
}

#[test]
fn any_visible_question_is_accepted() {
    let mut wizard = Wizard::new();
    wizard.set_question("a");
    assert!(wizard.can_advance());
    wizard.advance_to_draw().unwrap();
    assert_eq!(wizard.step(), Step::Draw);
    // The question is stored as typed, not trimmed
    wizard.back_to_question().unwrap();
    wizard.set_question("  a ");
    wizard.advance_to_draw().unwrap();
    assert_eq!(wizard.session().question, "  a ");
}

#[test]
fn draw_to_result_requires_drawing() {
    let mut wizard = wizard_on_draw();
    assert!(!wizard.can_advance());
    assert_eq!(wizard.advance_to_result(), Err(TransitionError::NoDrawing));
    assert_eq!(wizard.step(), Step::Draw);

    wizard.set_has_drawing(true);
    assert!(wizard.can_advance());
    let generation = wizard.advance_to_result().unwrap();
    assert_eq!(wizard.step(), Step::Result);
    assert!(wizard.accepts(generation));
}

#[test]
fn back_navigation_is_unconditional_from_draw() {
    let mut wizard = wizard_on_draw();
    wizard.set_has_drawing(true);
    wizard.back_to_question().unwrap();
    assert_eq!(wizard.step(), Step::Question);
    assert!(wizard.session().has_drawing);
}

#[test]
fn restart_clears_session_and_invalidates_pending_outcomes() {
    let mut wizard = wizard_on_draw();
    wizard.set_has_drawing(true);
    let generation = wizard.advance_to_result().unwrap();

    wizard.restart().unwrap();
    assert_eq!(wizard.step(), Step::Question);
    assert_eq!(wizard.session(), &Session::default());
    assert!(!wizard.accepts(generation));

    wizard.set_question("again");
    wizard.advance_to_draw().unwrap();
    wizard.set_has_drawing(true);
    let second = wizard.advance_to_result().unwrap();
    assert!(second > generation);
    assert!(!wizard.accepts(generation));
    assert!(wizard.accepts(second));
}

#[test]
fn retry_supersedes_previous_generation() {
    let mut wizard = wizard_on_draw();
    wizard.set_has_drawing(true);
    let first = wizard.advance_to_result().unwrap();
    let retry = wizard.retry().unwrap();
    assert!(!wizard.accepts(first));
    assert!(wizard.accepts(retry));
}

#[test]
fn transitions_from_the_wrong_step_are_refused() {
    let mut wizard = Wizard::new();
    assert_eq!(
        wizard.restart(),
        Err(TransitionError::WrongStep {
            expected: Step::Result,
            actual: Step::Question,
        })
    );
    assert!(wizard.retry().is_err());
    assert!(wizard.back_to_question().is_err());
    assert!(wizard.advance_to_result().is_err());
    assert_eq!(wizard.step(), Step::Question);
}
