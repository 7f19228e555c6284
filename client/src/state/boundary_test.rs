use super::*;

#[derive(Debug, thiserror::Error)]
#[error("entry lookup failed")]
struct LookupError {
    #[source]
    source: std::io::Error,
}

// =============================================================
// RenderError
// =============================================================

#[test]
fn render_error_displays_message() {
    let err = RenderError::new("boom");
    assert_eq!(err.to_string(), "boom");
    assert_eq!(err.message(), "boom");
    assert_eq!(err.context(), None);
}

#[test]
fn render_error_with_context_keeps_message() {
    let err = RenderError::new("boom").with_context("journal entry");
    assert_eq!(err.message(), "boom");
    assert_eq!(err.context(), Some("journal entry"));
}

#[test]
fn render_error_from_error_folds_source_chain() {
    let lookup = LookupError { source: std::io::Error::other("disk unplugged") };
    let err = RenderError::from_error(&lookup);
    assert_eq!(err.message(), "entry lookup failed");
    assert_eq!(err.context(), Some("disk unplugged"));
}

#[test]
fn render_error_from_error_without_source_has_no_context() {
    let err = RenderError::from_error(&std::io::Error::other("plain"));
    assert_eq!(err.message(), "plain");
    assert_eq!(err.context(), None);
}

#[test]
fn fallback_message_uses_failure_text() {
    assert_eq!(fallback_message(&RenderError::new("boom")), "boom");
}

#[test]
fn fallback_message_falls_back_for_blank_text() {
    assert_eq!(fallback_message(&RenderError::new("")), GENERIC_FAILURE_MESSAGE);
    assert_eq!(fallback_message(&RenderError::new("   ")), GENERIC_FAILURE_MESSAGE);
}

// =============================================================
// BoundaryState transitions
// =============================================================

#[test]
fn boundary_starts_normal() {
    let state = BoundaryState::default();
    assert_eq!(state, BoundaryState::Normal);
    assert!(!state.is_failed());
}

#[test]
fn capture_from_normal_transitions_once() {
    let mut state = BoundaryState::Normal;
    assert!(state.capture(RenderError::new("first")));
    assert!(state.is_failed());
    assert!(!state.capture(RenderError::new("second")));
    assert_eq!(state, BoundaryState::Failed(RenderError::new("second")));
}

#[test]
fn reset_returns_to_normal_and_drops_error() {
    let mut state = BoundaryState::Normal;
    state.capture(RenderError::new("boom"));
    state.reset();
    assert_eq!(state, BoundaryState::Normal);
}

#[test]
fn attempt_in_normal_renders_subtree() {
    let mut state = BoundaryState::Normal;
    let outcome = state.attempt(|| Ok::<_, RenderError>("content"));
    assert_eq!(outcome, RenderOutcome::Rendered("content"));
    assert_eq!(state, BoundaryState::Normal);
}

#[test]
fn attempt_captures_failure() {
    let mut state = BoundaryState::Normal;
    let outcome = state.attempt(|| Err::<&str, _>(RenderError::new("boom")));
    assert_eq!(outcome, RenderOutcome::Captured(RenderError::new("boom")));
    assert_eq!(state, BoundaryState::Failed(RenderError::new("boom")));
}

#[test]
fn attempt_while_failed_skips_subtree() {
    let mut state = BoundaryState::Failed(RenderError::new("boom"));
    let mut calls = 0;
    let outcome = state.attempt(|| {
        calls += 1;
        Ok::<_, RenderError>("content")
    });
    assert_eq!(outcome, RenderOutcome::Failed(RenderError::new("boom")));
    assert_eq!(calls, 0);
}

#[test]
fn each_failure_after_reset_transitions_exactly_once() {
    let mut state = BoundaryState::Normal;
    let mut transitions = 0;
    for round in 0..5 {
        let outcome = state.attempt(|| Err::<(), _>(RenderError::new(format!("fail {round}"))));
        if matches!(outcome, RenderOutcome::Captured(_)) {
            transitions += 1;
        }
        // Re-rendering without a reset never leaves Failed.
        assert!(matches!(state.attempt(|| Ok::<_, RenderError>(())), RenderOutcome::Failed(_)));
        state.reset();
    }
    assert_eq!(transitions, 5);
}

#[test]
fn reset_does_not_replay_previous_error() {
    let mut state = BoundaryState::Normal;
    for _ in 0..3 {
        state.attempt(|| Err::<(), _>(RenderError::new("boom")));
    }
    state.reset();
    assert_eq!(state.attempt(|| Ok::<_, RenderError>(7)), RenderOutcome::Rendered(7));
}

#[test]
fn boom_scenario_shows_fallback_then_recovers() {
    let mut state = BoundaryState::Normal;
    let mut failing = true;

    let first = state.attempt(|| if failing { Err(RenderError::new("boom")) } else { Ok("entry body") });
    match first {
        RenderOutcome::Captured(err) => assert!(fallback_message(&err).contains("boom")),
        other => panic!("expected captured failure, got {other:?}"),
    }

    failing = false;
    state.reset();
    let second = state.attempt(|| if failing { Err(RenderError::new("boom")) } else { Ok("entry body") });
    assert_eq!(second, RenderOutcome::Rendered("entry body"));
}
