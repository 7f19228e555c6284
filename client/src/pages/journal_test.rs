use super::*;
use crate::components::status_pill::{StatusTone, tone_for};
use crate::state::boundary::{BoundaryState, RenderOutcome, fallback_message};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mounted_on(hash: &str) -> DaySelection {
    select_day(true, || hash.to_owned())
}

#[test]
fn select_day_does_not_read_hash_before_mount() {
    let selection = select_day(false, || panic!("hash read before mount"));
    assert_eq!(selection, DaySelection::Pending);
}

#[test]
fn select_day_parses_hash_after_mount() {
    assert_eq!(mounted_on("#daily/2024-03-07"), DaySelection::Hash(Ok(day(2024, 3, 7))));
    assert!(matches!(mounted_on(""), DaySelection::Hash(Err(DailyHashError::NotDaily(_)))));
}

#[test]
fn unmounted_page_is_not_a_render_failure() {
    // Server render and first hydration pass: empty hash, nothing mounted yet.
    let mut state = BoundaryState::Normal;
    let outcome = state.attempt(|| entry_day(select_day(false, String::new)));
    assert_eq!(outcome, RenderOutcome::Rendered(None));
    assert_eq!(state, BoundaryState::Normal);
    assert_eq!(page_status(&DaySelection::Pending, day(2024, 3, 7)), "loading");
    assert_eq!(shown_day(&DaySelection::Pending), None);
}

#[test]
fn missing_day_after_mount_lands_in_boundary_fallback() {
    let mut state = BoundaryState::Normal;
    match state.attempt(|| entry_day(mounted_on("#nowhere"))) {
        RenderOutcome::Captured(err) => assert_eq!(fallback_message(&err), "No journal day selected"),
        other => panic!("expected captured failure, got {other:?}"),
    }
    state.reset();
    assert_eq!(
        state.attempt(|| entry_day(mounted_on("#daily/2024-03-07"))),
        RenderOutcome::Rendered(Some(day(2024, 3, 7)))
    );
}

#[test]
fn invalid_date_failure_keeps_parse_cause_as_context() {
    let err = entry_day(mounted_on("#daily/2024-02-30")).unwrap_err();
    assert_eq!(err.message(), "Not a valid journal date: 2024-02-30");
    assert!(err.context().is_some());
}

#[test]
fn page_status_follows_selection() {
    let today = day(2024, 3, 7);
    assert_eq!(page_status(&mounted_on("#daily/2024-03-07"), today), "draft");
    assert_eq!(page_status(&mounted_on("#bogus"), today), "unknown");
    assert_eq!(shown_day(&mounted_on("#daily/2024-03-06")), Some(day(2024, 3, 6)));
}

#[test]
fn day_heading_is_long_form() {
    assert_eq!(day_heading(day(2024, 3, 7)), "Thursday, March 7, 2024");
}

#[test]
fn entry_status_relative_to_today() {
    let today = day(2024, 3, 7);
    assert_eq!(entry_status(day(2024, 3, 6), today), "published");
    assert_eq!(entry_status(today, today), "draft");
    assert_eq!(entry_status(day(2024, 3, 8), today), "pending");
}

#[test]
fn entry_statuses_have_known_tones() {
    let today = day(2024, 3, 7);
    for date in [day(2024, 3, 6), today, day(2024, 3, 8)] {
        assert_ne!(tone_for(entry_status(date, today)), StatusTone::Neutral);
    }
}
