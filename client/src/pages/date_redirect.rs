//! Landing route that forwards to today's journal page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/` has no content of its own. After mount it replaces the current history
//! entry with `/journal#daily/<today>` so the back button skips the bounce.
//! Effects do not run during SSR, so the redirect always happens client-side.

#[cfg(test)]
#[path = "date_redirect_test.rs"]
mod date_redirect_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::journal_date::journal_target_at;

/// Renders nothing; navigates once per mount.
#[component]
pub fn DateRedirect() -> impl IntoView {
    let navigate = use_navigate();

    // Untracked so the navigation's own location updates cannot re-run the effect.
    Effect::new(move || untrack(|| issue_journal_redirect(&navigate, Utc::now())));
}

/// Issue exactly one replace-navigation to the journal day containing `now`.
pub fn issue_journal_redirect<F>(navigate: &F, now: DateTime<Utc>)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(&journal_target_at(now), replace_options());
}

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
