//! Daily journal page addressed by `/journal#daily/<YYYY-MM-DD>`.
//!
//! ARCHITECTURE
//! ============
//! The day comes from the location hash. The entry itself renders inside a
//! `RenderBoundary`: a missing or malformed day is a render failure, so the
//! page chrome (companion picker, footer) keeps working while the entry area
//! shows the fallback.
//!
//! Browsers never send the hash to the server, so the hash is only read after
//! mount. SSR and the first hydration pass both render the pending
//! placeholder, which keeps their markup identical.

#[cfg(test)]
#[path = "journal_test.rs"]
mod journal_test;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::hooks::use_location;

use crate::components::layout_shell::LayoutShell;
use crate::components::persona_selector::PersonaSelector;
use crate::components::render_boundary::RenderBoundary;
use crate::components::site_footer::SiteFooter;
use crate::components::status_pill::StatusPill;
use crate::state::boundary::RenderError;
use crate::state::persona::PersonaState;
use crate::util::journal_date::{DailyHashError, adjacent_days, journal_target, parse_daily_hash, today_utc};

/// Which day the page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
enum DaySelection {
    /// Not mounted yet; the hash is unavailable.
    Pending,
    Hash(Result<NaiveDate, DailyHashError>),
}

#[component]
pub fn JournalPage() -> impl IntoView {
    let location = use_location();
    let personas = expect_context::<RwSignal<PersonaState>>();

    // Effects never run during SSR, so this flips only in the browser.
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    let selection = Memo::new(move |_| select_day(mounted.get(), || location.hash.get()));
    let day = Memo::new(move |_| shown_day(&selection.get()));

    let status = Signal::derive(move || page_status(&selection.get(), today_utc()).to_owned());
    let options = Signal::derive(move || personas.get().options);
    let selected = Signal::derive(move || personas.get().selected);
    let on_select = Callback::new(move |key: String| personas.update(|p| p.selected = Some(key)));

    let companion_prompt = move || {
        personas
            .get()
            .selected_option()
            .map(|p| format!("{} {}", p.emoji, p.description))
            .unwrap_or_else(|| "Pick a companion to shape today's prompts.".to_owned())
    };

    view! {
        <LayoutShell>
            <main class="journal-page">
                <header class="journal-page__header">
                    {move || {
                        day.get()
                            .map(|d| {
                                let (prev, next) = adjacent_days(d);
                                view! {
                                    <nav class="journal-page__nav">
                                        <a class="journal-page__prev" href=journal_target(prev)>"← Previous"</a>
                                        <a class="journal-page__next" href=journal_target(next)>"Next →"</a>
                                    </nav>
                                }
                            })
                    }}
                    <StatusPill status/>
                </header>

                <RenderBoundary render=move || render_entry(selection.get())/>

                <section class="journal-page__companion">
                    <h2>"Writing companion"</h2>
                    <p class="journal-page__prompt">{companion_prompt}</p>
                    <PersonaSelector options selected on_select/>
                </section>
            </main>
            <SiteFooter/>
        </LayoutShell>
    }
}

fn select_day(mounted: bool, read_hash: impl FnOnce() -> String) -> DaySelection {
    if mounted { DaySelection::Hash(parse_daily_hash(&read_hash())) } else { DaySelection::Pending }
}

fn shown_day(selection: &DaySelection) -> Option<NaiveDate> {
    match selection {
        DaySelection::Hash(Ok(date)) => Some(*date),
        DaySelection::Pending | DaySelection::Hash(Err(_)) => None,
    }
}

fn page_status(selection: &DaySelection, today: NaiveDate) -> &'static str {
    match selection {
        DaySelection::Pending => "loading",
        DaySelection::Hash(Ok(date)) => entry_status(*date, today),
        DaySelection::Hash(Err(_)) => "unknown",
    }
}

/// The day to render, `None` while pending. A bad hash is a render failure.
fn entry_day(selection: DaySelection) -> Result<Option<NaiveDate>, RenderError> {
    match selection {
        DaySelection::Pending => Ok(None),
        DaySelection::Hash(Ok(date)) => Ok(Some(date)),
        DaySelection::Hash(Err(err)) => Err(RenderError::from_error(&err)),
    }
}

fn render_entry(selection: DaySelection) -> Result<AnyView, RenderError> {
    let Some(date) = entry_day(selection)? else {
        return Ok(view! { <article class="journal-entry journal-entry--pending" aria-busy="true"></article> }
            .into_any());
    };
    Ok(view! {
        <article class="journal-entry">
            <h1 class="journal-entry__date">{day_heading(date)}</h1>
            <textarea class="journal-entry__body" placeholder="What's on your mind today?"></textarea>
        </article>
    }
    .into_any())
}

fn day_heading(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Entry status relative to today: past days are published, today is a draft,
/// future days are pending.
fn entry_status(date: NaiveDate, today: NaiveDate) -> &'static str {
    match date.cmp(&today) {
        std::cmp::Ordering::Less => "published",
        std::cmp::Ordering::Equal => "draft",
        std::cmp::Ordering::Greater => "pending",
    }
}
