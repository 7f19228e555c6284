//! Small colored tag describing an entity's status (subscription, entry, ...).

#[cfg(test)]
#[path = "status_pill_test.rs"]
mod status_pill_test;

use leptos::prelude::*;

/// Visual tone of a status tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Info,
    #[default]
    Neutral,
}

impl StatusTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "status-pill status-pill--success",
            Self::Warning => "status-pill status-pill--warning",
            Self::Danger => "status-pill status-pill--danger",
            Self::Info => "status-pill status-pill--info",
            Self::Neutral => "status-pill status-pill--neutral",
        }
    }
}

/// Known status values. Matching is exact and case-sensitive.
const STATUS_TONES: &[(&str, StatusTone)] = &[
    ("active", StatusTone::Success),
    ("paid", StatusTone::Success),
    ("published", StatusTone::Success),
    ("trialing", StatusTone::Info),
    ("draft", StatusTone::Info),
    ("pending", StatusTone::Warning),
    ("past_due", StatusTone::Warning),
    ("incomplete", StatusTone::Warning),
    ("suspended", StatusTone::Danger),
    ("canceled", StatusTone::Danger),
    ("unpaid", StatusTone::Danger),
    ("expired", StatusTone::Danger),
];

/// Tone for a status value; anything not in the table is `Neutral`.
pub fn tone_for(status: &str) -> StatusTone {
    STATUS_TONES
        .iter()
        .find(|(key, _)| *key == status)
        .map_or(StatusTone::Neutral, |(_, tone)| *tone)
}

/// Human label: separators become spaces and the first letter is capitalized.
pub fn status_label(status: &str) -> String {
    let words = status.trim().replace(['_', '-'], " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Unknown".to_owned(),
    }
}

#[component]
pub fn StatusPill(#[prop(into)] status: Signal<String>) -> impl IntoView {
    let class = move || status.with(|s| tone_for(s).class());
    let label = move || status.with(|s| status_label(s));

    view! {
        <span class=class>{label}</span>
    }
}
