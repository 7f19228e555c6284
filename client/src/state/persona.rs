//! Writing-companion personas offered on the journal page.

#[cfg(test)]
#[path = "persona_test.rs"]
mod persona_test;

use serde::{Deserialize, Serialize};

/// One selectable persona. Supplied by the data layer; components only read it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaOption {
    /// Stable identifier passed back through selection callbacks.
    pub key: String,
    pub label: String,
    pub description: String,
    pub emoji: String,
}

impl PersonaOption {
    pub fn new(key: &str, label: &str, description: &str, emoji: &str) -> Self {
        Self {
            key: key.to_owned(),
            label: label.to_owned(),
            description: description.to_owned(),
            emoji: emoji.to_owned(),
        }
    }
}

/// Persona options plus the key the user has chosen, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonaState {
    pub options: Vec<PersonaOption>,
    pub selected: Option<String>,
}

impl Default for PersonaState {
    fn default() -> Self {
        Self { options: default_personas(), selected: None }
    }
}

impl PersonaState {
    /// The selected option, when `selected` names one of `options`.
    pub fn selected_option(&self) -> Option<&PersonaOption> {
        let key = self.selected.as_deref()?;
        self.options.iter().find(|o| o.key == key)
    }
}

/// Built-in companions shown before the data layer supplies its own list.
pub fn default_personas() -> Vec<PersonaOption> {
    vec![
        PersonaOption::new("coach", "Coach", "Pushes you toward goals and follow-through.", "🏋️"),
        PersonaOption::new("friend", "Friend", "Listens first and keeps things warm.", "🤝"),
        PersonaOption::new("therapist", "Reflector", "Asks gentle questions about how you feel.", "🪞"),
        PersonaOption::new("stoic", "Stoic", "Separates what you control from what you don't.", "🏛️"),
    ]
}
