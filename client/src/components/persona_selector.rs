//! Grid of persona buttons for choosing a writing companion.
//!
//! Controlled component: the caller owns the option list and the selected key
//! and decides what to do with a click. Nothing here validates `selected`.

#[cfg(test)]
#[path = "persona_selector_test.rs"]
mod persona_selector_test;

use leptos::prelude::*;

use crate::state::persona::PersonaOption;

/// One button per option, in order. Clicking runs `on_select` with that option's key.
#[component]
pub fn PersonaSelector(
    #[prop(into)] options: Signal<Vec<PersonaOption>>,
    #[prop(into)] selected: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="persona-selector" role="group">
            {move || {
                let current = selected.get();
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let active = is_selected(&option, current.as_deref());
                        let key = option.key.clone();
                        view! {
                            <button
                                type="button"
                                class=option_class(active)
                                aria-pressed=if active { "true" } else { "false" }
                                on:click=move |_| dispatch_select(|k| on_select.run(k), &key)
                            >
                                <span class="persona-option__emoji" aria-hidden="true">{option.emoji}</span>
                                <span class="persona-option__label">{option.label}</span>
                                <span class="persona-option__description">{option.description}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

fn is_selected(option: &PersonaOption, selected: Option<&str>) -> bool {
    selected == Some(option.key.as_str())
}

fn option_class(selected: bool) -> &'static str {
    if selected { "persona-option persona-option--selected" } else { "persona-option" }
}

fn dispatch_select(on_select: impl Fn(String), key: &str) {
    on_select(key.to_owned());
}
