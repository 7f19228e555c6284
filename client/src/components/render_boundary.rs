//! Recoverable render boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a fallible render closure so one broken subtree cannot take down the
//! rest of the page. On failure the boundary shows a fixed fallback panel and
//! waits for the user to press "Try again"; it never retries on its own.
//!
//! Only `Err` values returned while building the wrapped subtree are caught.
//! Failures in event handlers, spawned tasks, or the fallback panel itself
//! propagate as usual.

#[cfg(test)]
#[path = "render_boundary_test.rs"]
mod render_boundary_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::state::boundary::{BoundaryState, RenderError, RenderOutcome, fallback_message};

pub const FALLBACK_HEADING: &str = "Something went wrong";
pub const RETRY_LABEL: &str = "Try again";

/// Render `render` transparently; swap in a fallback panel when it fails.
///
/// The boundary's own reactive closure tracks the boundary state and whatever
/// signals `render` reads. While failed, input changes re-run the closure but
/// keep showing the fallback until the retry button resets it.
#[component]
pub fn RenderBoundary<F, V>(render: F) -> impl IntoView
where
    F: Fn() -> Result<V, RenderError> + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let state = RwSignal::new(BoundaryState::Normal);
    let on_retry = Callback::new(move |()| state.update(BoundaryState::reset));

    move || render_with(state, on_retry, &render)
}

/// One pass of the boundary's reactive closure.
fn render_with<F, V>(state: RwSignal<BoundaryState>, on_retry: Callback<()>, render: &F) -> AnyView
where
    F: Fn() -> Result<V, RenderError>,
    V: IntoView + 'static,
{
    let mut current = state.get();
    match current.attempt(render) {
        RenderOutcome::Rendered(view) => view.into_any(),
        RenderOutcome::Captured(err) => {
            leptos::logging::error!("{}", failure_log_line(&err));
            // Untracked so recording the failure does not re-run this closure.
            state.update_untracked(|s| *s = current);
            view! { <BoundaryFallback error=err on_retry/> }.into_any()
        }
        RenderOutcome::Failed(err) => view! { <BoundaryFallback error=err on_retry/> }.into_any(),
    }
}

/// Fallback panel. Rendered by the boundary itself, never by the wrapped closure.
#[component]
fn BoundaryFallback(error: RenderError, on_retry: Callback<()>) -> impl IntoView {
    let message = fallback_message(&error).to_owned();

    view! {
        <div class="render-boundary" role="alert">
            <h2 class="render-boundary__heading">{FALLBACK_HEADING}</h2>
            <p class="render-boundary__message">{message}</p>
            <button class="btn render-boundary__retry" on:click=move |_| on_retry.run(())>
                {RETRY_LABEL}
            </button>
        </div>
    }
}

fn failure_log_line(err: &RenderError) -> String {
    match err.context() {
        Some(context) => format!("render boundary caught failure: {err} ({context})"),
        None => format!("render boundary caught failure: {err}"),
    }
}
