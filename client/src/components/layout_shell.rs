//! Page wrapper that stretches its content to the viewport height.

#[cfg(test)]
#[path = "layout_shell_test.rs"]
mod layout_shell_test;

use leptos::prelude::*;

/// Cancels the root container's padding and pins the region to the viewport.
const SHELL_STYLE: &str = "margin: -1rem -1rem 0; min-height: 100vh; height: 100vh";

#[component]
pub fn LayoutShell(children: Children) -> impl IntoView {
    view! {
        <div class="layout-shell" style=SHELL_STYLE>
            {children()}
        </div>
    }
}
