//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{date_redirect::DateRedirect, journal::JournalPage};
use crate::state::persona::PersonaState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the persona context shared by journal pages and sets up
/// client-side routing. `/` bounces to today's journal day.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let personas = RwSignal::new(PersonaState::default());
    provide_context(personas);

    view! {
        <Stylesheet id="leptos" href="/pkg/daybook.css"/>
        <Title text="Daybook"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DateRedirect/>
                <Route path=StaticSegment("journal") view=JournalPage/>
            </Routes>
        </Router>
    }
}
