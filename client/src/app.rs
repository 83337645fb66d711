//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Meta, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{chat::ChatState, contact::ContactState, nav::NavState, ui::UiState};
use crate::util::dark_mode;

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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let ui = RwSignal::new(UiState::default());
    let nav = RwSignal::new(NavState::default());
    let chat = RwSignal::new(ChatState::default());
    let contact = RwSignal::new(ContactState::default());

    provide_context(ui);
    provide_context(nav);
    provide_context(chat);
    provide_context(contact);

    // Apply the stored theme once hydrated; SSR always renders light.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Sachit Kaistha | DevOps Engineer"/>
        <Meta name="description" content="Portfolio of Sachit Kaistha, DevOps engineer and PHP developer."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
