//! Dealer365 application shell and screens.

pub mod chrome;
pub mod data;
pub mod screens;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use dealer_domain::prelude::*;

/// Whether the assistant panel is open. Context newtype so the header
/// toggle and the panel share one signal.
#[derive(Clone, Copy)]
pub struct AssistantOpen(pub RwSignal<bool>);

/// The chrome search text, shared between the search bar and the model
/// selection screen.
#[derive(Clone, Copy)]
pub struct SearchText(pub RwSignal<String>);

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session-wide state: survives navigation between screens, dropped
    // on reload. There is no persistence.
    provide_context(RwSignal::new(data::seed_board()));
    provide_context(RwSignal::new(ComparisonSelection::new()));
    provide_context(RwSignal::new(data::seed_notifications()));
    provide_context(AssistantOpen(RwSignal::new(false)));
    provide_context(SearchText(RwSignal::new(String::new())));

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/styles.css"/>
        <Meta name="description" content="Dealer365 - automotive dealership platform"/>
        <Title text="Dealer365"/>

        <Router>
            <chrome::Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=screens::DashboardScreen/>
                    <Route path=path!("/configurator") view=screens::ConfiguratorScreen/>
                    <Route path=path!("/pipeline") view=screens::PipelineScreen/>
                    <Route path=path!("/models") view=screens::ModelsScreen/>
                    <Route path=path!("/compare") view=screens::CompareScreen/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <chrome::AssistantPanel/>
        </Router>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to the dashboard"</a>
        </div>
    }
}
