//! Top bar: brand, navigation, notifications, assistant toggle.

use crate::chrome::NotificationsMenu;
use crate::AssistantOpen;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let assistant = expect_context::<AssistantOpen>().0;

    view! {
        <header class="topbar">
            <a class="brand" href="/">"Dealer365"</a>
            <nav>
                <a href="/">"Dashboard"</a>
                <a href="/configurator">"Configurator"</a>
                <a href="/pipeline">"Pipeline"</a>
                <a href="/models">"Models"</a>
                <a href="/compare">"Compare"</a>
            </nav>
            <div class="topbar-actions">
                <NotificationsMenu/>
                <button class="btn" on:click=move |_| assistant.update(|open| *open = !*open)>
                    "Assistant"
                </button>
            </div>
        </header>
    }
}
