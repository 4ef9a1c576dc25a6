//! Model search bar. Dispatches a substring filter over the model list.

use crate::SearchText;
use leptos::prelude::*;

#[component]
pub fn SearchBar() -> impl IntoView {
    let search = expect_context::<SearchText>().0;

    view! {
        <div class="searchbar">
            <input
                type="search"
                placeholder="Search models, brands..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show when=move || search.with(|s| !s.is_empty())>
                <button class="link" on:click=move |_| search.set(String::new())>
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
