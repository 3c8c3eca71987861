use leptos::prelude::*;
use posts_core::PostBrowser;

use crate::state::AppState;

#[component]
pub(crate) fn Pager(state: AppState) -> impl IntoView {
    view! {
        <div style="display: flex; justify-content: space-between; align-items: center; margin-top: 1.5rem;">
            <button
                on:click=move |_| state.previous_page()
                disabled=move || !state.browser.with(PostBrowser::has_previous)
            >
                "Previous"
            </button>

            <span>{move || state.browser.with(PostBrowser::page_label)}</span>

            <button
                on:click=move |_| state.next_page()
                disabled=move || !state.browser.with(PostBrowser::has_next)
            >
                "Next"
            </button>
        </div>
    }
}
