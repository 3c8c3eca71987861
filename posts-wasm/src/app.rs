use leptos::prelude::*;
use leptos::task::spawn_local;
use posts_core::{LoadStatus, PostBrowser, PostSource, Settings, status_message};
use tracing::info;

use crate::api::GlooPostSource;
use crate::components::pager::Pager;
use crate::components::post_card::PostCard;
use crate::state::AppState;

fn load_posts(state: AppState, source_url: String) {
    info!(url = %source_url, "loading posts");
    state.browser.update(PostBrowser::begin_load);

    spawn_local(async move {
        let source = GlooPostSource::new(source_url);
        let result = source.fetch_posts().await;
        // если вью уже размонтировано, сигнал disposed и результат отбрасывается
        let _ = state
            .browser
            .try_update(|browser| browser.apply_fetch(result));
    });
}

#[component]
pub fn App(settings: Settings) -> impl IntoView {
    let state = AppState::new();

    load_posts(state, settings.source_url);

    let likes_text = move || state.browser.with(PostBrowser::likes_label);
    let status_text = move || {
        state
            .browser
            .with(|browser| status_message(browser.status()))
            .unwrap_or_default()
    };
    let is_failed = move || {
        state
            .browser
            .with(|browser| matches!(browser.status(), LoadStatus::Failed(_)))
    };

    view! {
        <main class="page" style="display: flex; justify-content: center; padding: 1rem;">
            <section class="container" style="width: 100%; max-width: 48rem;">
                <h1 style="text-align: center;">"Posts"</h1>

                <p style="text-align: center; font-weight: 600;">{likes_text}</p>

                <Show when=move || !status_text().is_empty()>
                    <div
                        class=move || if is_failed() { "error-banner" } else { "loading" }
                        style="margin-bottom: 1rem;"
                    >
                        {status_text}
                    </div>
                </Show>

                <ul style="list-style: none; padding: 0;">
                    <For
                        each=move || state.browser.with(|browser| browser.page_window().to_vec())
                        key=|post| post.id
                        children=move |post| view! { <PostCard state=state post=post /> }
                    />
                </ul>

                <Pager state=state />
            </section>
        </main>
    }
}
