use leptos::prelude::*;
use posts_core::{Post, like_label};

use crate::state::AppState;

const LIKE_STYLE: &str = "padding: 0.5rem 1rem; border-radius: 0.375rem; color: white; background: #3b82f6;";
const UNLIKE_STYLE: &str = "padding: 0.5rem 1rem; border-radius: 0.375rem; color: white; background: #ef4444;";

fn like_button_style(liked: bool) -> &'static str {
    if liked { UNLIKE_STYLE } else { LIKE_STYLE }
}

#[component]
pub(crate) fn PostCard(state: AppState, post: Post) -> impl IntoView {
    let post_id = post.id;
    let is_liked = move || state.is_liked(post_id);

    view! {
        <li style="border: 1px solid #d1d5db; border-radius: 0.5rem; padding: 1.5rem; margin-bottom: 1.5rem;">
            <h3>{post.title}</h3>
            <p>{post.body}</p>
            <button
                style=move || like_button_style(is_liked())
                on:click=move |_| state.toggle_like(post_id)
            >
                {move || like_label(is_liked())}
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_button_style_differs_by_state() {
        assert_ne!(like_button_style(true), like_button_style(false));
        assert_eq!(like_button_style(false), LIKE_STYLE);
    }
}
