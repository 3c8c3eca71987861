use leptos::prelude::*;

use posts_core::{PostBrowser, PostId};

#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) browser: RwSignal<PostBrowser>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            browser: RwSignal::new(PostBrowser::new()),
        }
    }

    pub(crate) fn toggle_like(&self, id: PostId) {
        self.browser.update(|browser| {
            browser.toggle_like(id);
        });
    }

    pub(crate) fn next_page(&self) {
        self.browser.update(|browser| {
            browser.next_page();
        });
    }

    pub(crate) fn previous_page(&self) {
        self.browser.update(|browser| {
            browser.previous_page();
        });
    }

    pub(crate) fn is_liked(&self, id: PostId) -> bool {
        self.browser.with(|browser| browser.is_liked(id))
    }
}
