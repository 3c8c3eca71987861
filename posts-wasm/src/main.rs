#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod state;

#[cfg(target_arch = "wasm32")]
fn main() {
    use leptos::prelude::*;
    use posts_core::Settings;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let settings = match Settings::from_build_env() {
        Ok(settings) => settings,
        Err(err) => {
            web_sys::console::error_1(&format!("invalid build settings: {err:#}").into());
            Settings::default()
        }
    };

    if let Err(err) = logging::init_logging(&settings.log_level) {
        web_sys::console::error_1(&format!("{err:#}").into());
    }

    leptos::mount::mount_to_body(move || view! { <App settings=settings /> });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Пустой main нужен только чтобы `cargo build --workspace` на хосте проходил.
}
