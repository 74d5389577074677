pub mod common;
pub mod frontend;
pub mod models;

/// WASM hydration entry point, paired with the page from [`frontend::shell`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(frontend::HomepageFeatures);
}
