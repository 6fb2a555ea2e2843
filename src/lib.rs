//! Portfolio site behavior
//!
//! Interactive behavior for a static personal-portfolio page, compiled to
//! WebAssembly: mobile navigation, smooth anchor scrolling, video previews,
//! a simulated contact form with toast notification, and scroll-reveal
//! animations.

pub mod core;
#[cfg(feature = "csr")]
pub mod ui;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = ui::start() {
        leptos::logging::error!("Portfolio setup failed: {}", e);
    }
}
