//! # client
//!
//! Leptos + WASM frontend for the FinPredict loan-advisory application.
//!
//! This crate contains the three route-level pages (home, interest-rate
//! comparison, loan-eligibility check), shared components, reactive page
//! state, REST helpers, and the money/quote utility modules. The same crate
//! compiles twice: as an rlib linked into the server for SSR, and as a
//! cdylib for browser hydration.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
