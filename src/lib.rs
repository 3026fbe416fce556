#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Behavior layer for the landing page: particle background, testimonial
//! carousel, scroll reveals and the purchase modal flow.
//!
//! The browser-facing code only compiles for wasm32. The modules below it
//! hold the page's data and decision logic and build on any target.

pub mod config;
pub mod error;
pub mod markup;
pub mod reveal;
pub mod scene;
pub mod testimonials;
pub mod ui;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod content;
    mod controls;
    mod dom;
    mod landing;
    mod render;
    mod reveal;

    pub use landing::{mount, Landing};

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{mount, Landing};

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
