use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, Window};

use super::content;
use super::controls::{self, Controls};
use super::dom;
use super::render::Background;
use super::reveal::Reveals;
use crate::config::LandingConfig;
use crate::error::{Error, Result};
use crate::markup;
use crate::testimonials::{self, Markup, TESTIMONIALS};
use crate::ui::Selection;

/// Mounted landing page. Everything it wires up lives as long as this
/// handle: dropping (or `free()`-ing it from JS) stops the background and
/// removes every listener.
#[wasm_bindgen]
pub struct Landing {
    document: Document,
    background: Option<Background>,
    // held for their Drop impls
    _reveals: Reveals,
    controls: Controls,
}

impl Landing {
    pub fn mount_in(window: &Window, document: &Document) -> Result<Self> {
        let config = read_config(document)?;
        log::set_max_level(config.level()?.to_level_filter());

        let background = match start_background(window, document, &config) {
            Ok(background) => Some(background),
            Err(e) => {
                log::warn!("particle background disabled: {e}");
                None
            }
        };

        content::render(document, &TESTIMONIALS, Markup::Trusted)?;
        let reveals = Reveals::install(window, document, &config.reveal)?;
        let controls = Controls::bind(window, document, &config.ui)?;

        log::info!("landing page mounted");
        Ok(Landing {
            document: document.clone(),
            background,
            _reveals: reveals,
            controls,
        })
    }

    /// Drawing-buffer size of the background canvas, if it is running.
    pub fn background_size(&self) -> Option<(u32, u32)> {
        self.background.as_ref().map(Background::buffer_size)
    }
}

#[wasm_bindgen]
impl Landing {
    /// Fill in and show the purchase modal. `price` may be a number or a string.
    #[wasm_bindgen(js_name = openModal)]
    pub fn open_modal(&self, package: &str, price: JsValue) {
        let selection = Selection::new(package, controls::price_from_js(&price));
        self.controls.open_modal(&selection);
    }

    #[wasm_bindgen(js_name = closeConfirmation)]
    pub fn close_confirmation(&self) {
        self.controls.close_confirmation();
    }

    /// Replace the carousel with records from a JSON array. Fields are
    /// HTML-escaped.
    #[wasm_bindgen(js_name = setTestimonials)]
    pub fn set_testimonials(&self, json: &str) -> std::result::Result<(), JsValue> {
        let items = testimonials::parse(json)?;
        content::render(&self.document, &items, Markup::Escaped)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = stopBackground)]
    pub fn stop_background(&mut self) {
        if let Some(background) = self.background.as_mut() {
            background.stop();
        }
    }

    #[wasm_bindgen(js_name = isBackgroundRunning)]
    pub fn is_background_running(&self) -> bool {
        self.background.as_ref().is_some_and(Background::is_running)
    }
}

fn read_config(document: &Document) -> Result<LandingConfig> {
    let overrides = document
        .body()
        .and_then(|body| body.get_attribute(markup::CONFIG_ATTR));
    match overrides {
        Some(json) => LandingConfig::from_json(&json),
        None => Ok(LandingConfig::default()),
    }
}

fn start_background(window: &Window, document: &Document, config: &LandingConfig) -> Result<Background> {
    let canvas: HtmlCanvasElement = dom::by_id(document, markup::BG_CANVAS)?;
    Background::start(window, canvas, &config.background)
}

/// Mount the page into the current document.
#[wasm_bindgen]
pub fn mount() -> std::result::Result<Landing, JsValue> {
    let window = web_sys::window().ok_or(Error::Js("no window".into()))?;
    let document = window.document().ok_or(Error::Js("no document".into()))?;
    Ok(Landing::mount_in(&window, &document)?)
}
