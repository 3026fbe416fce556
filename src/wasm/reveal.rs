use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use super::dom;
use crate::config::RevealConfig;
use crate::error::Result;
use crate::markup;
use crate::reveal::{self, Latch, Tween};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Scroll-triggered entrance animations. Observers are disconnected on drop.
#[derive(Default)]
pub struct Reveals {
    observers: Vec<(IntersectionObserver, ObserverCallback)>,
}

impl Reveals {
    pub fn install(window: &Window, document: &Document, config: &RevealConfig) -> Result<Self> {
        let mut reveals = Reveals::default();

        match document.query_selector(markup::HERO_CONTENT)? {
            Some(hero) => match hero.dyn_into::<HtmlElement>() {
                Ok(hero) => play_now(&hero, &config.hero),
                Err(_) => log::warn!("{} is not an HTML element", markup::HERO_CONTENT),
            },
            None => log::debug!("no {} on the page", markup::HERO_CONTENT),
        }

        if !observer_supported(window) {
            log::info!("IntersectionObserver unavailable; leaving content visible");
            return Ok(reveals);
        }

        let titles = dom::query_all(document, markup::SECTION_TITLE)?;
        if !titles.is_empty() {
            reveals.watch_each(window, &titles, config.section_title.start, &config.section_title.tween)?;
        }

        let cards = dom::query_all(document, markup::PACKAGE_CARD)?;
        match document.query_selector(markup::PACKAGES_GRID)? {
            Some(grid) if !cards.is_empty() => {
                let packages = &config.packages;
                let tweens = reveal::stagger_delays(cards.len(), packages.stagger)
                    .map(|delay| packages.tween.delayed(delay))
                    .collect();
                reveals.watch_group(window, &grid, cards, tweens, packages.start)?;
            }
            _ => log::debug!("no package cards to stagger"),
        }

        log::debug!("scroll reveals installed on {} triggers", reveals.observers.len());
        Ok(reveals)
    }

    /// One trigger per element; each element animates itself once.
    fn watch_each(
        &mut self,
        window: &Window,
        elements: &[HtmlElement],
        start: f64,
        tween: &Tween,
    ) -> Result<()> {
        for element in elements {
            dom::set_styles(element, &tween.hidden_style());
        }

        let win = window.clone();
        let tween = tween.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !reached(&entry, &win, start) {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    if let Ok(element) = target.dyn_into::<HtmlElement>() {
                        dom::set_styles(&element, &tween.shown_style());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let observer = new_observer(&callback, start)?;
        for element in elements {
            observer.observe(element);
        }
        self.observers.push((observer, callback));
        Ok(())
    }

    /// A single trigger on `trigger` that plays every item with its own tween.
    fn watch_group(
        &mut self,
        window: &Window,
        trigger: &web_sys::Element,
        items: Vec<HtmlElement>,
        tweens: Vec<Tween>,
        start: f64,
    ) -> Result<()> {
        for (item, tween) in items.iter().zip(&tweens) {
            dom::set_styles(item, &tween.hidden_style());
        }

        let win = window.clone();
        let mut latch = Latch::default();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if latch.observe(reached(&entry, &win, start)) {
                        observer.disconnect();
                        for (item, tween) in items.iter().zip(&tweens) {
                            dom::set_styles(item, &tween.shown_style());
                        }
                        break;
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let observer = new_observer(&callback, start)?;
        observer.observe(trigger);
        self.observers.push((observer, callback));
        Ok(())
    }
}

impl Drop for Reveals {
    fn drop(&mut self) {
        for (observer, _) in &self.observers {
            observer.disconnect();
        }
    }
}

fn new_observer(callback: &ObserverCallback, start: f64) -> Result<IntersectionObserver> {
    let options = IntersectionObserverInit::new();
    options.set_root_margin(&reveal::root_margin(start));
    options.set_threshold(&JsValue::from_f64(0.0));
    Ok(IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )?)
}

/// Judge an entry against the observer's own root bounds, which already
/// carry the root margin. `innerHeight` is only a fallback.
fn reached(entry: &IntersectionObserverEntry, window: &Window, start: f64) -> bool {
    let line = entry
        .root_bounds()
        .map(|bounds| bounds.bottom())
        .unwrap_or_else(|| reveal::start_line(dom::viewport(window).height, start));
    reveal::start_reached(entry.is_intersecting(), entry.bounding_client_rect().top(), line)
}

fn observer_supported(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Hide, flush styles, then transition in.
fn play_now(element: &HtmlElement, tween: &Tween) {
    dom::set_styles(element, &tween.hidden_style());
    // reading layout commits the hidden state so the transition has a start
    let _ = element.offset_height();
    dom::set_styles(element, &tween.shown_style());
}
