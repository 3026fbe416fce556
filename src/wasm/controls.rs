use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, Window};

use super::dom;
use crate::config::UiConfig;
use crate::error::Result;
use crate::markup::{self, ACTIVE_CLASS, VISIBLE_CLASS};
use crate::ui::{self, ModalAction, Page, Price, Selection};

/// The purchase and confirmation modals together with the form fields they
/// fill in.
pub struct Modals {
    payment: HtmlElement,
    thank_you: HtmlElement,
    title: HtmlElement,
    package_field: HtmlInputElement,
    price_field: HtmlInputElement,
    form: HtmlFormElement,
}

impl Modals {
    fn from_document(document: &Document) -> Result<Self> {
        Ok(Self {
            payment: dom::by_id(document, markup::PAYMENT_MODAL)?,
            thank_you: dom::by_id(document, markup::THANK_YOU_MODAL)?,
            title: dom::by_id(document, markup::MODAL_TITLE)?,
            package_field: dom::by_id(document, markup::SELECTED_PACKAGE)?,
            price_field: dom::by_id(document, markup::SELECTED_PRICE)?,
            form: dom::by_id(document, markup::PAYMENT_FORM)?,
        })
    }

    pub fn open(&self, selection: &Selection) {
        self.title.set_inner_text(&selection.title());
        self.package_field.set_value(&selection.package);
        self.price_field.set_value(&selection.price.to_string());
        self.apply(ModalAction::Open);
        log::info!("purchase modal opened for {}", selection.package);
    }

    pub fn apply(&self, action: ModalAction) {
        let effect = action.effect();
        if let Some(visibility) = effect.purchase {
            dom::set_display(&self.payment, visibility);
        }
        if let Some(visibility) = effect.confirmation {
            dom::set_display(&self.thank_you, visibility);
        }
        if effect.reset_form {
            self.form.reset();
        }
    }
}

/// Click, scroll and submit bindings. Listeners are removed on drop.
pub struct Controls {
    modals: Rc<Modals>,
    listeners: Vec<EventListener>,
}

impl Controls {
    pub fn bind(window: &Window, document: &Document, config: &UiConfig) -> Result<Self> {
        let mut controls = Controls {
            modals: Rc::new(Modals::from_document(document)?),
            listeners: Vec::new(),
        };
        controls.bind_menu(document)?;
        controls.bind_scroll_top(window, document, config)?;
        controls.bind_carousel(document, config)?;
        controls.bind_modals(window, document)?;
        log::debug!("{} UI listeners bound", controls.listeners.len());
        Ok(controls)
    }

    pub fn open_modal(&self, selection: &Selection) {
        self.modals.open(selection);
    }

    pub fn close_confirmation(&self) {
        self.modals.apply(ModalAction::DismissConfirmation);
    }

    fn bind_menu(&mut self, document: &Document) -> Result<()> {
        let button: Element = dom::by_id(document, markup::MOBILE_MENU)?;
        let menu: Element = dom::query(document, markup::NAV_MENU)?;

        {
            let (btn, menu) = (button.clone(), menu.clone());
            self.listeners.push(EventListener::new(&button, "click", move |_| {
                dom::toggle_class(&menu, ACTIVE_CLASS);
                dom::toggle_class(&btn, ACTIVE_CLASS);
            }));
        }

        for link in dom::query_all(document, markup::NAV_LINK)? {
            let (btn, menu) = (button.clone(), menu.clone());
            self.listeners.push(EventListener::new(&link, "click", move |_| {
                dom::set_class(&menu, ACTIVE_CLASS, false);
                dom::set_class(&btn, ACTIVE_CLASS, false);
            }));
        }
        Ok(())
    }

    fn bind_scroll_top(&mut self, window: &Window, document: &Document, config: &UiConfig) -> Result<()> {
        let button: Element = dom::by_id(document, markup::SCROLL_TOP)?;
        let threshold = config.scroll_top_threshold;

        let update = {
            let (win, btn) = (window.clone(), button.clone());
            move || {
                let y = win.scroll_y().unwrap_or(0.0);
                dom::set_class(&btn, VISIBLE_CLASS, ui::scroll_top_visible(y, threshold));
            }
        };
        update();
        self.listeners.push(EventListener::new(window, "scroll", move |_| update()));

        let win = window.clone();
        let smooth = config.smooth_scroll;
        self.listeners.push(EventListener::new(&button, "click", move |_| {
            let options = dom::scroll_options(smooth);
            options.set_top(0.0);
            win.scroll_to_with_scroll_to_options(&options);
        }));
        Ok(())
    }

    fn bind_carousel(&mut self, document: &Document, config: &UiConfig) -> Result<()> {
        let container: Element = dom::by_id(document, markup::TESTIMONIAL_CONTAINER)?;
        for (id, page) in [(markup::NEXT_BTN, Page::Next), (markup::PREV_BTN, Page::Prev)] {
            let button: Element = dom::by_id(document, id)?;
            let container = container.clone();
            let (step, smooth) = (config.carousel_step, config.smooth_scroll);
            self.listeners.push(EventListener::new(&button, "click", move |_| {
                let max = (container.scroll_width() - container.client_width()) as f64;
                let left = ui::carousel_target(container.scroll_left() as f64, page, step, max);
                let options = dom::scroll_options(smooth);
                options.set_left(left);
                container.scroll_to_with_scroll_to_options(&options);
            }));
        }
        Ok(())
    }

    fn bind_modals(&mut self, window: &Window, document: &Document) -> Result<()> {
        for close in dom::query_all(document, markup::CLOSE_MODAL)? {
            let modals = self.modals.clone();
            self.listeners.push(EventListener::new(&close, "click", move |_| {
                modals.apply(ModalAction::CloseButton);
            }));
        }

        {
            let modals = self.modals.clone();
            self.listeners.push(EventListener::new(window, "click", move |event| {
                let on_backdrop = event
                    .target()
                    .map(|target| js_sys::Object::is(&target, &modals.payment))
                    .unwrap_or(false);
                if on_backdrop {
                    modals.apply(ModalAction::Backdrop);
                }
            }));
        }

        {
            let modals = self.modals.clone();
            self.listeners.push(EventListener::new_with_options(
                &self.modals.form,
                "submit",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event| {
                    event.prevent_default();
                    modals.apply(ModalAction::Submit);
                    log::info!("purchase submitted");
                },
            ));
        }

        for trigger in dom::query_all(document, markup::PACKAGE_TRIGGER)? {
            let modals = self.modals.clone();
            let element = trigger.clone();
            self.listeners.push(EventListener::new(&trigger, "click", move |_| {
                let package = element.get_attribute(markup::PACKAGE_ATTR).unwrap_or_default();
                let price = element
                    .get_attribute(markup::PRICE_ATTR)
                    .map(|attr| Price::from_attr(&attr))
                    .unwrap_or_else(|| Price::Label(String::new()));
                modals.open(&Selection::new(package, price));
            }));
        }
        Ok(())
    }
}

/// Convert the price argument of `openModal` from JS. Finite numbers are
/// amounts; everything else becomes a label spelled the way JS `String()`
/// spells it (`undefined`, `Infinity`, `[object Object]`).
pub fn price_from_js(value: &JsValue) -> Price {
    match value.as_f64() {
        Some(n) if n.is_finite() => Price::Amount(n),
        _ => Price::Label(value.as_string().unwrap_or_else(|| js_string(value))),
    }
}

fn js_string(value: &JsValue) -> String {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("String"))
        .ok()
        .and_then(|string| string.dyn_into::<js_sys::Function>().ok())
        .and_then(|string| string.call1(&JsValue::UNDEFINED, value).ok())
        .and_then(|text| text.as_string())
        .unwrap_or_default()
}
