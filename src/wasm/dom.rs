use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::{Error, Result};
use crate::ui::Visibility;

/// Look up `#id` and cast it to the expected element type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(format!("#{id}")))?;
    cast(element, &format!("#{id}"))
}

pub fn query<T: JsCast>(document: &Document, selector: &str) -> Result<T> {
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| Error::MissingElement(selector.to_string()))?;
    cast(element, selector)
}

/// Every element matching `selector` that is an `HtmlElement`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn cast<T: JsCast>(element: Element, selector: &str) -> Result<T> {
    element.dyn_into::<T>().map_err(|_| Error::UnexpectedElement {
        selector: selector.to_string(),
        expected: std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("element"),
    })
}

pub fn set_display(element: &HtmlElement, visibility: Visibility) {
    if let Err(e) = element.style().set_property("display", visibility.display()) {
        log::warn!("could not set display on {}: {:?}", element.id(), e);
    }
}

pub fn set_styles(element: &HtmlElement, styles: &[(&str, String)]) {
    let style = element.style();
    for (name, value) in styles {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("could not set {name} on <{}>: {:?}", element.tag_name(), e);
        }
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("could not update class {class}: {:?}", e);
    }
}

pub fn toggle_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().toggle(class) {
        log::warn!("could not toggle class {class}: {:?}", e);
    }
}

pub fn scroll_options(smooth: bool) -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    options
}

/// CSS size and device pixel ratio of the window.
pub fn viewport(window: &Window) -> crate::scene::Viewport {
    let size = |v: std::result::Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    crate::scene::Viewport::new(
        size(window.inner_width()),
        size(window.inner_height()),
        window.device_pixel_ratio(),
    )
}
