#![allow(dead_code)]

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

/// Markup the page script expects, plus enough height to scroll.
pub const PAGE: &str = r#"
<style>
  #testimonial-container { display: flex; width: 400px; overflow-x: scroll; }
  #testimonial-container .testimonial-card { flex: 0 0 300px; }
  .modal { display: none; }
</style>
<canvas id="bg-canvas"></canvas>
<button id="mobile-menu"></button>
<ul class="nav-menu">
  <li><a class="nav-link" id="first-link" href="javascript:void(0)">One</a></li>
  <li><a class="nav-link" href="javascript:void(0)">Two</a></li>
</ul>
<div class="hero-content"><h1>Hero</h1></div>
<div id="testimonial-container"></div>
<button id="prev-btn">prev</button>
<button id="next-btn">next</button>
<div class="packages-grid">
  <div class="package-card">
    <button id="buy-starter" data-package="Starter" data-price="49">Buy</button>
  </div>
  <div class="package-card">
    <button id="buy-pro" data-package="Pro" data-price="$89 / month">Buy</button>
  </div>
</div>
<button id="scroll-top">top</button>
<div id="payment-modal" class="modal">
  <div class="modal-content">
    <span class="close-modal" id="close-payment">x</span>
    <h2 id="modal-package-title">Purchase</h2>
    <form id="payment-form">
      <input type="hidden" id="selected-package">
      <input type="hidden" id="selected-price">
      <input type="text" id="buyer-name">
      <button type="submit">Pay</button>
    </form>
  </div>
</div>
<div id="thank-you-modal" class="modal">
  <span class="close-modal" id="close-thanks">x</span>
</div>
<div style="height: 5000px"></div>
<h2 class="section-title" id="far-title">Far below</h2>
<div style="height: 2000px"></div>
"#;

/// Page markup mounted under `<body>` for the duration of one test.
pub struct Fixture {
    root: HtmlElement,
}

impl Fixture {
    pub fn new(html: &str) -> Self {
        Self::with_config(html, None)
    }

    pub fn with_config(html: &str, config: Option<&str>) -> Self {
        let document = document();
        let body = document.body().unwrap();
        match config {
            Some(json) => body.set_attribute("data-landing-config", json).unwrap(),
            None => body.remove_attribute("data-landing-config").unwrap(),
        }
        let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        root.set_inner_html(html);
        body.append_child(&root).unwrap();
        Fixture { root }
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
        if let Some(body) = document().body() {
            let _ = body.remove_attribute("data-landing-config");
        }
        web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn element(id: &str) -> HtmlElement {
    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} missing"))
        .unchecked_into()
}

pub fn input(id: &str) -> HtmlInputElement {
    element(id).unchecked_into()
}

pub fn display(id: &str) -> String {
    element(id).style().get_property_value("display").unwrap()
}

/// Scroll the window so `element`'s top edge sits at `fraction` of the
/// viewport height.
pub fn scroll_top_to(element: &Element, fraction: f64) {
    let window = web_sys::window().unwrap();
    let height = window.inner_height().unwrap().as_f64().unwrap();
    let top = element.get_bounding_client_rect().top() + window.scroll_y().unwrap();
    window.scroll_to_with_x_and_y(0.0, (top - height * fraction).max(0.0));
}

/// Give pending `IntersectionObserver` callbacks a few frames to run.
pub async fn settle() {
    gloo::timers::future::TimeoutFuture::new(200).await;
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}
