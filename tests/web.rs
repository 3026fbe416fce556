#![cfg(target_arch = "wasm32")]

mod common;

use common::{document, element, scroll_top_to, settle, Fixture, PAGE};
use landing_wasm::testimonials::TESTIMONIALS;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn testimonials_injected_once_per_record() {
    let _page = Fixture::new(PAGE);
    let _landing = landing_wasm::mount().unwrap();

    let cards = document()
        .query_selector_all("#testimonial-container .testimonial-card")
        .unwrap();
    assert_eq!(cards.length() as usize, TESTIMONIALS.len());

    for (i, t) in TESTIMONIALS.iter().enumerate() {
        let card: web_sys::Element = cards.get(i as u32).unwrap().unchecked_into();
        let text = card.text_content().unwrap();
        assert!(text.contains(&*t.name));
        assert!(text.contains(&format!("{} ({})", t.role, t.country)));
        assert!(text.contains(&*t.text));
    }
}

#[wasm_bindgen_test]
fn dynamic_testimonials_are_escaped() {
    let _page = Fixture::new(PAGE);
    let landing = landing_wasm::mount().unwrap();

    landing
        .set_testimonials(
            r#"[{"name":"<img src=x>","role":"Tester","country":"Nowhere","text":"<b>hi</b>"}]"#,
        )
        .unwrap();

    let container = element("testimonial-container");
    assert_eq!(container.query_selector_all(".testimonial-card").unwrap().length(), 1);
    assert!(container.query_selector("img").unwrap().is_none());
    assert!(container.query_selector("b").unwrap().is_none());
    let name = container.query_selector("h4").unwrap().unwrap();
    assert_eq!(name.text_content().unwrap(), "<img src=x>");

    assert!(landing.set_testimonials("not json").is_err());
}

#[wasm_bindgen_test]
fn background_tracks_window_size() {
    let _page = Fixture::new(PAGE);
    let mut landing = landing_wasm::mount().unwrap();
    if !landing.is_background_running() {
        // headless browser without WebGL2; mount must still succeed
        return;
    }

    let window = web_sys::window().unwrap();
    window
        .dispatch_event(&web_sys::Event::new("resize").unwrap())
        .unwrap();

    let dpr = window.device_pixel_ratio();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    let height = window.inner_height().unwrap().as_f64().unwrap();
    let expected = ((width * dpr).floor() as u32, (height * dpr).floor() as u32);
    assert_eq!(landing.background_size(), Some(expected));

    let rect = element("bg-canvas").get_bounding_client_rect();
    assert!(rect.width() > 0.0 && rect.height() > 0.0);

    landing.stop_background();
    assert!(!landing.is_background_running());
    // second stop is a no-op
    landing.stop_background();
    window
        .dispatch_event(&web_sys::Event::new("resize").unwrap())
        .unwrap();
}

#[wasm_bindgen_test]
fn hero_plays_and_far_titles_wait() {
    let _page = Fixture::new(PAGE);
    let _landing = landing_wasm::mount().unwrap();

    let hero = document()
        .query_selector(".hero-content")
        .unwrap()
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    let style = hero.style();
    assert_eq!(style.get_property_value("opacity").unwrap(), "1");
    assert!(style.get_property_value("transition").unwrap().contains("1.5s"));

    let title = element("far-title").style();
    assert_eq!(title.get_property_value("opacity").unwrap(), "0");
    assert_eq!(
        title.get_property_value("transform").unwrap(),
        "translateY(30px)"
    );
}

#[wasm_bindgen_test]
async fn section_title_reveals_once_past_its_line() {
    let _page = Fixture::new(PAGE);
    let _landing = landing_wasm::mount().unwrap();
    let title = element("far-title");
    let opacity = || title.style().get_property_value("opacity").unwrap();

    // below the 80% line
    scroll_top_to(&title, 0.9);
    settle().await;
    assert_eq!(opacity(), "0");

    scroll_top_to(&title, 0.5);
    settle().await;
    assert_eq!(opacity(), "1");
    assert_eq!(title.style().get_property_value("transform").unwrap(), "none");
    assert!(title
        .style()
        .get_property_value("transition-duration")
        .unwrap()
        .starts_with("1s"));

    // away and back again: no replay
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    settle().await;
    assert_eq!(opacity(), "1");
    scroll_top_to(&title, 0.5);
    settle().await;
    assert_eq!(opacity(), "1");
}

#[wasm_bindgen_test]
async fn package_cards_stagger_when_grid_enters() {
    let _page = Fixture::new(PAGE);
    let _landing = landing_wasm::mount().unwrap();

    let cards: Vec<web_sys::HtmlElement> = {
        let list = document().query_selector_all(".package-card").unwrap();
        (0..list.length())
            .map(|i| list.get(i).unwrap().unchecked_into())
            .collect()
    };
    assert_eq!(cards.len(), 2);
    // observer callbacks never run synchronously
    for card in &cards {
        assert_eq!(card.style().get_property_value("opacity").unwrap(), "0");
    }

    let grid = document().query_selector(".packages-grid").unwrap().unwrap();
    scroll_top_to(&grid, 0.25);
    settle().await;

    for (card, delay) in cards.iter().zip(["0s", "0.2s"]) {
        let style = card.style();
        assert_eq!(style.get_property_value("opacity").unwrap(), "1");
        let delays = style.get_property_value("transition-delay").unwrap();
        assert!(delays.starts_with(delay), "{delays}");
    }
}

#[wasm_bindgen_test]
fn missing_markup_fails_mount() {
    let page = PAGE.replace(r#"id="payment-form""#, r#"id="other-form""#);
    let _page = Fixture::new(&page);
    assert!(landing_wasm::mount().is_err());
}

#[wasm_bindgen_test]
fn invalid_config_fails_mount() {
    let _page = Fixture::with_config(PAGE, Some(r#"{"background":{"particle_count":0}}"#));
    assert!(landing_wasm::mount().is_err());
}

#[wasm_bindgen_test]
fn config_overrides_apply() {
    let _page = Fixture::with_config(PAGE, Some(r#"{"ui":{"scroll_top_threshold":10}}"#));
    let _landing = landing_wasm::mount().unwrap();

    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 20.0);
    window
        .dispatch_event(&web_sys::Event::new("scroll").unwrap())
        .unwrap();
    assert!(common::has_class(&element("scroll-top"), "visible"));
}
