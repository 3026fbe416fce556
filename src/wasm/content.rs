use web_sys::{Document, Element};

use super::dom;
use crate::error::Result;
use crate::markup;
use crate::testimonials::{self, Markup, Testimonial};

/// Replace the carousel's content with one card per record.
pub fn render(document: &Document, items: &[Testimonial<'_>], mode: Markup) -> Result<()> {
    let container: Element = dom::by_id(document, markup::TESTIMONIAL_CONTAINER)?;
    container.set_inner_html(&testimonials::render_cards(items, mode));
    log::debug!("rendered {} testimonials", items.len());
    Ok(())
}
