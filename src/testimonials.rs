//! Reviewer quotes shown in the testimonial carousel, and their markup.

use std::borrow::Cow;
use std::fmt::Write;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial<'a> {
    #[serde(borrow)]
    pub name: Cow<'a, str>,
    #[serde(borrow)]
    pub role: Cow<'a, str>,
    #[serde(borrow)]
    pub country: Cow<'a, str>,
    #[serde(borrow)]
    pub text: Cow<'a, str>,
}

impl Testimonial<'static> {
    pub const fn new(
        name: &'static str,
        role: &'static str,
        country: &'static str,
        text: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            role: Cow::Borrowed(role),
            country: Cow::Borrowed(country),
            text: Cow::Borrowed(text),
        }
    }
}

pub static TESTIMONIALS: [Testimonial<'static>; 9] = [
    Testimonial::new(
        "Ace2k7",
        "Content Creator",
        "United States",
        "Liger Moen absolutely crushed it with my PC optimization! My system is now faster than ever, and I’m experiencing zero lag during gameplay or editing. Top-tier solutions.",
    ),
    Testimonial::new(
        "Gamerz Crunch",
        "Content Creator",
        "India",
        "I've been blown away by how much this platform has improved my performance. The optimization features allowed me to stream and edit videos effortlessly.",
    ),
    Testimonial::new(
        "Ismail Hossain",
        "Graphic Designer",
        "Bangladesh",
        "This optimizer has made a huge difference, making my Adobe programs run without a glitch even with heavy files. I couldn't ask for a better tool.",
    ),
    Testimonial::new(
        "Mehedi Hasan",
        "Graphic Designer",
        "Pakistan",
        "My PC feels incredibly fast now, and even when running multiple design programs at once, it never slows down. Highly recommend for professionals.",
    ),
    Testimonial::new(
        "Sanjoy Mallick",
        "Digital Marketer",
        "India",
        "I've been struggling with an annoying Aim Shake issue for ages, but once I used the optimizer, the problem was completely gone!",
    ),
    Testimonial::new(
        "TmBlox",
        "Content Creator",
        "China",
        "I can't believe how much smoother my streaming setup has become! No more buffering or crashes. This optimizer has seriously elevated my content creation.",
    ),
    Testimonial::new(
        "Funguy",
        "Gamer",
        "United States",
        "No more lag, no more stuttering everything runs smoothly now, and my viewers have even noticed the improvement. This is a must for gamers!",
    ),
    Testimonial::new(
        "Ismot Ara Rozy",
        "Streamer",
        "Bangladesh",
        "Streaming used to be a nightmare, but after using the optimization tool, my PC is running flawlessly. I can now stream without a single glitch.",
    ),
    Testimonial::new(
        "Jordan Lee",
        "Video Editor",
        "United Kingdom",
        "After using this optimizer, the software runs faster than ever. I can now edit without slowdowns or freezing, making my workflow much more efficient.",
    ),
];

/// How record fields are written into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// Fields are interpolated as-is. Only for the compiled-in list.
    Trusted,
    /// Fields are HTML-escaped.
    Escaped,
}

impl Markup {
    fn apply(self, field: &str) -> Cow<'_, str> {
        match self {
            Markup::Trusted => Cow::Borrowed(field),
            Markup::Escaped => escape_html(field),
        }
    }
}

/// Render every record as a `testimonial-card` fragment, concatenated.
pub fn render_cards(items: &[Testimonial<'_>], markup: Markup) -> String {
    let mut html = String::new();
    for t in items {
        // writing into a String cannot fail
        let _ = write!(
            html,
            r#"
        <div class="testimonial-card">
            <div class="testimonial-text">"{text}"</div>
            <div class="reviewer-info">
                <h4>{name}</h4>
                <p>{role} ({country})</p>
            </div>
        </div>
    "#,
            text = markup.apply(&t.text),
            name = markup.apply(&t.name),
            role = markup.apply(&t.role),
            country = markup.apply(&t.country),
        );
    }
    html
}

/// Decode a JSON array of records supplied at runtime.
pub fn parse(json: &str) -> crate::error::Result<Vec<Testimonial<'_>>> {
    serde_json::from_str(json).map_err(|e| crate::error::Error::Testimonials(e.to_string()))
}

pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
