//! Decision logic behind the page's click/scroll/submit handlers.

use std::fmt;

/// Whether the scroll-to-top button should be shown at `scroll_y`.
pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Next,
    Prev,
}

impl Page {
    pub fn delta(self, step: f64) -> f64 {
        match self {
            Page::Next => step,
            Page::Prev => -step,
        }
    }
}

/// Horizontal offset the carousel should land on after paging, kept within
/// `[0, max_scroll]`.
pub fn carousel_target(current: f64, page: Page, step: f64, max_scroll: f64) -> f64 {
    (current + page.delta(step)).clamp(0.0, max_scroll.max(0.0))
}

/// Price as handed to the modal opener: a number or a preformatted label.
#[derive(Debug, Clone, PartialEq)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl Price {
    /// Parse a `data-price` attribute: numeric text becomes an amount,
    /// anything else is kept as a label.
    pub fn from_attr(attr: &str) -> Self {
        match attr.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Price::Amount(n),
            _ => Price::Label(attr.to_string()),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(n) => write!(f, "{n}"),
            Price::Label(s) => f.write_str(s),
        }
    }
}

/// Package chosen for purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub package: String,
    pub price: Price,
}

impl Selection {
    pub fn new(package: impl Into<String>, price: Price) -> Self {
        Self {
            package: package.into(),
            price,
        }
    }

    pub fn title(&self) -> String {
        format!("Purchase {}", self.package)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Value for the element's inline `display` property.
    pub fn display(self) -> &'static str {
        match self {
            Visibility::Shown => "block",
            Visibility::Hidden => "none",
        }
    }
}

/// Everything that can happen to the two modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Open,
    CloseButton,
    Backdrop,
    Submit,
    DismissConfirmation,
}

/// What a [`ModalAction`] does to the page. `None` leaves a modal as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalEffect {
    pub purchase: Option<Visibility>,
    pub confirmation: Option<Visibility>,
    pub reset_form: bool,
}

impl ModalAction {
    pub fn effect(self) -> ModalEffect {
        use Visibility::*;
        let (purchase, confirmation, reset_form) = match self {
            ModalAction::Open => (Some(Shown), None, false),
            ModalAction::CloseButton => (Some(Hidden), Some(Hidden), false),
            ModalAction::Backdrop => (Some(Hidden), None, false),
            ModalAction::Submit => (Some(Hidden), Some(Shown), true),
            ModalAction::DismissConfirmation => (None, Some(Hidden), false),
        };
        ModalEffect {
            purchase,
            confirmation,
            reset_form,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_button_threshold() {
        assert!(!scroll_top_visible(0.0, 300.0));
        assert!(!scroll_top_visible(299.0, 300.0));
        assert!(!scroll_top_visible(300.0, 300.0));
        assert!(scroll_top_visible(301.0, 300.0));
    }

    #[test]
    fn carousel_pages_by_step() {
        assert_eq!(carousel_target(0.0, Page::Next, 350.0, 2000.0), 350.0);
        assert_eq!(carousel_target(700.0, Page::Prev, 350.0, 2000.0), 350.0);
    }

    #[test]
    fn carousel_clamps_at_bounds() {
        assert_eq!(carousel_target(100.0, Page::Prev, 350.0, 2000.0), 0.0);
        assert_eq!(carousel_target(1900.0, Page::Next, 350.0, 2000.0), 2000.0);
        // content narrower than the container
        assert_eq!(carousel_target(0.0, Page::Next, 350.0, -40.0), 0.0);
    }

    #[test]
    fn price_formatting() {
        assert_eq!(Price::Amount(49.0).to_string(), "49");
        assert_eq!(Price::Amount(49.5).to_string(), "49.5");
        assert_eq!(Price::Label("$49".into()).to_string(), "$49");
    }

    #[test]
    fn price_attributes() {
        assert_eq!(Price::from_attr("49"), Price::Amount(49.0));
        assert_eq!(Price::from_attr(" 19.99 "), Price::Amount(19.99));
        assert_eq!(Price::from_attr("$49/mo"), Price::Label("$49/mo".into()));
        assert_eq!(Price::from_attr("NaN"), Price::Label("NaN".into()));
    }

    #[test]
    fn selection_title() {
        let sel = Selection::new("Starter", Price::Amount(49.0));
        assert_eq!(sel.title(), "Purchase Starter");
    }

    #[test]
    fn submit_swaps_modals_and_resets() {
        let effect = ModalAction::Submit.effect();
        assert_eq!(effect.purchase, Some(Visibility::Hidden));
        assert_eq!(effect.confirmation, Some(Visibility::Shown));
        assert!(effect.reset_form);
    }

    #[test]
    fn backdrop_only_touches_purchase_modal() {
        let effect = ModalAction::Backdrop.effect();
        assert_eq!(effect.purchase, Some(Visibility::Hidden));
        assert_eq!(effect.confirmation, None);

        let close = ModalAction::CloseButton.effect();
        assert_eq!(close.confirmation, Some(Visibility::Hidden));
    }

    #[test]
    fn display_values() {
        assert_eq!(Visibility::Shown.display(), "block");
        assert_eq!(Visibility::Hidden.display(), "none");
        assert_eq!(ModalAction::Open.effect().purchase.map(Visibility::display), Some("block"));
        assert_eq!(ModalAction::DismissConfirmation.effect().purchase, None);
    }
}
