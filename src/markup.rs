//! Selectors and class names the host page is expected to provide.

pub const BG_CANVAS: &str = "bg-canvas";
pub const TESTIMONIAL_CONTAINER: &str = "testimonial-container";

pub const HERO_CONTENT: &str = ".hero-content";
pub const SECTION_TITLE: &str = ".section-title";
pub const PACKAGES_GRID: &str = ".packages-grid";
pub const PACKAGE_CARD: &str = ".package-card";

pub const MOBILE_MENU: &str = "mobile-menu";
pub const NAV_MENU: &str = ".nav-menu";
pub const NAV_LINK: &str = ".nav-link";
pub const SCROLL_TOP: &str = "scroll-top";
pub const NEXT_BTN: &str = "next-btn";
pub const PREV_BTN: &str = "prev-btn";

pub const PAYMENT_MODAL: &str = "payment-modal";
pub const THANK_YOU_MODAL: &str = "thank-you-modal";
pub const CLOSE_MODAL: &str = ".close-modal";
pub const PAYMENT_FORM: &str = "payment-form";
pub const MODAL_TITLE: &str = "modal-package-title";
pub const SELECTED_PACKAGE: &str = "selected-package";
pub const SELECTED_PRICE: &str = "selected-price";

/// Elements that open the purchase modal on click.
pub const PACKAGE_TRIGGER: &str = "[data-package]";
pub const PACKAGE_ATTR: &str = "data-package";
pub const PRICE_ATTR: &str = "data-price";

/// `<body>` attribute holding JSON overrides for [`crate::config::LandingConfig`].
pub const CONFIG_ATTR: &str = "data-landing-config";

pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
