//! Entrance tweens and the scroll-trigger arithmetic behind them.
//!
//! Tweens are "from" tweens: the element is parked at `opacity: 0`,
//! shifted down by `from_y` pixels, then transitioned back to its natural
//! state. The browser side lives in `wasm::reveal`; everything here is plain
//! data so it can be checked on the host.

use serde::Deserialize;

/// Timing curves, named after the motion presets designers hand over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Ease {
    #[default]
    #[serde(rename = "power1.out")]
    Power1Out,
    #[serde(rename = "power2.out")]
    Power2Out,
    #[serde(rename = "power3.out")]
    Power3Out,
    #[serde(rename = "none")]
    Linear,
}

impl Ease {
    /// CSS `transition-timing-function` for this curve.
    pub fn css(self) -> &'static str {
        match self {
            Ease::Power1Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
            Ease::Linear => "linear",
        }
    }
}

/// A single fade/slide-in. Times are in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tween {
    pub from_y: f64,
    pub duration: f64,
    pub ease: Ease,
    pub delay: f64,
}

impl Default for Tween {
    fn default() -> Self {
        Self {
            from_y: 0.0,
            duration: 0.5,
            ease: Ease::Power1Out,
            delay: 0.0,
        }
    }
}

impl Tween {
    /// Same tween pushed back by `extra` seconds.
    pub fn delayed(&self, extra: f64) -> Tween {
        Tween {
            delay: self.delay + extra,
            ..self.clone()
        }
    }

    /// Inline style applied before the element is revealed.
    pub fn hidden_style(&self) -> [(&'static str, String); 3] {
        [
            ("transition", "none".to_string()),
            ("opacity", "0".to_string()),
            ("transform", format!("translateY({}px)", self.from_y)),
        ]
    }

    /// Inline style that plays the transition back to the natural state.
    pub fn shown_style(&self) -> [(&'static str, String); 3] {
        let timing = format!("{}s {} {}s", self.duration, self.ease.css(), self.delay);
        [
            ("transition", format!("opacity {timing}, transform {timing}")),
            ("opacity", "1".to_string()),
            ("transform", "none".to_string()),
        ]
    }
}

/// Delays for a staggered group of `count` items.
pub fn stagger_delays(count: usize, step: f64) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| i as f64 * step)
}

/// `IntersectionObserver` root margin that shrinks the viewport's bottom edge
/// to `start` × height, so an element intersects once its top passes that line.
pub fn root_margin(start: f64) -> String {
    let cut = ((1.0 - start.clamp(0.0, 1.0)) * 100.0).round();
    format!("0px 0px -{cut}% 0px")
}

/// Start line for a viewport of `viewport_height` pixels, used when the
/// observer reports no root bounds.
pub fn start_line(viewport_height: f64, start: f64) -> f64 {
    viewport_height * start
}

/// Whether a trigger whose top edge sits at `top` (viewport coordinates) has
/// reached the start line `line`. The observer's own intersection verdict
/// wins, and elements already scrolled past count as reached.
pub fn start_reached(intersecting: bool, top: f64, line: f64) -> bool {
    intersecting || top <= line
}

/// Fire-once latch for a single trigger binding.
#[derive(Debug, Default)]
pub struct Latch {
    fired: bool,
}

impl Latch {
    /// Returns `true` exactly once, the first time `reached` is set.
    pub fn observe(&mut self, reached: bool) -> bool {
        if self.fired || !reached {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}
