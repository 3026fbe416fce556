//! Tunables for the landing page.
//!
//! Every field has a default matching the shipped page, so an empty JSON
//! object (or no `data-landing-config` attribute at all) yields
//! [`LandingConfig::default`]. Hosts override only what they need:
//!
//! ```json
//! { "background": { "particle_count": 800 }, "ui": { "smooth_scroll": false } }
//! ```

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::reveal::{Ease, Tween};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub background: BackgroundConfig,
    pub reveal: RevealConfig,
    pub ui: UiConfig,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            background: BackgroundConfig::default(),
            reveal: RevealConfig::default(),
            ui: UiConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub particle_count: usize,
    /// Edge length of the cube the particles are scattered in.
    pub spread: f32,
    pub point_size: f32,
    /// CSS hex colour, `#rrggbb`.
    pub color: String,
    pub opacity: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub camera_z: f32,
    /// Radians added to the X rotation each frame.
    pub spin_x: f32,
    /// Radians added to the Y rotation each frame.
    pub spin_y: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            particle_count: 2000,
            spread: 20.0,
            point_size: 0.02,
            color: "#7000ff".to_string(),
            opacity: 0.8,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_z: 3.0,
            spin_x: 0.0005,
            spin_y: 0.001,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub hero: Tween,
    pub section_title: ScrollTween,
    pub packages: StaggerTween,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            hero: Tween {
                from_y: 50.0,
                duration: 1.5,
                ease: Ease::Power3Out,
                delay: 0.0,
            },
            section_title: ScrollTween::default(),
            packages: StaggerTween::default(),
        }
    }
}

/// A tween gated on its trigger's top edge reaching `start` × viewport height.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollTween {
    pub start: f64,
    pub tween: Tween,
}

impl Default for ScrollTween {
    fn default() -> Self {
        Self {
            start: 0.8,
            tween: Tween {
                from_y: 30.0,
                duration: 1.0,
                ..Tween::default()
            },
        }
    }
}

/// A group tween where item `i` is delayed by `i * stagger` seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StaggerTween {
    pub start: f64,
    pub stagger: f64,
    pub tween: Tween,
}

impl Default for StaggerTween {
    fn default() -> Self {
        Self {
            start: 0.75,
            stagger: 0.2,
            tween: Tween {
                from_y: 50.0,
                duration: 0.8,
                ..Tween::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub scroll_top_threshold: f64,
    pub carousel_step: f64,
    pub smooth_scroll: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scroll_top_threshold: 300.0,
            carousel_step: 350.0,
            smooth_scroll: true,
        }
    }
}

impl LandingConfig {
    /// Parse JSON overrides on top of the defaults and validate the result.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.level()?;
        self.background.validate()?;
        self.reveal.validate()?;

        let ui = &self.ui;
        if !(ui.scroll_top_threshold >= 0.0) {
            return Err(invalid("ui.scroll_top_threshold must be >= 0"));
        }
        if !(ui.carousel_step > 0.0) {
            return Err(invalid("ui.carousel_step must be > 0"));
        }
        Ok(())
    }

    pub fn level(&self) -> Result<log::Level> {
        self.log_level
            .parse()
            .map_err(|_| invalid(format!("unknown log level {:?}", self.log_level)))
    }
}

impl BackgroundConfig {
    fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(invalid("background.particle_count must be > 0"));
        }
        if !(self.spread > 0.0) {
            return Err(invalid("background.spread must be > 0"));
        }
        if !(self.point_size > 0.0) {
            return Err(invalid("background.point_size must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(invalid("background.opacity must be within [0, 1]"));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(invalid("background.fov_degrees must be within (0, 180)"));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(invalid("background.near must satisfy 0 < near < far"));
        }
        self.rgb()?;
        Ok(())
    }

    /// Colour as normalised RGB.
    pub fn rgb(&self) -> Result<[f32; 3]> {
        parse_hex_color(&self.color)
            .ok_or_else(|| invalid(format!("background.color {:?} is not #rrggbb", self.color)))
    }
}

impl RevealConfig {
    fn validate(&self) -> Result<()> {
        self.hero.validate("reveal.hero")?;
        self.section_title.tween.validate("reveal.section_title")?;
        self.packages.tween.validate("reveal.packages")?;
        for (name, start) in [
            ("reveal.section_title.start", self.section_title.start),
            ("reveal.packages.start", self.packages.start),
        ] {
            if !(0.0..=1.0).contains(&start) {
                return Err(invalid(format!("{name} must be within [0, 1]")));
            }
        }
        if !(self.packages.stagger >= 0.0) {
            return Err(invalid("reveal.packages.stagger must be >= 0"));
        }
        Ok(())
    }
}

impl Tween {
    fn validate(&self, name: &str) -> Result<()> {
        if !(self.duration >= 0.0 && self.delay >= 0.0) {
            return Err(invalid(format!("{name} duration and delay must be >= 0")));
        }
        if !self.from_y.is_finite() {
            return Err(invalid(format!("{name}.from_y must be finite")));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidConfig(msg.into())
}

fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    let channel = |shift: u32| ((value >> shift) & 0xff) as f32 / 255.0;
    Some([channel(16), channel(8), channel(0)])
}
