//! Geometry and camera maths for the particle background.

use glam::{Mat4, Vec3};

use crate::config::BackgroundConfig;

/// Scatter `count` points uniformly in a cube of edge `spread` centred on
/// the origin. `random` must yield values in `[0, 1)`.
///
/// Returns a flat `xyz` buffer ready for upload.
pub fn particle_positions(count: usize, spread: f32, mut random: impl FnMut() -> f32) -> Vec<f32> {
    (0..count * 3).map(|_| (random() - 0.5) * spread).collect()
}

/// Accumulated rotation of the point cloud, advanced once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
}

impl Spin {
    pub fn advance(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Model matrix, X rotation applied after Y.
    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_x(self.x) * Mat4::from_rotation_y(self.y)
    }
}

/// CSS size of the window plus its device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let pixel_ratio = if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio,
        }
    }

    /// Drawing-buffer size in device pixels.
    pub fn buffer_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).floor() as u32,
            (self.height * self.pixel_ratio).floor() as u32,
        )
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            (self.width / self.height) as f32
        } else {
            1.0
        }
    }
}

/// Perspective camera sitting on the +z axis, looking at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub z: f32,
}

impl Camera {
    pub fn from_config(config: &BackgroundConfig, aspect: f32) -> Self {
        Self {
            fov_y: config.fov_degrees.to_radians(),
            aspect,
            near: config.near,
            far: config.far,
            z: config.camera_z,
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.z))
    }
}

/// Numerator of the size-attenuation term, half the CSS height. The point
/// size uniform carries the pixel ratio, so a point of world size `size` at
/// view depth `d` is `size * pixel_ratio * scale / d` device pixels wide.
pub fn point_scale(viewport: &Viewport) -> f32 {
    (viewport.height / 2.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_stay_inside_cube() {
        let mut state = 0u32;
        let random = move || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 8) as f32 / (1u32 << 24) as f32
        };
        let positions = particle_positions(2000, 20.0, random);
        assert_eq!(positions.len(), 6000);
        assert!(positions.iter().all(|p| (-10.0..10.0).contains(p)));
    }

    #[test]
    fn positions_map_unit_interval_to_cube_edges() {
        let mut values = [0.0f32, 0.5, 0.999].into_iter().cycle();
        let positions = particle_positions(1, 20.0, move || values.next().unwrap());
        assert_eq!(positions[0], -10.0);
        assert_eq!(positions[1], 0.0);
        assert!((positions[2] - 9.98).abs() < 1e-4);
    }

    #[test]
    fn spin_accumulates() {
        let mut spin = Spin::default();
        for _ in 0..1000 {
            spin.advance(0.0005, 0.001);
        }
        assert!((spin.x - 0.5).abs() < 1e-3);
        assert!((spin.y - 1.0).abs() < 1e-3);
    }

    #[test]
    fn model_rotates_about_y_before_x() {
        let spin = Spin {
            x: std::f32::consts::FRAC_PI_2,
            y: std::f32::consts::FRAC_PI_2,
        };
        // +x -> (Ry) -> -z -> (Rx) -> +y
        let p = spin.model().transform_point3(Vec3::X);
        assert!((p - Vec3::Y).length() < 1e-5, "{p:?}");
    }

    #[test]
    fn viewport_buffer_size_uses_pixel_ratio() {
        let vp = Viewport::new(1280.0, 720.0, 1.5);
        assert_eq!(vp.buffer_size(), (1920, 1080));
        assert!((vp.aspect() - 16.0 / 9.0).abs() < 1e-6);

        let odd = Viewport::new(333.0, 100.0, 1.25);
        assert_eq!(odd.buffer_size(), (416, 125));
    }

    #[test]
    fn degenerate_viewport() {
        let vp = Viewport::new(800.0, 0.0, 0.0);
        assert_eq!(vp.pixel_ratio, 1.0);
        assert_eq!(vp.aspect(), 1.0);
        assert_eq!(vp.buffer_size(), (800, 0));
    }

    #[test]
    fn camera_projects_origin_to_centre() {
        let camera = Camera::from_config(&BackgroundConfig::default(), 16.0 / 9.0);
        let clip = camera.projection() * camera.view() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
        assert!((clip.w - 3.0).abs() < 1e-5);
    }

    #[test]
    fn point_scale_is_half_css_height() {
        let vp = Viewport::new(1000.0, 800.0, 2.0);
        assert_eq!(point_scale(&vp), 400.0);

        // default material at the default camera distance on a DPR-2 screen
        let config = BackgroundConfig::default();
        let size = config.point_size * vp.pixel_ratio as f32 * point_scale(&vp) / config.camera_z;
        assert!((size - 16.0 / 3.0).abs() < 1e-4, "{size}");

        // same CSS size at DPR 1 gives half the device pixels
        let flat = Viewport::new(1000.0, 800.0, 1.0);
        assert_eq!(point_scale(&flat), point_scale(&vp));
    }
}
