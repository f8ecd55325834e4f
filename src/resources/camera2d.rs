//! Shared 2D camera resource.
//!
//! The camera snaps to its focus target every frame and produces the
//! world-to-screen transform used by the render pass. The transform is
//! composed as translate(-position) · rotate(rotation) · scale(zoom) ·
//! translate(viewport / 2), applied to row vectors, so the focus position
//! always lands on the centre of the viewport.

use bevy_ecs::prelude::{Entity, Resource};
use raylib::prelude::{Matrix, Vector2};

/// Smallest zoom the camera accepts.
pub const MIN_ZOOM: f32 = 0.1;

/// Anything the camera can follow.
pub trait Focusable {
    fn position(&self) -> Vector2;
}

/// ECS resource that holds the active 2D camera pose and its focus target.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Camera2D {
    position: Vector2,
    rotation: f32,
    zoom: f32,
    focus: Option<Entity>,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Camera2D {
    pub fn new(focus: Option<Entity>) -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            rotation: 0.0,
            zoom: 1.0,
            focus,
        }
    }

    pub fn focus(&self) -> Option<Entity> {
        self.focus
    }

    /// Swap the followed entity.
    pub fn set_focus(&mut self, focus: Entity) {
        self.focus = Some(focus);
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// Snap the camera onto the target's current position.
    pub fn update(&mut self, target: &dyn Focusable) {
        self.position = target.position();
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom, clamped to [`MIN_ZOOM`].
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = if zoom < MIN_ZOOM { MIN_ZOOM } else { zoom };
    }

    /// World-to-screen transform for a viewport of the given size.
    ///
    /// Stored column-major like every raylib matrix: `m12`/`m13` hold the
    /// translation and a point maps as `x' = m0*x + m4*y + m12`,
    /// `y' = m1*x + m5*y + m13`.
    pub fn transform(&self, viewport_width: f32, viewport_height: f32) -> Matrix {
        let (sin, cos) = self.rotation.sin_cos();
        let z = self.zoom;
        let cx = viewport_width * 0.5;
        let cy = viewport_height * 0.5;
        let px = -self.position.x;
        let py = -self.position.y;

        Matrix {
            m0: z * cos,
            m4: -z * sin,
            m8: 0.0,
            m12: z * (px * cos - py * sin) + cx,
            m1: z * sin,
            m5: z * cos,
            m9: 0.0,
            m13: z * (px * sin + py * cos) + cy,
            m2: 0.0,
            m6: 0.0,
            m10: z,
            m14: 0.0,
            m3: 0.0,
            m7: 0.0,
            m11: 0.0,
            m15: 1.0,
        }
    }

    /// Map a world point to the screen for the given viewport.
    pub fn transform_point(&self, point: Vector2, viewport_width: f32, viewport_height: f32) -> Vector2 {
        let m = self.transform(viewport_width, viewport_height);
        Vector2 {
            x: m.m0 * point.x + m.m4 * point.y + m.m12,
            y: m.m1 * point.x + m.m5 * point.y + m.m13,
        }
    }

    /// Equivalent raylib camera for `begin_mode2D`.
    pub fn to_raylib(&self, viewport_width: f32, viewport_height: f32) -> raylib::prelude::Camera2D {
        raylib::prelude::Camera2D {
            offset: Vector2 {
                x: viewport_width * 0.5,
                y: viewport_height * 0.5,
            },
            target: self.position,
            rotation: self.rotation.to_degrees(),
            zoom: self.zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    struct Fixed(Vector2);

    impl Focusable for Fixed {
        fn position(&self) -> Vector2 {
            self.0
        }
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut cam = Camera2D::default();
        for z in [-3.0, 0.0, 0.05, 0.1, 0.5, 2.0, 10.0] {
            cam.set_zoom(z);
            assert_eq!(cam.zoom(), z.max(MIN_ZOOM));
        }
    }

    #[test]
    fn test_update_snaps_to_focus() {
        let mut cam = Camera2D::default();
        cam.update(&Fixed(Vector2 { x: 42.0, y: -7.5 }));
        assert_eq!(cam.position().x, 42.0);
        assert_eq!(cam.position().y, -7.5);
    }

    #[test]
    fn test_translation_component() {
        let mut cam = Camera2D::default();
        cam.set_position(Vector2 { x: 10.0, y: 20.0 });
        let m = cam.transform(800.0, 600.0);
        assert!(approx_eq(m.m12, 390.0));
        assert!(approx_eq(m.m13, 280.0));
        assert!(approx_eq(m.m0, 1.0));
        assert!(approx_eq(m.m5, 1.0));
    }

    #[test]
    fn test_focus_maps_to_viewport_center() {
        let mut cam = Camera2D::default();
        let focus = Vector2 { x: -35.0, y: 120.0 };
        cam.set_position(focus);
        for (rotation, zoom) in [(0.0, 1.0), (0.7, 2.5), (FRAC_PI_2, 0.1), (3.0, 0.4)] {
            cam.set_rotation(rotation);
            cam.set_zoom(zoom);
            let p = cam.transform_point(focus, 1024.0, 768.0);
            assert!(approx_eq(p.x, 512.0), "x was {}", p.x);
            assert!(approx_eq(p.y, 384.0), "y was {}", p.y);
        }
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let cam = {
            let mut c = Camera2D::default();
            c.set_rotation(FRAC_PI_2);
            c
        };
        // One unit along x ends up one unit along y (screen space, y down).
        let p = cam.transform_point(Vector2 { x: 1.0, y: 0.0 }, 0.0, 0.0);
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.y, 1.0));
    }

    #[test]
    fn test_zero_viewport_is_origin_centered() {
        let cam = Camera2D::default();
        let p = cam.transform_point(Vector2 { x: 3.0, y: 4.0 }, 0.0, 0.0);
        assert!(approx_eq(p.x, 3.0));
        assert!(approx_eq(p.y, 4.0));
    }

    #[test]
    fn test_to_raylib_uses_degrees_and_center_offset() {
        let mut cam = Camera2D::default();
        cam.set_rotation(std::f32::consts::PI);
        cam.set_zoom(2.0);
        let rl = cam.to_raylib(640.0, 360.0);
        assert!(approx_eq(rl.rotation, 180.0));
        assert!(approx_eq(rl.offset.x, 320.0));
        assert!(approx_eq(rl.offset.y, 180.0));
        assert!(approx_eq(rl.zoom, 2.0));
    }
}
