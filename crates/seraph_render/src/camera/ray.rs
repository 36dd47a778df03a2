//! Per-pixel ray generation.
//!
//! Two constructions exist because neither is right all the time:
//!
//! - [`Ray::from_basis`] builds the ray from the orientation basis. Stable
//!   under the avatar's walk-bob animation, which perturbs the exact view
//!   matrix every frame.
//! - [`Ray::from_inverse_matrix`] unprojects through the inverse
//!   view-projection. Exact with respect to the depth buffer, which matters
//!   when flying, where basis rays visibly drift from the rendered scene.
//!
//! [`Ray::adaptive`] picks per the frame's flying flag. The branch is the
//! fix for a flicker artifact seen when the two constructions disagree at
//! the occlusion boundary; collapsing them to one method reintroduces it.
//!
//! UV coordinates are in `[0, 1]` with the origin at the bottom-left, the
//! same convention the shader library uses.

use seraph_shared::{Mat4, Vec2, Vec3};

use crate::camera::frame::CameraFrame;

/// A world-space camera ray for one screen position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Ray start, at the eye.
    pub origin: Vec3,
    /// Normalized direction.
    pub dir: Vec3,
}

impl Ray {
    /// Build a ray from the camera orientation basis.
    #[must_use]
    pub fn from_basis(uv: Vec2, frame: &CameraFrame) -> Self {
        let ndc = uv.to_ndc();
        let tan_half = (frame.fov_y_radians * 0.5).tan();
        let dir = frame.forward
            + frame.right * (ndc.x * tan_half * frame.aspect)
            + frame.up * (ndc.y * tan_half);
        Self {
            origin: frame.position,
            dir: dir.normalized(),
        }
    }

    /// Build a ray by unprojecting near- and far-plane points.
    ///
    /// `inv_view_proj` is expected to be camera-centered, so the unprojected
    /// points are camera-relative; `origin` supplies the world eye position.
    #[must_use]
    pub fn from_inverse_matrix(uv: Vec2, inv_view_proj: &Mat4, origin: Vec3) -> Self {
        let ndc = uv.to_ndc();
        let near_point = inv_view_proj.transform_point(Vec3::new(ndc.x, ndc.y, -1.0));
        let far_point = inv_view_proj.transform_point(Vec3::new(ndc.x, ndc.y, 1.0));
        Self {
            origin,
            dir: (far_point - near_point).normalized(),
        }
    }

    /// Basis ray while walking, matrix ray while flying.
    #[must_use]
    pub fn adaptive(uv: Vec2, frame: &CameraFrame) -> Self {
        if frame.flying {
            Self::from_inverse_matrix(uv, &frame.inv_view_proj, frame.position)
        } else {
            Self::from_basis(uv, frame)
        }
    }

    /// Point along the ray at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_frame() -> CameraFrame {
        CameraFrame::from_yaw_pitch(
            Vec3::new(12.0, 70.0, -5.0),
            38.0,
            -20.0,
            70.0f32.to_radians(),
            16.0 / 9.0,
        )
    }

    #[test]
    fn test_center_ray_is_forward() {
        let frame = test_frame();
        let ray = Ray::from_basis(Vec2::CENTER, &frame);
        assert!((ray.dir.x - frame.forward.x).abs() < 1e-6);
        assert!((ray.dir.y - frame.forward.y).abs() < 1e-6);
        assert!((ray.dir.z - frame.forward.z).abs() < 1e-6);
        assert_eq!(ray.origin, frame.position);
    }

    #[test]
    fn test_top_of_screen_tilts_toward_up() {
        let frame = CameraFrame::from_yaw_pitch(
            Vec3::ZERO,
            0.0,
            0.0,
            70.0f32.to_radians(),
            1.0,
        );
        let ray = Ray::from_basis(Vec2::new(0.5, 1.0), &frame);
        assert!(ray.dir.y > 0.3);
    }

    #[test]
    fn test_basis_and_matrix_rays_agree() {
        let frame = test_frame();
        for (u, v) in [(0.5, 0.5), (0.1, 0.85), (0.93, 0.2), (0.0, 0.0)] {
            let basis = Ray::from_basis(Vec2::new(u, v), &frame);
            let matrix =
                Ray::from_inverse_matrix(Vec2::new(u, v), &frame.inv_view_proj, frame.position);
            assert!(
                basis.dir.distance(matrix.dir) < 1e-3,
                "uv ({u}, {v}): {:?} vs {:?}",
                basis.dir,
                matrix.dir
            );
        }
    }

    #[test]
    fn test_adaptive_branches_on_flying() {
        let walking = test_frame();
        // Perturbed matrices stand in for the host's bob-animated ones.
        let skewed = walking.with_matrices(
            walking.view_proj,
            walking.inv_view_proj.mul(Mat4::from_cols([
                [1.0, 0.0, 0.0, 0.0],
                [0.02, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ])),
        );
        let flying = skewed.with_flying(true);

        let uv = Vec2::new(0.25, 0.7);
        assert_eq!(
            Ray::adaptive(uv, &skewed),
            Ray::from_basis(uv, &skewed),
            "walking must use the basis construction"
        );
        assert_eq!(
            Ray::adaptive(uv, &flying),
            Ray::from_inverse_matrix(uv, &flying.inv_view_proj, flying.position),
            "flying must use the matrix construction"
        );
        assert_ne!(Ray::adaptive(uv, &skewed), Ray::adaptive(uv, &flying));
    }

    #[test]
    fn test_point_at() {
        let ray = Ray {
            origin: Vec3::new(1.0, 2.0, 3.0),
            dir: Vec3::new(0.0, 0.0, 1.0),
        };
        assert_eq!(ray.point_at(4.0), Vec3::new(1.0, 2.0, 7.0));
    }
}
