//! Camera frame capture.
//!
//! A [`CameraFrame`] is an immutable snapshot of everything the packer and
//! the shaders need to know about the camera for one frame: world position,
//! orientation basis, projection parameters, and the view-projection pair.
//!
//! The matrices are camera-centered: the view transform is built with the
//! eye at the origin, and world positions are made camera-relative at pack
//! time. Far from the world origin this keeps 32-bit depth and ray math
//! precise where an absolute-coordinate formulation visibly jitters.

use seraph_shared::constants::{DEFAULT_FAR_PLANE, DEFAULT_FOV_DEGREES, DEFAULT_NEAR_PLANE};
use seraph_shared::{Mat4, Quaternion, Vec3};

/// Immutable snapshot of camera state for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrame {
    /// World-space eye position.
    pub position: Vec3,
    /// Normalized view direction.
    pub forward: Vec3,
    /// Normalized right vector.
    pub right: Vec3,
    /// Normalized up vector.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y_radians: f32,
    /// Viewport width / height.
    pub aspect: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Host avatar is flying; selects matrix-exact ray generation.
    pub flying: bool,
    /// Sub-tick interpolation factor the host used for this frame.
    pub tick_delta: f32,
    /// Camera-centered view-projection matrix.
    pub view_proj: Mat4,
    /// Inverse of [`view_proj`](Self::view_proj).
    pub inv_view_proj: Mat4,
}

impl CameraFrame {
    /// Capture a frame from a host orientation quaternion.
    ///
    /// The basis comes from rotating the view-space axes: forward is the
    /// rotated `-Z`, right the rotated `+X`, up the rotated `+Y`.
    #[must_use]
    pub fn from_orientation(
        position: Vec3,
        rotation: Quaternion,
        fov_y_radians: f32,
        aspect: f32,
    ) -> Self {
        let forward = rotation.rotate(Vec3::new(0.0, 0.0, -1.0));
        let right = rotation.rotate(Vec3::X);
        let up = rotation.rotate(Vec3::Y);
        Self::from_basis(position, forward, right, up, fov_y_radians, aspect)
    }

    /// Capture a frame from yaw/pitch angles in degrees.
    ///
    /// Yaw 0 looks toward `+Z`, yaw 90 toward `-X`. Pitch is clamped to
    /// ±89° against gimbal lock; looking within a hair of straight up or
    /// down degenerates the horizontal right vector, which then falls back
    /// to world `+X`.
    #[must_use]
    pub fn from_yaw_pitch(
        position: Vec3,
        yaw_degrees: f32,
        pitch_degrees: f32,
        fov_y_radians: f32,
        aspect: f32,
    ) -> Self {
        let yaw = yaw_degrees.to_radians();
        let pitch = pitch_degrees.to_radians().clamp(
            (-89.0f32).to_radians(),
            89.0f32.to_radians(),
        );

        let cos_pitch = pitch.cos();
        let forward = Vec3::new(
            -yaw.sin() * cos_pitch,
            -pitch.sin(),
            yaw.cos() * cos_pitch,
        );

        // cross(forward, world up), with the y term already zero.
        let mut right = Vec3::new(-forward.z, 0.0, forward.x);
        let right_len = (right.x * right.x + right.z * right.z).sqrt();
        if right_len < 1e-3 {
            right = Vec3::X;
        } else {
            right = right * (1.0 / right_len);
        }
        let up = right.cross(forward);

        Self::from_basis(position, forward, right, up, fov_y_radians, aspect)
    }

    fn from_basis(
        position: Vec3,
        forward: Vec3,
        right: Vec3,
        up: Vec3,
        fov_y_radians: f32,
        aspect: f32,
    ) -> Self {
        let mut frame = Self {
            position,
            forward,
            right,
            up,
            fov_y_radians,
            aspect,
            near: DEFAULT_NEAR_PLANE,
            far: DEFAULT_FAR_PLANE,
            flying: false,
            tick_delta: 0.0,
            view_proj: Mat4::IDENTITY,
            inv_view_proj: Mat4::IDENTITY,
        };
        frame.rebuild_matrices();
        frame
    }

    /// Replace the clip planes and rebuild the matrices.
    #[must_use]
    pub fn with_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self.rebuild_matrices();
        self
    }

    /// Set the flying flag.
    #[must_use]
    pub fn with_flying(mut self, flying: bool) -> Self {
        self.flying = flying;
        self
    }

    /// Set the sub-tick interpolation factor.
    #[must_use]
    pub fn with_tick_delta(mut self, tick_delta: f32) -> Self {
        self.tick_delta = tick_delta;
        self
    }

    /// Override both matrices with host-supplied exact values.
    ///
    /// Use when the host renders the depth buffer with matrices that are
    /// not byte-identical to the ones derived here; apply after any
    /// `with_planes` call, which recomputes them.
    #[must_use]
    pub fn with_matrices(mut self, view_proj: Mat4, inv_view_proj: Mat4) -> Self {
        self.view_proj = view_proj;
        self.inv_view_proj = inv_view_proj;
        self
    }

    fn rebuild_matrices(&mut self) {
        // Eye at the origin; positions go camera-relative at pack time.
        let view = Mat4::look_at(Vec3::ZERO, self.forward, self.up);
        let proj = Mat4::perspective(self.fov_y_radians, self.aspect, self.near, self.far);
        self.view_proj = proj.mul(view);
        self.inv_view_proj = self.view_proj.inverse_or_identity();
    }

    /// World position offset from the eye along the camera basis.
    #[must_use]
    pub fn relative_position(&self, right: f32, up: f32, forward: f32) -> Vec3 {
        self.position + self.right * right + self.up * up + self.forward * forward
    }

    /// World position straight ahead at the given distance.
    #[must_use]
    pub fn position_in_front(&self, distance: f32) -> Vec3 {
        self.relative_position(0.0, 0.0, distance)
    }
}

impl Default for CameraFrame {
    /// Looking toward `+Z` from sea level, 70° FOV, 16:9.
    fn default() -> Self {
        Self::from_yaw_pitch(
            Vec3::new(0.0, 64.0, 0.0),
            0.0,
            0.0,
            DEFAULT_FOV_DEGREES.to_radians(),
            16.0 / 9.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOV: f32 = 1.2217305; // 70 degrees

    fn assert_vec_near(a: Vec3, b: Vec3, eps: f32) {
        assert!(
            (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps && (a.z - b.z).abs() < eps,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_yaw_zero_looks_south() {
        let frame = CameraFrame::from_yaw_pitch(Vec3::ZERO, 0.0, 0.0, FOV, 16.0 / 9.0);
        assert_vec_near(frame.forward, Vec3::new(0.0, 0.0, 1.0), 1e-6);
        // Facing +Z, screen-right is -X and up stays world up.
        assert_vec_near(frame.right, Vec3::new(-1.0, 0.0, 0.0), 1e-6);
        assert_vec_near(frame.up, Vec3::new(0.0, 1.0, 0.0), 1e-6);
    }

    #[test]
    fn test_yaw_ninety_looks_west() {
        let frame = CameraFrame::from_yaw_pitch(Vec3::ZERO, 90.0, 0.0, FOV, 16.0 / 9.0);
        assert_vec_near(frame.forward, Vec3::new(-1.0, 0.0, 0.0), 1e-6);
    }

    #[test]
    fn test_pitch_positive_looks_down() {
        let frame = CameraFrame::from_yaw_pitch(Vec3::ZERO, 0.0, 45.0, FOV, 16.0 / 9.0);
        assert!(frame.forward.y < -0.7 && frame.forward.y > -0.71);
        // Right stays horizontal.
        assert!(frame.right.y.abs() < 1e-6);
    }

    #[test]
    fn test_extreme_pitch_clamped_and_right_defined() {
        let frame = CameraFrame::from_yaw_pitch(Vec3::ZERO, 0.0, 270.0, FOV, 16.0 / 9.0);
        // Clamped at 89 degrees, still a hair of horizontal forward left.
        assert!(frame.forward.y >= -1.0);
        assert!(frame.forward.length() > 0.999 && frame.forward.length() < 1.001);
        assert!(frame.right.length() > 0.999);
    }

    #[test]
    fn test_orientation_basis_from_quaternion() {
        // Quarter turn about Y: view -Z rotates to -X.
        let quarter = Quaternion::from_axis_angle(Vec3::Y, std::f32::consts::FRAC_PI_2);
        let from_quat = CameraFrame::from_orientation(Vec3::ZERO, quarter, FOV, 16.0 / 9.0);
        assert_vec_near(from_quat.forward, Vec3::new(-1.0, 0.0, 0.0), 1e-5);
        assert_vec_near(from_quat.up, Vec3::Y, 1e-5);

        // Identity rotation is the plain view basis.
        let ident = CameraFrame::from_orientation(Vec3::ZERO, Quaternion::IDENTITY, FOV, 1.0);
        assert_vec_near(ident.forward, Vec3::new(0.0, 0.0, -1.0), 1e-6);
        assert_vec_near(ident.right, Vec3::X, 1e-6);
    }

    #[test]
    fn test_matrices_are_inverses() {
        let frame = CameraFrame::from_yaw_pitch(
            Vec3::new(100.0, 70.0, -40.0),
            33.0,
            -12.0,
            FOV,
            16.0 / 9.0,
        );
        let product = frame.view_proj.mul(frame.inv_view_proj);
        for c in 0..4 {
            for r in 0..4 {
                let expected = if c == r { 1.0 } else { 0.0 };
                assert!((product.cols[c][r] - expected).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_with_planes_rebuilds() {
        let frame = CameraFrame::default();
        let far_frame = frame.with_planes(0.1, 4000.0);
        assert_ne!(frame.view_proj, far_frame.view_proj);
        assert_eq!(far_frame.far, 4000.0);
    }

    #[test]
    fn test_position_in_front() {
        let frame = CameraFrame::from_yaw_pitch(Vec3::new(0.0, 64.0, 0.0), 0.0, 0.0, FOV, 1.0);
        assert_vec_near(frame.position_in_front(5.0), Vec3::new(0.0, 64.0, 5.0), 1e-5);
    }
}
