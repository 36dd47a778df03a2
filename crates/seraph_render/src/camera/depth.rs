//! Depth-buffer linearization.

use seraph_shared::constants::{SKY_DEPTH_THRESHOLD, SKY_DISTANCE};
use seraph_shared::Vec3;

use crate::camera::frame::CameraFrame;

/// Convert a raw depth sample in `[0, 1]` to a world-space distance.
///
/// Assumes the host's GL-style projection (NDC z in `[-1, 1]` before the
/// viewport remap). Samples at or above [`SKY_DEPTH_THRESHOLD`] are sky -
/// the buffer clears to 1.0 and float error lands just below it - and map
/// to [`SKY_DISTANCE`] so sky never occludes an effect.
#[must_use]
pub fn linearize_depth(raw: f32, near: f32, far: f32) -> f32 {
    if raw >= SKY_DEPTH_THRESHOLD {
        return SKY_DISTANCE;
    }
    let ndc_z = raw * 2.0 - 1.0;
    (2.0 * near * far) / (far + near - ndc_z * (far - near))
}

/// Depth of a world position along the camera forward axis.
///
/// This is the value comparable to a linearized depth-buffer sample; plain
/// Euclidean distance overestimates off-axis and makes occlusion pop at
/// the screen edges.
#[must_use]
pub fn forward_depth(position: Vec3, frame: &CameraFrame) -> f32 {
    (position - frame.position).dot(frame.forward)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_and_far_endpoints() {
        let near = 0.05;
        let far = 1000.0;
        assert!((linearize_depth(0.0, near, far) - near).abs() < 1e-6);
        // Just under the sky threshold is still finite scene depth.
        let deep = linearize_depth(0.9998, near, far);
        assert!(deep > 100.0 && deep < far + 1.0);
    }

    #[test]
    fn test_sky_sentinel() {
        assert_eq!(linearize_depth(1.0, 0.05, 1000.0), SKY_DISTANCE);
        assert_eq!(linearize_depth(0.9999, 0.05, 1000.0), SKY_DISTANCE);
    }

    #[test]
    fn test_monotonic_in_raw_depth() {
        let near = 0.05;
        let far = 1000.0;
        let mut prev = 0.0;
        for step in 0..100 {
            let raw = step as f32 / 101.0;
            let lin = linearize_depth(raw, near, far);
            assert!(lin > prev);
            prev = lin;
        }
    }

    #[test]
    fn test_forward_depth_ignores_lateral_offset() {
        let frame = CameraFrame::from_yaw_pitch(
            Vec3::ZERO,
            0.0,
            0.0,
            70.0f32.to_radians(),
            16.0 / 9.0,
        );
        // Forward is +Z; lateral x offset must not change the z-depth.
        let straight = forward_depth(Vec3::new(0.0, 0.0, 10.0), &frame);
        let offset = forward_depth(Vec3::new(7.0, 0.0, 10.0), &frame);
        assert!((straight - 10.0).abs() < 1e-5);
        assert!((offset - 10.0).abs() < 1e-5);
        // Euclidean distance would have said ~12.2.
        assert!(Vec3::new(7.0, 0.0, 10.0).length() > 12.0);
    }

    #[test]
    fn test_behind_camera_is_negative() {
        let frame = CameraFrame::from_yaw_pitch(
            Vec3::ZERO,
            0.0,
            0.0,
            70.0f32.to_radians(),
            16.0 / 9.0,
        );
        assert!(forward_depth(Vec3::new(0.0, 0.0, -4.0), &frame) < 0.0);
    }
}
