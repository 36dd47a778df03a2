//! # Occlusion Visibility
//!
//! How visible is an effect whose forward-axis depth puts it behind scene
//! geometry? A hard cutoff looks wrong when an effect's bounding sphere
//! straddles a wall, so visibility instead falls off linearly over a bleed
//! range and is capped: an occluded effect may stay faintly visible, never
//! fully bright.
//!
//! Inputs are forward-axis depths (see
//! [`forward_depth`](crate::camera::forward_depth)), the only quantity
//! comparable to a linearized depth-buffer sample.

use seraph_shared::smoothstep;

/// Visibility factor in `[0, 1]` for an effect at `effect_z` against scene
/// geometry at `scene_z`.
///
/// Returns 1.0 at or in front of the scene surface. Behind it, visibility
/// starts at `max_bleed` and falls linearly to zero across `bleed_range`
/// world units.
#[must_use]
pub fn visibility(effect_z: f32, scene_z: f32, bleed_range: f32, max_bleed: f32) -> f32 {
    if effect_z <= scene_z {
        return 1.0;
    }
    if bleed_range <= 0.0 {
        return 0.0;
    }
    let behind = effect_z - scene_z;
    (1.0 - behind / bleed_range).clamp(0.0, max_bleed)
}

/// Smoothstep-edged variant for corona and glow shapes, where the linear
/// ramp's derivative kink reads as a visible band.
#[must_use]
pub fn visibility_soft(effect_z: f32, scene_z: f32, bleed_range: f32, max_bleed: f32) -> f32 {
    if effect_z <= scene_z {
        return 1.0;
    }
    if bleed_range <= 0.0 {
        return 0.0;
    }
    let behind = effect_z - scene_z;
    (smoothstep(bleed_range, 0.0, behind)).clamp(0.0, max_bleed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLEED: f32 = 5.0;
    const MAX: f32 = 0.3;

    #[test]
    fn test_in_front_is_fully_visible() {
        assert_eq!(visibility(10.0, 20.0, BLEED, MAX), 1.0);
        assert_eq!(visibility(20.0, 20.0, BLEED, MAX), 1.0);
        assert_eq!(visibility_soft(10.0, 20.0, BLEED, MAX), 1.0);
    }

    #[test]
    fn test_behind_is_capped_at_max_bleed() {
        // Barely behind: the linear ramp would be ~1.0 but the cap holds.
        let just_behind = visibility(20.01, 20.0, BLEED, MAX);
        assert_eq!(just_behind, MAX);

        // Anywhere in the bleed range stays within [0, MAX].
        for step in 0..50 {
            let z = 20.0 + (step as f32 / 50.0) * BLEED;
            let vis = visibility(z + f32::EPSILON, 20.0, BLEED, MAX);
            assert!((0.0..=MAX).contains(&vis));
        }
    }

    #[test]
    fn test_zero_at_and_past_bleed_range() {
        assert_eq!(visibility(25.0, 20.0, BLEED, MAX), 0.0);
        assert_eq!(visibility(80.0, 20.0, BLEED, MAX), 0.0);
        assert_eq!(visibility_soft(25.0, 20.0, BLEED, MAX), 0.0);
    }

    #[test]
    fn test_monotonic_falloff_behind() {
        let mut prev = f32::INFINITY;
        for step in 0..=20 {
            let behind = (step as f32 / 20.0) * BLEED;
            let vis = visibility(20.0 + behind + 0.001, 20.0, BLEED, 1.0);
            assert!(vis <= prev);
            prev = vis;
        }
    }

    #[test]
    fn test_soft_variant_shares_boundaries_with_linear() {
        let soft_mid = visibility_soft(22.5, 20.0, BLEED, 1.0);
        let hard_mid = visibility(22.5, 20.0, BLEED, 1.0);
        // Same midpoint, same endpoints, different shoulder shape.
        assert!((soft_mid - hard_mid).abs() < 1e-6);
        let soft_near = visibility_soft(21.0, 20.0, BLEED, 1.0);
        let hard_near = visibility(21.0, 20.0, BLEED, 1.0);
        assert!(soft_near > hard_near);
    }

    #[test]
    fn test_degenerate_bleed_range() {
        assert_eq!(visibility(21.0, 20.0, 0.0, MAX), 0.0);
        assert_eq!(visibility_soft(21.0, 20.0, -1.0, MAX), 0.0);
    }
}
