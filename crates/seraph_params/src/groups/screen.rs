//! Screen-space post effects, distortion, compositing and the version lane.

use serde::{Deserialize, Serialize};

/// Screen-wide darkening, vignette and tint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenEffectsParams {
    /// Screen darkening (0-1)
    pub blackout: f32,
    /// Edge darkening (0-1)
    pub vignette_amount: f32,
    /// Vignette size (0.2-1.0)
    pub vignette_radius: f32,
    /// Color tint strength (0-1)
    pub tint_amount: f32,
}

impl ScreenEffectsParams {
    /// Everything off.
    pub const NONE: Self = Self::new(1.0, 0.0, 0.5, 0.0);

    /// Creates a screen effects group.
    #[must_use]
    pub const fn new(blackout: f32, vignette_amount: f32, vignette_radius: f32, tint_amount: f32) -> Self {
        Self { blackout, vignette_amount, vignette_radius, tint_amount }
    }

    /// Replaces the blackout.
    #[must_use]
    pub fn with_blackout(mut self, v: f32) -> Self {
        self.blackout = v;
        self
    }

    /// Replaces the vignette amount.
    #[must_use]
    pub fn with_vignette_amount(mut self, v: f32) -> Self {
        self.vignette_amount = v;
        self
    }

    /// Replaces the vignette radius.
    #[must_use]
    pub fn with_vignette_radius(mut self, v: f32) -> Self {
        self.vignette_radius = v;
        self
    }

    /// Replaces the tint strength.
    #[must_use]
    pub fn with_tint_amount(mut self, v: f32) -> Self {
        self.tint_amount = v;
        self
    }
}

impl Default for ScreenEffectsParams {
    fn default() -> Self {
        Self::NONE
    }
}

/// Space distortion around the field.
///
/// The radius lane doubles as the visual influence range: the registry
/// extends a field's render distance by 1.5x this value so the effect is
/// resident before the camera enters its influence zone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistortionParams {
    /// Distortion intensity
    pub strength: f32,
    /// Distortion falloff radius in blocks
    pub radius: f32,
    /// Ripple frequency
    pub frequency: f32,
    /// Animation speed
    pub speed: f32,
}

impl DistortionParams {
    /// Stock proximity response.
    pub const NONE: Self = Self::new(1.0, 1000.0, 0.1, 1.0);

    /// Creates a distortion group.
    #[must_use]
    pub const fn new(strength: f32, radius: f32, frequency: f32, speed: f32) -> Self {
        Self { strength, radius, frequency, speed }
    }

    /// Replaces the strength.
    #[must_use]
    pub fn with_strength(mut self, v: f32) -> Self {
        self.strength = v;
        self
    }

    /// Replaces the falloff radius.
    #[must_use]
    pub fn with_radius(mut self, v: f32) -> Self {
        self.radius = v;
        self
    }

    /// Replaces the ripple frequency.
    #[must_use]
    pub fn with_frequency(mut self, v: f32) -> Self {
        self.frequency = v;
        self
    }

    /// Replaces the animation speed.
    #[must_use]
    pub fn with_speed(mut self, v: f32) -> Self {
        self.speed = v;
        self
    }
}

impl Default for DistortionParams {
    fn default() -> Self {
        Self::NONE
    }
}

/// Scene compositing controls.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendParams {
    /// Unused lane (was opacity)
    pub reserved: f32,
    /// Composite mode: 0=normal, 1=additive, 2=multiply, 3=screen
    pub blend_mode: f32,
    /// Fade-in distance
    pub fade_in: f32,
    /// Fade-out distance
    pub fade_out: f32,
}

impl BlendParams {
    /// Additive compositing, no distance fades.
    pub const DEFAULT: Self = Self::new(1.0, 1.0, 0.0, 0.0);

    /// Creates a blend group.
    #[must_use]
    pub const fn new(reserved: f32, blend_mode: f32, fade_in: f32, fade_out: f32) -> Self {
        Self { reserved, blend_mode, fade_in, fade_out }
    }

    /// Replaces the composite mode.
    #[must_use]
    pub fn with_blend_mode(mut self, v: f32) -> Self {
        self.blend_mode = v;
        self
    }

    /// Replaces the fade-in distance.
    #[must_use]
    pub fn with_fade_in(mut self, v: f32) -> Self {
        self.fade_in = v;
        self
    }

    /// Replaces the fade-out distance.
    #[must_use]
    pub fn with_fade_out(mut self, v: f32) -> Self {
        self.fade_out = v;
        self
    }
}

impl Default for BlendParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Shader version selector, feature flags and prototyping lanes.
///
/// The `aux` lane does not survive packing as-is: the serializer
/// overwrites it with the field's color-blend-mode shader value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservedParams {
    /// Shader version within the family (1.0 = V1, 2.0 = V2, ...)
    pub version: f32,
    /// Bit 0 = external rays, bit 1 = corona
    pub ray_corona_flags: f32,
    /// Prototyping lane, claimed by the color blend mode at pack time
    pub aux: f32,
    /// Ray discreteness for the eruption variant
    pub eruption_contrast: f32,
}

impl ReservedParams {
    /// V1 with corona on and external rays off.
    pub const DEFAULT: Self = Self::new(1.0, 2.0, 0.0, 2.0);

    /// Creates a reserved group.
    #[must_use]
    pub const fn new(version: f32, ray_corona_flags: f32, aux: f32, eruption_contrast: f32) -> Self {
        Self { version, ray_corona_flags, aux, eruption_contrast }
    }

    /// Whether external rays are enabled (flag bit 0).
    #[must_use]
    pub fn show_external_rays(&self) -> bool {
        (self.ray_corona_flags as i32) & 1 != 0
    }

    /// Whether the corona is enabled (flag bit 1).
    #[must_use]
    pub fn show_corona(&self) -> bool {
        (self.ray_corona_flags as i32) & 2 != 0
    }

    /// Replaces the version.
    #[must_use]
    pub fn with_version(mut self, v: f32) -> Self {
        self.version = v;
        self
    }

    /// Replaces the raw flag lane.
    #[must_use]
    pub fn with_ray_corona_flags(mut self, v: f32) -> Self {
        self.ray_corona_flags = v;
        self
    }

    /// Sets or clears the external-rays flag, preserving the corona bit.
    #[must_use]
    pub fn with_show_external_rays(mut self, on: bool) -> Self {
        let corona = if self.show_corona() { 2.0 } else { 0.0 };
        self.ray_corona_flags = if on { 1.0 } else { 0.0 } + corona;
        self
    }

    /// Sets or clears the corona flag, preserving the rays bit.
    #[must_use]
    pub fn with_show_corona(mut self, on: bool) -> Self {
        let rays = if self.show_external_rays() { 1.0 } else { 0.0 };
        self.ray_corona_flags = rays + if on { 2.0 } else { 0.0 };
        self
    }

    /// Replaces the aux lane.
    #[must_use]
    pub fn with_aux(mut self, v: f32) -> Self {
        self.aux = v;
        self
    }

    /// Replaces the eruption contrast.
    #[must_use]
    pub fn with_eruption_contrast(mut self, v: f32) -> Self {
        self.eruption_contrast = v;
        self
    }
}

impl Default for ReservedParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_bits_are_independent() {
        let r = ReservedParams::DEFAULT;
        assert!(!r.show_external_rays());
        assert!(r.show_corona());

        let both = r.with_show_external_rays(true);
        assert!(both.show_external_rays());
        assert!(both.show_corona());
        assert_eq!(both.ray_corona_flags, 3.0);

        let neither = both.with_show_corona(false).with_show_external_rays(false);
        assert_eq!(neither.ray_corona_flags, 0.0);
    }
}
