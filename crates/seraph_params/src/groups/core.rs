//! Position, palette, animation and shaping groups.

use seraph_shared::Argb;
use serde::{Deserialize, Serialize};

use crate::EffectType;

/// Field position and radius in world space.
///
/// Not part of [`FieldConfig`](crate::FieldConfig): the live center and
/// radius belong to the instance and are supplied at pack time, already
/// interpolated. This group exists for the uniform slot itself and for
/// authoring defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionParams {
    /// World-space center X
    pub center_x: f32,
    /// World-space center Y
    pub center_y: f32,
    /// World-space center Z
    pub center_z: f32,
    /// Field radius in blocks
    pub radius: f32,
}

impl PositionParams {
    /// Origin with the standard small-orb radius.
    pub const DEFAULT: Self = Self::new(0.0, 0.0, 0.0, 3.0);

    /// Creates a position group.
    #[must_use]
    pub const fn new(center_x: f32, center_y: f32, center_z: f32, radius: f32) -> Self {
        Self { center_x, center_y, center_z, radius }
    }

    /// Replaces the center, keeping the radius.
    #[must_use]
    pub fn with_center(mut self, x: f32, y: f32, z: f32) -> Self {
        self.center_x = x;
        self.center_y = y;
        self.center_z = z;
        self
    }

    /// Replaces the radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

impl Default for PositionParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Five-color palette, one uniform slot per color.
///
/// Meaning shifts by effect family: orbs read primary as core, secondary
/// as edge, tertiary as interior tint; the volumetric star uses all five;
/// geodesic reads primary as face, secondary as back, tertiary as edge
/// glow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorParams {
    /// Core / main color
    pub primary: Argb,
    /// Edge / accent color
    pub secondary: Argb,
    /// Outer glow / background tint
    pub tertiary: Argb,
    /// Bright highlight
    pub highlight: Argb,
    /// Ray / corona tint
    pub ray: Argb,
}

impl ColorParams {
    /// White core and edge, blue interior, gold rays.
    pub const DEFAULT: Self = Self::new(
        Argb(0xFFFF_FFFF),
        Argb(0xFFFF_FFFF),
        Argb(0xFF1A_66CC),
        Argb(0xFFFF_FFFF),
        Argb(0xFFFF_9933),
    );

    /// Creates a five-color palette.
    #[must_use]
    pub const fn new(primary: Argb, secondary: Argb, tertiary: Argb, highlight: Argb, ray: Argb) -> Self {
        Self { primary, secondary, tertiary, highlight, ray }
    }

    /// Three-color form; highlight and ray take their stock values.
    #[must_use]
    pub const fn of_three(primary: Argb, secondary: Argb, tertiary: Argb) -> Self {
        Self::new(primary, secondary, tertiary, Argb(0xFFFF_FFFF), Argb(0xFFFF_9933))
    }

    /// Replaces the primary color.
    #[must_use]
    pub fn with_primary(mut self, c: Argb) -> Self {
        self.primary = c;
        self
    }

    /// Replaces the secondary color.
    #[must_use]
    pub fn with_secondary(mut self, c: Argb) -> Self {
        self.secondary = c;
        self
    }

    /// Replaces the tertiary color.
    #[must_use]
    pub fn with_tertiary(mut self, c: Argb) -> Self {
        self.tertiary = c;
        self
    }

    /// Replaces the highlight color.
    #[must_use]
    pub fn with_highlight(mut self, c: Argb) -> Self {
        self.highlight = c;
        self
    }

    /// Replaces the ray color.
    #[must_use]
    pub fn with_ray(mut self, c: Argb) -> Self {
        self.ray = c;
        self
    }
}

impl Default for ColorParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Base animation and the multi-speed channels. Two uniform slots.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimParams {
    /// Animation phase offset
    pub phase: f32,
    /// Base speed multiplier (0.5-3.0)
    pub speed: f32,
    /// Overall brightness (0-2)
    pub intensity: f32,
    /// Effect family
    pub effect_type: EffectType,
    /// Fast detail channel (0-10)
    pub speed_high: f32,
    /// Slow base-movement channel (0-10)
    pub speed_low: f32,
    /// Ray / corona channel (0-10)
    pub speed_ray: f32,
    /// Ring / rotation channel (0-10)
    pub speed_ring: f32,
}

impl AnimParams {
    /// Stock energy-orb animation.
    pub const DEFAULT: Self =
        Self::new(0.0, 1.0, 1.2, EffectType::EnergyOrb, 2.0, 2.0, 5.0, 2.0);

    /// Creates an animation group.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        phase: f32,
        speed: f32,
        intensity: f32,
        effect_type: EffectType,
        speed_high: f32,
        speed_low: f32,
        speed_ray: f32,
        speed_ring: f32,
    ) -> Self {
        Self { phase, speed, intensity, effect_type, speed_high, speed_low, speed_ray, speed_ring }
    }

    /// Replaces the phase offset.
    #[must_use]
    pub fn with_phase(mut self, v: f32) -> Self {
        self.phase = v;
        self
    }

    /// Replaces the base speed.
    #[must_use]
    pub fn with_speed(mut self, v: f32) -> Self {
        self.speed = v;
        self
    }

    /// Replaces the intensity.
    #[must_use]
    pub fn with_intensity(mut self, v: f32) -> Self {
        self.intensity = v;
        self
    }

    /// Replaces the effect family.
    #[must_use]
    pub fn with_effect_type(mut self, t: EffectType) -> Self {
        self.effect_type = t;
        self
    }

    /// Replaces the fast detail channel.
    #[must_use]
    pub fn with_speed_high(mut self, v: f32) -> Self {
        self.speed_high = v;
        self
    }

    /// Replaces the slow movement channel.
    #[must_use]
    pub fn with_speed_low(mut self, v: f32) -> Self {
        self.speed_low = v;
        self
    }

    /// Replaces the ray channel.
    #[must_use]
    pub fn with_speed_ray(mut self, v: f32) -> Self {
        self.speed_ray = v;
        self
    }

    /// Replaces the ring channel.
    #[must_use]
    pub fn with_speed_ring(mut self, v: f32) -> Self {
        self.speed_ring = v;
        self
    }
}

impl Default for AnimParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Timing modifiers for the layered noise animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimTimingParams {
    /// Global time multiplier
    pub time_scale: f32,
    /// First radial noise speed
    pub radial_speed_1: f32,
    /// Second radial noise speed
    pub radial_speed_2: f32,
    /// Axial (depth) animation speed
    pub axial_speed: f32,
}

impl AnimTimingParams {
    /// Slow drift tuned for the stock orb.
    pub const DEFAULT: Self = Self::new(0.1, 0.35, 0.15, 0.015);

    /// Creates a timing group.
    #[must_use]
    pub const fn new(time_scale: f32, radial_speed_1: f32, radial_speed_2: f32, axial_speed: f32) -> Self {
        Self { time_scale, radial_speed_1, radial_speed_2, axial_speed }
    }

    /// Replaces the global time multiplier.
    #[must_use]
    pub fn with_time_scale(mut self, v: f32) -> Self {
        self.time_scale = v;
        self
    }

    /// Replaces the first radial speed.
    #[must_use]
    pub fn with_radial_speed_1(mut self, v: f32) -> Self {
        self.radial_speed_1 = v;
        self
    }

    /// Replaces the second radial speed.
    #[must_use]
    pub fn with_radial_speed_2(mut self, v: f32) -> Self {
        self.radial_speed_2 = v;
        self
    }

    /// Replaces the axial speed.
    #[must_use]
    pub fn with_axial_speed(mut self, v: f32) -> Self {
        self.axial_speed = v;
        self
    }
}

impl Default for AnimTimingParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Core size and edge shaping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreEdgeParams {
    /// Core size relative to field radius (0.05-0.5)
    pub core_size: f32,
    /// Edge ring sharpness (1-10)
    pub edge_sharpness: f32,
    /// 0=sphere, 1=torus, 2=cylinder, 3=prism
    pub shape_type: f32,
    /// Core glow falloff power (1-100)
    pub core_falloff: f32,
}

impl CoreEdgeParams {
    /// Stock sphere shaping.
    pub const DEFAULT: Self = Self::new(0.5, 4.0, 0.0, 4.0);

    /// Creates a core/edge group.
    #[must_use]
    pub const fn new(core_size: f32, edge_sharpness: f32, shape_type: f32, core_falloff: f32) -> Self {
        Self { core_size, edge_sharpness, shape_type, core_falloff }
    }

    /// Replaces the core size.
    #[must_use]
    pub fn with_core_size(mut self, v: f32) -> Self {
        self.core_size = v;
        self
    }

    /// Replaces the edge sharpness.
    #[must_use]
    pub fn with_edge_sharpness(mut self, v: f32) -> Self {
        self.edge_sharpness = v;
        self
    }

    /// Replaces the shape selector.
    #[must_use]
    pub fn with_shape_type(mut self, v: f32) -> Self {
        self.shape_type = v;
        self
    }

    /// Replaces the core falloff power.
    #[must_use]
    pub fn with_core_falloff(mut self, v: f32) -> Self {
        self.core_falloff = v;
        self
    }
}

impl Default for CoreEdgeParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Distance-based falloff for corona and glow.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FalloffParams {
    /// Distance fade exponent
    pub fade_power: f32,
    /// Fade distance multiplier
    pub fade_scale: f32,
    /// Inside-core falloff power
    pub inside_falloff_power: f32,
    /// Corona edge threshold
    pub corona_edge: f32,
}

impl FalloffParams {
    /// Stock falloff curve.
    pub const DEFAULT: Self = Self::new(0.5, 2.0, 24.0, 1.1);

    /// Creates a falloff group.
    #[must_use]
    pub const fn new(fade_power: f32, fade_scale: f32, inside_falloff_power: f32, corona_edge: f32) -> Self {
        Self { fade_power, fade_scale, inside_falloff_power, corona_edge }
    }

    /// Replaces the fade exponent.
    #[must_use]
    pub fn with_fade_power(mut self, v: f32) -> Self {
        self.fade_power = v;
        self
    }

    /// Replaces the fade scale.
    #[must_use]
    pub fn with_fade_scale(mut self, v: f32) -> Self {
        self.fade_scale = v;
        self
    }

    /// Replaces the inside falloff power.
    #[must_use]
    pub fn with_inside_falloff_power(mut self, v: f32) -> Self {
        self.inside_falloff_power = v;
        self
    }

    /// Replaces the corona edge threshold.
    #[must_use]
    pub fn with_corona_edge(mut self, v: f32) -> Self {
        self.corona_edge = v;
        self
    }
}

impl Default for FalloffParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutator_touches_one_field() {
        let base = AnimParams::DEFAULT;
        let changed = base.with_intensity(1.9);
        assert_eq!(changed.intensity, 1.9);
        assert_eq!(changed.phase, base.phase);
        assert_eq!(changed.speed, base.speed);
        assert_eq!(changed.effect_type, base.effect_type);
        assert_eq!(changed.speed_high, base.speed_high);
        assert_eq!(changed.speed_low, base.speed_low);
        assert_eq!(changed.speed_ray, base.speed_ray);
        assert_eq!(changed.speed_ring, base.speed_ring);
    }

    #[test]
    fn test_of_three_fills_stock_accents() {
        let c = ColorParams::of_three(Argb(0xFFFF_FF00), Argb(0xFFFF_6600), Argb(0xFF33_0000));
        assert_eq!(c.highlight, Argb(0xFFFF_FFFF));
        assert_eq!(c.ray, Argb(0xFFFF_9933));
    }
}
