//! The full effect configuration aggregate.

use serde::{Deserialize, Serialize};

use crate::groups::*;
use crate::{ColorBlendMode, EffectType};

/// Complete visual configuration for one field.
///
/// Immutable value: any change produces a whole new config, either
/// through a `with_*` mutator or by thawing into a [`ConfigStaging`],
/// editing freely, and freezing again. Group declaration order mirrors
/// the uniform block; the serializer relies on it.
///
/// `color_blend` is the one member without its own slot: the serializer
/// folds its shader value into the reserved group's aux lane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Five-color palette (5 slots)
    pub colors: ColorParams,
    /// Base animation and multi-speed channels (2 slots)
    pub anim: AnimParams,
    /// Noise animation timing
    pub anim_timing: AnimTimingParams,
    /// Core size and edge shaping
    pub core_edge: CoreEdgeParams,
    /// Distance falloff
    pub falloff: FalloffParams,
    /// Base noise shaping
    pub noise_config: NoiseConfigParams,
    /// FBM layering; octaves is the warm-up target
    pub noise_detail: NoiseDetailParams,
    /// Radial glow lines
    pub glow_line: GlowLineParams,
    /// Corona / outer glow
    pub corona: CoronaParams,
    /// SDF tile geometry
    pub geometry: GeometryParams,
    /// Cell grid extrusion
    pub geometry_grid: GeometryGridParams,
    /// Model rotation and scale
    pub transform: TransformParams,
    /// Lighting response
    pub lighting: LightingParams,
    /// Scene cycle timing
    pub timing: TimingParams,
    /// Screen-wide post effects
    pub screen: ScreenEffectsParams,
    /// Space distortion and influence range
    pub distortion: DistortionParams,
    /// Scene compositing
    pub blend: BlendParams,
    /// Version, flags and prototyping lanes
    pub reserved: ReservedParams,
    /// V2 corona detail
    pub v2_corona: V2CoronaDetail,
    /// V2 core detail
    pub v2_core: V2CoreDetail,
    /// V2 edge detail
    pub v2_edge: V2EdgeDetail,
    /// V2 line-pattern detail
    pub v2_lines: V2LinesDetail,
    /// V2 alpha and ray detail
    pub v2_alpha: V2AlphaDetail,
    /// Pulsar flames (2 slots)
    pub flames: FlamesParams,
    /// Geodesic animation
    pub geo_anim: GeoAnimParams,
    /// Electric plasma texture
    pub v8_plasma: V8PlasmaParams,
    /// Electric rings (2 slots)
    pub v8_ring: V8RingParams,
    /// Electric corona envelope
    pub v8_corona: V8CoronaParams,
    /// Electric core shaping
    pub v8_electric: V8ElectricParams,
    /// How authored colors combine with the procedural base
    pub color_blend: ColorBlendMode,
}

impl FieldConfig {
    // ── Convenience accessors ────────────────────────────────────────

    /// Effect family.
    #[must_use]
    pub const fn effect_type(&self) -> EffectType {
        self.anim.effect_type
    }

    /// Overall brightness.
    #[must_use]
    pub const fn intensity(&self) -> f32 {
        self.anim.intensity
    }

    /// Base animation speed.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.anim.speed
    }

    /// Animation phase offset.
    #[must_use]
    pub const fn phase(&self) -> f32 {
        self.anim.phase
    }

    /// Shader version within the family.
    #[must_use]
    pub fn version(&self) -> i32 {
        self.reserved.version as i32
    }

    /// Visual influence range in blocks.
    #[must_use]
    pub const fn distortion_radius(&self) -> f32 {
        self.distortion.radius
    }

    /// Color blend mode.
    #[must_use]
    pub const fn blend_mode(&self) -> ColorBlendMode {
        self.color_blend
    }

    /// Whether external rays are enabled.
    #[must_use]
    pub fn show_external_rays(&self) -> bool {
        self.reserved.show_external_rays()
    }

    /// Whether the corona is enabled.
    #[must_use]
    pub fn show_corona(&self) -> bool {
        self.reserved.show_corona()
    }

    /// Core size relative to the field radius.
    #[must_use]
    pub const fn core_size(&self) -> f32 {
        self.core_edge.core_size
    }

    /// Edge ring sharpness.
    #[must_use]
    pub const fn edge_sharpness(&self) -> f32 {
        self.core_edge.edge_sharpness
    }

    // ── Field-level mutators ─────────────────────────────────────────

    /// Replaces the overall brightness.
    #[must_use]
    pub fn with_intensity(mut self, v: f32) -> Self {
        self.anim = self.anim.with_intensity(v);
        self
    }

    /// Replaces the base animation speed.
    #[must_use]
    pub fn with_speed(mut self, v: f32) -> Self {
        self.anim = self.anim.with_speed(v);
        self
    }

    /// Replaces the effect family.
    #[must_use]
    pub fn with_effect_type(mut self, t: EffectType) -> Self {
        self.anim = self.anim.with_effect_type(t);
        self
    }

    /// Replaces the shader version.
    #[must_use]
    pub fn with_version(mut self, v: i32) -> Self {
        self.reserved = self.reserved.with_version(v as f32);
        self
    }

    /// Toggles external rays.
    #[must_use]
    pub fn with_show_external_rays(mut self, on: bool) -> Self {
        self.reserved = self.reserved.with_show_external_rays(on);
        self
    }

    /// Toggles the corona.
    #[must_use]
    pub fn with_show_corona(mut self, on: bool) -> Self {
        self.reserved = self.reserved.with_show_corona(on);
        self
    }

    // ── Group-level mutators ─────────────────────────────────────────

    /// Replaces the palette.
    #[must_use]
    pub fn with_colors(mut self, v: ColorParams) -> Self {
        self.colors = v;
        self
    }

    /// Replaces the animation group.
    #[must_use]
    pub fn with_anim(mut self, v: AnimParams) -> Self {
        self.anim = v;
        self
    }

    /// Replaces the noise timing group.
    #[must_use]
    pub fn with_anim_timing(mut self, v: AnimTimingParams) -> Self {
        self.anim_timing = v;
        self
    }

    /// Replaces the core/edge group.
    #[must_use]
    pub fn with_core_edge(mut self, v: CoreEdgeParams) -> Self {
        self.core_edge = v;
        self
    }

    /// Replaces the falloff group.
    #[must_use]
    pub fn with_falloff(mut self, v: FalloffParams) -> Self {
        self.falloff = v;
        self
    }

    /// Replaces the noise config group.
    #[must_use]
    pub fn with_noise_config(mut self, v: NoiseConfigParams) -> Self {
        self.noise_config = v;
        self
    }

    /// Replaces the noise detail group.
    #[must_use]
    pub fn with_noise_detail(mut self, v: NoiseDetailParams) -> Self {
        self.noise_detail = v;
        self
    }

    /// Replaces the glow line group.
    #[must_use]
    pub fn with_glow_line(mut self, v: GlowLineParams) -> Self {
        self.glow_line = v;
        self
    }

    /// Replaces the corona group.
    #[must_use]
    pub fn with_corona(mut self, v: CoronaParams) -> Self {
        self.corona = v;
        self
    }

    /// Replaces the geometry group.
    #[must_use]
    pub fn with_geometry(mut self, v: GeometryParams) -> Self {
        self.geometry = v;
        self
    }

    /// Replaces the grid group.
    #[must_use]
    pub fn with_geometry_grid(mut self, v: GeometryGridParams) -> Self {
        self.geometry_grid = v;
        self
    }

    /// Replaces the transform group.
    #[must_use]
    pub fn with_transform(mut self, v: TransformParams) -> Self {
        self.transform = v;
        self
    }

    /// Replaces the lighting group.
    #[must_use]
    pub fn with_lighting(mut self, v: LightingParams) -> Self {
        self.lighting = v;
        self
    }

    /// Replaces the timing group.
    #[must_use]
    pub fn with_timing(mut self, v: TimingParams) -> Self {
        self.timing = v;
        self
    }

    /// Replaces the screen effects group.
    #[must_use]
    pub fn with_screen(mut self, v: ScreenEffectsParams) -> Self {
        self.screen = v;
        self
    }

    /// Replaces the distortion group.
    #[must_use]
    pub fn with_distortion(mut self, v: DistortionParams) -> Self {
        self.distortion = v;
        self
    }

    /// Replaces the compositing group.
    #[must_use]
    pub fn with_blend(mut self, v: BlendParams) -> Self {
        self.blend = v;
        self
    }

    /// Replaces the reserved group.
    #[must_use]
    pub fn with_reserved(mut self, v: ReservedParams) -> Self {
        self.reserved = v;
        self
    }

    /// Replaces the V2 corona detail.
    #[must_use]
    pub fn with_v2_corona(mut self, v: V2CoronaDetail) -> Self {
        self.v2_corona = v;
        self
    }

    /// Replaces the V2 core detail.
    #[must_use]
    pub fn with_v2_core(mut self, v: V2CoreDetail) -> Self {
        self.v2_core = v;
        self
    }

    /// Replaces the V2 edge detail.
    #[must_use]
    pub fn with_v2_edge(mut self, v: V2EdgeDetail) -> Self {
        self.v2_edge = v;
        self
    }

    /// Replaces the V2 lines detail.
    #[must_use]
    pub fn with_v2_lines(mut self, v: V2LinesDetail) -> Self {
        self.v2_lines = v;
        self
    }

    /// Replaces the V2 alpha detail.
    #[must_use]
    pub fn with_v2_alpha(mut self, v: V2AlphaDetail) -> Self {
        self.v2_alpha = v;
        self
    }

    /// Replaces the flames group.
    #[must_use]
    pub fn with_flames(mut self, v: FlamesParams) -> Self {
        self.flames = v;
        self
    }

    /// Replaces the geodesic animation group.
    #[must_use]
    pub fn with_geo_anim(mut self, v: GeoAnimParams) -> Self {
        self.geo_anim = v;
        self
    }

    /// Replaces the plasma group.
    #[must_use]
    pub fn with_v8_plasma(mut self, v: V8PlasmaParams) -> Self {
        self.v8_plasma = v;
        self
    }

    /// Replaces the ring group.
    #[must_use]
    pub fn with_v8_ring(mut self, v: V8RingParams) -> Self {
        self.v8_ring = v;
        self
    }

    /// Replaces the electric corona group.
    #[must_use]
    pub fn with_v8_corona(mut self, v: V8CoronaParams) -> Self {
        self.v8_corona = v;
        self
    }

    /// Replaces the electric core group.
    #[must_use]
    pub fn with_v8_electric(mut self, v: V8ElectricParams) -> Self {
        self.v8_electric = v;
        self
    }

    /// Replaces the color blend mode.
    #[must_use]
    pub fn with_color_blend(mut self, v: ColorBlendMode) -> Self {
        self.color_blend = v;
        self
    }

    // ── Staging ──────────────────────────────────────────────────────

    /// Thaws this config into a freely mutable staging copy.
    #[must_use]
    pub fn stage(self) -> ConfigStaging {
        ConfigStaging { config: self }
    }
}

impl Default for FieldConfig {
    /// The stock cyan energy orb.
    fn default() -> Self {
        crate::presets::default_energy_orb()
    }
}

/// Mutable staging area for building a [`FieldConfig`].
///
/// Avoids long `with_*` chains when many groups change at once: thaw,
/// assign fields directly, freeze.
///
/// ```
/// use seraph_params::{presets, ColorBlendMode};
/// use seraph_params::groups::CoronaParams;
///
/// let mut staged = presets::fire_energy_orb().stage();
/// staged.corona = CoronaParams::new(0.8, 2.0, 65.0, 1.5);
/// staged.color_blend = ColorBlendMode::Additive;
/// let config = staged.freeze();
/// assert_eq!(config.corona.multiplier, 65.0);
/// ```
#[derive(Clone, Debug)]
pub struct ConfigStaging {
    config: FieldConfig,
}

impl ConfigStaging {
    /// Freezes the staged state back into an immutable config.
    #[must_use]
    pub fn freeze(self) -> FieldConfig {
        self.config
    }
}

impl std::ops::Deref for ConfigStaging {
    type Target = FieldConfig;
    fn deref(&self) -> &FieldConfig {
        &self.config
    }
}

impl std::ops::DerefMut for ConfigStaging {
    fn deref_mut(&mut self) -> &mut FieldConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use seraph_shared::Argb;

    #[test]
    fn test_group_mutator_leaves_siblings_untouched() {
        let base = presets::default_energy_orb();
        let changed = base.with_corona(CoronaParams::new(0.9, 3.0, 70.0, 2.0));

        assert_eq!(changed.corona.width, 0.9);
        assert_eq!(changed.colors, base.colors);
        assert_eq!(changed.anim, base.anim);
        assert_eq!(changed.noise_config, base.noise_config);
        assert_eq!(changed.reserved, base.reserved);
        assert_eq!(changed.v8_ring, base.v8_ring);
        assert_eq!(changed.color_blend, base.color_blend);
    }

    #[test]
    fn test_stage_freeze_roundtrip() {
        let base = presets::volumetric_star();
        let frozen = base.stage().freeze();
        assert_eq!(frozen, base);
    }

    #[test]
    fn test_staging_edits_land() {
        let mut staged = presets::default_energy_orb().stage();
        staged.colors = staged.colors.with_primary(Argb(0xFF11_2233));
        staged.anim = staged.anim.with_intensity(0.4);
        let config = staged.freeze();
        assert_eq!(config.colors.primary, Argb(0xFF11_2233));
        assert_eq!(config.intensity(), 0.4);
    }

    #[test]
    fn test_convenience_accessors_delegate() {
        let config = presets::geodesic();
        assert_eq!(config.version(), 4);
        assert_eq!(config.effect_type(), EffectType::Geodesic);
        assert_eq!(config.distortion_radius(), 1000.0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = presets::fire_energy_orb();
        let text = toml::to_string(&config).unwrap();
        let back: FieldConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let back: FieldConfig = toml::from_str("[anim]\nintensity = 0.5\n").unwrap();
        assert_eq!(back.intensity(), 0.5);
        assert_eq!(back.corona, CoronaParams::DEFAULT);
    }
}
