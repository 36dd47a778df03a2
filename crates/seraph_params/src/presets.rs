//! Named factory presets.
//!
//! Every preset specifies every group explicitly. No group may be left
//! to an implicit default: when a shader gains a parameter, each preset
//! has to take a position on it.

use seraph_shared::Argb;

use crate::groups::*;
use crate::{ColorBlendMode, EffectType, FieldConfig};

/// The stock cyan/blue energy orb.
#[must_use]
pub fn default_energy_orb() -> FieldConfig {
    FieldConfig {
        colors: ColorParams::of_three(Argb(0xFFFF_FFFF), Argb(0xFF00_FFFF), Argb(0xFF1A_0528)),
        anim: AnimParams::new(0.0, 1.0, 1.2, EffectType::EnergyOrb, 2.0, 2.0, 5.0, 2.0),
        anim_timing: AnimTimingParams::DEFAULT,
        core_edge: CoreEdgeParams::new(0.15, 4.0, 0.0, 4.0),
        falloff: FalloffParams::DEFAULT,
        noise_config: NoiseConfigParams::new(5.0, 45.0, 2.0, 0.0),
        noise_detail: NoiseDetailParams::DEFAULT,
        glow_line: GlowLineParams::new(16.0, 0.8, 2.0, 1.0),
        corona: CoronaParams::new(0.5, 2.0, 50.0, 1.0),
        geometry: GeometryParams::DEFAULT,
        geometry_grid: GeometryGridParams::DEFAULT,
        transform: TransformParams::DEFAULT,
        lighting: LightingParams::DEFAULT,
        timing: TimingParams::DEFAULT,
        screen: ScreenEffectsParams::NONE,
        distortion: DistortionParams::NONE,
        blend: BlendParams::DEFAULT,
        // V1 with rays and corona both on.
        reserved: ReservedParams::new(1.0, 3.0, 0.0, 0.0),
        v2_corona: V2CoronaDetail::DEFAULT,
        v2_core: V2CoreDetail::DEFAULT,
        v2_edge: V2EdgeDetail::DEFAULT,
        v2_lines: V2LinesDetail::DEFAULT,
        v2_alpha: V2AlphaDetail::DEFAULT,
        flames: FlamesParams::DEFAULT,
        geo_anim: GeoAnimParams::DEFAULT,
        v8_plasma: V8PlasmaParams::DEFAULT,
        v8_ring: V8RingParams::DEFAULT,
        v8_corona: V8CoronaParams::DEFAULT,
        v8_electric: V8ElectricParams::DEFAULT,
        color_blend: ColorBlendMode::Multiply,
    }
}

/// Fire-colored orb, faster and sharper than stock.
#[must_use]
pub fn fire_energy_orb() -> FieldConfig {
    FieldConfig {
        colors: ColorParams::of_three(Argb(0xFFFF_FF00), Argb(0xFFFF_6600), Argb(0xFF33_0000)),
        anim: AnimParams::new(0.0, 1.2, 1.4, EffectType::EnergyOrb, 3.0, 2.0, 6.0, 3.0),
        anim_timing: AnimTimingParams::DEFAULT,
        core_edge: CoreEdgeParams::new(0.12, 5.0, 0.0, 5.0),
        falloff: FalloffParams::DEFAULT,
        noise_config: NoiseConfigParams::new(6.0, 36.0, 2.0, 0.0),
        noise_detail: NoiseDetailParams::DEFAULT,
        glow_line: GlowLineParams::new(12.0, 0.9, 3.0, 1.5),
        corona: CoronaParams::new(0.6, 2.0, 60.0, 1.5),
        geometry: GeometryParams::DEFAULT,
        geometry_grid: GeometryGridParams::DEFAULT,
        transform: TransformParams::DEFAULT,
        lighting: LightingParams::DEFAULT,
        timing: TimingParams::DEFAULT,
        screen: ScreenEffectsParams::NONE,
        distortion: DistortionParams::NONE,
        blend: BlendParams::DEFAULT,
        reserved: ReservedParams::new(1.0, 3.0, 0.0, 0.0),
        v2_corona: V2CoronaDetail::DEFAULT,
        v2_core: V2CoreDetail::DEFAULT,
        v2_edge: V2EdgeDetail::DEFAULT,
        v2_lines: V2LinesDetail::DEFAULT,
        v2_alpha: V2AlphaDetail::DEFAULT,
        flames: FlamesParams::DEFAULT,
        geo_anim: GeoAnimParams::DEFAULT,
        v8_plasma: V8PlasmaParams::DEFAULT,
        v8_ring: V8RingParams::DEFAULT,
        v8_corona: V8CoronaParams::DEFAULT,
        v8_electric: V8ElectricParams::DEFAULT,
        color_blend: ColorBlendMode::Multiply,
    }
}

/// Dark purple orb, slow with muted rays.
#[must_use]
pub fn void_energy_orb() -> FieldConfig {
    FieldConfig {
        colors: ColorParams::of_three(Argb(0xFF88_00FF), Argb(0xFF44_00AA), Argb(0xFF00_0011)),
        anim: AnimParams::new(0.0, 0.7, 1.0, EffectType::EnergyOrb, 1.5, 1.0, 3.0, 1.0),
        anim_timing: AnimTimingParams::DEFAULT,
        core_edge: CoreEdgeParams::new(0.20, 3.0, 0.0, 3.0),
        falloff: FalloffParams::DEFAULT,
        noise_config: NoiseConfigParams::new(4.0, 54.0, 2.0, 0.0),
        noise_detail: NoiseDetailParams::DEFAULT,
        glow_line: GlowLineParams::new(8.0, 0.5, 1.5, 0.8),
        corona: CoronaParams::new(0.4, 1.5, 40.0, 0.8),
        geometry: GeometryParams::DEFAULT,
        geometry_grid: GeometryGridParams::DEFAULT,
        transform: TransformParams::DEFAULT,
        lighting: LightingParams::DEFAULT,
        timing: TimingParams::DEFAULT,
        screen: ScreenEffectsParams::NONE,
        distortion: DistortionParams::NONE,
        blend: BlendParams::DEFAULT,
        // Corona on, external rays off.
        reserved: ReservedParams::new(1.0, 2.0, 0.0, 0.0),
        v2_corona: V2CoronaDetail::DEFAULT,
        v2_core: V2CoreDetail::DEFAULT,
        v2_edge: V2EdgeDetail::DEFAULT,
        v2_lines: V2LinesDetail::DEFAULT,
        v2_alpha: V2AlphaDetail::DEFAULT,
        flames: FlamesParams::DEFAULT,
        geo_anim: GeoAnimParams::DEFAULT,
        v8_plasma: V8PlasmaParams::DEFAULT,
        v8_ring: V8RingParams::DEFAULT,
        v8_corona: V8CoronaParams::DEFAULT,
        v8_electric: V8ElectricParams::DEFAULT,
        color_blend: ColorBlendMode::Multiply,
    }
}

/// Warm white/gold orb for healing effects.
#[must_use]
pub fn holy_energy_orb() -> FieldConfig {
    FieldConfig {
        colors: ColorParams::of_three(Argb(0xFFFF_FFFF), Argb(0xFFFF_DD66), Argb(0xFF22_1100)),
        anim: AnimParams::new(0.0, 0.8, 1.3, EffectType::EnergyOrb, 2.0, 1.5, 4.0, 2.0),
        anim_timing: AnimTimingParams::DEFAULT,
        core_edge: CoreEdgeParams::new(0.18, 6.0, 0.0, 6.0),
        falloff: FalloffParams::DEFAULT,
        noise_config: NoiseConfigParams::new(4.0, 27.0, 2.0, 0.0),
        noise_detail: NoiseDetailParams::DEFAULT,
        glow_line: GlowLineParams::new(12.0, 0.6, 2.5, 1.2),
        corona: CoronaParams::new(0.7, 2.5, 55.0, 1.2),
        geometry: GeometryParams::DEFAULT,
        geometry_grid: GeometryGridParams::DEFAULT,
        transform: TransformParams::DEFAULT,
        lighting: LightingParams::DEFAULT,
        timing: TimingParams::DEFAULT,
        screen: ScreenEffectsParams::NONE,
        distortion: DistortionParams::NONE,
        blend: BlendParams::DEFAULT,
        reserved: ReservedParams::new(1.0, 3.0, 0.0, 0.0),
        v2_corona: V2CoronaDetail::DEFAULT,
        v2_core: V2CoreDetail::DEFAULT,
        v2_edge: V2EdgeDetail::DEFAULT,
        v2_lines: V2LinesDetail::DEFAULT,
        v2_alpha: V2AlphaDetail::DEFAULT,
        flames: FlamesParams::DEFAULT,
        geo_anim: GeoAnimParams::DEFAULT,
        v8_plasma: V8PlasmaParams::DEFAULT,
        v8_ring: V8RingParams::DEFAULT,
        v8_corona: V8CoronaParams::DEFAULT,
        v8_electric: V8ElectricParams::DEFAULT,
        color_blend: ColorBlendMode::Multiply,
    }
}

/// Volumetric star with the five-color palette in full use.
#[must_use]
pub fn volumetric_star() -> FieldConfig {
    FieldConfig {
        colors: ColorParams::new(
            Argb(0xFFFF_FF00),
            Argb(0xFFFF_0000),
            Argb(0xFFFF_00FF),
            Argb(0xFFFF_FFFF),
            Argb(0xFFFF_9933),
        ),
        anim: AnimParams::new(0.0, 1.0, 1.5, EffectType::EnergyOrb, 2.0, 2.0, 5.0, 2.0),
        anim_timing: AnimTimingParams::new(0.1, 0.35, 0.15, 0.015),
        core_edge: CoreEdgeParams::new(0.2, 5.0, 0.0, 4.0),
        falloff: FalloffParams::new(0.5, 2.0, 24.0, 1.1),
        noise_config: NoiseConfigParams::new(15.0, 45.0, 2.0, 0.0),
        // Three octaves; the star's raymarch is expensive per octave.
        noise_detail: NoiseDetailParams::new(0.031_25, 4.0, 3.0, 0.4),
        glow_line: GlowLineParams::new(16.0, 0.8, 2.0, 1.0),
        corona: CoronaParams::new(0.5, 2.0, 50.0, 1.0),
        geometry: GeometryParams::DEFAULT,
        geometry_grid: GeometryGridParams::DEFAULT,
        transform: TransformParams::DEFAULT,
        lighting: LightingParams::DEFAULT,
        timing: TimingParams::DEFAULT,
        screen: ScreenEffectsParams::NONE,
        distortion: DistortionParams::NONE,
        blend: BlendParams::DEFAULT,
        reserved: ReservedParams::new(3.0, 3.0, 0.0, 0.0),
        v2_corona: V2CoronaDetail::DEFAULT,
        v2_core: V2CoreDetail::DEFAULT,
        v2_edge: V2EdgeDetail::DEFAULT,
        v2_lines: V2LinesDetail::DEFAULT,
        v2_alpha: V2AlphaDetail::DEFAULT,
        flames: FlamesParams::DEFAULT,
        geo_anim: GeoAnimParams::DEFAULT,
        v8_plasma: V8PlasmaParams::DEFAULT,
        v8_ring: V8RingParams::DEFAULT,
        v8_corona: V8CoronaParams::DEFAULT,
        v8_electric: V8ElectricParams::DEFAULT,
        color_blend: ColorBlendMode::Multiply,
    }
}

/// Geodesic dome with lavender faces and cyan edge glow.
#[must_use]
pub fn geodesic() -> FieldConfig {
    FieldConfig {
        colors: ColorParams::new(
            Argb(0xFFE6_E6FF),
            Argb(0xFF1A_1A26),
            Argb(0xFF00_FFFF),
            Argb(0xFFFF_FFFF),
            Argb(0xFFFF_9933),
        ),
        anim: AnimParams::new(0.0, 1.0, 1.2, EffectType::Geodesic, 2.0, 2.0, 5.0, 2.0),
        anim_timing: AnimTimingParams::DEFAULT,
        core_edge: CoreEdgeParams::DEFAULT,
        falloff: FalloffParams::DEFAULT,
        noise_config: NoiseConfigParams::DEFAULT,
        noise_detail: NoiseDetailParams::DEFAULT,
        glow_line: GlowLineParams::DEFAULT,
        corona: CoronaParams::DEFAULT,
        geometry: GeometryParams::new(3.0, 0.05, 0.1, 2.0),
        geometry_grid: GeometryGridParams::new(0.005, 2.0, 0.1, 0.0),
        transform: TransformParams::new(0.3, 0.25, 1.0, 0.0),
        lighting: LightingParams::new(1.2, 0.8, 0.3, 0.2),
        timing: TimingParams::new(6.0, 2.0, 0.0, 10.0),
        screen: ScreenEffectsParams::NONE,
        distortion: DistortionParams::NONE,
        blend: BlendParams::DEFAULT,
        reserved: ReservedParams::new(4.0, 0.0, 0.0, 0.0),
        v2_corona: V2CoronaDetail::DEFAULT,
        v2_core: V2CoreDetail::DEFAULT,
        v2_edge: V2EdgeDetail::DEFAULT,
        v2_lines: V2LinesDetail::DEFAULT,
        v2_alpha: V2AlphaDetail::DEFAULT,
        flames: FlamesParams::DEFAULT,
        geo_anim: GeoAnimParams::DEFAULT,
        v8_plasma: V8PlasmaParams::DEFAULT,
        v8_ring: V8RingParams::DEFAULT,
        v8_corona: V8CoronaParams::DEFAULT,
        v8_electric: V8ElectricParams::DEFAULT,
        color_blend: ColorBlendMode::Multiply,
    }
}

/// Disabled configuration: zero intensity, `None` family.
#[must_use]
pub fn none() -> FieldConfig {
    FieldConfig {
        colors: ColorParams::of_three(Argb(0xFFFF_FFFF), Argb(0xFFFF_FFFF), Argb(0xFF00_0000)),
        anim: AnimParams::new(0.0, 1.0, 0.0, EffectType::None, 0.0, 0.0, 0.0, 0.0),
        anim_timing: AnimTimingParams::DEFAULT,
        core_edge: CoreEdgeParams::new(0.1, 1.0, 0.0, 1.0),
        falloff: FalloffParams::DEFAULT,
        noise_config: NoiseConfigParams::DEFAULT,
        noise_detail: NoiseDetailParams::DEFAULT,
        glow_line: GlowLineParams::new(8.0, 0.0, 1.0, 1.0),
        corona: CoronaParams::new(0.5, 2.0, 0.0, 0.0),
        geometry: GeometryParams::DEFAULT,
        geometry_grid: GeometryGridParams::DEFAULT,
        transform: TransformParams::DEFAULT,
        lighting: LightingParams::DEFAULT,
        timing: TimingParams::DEFAULT,
        screen: ScreenEffectsParams::NONE,
        distortion: DistortionParams::NONE,
        blend: BlendParams::DEFAULT,
        reserved: ReservedParams::DEFAULT,
        v2_corona: V2CoronaDetail::DEFAULT,
        v2_core: V2CoreDetail::DEFAULT,
        v2_edge: V2EdgeDetail::DEFAULT,
        v2_lines: V2LinesDetail::DEFAULT,
        v2_alpha: V2AlphaDetail::DEFAULT,
        flames: FlamesParams::DEFAULT,
        geo_anim: GeoAnimParams::DEFAULT,
        v8_plasma: V8PlasmaParams::DEFAULT,
        v8_ring: V8RingParams::DEFAULT,
        v8_corona: V8CoronaParams::DEFAULT,
        v8_electric: V8ElectricParams::DEFAULT,
        color_blend: ColorBlendMode::Multiply,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_renderable_or_disabled() {
        for preset in [
            default_energy_orb(),
            fire_energy_orb(),
            void_energy_orb(),
            holy_energy_orb(),
            volumetric_star(),
            geodesic(),
        ] {
            assert!(preset.effect_type().requires_post_process());
            assert!(preset.intensity() > 0.0);
        }
        let off = none();
        assert!(!off.effect_type().requires_post_process());
        assert_eq!(off.intensity(), 0.0);
    }

    #[test]
    fn test_version_lane_matches_family() {
        assert_eq!(default_energy_orb().version(), 1);
        assert_eq!(volumetric_star().version(), 3);
        assert_eq!(geodesic().version(), 4);
    }

    #[test]
    fn test_ray_flags() {
        assert!(default_energy_orb().show_external_rays());
        assert!(default_energy_orb().show_corona());
        assert!(!void_energy_orb().show_external_rays());
        assert!(void_energy_orb().show_corona());
    }
}
