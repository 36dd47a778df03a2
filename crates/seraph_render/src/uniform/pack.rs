//! Builds a [`FieldUniforms`] block from config and per-frame camera state.
//!
//! Everything camera-related is packed camera-centered: the matrices in the
//! frame already place the eye at the origin, so the camera-position slot
//! carries `(0, 0, 0)` and the field center is made camera-relative here.
//! Shader time rides in the w lane of that same slot.

use seraph_params::FieldConfig;
use seraph_shared::Vec3;

use crate::camera::CameraFrame;
use crate::uniform::FieldUniforms;

/// Debug lanes of slot 41.
///
/// `cam_mode` overrides the adaptive ray selection (0 = auto, 1 = force
/// basis rays, 2 = force matrix rays); `debug_mode` switches the shader
/// into a diagnostic visualization (0 = off).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DebugParams {
    /// Camera ray mode override.
    pub cam_mode: f32,
    /// Diagnostic visualization selector.
    pub debug_mode: f32,
}

impl DebugParams {
    /// Everything off: adaptive rays, normal rendering.
    pub const DEFAULT: Self = Self::new(0.0, 0.0);

    /// Creates a debug group.
    #[must_use]
    pub const fn new(cam_mode: f32, debug_mode: f32) -> Self {
        Self { cam_mode, debug_mode }
    }

    /// Replaces the ray mode override.
    #[must_use]
    pub fn with_cam_mode(mut self, v: f32) -> Self {
        self.cam_mode = v;
        self
    }

    /// Replaces the visualization selector.
    #[must_use]
    pub fn with_debug_mode(mut self, v: f32) -> Self {
        self.debug_mode = v;
        self
    }
}

/// Octave count after the warm-up ramp.
///
/// Starts at 20% of the configured count (never below one octave) and
/// climbs linearly to the full count at progress 1.0. Truncating casts are
/// intentional: octaves are whole numbers in the shader loop.
#[allow(clippy::cast_possible_truncation)]
fn warmed_octaves(full: f32, progress: f32) -> f32 {
    let full = full as i32;
    let min = 1i32.max((full as f32 * seraph_shared::constants::MIN_WARMUP_DETAIL_FRACTION) as i32);
    let scaled = min + ((full - min) as f32 * progress) as i32;
    scaled as f32
}

impl FieldUniforms {
    /// Packs a complete block for one field at full detail.
    #[must_use]
    pub fn from_parts(
        config: &FieldConfig,
        center: Vec3,
        radius: f32,
        frame: &CameraFrame,
        shader_time: f32,
        debug: DebugParams,
    ) -> Self {
        Self::from_parts_warmed(config, center, radius, frame, shader_time, debug, 1.0)
    }

    /// Packs a complete block with the octave count scaled by warm-up
    /// progress, so a freshly spawned field costs less on its first frames.
    ///
    /// `center` and `radius` are the live instance values, already
    /// interpolated; `shader_time` comes from the animation clock.
    #[must_use]
    pub fn from_parts_warmed(
        config: &FieldConfig,
        center: Vec3,
        radius: f32,
        frame: &CameraFrame,
        shader_time: f32,
        debug: DebugParams,
        warmup_progress: f32,
    ) -> Self {
        let rel = center - frame.position;
        let colors = config.colors;
        let anim = config.anim;
        let detail = config.noise_detail;
        let octaves = warmed_octaves(detail.octaves, warmup_progress);

        Self {
            position: [rel.x, rel.y, rel.z, radius],
            primary_color: colors.primary.to_rgba_array(),
            secondary_color: colors.secondary.to_rgba_array(),
            tertiary_color: colors.tertiary.to_rgba_array(),
            highlight_color: colors.highlight.to_rgba_array(),
            ray_color: colors.ray.to_rgba_array(),
            anim_base: [anim.phase, anim.speed, anim.intensity, anim.effect_type.shader_value()],
            anim_speeds: [anim.speed_high, anim.speed_low, anim.speed_ray, anim.speed_ring],
            anim_timing: [
                config.anim_timing.time_scale,
                config.anim_timing.radial_speed_1,
                config.anim_timing.radial_speed_2,
                config.anim_timing.axial_speed,
            ],
            core_edge: [
                config.core_edge.core_size,
                config.core_edge.edge_sharpness,
                config.core_edge.shape_type,
                config.core_edge.core_falloff,
            ],
            falloff: [
                config.falloff.fade_power,
                config.falloff.fade_scale,
                config.falloff.inside_falloff_power,
                config.falloff.corona_edge,
            ],
            noise_config: [
                config.noise_config.res_low,
                config.noise_config.res_high,
                config.noise_config.amplitude,
                config.noise_config.seed,
            ],
            noise_detail: [detail.base_scale, detail.scale_multiplier, octaves, detail.base_level],
            glow_line: [
                config.glow_line.count,
                config.glow_line.intensity,
                config.glow_line.ray_power,
                config.glow_line.ray_sharpness,
            ],
            corona: [
                config.corona.width,
                config.corona.power,
                config.corona.multiplier,
                config.corona.ring_power,
            ],
            geometry: [
                config.geometry.subdivisions,
                config.geometry.round_top,
                config.geometry.round_corner,
                config.geometry.thickness,
            ],
            geometry_grid: [
                config.geometry_grid.gap,
                config.geometry_grid.height,
                config.geometry_grid.wave_resolution,
                config.geometry_grid.wave_amplitude,
            ],
            transform: [
                config.transform.rotation_x,
                config.transform.rotation_y,
                config.transform.scale,
                config.transform.reserved,
            ],
            lighting: [
                config.lighting.diffuse_strength,
                config.lighting.ambient_strength,
                config.lighting.back_light_strength,
                config.lighting.fresnel_strength,
            ],
            timing: [
                config.timing.scene_duration,
                config.timing.crossfade_duration,
                config.timing.loop_mode,
                config.timing.anim_frequency,
            ],
            screen: [
                config.screen.blackout,
                config.screen.vignette_amount,
                config.screen.vignette_radius,
                config.screen.tint_amount,
            ],
            distortion: [
                config.distortion.strength,
                config.distortion.radius,
                config.distortion.frequency,
                config.distortion.speed,
            ],
            blend: [
                config.blend.reserved,
                config.blend.blend_mode,
                config.blend.fade_in,
                config.blend.fade_out,
            ],
            // The aux lane carries the color blend mode; the config group's
            // own aux value is authoring-only.
            reserved: [
                config.reserved.version,
                config.reserved.ray_corona_flags,
                config.color_blend.shader_value(),
                config.reserved.eruption_contrast,
            ],
            v2_corona: [
                config.v2_corona.corona_start,
                config.v2_corona.corona_brightness,
                config.v2_corona.core_radius_scale,
                config.v2_corona.core_mask_radius,
            ],
            v2_core: [
                config.v2_core.core_spread,
                config.v2_core.core_glow,
                config.v2_core.core_mask_soft,
                config.v2_core.edge_radius,
            ],
            v2_edge: [
                config.v2_edge.edge_spread,
                config.v2_edge.edge_glow,
                config.v2_edge.sharp_scale,
                config.v2_edge.lines_uv_scale,
            ],
            v2_lines: [
                config.v2_lines.density_mult,
                config.v2_lines.contrast_1,
                config.v2_lines.contrast_2,
                config.v2_lines.mask_radius,
            ],
            v2_alpha: [
                config.v2_alpha.lines_mask_soft,
                config.v2_alpha.ray_rot_speed,
                config.v2_alpha.ray_start_radius,
                config.v2_alpha.alpha_scale,
            ],
            camera_pos_time: [0.0, 0.0, 0.0, shader_time],
            camera_forward: [frame.forward.x, frame.forward.y, frame.forward.z, frame.aspect],
            camera_up: [frame.up.x, frame.up.y, frame.up.z, frame.fov_y_radians],
            render_params: [frame.near, frame.far, 0.0, if frame.flying { 1.0 } else { 0.0 }],
            inv_view_proj: frame.inv_view_proj.to_cols(),
            view_proj: frame.view_proj.to_cols(),
            debug: [debug.cam_mode, debug.debug_mode, 0.0, 0.0],
            flames_a: [
                config.flames.edge,
                config.flames.power,
                config.flames.multiplier,
                config.flames.time_scale,
            ],
            flames_b: [config.flames.inside_falloff, config.flames.surface_noise_scale, 0.0, 0.0],
            geo_anim: [
                config.geo_anim.anim_mode,
                config.geo_anim.rotation_speed,
                config.geo_anim.dome_clip,
                config.geo_anim.reserved,
            ],
            v8_plasma: [
                config.v8_plasma.scale,
                config.v8_plasma.speed,
                config.v8_plasma.turbulence,
                config.v8_plasma.intensity,
            ],
            v8_ring_a: [
                config.v8_ring.frequency,
                config.v8_ring.speed,
                config.v8_ring.sharpness,
                config.v8_ring.center_value,
            ],
            v8_ring_b: [
                config.v8_ring.mod_power,
                config.v8_ring.intensity,
                config.v8_ring.core_type,
                0.0,
            ],
            v8_corona: [
                config.v8_corona.extent,
                config.v8_corona.fade_start,
                config.v8_corona.fade_power,
                config.v8_corona.intensity,
            ],
            v8_electric: [
                config.v8_electric.flash,
                config.v8_electric.fill_intensity,
                config.v8_electric.fill_darken,
                config.v8_electric.line_width,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use seraph_params::presets;
    use seraph_params::ColorBlendMode;

    use super::*;

    fn frame_at(position: Vec3) -> CameraFrame {
        CameraFrame::from_yaw_pitch(position, 0.0, 0.0, 70f32.to_radians(), 16.0 / 9.0)
    }

    #[test]
    fn test_position_is_camera_relative() {
        let config = presets::default_energy_orb();
        let frame = frame_at(Vec3::new(100.0, 64.0, -50.0));
        let block = FieldUniforms::from_parts(
            &config,
            Vec3::new(103.0, 64.0, -50.0),
            3.0,
            &frame,
            0.0,
            DebugParams::DEFAULT,
        );
        assert_eq!(block.position, [3.0, 0.0, 0.0, 3.0]);
        assert_eq!(block.camera_pos_time[0], 0.0);
        assert_eq!(block.camera_pos_time[1], 0.0);
        assert_eq!(block.camera_pos_time[2], 0.0);
    }

    #[test]
    fn test_camera_slots_carry_frame_state() {
        let config = presets::default_energy_orb();
        let frame = frame_at(Vec3::ZERO).with_planes(0.05, 1000.0).with_flying(true);
        let block =
            FieldUniforms::from_parts(&config, Vec3::ZERO, 3.0, &frame, 12.5, DebugParams::DEFAULT);

        assert_eq!(block.camera_pos_time[3], 12.5);
        assert_eq!(block.camera_forward[3], frame.aspect);
        assert_eq!(block.camera_up[3], frame.fov_y_radians);
        assert_eq!(block.render_params, [0.05, 1000.0, 0.0, 1.0]);
        assert_eq!(block.view_proj, frame.view_proj.to_cols());
        assert_eq!(block.inv_view_proj, frame.inv_view_proj.to_cols());
    }

    #[test]
    fn test_config_lanes_land_in_documented_slots() {
        let config = presets::default_energy_orb();
        let frame = frame_at(Vec3::ZERO);
        let block =
            FieldUniforms::from_parts(&config, Vec3::ZERO, 3.0, &frame, 0.0, DebugParams::DEFAULT);

        assert_eq!(block.anim_base[3], config.effect_type().shader_value());
        assert_eq!(block.reserved[0], config.reserved.version);
        assert_eq!(block.reserved[2], ColorBlendMode::Multiply.shader_value());
        assert_eq!(block.primary_color, config.colors.primary.to_rgba_array());
        assert_eq!(block.v8_electric[3], config.v8_electric.line_width);
    }

    #[test]
    fn test_warmup_floor_and_finish() {
        let config = presets::volumetric_star();
        let full = config.noise_detail.octaves;
        let frame = frame_at(Vec3::ZERO);

        let cold = FieldUniforms::from_parts_warmed(
            &config,
            Vec3::ZERO,
            3.0,
            &frame,
            0.0,
            DebugParams::DEFAULT,
            0.0,
        );
        let expected_min = 1f32.max((full * 0.2).floor());
        assert_eq!(cold.noise_detail[2], expected_min);

        let warm = FieldUniforms::from_parts_warmed(
            &config,
            Vec3::ZERO,
            3.0,
            &frame,
            0.0,
            DebugParams::DEFAULT,
            1.0,
        );
        assert_eq!(warm.noise_detail[2], full.floor());
    }

    #[test]
    fn test_warmup_is_monotonic() {
        let config = presets::default_energy_orb();
        let frame = frame_at(Vec3::ZERO);
        let mut last = 0.0f32;
        for step in 0..=10 {
            let progress = step as f32 / 10.0;
            let block = FieldUniforms::from_parts_warmed(
                &config,
                Vec3::ZERO,
                3.0,
                &frame,
                0.0,
                DebugParams::DEFAULT,
                progress,
            );
            assert!(block.noise_detail[2] >= last);
            last = block.noise_detail[2];
        }
        assert_eq!(last, config.noise_detail.octaves.floor());
    }

    #[test]
    fn test_plain_pack_equals_finished_warmup() {
        let config = presets::fire_energy_orb();
        let frame = frame_at(Vec3::new(1.0, 2.0, 3.0));
        let center = Vec3::new(4.0, 5.0, 6.0);
        let plain =
            FieldUniforms::from_parts(&config, center, 2.5, &frame, 7.0, DebugParams::DEFAULT);
        let warmed = FieldUniforms::from_parts_warmed(
            &config,
            center,
            2.5,
            &frame,
            7.0,
            DebugParams::DEFAULT,
            1.0,
        );
        assert_eq!(plain, warmed);
    }
}
