//! The 50-slot uniform block shared by every field shader.
//!
//! **CRITICAL:** this struct IS the wire format. Field order equals slot
//! order equals the member order of `FieldUniforms` in
//! `shaders/field_common.wgsl`. All three must change together; a lone edit
//! anywhere ships garbage to the GPU with no diagnostic. The layout tests
//! at the bottom of this file cross-check the Rust side against the WGSL
//! text so a drift fails in CI instead of on screen.
//!
//! Every member is either a `vec4<f32>` (one slot) or a `mat4x4<f32>`
//! (four slots), so `#[repr(C)]` needs no padding anywhere and the block
//! satisfies both std140 and std430 rules as-is.

use bytemuck::{Pod, Zeroable};

/// One slot is a `vec4<f32>`.
pub const SLOT_BYTES: usize = 16;

/// `vec4` member count of the block.
pub const VEC4_SLOTS: usize = 42;

/// `mat4x4` member count of the block.
pub const MAT4_COUNT: usize = 2;

/// CPU mirror of the `FieldUniforms` block in `field_common.wgsl`.
///
/// Slot numbers in the field docs are vec4 indices from the start of the
/// block; a `mat4x4` occupies four consecutive slots.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FieldUniforms {
    /// Slot 0: camera-relative field center (xyz) and effective radius (w).
    pub position: [f32; 4],
    /// Slot 1: primary color, RGBA.
    pub primary_color: [f32; 4],
    /// Slot 2: secondary color, RGBA.
    pub secondary_color: [f32; 4],
    /// Slot 3: tertiary color, RGBA.
    pub tertiary_color: [f32; 4],
    /// Slot 4: highlight color, RGBA.
    pub highlight_color: [f32; 4],
    /// Slot 5: ray color, RGBA.
    pub ray_color: [f32; 4],
    /// Slot 6: phase, speed, intensity, effect selector.
    pub anim_base: [f32; 4],
    /// Slot 7: speed high, speed low, speed ray, speed ring.
    pub anim_speeds: [f32; 4],
    /// Slot 8: time scale, radial speed 1, radial speed 2, axial speed.
    pub anim_timing: [f32; 4],
    /// Slot 9: core size, edge sharpness, shape type, core falloff.
    pub core_edge: [f32; 4],
    /// Slot 10: fade power, fade scale, inside falloff power, corona edge.
    pub falloff: [f32; 4],
    /// Slot 11: res low, res high, amplitude, seed.
    pub noise_config: [f32; 4],
    /// Slot 12: base scale, scale multiplier, octaves, base level.
    pub noise_detail: [f32; 4],
    /// Slot 13: line count, intensity, ray power, ray sharpness.
    pub glow_line: [f32; 4],
    /// Slot 14: corona width, power, multiplier, ring power.
    pub corona: [f32; 4],
    /// Slot 15: subdivisions, round top, round corner, thickness.
    pub geometry: [f32; 4],
    /// Slot 16: gap, height, wave resolution, wave amplitude.
    pub geometry_grid: [f32; 4],
    /// Slot 17: rotation X, rotation Y, scale, reserved.
    pub transform: [f32; 4],
    /// Slot 18: diffuse, ambient, back light, fresnel.
    pub lighting: [f32; 4],
    /// Slot 19: scene duration, crossfade duration, loop mode, frequency.
    pub timing: [f32; 4],
    /// Slot 20: blackout, vignette amount, vignette radius, tint amount.
    pub screen: [f32; 4],
    /// Slot 21: distortion strength, radius, frequency, speed.
    pub distortion: [f32; 4],
    /// Slot 22: reserved, blend mode, fade in, fade out.
    pub blend: [f32; 4],
    /// Slot 23: version, ray/corona flags, color blend mode, eruption contrast.
    pub reserved: [f32; 4],
    /// Slot 24: corona start, corona brightness, core radius scale, core mask radius.
    pub v2_corona: [f32; 4],
    /// Slot 25: core spread, core glow, core mask soft, edge radius.
    pub v2_core: [f32; 4],
    /// Slot 26: edge spread, edge glow, sharp scale, lines UV scale.
    pub v2_edge: [f32; 4],
    /// Slot 27: density mult, contrast 1, contrast 2, mask radius.
    pub v2_lines: [f32; 4],
    /// Slot 28: lines mask soft, ray rot speed, ray start radius, alpha scale.
    pub v2_alpha: [f32; 4],
    /// Slot 29: camera position (always the origin, xyz) and shader time (w).
    pub camera_pos_time: [f32; 4],
    /// Slot 30: camera forward (xyz) and aspect ratio (w).
    pub camera_forward: [f32; 4],
    /// Slot 31: camera up (xyz) and vertical FOV in radians (w).
    pub camera_up: [f32; 4],
    /// Slot 32: near plane, far plane, reserved, flying flag.
    pub render_params: [f32; 4],
    /// Slots 33-36: inverse view-projection, column major.
    pub inv_view_proj: [[f32; 4]; 4],
    /// Slots 37-40: view-projection, column major.
    pub view_proj: [[f32; 4]; 4],
    /// Slot 41: camera ray mode, debug visualization mode, two spares.
    pub debug: [f32; 4],
    /// Slot 42: flame edge, power, multiplier, time scale.
    pub flames_a: [f32; 4],
    /// Slot 43: flame inside falloff, surface noise scale, two spares.
    pub flames_b: [f32; 4],
    /// Slot 44: geodesic anim mode, rotation speed, dome clip, reserved.
    pub geo_anim: [f32; 4],
    /// Slot 45: plasma scale, speed, turbulence, intensity.
    pub v8_plasma: [f32; 4],
    /// Slot 46: ring frequency, speed, sharpness, center value.
    pub v8_ring_a: [f32; 4],
    /// Slot 47: ring mod power, intensity, core type, reserved.
    pub v8_ring_b: [f32; 4],
    /// Slot 48: corona extent, fade start, fade power, intensity.
    pub v8_corona: [f32; 4],
    /// Slot 49: electric flash, fill intensity, fill darken, line width.
    pub v8_electric: [f32; 4],
}

impl FieldUniforms {
    /// Exact size of the block in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// The block as bytes, ready for a buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for FieldUniforms {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_f32(bytes: &[u8], offset: usize) -> f32 {
        let mut lane = [0u8; 4];
        lane.copy_from_slice(&bytes[offset..offset + 4]);
        f32::from_ne_bytes(lane)
    }

    #[test]
    fn test_size_matches_slot_arithmetic() {
        assert_eq!(
            FieldUniforms::SIZE,
            VEC4_SLOTS * SLOT_BYTES + MAT4_COUNT * 4 * SLOT_BYTES
        );
        assert_eq!(FieldUniforms::SIZE, 800);
        assert_eq!(FieldUniforms::SIZE % SLOT_BYTES, 0);
    }

    #[test]
    fn test_field_offsets_match_slot_numbers() {
        let mut block = FieldUniforms::zeroed();
        block.position = [1.0, 2.0, 3.0, 4.0];
        block.anim_base = [0.5, 1.5, 2.5, 3.5];
        block.camera_pos_time = [0.0, 0.0, 0.0, 42.5];
        block.view_proj[0][0] = 7.0;
        block.debug = [1.0, 2.0, 0.0, 0.0];
        block.v8_electric = [0.1, 0.2, 0.3, 0.4];

        let bytes = block.as_bytes();
        assert_eq!(bytes.len(), FieldUniforms::SIZE);

        assert_eq!(read_f32(bytes, 0), 1.0);
        assert_eq!(read_f32(bytes, 3 * 4), 4.0);
        assert_eq!(read_f32(bytes, 6 * 16), 0.5);
        assert_eq!(read_f32(bytes, 29 * 16 + 12), 42.5);
        assert_eq!(read_f32(bytes, 37 * 16), 7.0);
        assert_eq!(read_f32(bytes, 41 * 16), 1.0);
        assert_eq!(read_f32(bytes, 41 * 16 + 4), 2.0);
        assert_eq!(read_f32(bytes, 49 * 16 + 12), 0.4);
    }

    #[test]
    fn test_wgsl_struct_mirrors_rust_layout() {
        let source = include_str!("../../shaders/field_common.wgsl");
        let start = source
            .find("struct FieldUniforms")
            .expect("field_common.wgsl declares FieldUniforms");
        let body_start = source[start..].find('{').map(|i| start + i + 1).unwrap();
        let body_end = source[body_start..].find('}').map(|i| body_start + i).unwrap();
        let body = &source[body_start..body_end];

        let vec4s = body.matches(": vec4<f32>").count();
        let mat4s = body.matches(": mat4x4<f32>").count();
        assert_eq!(vec4s, VEC4_SLOTS);
        assert_eq!(mat4s, MAT4_COUNT);
        assert_eq!(
            vec4s * SLOT_BYTES + mat4s * 4 * SLOT_BYTES,
            FieldUniforms::SIZE
        );
    }
}
