//! Geometry, transform, lighting and scene-timing groups for SDF effects.

use serde::{Deserialize, Serialize};

/// Tile geometry for SDF-based effects.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryParams {
    /// Tile density (1-10)
    pub subdivisions: f32,
    /// Top edge rounding (0-0.5)
    pub round_top: f32,
    /// Corner rounding (0-0.5)
    pub round_corner: f32,
    /// Shell thickness (0.5-5.0)
    pub thickness: f32,
}

impl GeometryParams {
    /// Stock geodesic tiling.
    pub const DEFAULT: Self = Self::new(3.0, 0.05, 0.1, 2.0);

    /// Creates a geometry group.
    #[must_use]
    pub const fn new(subdivisions: f32, round_top: f32, round_corner: f32, thickness: f32) -> Self {
        Self { subdivisions, round_top, round_corner, thickness }
    }

    /// Replaces the subdivisions.
    #[must_use]
    pub fn with_subdivisions(mut self, v: f32) -> Self {
        self.subdivisions = v;
        self
    }

    /// Replaces the top rounding.
    #[must_use]
    pub fn with_round_top(mut self, v: f32) -> Self {
        self.round_top = v;
        self
    }

    /// Replaces the corner rounding.
    #[must_use]
    pub fn with_round_corner(mut self, v: f32) -> Self {
        self.round_corner = v;
        self
    }

    /// Replaces the shell thickness.
    #[must_use]
    pub fn with_thickness(mut self, v: f32) -> Self {
        self.thickness = v;
        self
    }
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Cell grid extrusion and wave modulation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryGridParams {
    /// Tile gap (0-2)
    pub gap: f32,
    /// Extrusion height (0.1-10)
    pub height: f32,
    /// Wave pattern resolution (1-200)
    pub wave_resolution: f32,
    /// Wave amplitude (0-1)
    pub wave_amplitude: f32,
}

impl GeometryGridParams {
    /// Stock cell grid.
    pub const DEFAULT: Self = Self::new(0.005, 2.0, 30.0, 0.1);

    /// Creates a grid group.
    #[must_use]
    pub const fn new(gap: f32, height: f32, wave_resolution: f32, wave_amplitude: f32) -> Self {
        Self { gap, height, wave_resolution, wave_amplitude }
    }

    /// Replaces the tile gap.
    #[must_use]
    pub fn with_gap(mut self, v: f32) -> Self {
        self.gap = v;
        self
    }

    /// Replaces the extrusion height.
    #[must_use]
    pub fn with_height(mut self, v: f32) -> Self {
        self.height = v;
        self
    }

    /// Replaces the wave resolution.
    #[must_use]
    pub fn with_wave_resolution(mut self, v: f32) -> Self {
        self.wave_resolution = v;
        self
    }

    /// Replaces the wave amplitude.
    #[must_use]
    pub fn with_wave_amplitude(mut self, v: f32) -> Self {
        self.wave_amplitude = v;
        self
    }
}

impl Default for GeometryGridParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Geodesic-specific animation modes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoAnimParams {
    /// 0.0=static, 0.1=wave, 0.2=Y-wave, 0.3=gap breathing
    pub anim_mode: f32,
    /// Sphere rotation speed (radians/sec)
    pub rotation_speed: f32,
    /// 0=full sphere, 0.5=hemisphere, 1=flat
    pub dome_clip: f32,
    /// Unused lane
    pub reserved: f32,
}

impl GeoAnimParams {
    /// Slow wave with full sphere.
    pub const DEFAULT: Self = Self::new(0.1, 0.2, 0.0, 0.0);

    /// Creates a geodesic animation group.
    #[must_use]
    pub const fn new(anim_mode: f32, rotation_speed: f32, dome_clip: f32, reserved: f32) -> Self {
        Self { anim_mode, rotation_speed, dome_clip, reserved }
    }

    /// Replaces the animation mode.
    #[must_use]
    pub fn with_anim_mode(mut self, v: f32) -> Self {
        self.anim_mode = v;
        self
    }

    /// Replaces the rotation speed.
    #[must_use]
    pub fn with_rotation_speed(mut self, v: f32) -> Self {
        self.rotation_speed = v;
        self
    }

    /// Replaces the dome clip.
    #[must_use]
    pub fn with_dome_clip(mut self, v: f32) -> Self {
        self.dome_clip = v;
        self
    }
}

impl Default for GeoAnimParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Model rotation and scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    /// Model rotation X (radians)
    pub rotation_x: f32,
    /// Model rotation Y (radians)
    pub rotation_y: f32,
    /// Model scale multiplier
    pub scale: f32,
    /// Unused lane
    pub reserved: f32,
}

impl TransformParams {
    /// Stock transform.
    pub const DEFAULT: Self = Self::new(1.0, 0.2, 0.0, 0.0);

    /// Creates a transform group.
    #[must_use]
    pub const fn new(rotation_x: f32, rotation_y: f32, scale: f32, reserved: f32) -> Self {
        Self { rotation_x, rotation_y, scale, reserved }
    }

    /// Replaces rotation X.
    #[must_use]
    pub fn with_rotation_x(mut self, v: f32) -> Self {
        self.rotation_x = v;
        self
    }

    /// Replaces rotation Y.
    #[must_use]
    pub fn with_rotation_y(mut self, v: f32) -> Self {
        self.rotation_y = v;
        self
    }

    /// Replaces the scale.
    #[must_use]
    pub fn with_scale(mut self, v: f32) -> Self {
        self.scale = v;
        self
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Lighting response for 3D-styled effects.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingParams {
    /// Diffuse light multiplier
    pub diffuse_strength: f32,
    /// Ambient light multiplier
    pub ambient_strength: f32,
    /// Back rim light
    pub back_light_strength: f32,
    /// Fresnel rim multiplier
    pub fresnel_strength: f32,
}

impl LightingParams {
    /// Stock lighting response.
    pub const DEFAULT: Self = Self::new(1.2, 0.8, 0.3, 0.2);

    /// Creates a lighting group.
    #[must_use]
    pub const fn new(diffuse_strength: f32, ambient_strength: f32, back_light_strength: f32, fresnel_strength: f32) -> Self {
        Self { diffuse_strength, ambient_strength, back_light_strength, fresnel_strength }
    }

    /// Replaces the diffuse multiplier.
    #[must_use]
    pub fn with_diffuse_strength(mut self, v: f32) -> Self {
        self.diffuse_strength = v;
        self
    }

    /// Replaces the ambient multiplier.
    #[must_use]
    pub fn with_ambient_strength(mut self, v: f32) -> Self {
        self.ambient_strength = v;
        self
    }

    /// Replaces the back light.
    #[must_use]
    pub fn with_back_light_strength(mut self, v: f32) -> Self {
        self.back_light_strength = v;
        self
    }

    /// Replaces the fresnel multiplier.
    #[must_use]
    pub fn with_fresnel_strength(mut self, v: f32) -> Self {
        self.fresnel_strength = v;
        self
    }
}

impl Default for LightingParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scene cycle and crossfade timing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingParams {
    /// Animation cycle length in seconds
    pub scene_duration: f32,
    /// Transition blend time in seconds
    pub crossfade_duration: f32,
    /// 0=none, 1/2/3=loop variants
    pub loop_mode: f32,
    /// Pattern frequency (10-30)
    pub anim_frequency: f32,
}

impl TimingParams {
    /// Six-second scenes, two-second crossfade.
    pub const DEFAULT: Self = Self::new(6.0, 2.0, 0.0, 10.0);

    /// Creates a timing group.
    #[must_use]
    pub const fn new(scene_duration: f32, crossfade_duration: f32, loop_mode: f32, anim_frequency: f32) -> Self {
        Self { scene_duration, crossfade_duration, loop_mode, anim_frequency }
    }

    /// Replaces the scene duration.
    #[must_use]
    pub fn with_scene_duration(mut self, v: f32) -> Self {
        self.scene_duration = v;
        self
    }

    /// Replaces the crossfade duration.
    #[must_use]
    pub fn with_crossfade_duration(mut self, v: f32) -> Self {
        self.crossfade_duration = v;
        self
    }

    /// Replaces the loop mode.
    #[must_use]
    pub fn with_loop_mode(mut self, v: f32) -> Self {
        self.loop_mode = v;
        self
    }

    /// Replaces the pattern frequency.
    #[must_use]
    pub fn with_anim_frequency(mut self, v: f32) -> Self {
        self.anim_frequency = v;
        self
    }
}

impl Default for TimingParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}
