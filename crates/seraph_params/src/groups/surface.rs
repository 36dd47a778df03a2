//! Glow lines, corona, flames and the V2 surface-detail groups.

use serde::{Deserialize, Serialize};

/// Radial glow line and ray shaping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowLineParams {
    /// Radial line count (8-24)
    pub count: f32,
    /// Line brightness (0-1)
    pub intensity: f32,
    /// Ray intensity exponent (1-10)
    pub ray_power: f32,
    /// Ray edge sharpness (0.02-10)
    pub ray_sharpness: f32,
}

impl GlowLineParams {
    /// Sixteen full-brightness lines.
    pub const DEFAULT: Self = Self::new(16.0, 1.0, 2.0, 1.0);

    /// Creates a glow line group.
    #[must_use]
    pub const fn new(count: f32, intensity: f32, ray_power: f32, ray_sharpness: f32) -> Self {
        Self { count, intensity, ray_power, ray_sharpness }
    }

    /// Replaces the line count.
    #[must_use]
    pub fn with_count(mut self, v: f32) -> Self {
        self.count = v;
        self
    }

    /// Replaces the line brightness.
    #[must_use]
    pub fn with_intensity(mut self, v: f32) -> Self {
        self.intensity = v;
        self
    }

    /// Replaces the ray exponent.
    #[must_use]
    pub fn with_ray_power(mut self, v: f32) -> Self {
        self.ray_power = v;
        self
    }

    /// Replaces the ray sharpness.
    #[must_use]
    pub fn with_ray_sharpness(mut self, v: f32) -> Self {
        self.ray_sharpness = v;
        self
    }
}

impl Default for GlowLineParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Corona / outer glow shaping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoronaParams {
    /// Corona width (0.2-1.5)
    pub width: f32,
    /// Falloff exponent
    pub power: f32,
    /// Brightness multiplier
    pub multiplier: f32,
    /// Ring glow power (1-10)
    pub ring_power: f32,
}

impl CoronaParams {
    /// Stock corona.
    pub const DEFAULT: Self = Self::new(0.5, 2.0, 50.0, 1.0);

    /// Creates a corona group.
    #[must_use]
    pub const fn new(width: f32, power: f32, multiplier: f32, ring_power: f32) -> Self {
        Self { width, power, multiplier, ring_power }
    }

    /// Replaces the width.
    #[must_use]
    pub fn with_width(mut self, v: f32) -> Self {
        self.width = v;
        self
    }

    /// Replaces the falloff exponent.
    #[must_use]
    pub fn with_power(mut self, v: f32) -> Self {
        self.power = v;
        self
    }

    /// Replaces the brightness multiplier.
    #[must_use]
    pub fn with_multiplier(mut self, v: f32) -> Self {
        self.multiplier = v;
        self
    }

    /// Replaces the ring power.
    #[must_use]
    pub fn with_ring_power(mut self, v: f32) -> Self {
        self.ring_power = v;
        self
    }
}

impl Default for CoronaParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Animated noise-flame shaping for the pulsar variant. Six fields, two
/// uniform slots.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlamesParams {
    /// Distance threshold
    pub edge: f32,
    /// Falloff exponent
    pub power: f32,
    /// Brightness multiplier
    pub multiplier: f32,
    /// Time modulation
    pub time_scale: f32,
    /// Inside-sphere falloff
    pub inside_falloff: f32,
    /// Surface texture scale
    pub surface_noise_scale: f32,
}

impl FlamesParams {
    /// Stock pulsar flames.
    pub const DEFAULT: Self = Self::new(1.1, 2.0, 50.0, 1.2, 24.0, 5.0);

    /// Creates a flames group.
    #[must_use]
    pub const fn new(
        edge: f32,
        power: f32,
        multiplier: f32,
        time_scale: f32,
        inside_falloff: f32,
        surface_noise_scale: f32,
    ) -> Self {
        Self { edge, power, multiplier, time_scale, inside_falloff, surface_noise_scale }
    }

    /// Replaces the edge threshold.
    #[must_use]
    pub fn with_edge(mut self, v: f32) -> Self {
        self.edge = v;
        self
    }

    /// Replaces the falloff exponent.
    #[must_use]
    pub fn with_power(mut self, v: f32) -> Self {
        self.power = v;
        self
    }

    /// Replaces the brightness multiplier.
    #[must_use]
    pub fn with_multiplier(mut self, v: f32) -> Self {
        self.multiplier = v;
        self
    }

    /// Replaces the time modulation.
    #[must_use]
    pub fn with_time_scale(mut self, v: f32) -> Self {
        self.time_scale = v;
        self
    }

    /// Replaces the inside falloff.
    #[must_use]
    pub fn with_inside_falloff(mut self, v: f32) -> Self {
        self.inside_falloff = v;
        self
    }

    /// Replaces the surface noise scale.
    #[must_use]
    pub fn with_surface_noise_scale(mut self, v: f32) -> Self {
        self.surface_noise_scale = v;
        self
    }
}

impl Default for FlamesParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// V2 corona placement and core scaling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct V2CoronaDetail {
    /// Where the glow begins
    pub corona_start: f32,
    /// Corona intensity multiplier
    pub corona_brightness: f32,
    /// Core size multiplier
    pub core_radius_scale: f32,
    /// Core cutoff radius
    pub core_mask_radius: f32,
}

impl V2CoronaDetail {
    /// Stock V2 corona.
    pub const DEFAULT: Self = Self::new(0.15, 1.0, 0.1, 0.35);

    /// Creates a V2 corona detail group.
    #[must_use]
    pub const fn new(corona_start: f32, corona_brightness: f32, core_radius_scale: f32, core_mask_radius: f32) -> Self {
        Self { corona_start, corona_brightness, core_radius_scale, core_mask_radius }
    }

    /// Replaces the corona start.
    #[must_use]
    pub fn with_corona_start(mut self, v: f32) -> Self {
        self.corona_start = v;
        self
    }

    /// Replaces the corona brightness.
    #[must_use]
    pub fn with_corona_brightness(mut self, v: f32) -> Self {
        self.corona_brightness = v;
        self
    }

    /// Replaces the core radius scale.
    #[must_use]
    pub fn with_core_radius_scale(mut self, v: f32) -> Self {
        self.core_radius_scale = v;
        self
    }

    /// Replaces the core mask radius.
    #[must_use]
    pub fn with_core_mask_radius(mut self, v: f32) -> Self {
        self.core_mask_radius = v;
        self
    }
}

impl Default for V2CoronaDetail {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// V2 core glow shaping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct V2CoreDetail {
    /// Core glow spread multiplier
    pub core_spread: f32,
    /// Core glow intensity
    pub core_glow: f32,
    /// Core edge softness
    pub core_mask_soft: f32,
    /// Edge ring position
    pub edge_radius: f32,
}

impl V2CoreDetail {
    /// Stock V2 core.
    pub const DEFAULT: Self = Self::new(1.0, 1.0, 0.05, 0.3);

    /// Creates a V2 core detail group.
    #[must_use]
    pub const fn new(core_spread: f32, core_glow: f32, core_mask_soft: f32, edge_radius: f32) -> Self {
        Self { core_spread, core_glow, core_mask_soft, edge_radius }
    }

    /// Replaces the core spread.
    #[must_use]
    pub fn with_core_spread(mut self, v: f32) -> Self {
        self.core_spread = v;
        self
    }

    /// Replaces the core glow.
    #[must_use]
    pub fn with_core_glow(mut self, v: f32) -> Self {
        self.core_glow = v;
        self
    }

    /// Replaces the core mask softness.
    #[must_use]
    pub fn with_core_mask_soft(mut self, v: f32) -> Self {
        self.core_mask_soft = v;
        self
    }

    /// Replaces the edge ring position.
    #[must_use]
    pub fn with_edge_radius(mut self, v: f32) -> Self {
        self.edge_radius = v;
        self
    }
}

impl Default for V2CoreDetail {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// V2 edge ring shaping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct V2EdgeDetail {
    /// Ring spread multiplier
    pub edge_spread: f32,
    /// Ring glow intensity
    pub edge_glow: f32,
    /// Sharpness divisor
    pub sharp_scale: f32,
    /// Pattern UV scale
    pub lines_uv_scale: f32,
}

impl V2EdgeDetail {
    /// Stock V2 edge.
    pub const DEFAULT: Self = Self::new(1.0, 1.0, 4.0, 3.0);

    /// Creates a V2 edge detail group.
    #[must_use]
    pub const fn new(edge_spread: f32, edge_glow: f32, sharp_scale: f32, lines_uv_scale: f32) -> Self {
        Self { edge_spread, edge_glow, sharp_scale, lines_uv_scale }
    }

    /// Replaces the edge spread.
    #[must_use]
    pub fn with_edge_spread(mut self, v: f32) -> Self {
        self.edge_spread = v;
        self
    }

    /// Replaces the edge glow.
    #[must_use]
    pub fn with_edge_glow(mut self, v: f32) -> Self {
        self.edge_glow = v;
        self
    }

    /// Replaces the sharpness divisor.
    #[must_use]
    pub fn with_sharp_scale(mut self, v: f32) -> Self {
        self.sharp_scale = v;
        self
    }

    /// Replaces the pattern UV scale.
    #[must_use]
    pub fn with_lines_uv_scale(mut self, v: f32) -> Self {
        self.lines_uv_scale = v;
        self
    }
}

impl Default for V2EdgeDetail {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// V2 Voronoi line-pattern shaping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct V2LinesDetail {
    /// Second layer density multiplier
    pub density_mult: f32,
    /// First layer power exponent
    pub contrast_1: f32,
    /// Second layer power exponent
    pub contrast_2: f32,
    /// Pattern cutoff radius
    pub mask_radius: f32,
}

impl V2LinesDetail {
    /// Stock V2 lines.
    pub const DEFAULT: Self = Self::new(1.6, 2.5, 3.0, 0.3);

    /// Creates a V2 lines detail group.
    #[must_use]
    pub const fn new(density_mult: f32, contrast_1: f32, contrast_2: f32, mask_radius: f32) -> Self {
        Self { density_mult, contrast_1, contrast_2, mask_radius }
    }

    /// Replaces the density multiplier.
    #[must_use]
    pub fn with_density_mult(mut self, v: f32) -> Self {
        self.density_mult = v;
        self
    }

    /// Replaces the first contrast exponent.
    #[must_use]
    pub fn with_contrast_1(mut self, v: f32) -> Self {
        self.contrast_1 = v;
        self
    }

    /// Replaces the second contrast exponent.
    #[must_use]
    pub fn with_contrast_2(mut self, v: f32) -> Self {
        self.contrast_2 = v;
        self
    }

    /// Replaces the pattern cutoff radius.
    #[must_use]
    pub fn with_mask_radius(mut self, v: f32) -> Self {
        self.mask_radius = v;
        self
    }
}

impl Default for V2LinesDetail {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// V2 alpha output and ray animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct V2AlphaDetail {
    /// Line-pattern edge softness
    pub lines_mask_soft: f32,
    /// Ray rotation speed
    pub ray_rot_speed: f32,
    /// Ray origin radius
    pub ray_start_radius: f32,
    /// Output alpha multiplier
    pub alpha_scale: f32,
}

impl V2AlphaDetail {
    /// Stock V2 alpha.
    pub const DEFAULT: Self = Self::new(0.02, 0.3, 0.32, 1.0);

    /// Creates a V2 alpha detail group.
    #[must_use]
    pub const fn new(lines_mask_soft: f32, ray_rot_speed: f32, ray_start_radius: f32, alpha_scale: f32) -> Self {
        Self { lines_mask_soft, ray_rot_speed, ray_start_radius, alpha_scale }
    }

    /// Replaces the line-pattern softness.
    #[must_use]
    pub fn with_lines_mask_soft(mut self, v: f32) -> Self {
        self.lines_mask_soft = v;
        self
    }

    /// Replaces the ray rotation speed.
    #[must_use]
    pub fn with_ray_rot_speed(mut self, v: f32) -> Self {
        self.ray_rot_speed = v;
        self
    }

    /// Replaces the ray origin radius.
    #[must_use]
    pub fn with_ray_start_radius(mut self, v: f32) -> Self {
        self.ray_start_radius = v;
        self
    }

    /// Replaces the alpha multiplier.
    #[must_use]
    pub fn with_alpha_scale(mut self, v: f32) -> Self {
        self.alpha_scale = v;
        self
    }
}

impl Default for V2AlphaDetail {
    fn default() -> Self {
        Self::DEFAULT
    }
}
