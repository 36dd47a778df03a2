//! Noise configuration and detail groups.

use serde::{Deserialize, Serialize};

/// Base noise shaping for the procedural interior.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfigParams {
    /// Low frequency noise resolution
    pub res_low: f32,
    /// High frequency noise resolution
    pub res_high: f32,
    /// Noise amplitude multiplier
    pub amplitude: f32,
    /// Variation seed (-10 to 10)
    pub seed: f32,
}

impl NoiseConfigParams {
    /// Stock noise shaping.
    pub const DEFAULT: Self = Self::new(5.0, 5.0, 2.0, 0.0);

    /// Creates a noise config group.
    #[must_use]
    pub const fn new(res_low: f32, res_high: f32, amplitude: f32, seed: f32) -> Self {
        Self { res_low, res_high, amplitude, seed }
    }

    /// Replaces the low resolution.
    #[must_use]
    pub fn with_res_low(mut self, v: f32) -> Self {
        self.res_low = v;
        self
    }

    /// Replaces the high resolution.
    #[must_use]
    pub fn with_res_high(mut self, v: f32) -> Self {
        self.res_high = v;
        self
    }

    /// Replaces the amplitude.
    #[must_use]
    pub fn with_amplitude(mut self, v: f32) -> Self {
        self.amplitude = v;
        self
    }

    /// Replaces the seed.
    #[must_use]
    pub fn with_seed(mut self, v: f32) -> Self {
        self.seed = v;
        self
    }

    /// Legacy spiral-density view; maps straight onto `res_low`.
    #[must_use]
    pub fn density(&self) -> f32 {
        self.res_low
    }

    /// Legacy spiral-twist view; the old twist knob was calibrated at
    /// one ninth of the high resolution.
    #[must_use]
    pub fn twist(&self) -> f32 {
        self.res_high / 9.0
    }

    /// Legacy density mutator.
    #[must_use]
    pub fn with_density(self, v: f32) -> Self {
        self.with_res_low(v)
    }

    /// Legacy twist mutator, inverse of [`twist`](Self::twist).
    #[must_use]
    pub fn with_twist(self, v: f32) -> Self {
        self.with_res_high(v * 9.0)
    }
}

impl Default for NoiseConfigParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// FBM layering controls. The octave lane is the warm-up scaling target:
/// freshly spawned fields run with a reduced count until warmed up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseDetailParams {
    /// Base detail scale
    pub base_scale: f32,
    /// Per-octave scale multiplier
    pub scale_multiplier: f32,
    /// FBM octave count (1-10)
    pub octaves: f32,
    /// Base noise floor
    pub base_level: f32,
}

impl NoiseDetailParams {
    /// Stock seven-octave FBM.
    pub const DEFAULT: Self = Self::new(0.031_25, 4.0, 7.0, 0.4);

    /// Creates a noise detail group.
    #[must_use]
    pub const fn new(base_scale: f32, scale_multiplier: f32, octaves: f32, base_level: f32) -> Self {
        Self { base_scale, scale_multiplier, octaves, base_level }
    }

    /// Replaces the base scale.
    #[must_use]
    pub fn with_base_scale(mut self, v: f32) -> Self {
        self.base_scale = v;
        self
    }

    /// Replaces the per-octave multiplier.
    #[must_use]
    pub fn with_scale_multiplier(mut self, v: f32) -> Self {
        self.scale_multiplier = v;
        self
    }

    /// Replaces the octave count.
    #[must_use]
    pub fn with_octaves(mut self, v: f32) -> Self {
        self.octaves = v;
        self
    }

    /// Replaces the noise floor.
    #[must_use]
    pub fn with_base_level(mut self, v: f32) -> Self {
        self.base_level = v;
        self
    }
}

impl Default for NoiseDetailParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twist_view_is_inverse_of_mutator() {
        let n = NoiseConfigParams::DEFAULT.with_twist(5.0);
        assert_eq!(n.res_high, 45.0);
        assert!((n.twist() - 5.0).abs() < 1e-6);
        // Density is a straight alias.
        assert_eq!(NoiseConfigParams::DEFAULT.with_density(12.0).res_low, 12.0);
    }
}
