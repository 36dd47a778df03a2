//! # Render Settings
//!
//! User-facing quality knobs, loaded once at startup from TOML and
//! adjustable at runtime through the context (which knows which caches a
//! change invalidates - flipping HDR recompiles every program).

use serde::{Deserialize, Serialize};

use crate::clock::TimeSourceMode;
use crate::error::{RenderError, RenderResult};

/// Quality and pipeline settings for the field effect system.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Render field passes into RGBA16F targets; when false everything is
    /// RGBA8 and the bloom threshold shifts accordingly.
    pub hdr_enabled: bool,
    /// Intensity handed to the composite pass, scaled per field at pack time.
    pub hdr_intensity: f32,
    /// Blur resolution factor: 1.0 = full res, 0.5 = half, 0.25 = quarter.
    pub blur_quality: f32,
    /// Blur iterations; each one is a horizontal plus a vertical pass.
    pub blur_iterations: u32,
    /// Which clock drives shader animation.
    pub time_source: TimeSourceMode,
    /// World units over which a field behind geometry fades out.
    pub occlusion_bleed_range: f32,
    /// Visibility ceiling once a field is behind geometry.
    pub occlusion_max_bleed: f32,
}

impl RenderSettings {
    /// Parse settings from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> RenderResult<Self> {
        let mut settings: Self =
            toml::from_str(text).map_err(|e| RenderError::InvalidSettings(e.to_string()))?;
        settings.clamp_ranges();
        Ok(settings)
    }

    /// Serialize settings to TOML text.
    pub fn to_toml_string(&self) -> RenderResult<String> {
        toml::to_string_pretty(self).map_err(|e| RenderError::InvalidSettings(e.to_string()))
    }

    /// Set the blur resolution factor, clamped to `[0.25, 1.0]`.
    pub fn set_blur_quality(&mut self, quality: f32) {
        self.blur_quality = quality.clamp(0.25, 1.0);
    }

    /// Set the blur iteration count, clamped to `[1, 8]`.
    pub fn set_blur_iterations(&mut self, iterations: u32) {
        self.blur_iterations = iterations.clamp(1, 8);
    }

    fn clamp_ranges(&mut self) {
        self.blur_quality = self.blur_quality.clamp(0.25, 1.0);
        self.blur_iterations = self.blur_iterations.clamp(1, 8);
        self.occlusion_max_bleed = self.occlusion_max_bleed.clamp(0.0, 1.0);
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            hdr_enabled: true,
            hdr_intensity: 1.0,
            blur_quality: 1.0,
            blur_iterations: 2,
            time_source: TimeSourceMode::ClientTime,
            occlusion_bleed_range: 5.0,
            occlusion_max_bleed: 0.3,
        }
    }
}
