//! Electric-aura (V8) parameter groups.

use serde::{Deserialize, Serialize};

/// Electric plasma noise texture.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct V8PlasmaParams {
    /// Pattern size (1-50)
    pub scale: f32,
    /// Animation speed (0-10)
    pub speed: f32,
    /// Ridged intensity: 0=smooth, 1=fully ridged
    pub turbulence: f32,
    /// Brightness multiplier (0-10)
    pub intensity: f32,
}

impl V8PlasmaParams {
    /// Stock electric plasma.
    pub const DEFAULT: Self = Self::new(6.0, 1.0, 1.0, 2.0);

    /// Creates a plasma group.
    #[must_use]
    pub const fn new(scale: f32, speed: f32, turbulence: f32, intensity: f32) -> Self {
        Self { scale, speed, turbulence, intensity }
    }

    /// Replaces the pattern size.
    #[must_use]
    pub fn with_scale(mut self, v: f32) -> Self {
        self.scale = v;
        self
    }

    /// Replaces the animation speed.
    #[must_use]
    pub fn with_speed(mut self, v: f32) -> Self {
        self.speed = v;
        self
    }

    /// Replaces the turbulence.
    #[must_use]
    pub fn with_turbulence(mut self, v: f32) -> Self {
        self.turbulence = v;
        self
    }

    /// Replaces the brightness multiplier.
    #[must_use]
    pub fn with_intensity(mut self, v: f32) -> Self {
        self.intensity = v;
        self
    }
}

impl Default for V8PlasmaParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pulsating logarithmic rings. Seven fields, two uniform slots; the
/// core-type selector rides in the second slot for packing efficiency.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct V8RingParams {
    /// Ring count (1-20)
    pub frequency: f32,
    /// Ring expansion rate (0-20)
    pub speed: f32,
    /// Ring edge sharpness (0.1-10)
    pub sharpness: f32,
    /// Ring brightness center (0-0.5)
    pub center_value: f32,
    /// Ring modulation curve (0-2)
    pub mod_power: f32,
    /// Ring brightness multiplier (0-10)
    pub intensity: f32,
    /// Core pattern: 0=default, 1=electric FBM
    pub core_type: f32,
}

impl V8RingParams {
    /// Stock ring stack with the electric core enabled.
    pub const DEFAULT: Self = Self::new(4.0, 5.0, 28.0, 0.1, 0.9, 1.0, 1.0);

    /// Creates a ring group.
    #[must_use]
    pub const fn new(
        frequency: f32,
        speed: f32,
        sharpness: f32,
        center_value: f32,
        mod_power: f32,
        intensity: f32,
        core_type: f32,
    ) -> Self {
        Self { frequency, speed, sharpness, center_value, mod_power, intensity, core_type }
    }

    /// Whether the electric FBM core is selected.
    #[must_use]
    pub fn is_electric_core(&self) -> bool {
        self.core_type > 0.5
    }

    /// Replaces the ring count.
    #[must_use]
    pub fn with_frequency(mut self, v: f32) -> Self {
        self.frequency = v;
        self
    }

    /// Replaces the expansion rate.
    #[must_use]
    pub fn with_speed(mut self, v: f32) -> Self {
        self.speed = v;
        self
    }

    /// Replaces the edge sharpness.
    #[must_use]
    pub fn with_sharpness(mut self, v: f32) -> Self {
        self.sharpness = v;
        self
    }

    /// Replaces the brightness center.
    #[must_use]
    pub fn with_center_value(mut self, v: f32) -> Self {
        self.center_value = v;
        self
    }

    /// Replaces the modulation curve.
    #[must_use]
    pub fn with_mod_power(mut self, v: f32) -> Self {
        self.mod_power = v;
        self
    }

    /// Replaces the brightness multiplier.
    #[must_use]
    pub fn with_intensity(mut self, v: f32) -> Self {
        self.intensity = v;
        self
    }

    /// Selects the core pattern.
    #[must_use]
    pub fn with_core_type(mut self, electric: bool) -> Self {
        self.core_type = if electric { 1.0 } else { 0.0 };
        self
    }
}

impl Default for V8RingParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Corona envelope around the electric aura.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct V8CoronaParams {
    /// Max reach as a radius multiplier (1-10)
    pub extent: f32,
    /// Where the envelope fade begins: 0=edge, 1=center
    pub fade_start: f32,
    /// Envelope fade curve power (0.1-10)
    pub fade_power: f32,
    /// Overall corona brightness (0-10)
    pub intensity: f32,
}

impl V8CoronaParams {
    /// Stock envelope.
    pub const DEFAULT: Self = Self::new(2.0, 0.5, 1.0, 1.0);

    /// Creates a corona envelope group.
    #[must_use]
    pub const fn new(extent: f32, fade_start: f32, fade_power: f32, intensity: f32) -> Self {
        Self { extent, fade_start, fade_power, intensity }
    }

    /// Replaces the reach.
    #[must_use]
    pub fn with_extent(mut self, v: f32) -> Self {
        self.extent = v;
        self
    }

    /// Replaces the fade start.
    #[must_use]
    pub fn with_fade_start(mut self, v: f32) -> Self {
        self.fade_start = v;
        self
    }

    /// Replaces the fade power.
    #[must_use]
    pub fn with_fade_power(mut self, v: f32) -> Self {
        self.fade_power = v;
        self
    }

    /// Replaces the brightness.
    #[must_use]
    pub fn with_intensity(mut self, v: f32) -> Self {
        self.intensity = v;
        self
    }
}

impl Default for V8CoronaParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Electric core flash, fill and line characteristics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct V8ElectricParams {
    /// Scene flash toggle: 0=off, 1=on
    pub flash: f32,
    /// Fill visibility between lines: 0=minimal, 1=rich
    pub fill_intensity: f32,
    /// Fill color: 0=white, 0.5=match lines, 1=black
    pub fill_darken: f32,
    /// Line thickness control (higher = thinner)
    pub line_width: f32,
}

impl V8ElectricParams {
    /// Flash off, moderate fill.
    pub const DEFAULT: Self = Self::new(0.0, 0.5, 0.0, -140.0);

    /// Creates an electric core group.
    #[must_use]
    pub const fn new(flash: f32, fill_intensity: f32, fill_darken: f32, line_width: f32) -> Self {
        Self { flash, fill_intensity, fill_darken, line_width }
    }

    /// Whether the scene flash is enabled.
    #[must_use]
    pub fn is_flash_enabled(&self) -> bool {
        self.flash > 0.5
    }

    /// Toggles the scene flash.
    #[must_use]
    pub fn with_flash(mut self, on: bool) -> Self {
        self.flash = if on { 1.0 } else { 0.0 };
        self
    }

    /// Replaces the fill visibility.
    #[must_use]
    pub fn with_fill_intensity(mut self, v: f32) -> Self {
        self.fill_intensity = v;
        self
    }

    /// Replaces the fill darkening.
    #[must_use]
    pub fn with_fill_darken(mut self, v: f32) -> Self {
        self.fill_darken = v;
        self
    }

    /// Replaces the line width control.
    #[must_use]
    pub fn with_line_width(mut self, v: f32) -> Self {
        self.line_width = v;
        self
    }
}

impl Default for V8ElectricParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_views() {
        assert!(V8RingParams::DEFAULT.is_electric_core());
        assert!(!V8RingParams::DEFAULT.with_core_type(false).is_electric_core());
        assert!(!V8ElectricParams::DEFAULT.is_flash_enabled());
        assert!(V8ElectricParams::DEFAULT.with_flash(true).is_flash_enabled());
    }
}
