//! Packed color handling.
//!
//! Authoring tools and network config deliver colors as packed 0xAARRGGBB
//! integers; the uniform block wants normalized float channels. `Argb` is
//! the bridge.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A packed 0xAARRGGBB color.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque white
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Opaque black
    pub const BLACK: Self = Self(0xFF00_0000);

    /// Fully transparent
    pub const TRANSPARENT: Self = Self(0x0000_0000);

    /// Creates from packed 0xAARRGGBB bits.
    #[must_use]
    pub const fn new(packed: u32) -> Self {
        Self(packed)
    }

    /// Packs normalized float channels. Values are clamped to [0, 1].
    #[must_use]
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        Self((quantize(a) << 24) | (quantize(r) << 16) | (quantize(g) << 8) | quantize(b))
    }

    /// Red channel in [0, 1]
    #[must_use]
    pub fn r(self) -> f32 {
        ((self.0 >> 16) & 0xFF) as f32 / 255.0
    }

    /// Green channel in [0, 1]
    #[must_use]
    pub fn g(self) -> f32 {
        ((self.0 >> 8) & 0xFF) as f32 / 255.0
    }

    /// Blue channel in [0, 1]
    #[must_use]
    pub fn b(self) -> f32 {
        (self.0 & 0xFF) as f32 / 255.0
    }

    /// Alpha channel in [0, 1]
    #[must_use]
    pub fn a(self) -> f32 {
        ((self.0 >> 24) & 0xFF) as f32 / 255.0
    }

    /// Normalized channels in shader order.
    #[must_use]
    pub fn to_rgba_array(self) -> [f32; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// RGB channels only, alpha discarded.
    #[must_use]
    pub fn to_rgb_array(self) -> [f32; 3] {
        [self.r(), self.g(), self.b()]
    }
}

impl From<u32> for Argb {
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_extraction() {
        let c = Argb::new(0x80FF_4020);
        assert!((c.a() - 128.0 / 255.0).abs() < 1e-6);
        assert!((c.r() - 1.0).abs() < 1e-6);
        assert!((c.g() - 64.0 / 255.0).abs() < 1e-6);
        assert!((c.b() - 32.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_white_and_transparent() {
        assert_eq!(Argb::WHITE.to_rgba_array(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Argb::TRANSPARENT.a(), 0.0);
    }

    #[test]
    fn test_from_f32_roundtrip() {
        let c = Argb::from_f32(1.0, 0.5, 0.0, 1.0);
        assert_eq!(c.0 >> 24, 0xFF);
        assert_eq!((c.0 >> 16) & 0xFF, 0xFF);
        assert_eq!((c.0 >> 8) & 0xFF, 128);
        assert_eq!(c.0 & 0xFF, 0);
    }

    #[test]
    fn test_from_f32_clamps() {
        let c = Argb::from_f32(2.0, -1.0, 0.0, 1.5);
        assert_eq!((c.0 >> 16) & 0xFF, 0xFF);
        assert_eq!((c.0 >> 8) & 0xFF, 0);
        assert_eq!(c.0 >> 24, 0xFF);
    }
}
