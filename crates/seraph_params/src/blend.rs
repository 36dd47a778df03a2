//! Color blend modes.
//!
//! The shader bodies generate base colors procedurally (glow falloffs,
//! SDF distances). A field's blend mode controls how its authored palette
//! combines with that procedural base.

use serde::{Deserialize, Serialize};

/// How authored colors combine with the shader's procedural base color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBlendMode {
    /// `base * color`. White leaves the formula untouched.
    #[default]
    Multiply,
    /// `base + color * intensity`. Black leaves the formula untouched.
    Additive,
    /// `color`, keeping only the formula's alpha/intensity structure.
    Replace,
    /// `mix(base, color, 0.5)` partial blend.
    Mix,
    /// Authored RGB verbatim, formula drives brightness only.
    Direct,
    /// Scene darkening; white subtracts the most.
    Subtract,
}

impl ColorBlendMode {
    /// All modes in shader-value order.
    pub const ALL: [Self; 6] = [
        Self::Multiply,
        Self::Additive,
        Self::Replace,
        Self::Mix,
        Self::Direct,
        Self::Subtract,
    ];

    /// Value written into the uniform block's aux lane.
    #[must_use]
    pub const fn shader_value(self) -> f32 {
        match self {
            Self::Multiply => 0.0,
            Self::Additive => 1.0,
            Self::Replace => 2.0,
            Self::Mix => 3.0,
            Self::Direct => 4.0,
            Self::Subtract => 5.0,
        }
    }

    /// Human-readable name for status output.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Multiply => "Multiply",
            Self::Additive => "Additive",
            Self::Replace => "Replace",
            Self::Mix => "Mix",
            Self::Direct => "Direct",
            Self::Subtract => "Subtract",
        }
    }

    /// Reverse lookup from a shader value. Out-of-range values map to
    /// `Multiply`.
    #[must_use]
    pub fn from_shader_value(value: f32) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.shader_value() == value)
            .unwrap_or(Self::Multiply)
    }
}

impl std::fmt::Display for ColorBlendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_value_roundtrip() {
        for mode in ColorBlendMode::ALL {
            assert_eq!(ColorBlendMode::from_shader_value(mode.shader_value()), mode);
        }
    }

    #[test]
    fn test_unknown_value_falls_back() {
        assert_eq!(ColorBlendMode::from_shader_value(42.0), ColorBlendMode::Multiply);
        assert_eq!(ColorBlendMode::from_shader_value(-1.0), ColorBlendMode::Multiply);
    }
}
