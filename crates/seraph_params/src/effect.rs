//! Effect family selection.

use serde::{Deserialize, Serialize};

/// The post-process effect family applied to a field.
///
/// Each family corresponds to its own shader body. Families can be mixed
/// freely across fields; every field carries its own choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    /// No post-process pass. The field relies on mesh rendering only.
    None,
    /// Volumetric energy orb: core bloom, edge ring, noise interior,
    /// radial glow lines.
    #[default]
    EnergyOrb,
    /// Geodesic dome: icosahedral tiling, extruded cells, edge spectrum.
    Geodesic,
}

impl EffectType {
    /// Stable serialization id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::EnergyOrb => "energy_orb",
            Self::Geodesic => "geodesic",
        }
    }

    /// Human-readable name for status output.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::None => "No Effect",
            Self::EnergyOrb => "Energy Orb",
            Self::Geodesic => "Geodesic Sphere",
        }
    }

    /// Value written into the uniform block's effect-type lane.
    #[must_use]
    pub const fn shader_value(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::EnergyOrb => 1.0,
            Self::Geodesic => 2.0,
        }
    }

    /// Looks up a family by id, case-insensitive. Unknown ids map to `None`.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        [Self::None, Self::EnergyOrb, Self::Geodesic]
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(id))
            .unwrap_or(Self::None)
    }

    /// Whether this family needs the post-process pipeline at all.
    #[must_use]
    pub const fn requires_post_process(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for EffectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
