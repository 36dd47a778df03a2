//! Maps effect family and version to shader program identity.
//!
//! Two layers of identity exist on purpose. A [`ShaderKey`] names WHICH
//! shader body to compile and is shared by every field with the same
//! family/version. A [`ProgramId`] names ONE compiled program and embeds
//! the field id, because a loaded program carries mutable per-pass state;
//! two fields sharing one program visibly desynchronize their animation.

use seraph_params::{EffectType, FieldConfig};

use crate::registry::FieldId;

/// Which shader body a field wants, before per-field uniqueness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShaderKey {
    /// Effect family.
    pub effect: EffectType,
    /// Family version. Only meaningful for the orb family.
    pub version: i32,
}

impl ShaderKey {
    /// Reads the key out of a field config.
    #[must_use]
    pub fn from_config(config: &FieldConfig) -> Self {
        Self { effect: config.effect_type(), version: config.version() }
    }

    /// Base program name for this key, or `None` when the family renders
    /// without a post-process pass.
    ///
    /// Version 4 never shipped; it and any out-of-range version fall back
    /// to the v1 body rather than failing the whole field.
    #[must_use]
    pub fn base_name(self) -> Option<&'static str> {
        match self.effect {
            EffectType::None => None,
            EffectType::Geodesic => Some("field_geodesic"),
            EffectType::EnergyOrb => Some(match self.version {
                2 => "field_orb_v2",
                3 => "field_orb_v3",
                5 => "field_orb_v5",
                6 => "field_orb_v6",
                7 => "field_orb_v7",
                8 => "field_orb_v8",
                _ => "field_orb_v1",
            }),
        }
    }

    /// Every key that resolves to a program, for prewarming.
    #[must_use]
    pub fn all_renderable() -> Vec<Self> {
        let mut keys: Vec<Self> = [1, 2, 3, 5, 6, 7, 8]
            .into_iter()
            .map(|version| Self { effect: EffectType::EnergyOrb, version })
            .collect();
        keys.push(Self { effect: EffectType::Geodesic, version: 1 });
        keys
    }

    /// Short form for logging.
    #[must_use]
    pub fn describe(self) -> String {
        match self.effect {
            EffectType::Geodesic => "Geodesic".to_owned(),
            other => format!("{} V{}", other.display_name(), self.version),
        }
    }
}

/// The full load key for one compiled program: base name, field id and
/// HDR/LDR suffix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProgramId(String);

impl ProgramId {
    /// Derives the load key, or `None` when the key has no program.
    #[must_use]
    pub fn resolve(key: ShaderKey, field: FieldId, hdr: bool) -> Option<Self> {
        let base = key.base_name()?;
        let suffix = if hdr { "_hdr" } else { "_ldr" };
        Some(Self(format!("{base}_f_{}{suffix}", field.raw())))
    }

    /// The identifier handed to the program loader.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orb_versions_map_to_bodies() {
        for (version, name) in [
            (1, "field_orb_v1"),
            (2, "field_orb_v2"),
            (3, "field_orb_v3"),
            (5, "field_orb_v5"),
            (6, "field_orb_v6"),
            (7, "field_orb_v7"),
            (8, "field_orb_v8"),
        ] {
            let key = ShaderKey { effect: EffectType::EnergyOrb, version };
            assert_eq!(key.base_name(), Some(name));
        }
    }

    #[test]
    fn test_unreleased_and_out_of_range_versions_fall_back_to_v1() {
        for version in [4, 0, -2, 99] {
            let key = ShaderKey { effect: EffectType::EnergyOrb, version };
            assert_eq!(key.base_name(), Some("field_orb_v1"));
        }
    }

    #[test]
    fn test_none_family_has_no_program() {
        let key = ShaderKey { effect: EffectType::None, version: 1 };
        assert_eq!(key.base_name(), None);
        assert_eq!(ProgramId::resolve(key, FieldId::new(7), true), None);
    }

    #[test]
    fn test_program_id_is_unique_per_field() {
        let key = ShaderKey { effect: EffectType::EnergyOrb, version: 6 };
        let a = ProgramId::resolve(key, FieldId::new(1042), true);
        let b = ProgramId::resolve(key, FieldId::new(1043), true);
        assert_eq!(a.as_ref().map(ProgramId::as_str), Some("field_orb_v6_f_1042_hdr"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_program_id_embeds_hdr_choice() {
        let key = ShaderKey { effect: EffectType::Geodesic, version: 1 };
        let hdr = ProgramId::resolve(key, FieldId::new(5), true);
        let ldr = ProgramId::resolve(key, FieldId::new(5), false);
        assert_eq!(hdr.as_ref().map(ProgramId::as_str), Some("field_geodesic_f_5_hdr"));
        assert_eq!(ldr.as_ref().map(ProgramId::as_str), Some("field_geodesic_f_5_ldr"));
    }

    #[test]
    fn test_all_renderable_covers_every_body() {
        let keys = ShaderKey::all_renderable();
        let names: Vec<_> = keys.iter().filter_map(|k| k.base_name()).collect();
        assert_eq!(keys.len(), names.len());
        assert!(names.contains(&"field_orb_v1"));
        assert!(names.contains(&"field_orb_v8"));
        assert!(names.contains(&"field_geodesic"));
    }
}
