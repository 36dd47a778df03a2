//! # SERAPH Params
//!
//! The effect parameter model: every knob a field shader reads, grouped
//! four floats at a time to mirror the GPU uniform layout.
//!
//! ## CRITICAL RULE
//!
//! Group structs in [`groups`] are wire-ordered. Field declaration order
//! inside a group, and group order inside [`FieldConfig`], match the
//! uniform block slot for slot. Reorder either and every shader misreads
//! its parameters with no compile error anywhere.
//!
//! Adding a parameter goes: claim a lane in an existing group (or a new
//! group in a reserved slot), mirror it in the render crate's uniform
//! struct and in `field_common.wgsl`, then give every preset in
//! [`presets`] an explicit value for it.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod blend;
pub mod config;
pub mod effect;
pub mod groups;
pub mod presets;

pub use blend::ColorBlendMode;
pub use config::{ConfigStaging, FieldConfig};
pub use effect::EffectType;
