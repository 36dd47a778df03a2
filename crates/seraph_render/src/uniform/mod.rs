//! Uniform block layout and packing.

mod block;
mod pack;

pub use block::{FieldUniforms, MAT4_COUNT, SLOT_BYTES, VEC4_SLOTS};
pub use pack::DebugParams;
