//! # SERAPH Shared
//!
//! Common types used by both the logic thread and the render thread.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - `wgpu`
//! - Any GPU or window-related crate
//!
//! If you need graphics types, put them in `seraph_render`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod constants;
pub mod math;

pub use color::Argb;
pub use constants::{
    BASE_RENDER_DISTANCE, FIELD_WARMUP_SECONDS, MAX_RENDERED_FIELDS, MAX_RENDER_DISTANCE,
    RADIUS_DISTANCE_MULTIPLIER, SKY_DISTANCE,
};
pub use math::{lerp, smoothstep, Mat4, Quaternion, Vec2, Vec3};
