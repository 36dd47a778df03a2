//! Parameter groups, each occupying one or two 16-byte uniform slots.
//!
//! Groups are plain `Copy` value types. Construction is explicit (every
//! field named) or through a `DEFAULT`/`NONE` const; `with_*` mutators
//! return a changed copy and never touch sibling fields.

mod core;
mod geometry;
mod noise;
mod plasma;
mod screen;
mod surface;

pub use core::{AnimParams, AnimTimingParams, ColorParams, CoreEdgeParams, FalloffParams, PositionParams};
pub use geometry::{
    GeoAnimParams, GeometryGridParams, GeometryParams, LightingParams, TimingParams, TransformParams,
};
pub use noise::{NoiseConfigParams, NoiseDetailParams};
pub use plasma::{V8CoronaParams, V8ElectricParams, V8PlasmaParams, V8RingParams};
pub use screen::{BlendParams, DistortionParams, ReservedParams, ScreenEffectsParams};
pub use surface::{
    CoronaParams, FlamesParams, GlowLineParams, V2AlphaDetail, V2CoreDetail, V2CoronaDetail,
    V2EdgeDetail, V2LinesDetail,
};
