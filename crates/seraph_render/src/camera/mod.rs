//! # Camera Model
//!
//! Frame capture, per-pixel ray generation, depth linearization, and the
//! cross-thread hand-off cell. All world math; no GPU types.

mod depth;
mod frame;
mod ray;
mod shared;

pub use depth::{forward_depth, linearize_depth};
pub use frame::CameraFrame;
pub use ray::Ray;
pub use shared::SharedCameraFrame;
