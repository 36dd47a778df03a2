//! # SERAPH
//!
//! Depth-aware volumetric field effects for the client, split in three:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      SERAPH FIELD EFFECTS                    │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐  │
//! │  │ seraph_shared │──>│ seraph_params │──>│ seraph_render │  │
//! │  │               │   │               │   │               │  │
//! │  │ • Vec3/Mat4   │   │ • 4-lane      │   │ • registry    │  │
//! │  │ • constants   │   │   groups      │   │ • selector    │  │
//! │  │ • Argb        │   │ • FieldConfig │   │ • uniforms    │  │
//! │  │               │   │ • presets     │   │ • WGSL + wgpu │  │
//! │  └───────────────┘   └───────────────┘   └───────────────┘  │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The client holds one [`render::EffectContext`], feeds it network
//! events and camera frames, and draws what it hands back. Start with
//! the crate docs on `seraph_render` for the frame walkthrough, or run
//! the headless driver:
//!
//! ```text
//! cargo run --package seraph --bin orbit_demo
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub use seraph_params as params;
pub use seraph_render as render;
pub use seraph_shared as shared;
