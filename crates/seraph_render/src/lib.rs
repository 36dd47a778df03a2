//! # SERAPH Render
//!
//! Depth-aware volumetric field effects, rendered as fullscreen
//! post-process passes over the scene's color and depth attachments.
//!
//! The crate is host-agnostic: it owns field state, visibility, program
//! identity and uniform packing, and hands the host a packed 800-byte
//! block plus a compiled pipeline per visible field. The host owns the
//! swapchain, the frame graph and the draw itself ([`pipeline`] has the
//! reference wgpu loader and shows the three-vertex draw).
//!
//! One frame, in call order on [`EffectContext`]:
//!
//! ```text
//! ctx.pump_events();                 // apply spawns/moves/despawns
//! ctx.tick(dt);                      // advance the animation clock
//! ctx.publish_camera(frame);        // render thread: acquire_camera()
//! for field in ctx.visible_fields(&frame).iter() {
//!     let program = ctx.resolve_program(field, &loader);
//!     let block = ctx.pack_uniforms(field, &frame);
//!     // upload block, record the pass
//! }
//! ctx.end_frame();                   // drop retired programs
//! ```
//!
//! ## FRAME CONTRACT
//!
//! - At most [`seraph_shared::MAX_RENDERED_FIELDS`] fields pack and draw
//!   per frame, nearest first.
//! - No lock is held across the frame; every entry point takes `&self`
//!   and returns owned snapshots.
//! - Programs compile at prewarm or on config change, never mid-frame.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod camera;
pub mod clock;
pub mod context;
pub mod error;
pub mod events;
pub mod occlusion;
pub mod pipeline;
pub mod registry;
pub mod selector;
pub mod settings;
pub mod shaders;
pub mod uniform;

pub use camera::{CameraFrame, Ray, SharedCameraFrame};
pub use clock::{AnimationClock, TimeSourceMode};
pub use context::EffectContext;
pub use error::{RenderError, RenderResult};
pub use events::{FieldEvent, FieldEventBus, FieldEventReceiver, FieldEventSender};
pub use pipeline::{FieldProgram, WgpuProgramLoader};
pub use registry::{FieldId, FieldInstance, FieldRegistry, FieldShape, OwnerId, RenderList};
pub use selector::{ProgramCache, ProgramId, ProgramLoader, ShaderKey};
pub use settings::RenderSettings;
pub use uniform::{DebugParams, FieldUniforms};
