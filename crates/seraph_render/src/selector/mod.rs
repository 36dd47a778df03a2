//! Shader program selection and per-field caching.

mod cache;
mod library;

pub use cache::{prewarm, ProgramCache, ProgramLoader};
pub use library::{ProgramId, ShaderKey};
