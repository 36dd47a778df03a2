//! # Render Error Types
//!
//! All errors that can occur while driving the field effect system.

use thiserror::Error;

/// Errors that can occur in the field effect system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A shader program failed to compile or link.
    #[error("program load failed for {program_id}: {reason}")]
    ProgramLoad {
        /// The composed program id that failed.
        program_id: String,
        /// Compiler or linker output.
        reason: String,
    },

    /// A shader family has no body in the library.
    #[error("no shader body registered for {0}")]
    MissingShaderBody(String),

    /// Settings file could not be parsed.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A field id was not found in the registry.
    #[error("field not found: {0}")]
    FieldNotFound(u64),

    /// The event channel was disconnected on the sending side.
    #[error("event channel disconnected")]
    EventChannelClosed,

    /// The GPU device rejected a resource request.
    #[error("gpu resource error: {0}")]
    GpuResource(String),
}

/// Result type for field effect operations.
pub type RenderResult<T> = Result<T, RenderError>;
