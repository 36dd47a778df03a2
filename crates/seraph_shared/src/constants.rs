//! # Field Rendering Constants
//!
//! Tuning values for the field-effect system.
//!
//! **CRITICAL:** Several of these are part of the visual contract with the
//! shader library (sky sentinel, time wrap periods). Changes require a
//! shader review, not just a recompile.

// =============================================================================
// RENDER LIST / DISTANCE MODEL
// =============================================================================

/// Hard cap on fields serialized and drawn per frame.
pub const MAX_RENDERED_FIELDS: usize = 8;

/// Render distance granted to every field before size bonuses (world units).
pub const BASE_RENDER_DISTANCE: f64 = 800.0;

/// Ceiling on the per-field dynamic render distance (world units).
pub const MAX_RENDER_DISTANCE: f64 = 10_000.0;

/// Extra render distance per unit of field radius.
pub const RADIUS_DISTANCE_MULTIPLIER: f64 = 250.0;

/// Buffer multiplier on the distortion radius, so an area-of-influence
/// shader is resident before the camera visually enters it.
pub const DISTORTION_DISTANCE_MULTIPLIER: f64 = 1.5;

/// Position updates farther than this (squared, world units) are treated as
/// teleports and skip interpolation.
pub const TELEPORT_SNAP_DISTANCE_SQ: f64 = 1.0;

// =============================================================================
// WARM-UP
// =============================================================================

/// Seconds of staged detail ramp-up after a field spawns.
pub const FIELD_WARMUP_SECONDS: f32 = 2.0;

/// Fraction of full detail (octaves, tessellation) used at warm-up start.
pub const MIN_WARMUP_DETAIL_FRACTION: f32 = 0.2;

/// Fraction of full radius used at warm-up start.
pub const MIN_WARMUP_RADIUS_FRACTION: f32 = 0.1;

// =============================================================================
// DEPTH / SKY
// =============================================================================

/// Raw depth at or above this is sky; the depth buffer clears to 1.0 and
/// float error can land just below it.
pub const SKY_DEPTH_THRESHOLD: f32 = 0.9999;

/// Substitute scene distance for sky pixels, far beyond any field (world units).
pub const SKY_DISTANCE: f32 = 10_000.0;

// =============================================================================
// ANIMATION TIME
// =============================================================================

/// Client-clock wrap period in milliseconds. Shader noise loses float
/// precision past this, so time folds back.
pub const CLIENT_TIME_WRAP_MS: f64 = 100_000.0;

/// World-clock wrap period in ticks.
pub const WORLD_TIME_WRAP_TICKS: u64 = 2_000_000;

/// Game ticks per second.
pub const TICKS_PER_SECOND: f64 = 20.0;

/// Server time-sync messages older than this are ignored and the clock
/// falls back to client time.
pub const TIME_SYNC_TIMEOUT_MS: f64 = 60_000.0;

/// How often (in ticks) a server is expected to broadcast a time sync.
pub const TIME_SYNC_INTERVAL_TICKS: u64 = 600;

/// Offset-correction fraction applied per frame after a re-sync.
pub const TIME_SYNC_LERP: f64 = 0.02;

// =============================================================================
// CAMERA DEFAULTS
// =============================================================================

/// Near plane used by the host client.
pub const DEFAULT_NEAR_PLANE: f32 = 0.05;

/// Far plane used by the host client.
pub const DEFAULT_FAR_PLANE: f32 = 1_000.0;

/// Default vertical field of view in degrees.
pub const DEFAULT_FOV_DEGREES: f32 = 70.0;
