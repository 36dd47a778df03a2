//! # Animation Clock
//!
//! Time source for shader animation. Three modes:
//!
//! - `ClientTime` - the locally ticked session clock; smooth, but each
//!   client sees its own animation phase.
//! - `WorldTime` - game ticks; synchronized across clients but quantized
//!   to 20 Hz.
//! - `SyncedTime` - session clock plus a server offset, interpolated so
//!   re-syncs never cause a visible jump.
//!
//! The clock is owned by the render context and advanced explicitly via
//! [`AnimationClock::tick`]; nothing here reads the wall clock, which keeps
//! replay and tests deterministic.

use serde::{Deserialize, Serialize};

use seraph_shared::constants::{
    CLIENT_TIME_WRAP_MS, TICKS_PER_SECOND, TIME_SYNC_LERP, TIME_SYNC_TIMEOUT_MS,
    WORLD_TIME_WRAP_TICKS,
};

/// Which clock drives shader animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSourceMode {
    /// Locally ticked session time. Smooth, unsynchronized.
    #[default]
    ClientTime,
    /// World tick time. Synchronized but 20 ticks/second.
    WorldTime,
    /// Session time corrected toward a server reference.
    SyncedTime,
}

/// Shader animation time, session-relative and explicitly ticked.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    mode: TimeSourceMode,
    /// Milliseconds since the clock was created; advanced by `tick`.
    session_ms: f64,
    /// Last world tick pushed by the host, if any world is loaded.
    world_ticks: Option<u64>,
    target_offset_ms: f64,
    current_offset_ms: f64,
    last_sync_session_ms: f64,
    sync_received: bool,
}

impl AnimationClock {
    /// Create a clock in the given mode at session time zero.
    #[must_use]
    pub fn new(mode: TimeSourceMode) -> Self {
        Self {
            mode,
            session_ms: 0.0,
            world_ticks: None,
            target_offset_ms: 0.0,
            current_offset_ms: 0.0,
            last_sync_session_ms: 0.0,
            sync_received: false,
        }
    }

    /// Advance the session clock by a frame and converge the server offset.
    ///
    /// The offset moves 2% of the remaining error per call, so a re-sync
    /// takes roughly two seconds to settle at 60 FPS.
    pub fn tick(&mut self, dt_secs: f64) {
        self.session_ms += dt_secs * 1000.0;
        if self.sync_received {
            self.current_offset_ms +=
                (self.target_offset_ms - self.current_offset_ms) * TIME_SYNC_LERP;
        }
    }

    /// Current time source mode.
    #[must_use]
    pub fn mode(&self) -> TimeSourceMode {
        self.mode
    }

    /// Switch the time source mode manually.
    pub fn set_mode(&mut self, mode: TimeSourceMode) {
        self.mode = mode;
        tracing::info!(?mode, "time source mode set");
    }

    /// Record the latest world tick from the host.
    pub fn set_world_time(&mut self, ticks: u64) {
        self.world_ticks = Some(ticks);
    }

    /// Apply a server time-sync message.
    ///
    /// The first sync jumps the offset immediately; later syncs only move
    /// the target and let `tick` interpolate. Receiving any sync while in
    /// `ClientTime` mode auto-enables `SyncedTime`.
    pub fn on_server_sync(&mut self, server_ms: f64) {
        let new_offset = server_ms - self.session_ms;
        if self.sync_received {
            tracing::debug!(
                old_offset = self.target_offset_ms,
                new_offset,
                drift = new_offset - self.target_offset_ms,
                "shader time re-sync"
            );
        } else {
            self.current_offset_ms = new_offset;
            tracing::info!(server_ms, offset = new_offset, "initial shader time sync");
        }
        self.target_offset_ms = new_offset;
        self.last_sync_session_ms = self.session_ms;
        self.sync_received = true;

        if self.mode == TimeSourceMode::ClientTime {
            self.mode = TimeSourceMode::SyncedTime;
            tracing::info!("synced time source auto-enabled");
        }
    }

    /// Whether a server sync has been received recently enough to trust.
    #[must_use]
    pub fn is_synced(&self) -> bool {
        self.sync_received && (self.session_ms - self.last_sync_session_ms) < TIME_SYNC_TIMEOUT_MS
    }

    /// Current server offset in milliseconds, for diagnostics.
    #[must_use]
    pub fn current_offset_ms(&self) -> f64 {
        self.current_offset_ms
    }

    /// Unwrapped session time in milliseconds.
    ///
    /// This is the timestamp base for spawn times and warm-up ramps; unlike
    /// [`shader_time`](Self::shader_time) it never folds back.
    #[must_use]
    pub fn session_ms(&self) -> f64 {
        self.session_ms
    }

    /// Animation time in seconds for the uniform block.
    ///
    /// Wraps at 100 000 ms (or 2 000 000 ticks in world mode) because shader
    /// noise loses float precision past that. A stale sync falls back to
    /// world time when a world is loaded, otherwise to client time, same as
    /// the mode ladder `SyncedTime` → `WorldTime` → `ClientTime`.
    #[must_use]
    pub fn shader_time(&self) -> f32 {
        match self.mode {
            TimeSourceMode::SyncedTime if self.is_synced() => {
                let synced_ms = self.session_ms + self.current_offset_ms;
                ((synced_ms % CLIENT_TIME_WRAP_MS) / 1000.0) as f32
            }
            TimeSourceMode::SyncedTime | TimeSourceMode::WorldTime => match self.world_ticks {
                Some(ticks) => ((ticks % WORLD_TIME_WRAP_TICKS) as f64 / TICKS_PER_SECOND) as f32,
                None => self.client_time(),
            },
            TimeSourceMode::ClientTime => self.client_time(),
        }
    }

    fn client_time(&self) -> f32 {
        ((self.session_ms % CLIENT_TIME_WRAP_MS) / 1000.0) as f32
    }

    /// Drop all sync state and return to `ClientTime`, e.g. on disconnect.
    pub fn reset(&mut self) {
        self.sync_received = false;
        self.target_offset_ms = 0.0;
        self.current_offset_ms = 0.0;
        self.last_sync_session_ms = 0.0;
        self.world_ticks = None;
        self.mode = TimeSourceMode::ClientTime;
        tracing::debug!("animation clock reset");
    }

    /// One-line status for the debug overlay.
    #[must_use]
    pub fn status(&self) -> String {
        if self.mode == TimeSourceMode::SyncedTime && self.is_synced() {
            let age_secs = (self.session_ms - self.last_sync_session_ms) / 1000.0;
            format!(
                "SYNCED (offset={:.0}ms, age={:.0}s)",
                self.current_offset_ms, age_secs
            )
        } else if self.mode == TimeSourceMode::WorldTime {
            "WORLD_TIME (20 ticks/sec)".to_string()
        } else {
            "CLIENT_TIME (local)".to_string()
        }
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(TimeSourceMode::ClientTime)
    }
}
