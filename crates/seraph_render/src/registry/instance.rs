//! A single live field and its transient render state.

use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use seraph_params::{presets, EffectType, FieldConfig};
use seraph_shared::constants::{
    FIELD_WARMUP_SECONDS, MIN_WARMUP_DETAIL_FRACTION, MIN_WARMUP_RADIUS_FRACTION,
    TELEPORT_SNAP_DISTANCE_SQ,
};
use seraph_shared::Vec3;

/// Unique id of a field instance.
///
/// Ids are allocated by the registry or supplied by the host (for fields
/// that already have a server-side identity). Zero is reserved for the
/// shader prewarm pass and never names a live field.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct FieldId(u64);

impl FieldId {
    /// Synthetic id used when compiling shader variants ahead of time.
    pub const PREWARM: Self = Self(0);

    /// Wraps a host-supplied id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Id of the player or entity a field belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct OwnerId(u64);

impl OwnerId {
    /// Wraps a host-supplied owner id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geometric base shape of a field, for SDF selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldShape {
    /// Plain sphere.
    #[default]
    Sphere,
    /// Torus around the vertical axis.
    Torus,
    /// Upright cylinder.
    Cylinder,
    /// Upright triangular prism.
    Prism,
}

impl FieldShape {
    /// Stable serialization id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Torus => "torus",
            Self::Cylinder => "cylinder",
            Self::Prism => "prism",
        }
    }

    /// Looks up a shape by id, case-insensitive. Unknown ids map to sphere.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        [Self::Sphere, Self::Torus, Self::Cylinder, Self::Prism]
            .into_iter()
            .find(|s| s.id().eq_ignore_ascii_case(id))
            .unwrap_or(Self::Sphere)
    }

    /// Value of the shape-type lane in the core/edge uniform slot.
    #[must_use]
    pub const fn shader_value(self) -> f32 {
        match self {
            Self::Sphere => 0.0,
            Self::Torus => 1.0,
            Self::Cylinder => 2.0,
            Self::Prism => 3.0,
        }
    }
}

/// The mutable part of an instance, behind one short-held lock.
///
/// The logic thread writes these fields; the render thread copies them out.
#[derive(Clone, Copy, Debug)]
struct InstanceState {
    center: Vec3,
    previous_center: Vec3,
    radius: f32,
    shape: FieldShape,
    config: FieldConfig,
    enabled: bool,
    dirty: bool,
}

/// A live, positioned, configured field.
///
/// Identity and spawn data are immutable; spatial and visual state is
/// interior-mutable so game-state updates and rendering can share the
/// instance through an `Arc`. All time-dependent methods take the current
/// animation-clock session time in milliseconds, so ordering relative to
/// rendering stays caller-controlled.
pub struct FieldInstance {
    id: FieldId,
    owner: OwnerId,
    spawned_at_ms: f64,
    phase_offset: f32,
    state: RwLock<InstanceState>,
}

impl FieldInstance {
    /// Creates an instance. `now_ms` anchors the warm-up ramp.
    #[must_use]
    pub fn new(
        id: FieldId,
        owner: OwnerId,
        center: Vec3,
        radius: f32,
        shape: FieldShape,
        config: FieldConfig,
        now_ms: f64,
    ) -> Self {
        // Seeded from the id so replays and both sides of a sync agree.
        let mut rng = StdRng::seed_from_u64(id.raw());
        let phase_offset = rng.gen::<f32>() * std::f32::consts::TAU;
        Self {
            id,
            owner,
            spawned_at_ms: now_ms,
            phase_offset,
            state: RwLock::new(InstanceState {
                center,
                previous_center: center,
                radius,
                shape,
                config,
                enabled: true,
                dirty: true,
            }),
        }
    }

    /// Convenience constructor with the stock energy-orb preset.
    #[must_use]
    pub fn energy_orb(id: FieldId, owner: OwnerId, center: Vec3, radius: f32, now_ms: f64) -> Self {
        Self::new(
            id,
            owner,
            center,
            radius,
            FieldShape::Sphere,
            presets::default_energy_orb(),
            now_ms,
        )
    }

    /// Unique id.
    #[must_use]
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Owning player or entity.
    #[must_use]
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Current world center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.state.read().center
    }

    /// Current radius in blocks.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.state.read().radius
    }

    /// Current base shape.
    #[must_use]
    pub fn shape(&self) -> FieldShape {
        self.state.read().shape
    }

    /// Copy of the current config.
    #[must_use]
    pub fn config(&self) -> FieldConfig {
        self.state.read().config
    }

    /// Current effect family.
    #[must_use]
    pub fn effect_type(&self) -> EffectType {
        self.state.read().config.effect_type()
    }

    /// Moves the field. Keeps the previous position for interpolation
    /// unless the jump exceeds the teleport threshold, in which case the
    /// interpolation restarts at the new position.
    pub fn update_position(&self, center: Vec3) {
        let mut state = self.state.write();
        if state.center == center {
            return;
        }
        let dist_sq = f64::from(state.center.distance_squared(center));
        state.previous_center =
            if dist_sq > TELEPORT_SNAP_DISTANCE_SQ { center } else { state.center };
        state.center = center;
        state.dirty = true;
    }

    /// Replaces the radius.
    pub fn update_radius(&self, radius: f32) {
        let mut state = self.state.write();
        if (state.radius - radius).abs() > f32::EPSILON {
            state.radius = radius;
            state.dirty = true;
        }
    }

    /// Replaces the base shape.
    pub fn update_shape(&self, shape: FieldShape) {
        let mut state = self.state.write();
        if state.shape != shape {
            state.shape = shape;
            state.dirty = true;
        }
    }

    /// Replaces the whole config.
    pub fn update_config(&self, config: FieldConfig) {
        let mut state = self.state.write();
        state.config = config;
        state.dirty = true;
    }

    /// Turns rendering of this field on or off without unregistering it.
    pub fn set_enabled(&self, enabled: bool) {
        self.state.write().enabled = enabled;
    }

    /// Position to render at for the current partial tick, interpolated
    /// between the previous and current centers.
    #[must_use]
    pub fn render_position(&self, tick_delta: f32) -> Vec3 {
        let state = self.state.read();
        if state.previous_center == state.center {
            return state.center;
        }
        state.previous_center.lerp(state.center, tick_delta)
    }

    /// Collapses the interpolation window onto the current center.
    pub fn reset_interpolation(&self) {
        let mut state = self.state.write();
        state.previous_center = state.center;
    }

    /// Warm-up progress, 0.0 at spawn to 1.0 once fully ramped.
    #[must_use]
    pub fn warmup_progress(&self, now_ms: f64) -> f32 {
        let elapsed_ms = now_ms - self.spawned_at_ms;
        let duration_ms = f64::from(FIELD_WARMUP_SECONDS) * 1000.0;
        if elapsed_ms >= duration_ms {
            return 1.0;
        }
        (elapsed_ms / duration_ms).max(0.0) as f32
    }

    /// Radius scaled by warm-up: eased from 10% so a spawning field swells
    /// into place instead of popping.
    #[must_use]
    pub fn effective_radius(&self, now_ms: f64) -> f32 {
        let progress = self.warmup_progress(now_ms);
        let eased = 1.0 - (1.0 - progress) * (1.0 - progress);
        self.radius() * (MIN_WARMUP_RADIUS_FRACTION + (1.0 - MIN_WARMUP_RADIUS_FRACTION) * eased)
    }

    /// Detail level (octaves, tessellation) scaled linearly by warm-up,
    /// never below one step.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn effective_detail(&self, full_detail: i32, now_ms: f64) -> i32 {
        let progress = self.warmup_progress(now_ms);
        let min_detail = 1.max((full_detail as f32 * MIN_WARMUP_DETAIL_FRACTION) as i32);
        min_detail + ((full_detail - min_detail) as f32 * progress) as i32
    }

    /// Seeded phase offset in `[0, TAU)`, constant for the instance's life.
    ///
    /// Added to the configured phase at pack time so fields sharing a
    /// config never animate in lockstep.
    #[must_use]
    pub fn phase_offset(&self) -> f32 {
        self.phase_offset
    }

    /// Per-instance animation phase: the seeded offset plus elapsed time
    /// scaled by the configured speed.
    #[must_use]
    pub fn animation_phase(&self, now_ms: f64) -> f32 {
        let elapsed_secs = ((now_ms - self.spawned_at_ms) / 1000.0) as f32;
        self.phase_offset + elapsed_secs * self.config().speed()
    }

    /// Whether this field wants a post-process pass this frame.
    #[must_use]
    pub fn should_render(&self) -> bool {
        let state = self.state.read();
        state.enabled
            && state.config.effect_type().requires_post_process()
            && state.config.intensity() > 0.01
    }

    /// Squared distance to a point, for render-list sorting.
    #[must_use]
    pub fn distance_squared_to(&self, point: Vec3) -> f64 {
        f64::from(self.center().distance_squared(point))
    }

    /// Whether state changed since the last [`Self::clear_dirty`].
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state.read().dirty
    }

    /// Acknowledges the current state as packed.
    pub fn clear_dirty(&self) {
        self.state.write().dirty = false;
    }
}
