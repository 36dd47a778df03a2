//! Live-field bookkeeping and per-frame render-list selection.
//!
//! The render thread iterates fields while the logic thread registers,
//! moves and reconfigures them. The map sits behind a short-held lock and
//! the render list is rebuilt copy-on-write: a full rebuild under the
//! dirty flag, then an atomic publish of the new `Arc`, so the render
//! thread never observes a half-updated list.

mod instance;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use seraph_params::FieldConfig;
use seraph_shared::constants::{
    BASE_RENDER_DISTANCE, DISTORTION_DISTANCE_MULTIPLIER, MAX_RENDER_DISTANCE,
    RADIUS_DISTANCE_MULTIPLIER,
};
use seraph_shared::{Vec3, MAX_RENDERED_FIELDS};

pub use instance::{FieldId, FieldInstance, FieldShape, OwnerId};

/// Shared, immutable snapshot of the fields to draw this frame.
pub type RenderList = Arc<Vec<Arc<FieldInstance>>>;

/// All currently active fields, with a cached distance-sorted render list.
pub struct FieldRegistry {
    fields: RwLock<HashMap<FieldId, Arc<FieldInstance>>>,
    render_list: RwLock<RenderList>,
    dirty: AtomicBool,
    last_camera: Mutex<Vec3>,
    next_id: AtomicU64,
}

impl FieldRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: RwLock::new(HashMap::new()),
            render_list: RwLock::new(Arc::new(Vec::new())),
            dirty: AtomicBool::new(true),
            last_camera: Mutex::new(Vec3::ZERO),
            // Zero stays reserved for prewarm.
            next_id: AtomicU64::new(1),
        }
    }

    /// Allocates a fresh id for a locally spawned field.
    pub fn allocate_id(&self) -> FieldId {
        FieldId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Registers a field and returns the shared handle to it.
    pub fn register(&self, instance: FieldInstance) -> Arc<FieldInstance> {
        let instance = Arc::new(instance);
        let id = instance.id();
        tracing::debug!(field = id.raw(), effect = instance.effect_type().id(), "field registered");
        self.fields.write().insert(id, Arc::clone(&instance));
        self.dirty.store(true, Ordering::Release);
        instance
    }

    /// Removes a field, returning it so the caller can release dependent
    /// resources (the program cache entry, in practice).
    pub fn unregister(&self, id: FieldId) -> Option<Arc<FieldInstance>> {
        let removed = self.fields.write().remove(&id);
        if removed.is_some() {
            self.dirty.store(true, Ordering::Release);
            tracing::debug!(field = id.raw(), "field unregistered");
        }
        removed
    }

    /// Removes every field belonging to `owner` (a disconnecting player,
    /// typically). Returns the removed ids.
    pub fn unregister_owner(&self, owner: OwnerId) -> Vec<FieldId> {
        let mut fields = self.fields.write();
        let doomed: Vec<FieldId> = fields
            .values()
            .filter(|f| f.owner() == owner)
            .map(|f| f.id())
            .collect();
        for id in &doomed {
            fields.remove(id);
        }
        drop(fields);

        if !doomed.is_empty() {
            self.dirty.store(true, Ordering::Release);
            tracing::debug!(owner = owner.raw(), count = doomed.len(), "owner fields removed");
        }
        doomed
    }

    /// Removes everything. Called on world unload or disconnect. Returns
    /// the removed ids.
    pub fn clear(&self) -> Vec<FieldId> {
        let mut fields = self.fields.write();
        let doomed: Vec<FieldId> = fields.keys().copied().collect();
        fields.clear();
        drop(fields);

        *self.render_list.write() = Arc::new(Vec::new());
        self.dirty.store(true, Ordering::Release);
        if !doomed.is_empty() {
            tracing::info!(count = doomed.len(), "all fields cleared");
        }
        doomed
    }

    /// Moves a field. No-op for unknown ids.
    pub fn update_position(&self, id: FieldId, center: Vec3) {
        if let Some(instance) = self.get(id) {
            instance.update_position(center);
            self.dirty.store(true, Ordering::Release);
        }
    }

    /// Resizes a field. No-op for unknown ids.
    pub fn update_radius(&self, id: FieldId, radius: f32) {
        if let Some(instance) = self.get(id) {
            instance.update_radius(radius);
            // Radius feeds the render-distance filter.
            self.dirty.store(true, Ordering::Release);
        }
    }

    /// Reconfigures a field. No-op for unknown ids.
    pub fn update_config(&self, id: FieldId, config: FieldConfig) {
        if let Some(instance) = self.get(id) {
            instance.update_config(config);
            // Config changes can flip should_render.
            self.dirty.store(true, Ordering::Release);
        }
    }

    /// Looks up a field by id.
    #[must_use]
    pub fn get(&self, id: FieldId) -> Option<Arc<FieldInstance>> {
        self.fields.read().get(&id).cloned()
    }

    /// Number of registered fields.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.fields.read().len()
    }

    /// Number of fields in the last published render list.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_list.read().len()
    }

    /// Whether any registered field currently wants a post-process pass.
    #[must_use]
    pub fn has_renderable_fields(&self) -> bool {
        self.fields.read().values().any(|f| f.should_render())
    }

    /// Forces a rebuild on the next [`Self::fields_to_render`] call.
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// The fields to draw this frame: renderable, within their dynamic
    /// render distance of the camera, nearest first, at most
    /// [`MAX_RENDERED_FIELDS`]. Rebuilt only when state changed or the
    /// camera moved; otherwise the published snapshot is returned as-is.
    #[must_use]
    pub fn fields_to_render(&self, camera: Vec3) -> RenderList {
        let camera_moved = {
            let mut last = self.last_camera.lock();
            let moved = *last != camera;
            *last = camera;
            moved
        };
        if self.dirty.swap(false, Ordering::AcqRel) || camera_moved {
            let rebuilt = Arc::new(self.build_render_list(camera));
            *self.render_list.write() = Arc::clone(&rebuilt);
            return rebuilt;
        }
        Arc::clone(&self.render_list.read())
    }

    fn build_render_list(&self, camera: Vec3) -> Vec<Arc<FieldInstance>> {
        let mut candidates: Vec<(f64, Arc<FieldInstance>)> = self
            .fields
            .read()
            .values()
            .filter(|f| f.should_render())
            .filter(|f| within_render_distance(f, camera))
            .map(|f| (f.distance_squared_to(camera), Arc::clone(f)))
            .collect();
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0));
        candidates.truncate(MAX_RENDERED_FIELDS);
        candidates.into_iter().map(|(_, f)| f).collect()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Dynamic render-distance check.
///
/// Distance budget: `BASE + max(radius × 250, distortion_radius × 1.5)`,
/// capped at `MAX_RENDER_DISTANCE`. A small orb (r=3, distortion 500)
/// gets 1550 blocks; a large sun (r=50) saturates the cap. The 1.5×
/// buffer on the distortion radius keeps an area-of-influence shader
/// resident before the camera visually enters it.
fn within_render_distance(field: &FieldInstance, camera: Vec3) -> bool {
    let config = field.config();
    let radius_component = f64::from(field.radius()) * RADIUS_DISTANCE_MULTIPLIER;
    let distortion_component =
        f64::from(config.distortion_radius()) * DISTORTION_DISTANCE_MULTIPLIER;
    let dynamic = (BASE_RENDER_DISTANCE + radius_component.max(distortion_component))
        .min(MAX_RENDER_DISTANCE);
    field.distance_squared_to(camera) < dynamic * dynamic
}
