//! # Effect Context
//!
//! One object owning the whole field-effect subsystem: settings, the
//! animation clock, the shared camera cell, the instance registry, the
//! program cache and the inbound event queue. There are no global statics
//! anywhere in this crate; everything routes through a context the host
//! constructs, and two contexts (say, the live world and a replay viewer)
//! never share state.
//!
//! Every frame entry point takes `&self`. Interior locks are held for
//! single field reads or writes, never across a load or a frame, so the
//! logic thread and the render thread can call in concurrently.
//!
//! A host frame looks like:
//!
//! ```text
//! logic thread:   sender().send(event) ...      publish_camera(frame)
//! render thread:  pump_events();
//!                 let frame = acquire_camera();
//!                 for field in visible_fields(&frame).iter() {
//!                     let program = resolve_program(field, &loader);
//!                     let uniforms = pack_uniforms(field, &frame);
//!                     ... bind, draw ...
//!                 }
//!                 end_frame();
//! ```

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use seraph_params::FieldConfig;
use seraph_shared::Vec3;

use crate::camera::{CameraFrame, SharedCameraFrame};
use crate::clock::{AnimationClock, TimeSourceMode};
use crate::events::{FieldEvent, FieldEventBus, FieldEventReceiver, FieldEventSender};
use crate::registry::{FieldId, FieldInstance, FieldRegistry, FieldShape, OwnerId, RenderList};
use crate::selector::{prewarm, ProgramCache, ProgramLoader, ShaderKey};
use crate::settings::RenderSettings;
use crate::uniform::{DebugParams, FieldUniforms};

/// Owner of all field-effect state for one client session.
///
/// `P` is the compiled program handle type produced by the host's
/// [`ProgramLoader`]; the context never inspects it, only caches it.
pub struct EffectContext<P> {
    settings: RwLock<RenderSettings>,
    debug: Mutex<DebugParams>,
    clock: RwLock<AnimationClock>,
    camera: SharedCameraFrame,
    registry: FieldRegistry,
    cache: ProgramCache<P>,
    events: FieldEventBus,
    event_rx: FieldEventReceiver,
}

impl<P> EffectContext<P> {
    /// Creates a context with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(RenderSettings::default())
    }

    /// Creates a context with the given settings; the clock starts in the
    /// configured time-source mode.
    #[must_use]
    pub fn with_settings(settings: RenderSettings) -> Self {
        let events = FieldEventBus::default();
        let event_rx = events.receiver();
        Self {
            clock: RwLock::new(AnimationClock::new(settings.time_source)),
            settings: RwLock::new(settings),
            debug: Mutex::new(DebugParams::DEFAULT),
            camera: SharedCameraFrame::new(),
            registry: FieldRegistry::new(),
            cache: ProgramCache::new(),
            events,
            event_rx,
        }
    }

    // ------------------------------------------------------------------
    // SETTINGS AND DEBUG
    // ------------------------------------------------------------------

    /// Current settings snapshot.
    #[must_use]
    pub fn settings(&self) -> RenderSettings {
        *self.settings.read()
    }

    /// Toggles HDR rendering. Every cached program id embeds the HDR
    /// suffix, so a real change retires the whole cache; the next resolve
    /// per field recompiles against the new target format.
    pub fn set_hdr(&self, enabled: bool) {
        {
            let mut settings = self.settings.write();
            if settings.hdr_enabled == enabled {
                return;
            }
            settings.hdr_enabled = enabled;
        }
        self.cache.clear();
        tracing::info!(enabled, "hdr toggled, program cache cleared");
    }

    /// Switches which clock drives shader animation.
    pub fn set_time_source(&self, mode: TimeSourceMode) {
        self.settings.write().time_source = mode;
        self.clock.write().set_mode(mode);
    }

    /// Sets the ray-generation / debug-view overrides.
    pub fn set_debug(&self, debug: DebugParams) {
        *self.debug.lock() = debug;
    }

    /// Current debug overrides.
    #[must_use]
    pub fn debug(&self) -> DebugParams {
        *self.debug.lock()
    }

    // ------------------------------------------------------------------
    // TIME
    // ------------------------------------------------------------------

    /// Advances the session clock by one frame.
    pub fn tick(&self, dt_secs: f64) {
        self.clock.write().tick(dt_secs);
    }

    /// Records the latest world tick from the host.
    pub fn set_world_time(&self, ticks: u64) {
        self.clock.write().set_world_time(ticks);
    }

    /// Unwrapped session time in milliseconds; timestamp base for spawns.
    #[must_use]
    pub fn session_ms(&self) -> f64 {
        self.clock.read().session_ms()
    }

    // ------------------------------------------------------------------
    // EVENTS AND FIELD LIFECYCLE
    // ------------------------------------------------------------------

    /// A cloneable sender for the inbound event queue. Hand this to the
    /// network layer or the logic thread; sends never block.
    #[must_use]
    pub fn sender(&self) -> FieldEventSender {
        self.events.sender()
    }

    /// Drains and applies every queued event, in order. Call once per
    /// frame from the render thread, before building the render list.
    /// Returns how many events were applied.
    pub fn pump_events(&self) -> usize {
        let events = self.event_rx.drain();
        let applied = events.len();
        for event in events {
            self.apply_event(event);
        }
        applied
    }

    fn apply_event(&self, event: FieldEvent) {
        match event {
            FieldEvent::Spawn { id, owner, center, radius, shape, config } => {
                let now_ms = self.session_ms();
                self.registry
                    .register(FieldInstance::new(id, owner, center, radius, shape, *config, now_ms));
            }
            FieldEvent::Despawn { id } => {
                self.registry.unregister(id);
                self.cache.evict(id);
            }
            FieldEvent::DespawnOwner { owner } => {
                for id in self.registry.unregister_owner(owner) {
                    self.cache.evict(id);
                }
            }
            FieldEvent::Move { id, center } => self.registry.update_position(id, center),
            FieldEvent::Resize { id, radius } => self.registry.update_radius(id, radius),
            FieldEvent::Configure { id, config } => self.registry.update_config(id, *config),
            FieldEvent::TimeSync { server_ms } => self.clock.write().on_server_sync(server_ms),
            FieldEvent::Clear => {
                for id in self.registry.clear() {
                    self.cache.evict(id);
                }
            }
        }
    }

    /// Spawns a field with a locally allocated id and returns it.
    ///
    /// Direct-path alternative to sending [`FieldEvent::Spawn`]; use one
    /// or the other for a given field, not both. Event-spawned fields
    /// carry server-assigned ids, which the host must keep out of the
    /// local allocation range.
    pub fn spawn_field(
        &self,
        owner: OwnerId,
        center: Vec3,
        radius: f32,
        shape: FieldShape,
        config: FieldConfig,
    ) -> FieldId {
        let id = self.registry.allocate_id();
        let now_ms = self.session_ms();
        self.registry
            .register(FieldInstance::new(id, owner, center, radius, shape, config, now_ms));
        id
    }

    /// Removes a field and retires its cached program.
    pub fn despawn_field(&self, id: FieldId) {
        self.registry.unregister(id);
        self.cache.evict(id);
    }

    /// The live-field registry, for position updates and queries.
    #[must_use]
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Drops all fields, programs and sync state, e.g. when leaving a
    /// server. The context is reusable immediately afterwards.
    pub fn reset(&self) {
        for id in self.registry.clear() {
            self.cache.evict(id);
        }
        self.cache.clear();
        self.clock.write().reset();
        tracing::info!("effect context reset");
    }

    // ------------------------------------------------------------------
    // FRAME PATH
    // ------------------------------------------------------------------

    /// Publishes the camera captured by the host's render hook.
    pub fn publish_camera(&self, frame: CameraFrame) {
        self.camera.publish(frame);
    }

    /// Latest published camera frame, or the previous one if nothing new
    /// arrived. Take this once per frame and pass it through the whole
    /// frame path so selection and packing agree on the eye position.
    #[must_use]
    pub fn acquire_camera(&self) -> CameraFrame {
        self.camera.read()
    }

    /// The distance-filtered, nearest-first fields to draw this frame.
    #[must_use]
    pub fn visible_fields(&self, frame: &CameraFrame) -> RenderList {
        self.registry.fields_to_render(frame.position)
    }

    /// Program for `field` under the current HDR setting, compiled through
    /// `loader` on first use. `None` means skip the field this frame.
    pub fn resolve_program<L>(&self, field: &FieldInstance, loader: &L) -> Option<Arc<P>>
    where
        L: ProgramLoader<Program = P>,
    {
        let key = ShaderKey::from_config(&field.config());
        let hdr = self.settings.read().hdr_enabled;
        self.cache.resolve(field.id(), key, hdr, loader)
    }

    /// Packs the uniform block for one field at the current clock time.
    ///
    /// The configured animation phase gets the instance's seeded offset
    /// added, so fields sharing a config stay visually independent. Radius
    /// and noise detail are warm-up scaled from the spawn timestamp, and
    /// the center is tick-interpolated toward the latest update. Packing
    /// consumes the instance's dirty flag.
    #[must_use]
    pub fn pack_uniforms(&self, field: &FieldInstance, frame: &CameraFrame) -> FieldUniforms {
        let (now_ms, time) = {
            let clock = self.clock.read();
            (clock.session_ms(), clock.shader_time())
        };
        let mut config = field.config();
        config.anim = config.anim.with_phase(config.anim.phase + field.phase_offset());

        let uniforms = FieldUniforms::from_parts_warmed(
            &config,
            field.render_position(frame.tick_delta),
            field.effective_radius(now_ms),
            frame,
            time,
            self.debug(),
            field.warmup_progress(now_ms),
        );
        field.clear_dirty();
        uniforms
    }

    /// Releases programs retired during this frame. Call after the last
    /// draw that could still reference them.
    pub fn end_frame(&self) {
        self.cache.end_frame();
    }

    /// Compiles every renderable shader variant ahead of first use, under
    /// the current HDR setting. Returns how many compiled.
    pub fn prewarm_shaders<L>(&self, loader: &L) -> usize
    where
        L: ProgramLoader<Program = P>,
    {
        prewarm(loader, self.settings.read().hdr_enabled)
    }

    /// One-line subsystem summary for the debug overlay.
    #[must_use]
    pub fn status_line(&self) -> String {
        let settings = self.settings();
        format!(
            "fields: {} active, {} drawn | programs: {} ({} retiring) | time: {} | {}",
            self.registry.active_count(),
            self.registry.render_count(),
            self.cache.len(),
            self.cache.pending_release(),
            self.clock.read().status(),
            if settings.hdr_enabled { "HDR" } else { "LDR" },
        )
    }
}

impl<P> Default for EffectContext<P> {
    fn default() -> Self {
        Self::new()
    }
}
