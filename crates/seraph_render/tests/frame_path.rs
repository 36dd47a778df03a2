//! # Frame Path Integration Test
//!
//! Drives the whole per-frame pipeline through the public API the way a
//! client host would: events in, camera published, render list selected,
//! programs resolved and uniforms packed, frame ended.

use std::sync::atomic::{AtomicUsize, Ordering};

use seraph_params::presets;
use seraph_render::{
    CameraFrame, EffectContext, FieldEvent, FieldId, FieldShape, FieldUniforms, OwnerId,
    ProgramId, ProgramLoader, RenderResult, ShaderKey,
};
use seraph_shared::{Vec3, MAX_RENDERED_FIELDS};

/// Loader standing in for the GPU: the "program" is just its id string.
#[derive(Default)]
struct RecordingLoader {
    loads: AtomicUsize,
}

impl RecordingLoader {
    fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

impl ProgramLoader for RecordingLoader {
    type Program = String;

    fn load(&self, id: &ProgramId, _key: ShaderKey, _hdr: bool) -> RenderResult<String> {
        self.loads.fetch_add(1, Ordering::Relaxed);
        Ok(id.as_str().to_owned())
    }
}

fn camera_at(position: Vec3) -> CameraFrame {
    CameraFrame {
        position,
        ..CameraFrame::default()
    }
}

fn squared_distance(a: Vec3, b: Vec3) -> f32 {
    (a - b).length_squared()
}

/// Test: a short session of frames end to end, server events included.
#[test]
fn test_session_frame_loop() {
    let ctx: EffectContext<String> = EffectContext::new();
    let loader = RecordingLoader::default();
    let sender = ctx.sender();

    // The "server" announces three fields and its clock.
    let spawns = [
        (Vec3::new(0.0, 64.0, 20.0), presets::default_energy_orb()),
        (Vec3::new(10.0, 64.0, 40.0), presets::volumetric_star()),
        (Vec3::new(-10.0, 64.0, 60.0), presets::geodesic()),
    ];
    for (i, (center, config)) in spawns.iter().enumerate() {
        assert!(sender.send(FieldEvent::Spawn {
            id: FieldId::new(i as u64 + 1),
            owner: OwnerId::new(7),
            center: *center,
            radius: 4.0,
            shape: FieldShape::Sphere,
            config: Box::new(*config),
        }));
    }
    assert!(sender.send(FieldEvent::TimeSync { server_ms: 30_000.0 }));

    let dt = 1.0 / 60.0;
    let mut last_time = f32::MIN;
    for frame_index in 0..120 {
        assert!(ctx.pump_events() <= 4);
        ctx.tick(dt);
        ctx.publish_camera(camera_at(Vec3::new(0.0, 64.0, 0.0)));
        let frame = ctx.acquire_camera();

        let list = ctx.visible_fields(&frame);
        assert_eq!(list.len(), 3, "all three spawns stay in range");

        for field in list.iter() {
            let program = ctx
                .resolve_program(field, &loader)
                .unwrap_or_else(|| panic!("frame {frame_index}: no program for {:?}", field.id()));
            assert!(program.contains(&format!("_f_{}", field.id().raw())));

            let block = ctx.pack_uniforms(field, &frame);
            assert_eq!(block.as_bytes().len(), FieldUniforms::SIZE);
            let time = block.camera_pos_time[3];
            assert!(
                time >= last_time,
                "shader time went backwards: {time} < {last_time}"
            );
            last_time = time;
        }
        ctx.end_frame();
    }

    // Three programs, compiled once each; every later frame was a cache hit.
    assert_eq!(loader.load_count(), 3);
    assert!(ctx.status_line().contains("SYNCED"));
    println!("session ran 120 frames: {}", ctx.status_line());
}

/// Test: selection caps at the frame budget, nearest first.
#[test]
fn test_selection_caps_and_orders() {
    let ctx: EffectContext<String> = EffectContext::new();
    let config = presets::default_energy_orb();

    // 20 candidates at shuffled distances, plus one far outside range.
    let distances = [
        310.0, 45.0, 700.0, 12.0, 530.0, 88.0, 140.0, 260.0, 19.0, 390.0, 66.0, 470.0, 205.0,
        33.0, 610.0, 101.0, 755.0, 170.0, 24.0, 580.0,
    ];
    for d in distances {
        ctx.spawn_field(OwnerId::new(1), Vec3::new(0.0, 64.0, d), 3.0, FieldShape::Sphere, config);
    }
    ctx.spawn_field(
        OwnerId::new(1),
        Vec3::new(0.0, 64.0, 20_000.0),
        3.0,
        FieldShape::Sphere,
        config,
    );

    let camera = Vec3::new(0.0, 64.0, 0.0);
    let list = ctx.visible_fields(&camera_at(camera));

    assert_eq!(list.len(), MAX_RENDERED_FIELDS, "selection must cap at the frame budget");
    for pair in list.windows(2) {
        let near = squared_distance(pair[0].center(), camera);
        let far = squared_distance(pair[1].center(), camera);
        assert!(near <= far, "render list out of order: {near} > {far}");
    }
    // Eighth nearest of the in-range candidates sits at z = 101.
    let eighth = squared_distance(list[7].center(), camera).sqrt();
    assert!((eighth - 101.0).abs() < 1.0, "wrong selection tail: {eighth}");
}

/// Test: two fields with byte-identical configs still compile two
/// programs, one per field id.
#[test]
fn test_identical_configs_get_distinct_programs() {
    let ctx: EffectContext<String> = EffectContext::new();
    let loader = RecordingLoader::default();
    let config = presets::fire_energy_orb();

    ctx.spawn_field(OwnerId::new(1), Vec3::new(0.0, 64.0, 10.0), 2.0, FieldShape::Sphere, config);
    ctx.spawn_field(OwnerId::new(1), Vec3::new(0.0, 64.0, 14.0), 2.0, FieldShape::Sphere, config);

    let frame = camera_at(Vec3::new(0.0, 64.0, 0.0));
    let list = ctx.visible_fields(&frame);
    assert_eq!(list.len(), 2);

    let a = ctx.resolve_program(&list[0], &loader).unwrap();
    let b = ctx.resolve_program(&list[1], &loader).unwrap();
    assert_ne!(*a, *b, "programs must embed the field id");
    assert_eq!(loader.load_count(), 2);
}

/// Test: contexts share no process-global state.
#[test]
fn test_contexts_are_independent() {
    let live: EffectContext<String> = EffectContext::new();
    let preview: EffectContext<String> = EffectContext::new();
    let config = presets::void_energy_orb();

    live.spawn_field(OwnerId::new(1), Vec3::new(0.0, 64.0, 30.0), 5.0, FieldShape::Sphere, config);
    live.tick(5.0);

    let frame = camera_at(Vec3::new(0.0, 64.0, 0.0));
    assert_eq!(live.visible_fields(&frame).len(), 1);
    assert_eq!(preview.visible_fields(&frame).len(), 0, "preview saw the live spawn");

    // The preview clock never ticked.
    let block = live.pack_uniforms(&live.visible_fields(&frame)[0], &frame);
    assert!(block.camera_pos_time[3] > 4.9);
    assert!(preview.session_ms() < f64::EPSILON);
}

/// Test: a Configure event that changes the shader version swaps the
/// program, and the old one drains at end of frame.
#[test]
fn test_config_change_swaps_program() {
    let ctx: EffectContext<String> = EffectContext::new();
    let loader = RecordingLoader::default();
    let sender = ctx.sender();

    let id = ctx.spawn_field(
        OwnerId::new(1),
        Vec3::new(0.0, 64.0, 10.0),
        2.0,
        FieldShape::Sphere,
        presets::default_energy_orb(),
    );

    let frame = camera_at(Vec3::new(0.0, 64.0, 0.0));
    let before = ctx
        .resolve_program(&ctx.visible_fields(&frame)[0], &loader)
        .unwrap();
    ctx.end_frame();

    let mut config = presets::default_energy_orb();
    config.reserved.version = 2.0;
    assert!(sender.send(FieldEvent::Configure { id, config: Box::new(config) }));
    assert_eq!(ctx.pump_events(), 1);

    let after = ctx
        .resolve_program(&ctx.visible_fields(&frame)[0], &loader)
        .unwrap();
    ctx.end_frame();

    assert_ne!(*before, *after);
    assert!(before.contains("orb_v1"), "unexpected initial program {before}");
    assert!(after.contains("orb_v2"), "unexpected replacement program {after}");
    assert_eq!(loader.load_count(), 2);
}

/// Test: flipping HDR invalidates every cached program.
#[test]
fn test_hdr_flip_recompiles_programs() {
    let ctx: EffectContext<String> = EffectContext::new();
    let loader = RecordingLoader::default();

    ctx.spawn_field(
        OwnerId::new(1),
        Vec3::new(0.0, 64.0, 10.0),
        2.0,
        FieldShape::Sphere,
        presets::geodesic(),
    );
    let frame = camera_at(Vec3::new(0.0, 64.0, 0.0));

    let hdr = ctx.resolve_program(&ctx.visible_fields(&frame)[0], &loader).unwrap();
    ctx.end_frame();
    assert!(hdr.ends_with("_hdr"), "default settings are HDR: {hdr}");

    ctx.set_hdr(false);
    let ldr = ctx.resolve_program(&ctx.visible_fields(&frame)[0], &loader).unwrap();
    ctx.end_frame();
    assert!(ldr.ends_with("_ldr"), "expected LDR recompile: {ldr}");
    assert_eq!(loader.load_count(), 2);
}

/// Test: camera movement reorders the render list between frames.
#[test]
fn test_camera_motion_reorders_list() {
    let ctx: EffectContext<String> = EffectContext::new();
    let config = presets::default_energy_orb();

    let south = ctx.spawn_field(
        OwnerId::new(1),
        Vec3::new(0.0, 64.0, -50.0),
        3.0,
        FieldShape::Sphere,
        config,
    );
    let north = ctx.spawn_field(
        OwnerId::new(1),
        Vec3::new(0.0, 64.0, 50.0),
        3.0,
        FieldShape::Sphere,
        config,
    );

    let near_south = ctx.visible_fields(&camera_at(Vec3::new(0.0, 64.0, -40.0)));
    assert_eq!(near_south[0].id(), south);

    let near_north = ctx.visible_fields(&camera_at(Vec3::new(0.0, 64.0, 40.0)));
    assert_eq!(near_north[0].id(), north);
}

/// Test: a disconnect-style Clear leaves a context that can be reused.
#[test]
fn test_clear_then_respawn() {
    let ctx: EffectContext<String> = EffectContext::new();
    let sender = ctx.sender();
    let config = presets::holy_energy_orb();

    ctx.spawn_field(OwnerId::new(1), Vec3::new(0.0, 64.0, 10.0), 2.0, FieldShape::Sphere, config);
    ctx.spawn_field(OwnerId::new(2), Vec3::new(0.0, 64.0, 20.0), 2.0, FieldShape::Sphere, config);

    assert!(sender.send(FieldEvent::Clear));
    ctx.pump_events();

    let frame = camera_at(Vec3::new(0.0, 64.0, 0.0));
    assert_eq!(ctx.visible_fields(&frame).len(), 0);

    ctx.spawn_field(OwnerId::new(3), Vec3::new(0.0, 64.0, 15.0), 2.0, FieldShape::Sphere, config);
    assert_eq!(ctx.visible_fields(&frame).len(), 1, "context unusable after clear");
}
