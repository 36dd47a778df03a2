//! # Orbit Demo
//!
//! Headless driver for the whole field pipeline. A scripted "server"
//! spawns the preset library, the camera orbits the cluster at 60 fps,
//! and every frame runs event pumping, selection, program resolution
//! and uniform packing exactly as the client would. No GPU: the loader
//! below stands in for shader compilation so the demo runs anywhere.
//!
//! Run with: cargo run --package seraph --bin orbit_demo

use std::time::Instant;

use seraph::params::presets;
use seraph::render::{
    CameraFrame, EffectContext, FieldEvent, FieldId, FieldShape, OwnerId, ProgramId,
    ProgramLoader, RenderResult, ShaderKey,
};
use seraph::shared::constants::{
    DEFAULT_FOV_DEGREES, TICKS_PER_SECOND, TIME_SYNC_INTERVAL_TICKS,
};
use seraph::shared::{Vec3, MAX_RENDERED_FIELDS};

const FPS: f64 = 60.0;
const TOTAL_FRAMES: u64 = 2_400;
const ORBIT_RADIUS: f32 = 55.0;
const ORBIT_RATE: f32 = 0.25;
const WORLD_CENTER: Vec3 = Vec3::new(0.0, 64.0, 0.0);

/// Stands in for the wgpu loader; the "program" is the id string.
struct StubLoader;

impl ProgramLoader for StubLoader {
    type Program = String;

    fn load(&self, id: &ProgramId, _key: ShaderKey, _hdr: bool) -> RenderResult<String> {
        Ok(id.as_str().to_owned())
    }
}

/// Yaw/pitch in degrees that aims a camera at `target`.
fn aim(from: Vec3, target: Vec3) -> (f32, f32) {
    let dir = (target - from).normalized();
    let yaw = (-dir.x).atan2(dir.z).to_degrees();
    let pitch = (-dir.y).asin().to_degrees();
    (yaw, pitch)
}

fn orbit_camera(seconds: f32) -> CameraFrame {
    let theta = seconds * ORBIT_RATE;
    let position = WORLD_CENTER
        + Vec3::new(
            ORBIT_RADIUS * theta.sin(),
            12.0 + 4.0 * (seconds * 0.1).sin(),
            -ORBIT_RADIUS * theta.cos(),
        );
    let (yaw, pitch) = aim(position, WORLD_CENTER);
    CameraFrame::from_yaw_pitch(
        position,
        yaw,
        pitch,
        DEFAULT_FOV_DEGREES.to_radians(),
        16.0 / 9.0,
    )
}

fn main() {
    let started = Instant::now();
    let ctx: EffectContext<String> = EffectContext::new();
    let loader = StubLoader;
    let sender = ctx.sender();

    // =========================================================================
    // PHASE 1: The server announces the preset library in a ring
    // =========================================================================
    let library = [
        ("default orb", presets::default_energy_orb(), 4.0),
        ("fire orb", presets::fire_energy_orb(), 5.0),
        ("void orb", presets::void_energy_orb(), 4.0),
        ("holy orb", presets::holy_energy_orb(), 4.0),
        ("star", presets::volumetric_star(), 8.0),
        ("geodesic dome", presets::geodesic(), 10.0),
    ];
    // Server ids live in their own range; locally allocated preview ids
    // count up from 1 and must never collide with them.
    let count = library.len();
    for (i, (name, config, radius)) in library.into_iter().enumerate() {
        let angle = std::f32::consts::TAU * i as f32 / count as f32;
        let center = WORLD_CENTER + Vec3::new(30.0 * angle.cos(), 0.0, 30.0 * angle.sin());
        let sent = sender.send(FieldEvent::Spawn {
            id: FieldId::new(1_000 + i as u64),
            owner: OwnerId::new(100),
            center,
            radius,
            shape: FieldShape::Sphere,
            config: Box::new(config),
        });
        println!("spawn {name:>13} at ({:6.1}, {:5.1}, {:6.1}) sent={sent}", center.x, center.y, center.z);
    }

    let warmed = ctx.prewarm_shaders(&loader);
    println!("prewarmed {warmed} shader programs\n");

    // =========================================================================
    // PHASE 2: Orbit, with server ticks and periodic clock sync
    // =========================================================================
    let dt = 1.0 / FPS;
    let frames_per_tick = (FPS / TICKS_PER_SECOND) as u64;
    let mut packed_bytes = 0usize;
    let mut draws = 0usize;

    for frame in 0..TOTAL_FRAMES {
        // 20 server ticks per second against 60 client frames.
        if frame % frames_per_tick == 0 {
            let server_tick = frame / frames_per_tick;
            ctx.set_world_time(server_tick);
            if server_tick % TIME_SYNC_INTERVAL_TICKS == 0 {
                let server_ms = server_tick as f64 * 1_000.0 / TICKS_PER_SECOND;
                sender.send(FieldEvent::TimeSync { server_ms });
            }
        }

        ctx.pump_events();
        ctx.tick(dt);
        ctx.publish_camera(orbit_camera(frame as f32 / FPS as f32));
        let camera = ctx.acquire_camera();

        let list = ctx.visible_fields(&camera);
        assert!(list.len() <= MAX_RENDERED_FIELDS);

        for field in list.iter() {
            let Some(_program) = ctx.resolve_program(field, &loader) else {
                continue;
            };
            let block = ctx.pack_uniforms(field, &camera);
            packed_bytes += block.as_bytes().len();
            draws += 1;
        }
        ctx.end_frame();

        // ─────────────────────────────────────────────────────────────────
        // Scripted mid-session traffic
        // ─────────────────────────────────────────────────────────────────
        match frame {
            600 => {
                println!("[t+10s] server drags the star upward");
                sender.send(FieldEvent::Move {
                    id: FieldId::new(1_004),
                    center: WORLD_CENTER + Vec3::new(-30.0, 25.0, 0.0),
                });
            }
            900 => {
                println!("[t+15s] fire orb grows and swaps to the screen-space look");
                sender.send(FieldEvent::Resize { id: FieldId::new(1_001), radius: 9.0 });
                let mut config = presets::fire_energy_orb();
                config.reserved.version = 2.0;
                sender.send(FieldEvent::Configure {
                    id: FieldId::new(1_001),
                    config: Box::new(config),
                });
            }
            1_200 => {
                println!("[t+20s] local preview field spawned client-side");
                let id = ctx.spawn_field(
                    OwnerId::new(1),
                    WORLD_CENTER + Vec3::new(0.0, 6.0, 0.0),
                    3.0,
                    FieldShape::Sphere,
                    presets::void_energy_orb(),
                );
                println!("        preview id {}", id.raw());
            }
            1_800 => {
                println!("[t+30s] owner 100 disconnects, their fields despawn");
                sender.send(FieldEvent::DespawnOwner { owner: OwnerId::new(100) });
            }
            _ => {}
        }

        if frame % 300 == 0 {
            let ids: Vec<u64> = list.iter().map(|f| f.id().raw()).collect();
            println!("frame {frame:>5} | visible {ids:?} | {}", ctx.status_line());
        }
    }

    // =========================================================================
    // PHASE 3: World unload
    // =========================================================================
    sender.send(FieldEvent::Clear);
    ctx.pump_events();
    let empty = ctx.visible_fields(&ctx.acquire_camera());
    assert!(empty.is_empty(), "clear left fields behind");

    println!("\nran {TOTAL_FRAMES} frames in {:?}", started.elapsed());
    println!("packed {packed_bytes} uniform bytes over {draws} field draws");
    println!("final state: {}", ctx.status_line());
}
