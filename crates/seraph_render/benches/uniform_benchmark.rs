//! Benchmark for the per-frame CPU path: uniform packing, render list
//! selection and warm program lookup.
//!
//! TARGET: a full 8-field frame packs in under 10 microseconds
//!
//! Run with: cargo bench --package seraph_render --bench uniform_benchmark

// criterion_group! expands to an undocumented public function; docs can't
// be attached through the macro.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use seraph_params::presets;
use seraph_render::{
    CameraFrame, DebugParams, EffectContext, FieldShape, FieldUniforms, OwnerId, ProgramId,
    ProgramLoader, RenderResult, ShaderKey,
};
use seraph_shared::{Vec3, MAX_RENDERED_FIELDS};

/// Loader whose "program" carries no state, so the bench measures cache
/// bookkeeping rather than shader compilation.
struct NullLoader;

impl ProgramLoader for NullLoader {
    type Program = ();

    fn load(&self, _id: &ProgramId, _key: ShaderKey, _hdr: bool) -> RenderResult<()> {
        Ok(())
    }
}

/// A context populated with `count` spheres strung out along +Z.
fn populated_context(count: u64) -> EffectContext<()> {
    let ctx = EffectContext::new();
    let cycle = [
        presets::default_energy_orb(),
        presets::fire_energy_orb(),
        presets::volumetric_star(),
        presets::geodesic(),
    ];
    for i in 0..count {
        let config = cycle[(i as usize) % cycle.len()];
        let center = Vec3::new(0.0, 64.0, 10.0 + 5.0 * i as f32);
        ctx.spawn_field(OwnerId::new(1), center, 3.0, FieldShape::Sphere, config);
    }
    ctx
}

fn benchmark_single_pack(c: &mut Criterion) {
    let config = presets::default_energy_orb();
    let frame = CameraFrame::default();
    let center = Vec3::new(4.0, 66.0, 30.0);

    c.bench_function("single_uniform_pack", |b| {
        let mut time = 0.0f32;
        b.iter(|| {
            time += 0.016;
            black_box(FieldUniforms::from_parts(
                black_box(&config),
                center,
                3.0,
                &frame,
                time,
                DebugParams::default(),
            ))
        });
    });
}

fn benchmark_frame_pack(c: &mut Criterion) {
    let ctx = populated_context(MAX_RENDERED_FIELDS as u64);
    let frame = CameraFrame::default();
    let list = ctx.visible_fields(&frame);
    assert_eq!(list.len(), MAX_RENDERED_FIELDS);

    let mut group = c.benchmark_group("frame_pack");
    group.throughput(Throughput::Elements(MAX_RENDERED_FIELDS as u64));
    group.bench_function("pack_8_fields", |b| {
        b.iter(|| {
            ctx.tick(0.016);
            for field in list.iter() {
                black_box(ctx.pack_uniforms(field, &frame));
            }
        });
    });
    group.finish();
}

fn benchmark_render_list(c: &mut Criterion) {
    // 64 registered, 8 survive selection; the sort dominates.
    let ctx = populated_context(64);
    let frame = CameraFrame::default();

    c.bench_function("render_list_64_registered", |b| {
        b.iter(|| black_box(ctx.visible_fields(black_box(&frame))));
    });
}

fn benchmark_program_cache_hit(c: &mut Criterion) {
    let ctx = populated_context(1);
    let frame = CameraFrame::default();
    let list = ctx.visible_fields(&frame);
    let field = &list[0];
    let loader = NullLoader;

    // First resolve loads; every iteration after is the warm path.
    assert!(ctx.resolve_program(field, &loader).is_some());

    c.bench_function("program_cache_hit", |b| {
        b.iter(|| black_box(ctx.resolve_program(black_box(field), &loader)));
    });
}

criterion_group!(
    benches,
    benchmark_single_pack,
    benchmark_frame_pack,
    benchmark_render_list,
    benchmark_program_cache_hit
);
criterion_main!(benches);
