//! WGSL shader library access and composition.
//!
//! A compiled field program is `field_common.wgsl` plus exactly one family
//! body that defines `fs_main`. The common file carries the uniform block,
//! the fullscreen vertex stage and the ray/depth/occlusion/blend helpers;
//! bodies carry only per-family pixel math.

use seraph_params::EffectType;

use crate::selector::ShaderKey;

/// The WGSL source shared by every field shader.
#[must_use]
pub fn common_source() -> &'static str {
    include_str!("../shaders/field_common.wgsl")
}

/// The WGSL body for `key`, or `None` when the family has no
/// post-process pass.
///
/// Orb versions 5 through 7 are parameter variants of the raymarch look
/// and share the V1 body; every lane they tune rides in the uniform
/// block, not in shader text.
#[must_use]
pub fn body_source(key: ShaderKey) -> Option<&'static str> {
    match key.effect {
        EffectType::None => None,
        EffectType::Geodesic => Some(include_str!("../shaders/geodesic.wgsl")),
        EffectType::EnergyOrb => Some(match key.version {
            2 => include_str!("../shaders/orb_v2.wgsl"),
            3 => include_str!("../shaders/star_v3.wgsl"),
            8 => include_str!("../shaders/plasma_v8.wgsl"),
            _ => include_str!("../shaders/orb_v1.wgsl"),
        }),
    }
}

/// Full WGSL for one program: common front matter plus the family body.
#[must_use]
pub fn compose(key: ShaderKey) -> Option<String> {
    let body = body_source(key)?;
    let shared = common_source();
    let mut source = String::with_capacity(shared.len() + body.len() + 1);
    source.push_str(shared);
    source.push('\n');
    source.push_str(body);
    Some(source)
}
