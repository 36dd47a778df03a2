//! Per-field program cache with deferred release.
//!
//! The cache maps field id to the loaded program for that field. An entry
//! also remembers the [`ProgramId`] it was loaded under, so a changed
//! version or a flipped HDR mode is detected as an id mismatch and the
//! entry reloads in place.
//!
//! Eviction never drops a program immediately. The render thread may hold
//! the program for the frame in flight, so evicted entries park in a
//! retired list that [`ProgramCache::end_frame`] drains once the frame is
//! done.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::{Mutex, RwLock};

use crate::error::RenderResult;
use crate::registry::FieldId;
use crate::selector::{ProgramId, ShaderKey};

/// Host collaborator that turns a program identity into a compiled program.
///
/// `key` names the shader body to compile and `hdr` selects the output
/// range; `id` is the unique identity the result will be cached under.
/// Loads are assumed idempotent and cheap to retry, so a failure is
/// reported once and simply attempted again next frame.
pub trait ProgramLoader {
    /// Compiled program handle type.
    type Program;

    /// Loads (or compiles) the program for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot produce the program; the
    /// caller logs it and renders nothing for that field this frame.
    fn load(&self, id: &ProgramId, key: ShaderKey, hdr: bool) -> RenderResult<Self::Program>;
}

struct CacheEntry<P> {
    id: ProgramId,
    program: Arc<P>,
}

/// Field-keyed cache of loaded programs.
pub struct ProgramCache<P> {
    entries: RwLock<HashMap<FieldId, CacheEntry<P>>>,
    retired: Mutex<Vec<Arc<P>>>,
}

impl<P> ProgramCache<P> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: RwLock::new(HashMap::new()), retired: Mutex::new(Vec::new()) }
    }

    /// Returns the program for `field`, loading it on miss or identity
    /// change. `None` means the field renders nothing this frame: either
    /// the family has no program or the load failed (and will be retried).
    pub fn resolve<L>(
        &self,
        field: FieldId,
        key: ShaderKey,
        hdr: bool,
        loader: &L,
    ) -> Option<Arc<P>>
    where
        L: ProgramLoader<Program = P>,
    {
        let Some(wanted) = ProgramId::resolve(key, field, hdr) else {
            // Family switched to a no-program effect; drop what was loaded.
            self.evict(field);
            return None;
        };

        if let Some(entry) = self.entries.read().get(&field) {
            if entry.id == wanted {
                return Some(Arc::clone(&entry.program));
            }
        }

        match loader.load(&wanted, key, hdr) {
            Ok(program) => {
                let program = Arc::new(program);
                let mut entries = self.entries.write();
                if let Some(old) = entries.insert(
                    field,
                    CacheEntry { id: wanted, program: Arc::clone(&program) },
                ) {
                    self.retired.lock().push(old.program);
                }
                Some(program)
            }
            Err(error) => {
                tracing::warn!(field = field.raw(), id = %wanted, %error, "program load failed");
                None
            }
        }
    }

    /// Removes the entry for `field`, parking its program until
    /// [`Self::end_frame`].
    pub fn evict(&self, field: FieldId) {
        if let Some(entry) = self.entries.write().remove(&field) {
            self.retired.lock().push(entry.program);
        }
    }

    /// Retires every entry. Used when a global input to program identity
    /// changes, such as the HDR toggle or a shader reload request.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        let mut retired = self.retired.lock();
        retired.extend(entries.drain().map(|(_, entry)| entry.program));
    }

    /// Drops programs retired during this frame. Call once per frame after
    /// the host has finished drawing.
    pub fn end_frame(&self) {
        self.retired.lock().clear();
    }

    /// Number of live cached programs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no programs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Number of programs waiting for the deferred release.
    #[must_use]
    pub fn pending_release(&self) -> usize {
        self.retired.lock().len()
    }
}

impl<P> Default for ProgramCache<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiles every known shader variant once, so the first field to appear
/// does not pay the compile cost mid-session. Returns how many compiled.
pub fn prewarm<L: ProgramLoader>(loader: &L, hdr: bool) -> usize {
    let start = Instant::now();
    let mut warmed = 0usize;
    for key in ShaderKey::all_renderable() {
        let Some(id) = ProgramId::resolve(key, FieldId::PREWARM, hdr) else {
            continue;
        };
        match loader.load(&id, key, hdr) {
            Ok(_) => warmed += 1,
            Err(error) => {
                tracing::warn!(id = %id, %error, "prewarm compile failed");
            }
        }
    }
    tracing::info!(
        warmed,
        hdr,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "shader prewarm complete"
    );
    warmed
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use seraph_params::EffectType;

    use super::*;
    use crate::error::RenderError;

    struct TestLoader {
        loads: AtomicUsize,
        fail: bool,
    }

    impl TestLoader {
        fn new() -> Self {
            Self { loads: AtomicUsize::new(0), fail: false }
        }

        fn failing() -> Self {
            Self { loads: AtomicUsize::new(0), fail: true }
        }

        fn load_count(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    impl ProgramLoader for TestLoader {
        type Program = String;

        fn load(&self, id: &ProgramId, _key: ShaderKey, _hdr: bool) -> RenderResult<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RenderError::ProgramLoad {
                    program_id: id.as_str().to_owned(),
                    reason: "simulated".to_owned(),
                });
            }
            Ok(id.as_str().to_owned())
        }
    }

    fn orb_key(version: i32) -> ShaderKey {
        ShaderKey { effect: EffectType::EnergyOrb, version }
    }

    #[test]
    fn test_second_resolve_hits_cache() {
        let cache = ProgramCache::new();
        let loader = TestLoader::new();
        let field = FieldId::new(1);

        let first = cache.resolve(field, orb_key(6), true, &loader);
        let second = cache.resolve(field, orb_key(6), true, &loader);
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(loader.load_count(), 1);
    }

    #[test]
    fn test_hdr_flip_reloads_and_retires_old() {
        let cache = ProgramCache::new();
        let loader = TestLoader::new();
        let field = FieldId::new(2);

        let ldr = cache.resolve(field, orb_key(6), false, &loader);
        let hdr = cache.resolve(field, orb_key(6), true, &loader);
        assert_ne!(ldr, hdr);
        assert_eq!(loader.load_count(), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.pending_release(), 1);

        cache.end_frame();
        assert_eq!(cache.pending_release(), 0);
    }

    #[test]
    fn test_version_change_reloads() {
        let cache = ProgramCache::new();
        let loader = TestLoader::new();
        let field = FieldId::new(3);

        let v1 = cache.resolve(field, orb_key(1), false, &loader);
        let v8 = cache.resolve(field, orb_key(8), false, &loader);
        assert_eq!(v1.as_deref().map(String::as_str), Some("field_orb_v1_f_3_ldr"));
        assert_eq!(v8.as_deref().map(String::as_str), Some("field_orb_v8_f_3_ldr"));
        assert_eq!(loader.load_count(), 2);
    }

    #[test]
    fn test_load_failure_yields_none_and_retries() {
        let cache = ProgramCache::new();
        let loader = TestLoader::failing();
        let field = FieldId::new(4);

        assert!(cache.resolve(field, orb_key(1), false, &loader).is_none());
        assert!(cache.resolve(field, orb_key(1), false, &loader).is_none());
        assert_eq!(loader.load_count(), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_none_effect_evicts_cached_program() {
        let cache = ProgramCache::new();
        let loader = TestLoader::new();
        let field = FieldId::new(5);

        cache.resolve(field, orb_key(1), false, &loader);
        assert_eq!(cache.len(), 1);

        let none = ShaderKey { effect: EffectType::None, version: 1 };
        assert!(cache.resolve(field, none, false, &loader).is_none());
        assert!(cache.is_empty());
        assert_eq!(cache.pending_release(), 1);
    }

    #[test]
    fn test_evicted_program_survives_until_end_frame() {
        let cache = ProgramCache::new();
        let loader = TestLoader::new();
        let field = FieldId::new(6);

        let program = cache.resolve(field, orb_key(2), false, &loader).unwrap();
        cache.evict(field);
        // One strong reference here, one parked in the retired list.
        assert_eq!(Arc::strong_count(&program), 2);

        cache.end_frame();
        assert_eq!(Arc::strong_count(&program), 1);
    }

    #[test]
    fn test_clear_retires_everything() {
        let cache = ProgramCache::new();
        let loader = TestLoader::new();
        for raw in 0..4u64 {
            cache.resolve(FieldId::new(raw), orb_key(6), false, &loader);
        }
        assert_eq!(cache.len(), 4);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.pending_release(), 4);
    }

    #[test]
    fn test_prewarm_compiles_every_variant() {
        let loader = TestLoader::new();
        let warmed = prewarm(&loader, true);
        assert_eq!(warmed, ShaderKey::all_renderable().len());
        assert_eq!(loader.load_count(), warmed);
    }

    #[test]
    fn test_prewarm_counts_only_successes() {
        let loader = TestLoader::failing();
        assert_eq!(prewarm(&loader, false), 0);
    }
}
