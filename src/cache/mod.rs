//! The state cache: a memoizing layer in front of a [`Driver`].
//!
//! Every setter compares the requested value with the cached one and only
//! forwards to the driver when they differ (or when the caller forces it).
//!
//! # Contract
//!
//! The mirror is only correct while *all* state changes on the context go
//! through the cache. Code that changes driver state behind its back makes
//! later calls read as cache hits and silently leaves the driver stale.
//! After such code has run, call [`StateCache::reset_cache`] followed by
//! [`StateCache::initialize_cache`] to re-establish a known baseline.
//!
//! That baseline covers the scalar slots and the four buffer targets that
//! [`StateCache::initialize_cache`] pushes. It does not cover enabled
//! capabilities or texture parameters: the reset mirror assumes every
//! capability is disabled and no parameter is set, and nothing is pushed
//! for them. A capability that foreign code left enabled stays enabled in
//! the driver; re-sync it with [`StateCache::set_enabled`] followed by
//! [`StateCache::set_disabled`].
//!
//! One cache is bound to one context and is used from the thread that
//! owns that context; every mutating method takes `&mut self`.

mod buffers;
mod capabilities;
mod raster;
mod state;
mod stats;
mod textures;

pub use state::CachedState;
pub use stats::CacheStats;

use crate::driver::{CapabilityProvider, Driver, DriverCall, FixedCapabilities};
use crate::gl::{BufferTarget, TextureTarget};
use crate::options::CacheOptions;

/// Buffer targets reset to `0` by [`StateCache::initialize_cache`].
const BASELINE_BUFFER_TARGETS: [BufferTarget; 4] = [
    BufferTarget::Array,
    BufferTarget::ElementArray,
    BufferTarget::Framebuffer,
    BufferTarget::Renderbuffer,
];

/// Deduplicates state-change calls to a driver context.
pub struct StateCache<D, C = FixedCapabilities> {
    driver: D,
    capabilities: C,
    options: CacheOptions,
    state: CachedState,
    stats: CacheStats,
}

impl<D: Driver, C: CapabilityProvider> StateCache<D, C> {
    /// Cache with default options. Pushes the default state to the driver
    /// once so both sides start from the same baseline.
    #[must_use]
    pub fn new(driver: D, capabilities: C) -> Self {
        Self::with_options(driver, capabilities, CacheOptions::default())
    }

    /// Cache with explicit options. See [`StateCache::new`].
    #[must_use]
    pub fn with_options(
        driver: D,
        capabilities: C,
        options: CacheOptions,
    ) -> Self {
        let mut cache = Self {
            driver,
            capabilities,
            options,
            state: CachedState::default(),
            stats: CacheStats::default(),
        };
        cache.reset_cache();
        cache.initialize_cache();
        cache
    }

    /// Reinitialize every cached slot to the driver defaults.
    ///
    /// The driver is not touched; follow with
    /// [`initialize_cache`](Self::initialize_cache) when the driver must
    /// be brought back to the same baseline.
    pub fn reset_cache(&mut self) {
        self.state = CachedState::default();
        log::debug!("state cache reset to defaults");
    }

    /// Push the current cached values to the driver unconditionally.
    ///
    /// The array, element, framebuffer and renderbuffer targets are
    /// unbound (`0`) and dropped from the mirror, so the first bind of
    /// each target after this still reaches the driver. Enabled
    /// capabilities and texture parameters are not pushed.
    pub fn initialize_cache(&mut self) {
        for target in &BASELINE_BUFFER_TARGETS {
            let _ = self.state.buffers.remove(target);
        }
        let s = &self.state;
        let mut calls = vec![
            DriverCall::BlendEquation(s.blend_equation),
            DriverCall::BlendFunc {
                src: s.blend_src,
                dst: s.blend_dst,
            },
            DriverCall::CullFace(s.cull_face),
            DriverCall::DepthFunc(s.depth_func),
            DriverCall::DepthMask(s.depth_mask),
            DriverCall::StencilMask(s.stencil_mask),
            DriverCall::ClearDepth(s.clear_depth),
            DriverCall::BindTexture {
                target: TextureTarget::Texture2D,
                handle: s.last_bound_texture,
            },
        ];
        calls.extend(
            BASELINE_BUFFER_TARGETS
                .iter()
                .map(|&target| DriverCall::BindBuffer { target, handle: 0 }),
        );
        calls.extend([
            DriverCall::ActiveTexture(s.active_texture_unit),
            DriverCall::ClearColour(s.clear_colour),
            DriverCall::ColourMask(s.colour_mask),
        ]);

        log::debug!("pushing {} baseline state calls to driver", calls.len());
        for call in calls {
            self.forward(call);
        }
    }

    /// Cached mirror of the driver state.
    #[must_use]
    pub fn state(&self) -> &CachedState {
        &self.state
    }

    /// Forwarded / elided call counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Zero the call counters.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Options this cache was built with.
    #[must_use]
    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    /// The wrapped driver.
    #[must_use]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the wrapped driver.
    ///
    /// State changed through this reference bypasses the cache; see the
    /// module-level contract.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// The capability provider consulted for texture unit limits.
    #[must_use]
    pub fn capabilities(&self) -> &C {
        &self.capabilities
    }

    /// Give back the driver and capability provider.
    #[must_use]
    pub fn into_parts(self) -> (D, C) {
        (self.driver, self.capabilities)
    }

    /// Whether a call whose value matches the cache (`unchanged`) should
    /// be dropped. Counts the drop.
    fn elide(&mut self, unchanged: bool) -> bool {
        let elide = unchanged && self.options.caching;
        if elide {
            self.stats.elided += 1;
        }
        elide
    }

    /// Issue `call` on the driver and account for it.
    fn forward(&mut self, call: DriverCall) {
        if self.options.trace_calls {
            log::trace!("forward {call:?}");
        }
        call.apply(&mut self.driver);
        self.stats.forwarded += 1;

        if self.options.check_errors {
            if let Some(code) = self.driver.take_error() {
                self.stats.driver_errors += 1;
                log::warn!("driver error 0x{code:04X} after {call:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::recording::RecordingDriver;
    use crate::gl::{BlendEquation, BlendFactor, CompareFunc, CullFace};
    use glam::{BVec4, Vec4};

    fn cache() -> StateCache<RecordingDriver> {
        StateCache::new(RecordingDriver::new(), FixedCapabilities::new(4))
    }

    #[test]
    fn construction_pushes_baseline_in_order() {
        let cache = cache();
        assert_eq!(
            cache.driver().calls(),
            &[
                DriverCall::BlendEquation(BlendEquation::Add),
                DriverCall::BlendFunc {
                    src: BlendFactor::One,
                    dst: BlendFactor::Zero
                },
                DriverCall::CullFace(CullFace::Back),
                DriverCall::DepthFunc(CompareFunc::Less),
                DriverCall::DepthMask(true),
                DriverCall::StencilMask(0xFFFF_FFFF),
                DriverCall::ClearDepth(1.0),
                DriverCall::BindTexture {
                    target: TextureTarget::Texture2D,
                    handle: 0
                },
                DriverCall::BindBuffer {
                    target: BufferTarget::Array,
                    handle: 0
                },
                DriverCall::BindBuffer {
                    target: BufferTarget::ElementArray,
                    handle: 0
                },
                DriverCall::BindBuffer {
                    target: BufferTarget::Framebuffer,
                    handle: 0
                },
                DriverCall::BindBuffer {
                    target: BufferTarget::Renderbuffer,
                    handle: 0
                },
                DriverCall::ActiveTexture(0),
                DriverCall::ClearColour(Vec4::ZERO),
                DriverCall::ColourMask(BVec4::TRUE),
            ]
        );
        assert_eq!(cache.stats().forwarded, 15);
        assert_eq!(cache.stats().elided, 0);
    }

    #[test]
    fn reset_leaves_driver_alone() {
        let mut cache = cache();
        cache.set_depth_func(CompareFunc::Always);
        cache.driver_mut().clear();
        cache.reset_cache();
        assert!(cache.driver().is_empty());
        assert_eq!(cache.state().depth_func(), CompareFunc::Less);
    }

    #[test]
    fn reset_then_initialize_replays_construction() {
        let mut cache = cache();
        let baseline = cache.driver_mut().drain();

        cache.set_depth_func(CompareFunc::Greater);
        cache.set_clear_colour(0.2, 0.3, 0.4, 1.0);
        cache.bind_buffer(BufferTarget::Array, 9);
        cache.set_enabled(crate::gl::Capability::Blend);
        cache.driver_mut().clear();

        cache.reset_cache();
        cache.initialize_cache();
        assert_eq!(cache.driver().calls(), baseline.as_slice());
    }

    #[test]
    fn initialize_does_not_record_buffer_bindings() {
        let cache = cache();
        assert_eq!(cache.state().bound_buffer(BufferTarget::Array), None);
    }

    #[test]
    fn initialize_forgets_baseline_buffer_bindings() {
        let mut cache = cache();
        cache.bind_buffer(BufferTarget::Array, 9);
        cache.bind_buffer(BufferTarget::Uniform, 4);
        cache.initialize_cache();
        assert_eq!(cache.state().bound_buffer(BufferTarget::Array), None);
        assert_eq!(cache.state().bound_buffer(BufferTarget::Uniform), Some(4));

        cache.driver_mut().clear();
        cache.bind_buffer(BufferTarget::Array, 9);
        cache.bind_buffer(BufferTarget::Uniform, 4);
        assert_eq!(
            cache.driver().calls(),
            &[DriverCall::BindBuffer {
                target: BufferTarget::Array,
                handle: 9
            }]
        );
    }

    #[test]
    fn initialize_does_not_push_capabilities() {
        let mut cache = cache();
        cache.set_enabled(crate::gl::Capability::Blend);
        cache.driver_mut().clear();

        cache.reset_cache();
        cache.initialize_cache();
        assert!(!cache
            .driver()
            .calls()
            .iter()
            .any(|call| matches!(call, DriverCall::Disable(_))));

        // The mirror now assumes disabled, so only enable-then-disable
        // reaches the driver.
        cache.driver_mut().clear();
        cache.set_disabled(crate::gl::Capability::Blend);
        assert!(cache.driver().is_empty());
        cache.set_enabled(crate::gl::Capability::Blend);
        cache.set_disabled(crate::gl::Capability::Blend);
        assert_eq!(cache.driver().len(), 2);
    }

    #[test]
    fn stats_can_be_reset() {
        let mut cache = cache();
        cache.set_cull_face(CullFace::Back);
        assert_eq!(cache.stats().elided, 1);
        cache.reset_stats();
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn into_parts_returns_collaborators() {
        let (driver, caps) = cache().into_parts();
        assert_eq!(driver.len(), 15);
        assert_eq!(caps.max_texture_units, 4);
    }
}
