//! Boundary between the cache and the graphics driver.
//!
//! [`Driver`] receives every call the cache decides to forward, with the
//! same parameter shapes as the cache operations. [`CapabilityProvider`]
//! answers the hardware-limit queries the cache needs.

/// OpenGL / GLES backend built on `glow`.
#[cfg(all(feature = "glow", not(target_arch = "wasm32")))]
pub mod glow;
/// In-memory driver that records forwarded calls.
pub mod recording;

use glam::{BVec4, Vec4};

use crate::gl::{
    BlendEquation, BlendFactor, BufferTarget, Capability, CompareFunc,
    CullFace, TextureParam, TextureTarget,
};

/// Driver binding layer: the entry points that change context state.
///
/// Implementations forward each call to the underlying API without any
/// filtering; deduplication is the cache's job. Buffer targets whose
/// objects use distinct entry points (see [`BufferTarget::kind`]) are
/// dispatched by the implementation.
pub trait Driver {
    /// Bind `handle` at `target` (`0` unbinds).
    fn bind_buffer(&mut self, target: BufferTarget, handle: u32);

    /// Delete the buffer-like object `handle` of the family bound at
    /// `target`.
    fn delete_buffer(&mut self, target: BufferTarget, handle: u32);

    /// Set an integer parameter on the texture bound at `target`.
    fn tex_parameter(
        &mut self,
        target: TextureTarget,
        param: TextureParam,
        value: i32,
    );

    /// Bind texture `handle` at `target` on the active unit.
    fn bind_texture(&mut self, target: TextureTarget, handle: u32);

    /// Make texture unit `unit` (zero based) active.
    fn active_texture(&mut self, unit: u32);

    /// Set the blend factors.
    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor);

    /// Set the blend equation.
    fn blend_equation(&mut self, equation: BlendEquation);

    /// Enable or disable depth writes.
    fn depth_mask(&mut self, mask: bool);

    /// Set the depth comparison function.
    fn depth_func(&mut self, func: CompareFunc);

    /// Set the depth clear value.
    fn clear_depth(&mut self, depth: f32);

    /// Set the colour clear value.
    fn clear_colour(&mut self, colour: Vec4);

    /// Set the per-channel colour write mask.
    fn colour_mask(&mut self, mask: BVec4);

    /// Set the stencil write mask.
    fn stencil_mask(&mut self, mask: u32);

    /// Set which faces are culled.
    fn cull_face(&mut self, face: CullFace);

    /// Enable a capability.
    fn enable(&mut self, capability: Capability);

    /// Disable a capability.
    fn disable(&mut self, capability: Capability);

    /// Pop the oldest pending driver error code, if the driver tracks
    /// them. Polled by the cache only when error checking is enabled.
    fn take_error(&mut self) -> Option<u32> {
        None
    }
}

/// Answers hardware / driver feature-limit queries.
pub trait CapabilityProvider {
    /// Number of texture units usable from the fragment stage.
    fn max_texture_units(&self) -> u32;
}

/// Capability limits captured once, e.g. right after context creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCapabilities {
    /// Number of usable texture units.
    pub max_texture_units: u32,
}

impl FixedCapabilities {
    /// Limits with the given texture unit count.
    #[must_use]
    pub const fn new(max_texture_units: u32) -> Self {
        Self { max_texture_units }
    }
}

impl Default for FixedCapabilities {
    /// GLES2 guarantees at least 8 fragment texture units.
    fn default() -> Self {
        Self::new(8)
    }
}

impl CapabilityProvider for FixedCapabilities {
    fn max_texture_units(&self) -> u32 {
        self.max_texture_units
    }
}

impl<T: CapabilityProvider + ?Sized> CapabilityProvider for &T {
    fn max_texture_units(&self) -> u32 {
        (**self).max_texture_units()
    }
}

impl<T: CapabilityProvider + ?Sized> CapabilityProvider for Box<T> {
    fn max_texture_units(&self) -> u32 {
        (**self).max_texture_units()
    }
}

/// One forwarded driver call, as a value.
///
/// Used by [`recording::RecordingDriver`] and for trace logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriverCall {
    /// [`Driver::bind_buffer`]
    BindBuffer {
        /// Binding point.
        target: BufferTarget,
        /// Object name.
        handle: u32,
    },
    /// [`Driver::delete_buffer`]
    DeleteBuffer {
        /// Binding point the object was tracked at.
        target: BufferTarget,
        /// Object name.
        handle: u32,
    },
    /// [`Driver::tex_parameter`]
    TexParameter {
        /// Texture binding point.
        target: TextureTarget,
        /// Parameter name.
        param: TextureParam,
        /// Parameter value.
        value: i32,
    },
    /// [`Driver::bind_texture`]
    BindTexture {
        /// Texture binding point.
        target: TextureTarget,
        /// Texture name.
        handle: u32,
    },
    /// [`Driver::active_texture`]
    ActiveTexture(u32),
    /// [`Driver::blend_func`]
    BlendFunc {
        /// Source factor.
        src: BlendFactor,
        /// Destination factor.
        dst: BlendFactor,
    },
    /// [`Driver::blend_equation`]
    BlendEquation(BlendEquation),
    /// [`Driver::depth_mask`]
    DepthMask(bool),
    /// [`Driver::depth_func`]
    DepthFunc(CompareFunc),
    /// [`Driver::clear_depth`]
    ClearDepth(f32),
    /// [`Driver::clear_colour`]
    ClearColour(Vec4),
    /// [`Driver::colour_mask`]
    ColourMask(BVec4),
    /// [`Driver::stencil_mask`]
    StencilMask(u32),
    /// [`Driver::cull_face`]
    CullFace(CullFace),
    /// [`Driver::enable`]
    Enable(Capability),
    /// [`Driver::disable`]
    Disable(Capability),
}

impl DriverCall {
    /// Issue this call against `driver`.
    pub fn apply<D: Driver + ?Sized>(self, driver: &mut D) {
        match self {
            Self::BindBuffer { target, handle } => {
                driver.bind_buffer(target, handle);
            }
            Self::DeleteBuffer { target, handle } => {
                driver.delete_buffer(target, handle);
            }
            Self::TexParameter {
                target,
                param,
                value,
            } => driver.tex_parameter(target, param, value),
            Self::BindTexture { target, handle } => {
                driver.bind_texture(target, handle);
            }
            Self::ActiveTexture(unit) => driver.active_texture(unit),
            Self::BlendFunc { src, dst } => driver.blend_func(src, dst),
            Self::BlendEquation(eq) => driver.blend_equation(eq),
            Self::DepthMask(mask) => driver.depth_mask(mask),
            Self::DepthFunc(func) => driver.depth_func(func),
            Self::ClearDepth(depth) => driver.clear_depth(depth),
            Self::ClearColour(colour) => driver.clear_colour(colour),
            Self::ColourMask(mask) => driver.colour_mask(mask),
            Self::StencilMask(mask) => driver.stencil_mask(mask),
            Self::CullFace(face) => driver.cull_face(face),
            Self::Enable(cap) => driver.enable(cap),
            Self::Disable(cap) => driver.disable(cap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::RecordingDriver;
    use super::*;

    #[test]
    fn fixed_capabilities_default_to_gles2_minimum() {
        assert_eq!(FixedCapabilities::default().max_texture_units(), 8);
        let caps = FixedCapabilities::new(16);
        let boxed: Box<dyn CapabilityProvider> = Box::new(caps);
        assert_eq!(boxed.max_texture_units(), 16);
    }

    #[test]
    fn apply_replays_onto_driver() {
        let calls = [
            DriverCall::ActiveTexture(2),
            DriverCall::BindBuffer {
                target: BufferTarget::Array,
                handle: 7,
            },
            DriverCall::ClearColour(Vec4::new(1.0, 0.0, 0.0, 1.0)),
            DriverCall::Enable(Capability::Blend),
        ];
        let mut driver = RecordingDriver::default();
        for call in calls {
            call.apply(&mut driver);
        }
        assert_eq!(driver.calls(), &calls);
    }
}
