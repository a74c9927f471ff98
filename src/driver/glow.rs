//! OpenGL / GLES driver backed by a [`glow::Context`].

use std::num::NonZeroU32;
use std::sync::Arc;

use glam::{BVec4, Vec4};
use glow::HasContext;

use super::{CapabilityProvider, Driver, FixedCapabilities};
use crate::gl::{
    BlendEquation, BlendFactor, BufferKind, BufferTarget, Capability,
    CompareFunc, CullFace, TextureParam, TextureTarget, texture_unit,
};

/// Forwards every call to a live GL context.
///
/// The context is shared so the renderer can keep issuing draw calls on
/// it; state changes must still go through the cache.
pub struct GlowDriver {
    gl: Arc<glow::Context>,
}

impl GlowDriver {
    /// Wrap a GL context.
    ///
    /// # Safety
    ///
    /// `gl` must stay current on the calling thread for as long as the
    /// driver is used, and the driver must only be used from that thread.
    #[must_use]
    pub unsafe fn new(gl: Arc<glow::Context>) -> Self {
        Self { gl }
    }

    /// The wrapped context.
    #[must_use]
    pub fn context(&self) -> &Arc<glow::Context> {
        &self.gl
    }

    /// Query limits once, for use as the cache's capability provider.
    #[must_use]
    pub fn query_capabilities(&self) -> FixedCapabilities {
        FixedCapabilities::new(self.max_texture_units())
    }
}

fn native<T>(handle: u32, wrap: fn(NonZeroU32) -> T) -> Option<T> {
    NonZeroU32::new(handle).map(wrap)
}

impl Driver for GlowDriver {
    fn bind_buffer(&mut self, target: BufferTarget, handle: u32) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe {
            match target.kind() {
                BufferKind::Buffer => self.gl.bind_buffer(
                    target.to_gl(),
                    native(handle, glow::NativeBuffer),
                ),
                BufferKind::Framebuffer => self.gl.bind_framebuffer(
                    target.to_gl(),
                    native(handle, glow::NativeFramebuffer),
                ),
                BufferKind::Renderbuffer => self.gl.bind_renderbuffer(
                    target.to_gl(),
                    native(handle, glow::NativeRenderbuffer),
                ),
            }
        }
    }

    fn delete_buffer(&mut self, target: BufferTarget, handle: u32) {
        let Some(name) = NonZeroU32::new(handle) else {
            return;
        };
        // SAFETY: the context is current on this thread (see `new`).
        unsafe {
            match target.kind() {
                BufferKind::Buffer => {
                    self.gl.delete_buffer(glow::NativeBuffer(name));
                }
                BufferKind::Framebuffer => {
                    self.gl.delete_framebuffer(glow::NativeFramebuffer(name));
                }
                BufferKind::Renderbuffer => {
                    self.gl.delete_renderbuffer(glow::NativeRenderbuffer(name));
                }
            }
        }
    }

    fn tex_parameter(
        &mut self,
        target: TextureTarget,
        param: TextureParam,
        value: i32,
    ) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe {
            self.gl
                .tex_parameter_i32(target.to_gl(), param.to_gl(), value);
        }
    }

    fn bind_texture(&mut self, target: TextureTarget, handle: u32) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe {
            self.gl
                .bind_texture(target.to_gl(), native(handle, glow::NativeTexture));
        }
    }

    fn active_texture(&mut self, unit: u32) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe { self.gl.active_texture(texture_unit(unit)) }
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe { self.gl.blend_func(src.to_gl(), dst.to_gl()) }
    }

    fn blend_equation(&mut self, equation: BlendEquation) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe { self.gl.blend_equation(equation.to_gl()) }
    }

    fn depth_mask(&mut self, mask: bool) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe { self.gl.depth_mask(mask) }
    }

    fn depth_func(&mut self, func: CompareFunc) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe { self.gl.depth_func(func.to_gl()) }
    }

    fn clear_depth(&mut self, depth: f32) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe { self.gl.clear_depth_f32(depth) }
    }

    fn clear_colour(&mut self, colour: Vec4) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe { self.gl.clear_color(colour.x, colour.y, colour.z, colour.w) }
    }

    fn colour_mask(&mut self, mask: BVec4) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe { self.gl.color_mask(mask.x, mask.y, mask.z, mask.w) }
    }

    fn stencil_mask(&mut self, mask: u32) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe { self.gl.stencil_mask(mask) }
    }

    fn cull_face(&mut self, face: CullFace) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe { self.gl.cull_face(face.to_gl()) }
    }

    fn enable(&mut self, capability: Capability) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe { self.gl.enable(capability.to_gl()) }
    }

    fn disable(&mut self, capability: Capability) {
        // SAFETY: the context is current on this thread (see `new`).
        unsafe { self.gl.disable(capability.to_gl()) }
    }

    fn take_error(&mut self) -> Option<u32> {
        // SAFETY: the context is current on this thread (see `new`).
        let code = unsafe { self.gl.get_error() };
        (code != glow::NO_ERROR).then_some(code)
    }
}

impl CapabilityProvider for GlowDriver {
    fn max_texture_units(&self) -> u32 {
        // SAFETY: the context is current on this thread (see `new`).
        let units =
            unsafe { self.gl.get_parameter_i32(glow::MAX_TEXTURE_IMAGE_UNITS) };
        units.max(0) as u32
    }
}
