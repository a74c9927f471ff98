//! Blending, depth, clear values, write masks and face culling.

use glam::{BVec4, Vec4};

use super::StateCache;
use crate::driver::{CapabilityProvider, Driver, DriverCall};
use crate::gl::{
    BlendEquation, BlendFactor, CompareFunc, CullFace, DiscardBuffers,
    PolygonMode,
};

impl<D: Driver, C: CapabilityProvider> StateCache<D, C> {
    /// Set the blend factors; forwarded if either factor changes.
    pub fn set_blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        let unchanged =
            self.state.blend_src == src && self.state.blend_dst == dst;
        if self.elide(unchanged) {
            return;
        }
        self.state.blend_src = src;
        self.state.blend_dst = dst;
        self.forward(DriverCall::BlendFunc { src, dst });
    }

    /// Set the blend equation.
    pub fn set_blend_equation(&mut self, equation: BlendEquation) {
        if self.elide(self.state.blend_equation == equation) {
            return;
        }
        self.state.blend_equation = equation;
        self.forward(DriverCall::BlendEquation(equation));
    }

    /// Enable or disable depth writes.
    pub fn set_depth_mask(&mut self, mask: bool) {
        if self.elide(self.state.depth_mask == mask) {
            return;
        }
        self.state.depth_mask = mask;
        self.forward(DriverCall::DepthMask(mask));
    }

    /// Set the depth comparison function.
    pub fn set_depth_func(&mut self, func: CompareFunc) {
        if self.elide(self.state.depth_func == func) {
            return;
        }
        self.state.depth_func = func;
        self.forward(DriverCall::DepthFunc(func));
    }

    /// Set the depth clear value. Compared exactly, so a NaN is always
    /// forwarded.
    pub fn set_clear_depth(&mut self, depth: f32) {
        if self.elide(self.state.clear_depth == depth) {
            return;
        }
        self.state.clear_depth = depth;
        self.forward(DriverCall::ClearDepth(depth));
    }

    /// Set the colour clear value; forwarded if any channel changes.
    pub fn set_clear_colour(&mut self, r: f32, g: f32, b: f32, a: f32) {
        let colour = Vec4::new(r, g, b, a);
        if self.elide(self.state.clear_colour == colour) {
            return;
        }
        self.state.clear_colour = colour;
        self.forward(DriverCall::ClearColour(colour));
    }

    /// Set the per-channel colour write mask; forwarded if any channel
    /// changes.
    pub fn set_colour_mask(&mut self, r: bool, g: bool, b: bool, a: bool) {
        let mask = BVec4::new(r, g, b, a);
        if self.elide(self.state.colour_mask == mask) {
            return;
        }
        self.state.colour_mask = mask;
        self.forward(DriverCall::ColourMask(mask));
    }

    /// Set the stencil write mask.
    pub fn set_stencil_mask(&mut self, mask: u32) {
        if self.elide(self.state.stencil_mask == mask) {
            return;
        }
        self.state.stencil_mask = mask;
        self.forward(DriverCall::StencilMask(mask));
    }

    /// Set which faces are culled.
    pub fn set_cull_face(&mut self, face: CullFace) {
        if self.elide(self.state.cull_face == face) {
            return;
        }
        self.state.cull_face = face;
        self.forward(DriverCall::CullFace(face));
    }

    /// Record the polygon mode. GLES has no polygon-mode entry point, so
    /// this is cached for the renderer to consult and never forwarded.
    pub fn set_polygon_mode(&mut self, mode: PolygonMode) {
        self.state.polygon_mode = mode;
    }

    /// Record which attachments to discard at the end of the frame.
    /// Cached only; the renderer issues the discard itself.
    pub fn set_discard_buffers(&mut self, buffers: DiscardBuffers) {
        self.state.discard_buffers = buffers;
    }
}
