//! In-memory driver that records every forwarded call.
//!
//! Useful for tests and for auditing the call stream a renderer produces
//! through the cache without a live GL context.

use std::collections::VecDeque;

use glam::{BVec4, Vec4};

use super::{Driver, DriverCall};
use crate::gl::{
    BlendEquation, BlendFactor, BufferTarget, Capability, CompareFunc,
    CullFace, TextureParam, TextureTarget,
};

/// Driver that appends each call to a log instead of touching a GPU.
///
/// Pair it with a [`FixedCapabilities`](super::FixedCapabilities) when
/// building a cache.
#[derive(Debug, Clone, Default)]
pub struct RecordingDriver {
    calls: Vec<DriverCall>,
    pending_errors: VecDeque<u32>,
}

impl RecordingDriver {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[DriverCall] {
        &self.calls
    }

    /// Number of calls recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Take the recorded calls, leaving the log empty.
    pub fn drain(&mut self) -> Vec<DriverCall> {
        std::mem::take(&mut self.calls)
    }

    /// Forget the recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Queue an error code to be returned by the next
    /// [`Driver::take_error`].
    pub fn push_error(&mut self, code: u32) {
        self.pending_errors.push_back(code);
    }

    fn record(&mut self, call: DriverCall) {
        self.calls.push(call);
    }
}

impl Driver for RecordingDriver {
    fn bind_buffer(&mut self, target: BufferTarget, handle: u32) {
        self.record(DriverCall::BindBuffer { target, handle });
    }

    fn delete_buffer(&mut self, target: BufferTarget, handle: u32) {
        self.record(DriverCall::DeleteBuffer { target, handle });
    }

    fn tex_parameter(
        &mut self,
        target: TextureTarget,
        param: TextureParam,
        value: i32,
    ) {
        self.record(DriverCall::TexParameter {
            target,
            param,
            value,
        });
    }

    fn bind_texture(&mut self, target: TextureTarget, handle: u32) {
        self.record(DriverCall::BindTexture { target, handle });
    }

    fn active_texture(&mut self, unit: u32) {
        self.record(DriverCall::ActiveTexture(unit));
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        self.record(DriverCall::BlendFunc { src, dst });
    }

    fn blend_equation(&mut self, equation: BlendEquation) {
        self.record(DriverCall::BlendEquation(equation));
    }

    fn depth_mask(&mut self, mask: bool) {
        self.record(DriverCall::DepthMask(mask));
    }

    fn depth_func(&mut self, func: CompareFunc) {
        self.record(DriverCall::DepthFunc(func));
    }

    fn clear_depth(&mut self, depth: f32) {
        self.record(DriverCall::ClearDepth(depth));
    }

    fn clear_colour(&mut self, colour: Vec4) {
        self.record(DriverCall::ClearColour(colour));
    }

    fn colour_mask(&mut self, mask: BVec4) {
        self.record(DriverCall::ColourMask(mask));
    }

    fn stencil_mask(&mut self, mask: u32) {
        self.record(DriverCall::StencilMask(mask));
    }

    fn cull_face(&mut self, face: CullFace) {
        self.record(DriverCall::CullFace(face));
    }

    fn enable(&mut self, capability: Capability) {
        self.record(DriverCall::Enable(capability));
    }

    fn disable(&mut self, capability: Capability) {
        self.record(DriverCall::Disable(capability));
    }

    fn take_error(&mut self) -> Option<u32> {
        self.pending_errors.pop_front()
    }
}
