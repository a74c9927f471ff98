//! Buffer, framebuffer and renderbuffer bindings.

use super::StateCache;
use crate::driver::{CapabilityProvider, Driver, DriverCall};
use crate::gl::BufferTarget;

impl<D: Driver, C: CapabilityProvider> StateCache<D, C> {
    /// Bind `handle` at `target` unless it is already bound there.
    ///
    /// The first bind of a target always reaches the driver.
    pub fn bind_buffer(&mut self, target: BufferTarget, handle: u32) {
        self.bind_buffer_inner(target, handle, false);
    }

    /// Bind `handle` at `target` even if the cache says it is bound.
    pub fn bind_buffer_forced(&mut self, target: BufferTarget, handle: u32) {
        self.bind_buffer_inner(target, handle, true);
    }

    /// Delete `handle` if it is the object currently bound at `target`.
    ///
    /// Handle `0` is reserved and never deleted. The cached binding is
    /// kept after the delete, so a later bind of the same handle value at
    /// `target` reads as already bound; bind with
    /// [`bind_buffer_forced`](Self::bind_buffer_forced) after recycling a
    /// handle.
    pub fn delete_buffer(&mut self, target: BufferTarget, handle: u32) {
        self.delete_buffer_inner(target, handle, false);
    }

    /// Delete `handle` whether or not it is bound at `target`, as long as
    /// the target has been bound through the cache before.
    pub fn delete_buffer_forced(
        &mut self,
        target: BufferTarget,
        handle: u32,
    ) {
        self.delete_buffer_inner(target, handle, true);
    }

    fn bind_buffer_inner(
        &mut self,
        target: BufferTarget,
        handle: u32,
        force: bool,
    ) {
        let bound = self.state.buffers.get(&target).copied();
        if let Some(bound) = bound {
            if self.elide(bound == handle && !force) {
                return;
            }
        }
        let _ = self.state.buffers.insert(target, handle);
        self.forward(DriverCall::BindBuffer { target, handle });
    }

    fn delete_buffer_inner(
        &mut self,
        target: BufferTarget,
        handle: u32,
        force: bool,
    ) {
        if handle == 0 {
            return;
        }
        let bound = self.state.buffers.get(&target).copied();
        let tracked = bound.is_some_and(|bound| bound == handle || force);
        if self.elide(!tracked) {
            return;
        }
        self.forward(DriverCall::DeleteBuffer { target, handle });
    }
}
