//! Enabled capability set (`glEnable` / `glDisable`).

use super::StateCache;
use crate::driver::{CapabilityProvider, Driver, DriverCall};
use crate::gl::Capability;

impl<D: Driver, C: CapabilityProvider> StateCache<D, C> {
    /// Enable `capability` unless it is already enabled.
    pub fn set_enabled(&mut self, capability: Capability) {
        let capability = capability.normalized();
        let newly_enabled = self.state.enabled.insert(capability);
        if self.elide(!newly_enabled) {
            return;
        }
        self.forward(DriverCall::Enable(capability));
    }

    /// Disable `capability` unless it is already disabled.
    pub fn set_disabled(&mut self, capability: Capability) {
        let capability = capability.normalized();
        let was_enabled = self.state.enabled.remove(&capability);
        if self.elide(!was_enabled) {
            return;
        }
        self.forward(DriverCall::Disable(capability));
    }
}
