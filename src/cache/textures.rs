//! Texture binding, texture unit selection and sampler parameters.

use super::StateCache;
use crate::driver::{CapabilityProvider, Driver, DriverCall};
use crate::error::TextureUnitError;
use crate::gl::{TextureParam, TextureTarget};

impl<D: Driver, C: CapabilityProvider> StateCache<D, C> {
    /// Bind texture `handle` at `target`.
    ///
    /// Always forwarded: a texture bind is scoped to the active unit,
    /// which the cache does not track per texture. The handle becomes the
    /// target of subsequent [`set_texture_param`](Self::set_texture_param)
    /// calls.
    pub fn bind_texture(&mut self, target: TextureTarget, handle: u32) {
        self.state.last_bound_texture = handle;
        self.forward(DriverCall::BindTexture { target, handle });
    }

    /// Set an integer parameter on the most recently bound texture.
    ///
    /// Parameters are remembered per texture handle (not per unit), so
    /// switching back to a texture keeps its recorded values.
    pub fn set_texture_param(
        &mut self,
        target: TextureTarget,
        param: TextureParam,
        value: i32,
    ) {
        let param = param.normalized();
        let texture = self.state.last_bound_texture;
        let current = self
            .state
            .textures
            .get(&texture)
            .and_then(|params| params.get(&param))
            .copied();
        if self.elide(current == Some(value)) {
            return;
        }
        let _ = self
            .state
            .textures
            .entry(texture)
            .or_default()
            .insert(param, value);
        self.forward(DriverCall::TexParameter {
            target,
            param,
            value,
        });
    }

    /// Make texture unit `unit` active.
    ///
    /// Unit `0` is always accepted. Any other unit must be below the
    /// capability provider's texture unit count; otherwise nothing is
    /// forwarded, the cached unit is kept, and the limit is reported.
    pub fn activate_texture_unit(
        &mut self,
        unit: u32,
    ) -> Result<(), TextureUnitError> {
        if self.elide(unit == self.state.active_texture_unit) {
            return Ok(());
        }

        let max_units = self.capabilities.max_texture_units();
        if unit < max_units {
            self.state.active_texture_unit = unit;
            self.forward(DriverCall::ActiveTexture(unit));
            Ok(())
        } else if unit == 0 {
            Ok(())
        } else {
            log::warn!(
                "texture unit {unit} rejected, hardware exposes {max_units}"
            );
            Err(TextureUnitError { unit, max_units })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::driver::recording::RecordingDriver;
    use crate::driver::{DriverCall, FixedCapabilities};
    use crate::error::TextureUnitError;
    use crate::gl::{TextureParam, TextureTarget};
    use crate::StateCache;

    const LINEAR: i32 = 0x2601;
    const NEAREST: i32 = 0x2600;

    fn new_cache(units: u32) -> StateCache<RecordingDriver> {
        let mut cache = StateCache::new(
            RecordingDriver::new(),
            FixedCapabilities::new(units),
        );
        cache.driver_mut().clear();
        cache
    }

    fn param(value: i32) -> DriverCall {
        DriverCall::TexParameter {
            target: TextureTarget::Texture2D,
            param: TextureParam::MinFilter,
            value,
        }
    }

    #[test]
    fn texture_bind_is_never_elided() {
        let mut cache = new_cache(8);
        cache.bind_texture(TextureTarget::Texture2D, 3);
        cache.bind_texture(TextureTarget::Texture2D, 3);
        assert_eq!(cache.driver().len(), 2);
        assert_eq!(cache.state().last_bound_texture(), 3);
        assert_eq!(cache.stats().elided, 0);
    }

    #[test]
    fn texture_param_dedups_per_value() {
        let mut cache = new_cache(8);
        let target = TextureTarget::Texture2D;
        cache.bind_texture(target, 1);
        cache.driver_mut().clear();

        cache.set_texture_param(target, TextureParam::MinFilter, LINEAR);
        cache.set_texture_param(target, TextureParam::MinFilter, LINEAR);
        cache.set_texture_param(target, TextureParam::MinFilter, NEAREST);
        assert_eq!(cache.driver().calls(), &[param(LINEAR), param(NEAREST)]);
        assert_eq!(
            cache.state().texture_param(1, TextureParam::MinFilter),
            Some(NEAREST)
        );
    }

    #[test]
    fn texture_params_are_isolated_per_texture() {
        let mut cache = new_cache(8);
        let target = TextureTarget::Texture2D;

        cache.bind_texture(target, 1);
        cache.set_texture_param(target, TextureParam::MinFilter, LINEAR);
        cache.bind_texture(target, 2);
        cache.set_texture_param(target, TextureParam::MinFilter, NEAREST);
        assert_eq!(
            cache.state().texture_param(1, TextureParam::MinFilter),
            Some(LINEAR)
        );

        cache.bind_texture(target, 1);
        cache.driver_mut().clear();
        cache.set_texture_param(target, TextureParam::MinFilter, LINEAR);
        assert!(cache.driver().is_empty());
    }

    #[test]
    fn texture_params_ignore_active_unit() {
        let mut cache = new_cache(8);
        let target = TextureTarget::Texture2D;
        cache.bind_texture(target, 5);
        cache.set_texture_param(target, TextureParam::WrapS, 0x812F);

        cache.activate_texture_unit(3).unwrap();
        cache.bind_texture(target, 5);
        cache.driver_mut().clear();
        cache.set_texture_param(target, TextureParam::WrapS, 0x812F);
        assert!(cache.driver().is_empty());
    }

    #[test]
    fn params_before_any_bind_go_to_texture_zero() {
        let mut cache = new_cache(8);
        cache.set_texture_param(
            TextureTarget::Texture2D,
            TextureParam::MagFilter,
            LINEAR,
        );
        assert_eq!(
            cache.state().texture_param(0, TextureParam::MagFilter),
            Some(LINEAR)
        );
    }

    #[test]
    fn unit_within_limit_is_activated_once() {
        let mut cache = new_cache(4);
        assert!(cache.activate_texture_unit(3).is_ok());
        assert!(cache.activate_texture_unit(3).is_ok());
        assert_eq!(cache.driver().calls(), &[DriverCall::ActiveTexture(3)]);
        assert_eq!(cache.state().active_texture_unit(), 3);
    }

    #[test]
    fn unit_past_limit_is_rejected() {
        let mut cache = new_cache(4);
        cache.activate_texture_unit(2).unwrap();
        cache.driver_mut().clear();

        assert_eq!(
            cache.activate_texture_unit(4),
            Err(TextureUnitError {
                unit: 4,
                max_units: 4
            })
        );
        assert!(cache.driver().is_empty());
        assert_eq!(cache.state().active_texture_unit(), 2);
    }

    #[test]
    fn unit_zero_is_always_accepted() {
        let mut cache = new_cache(0);
        assert!(cache.activate_texture_unit(0).is_ok());
        assert!(cache.activate_texture_unit(1).is_err());

        let mut cache = new_cache(4);
        cache.activate_texture_unit(1).unwrap();
        assert!(cache.activate_texture_unit(0).is_ok());
        assert_eq!(cache.state().active_texture_unit(), 0);
    }
}
