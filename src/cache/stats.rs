//! Per-instance call counters.

/// How many calls a [`StateCache`](crate::StateCache) forwarded versus
/// answered from its mirror.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls passed through to the driver.
    pub forwarded: u64,
    /// Calls dropped because the cached value already matched.
    pub elided: u64,
    /// Driver errors observed while error checking was enabled.
    pub driver_errors: u64,
}

impl CacheStats {
    /// Calls seen, forwarded or not.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.forwarded + self.elided
    }

    /// Fraction of calls answered from the mirror, `0.0` before any call.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.elided as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_ratio_of_empty_stats_is_zero() {
        assert_eq!(CacheStats::default().hit_ratio(), 0.0);
    }

    #[test]
    fn hit_ratio_counts_elided_share() {
        let stats = CacheStats {
            forwarded: 1,
            elided: 3,
            driver_errors: 0,
        };
        assert_eq!(stats.total(), 4);
        assert!((stats.hit_ratio() - 0.75).abs() < 1e-12);
    }
}
