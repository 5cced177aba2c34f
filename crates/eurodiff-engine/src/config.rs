//! Per-case run configuration and its validation.
//!
//! [`CaseConfig`] controls the guard rails around a simulation run, not
//! the diffusion itself: the transfer rule and initial stock are fixed
//! constants in `eurodiff-core`.

use thiserror::Error;

/// Errors detected during [`CaseConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_days` was set to zero, which would reject every multi-country case.
    #[error("max_days must be at least 1 when set")]
    ZeroDayLimit,
}

/// Options for running one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseConfig {
    /// Reject cases whose cities do not form one connected graph.
    /// Default: `true`.
    ///
    /// A disconnected map can never complete, so turning this off is
    /// only safe together with `max_days`.
    pub check_connectivity: bool,
    /// Give up once this many days have been simulated without every
    /// country completing. Default: `None` (no cap).
    pub max_days: Option<u32>,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            check_connectivity: true,
            max_days: None,
        }
    }
}

impl CaseConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_days == Some(0) {
            return Err(ConfigError::ZeroDayLimit);
        }
        Ok(())
    }

    /// Whether the run must stop before simulating another day.
    pub(crate) fn day_limit_reached(&self, days_run: u32) -> bool {
        self.max_days.is_some_and(|limit| days_run >= limit)
    }
}
