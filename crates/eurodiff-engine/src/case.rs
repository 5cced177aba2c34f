//! One complete case: build, validate, seed, link, simulate.

use eurodiff_core::{
    CityError, CountryDescriptor, CountryError, CountryId, LinkError, StepError, INITIAL_COINS,
    MAX_COUNTRIES,
};
use eurodiff_space::{overlap, Country, Linker};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{CaseConfig, ConfigError};
use crate::diffuser::{CompletionRecord, Diffuser};

/// Reasons a case cannot be simulated to completion.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CaseError {
    /// The case lists no countries.
    #[error("case has no countries")]
    NoCountries,
    /// The case lists more countries than supported.
    #[error("case has {count} countries (max {max})")]
    TooManyCountries {
        /// Countries in the case.
        count: usize,
        /// The limit.
        max: usize,
    },
    /// A country descriptor was rejected.
    #[error("country '{name}' rejected")]
    Country {
        /// Name as given in the descriptor.
        name: String,
        /// Why it was rejected.
        #[source]
        source: CountryError,
    },
    /// Two countries share at least one square.
    #[error("countries '{first}' and '{second}' overlap")]
    Overlap {
        /// Earlier country in input order.
        first: String,
        /// Later country in input order.
        second: String,
    },
    /// Seeding the initial coins failed.
    #[error("seeding failed")]
    Seed(#[from] CityError),
    /// Building the coordinate map failed.
    #[error(transparent)]
    Link(#[from] LinkError),
    /// Some cities cannot be reached from the others.
    #[error("cities are not all connected ({total} cities)")]
    Disconnected {
        /// Cities in the case.
        total: usize,
    },
    /// A simulated day was rejected.
    #[error(transparent)]
    Step(#[from] StepError),
    /// The configured day cap was reached before every country completed.
    #[error("not every country completed within {limit} days")]
    DayLimitExceeded {
        /// The cap that was hit.
        limit: u32,
    },
    /// The run configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Construct one country per descriptor, in input order.
///
/// Country `i` gets id `i` and every city tracks one motif per country.
///
/// # Errors
///
/// [`CaseError::NoCountries`] or [`CaseError::TooManyCountries`] if the
/// count is out of range, [`CaseError::Country`] for the first rejected
/// descriptor.
pub fn build_countries(descriptors: &[CountryDescriptor]) -> Result<Vec<Country>, CaseError> {
    let count = descriptors.len();
    if count == 0 {
        return Err(CaseError::NoCountries);
    }
    if count > MAX_COUNTRIES {
        return Err(CaseError::TooManyCountries {
            count,
            max: MAX_COUNTRIES,
        });
    }
    descriptors
        .iter()
        .enumerate()
        .map(|(i, desc)| {
            Country::new(CountryId(i as u32), desc, count).map_err(|source| CaseError::Country {
                name: desc.name.clone(),
                source,
            })
        })
        .collect()
}

/// Run one case from descriptors to sorted completion records.
///
/// # Examples
///
/// ```
/// use eurodiff_core::{CountryDescriptor, Day};
/// use eurodiff_engine::{run_case, CaseConfig};
///
/// let case = [
///     CountryDescriptor::new("Netherlands", 1, 3, 2, 4),
///     CountryDescriptor::new("Belgium", 1, 1, 2, 2),
/// ];
/// let records = run_case(&case, &CaseConfig::default()).unwrap();
/// assert_eq!(records[0].name, "Belgium");
/// assert_eq!(records[0].day, Day(2));
/// assert_eq!(records[1].name, "Netherlands");
/// ```
///
/// # Errors
///
/// Any [`CaseError`]. Overlapping or disconnected maps are rejected
/// before the first day is simulated.
pub fn run_case(
    descriptors: &[CountryDescriptor],
    config: &CaseConfig,
) -> Result<Vec<CompletionRecord>, CaseError> {
    config.validate()?;

    let mut countries = build_countries(descriptors)?;

    if let Some((a, b)) = overlap::find_overlap(&countries) {
        let first = countries[a.index()].name().to_string();
        let second = countries[b.index()].name().to_string();
        warn!(%first, %second, "overlapping countries");
        return Err(CaseError::Overlap { first, second });
    }

    for (motif, country) in countries.iter_mut().enumerate() {
        // Completion here is picked up by `Diffuser::new`.
        let _ = country.seed(motif, INITIAL_COINS)?;
    }

    let linker = Linker::new(&countries)?;
    linker.link_all(&mut countries);

    if config.check_connectivity && !linker.is_fully_connected(&countries) {
        let total = linker.len();
        warn!(total, "disconnected map");
        return Err(CaseError::Disconnected { total });
    }

    let mut diffuser = Diffuser::new(countries);
    while !diffuser.is_done() {
        if config.day_limit_reached(diffuser.day().0) {
            let limit = diffuser.day().0;
            warn!(limit, "day limit reached");
            return Err(CaseError::DayLimitExceeded { limit });
        }
        diffuser.step()?;
    }

    debug!(days = %diffuser.day(), countries = descriptors.len(), "case complete");
    Ok(diffuser.records())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eurodiff_core::Day;

    fn desc(name: &str, xl: i32, yl: i32, xh: i32, yh: i32) -> CountryDescriptor {
        CountryDescriptor::new(name, xl, yl, xh, yh)
    }

    #[test]
    fn empty_case_rejected() {
        assert_eq!(
            run_case(&[], &CaseConfig::default()),
            Err(CaseError::NoCountries)
        );
    }

    #[test]
    fn too_many_countries_rejected() {
        let case: Vec<_> = (0..21).map(|i| desc(&format!("C{i}"), 0, 0, 0, 0)).collect();
        assert_eq!(
            build_countries(&case).unwrap_err(),
            CaseError::TooManyCountries { count: 21, max: 20 }
        );
    }

    #[test]
    fn bad_descriptor_named_in_error() {
        let case = [desc("Ok", 0, 0, 0, 0), desc("Bad", 5, 5, 4, 4)];
        match build_countries(&case).unwrap_err() {
            CaseError::Country { name, source } => {
                assert_eq!(name, "Bad");
                assert!(matches!(source, CountryError::InvalidRect { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn overlap_names_both_countries() {
        let case = [desc("A", 0, 0, 2, 2), desc("B", 5, 5, 6, 6), desc("C", 2, 2, 3, 3)];
        assert_eq!(
            run_case(&case, &CaseConfig::default()),
            Err(CaseError::Overlap {
                first: "A".into(),
                second: "C".into(),
            })
        );
    }

    #[test]
    fn disconnected_map_rejected() {
        let case = [desc("A", 0, 0, 1, 1), desc("B", 3, 0, 4, 1)];
        assert_eq!(
            run_case(&case, &CaseConfig::default()),
            Err(CaseError::Disconnected { total: 8 })
        );
    }

    #[test]
    fn disconnected_map_hits_day_limit_without_check() {
        let case = [desc("A", 0, 0, 0, 0), desc("B", 2, 0, 2, 0)];
        let config = CaseConfig {
            check_connectivity: false,
            max_days: Some(50),
        };
        assert_eq!(
            run_case(&case, &config),
            Err(CaseError::DayLimitExceeded { limit: 50 })
        );
    }

    #[test]
    fn zero_day_limit_is_a_config_error() {
        let config = CaseConfig {
            max_days: Some(0),
            ..CaseConfig::default()
        };
        assert_eq!(
            run_case(&[desc("A", 0, 0, 0, 0)], &config),
            Err(CaseError::Config(ConfigError::ZeroDayLimit))
        );
    }

    #[test]
    fn day_limit_not_hit_when_completion_is_in_time() {
        let case = [desc("A", 0, 0, 0, 0), desc("B", 1, 0, 1, 0)];
        let config = CaseConfig {
            max_days: Some(1),
            ..CaseConfig::default()
        };
        let records = run_case(&case, &config).unwrap();
        assert!(records.iter().all(|r| r.day == Day(1)));
    }

    #[test]
    fn single_country_completes_on_day_zero() {
        let records = run_case(&[desc("Luxembourg", 1, 1, 1, 1)], &CaseConfig::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].day, Day(0));
    }
}
