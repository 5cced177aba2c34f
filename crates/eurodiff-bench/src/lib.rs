//! Benchmark profiles for the eurodiff simulator.
//!
//! - [`reference_profile`]: the three-country sample map (28 cities)
//! - [`full_grid_profile`]: twenty countries tiling the whole 11x11 grid
//! - [`prepared`] / [`warmed_up`]: seeded, linked state ready to step

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use eurodiff_core::{CountryDescriptor, INITIAL_COINS};
use eurodiff_engine::{build_countries, CaseError, Diffuser};
use eurodiff_space::{Country, Linker};

/// France, Spain and Portugal: completes on day 1325.
pub fn reference_profile() -> Vec<CountryDescriptor> {
    vec![
        CountryDescriptor::new("France", 1, 4, 4, 6),
        CountryDescriptor::new("Spain", 3, 1, 6, 3),
        CountryDescriptor::new("Portugal", 1, 1, 2, 2),
    ]
}

/// The largest legal case: 20 countries covering all 121 squares.
///
/// Columns are 2, 2, 2, 2 and 3 squares wide; rows are 3, 3, 3 and 2
/// squares tall.
pub fn full_grid_profile() -> Vec<CountryDescriptor> {
    const COLUMNS: [(i32, i32); 5] = [(0, 1), (2, 3), (4, 5), (6, 7), (8, 10)];
    const ROWS: [(i32, i32); 4] = [(0, 2), (3, 5), (6, 8), (9, 10)];
    let mut profile = Vec::with_capacity(COLUMNS.len() * ROWS.len());
    for (r, &(yl, yh)) in ROWS.iter().enumerate() {
        for (c, &(xl, xh)) in COLUMNS.iter().enumerate() {
            profile.push(CountryDescriptor::new(format!("R{r}C{c}"), xl, yl, xh, yh));
        }
    }
    profile
}

/// Build, seed and link `descriptors` without overlap or connectivity
/// checks.
pub fn prepared(descriptors: &[CountryDescriptor]) -> Result<Vec<Country>, CaseError> {
    let mut countries = build_countries(descriptors)?;
    for country in countries.iter_mut() {
        let motif = country.id().index();
        let _ = country.seed(motif, INITIAL_COINS)?;
    }
    let linker = Linker::new(&countries)?;
    linker.link_all(&mut countries);
    Ok(countries)
}

/// A diffuser for `descriptors`, advanced `days` days.
pub fn warmed_up(descriptors: &[CountryDescriptor], days: u32) -> Result<Diffuser, CaseError> {
    let mut diffuser = Diffuser::new(prepared(descriptors)?);
    for _ in 0..days {
        diffuser.step()?;
    }
    Ok(diffuser)
}

/// Total squares covered by a profile.
pub fn city_count(descriptors: &[CountryDescriptor]) -> usize {
    descriptors
        .iter()
        .map(|d| ((d.xh - d.xl + 1) * (d.yh - d.yl + 1)) as usize)
        .sum()
}
