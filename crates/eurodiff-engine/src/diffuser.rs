//! Day-by-day simulation driver.
//!
//! [`Diffuser`] owns a case's countries once they are seeded and linked.
//! Each [`step()`](Diffuser::step) is one simulated day, run as two full
//! passes over the grid: every city stages its portions from the morning
//! snapshot, and only then does any city send them. Fusing the passes per
//! city would let later cities send coins they received earlier the same
//! day.
//!
//! # Ownership model
//!
//! The diffuser takes the `Vec<Country>` by value. Neighbour links are
//! [`CityId`](eurodiff_core::CityId) indices into that vector, so the
//! countries must not be reordered after linking; the diffuser never
//! hands out mutable access.

use eurodiff_core::{CityId, CountryId, Day, StepError};
use eurodiff_space::{transfer_portions, Country};
use tracing::{debug, trace};

/// The day a country completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionRecord {
    /// The completed country.
    pub country: CountryId,
    /// Its name, copied for reporting and ordering.
    pub name: String,
    /// Day on which its last city received its last missing motif.
    pub day: Day,
}

/// Simulation driver for one case.
///
/// # Example
///
/// ```ignore
/// let mut diffuser = Diffuser::new(countries);
/// while !diffuser.is_done() {
///     diffuser.step()?;
/// }
/// for record in diffuser.records() {
///     println!("{} {}", record.name, record.day);
/// }
/// ```
#[derive(Debug)]
pub struct Diffuser {
    countries: Vec<Country>,
    day: Day,
    records: Vec<CompletionRecord>,
    recorded: Vec<bool>,
}

impl Diffuser {
    /// Take ownership of seeded, linked countries.
    ///
    /// Countries that are already complete (a lone country holds every
    /// motif as soon as it is seeded) are recorded at day 0.
    pub fn new(countries: Vec<Country>) -> Self {
        let mut diffuser = Self {
            recorded: vec![false; countries.len()],
            records: Vec::with_capacity(countries.len()),
            countries,
            day: Day(0),
        };
        let already: Vec<CountryId> = diffuser
            .countries
            .iter()
            .filter(|c| c.is_complete())
            .map(Country::id)
            .collect();
        for id in already {
            diffuser.record(id);
        }
        diffuser
    }

    /// Simulate one day.
    ///
    /// Advances the day counter, stages portions in every city, then
    /// transfers from every city. Countries completing during the
    /// transfer pass are recorded with the new day.
    ///
    /// Returns `Ok(true)` once every country has completed.
    ///
    /// # Errors
    ///
    /// [`StepError`] if a transfer is rejected. The day is left partly
    /// applied; the case should be abandoned.
    pub fn step(&mut self) -> Result<bool, StepError> {
        self.day = self.day.next();

        for country in &mut self.countries {
            country.prepare_portions();
        }

        for c in 0..self.countries.len() {
            let country = CountryId(c as u32);
            for index in 0..self.countries[c].city_count() {
                let from = CityId::new(country, index as u32);
                for completed in transfer_portions(&mut self.countries, from)? {
                    self.record(completed);
                }
            }
        }

        trace!(day = %self.day, completed = self.records.len(), "day simulated");
        Ok(self.is_done())
    }

    /// Whether every country has completed.
    pub fn is_done(&self) -> bool {
        self.records.len() == self.countries.len()
    }

    /// Days simulated so far.
    pub fn day(&self) -> Day {
        self.day
    }

    /// The simulated countries.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Completion records ordered by day, then by country name.
    pub fn records(&self) -> Vec<CompletionRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.name.cmp(&b.name)));
        sorted
    }

    fn record(&mut self, id: CountryId) {
        let Some(seen) = self.recorded.get_mut(id.index()) else {
            return;
        };
        if *seen {
            return;
        }
        *seen = true;
        let name = self.countries[id.index()].name().to_string();
        debug!(country = %name, day = %self.day, "country complete");
        self.records.push(CompletionRecord {
            country: id,
            name,
            day: self.day,
        });
    }
}
