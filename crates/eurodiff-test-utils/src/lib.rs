//! Test utilities and mock types for eurodiff development.
//!
//! Provides canonical case fixtures, a [`seeded_and_linked`] builder that
//! runs the pre-simulation setup without the case-level validation, and
//! a [`MockGraph`] implementing [`CityGraph`] for traversal tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use eurodiff_core::{CityId, CountryDescriptor, CountryId, INITIAL_COINS, NEIGHBOUR_SLOTS};
use eurodiff_space::{CityGraph, Country, Linker};

/// Build, seed and link countries from descriptors.
///
/// Skips overlap and connectivity checks so tests can construct maps the
/// case runner would reject. Panics on descriptors the space crate
/// refuses.
pub fn seeded_and_linked(descriptors: &[CountryDescriptor]) -> Vec<Country> {
    let n = descriptors.len();
    let mut countries: Vec<Country> = descriptors
        .iter()
        .enumerate()
        .map(|(i, d)| Country::new(CountryId(i as u32), d, n).expect("valid descriptor"))
        .collect();
    for (motif, country) in countries.iter_mut().enumerate() {
        let _ = country.seed(motif, INITIAL_COINS).expect("seed in range");
    }
    let linker = Linker::new(&countries).expect("no shared squares");
    linker.link_all(&mut countries);
    countries
}

/// Sum of `motif` coins over every city of every country.
pub fn total_coins(countries: &[Country], motif: usize) -> i64 {
    countries
        .iter()
        .flat_map(Country::cities)
        .map(|city| city.coins()[motif])
        .sum()
}

/// Hand-wired city graph.
///
/// Cities are added one at a time; edges are directed, so tests can
/// build the asymmetric graphs the linker never produces.
#[derive(Default)]
pub struct MockGraph {
    links: HashMap<CityId, [Option<CityId>; NEIGHBOUR_SLOTS]>,
}

impl MockGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city with no neighbours.
    pub fn add_city(&mut self, city: CityId) {
        self.links.entry(city).or_insert([None; NEIGHBOUR_SLOTS]);
    }

    /// Point `slot` of `from` at `to`. Both cities are added if absent.
    pub fn link(&mut self, from: CityId, slot: usize, to: CityId) {
        self.add_city(to);
        self.links.entry(from).or_insert([None; NEIGHBOUR_SLOTS])[slot] = Some(to);
    }

    /// Link `a` and `b` in both directions.
    pub fn link_both(&mut self, a: CityId, a_slot: usize, b: CityId, b_slot: usize) {
        self.link(a, a_slot, b);
        self.link(b, b_slot, a);
    }
}

impl CityGraph for MockGraph {
    fn city_count(&self) -> usize {
        self.links.len()
    }

    fn contains(&self, city: CityId) -> bool {
        self.links.contains_key(&city)
    }

    fn neighbours(&self, city: CityId) -> [Option<CityId>; NEIGHBOUR_SLOTS] {
        self.links
            .get(&city)
            .copied()
            .unwrap_or([None; NEIGHBOUR_SLOTS])
    }
}
