//! Strongly-typed identifiers for countries, cities, and simulated days.

use std::fmt;

/// Identifies a country within a case.
///
/// Countries are numbered in input order. `CountryId(n)` is also the
/// index of the motif that the n-th country mints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryId(pub u32);

impl CountryId {
    /// Position of this country in the case's country list.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The motif minted by this country.
    pub fn motif(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CountryId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a city: the owning country plus the city's dense index
/// inside that country's block.
///
/// Used as the non-owning neighbour link between cities, including
/// links that cross a border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId {
    /// Owning country.
    pub country: CountryId,
    /// Dense index within the country (column-major over its rectangle).
    pub index: u32,
}

impl CityId {
    /// Build a city ID from a country and a dense index.
    pub fn new(country: CountryId, index: u32) -> Self {
        Self { country, index }
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.country, self.index)
    }
}

/// Simulated day counter.
///
/// Day 0 is the seeded initial state; each call to the driver's step
/// advances it by one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day(pub u32);

impl Day {
    /// The day after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Day {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
