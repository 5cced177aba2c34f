//! Error types for the simulation core.
//!
//! Organised by subsystem: city coin accounting, country construction
//! and lookup, topology linking, and the per-day step.

use thiserror::Error;

use crate::id::CityId;
use crate::id::CountryId;
use crate::rect::Rect;

/// Errors from reading or writing a city's coin counts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CityError {
    /// The motif index is not tracked by this city.
    #[error("motif {motif} out of range: city tracks {motif_count} motifs")]
    MotifOutOfRange {
        /// The offending motif index.
        motif: usize,
        /// Number of motifs the city tracks.
        motif_count: usize,
    },
    /// A write would leave a negative coin count.
    #[error("coin count for motif {motif} cannot be negative (got {value})")]
    NegativeCoins {
        /// Motif being written.
        motif: usize,
        /// The rejected value.
        value: i64,
    },
}

/// Errors from country construction or coordinate lookup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CountryError {
    /// The country name is empty.
    #[error("country name is empty")]
    EmptyName,
    /// The country name exceeds the length limit.
    #[error("country name '{name}' is {len} characters long (max {max})")]
    NameTooLong {
        /// The rejected name.
        name: String,
        /// Its length in characters.
        len: usize,
        /// The limit.
        max: usize,
    },
    /// Corners lie outside the grid or are inverted.
    #[error("invalid country rectangle ({xl},{yl})-({xh},{yh})")]
    InvalidRect {
        /// Lower-left x.
        xl: i32,
        /// Lower-left y.
        yl: i32,
        /// Upper-right x.
        xh: i32,
        /// Upper-right y.
        yh: i32,
    },
    /// A coordinate lookup fell outside the country.
    #[error("no city at ({x},{y}) in country covering {rect:?}")]
    CoordOutOfRange {
        /// Requested x.
        x: i32,
        /// Requested y.
        y: i32,
        /// The country's rectangle.
        rect: Rect,
    },
}

/// Errors from building the coordinate-to-city map.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Two countries claim the same grid square.
    #[error("countries {first} and {second} both claim ({x},{y})")]
    DuplicateCoordinate {
        /// Square x.
        x: i32,
        /// Square y.
        y: i32,
        /// Country that claimed the square first.
        first: CountryId,
        /// Country that claimed it again.
        second: CountryId,
    },
}

/// Errors raised while advancing the simulation by one day.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StepError {
    /// A neighbour link points at a city that does not exist.
    #[error("city {city} does not exist")]
    UnknownCity {
        /// The dangling city ID.
        city: CityId,
    },
    /// A coin transfer touching `city` was rejected.
    #[error("coin transfer at city {city} failed: {source}")]
    Transfer {
        /// City whose coins were being written.
        city: CityId,
        /// The underlying accounting error.
        #[source]
        source: CityError,
    },
}
