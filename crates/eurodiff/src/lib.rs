//! Eurodiff: coin diffusion across the cities of a grid of countries.
//!
//! Every country is a rectangle of cities on an 11x11 grid, and every
//! city starts with a million coins of its own country's motif. Each day
//! a city sends one thousandth of every motif it holds to each adjacent
//! city. A country is complete once each of its cities holds at least
//! one coin of every motif; the simulator reports the day that happens.
//!
//! This is the facade crate that re-exports the public API of the
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use eurodiff::prelude::*;
//!
//! let case = [
//!     CountryDescriptor::new("France", 1, 4, 4, 6),
//!     CountryDescriptor::new("Spain", 3, 1, 6, 3),
//!     CountryDescriptor::new("Portugal", 1, 1, 2, 2),
//! ];
//! let records = run_case(&case, &CaseConfig::default()).unwrap();
//! let days: Vec<_> = records.iter().map(|r| (r.name.as_str(), r.day.0)).collect();
//! assert_eq!(days, [("Spain", 382), ("Portugal", 416), ("France", 1325)]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `eurodiff-core` | IDs, rectangles, descriptors, constants, errors |
//! | [`space`] | `eurodiff-space` | Cities, countries, linking, overlap, transfers |
//! | [`engine`] | `eurodiff-engine` | Day-by-day driver and the case runner |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, constants and errors (`eurodiff-core`).
pub use eurodiff_core as types;

/// Cities, countries and grid topology (`eurodiff-space`).
///
/// [`space::Linker`] wires neighbours, [`space::overlap`] rejects
/// overlapping maps and [`space::transfer_portions`] moves coins.
pub use eurodiff_space as space;

/// Simulation driver and case runner (`eurodiff-engine`).
///
/// [`engine::run_case`] handles a whole case; [`engine::Diffuser`] gives
/// day-by-day control.
pub use eurodiff_engine as engine;

/// Common imports for typical eurodiff usage.
///
/// ```rust
/// use eurodiff::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use eurodiff_core::{CityId, CountryDescriptor, CountryId, Day, Rect};

    // Errors
    pub use eurodiff_core::{CityError, CountryError, LinkError, StepError};

    // Space
    pub use eurodiff_space::{City, Country, Direction, Linker};

    // Engine
    pub use eurodiff_engine::{
        run_case, CaseConfig, CaseError, CompletionRecord, ConfigError, Diffuser,
    };
}
