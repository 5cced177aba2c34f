//! Grid model for the eurodiff simulator.
//!
//! Cities are the grid squares; each holds a count per coin motif and up
//! to four neighbour links. Countries own rectangular blocks of cities.
//! The [`Linker`] wires neighbour links across country borders and checks
//! that the whole map forms one connected graph, and the [`overlap`]
//! module rejects cases where two countries share a square.
//!
//! # Completion signalling
//!
//! Completion flows upward through return values rather than callbacks:
//! [`City::set`] reports when a write completes its city, the country
//! counts completed cities, and [`transfer_portions`] hands the IDs of
//! countries that completed during a transfer back to the driver.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod city;
pub mod country;
pub mod direction;
pub mod graph;
pub mod linker;
pub mod overlap;
pub mod transfer;

pub use city::City;
pub use country::Country;
pub use direction::Direction;
pub use graph::{reachable_count, CityGraph};
pub use linker::Linker;
pub use transfer::transfer_portions;
