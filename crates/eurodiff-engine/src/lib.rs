//! Simulation driver for the eurodiff coin diffusion simulator.
//!
//! [`Diffuser`] advances a linked, seeded map one day at a time and
//! records the day each country completes. [`run_case`] wraps the whole
//! per-case sequence (build, validate, seed, link, check connectivity,
//! simulate) behind a single call configured by [`CaseConfig`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod case;
pub mod config;
pub mod diffuser;

pub use case::{build_countries, run_case, CaseError};
pub use config::{CaseConfig, ConfigError};
pub use diffuser::{CompletionRecord, Diffuser};
