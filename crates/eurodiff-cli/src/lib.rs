//! Text front end for the eurodiff coin diffusion simulator.
//!
//! [`run_cases`] reads cases in the classic text format, simulates each
//! one and writes `Case Number k` blocks to the output. Cases that cannot
//! be simulated (overlapping or disconnected countries, day cap reached)
//! are logged and skipped; their case number is still consumed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod input;
pub mod output;

use std::io::{self, BufRead, Write};

use eurodiff_engine::{run_case, CaseConfig, CaseError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::input::{CaseReader, ParseError};

/// Errors that end a run early.
///
/// Output for cases before the failing one has already been written.
#[derive(Debug, Error)]
pub enum RunError {
    /// The input could not be read as cases.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A case holds a country that cannot be built.
    #[error("case {case}: {source}")]
    Case {
        /// One-based case number.
        case: usize,
        /// The rejection.
        #[source]
        source: CaseError,
    },
    /// Writing results failed.
    #[error("failed to write results")]
    Output(#[from] io::Error),
}

/// Counts from a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cases read.
    pub cases: usize,
    /// Cases simulated and written.
    pub completed: usize,
    /// Cases rejected and skipped.
    pub skipped: usize,
}

/// Run every case in `input`, writing results to `out`.
///
/// # Errors
///
/// [`RunError::Parse`] on malformed input, [`RunError::Case`] for a
/// country that cannot be built or an invalid `config`, and
/// [`RunError::Output`] if writing fails.
pub fn run_cases<R: BufRead, W: Write>(
    input: R,
    config: &CaseConfig,
    out: &mut W,
) -> Result<RunSummary, RunError> {
    let mut summary = RunSummary::default();
    for case in CaseReader::new(input) {
        let descriptors = case?;
        summary.cases += 1;
        let number = summary.cases;
        debug!(case = number, countries = descriptors.len(), "running case");

        match run_case(&descriptors, config) {
            Ok(records) => {
                output::write_case(out, number, &records)?;
                summary.completed += 1;
            }
            Err(source @ (CaseError::Country { .. } | CaseError::Config(_))) => {
                return Err(RunError::Case {
                    case: number,
                    source,
                });
            }
            Err(err) => {
                warn!(case = number, error = %err, "case skipped");
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}
