//! Core types for the eurodiff coin diffusion simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: strongly-typed
//! IDs, country rectangles and descriptors, domain constants and error
//! types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod descriptor;
pub mod error;
pub mod id;
pub mod rect;

pub use constants::{
    GRID_MAX, GRID_MIN, INITIAL_COINS, MAX_COUNTRIES, MAX_NAME_LEN, NEIGHBOUR_SLOTS,
    PORTION_DIVISOR,
};
pub use descriptor::CountryDescriptor;
pub use error::{CityError, CountryError, LinkError, StepError};
pub use id::{CityId, CountryId, Day};
pub use rect::Rect;
