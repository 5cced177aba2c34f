//! Fixed parameters of the diffusion model.
//!
//! None of these are configurable: the transfer rule and the initial
//! stock define the puzzle, and the bounds come from its input format.

/// Coins of its own motif placed in every city of a country on day 0.
pub const INITIAL_COINS: i64 = 1_000_000;

/// A city sends `coins / PORTION_DIVISOR` of each motif to each neighbour per day.
pub const PORTION_DIVISOR: i64 = 1000;

/// Largest number of countries accepted in a single case.
pub const MAX_COUNTRIES: usize = 20;

/// Longest accepted country name, in characters.
pub const MAX_NAME_LEN: usize = 25;

/// Smallest valid grid coordinate on either axis.
pub const GRID_MIN: i32 = 0;

/// Largest valid grid coordinate on either axis.
pub const GRID_MAX: i32 = 10;

/// Neighbour slots per city (west, east, north, south).
pub const NEIGHBOUR_SLOTS: usize = 4;
