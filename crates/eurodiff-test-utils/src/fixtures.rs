//! Canonical cases with known completion days.
//!
//! Each fixture returns descriptors in input order; the matching
//! `*_expected` function returns `(name, day)` pairs in output order.

use eurodiff_core::CountryDescriptor;

fn d(name: &str, xl: i32, yl: i32, xh: i32, yh: i32) -> CountryDescriptor {
    CountryDescriptor::new(name, xl, yl, xh, yh)
}

/// France, Spain and Portugal.
pub fn classic() -> Vec<CountryDescriptor> {
    vec![
        d("France", 1, 4, 4, 6),
        d("Spain", 3, 1, 6, 3),
        d("Portugal", 1, 1, 2, 2),
    ]
}

pub fn classic_expected() -> Vec<(&'static str, u32)> {
    vec![("Spain", 382), ("Portugal", 416), ("France", 1325)]
}

/// A single one-city country.
pub fn luxembourg() -> Vec<CountryDescriptor> {
    vec![d("Luxembourg", 1, 1, 1, 1)]
}

pub fn luxembourg_expected() -> Vec<(&'static str, u32)> {
    vec![("Luxembourg", 0)]
}

/// Netherlands stacked on Belgium.
pub fn benelux() -> Vec<CountryDescriptor> {
    vec![d("Netherlands", 1, 3, 2, 4), d("Belgium", 1, 1, 2, 2)]
}

pub fn benelux_expected() -> Vec<(&'static str, u32)> {
    vec![("Belgium", 2), ("Netherlands", 2)]
}

/// Two 2x1 strips sharing a long border.
pub fn sweden_switzerland() -> Vec<CountryDescriptor> {
    vec![d("Sweden", 0, 0, 1, 0), d("Switzerland", 0, 1, 1, 1)]
}

pub fn sweden_switzerland_expected() -> Vec<(&'static str, u32)> {
    vec![("Sweden", 1), ("Switzerland", 1)]
}

/// Three one-city countries in a row.
pub fn line_of_three() -> Vec<CountryDescriptor> {
    vec![d("A", 0, 0, 0, 0), d("B", 1, 0, 1, 0), d("C", 2, 0, 2, 0)]
}

pub fn line_of_three_expected() -> Vec<(&'static str, u32)> {
    vec![("B", 1), ("A", 2), ("C", 2)]
}

/// The three cases of the sample input, in order.
pub fn sample_input() -> &'static str {
    "3\n\
     France 1 4 4 6\n\
     Spain 3 1 6 3\n\
     Portugal 1 1 2 2\n\
     1\n\
     Luxembourg 1 1 1 1\n\
     2\n\
     Netherlands 1 3 2 4\n\
     Belgium 1 1 2 2\n\
     0\n"
}

/// Expected output for [`sample_input`].
pub fn sample_output() -> &'static str {
    "Case Number 1\n\
     Spain 382\n\
     Portugal 416\n\
     France 1325\n\
     Case Number 2\n\
     Luxembourg 0\n\
     Case Number 3\n\
     Belgium 2\n\
     Netherlands 2\n"
}
