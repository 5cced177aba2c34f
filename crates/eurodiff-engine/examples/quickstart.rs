//! Eurodiff quickstart: a case driven day by day.
//!
//! Demonstrates:
//!   1. Building countries from descriptors
//!   2. Rejecting overlap, seeding, and linking
//!   3. Stepping a Diffuser and watching countries complete
//!
//! Run with:
//!   cargo run --example quickstart

use eurodiff_core::{CountryDescriptor, INITIAL_COINS};
use eurodiff_engine::{build_countries, CaseError, Diffuser};
use eurodiff_space::{overlap, Linker};

// ─── The map ────────────────────────────────────────────────────

fn map() -> Vec<CountryDescriptor> {
    vec![
        CountryDescriptor::new("France", 1, 4, 4, 6),
        CountryDescriptor::new("Spain", 3, 1, 6, 3),
        CountryDescriptor::new("Portugal", 1, 1, 2, 2),
    ]
}

fn main() -> Result<(), CaseError> {
    let descriptors = map();
    let mut countries = build_countries(&descriptors)?;
    assert!(overlap::validate(&countries), "countries must not overlap");

    for (motif, country) in countries.iter_mut().enumerate() {
        let _ = country.seed(motif, INITIAL_COINS)?;
    }
    let linker = Linker::new(&countries)?;
    linker.link_all(&mut countries);
    println!(
        "{} countries, {} cities, connected: {}",
        countries.len(),
        linker.len(),
        linker.is_fully_connected(&countries)
    );

    // ─── Simulate ───────────────────────────────────────────────

    let mut diffuser = Diffuser::new(countries);
    let mut reported = 0;
    while !diffuser.is_done() {
        diffuser.step()?;
        let records = diffuser.records();
        for record in &records[reported..] {
            println!("day {:>5}: {} complete", record.day, record.name);
        }
        reported = records.len();
    }

    // ─── Where the French coins ended up ────────────────────────

    let spain = &diffuser.countries()[1];
    let french_in_spain: i64 = spain.cities().iter().map(|c| c.coins()[0]).sum();
    println!(
        "after {} days Spain holds {} French coins",
        diffuser.day(),
        french_in_spain
    );
    Ok(())
}
