//! The transfer half of a simulated day.

use eurodiff_core::{CityId, CountryId, StepError};
use smallvec::SmallVec;

use crate::country::Country;

/// Send the staged portions of city `from` to each of its neighbours.
///
/// For every motif and every linked neighbour, `portions[motif]` is
/// deducted from `from` and credited to the neighbour. The full staged
/// portion goes to *each* neighbour, so a city with `k` neighbours loses
/// `k * portion` of that motif. Credits go through the neighbour
/// country's setter, so completion bookkeeping runs as coins arrive.
///
/// Returns the countries whose completion was triggered by this call.
///
/// All cities must have had [`prepare_portions`](crate::City::prepare_portions)
/// called for the current day before any city transfers.
///
/// # Errors
///
/// [`StepError::UnknownCity`] if `from` or a neighbour link does not
/// resolve, [`StepError::Transfer`] if a write is rejected.
pub fn transfer_portions(
    countries: &mut [Country],
    from: CityId,
) -> Result<SmallVec<[CountryId; 4]>, StepError> {
    let (portions, neighbours) = {
        let city = countries
            .get(from.country.index())
            .and_then(|c| c.city(from.index as usize))
            .ok_or(StepError::UnknownCity { city: from })?;
        let portions: SmallVec<[i64; 20]> = city.portions().iter().copied().collect();
        (portions, *city.neighbours())
    };
    for neighbour in neighbours.iter().flatten() {
        let exists = countries
            .get(neighbour.country.index())
            .and_then(|c| c.city(neighbour.index as usize))
            .is_some();
        if !exists {
            return Err(StepError::UnknownCity { city: *neighbour });
        }
    }

    let mut completed = SmallVec::new();
    for (motif, &portion) in portions.iter().enumerate() {
        if portion == 0 {
            continue;
        }
        for &to in neighbours.iter().flatten() {
            debit(countries, from, motif, portion)?;
            if credit(countries, to, motif, portion)? {
                completed.push(to.country);
            }
        }
    }
    Ok(completed)
}

fn debit(
    countries: &mut [Country],
    city: CityId,
    motif: usize,
    amount: i64,
) -> Result<(), StepError> {
    // A debit only lowers a count, so it can never complete anything.
    adjust(countries, city, motif, -amount).map(|_| ())
}

fn credit(
    countries: &mut [Country],
    city: CityId,
    motif: usize,
    amount: i64,
) -> Result<bool, StepError> {
    adjust(countries, city, motif, amount)
}

fn adjust(
    countries: &mut [Country],
    city: CityId,
    motif: usize,
    delta: i64,
) -> Result<bool, StepError> {
    let transfer_err = |source| StepError::Transfer { city, source };
    let country = countries
        .get_mut(city.country.index())
        .ok_or(StepError::UnknownCity { city })?;
    let index = city.index as usize;
    let held = country
        .city(index)
        .ok_or(StepError::UnknownCity { city })?
        .get(motif)
        .map_err(transfer_err)?;
    country
        .set_coins(index, motif, held + delta)
        .map_err(transfer_err)
}
