//! A single grid square and its coin holdings.

use eurodiff_core::{CityError, CityId, NEIGHBOUR_SLOTS, PORTION_DIVISOR};

use crate::direction::Direction;

/// One city: per-motif coin counts, the portions staged for today's
/// transfer, and links to up to four neighbouring cities.
///
/// A city is *complete* once it has held a positive count of every
/// motif. Each motif counts towards completion at most once, even if
/// its count later drops back to zero and rises again, and the
/// completion signal from [`set`](City::set) fires exactly once.
#[derive(Clone, Debug)]
pub struct City {
    coins: Vec<i64>,
    portions: Vec<i64>,
    seen: Vec<bool>,
    completed_motifs: usize,
    neighbours: [Option<CityId>; NEIGHBOUR_SLOTS],
}

impl City {
    /// Create an empty, unlinked city tracking `motif_count` motifs.
    ///
    /// With `motif_count == 0` the city can never complete, since no
    /// write can cross a motif from zero to positive.
    pub fn new(motif_count: usize) -> Self {
        Self {
            coins: vec![0; motif_count],
            portions: vec![0; motif_count],
            seen: vec![false; motif_count],
            completed_motifs: 0,
            neighbours: [None; NEIGHBOUR_SLOTS],
        }
    }

    /// Number of motifs tracked.
    pub fn motif_count(&self) -> usize {
        self.coins.len()
    }

    /// Current count of `motif`.
    pub fn get(&self, motif: usize) -> Result<i64, CityError> {
        self.coins
            .get(motif)
            .copied()
            .ok_or(CityError::MotifOutOfRange {
                motif,
                motif_count: self.coins.len(),
            })
    }

    /// Overwrite the count of `motif`.
    ///
    /// Returns `Ok(true)` exactly once in the city's lifetime: on the
    /// write that brings the last missing motif from zero to a positive
    /// count. All other successful writes return `Ok(false)`.
    ///
    /// # Errors
    ///
    /// [`CityError::MotifOutOfRange`] for an unknown motif and
    /// [`CityError::NegativeCoins`] for `value < 0`. The city is left
    /// unchanged on error.
    #[must_use = "the return value signals city completion"]
    pub fn set(&mut self, motif: usize, value: i64) -> Result<bool, CityError> {
        let previous = self.get(motif)?;
        if value < 0 {
            return Err(CityError::NegativeCoins { motif, value });
        }
        self.coins[motif] = value;

        if previous == 0 && value > 0 && !self.seen[motif] {
            self.seen[motif] = true;
            self.completed_motifs += 1;
            return Ok(self.completed_motifs == self.coins.len());
        }
        Ok(false)
    }

    /// All current counts, indexed by motif.
    pub fn coins(&self) -> &[i64] {
        &self.coins
    }

    /// Portions staged by the last [`prepare_portions`](City::prepare_portions).
    pub fn portions(&self) -> &[i64] {
        &self.portions
    }

    /// Stage today's outbound portions: `coins / PORTION_DIVISOR` per motif.
    ///
    /// Must run for every city in the case before any city transfers,
    /// so that every portion is computed from the same morning snapshot.
    pub fn prepare_portions(&mut self) {
        for (portion, &held) in self.portions.iter_mut().zip(&self.coins) {
            *portion = held / PORTION_DIVISOR;
        }
    }

    /// Number of distinct motifs that have reached a positive count.
    pub fn completed_motifs(&self) -> usize {
        self.completed_motifs
    }

    /// Whether every motif has reached a positive count at least once.
    pub fn is_complete(&self) -> bool {
        !self.coins.is_empty() && self.completed_motifs == self.coins.len()
    }

    /// Neighbour slots in [`Direction`] order.
    pub fn neighbours(&self) -> &[Option<CityId>; NEIGHBOUR_SLOTS] {
        &self.neighbours
    }

    /// The neighbour in direction `dir`, if linked.
    pub fn neighbour(&self, dir: Direction) -> Option<CityId> {
        self.neighbours[dir.slot()]
    }

    /// Number of linked neighbours.
    pub fn degree(&self) -> usize {
        self.neighbours.iter().flatten().count()
    }

    pub(crate) fn set_neighbour(&mut self, dir: Direction, neighbour: Option<CityId>) {
        self.neighbours[dir.slot()] = neighbour;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eurodiff_core::CountryId;
    use proptest::prelude::*;

    #[test]
    fn new_city_is_empty() {
        let city = City::new(3);
        assert_eq!(city.coins(), &[0, 0, 0]);
        assert_eq!(city.completed_motifs(), 0);
        assert!(!city.is_complete());
        assert_eq!(city.degree(), 0);
    }

    #[test]
    fn get_out_of_range() {
        let city = City::new(2);
        assert_eq!(
            city.get(2),
            Err(CityError::MotifOutOfRange {
                motif: 2,
                motif_count: 2
            })
        );
    }

    #[test]
    fn set_out_of_range_leaves_city_unchanged() {
        let mut city = City::new(2);
        assert!(city.set(5, 10).is_err());
        assert_eq!(city.coins(), &[0, 0]);
    }

    #[test]
    fn set_negative_rejected() {
        let mut city = City::new(2);
        city.set(0, 40).unwrap();
        assert_eq!(
            city.set(0, -1),
            Err(CityError::NegativeCoins {
                motif: 0,
                value: -1
            })
        );
        assert_eq!(city.get(0), Ok(40));
    }

    #[test]
    fn completion_fires_on_last_motif_only() {
        let mut city = City::new(3);
        assert_eq!(city.set(0, 5), Ok(false));
        assert_eq!(city.set(2, 1), Ok(false));
        assert_eq!(city.completed_motifs(), 2);
        assert_eq!(city.set(1, 7), Ok(true));
        assert!(city.is_complete());
    }

    #[test]
    fn completion_fires_once() {
        let mut city = City::new(1);
        assert_eq!(city.set(0, 1), Ok(true));
        assert_eq!(city.set(0, 0), Ok(false));
        assert_eq!(city.set(0, 9), Ok(false));
        assert_eq!(city.completed_motifs(), 1);
    }

    #[test]
    fn raising_positive_count_does_not_recount() {
        let mut city = City::new(2);
        assert_eq!(city.set(0, 1), Ok(false));
        assert_eq!(city.set(0, 100), Ok(false));
        assert_eq!(city.completed_motifs(), 1);
    }

    #[test]
    fn zero_motif_city_never_completes() {
        let mut city = City::new(0);
        assert!(!city.is_complete());
        assert!(city.set(0, 1).is_err());
    }

    #[test]
    fn portions_floor_divide() {
        let mut city = City::new(3);
        let _ = city.set(0, 1_000_000);
        let _ = city.set(1, 999);
        let _ = city.set(2, 2_500);
        city.prepare_portions();
        assert_eq!(city.portions(), &[1000, 0, 2]);
        // Portions are a snapshot; later writes do not touch them.
        let _ = city.set(0, 0);
        assert_eq!(city.portions()[0], 1000);
    }

    #[test]
    fn neighbour_slots() {
        let mut city = City::new(1);
        let east = CityId::new(CountryId(1), 0);
        city.set_neighbour(Direction::East, Some(east));
        assert_eq!(city.neighbour(Direction::East), Some(east));
        assert_eq!(city.neighbours()[1], Some(east));
        assert_eq!(city.neighbour(Direction::West), None);
        assert_eq!(city.degree(), 1);
    }

    proptest! {
        #[test]
        fn completed_motifs_never_exceeds_motif_count(
            writes in proptest::collection::vec((0usize..4, 0i64..3), 0..64),
        ) {
            let mut city = City::new(4);
            let mut fired = 0;
            for (motif, value) in writes {
                if city.set(motif, value).unwrap() {
                    fired += 1;
                }
                prop_assert!(city.completed_motifs() <= 4);
            }
            prop_assert!(fired <= 1);
            prop_assert_eq!(fired == 1, city.is_complete());
        }
    }
}
