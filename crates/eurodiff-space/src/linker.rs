//! Topology builder: maps grid squares to cities and wires neighbours.

use eurodiff_core::{CityId, LinkError};
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

use crate::country::Country;
use crate::direction::Direction;
use crate::graph::{reachable_count, CityGraph};

/// Coordinate-to-city map for one case.
///
/// Built once from every country's rectangle, used to wire neighbour
/// links across borders, then dropped. The map keeps insertion order,
/// so iteration follows the case's country order.
///
/// # Examples
///
/// ```
/// use eurodiff_core::{CountryDescriptor, CountryId};
/// use eurodiff_space::{Country, Direction, Linker};
///
/// let mut countries = vec![
///     Country::new(CountryId(0), &CountryDescriptor::new("Sweden", 0, 0, 1, 0), 2).unwrap(),
///     Country::new(CountryId(1), &CountryDescriptor::new("Switzerland", 0, 1, 1, 1), 2).unwrap(),
/// ];
/// let linker = Linker::new(&countries).unwrap();
/// linker.link_all(&mut countries);
/// assert!(linker.is_fully_connected(&countries));
///
/// // (0,0) in Sweden borders (0,1) in Switzerland.
/// let north = countries[0].city_at(0, 0).unwrap().neighbour(Direction::North);
/// assert_eq!(north, Some(countries[1].city_id_at(0, 1).unwrap()));
/// ```
#[derive(Clone, Debug)]
pub struct Linker {
    plane: IndexMap<(i32, i32), CityId>,
}

impl Linker {
    /// Index every city of every country by its absolute coordinate.
    ///
    /// # Errors
    ///
    /// [`LinkError::DuplicateCoordinate`] if two countries claim a square.
    /// Overlap should have been rejected before linking; the map never
    /// silently overwrites.
    pub fn new(countries: &[Country]) -> Result<Self, LinkError> {
        let mut plane = IndexMap::with_capacity(countries.city_count());
        for country in countries {
            for ((x, y), id) in country.coords().zip(country.city_ids()) {
                match plane.entry((x, y)) {
                    Entry::Vacant(slot) => {
                        slot.insert(id);
                    }
                    Entry::Occupied(slot) => {
                        return Err(LinkError::DuplicateCoordinate {
                            x,
                            y,
                            first: slot.get().country,
                            second: country.id(),
                        });
                    }
                }
            }
        }
        Ok(Self { plane })
    }

    /// Number of mapped squares.
    pub fn len(&self) -> usize {
        self.plane.len()
    }

    /// Whether no squares are mapped.
    pub fn is_empty(&self) -> bool {
        self.plane.is_empty()
    }

    /// The city at absolute `(x, y)`, if any country covers it.
    pub fn get(&self, x: i32, y: i32) -> Option<CityId> {
        self.plane.get(&(x, y)).copied()
    }

    /// Wire every city's four neighbour slots.
    ///
    /// A slot is set to the city one step away in that direction, or
    /// `None` where no country covers the square. Call once, after
    /// seeding and before the first simulated day; `countries` must be
    /// the slice this linker was built from.
    pub fn link_all(&self, countries: &mut [Country]) {
        let mut links = 0usize;
        for country in countries.iter_mut() {
            let rect = country.rect();
            for ((x, y), city) in rect.coords().zip(country.cities_mut()) {
                for dir in Direction::ALL {
                    let (dx, dy) = dir.offset();
                    let neighbour = self.get(x + dx, y + dy);
                    links += usize::from(neighbour.is_some());
                    city.set_neighbour(dir, neighbour);
                }
            }
        }
        debug!(cities = self.plane.len(), links, "linked cities");
        debug_assert!(
            Self::links_are_symmetric(countries),
            "neighbour links must point both ways"
        );
    }

    /// Whether every link `a -> b` in direction `d` is matched by a link
    /// `b -> a` in the opposite direction.
    pub fn links_are_symmetric(countries: &[Country]) -> bool {
        countries.iter().flat_map(Country::city_ids).all(|from| {
            Direction::ALL.into_iter().all(|dir| {
                let Some(to) = countries.neighbours(from)[dir.slot()] else {
                    return true;
                };
                countries.neighbours(to)[dir.opposite().slot()] == Some(from)
            })
        })
    }

    /// Whether every city is reachable from the first city of the first
    /// country.
    ///
    /// An empty case is trivially connected. Must be called after
    /// [`link_all`](Linker::link_all).
    pub fn is_fully_connected(&self, countries: &[Country]) -> bool {
        let Some(first) = countries.first() else {
            return true;
        };
        let start = first.city_ids().next();
        let total = countries.city_count();
        let reached = start.map_or(0, |start| reachable_count(countries, start));
        debug!(reached, total, "connectivity check");
        reached == total
    }
}
