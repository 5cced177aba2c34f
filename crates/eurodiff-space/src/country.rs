//! Countries: named rectangular blocks of cities.

use eurodiff_core::{
    CityError, CityId, CountryDescriptor, CountryError, CountryId, Rect, MAX_NAME_LEN,
};

use crate::city::City;

/// A named rectangle of cities sharing a completion status.
///
/// Cities are stored densely in column-major order (see [`Rect`]), so
/// a city's index inside the country is stable and doubles as the
/// `index` half of its [`CityId`].
///
/// The country becomes complete exactly once, when its last city
/// completes. It does not check that it is disjoint from other
/// countries; that is the job of [`overlap`](crate::overlap).
#[derive(Clone, Debug)]
pub struct Country {
    id: CountryId,
    name: String,
    rect: Rect,
    cities: Vec<City>,
    completed_cities: usize,
}

impl Country {
    /// Build a country from a descriptor.
    ///
    /// `motif_count` is the number of countries in the case; every city
    /// tracks that many motifs.
    ///
    /// # Errors
    ///
    /// - [`CountryError::EmptyName`] / [`CountryError::NameTooLong`] for a
    ///   name outside `1..=MAX_NAME_LEN` characters.
    /// - [`CountryError::InvalidRect`] for corners outside the grid or
    ///   inverted corners.
    ///
    /// # Examples
    ///
    /// ```
    /// use eurodiff_core::{CountryDescriptor, CountryId};
    /// use eurodiff_space::Country;
    ///
    /// let desc = CountryDescriptor::new("Portugal", 1, 1, 2, 2);
    /// let portugal = Country::new(CountryId(0), &desc, 3).unwrap();
    /// assert_eq!(portugal.city_count(), 4);
    /// assert_eq!(portugal.city_at(2, 1).unwrap().motif_count(), 3);
    /// assert!(portugal.city_at(3, 1).is_err());
    /// ```
    pub fn new(
        id: CountryId,
        descriptor: &CountryDescriptor,
        motif_count: usize,
    ) -> Result<Self, CountryError> {
        let name = descriptor.name.as_str();
        let len = name.chars().count();
        if len == 0 {
            return Err(CountryError::EmptyName);
        }
        if len > MAX_NAME_LEN {
            return Err(CountryError::NameTooLong {
                name: name.to_string(),
                len,
                max: MAX_NAME_LEN,
            });
        }
        let rect = Rect::from_corners(descriptor.xl, descriptor.yl, descriptor.xh, descriptor.yh)?;
        let cities = (0..rect.area()).map(|_| City::new(motif_count)).collect();

        Ok(Self {
            id,
            name: name.to_string(),
            rect,
            cities,
            completed_cities: 0,
        })
    }

    /// This country's ID (also the motif it mints).
    pub fn id(&self) -> CountryId {
        self.id
    }

    /// Country name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Covered rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Number of cities (`width * height`).
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// All cities in index order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Mutable cities in index order, for pairing with [`coords`](Country::coords).
    ///
    /// Crate-private: coin writes must go through the country so that
    /// city completions are counted.
    pub(crate) fn cities_mut(&mut self) -> &mut [City] {
        &mut self.cities
    }

    /// City by dense index.
    pub fn city(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }

    #[cfg(test)]
    pub(crate) fn city_mut(&mut self, index: usize) -> Option<&mut City> {
        self.cities.get_mut(index)
    }

    /// Dense index of the city at absolute `(x, y)`.
    pub fn index_of(&self, x: i32, y: i32) -> Result<usize, CountryError> {
        self.rect
            .index_of(x, y)
            .ok_or(CountryError::CoordOutOfRange {
                x,
                y,
                rect: self.rect,
            })
    }

    /// The city at absolute `(x, y)`.
    pub fn city_at(&self, x: i32, y: i32) -> Result<&City, CountryError> {
        let index = self.index_of(x, y)?;
        Ok(&self.cities[index])
    }

    /// The [`CityId`] of the city at absolute `(x, y)`.
    pub fn city_id_at(&self, x: i32, y: i32) -> Result<CityId, CountryError> {
        let index = self.index_of(x, y)?;
        Ok(CityId::new(self.id, index as u32))
    }

    /// Every absolute coordinate of the country, in city index order.
    pub fn coords(&self) -> impl Iterator<Item = (i32, i32)> {
        self.rect.coords()
    }

    /// Every city ID of the country, in index order.
    pub fn city_ids(&self) -> impl Iterator<Item = CityId> {
        let id = self.id;
        (0..self.cities.len() as u32).map(move |index| CityId::new(id, index))
    }

    /// Stage outbound portions in every city of the country.
    pub fn prepare_portions(&mut self) {
        for city in &mut self.cities {
            city.prepare_portions();
        }
    }

    /// Number of cities that have completed.
    pub fn completed_cities(&self) -> usize {
        self.completed_cities
    }

    /// Whether every city has completed.
    pub fn is_complete(&self) -> bool {
        !self.cities.is_empty() && self.completed_cities == self.cities.len()
    }

    /// Put `amount` coins of `motif` in every city.
    ///
    /// Returns `Ok(true)` if these writes completed the country.
    #[must_use = "the return value signals country completion"]
    pub fn seed(&mut self, motif: usize, amount: i64) -> Result<bool, CityError> {
        let mut completed = false;
        for index in 0..self.cities.len() {
            completed |= self.set_coins(index, motif, amount)?;
        }
        Ok(completed)
    }

    /// Write a city's coin count and forward its completion signal.
    ///
    /// Returns `Ok(true)` if this write completed the whole country.
    /// `index` must be a valid city index.
    pub(crate) fn set_coins(
        &mut self,
        index: usize,
        motif: usize,
        value: i64,
    ) -> Result<bool, CityError> {
        let city_completed = self.cities[index].set(motif, value)?;
        Ok(city_completed && self.record_city_completion())
    }

    /// Count one more completed city. Returns `true` on the call that
    /// completes the last city and never again.
    fn record_city_completion(&mut self) -> bool {
        if self.completed_cities == self.cities.len() {
            return false;
        }
        self.completed_cities += 1;
        self.completed_cities == self.cities.len()
    }
}
