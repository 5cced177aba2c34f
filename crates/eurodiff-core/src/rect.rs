//! Axis-aligned country rectangles.

use crate::constants::{GRID_MAX, GRID_MIN};
use crate::error::CountryError;

/// Axis-aligned integer rectangle covering whole grid squares.
///
/// `(x, y)` is the lower-left square; `width` and `height` are at least 1.
/// Cities inside the rectangle are numbered column-major: x outer,
/// y inner, so the city at `(x, y)` has index
/// `(x - self.x) * height + (y - self.y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Lower-left x.
    pub x: i32,
    /// Lower-left y.
    pub y: i32,
    /// Number of columns.
    pub width: i32,
    /// Number of rows.
    pub height: i32,
}

impl Rect {
    /// Build a rectangle from inclusive lower-left and upper-right corners.
    ///
    /// Returns `Err(CountryError::InvalidRect)` if any coordinate lies
    /// outside `[GRID_MIN, GRID_MAX]` or if a high corner is below its
    /// low corner.
    ///
    /// # Examples
    ///
    /// ```
    /// use eurodiff_core::Rect;
    ///
    /// let r = Rect::from_corners(1, 4, 4, 6).unwrap();
    /// assert_eq!((r.width, r.height), (4, 3));
    /// assert_eq!(r.area(), 12);
    /// assert!(Rect::from_corners(3, 0, 2, 0).is_err());
    /// ```
    pub fn from_corners(xl: i32, yl: i32, xh: i32, yh: i32) -> Result<Self, CountryError> {
        let in_grid = |v: i32| (GRID_MIN..=GRID_MAX).contains(&v);
        if !(in_grid(xl) && in_grid(yl) && in_grid(xh) && in_grid(yh)) || xh < xl || yh < yl {
            return Err(CountryError::InvalidRect { xl, yl, xh, yh });
        }
        Ok(Self {
            x: xl,
            y: yl,
            width: xh - xl + 1,
            height: yh - yl + 1,
        })
    }

    /// Inclusive upper x bound.
    pub fn x_max(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Inclusive upper y bound.
    pub fn y_max(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Number of squares covered.
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x_max() && y >= self.y && y <= self.y_max()
    }

    /// Dense column-major index of `(x, y)`, or `None` outside the rectangle.
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        let dx = (x - self.x) as usize;
        let dy = (y - self.y) as usize;
        Some(dx * self.height as usize + dy)
    }

    /// Every absolute coordinate in the rectangle, in index order.
    pub fn coords(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (self.x_max(), self.y_max());
        (x0..=x1).flat_map(move |x| (y0..=y1).map(move |y| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_square() {
        let r = Rect::from_corners(1, 1, 1, 1).unwrap();
        assert_eq!(r.area(), 1);
        assert_eq!(r.coords().collect::<Vec<_>>(), vec![(1, 1)]);
        assert_eq!(r.index_of(1, 1), Some(0));
    }

    #[test]
    fn grid_bounds_are_inclusive() {
        assert!(Rect::from_corners(0, 0, 10, 10).is_ok());
        assert!(Rect::from_corners(0, 0, 11, 10).is_err());
        assert!(Rect::from_corners(-1, 0, 3, 3).is_err());
        assert!(Rect::from_corners(0, 0, 3, 11).is_err());
    }

    #[test]
    fn inverted_corners_rejected() {
        assert!(matches!(
            Rect::from_corners(4, 1, 2, 3),
            Err(CountryError::InvalidRect { xl: 4, xh: 2, .. })
        ));
        assert!(Rect::from_corners(1, 4, 2, 3).is_err());
    }

    #[test]
    fn coords_are_column_major() {
        let r = Rect::from_corners(2, 5, 3, 6).unwrap();
        let coords: Vec<_> = r.coords().collect();
        assert_eq!(coords, vec![(2, 5), (2, 6), (3, 5), (3, 6)]);
    }

    #[test]
    fn index_of_outside_is_none() {
        let r = Rect::from_corners(2, 2, 4, 4).unwrap();
        assert_eq!(r.index_of(1, 3), None);
        assert_eq!(r.index_of(3, 5), None);
        assert_eq!(r.index_of(4, 4), Some(8));
    }

    proptest! {
        #[test]
        fn index_of_agrees_with_coords_order(
            xl in 0i32..=10, yl in 0i32..=10, w in 0i32..=10, h in 0i32..=10,
        ) {
            let xh = (xl + w).min(10);
            let yh = (yl + h).min(10);
            let r = Rect::from_corners(xl, yl, xh, yh).unwrap();
            let coords: Vec<_> = r.coords().collect();
            prop_assert_eq!(coords.len(), r.area());
            for (i, (x, y)) in coords.into_iter().enumerate() {
                prop_assert_eq!(r.index_of(x, y), Some(i));
            }
        }
    }
}
