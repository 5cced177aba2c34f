//! Pairwise overlap check for country rectangles.
//!
//! Two rectangles overlap when they share at least one grid square.
//! Squares are closed: a country spanning x = 1..=3 and one spanning
//! x = 4..=6 are adjacent, not overlapping.

use eurodiff_core::{CountryId, Rect};

use crate::country::Country;

/// Whether `value` lies in the closed interval `[min, max]`.
fn between(value: i32, min: i32, max: i32) -> bool {
    value >= min && value <= max
}

/// Whether two closed spans `[a_lo, a_hi]` and `[b_lo, b_hi]` intersect.
///
/// Tested both ways round so that one span fully containing the other
/// is caught as well as spans that cross.
fn spans_overlap(a_lo: i32, a_hi: i32, b_lo: i32, b_hi: i32) -> bool {
    between(a_lo, b_lo, b_hi) || between(b_lo, a_lo, a_hi)
}

/// Whether two rectangles share at least one square.
///
/// # Examples
///
/// ```
/// use eurodiff_core::Rect;
/// use eurodiff_space::overlap::rects_overlap;
///
/// let a = Rect::from_corners(1, 1, 3, 3).unwrap();
/// let touching = Rect::from_corners(4, 1, 6, 3).unwrap();
/// let sharing = Rect::from_corners(3, 3, 5, 5).unwrap();
/// assert!(!rects_overlap(&a, &touching));
/// assert!(rects_overlap(&a, &sharing));
/// ```
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    spans_overlap(a.x, a.x_max(), b.x, b.x_max()) && spans_overlap(a.y, a.y_max(), b.y, b.y_max())
}

/// The first pair of countries (in input order) whose rectangles overlap.
pub fn find_overlap(countries: &[Country]) -> Option<(CountryId, CountryId)> {
    for (i, a) in countries.iter().enumerate() {
        for b in &countries[i + 1..] {
            if rects_overlap(&a.rect(), &b.rect()) {
                return Some((a.id(), b.id()));
            }
        }
    }
    None
}

/// `true` if no two countries overlap.
pub fn validate(countries: &[Country]) -> bool {
    find_overlap(countries).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eurodiff_core::CountryDescriptor;
    use proptest::prelude::*;

    fn rect(xl: i32, yl: i32, xh: i32, yh: i32) -> Rect {
        Rect::from_corners(xl, yl, xh, yh).unwrap()
    }

    fn countries(rects: &[(i32, i32, i32, i32)]) -> Vec<Country> {
        rects
            .iter()
            .enumerate()
            .map(|(i, &(xl, yl, xh, yh))| {
                Country::new(
                    CountryId(i as u32),
                    &CountryDescriptor::new(format!("C{i}"), xl, yl, xh, yh),
                    rects.len(),
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn shared_single_square_overlaps() {
        assert!(rects_overlap(&rect(0, 0, 2, 2), &rect(2, 2, 4, 4)));
    }

    #[test]
    fn adjacent_on_x_does_not_overlap() {
        assert!(!rects_overlap(&rect(0, 0, 3, 3), &rect(4, 0, 6, 3)));
    }

    #[test]
    fn adjacent_on_y_does_not_overlap() {
        assert!(!rects_overlap(&rect(1, 1, 2, 2), &rect(1, 3, 2, 4)));
    }

    #[test]
    fn containment_overlaps_both_ways() {
        let outer = rect(0, 0, 9, 9);
        let inner = rect(3, 3, 4, 4);
        assert!(rects_overlap(&outer, &inner));
        assert!(rects_overlap(&inner, &outer));
    }

    #[test]
    fn crossing_bars_overlap() {
        // A horizontal bar through a vertical one: no corner inside the other.
        let h = rect(0, 4, 9, 4);
        let v = rect(4, 0, 4, 9);
        assert!(rects_overlap(&h, &v));
    }

    #[test]
    fn overlap_on_one_axis_only() {
        assert!(!rects_overlap(&rect(0, 0, 5, 1), &rect(2, 3, 3, 5)));
    }

    #[test]
    fn classic_map_is_valid() {
        let map = countries(&[(1, 4, 4, 6), (3, 1, 6, 3), (1, 1, 2, 2)]);
        assert!(validate(&map));
        assert_eq!(find_overlap(&map), None);
    }

    #[test]
    fn reports_first_overlapping_pair() {
        let map = countries(&[(0, 0, 1, 1), (5, 5, 6, 6), (6, 6, 7, 7), (1, 1, 2, 2)]);
        assert!(!validate(&map));
        assert_eq!(find_overlap(&map), Some((CountryId(0), CountryId(3))));
    }

    #[test]
    fn single_country_is_valid() {
        assert!(validate(&countries(&[(0, 0, 10, 10)])));
        assert!(validate(&[]));
    }

    proptest! {
        #[test]
        fn matches_square_intersection(
            ax in 0i32..=10, ay in 0i32..=10, aw in 0i32..4, ah in 0i32..4,
            bx in 0i32..=10, by in 0i32..=10, bw in 0i32..4, bh in 0i32..4,
        ) {
            let a = rect(ax, ay, (ax + aw).min(10), (ay + ah).min(10));
            let b = rect(bx, by, (bx + bw).min(10), (by + bh).min(10));
            let shared = a.coords().any(|(x, y)| b.contains(x, y));
            prop_assert_eq!(rects_overlap(&a, &b), shared);
            prop_assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a));
        }
    }
}
