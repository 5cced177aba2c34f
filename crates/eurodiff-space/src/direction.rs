//! The four cardinal neighbour directions.

/// A neighbour direction on the grid.
///
/// The declaration order fixes each direction's neighbour slot in
/// [`City::neighbours`](crate::City::neighbours): west = 0, east = 1,
/// north = 2, south = 3. North is increasing `y`.
///
/// # Examples
///
/// ```
/// use eurodiff_space::Direction;
///
/// assert_eq!(Direction::West.offset(), (-1, 0));
/// assert_eq!(Direction::North.slot(), 2);
/// assert_eq!(Direction::ALL.len(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards decreasing `x`.
    West,
    /// Towards increasing `x`.
    East,
    /// Towards increasing `y`.
    North,
    /// Towards decreasing `y`.
    South,
}

impl Direction {
    /// All directions in slot order.
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// `(dx, dy)` step to the neighbouring square.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::North => (0, 1),
            Direction::South => (0, -1),
        }
    }

    /// Neighbour slot index.
    pub fn slot(self) -> usize {
        self as usize
    }

    /// The direction pointing back.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_declaration_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.slot(), i);
        }
    }

    #[test]
    fn opposite_offsets_cancel() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
