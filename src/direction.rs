use strum::VariantArray;

use crate::location::Location;

/// The four axis-aligned steps a path may take between cells.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Exploration order for cells open in all four directions.
    pub(crate) const CLOCKWISE: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];
    /// The horizontal axis, left neighbor first.
    pub(crate) const HORIZONTAL: [Self; 2] = [Self::Left, Self::Right];
    /// The vertical axis, upper neighbor first.
    pub(crate) const VERTICAL: [Self; 2] = [Self::Up, Self::Down];

    /// Step from `location` in the direction specified by `self`.
    ///
    /// Stepping off the top or left edge wraps to a huge coordinate, which any
    /// subsequent grid lookup rejects as out of bounds.
    pub(crate) fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }
}
