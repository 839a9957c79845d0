//! Crossing detection.
//!
//! A tunnel models a printed maze where one line of the path passes over another
//! without intersecting logically: a `-` squeezed directly between two `|` (or the
//! perpendicular arrangement), or a letter sitting on a full four-way crossing. The
//! solver lets a second path cross a tunnel on the other axis instead of treating the
//! cell as revisited.

use ndarray::Array2;

use crate::direction::Direction;
use crate::location::Location;
use crate::symbol::Symbol;

/// Compute the tunnel mask for a cell grid. Run once per board; the mask is immutable
/// for the life of every search over it.
pub(crate) fn tunnel_mask(cells: &Array2<Symbol>) -> Array2<bool> {
    Array2::from_shape_fn(cells.raw_dim(), |index| {
        let location = Location::from(index);

        match cells[index] {
            Symbol::Horizontal => flanked_by(cells, location, Direction::VERTICAL, Symbol::Vertical),
            Symbol::Vertical => flanked_by(cells, location, Direction::HORIZONTAL, Symbol::Horizontal),
            Symbol::Letter(_) => {
                flanked_by(cells, location, Direction::VERTICAL, Symbol::Vertical)
                    && flanked_by(cells, location, Direction::HORIZONTAL, Symbol::Horizontal)
            }
            // entry, exit, junctions and blanks never cross anything
            _ => false,
        }
    })
}

fn flanked_by(
    cells: &Array2<Symbol>,
    location: Location,
    axis: [Direction; 2],
    expected: Symbol,
) -> bool {
    axis.iter()
        .all(|direction| cells.get(direction.attempt_from(location).as_index()) == Some(&expected))
}
