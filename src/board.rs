use std::fmt::{Display, Formatter};

use ndarray::Array2;

use crate::builder::{BoardBuilder, BoardError};
use crate::location::{Dimension, Location};
use crate::solver::{Outcome, Solver, WordError};
use crate::symbol::Symbol;

/// A validated, rectangular word maze.
///
/// [`Board`]s are built by a [`BoardBuilder`], which normalizes ragged input lines and
/// rejects anything outside the legal symbol set; a constructed board always has equal
/// row lengths and exactly one entry and one exit. The tunnel mask is computed once at
/// build time and never changes afterwards.
#[derive(Debug)]
pub struct Board {
    pub(crate) cells: Array2<Symbol>,
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) entry: Location,
    pub(crate) exit: Location,
    pub(crate) tunnels: Array2<bool>,
}

impl Board {
    /// Parse a whole board from text, one row per line.
    ///
    /// Convenience over [`BoardBuilder::from_lines`] followed by
    /// [`build`](BoardBuilder::build).
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        BoardBuilder::from_lines(text.lines()).build()
    }

    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.dims.0.get()
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.dims.1.get()
    }

    /// Where every search starts.
    pub fn entry(&self) -> Location {
        self.entry
    }

    /// Where every search must end.
    pub fn exit(&self) -> Location {
        self.exit
    }

    /// The symbol at `location`, or [`None`] out of bounds.
    pub fn symbol_at(&self, location: Location) -> Option<Symbol> {
        self.cells.get(location.as_index()).copied()
    }

    /// Whether `location` is a tunnel, i.e. a cell an in-progress path may cross a
    /// second time on the perpendicular axis.
    pub fn is_tunnel(&self, location: Location) -> bool {
        self.tunnels.get(location.as_index()).copied().unwrap_or(false)
    }

    /// Search this board for a path spelling `word`, deferring to a [`Solver`].
    ///
    /// Fails only if `word` itself is invalid; an unsolvable board is a normal
    /// [`Outcome::NoSolution`], not an error.
    pub fn solve(&self, word: &str) -> Result<Outcome, WordError> {
        Ok(Solver::new(self, word)?.run())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for row in self.cells.rows() {
            for symbol in row {
                out.push(symbol.as_char());
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
