use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;
use thiserror::Error;

use crate::board::Board;
use crate::location::Location;
use crate::symbol::Symbol;
use crate::tunnel;

/// Reasons a board fails validation.
///
/// Validation is all-or-nothing: the first failure aborts the build and no partial
/// board is ever handed out.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum BoardError {
    /// The input had no lines, or every line was empty.
    #[error("board has no cells")]
    EmptyBoard,
    /// A character outside the legal symbol set.
    #[error("illegal character {0:?} in board")]
    IllegalCharacter(char),
    /// A second `@` was found at the given location.
    #[error("second entry position at {0}")]
    DuplicateEntry(Location),
    /// A second `x` was found at the given location.
    #[error("second exit position at {0}")]
    DuplicateExit(Location),
    /// The board contains no `@`.
    #[error("entry position not found")]
    EntryNotFound,
    /// The board contains no `x`.
    #[error("exit position not found")]
    ExitNotFound,
}

/// Accumulates raw text rows and turns them into a [`Board`].
#[derive(Default)]
pub struct BoardBuilder {
    lines: Vec<String>,
}

impl BoardBuilder {
    /// A builder with no rows yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder holding every line of `lines`, in order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { lines: lines.into_iter().map_into().collect_vec() }
    }

    /// Append one row of the board.
    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Validate the accumulated rows and produce a [`Board`].
    pub fn build(&self) -> Result<Board, BoardError> {
        let width = self.lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let height = self.lines.len();
        let (Some(dim_w), Some(dim_h)) = (NonZero::new(width), NonZero::new(height)) else {
            return Err(BoardError::EmptyBoard);
        };

        let mut entry = None;
        let mut exit = None;
        let mut cells = Vec::with_capacity(width * height);

        for (y, line) in self.lines.iter().enumerate() {
            // short rows are padded on the right so neighbor lookups stay rectangular
            for (x, ch) in line.chars().pad_using(width, |_| ' ').enumerate() {
                let symbol = Symbol::try_from(ch).map_err(BoardError::IllegalCharacter)?;
                let location = Location(x, y);

                match symbol {
                    Symbol::Entry => match entry {
                        Some(_) => return Err(BoardError::DuplicateEntry(location)),
                        None => entry = Some(location),
                    },
                    Symbol::Exit => match exit {
                        Some(_) => return Err(BoardError::DuplicateExit(location)),
                        None => exit = Some(location),
                    },
                    _ => {}
                }

                cells.push(symbol);
            }
        }

        let entry = entry.ok_or(BoardError::EntryNotFound)?;
        let exit = exit.ok_or(BoardError::ExitNotFound)?;

        // padding above guarantees exactly width * height symbols
        let cells = Array2::from_shape_vec((height, width), cells).unwrap();
        let tunnels = tunnel::tunnel_mask(&cells);

        Ok(Board { cells, dims: (dim_w, dim_h), entry, exit, tunnels })
    }
}
