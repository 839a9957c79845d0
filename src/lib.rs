#![warn(missing_docs)]

//! # `wordmaze`
//!
//! A solver for word mazes: ASCII grids whose corridors are drawn with `-`, `|` and `+`,
//! sprinkled with uppercase letters. A path starts at the unique `@` cell, ends at the
//! unique `x` cell, and must pass over letter cells spelling a caller-supplied target
//! word, in order, along the way.
//!
//! Load a board with [`Board::parse`] (or feed a [`BoardBuilder`] row by row), then run
//! a [`Solver`] against it with a target word. The solver reports an [`Outcome`]: the
//! found path, an exhaustive "no path exists", or an aborted budget.
//!
//! # Internals
//! Raw lines are padded into a rectangular cell grid and validated up front; illegal
//! symbols are unrepresentable afterwards. A "tunnel" mask is computed once per board:
//! a tunnel is a cell where one printed corridor visually crosses another (a `-`
//! squeezed between two `|`, the perpendicular case, or a letter sitting on a full
//! four-way crossing), and the search may lay a second path through such a cell on the
//! other axis without treating it as a revisit.
//!
//! The search itself is a depth-first walk over an explicit frame stack with two
//! pruning rules: a cell already on the path is refused (tunnels excepted), and a
//! letter that would not continue the target word is refused. Direction exploration
//! order is fixed, so the first path found for a given board and word is always the
//! same one.

pub use board::Board;
pub use builder::{BoardBuilder, BoardError};
pub use location::Location;
pub use solver::{Outcome, Solution, Solver, Visit, WordError};
pub use symbol::Symbol;

pub(crate) mod board;
mod tests;
pub(crate) mod builder;
pub(crate) mod direction;
pub(crate) mod location;
pub(crate) mod solver;
pub(crate) mod symbol;
pub(crate) mod tunnel;
