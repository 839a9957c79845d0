use ndarray::Array2;
use thiserror::Error;

use crate::board::Board;
use crate::direction::Direction;
use crate::location::Location;
use crate::symbol::Symbol;

/// Reasons a target word is rejected before any search begins.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum WordError {
    /// The word has no characters.
    #[error("target word is empty")]
    Empty,
    /// The word contains something other than an uppercase letter.
    #[error("target word contains {0:?}, expected uppercase letters only")]
    NotALetter(char),
}

/// A found path through a board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    /// The letters collected along the path, in visitation order; equals the target.
    pub word: String,
    /// Every symbol traversed, in traversal order, entry through exit.
    pub path: String,
    /// The location of each traversed cell, parallel to `path`. A tunnel crossed
    /// twice appears twice.
    pub trace: Vec<Location>,
}

/// How a search run ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// A path spelling the target word was found.
    Solved(Solution),
    /// The whole reachable search space was explored without success. This is a
    /// normal result, not an error.
    NoSolution,
    /// The node budget ran out before the search could finish, so nothing is known
    /// about whether a solution exists.
    BudgetExhausted,
}

impl Outcome {
    /// The contained [`Solution`], if any.
    pub fn solution(self) -> Option<Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

/// A snapshot handed to the observer each time the search considers a cell, before
/// that cell is validated.
#[derive(Clone, Copy, Debug)]
pub struct Visit<'a> {
    /// The cell under consideration.
    pub location: Location,
    /// Letters collected so far on the active branch.
    pub current_word: &'a str,
    /// Symbols traversed so far on the active branch.
    pub path_word: &'a str,
}

// a search frame: one entered cell and the bookkeeping to unwind it
struct Frame {
    location: Location,
    exits: &'static [Direction],
    next_exit: usize,
    word_len: usize,
    path_len: usize,
}

enum Probe {
    Entered(Frame),
    Solved,
    Dead,
    Spent,
}

/// A depth-first search for a path that spells a target word on one [`Board`].
///
/// The solver owns its visited mask, so several solvers may exist for the same board;
/// one solver runs one search at a time (`run` takes `&mut self`), and every run
/// starts from a clean mask.
#[derive(Debug)]
pub struct Solver<'a> {
    board: &'a Board,
    target: Vec<char>,
    visited: Array2<bool>,
    budget: Option<u64>,
    nodes: u64,
    word: String,
    path: String,
    trace: Vec<Location>,
}

impl<'a> Solver<'a> {
    /// A solver for `board` hunting `word`.
    ///
    /// The word must be a non-empty sequence of uppercase letters; anything else is
    /// rejected here, before any search runs.
    pub fn new(board: &'a Board, word: &str) -> Result<Self, WordError> {
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(bad) = word.chars().find(|ch| !ch.is_ascii_uppercase()) {
            return Err(WordError::NotALetter(bad));
        }

        Ok(Self {
            board,
            target: word.chars().collect(),
            visited: Array2::from_elem(board.cells.raw_dim(), false),
            budget: None,
            nodes: 0,
            word: String::new(),
            path: String::new(),
            trace: Vec::new(),
        })
    }

    /// Abort any run after considering `max_nodes` cells, reporting
    /// [`Outcome::BudgetExhausted`] instead of searching further.
    pub fn with_budget(mut self, max_nodes: u64) -> Self {
        self.budget = Some(max_nodes);
        self
    }

    /// How many cells the most recent run considered.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Run the search to completion without an observer.
    pub fn run(&mut self) -> Outcome {
        self.run_observed(|_| {})
    }

    /// Run the search, invoking `on_visit` synchronously for every cell the search
    /// considers, including cells that are then rejected.
    ///
    /// The observer is purely informational and cannot influence the outcome.
    pub fn run_observed<F>(&mut self, mut on_visit: F) -> Outcome
    where
        F: FnMut(Visit<'_>),
    {
        self.visited.fill(false);
        self.word.clear();
        self.path.clear();
        self.trace.clear();
        self.nodes = 0;

        let mut stack: Vec<Frame> = Vec::new();

        match self.probe(self.board.entry, &Direction::CLOCKWISE, &mut on_visit) {
            Probe::Entered(frame) => stack.push(frame),
            Probe::Solved => return self.solution(),
            Probe::Dead => return Outcome::NoSolution,
            Probe::Spent => return Outcome::BudgetExhausted,
        }

        loop {
            let Some(frame) = stack.last_mut() else {
                // every branch from the entry is spent
                return Outcome::NoSolution;
            };

            if frame.next_exit >= frame.exits.len() {
                let (location, word_len, path_len) =
                    (frame.location, frame.word_len, frame.path_len);
                stack.pop();
                self.word.truncate(word_len);
                self.path.truncate(path_len);
                self.trace.truncate(path_len);
                // tunnel marks persist so a crossing branch may still pass through
                if !self.board.is_tunnel(location) {
                    self.visited[location.as_index()] = false;
                }
                continue;
            }

            let direction = frame.exits[frame.next_exit];
            frame.next_exit += 1;
            let candidate = direction.attempt_from(frame.location);
            let inherited = frame.exits;

            match self.probe(candidate, inherited, &mut on_visit) {
                Probe::Entered(entered) => stack.push(entered),
                Probe::Solved => return self.solution(),
                Probe::Dead => {}
                Probe::Spent => return Outcome::BudgetExhausted,
            }
        }
    }

    /// Try to enter `candidate`. `inherited` is the exploration order of the cell we
    /// are stepping from; a tunnel entered a second time keeps it, so the crossing
    /// branch continues straight through on its own axis instead of turning onto the
    /// tunnel's.
    fn probe<F>(
        &mut self,
        candidate: Location,
        inherited: &'static [Direction],
        on_visit: &mut F,
    ) -> Probe
    where
        F: FnMut(Visit<'_>),
    {
        if self.budget.is_some_and(|limit| self.nodes >= limit) {
            return Probe::Spent;
        }
        self.nodes += 1;

        on_visit(Visit {
            location: candidate,
            current_word: &self.word,
            path_word: &self.path,
        });

        // the collected word is always a prefix of the target, so a length match means
        // the word is complete; completing it anywhere but the exit is not success
        if candidate == self.board.exit && self.word.len() == self.target.len() {
            self.path.push(Symbol::Exit.as_char());
            self.trace.push(candidate);
            self.visited[candidate.as_index()] = true;
            return Probe::Solved;
        }

        let Some(symbol) = self.board.symbol_at(candidate) else {
            return Probe::Dead;
        };
        if !symbol.is_traversable() {
            return Probe::Dead;
        }

        let revisit = self.visited[candidate.as_index()];
        if revisit && !self.board.is_tunnel(candidate) {
            return Probe::Dead;
        }

        if let Symbol::Letter(letter) = symbol {
            // a letter cell already on the path was consumed the first time around
            if !revisit && self.target.get(self.word.len()) != Some(&letter) {
                return Probe::Dead;
            }
        }

        let exits = if revisit { inherited } else { exploration_order(symbol) };

        let frame = Frame {
            location: candidate,
            exits,
            next_exit: 0,
            word_len: self.word.len(),
            path_len: self.path.len(),
        };

        self.path.push(symbol.as_char());
        if let Symbol::Letter(letter) = symbol {
            if !revisit {
                self.word.push(letter);
            }
        }
        self.trace.push(candidate);
        self.visited[candidate.as_index()] = true;

        Probe::Entered(frame)
    }

    fn solution(&self) -> Outcome {
        Outcome::Solved(Solution {
            word: self.word.clone(),
            path: self.path.clone(),
            trace: self.trace.clone(),
        })
    }
}

/// The fixed neighbor exploration order for each symbol. Changing any of these
/// changes which first-found path a search returns.
fn exploration_order(symbol: Symbol) -> &'static [Direction] {
    match symbol {
        Symbol::Horizontal => &Direction::HORIZONTAL,
        Symbol::Vertical => &Direction::VERTICAL,
        Symbol::Entry | Symbol::Junction | Symbol::Letter(_) => &Direction::CLOCKWISE,
        // the exit only ever ends a path; arriving early dead-ends here
        Symbol::Exit => &[],
        // blanks never pass validation; this arm only completes the match
        Symbol::Blank => &[],
    }
}
