#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::VariantArray;

    use crate::board::Board;
    use crate::builder::{BoardBuilder, BoardError};
    use crate::direction::Direction;
    use crate::location::Location;
    use crate::solver::{Outcome, Solution, Solver, WordError};
    use crate::symbol::Symbol;

    fn board1() -> Board {
        Board::parse(
            "@---A---+
        |
x-B-+   C
    |   |
    +---+",
        )
        .unwrap()
    }

    fn board2() -> Board {
        Board::parse(
            "@
| C----+
A |    |
+---B--+
  |
  |
  +---D--+
         |
         x",
        )
        .unwrap()
    }

    fn board3() -> Board {
        Board::parse(
            "@---+B
  A--|-----K
  |  |     |
  |  E--+  |
  |     |  |
  C xE--E--+
  |     |
  +--F--+",
        )
        .unwrap()
    }

    fn solve(board: &Board, word: &str) -> Solution {
        match board.solve(word).unwrap() {
            Outcome::Solved(solution) => solution,
            other => panic!("expected a solution, got {:?}", other),
        }
    }

    #[test]
    fn display_round_trips_a_rectangular_board() {
        let board = board1();
        assert_eq!(format!("{}", board), "@---A---+
        |
x-B-+   C
    |   |
    +---+
");
    }

    #[test]
    fn ragged_rows_are_padded_to_the_longest() {
        let board = board2();

        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 9);
        // the first row was a single "@"; padding appended blanks on the right
        assert_eq!(board.symbol_at(Location(0, 0)), Some(Symbol::Entry));
        assert_eq!(board.symbol_at(Location(5, 0)), Some(Symbol::Blank));
        assert_eq!(board.symbol_at(Location(9, 0)), Some(Symbol::Blank));

        for line in format!("{}", board).lines() {
            assert_eq!(line.chars().count(), board.width());
        }
    }

    #[test]
    fn builder_accepts_rows_one_at_a_time() {
        let board = BoardBuilder::new()
            .push_line("@-A")
            .push_line("  |")
            .push_line("x-+")
            .build()
            .unwrap();

        assert_eq!(board.entry(), Location(0, 0));
        assert_eq!(board.exit(), Location(0, 2));

        let solution = solve(&board, "A");
        assert_eq!(solution.path, "@-A|+-x");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(Board::parse("").unwrap_err(), BoardError::EmptyBoard);
        assert_eq!(Board::parse("\n\n").unwrap_err(), BoardError::EmptyBoard);
    }

    #[test]
    fn illegal_characters_are_cited() {
        assert_eq!(Board::parse("@-*-x").unwrap_err(), BoardError::IllegalCharacter('*'));
        assert_eq!(Board::parse("@-a-x").unwrap_err(), BoardError::IllegalCharacter('a'));
    }

    #[test]
    fn duplicate_markers_are_rejected() {
        assert_eq!(
            Board::parse("@-@-x").unwrap_err(),
            BoardError::DuplicateEntry(Location(2, 0))
        );
        assert_eq!(
            Board::parse("@-x-x").unwrap_err(),
            BoardError::DuplicateExit(Location(4, 0))
        );
    }

    #[test]
    fn missing_markers_are_rejected() {
        assert_eq!(Board::parse("--x").unwrap_err(), BoardError::EntryNotFound);
        assert_eq!(Board::parse("@--").unwrap_err(), BoardError::ExitNotFound);
        assert_eq!(Board::parse("@--").unwrap_err().to_string(), "exit position not found");
    }

    #[test]
    fn horizontal_segment_between_vertical_segments_is_a_tunnel() {
        let board = Board::parse(
            "@  |  x
 --|--
   |",
        )
        .unwrap();

        assert!(board.is_tunnel(Location(3, 1)));
        // the upright above it is flanked by blanks, not dashes
        assert!(!board.is_tunnel(Location(3, 0)));
        assert!(!board.is_tunnel(Location(2, 1)));
    }

    #[test]
    fn flipping_one_flank_removes_the_tunnel() {
        let board = Board::parse(
            "@  |  x
 --|
   |",
        )
        .unwrap();

        assert!(!board.is_tunnel(Location(3, 1)));
    }

    #[test]
    fn letter_on_a_four_way_crossing_is_a_tunnel() {
        let crossed = Board::parse(
            "@ | x
 -A-
  |",
        )
        .unwrap();
        assert!(crossed.is_tunnel(Location(2, 1)));

        // vertical flank alone is not enough for a letter
        let uncrossed = Board::parse(
            "@ | x
  A
  |",
        )
        .unwrap();
        assert!(!uncrossed.is_tunnel(Location(2, 1)));
    }

    #[test]
    fn junctions_and_markers_are_never_tunnels() {
        let board = Board::parse(
            "@ | x
 -+-
  |",
        )
        .unwrap();

        assert!(!board.is_tunnel(Location(2, 1)));
        assert!(!board.is_tunnel(Location(0, 0)));
    }

    #[test]
    fn solves_board1() {
        let solution = solve(&board1(), "ACB");

        assert_eq!(solution.word, "ACB");
        assert_eq!(solution.path, "@---A---+|C|+---+|+-B-x");
    }

    #[test]
    fn solves_board2_through_a_tunnel() {
        let board = board2();
        // the descent from C crosses the corridor below A through a tunnel
        assert!(board.is_tunnel(Location(2, 3)));

        let solution = solve(&board, "ABCD");
        assert_eq!(solution.word, "ABCD");
        assert_eq!(solution.path, "@|A+---B--+|+----C|-||+---D--+|x");
    }

    #[test]
    fn solves_board3_crossing_a_letter_twice() {
        let board = board3();
        assert!(board.is_tunnel(Location(5, 1)));
        assert!(board.is_tunnel(Location(8, 5)));

        let solution = solve(&board, "BEEFCAKE");
        assert_eq!(solution.word, "BEEFCAKE");
        assert_eq!(solution.path, "@---+B||E--+|E|+--F--+|C|||A--|-----K|||+--E--Ex");
        // the E on the four-way crossing shows up twice in the trace
        let crossings = solution.trace.iter().filter(|loc| **loc == Location(8, 5)).count();
        assert_eq!(crossings, 2);
    }

    #[test]
    fn collected_letters_match_first_visits_along_the_path() {
        let solution = solve(&board3(), "BEEFCAKE");

        let mut seen = HashSet::new();
        let mut collected = String::new();
        for (ch, location) in solution.path.chars().zip(solution.trace.iter()) {
            if ch.is_ascii_uppercase() && seen.insert(*location) {
                collected.push(ch);
            }
        }

        assert_eq!(collected, solution.word);
    }

    #[test]
    fn paths_run_entry_to_exit() {
        for (board, word) in [(board1(), "ACB"), (board2(), "ABCD"), (board3(), "BEEFCAKE")] {
            let solution = solve(&board, word);

            assert!(solution.path.starts_with('@'));
            assert!(solution.path.ends_with('x'));
            assert_eq!(solution.trace.first(), Some(&board.entry()));
            assert_eq!(solution.trace.last(), Some(&board.exit()));
            assert_eq!(solution.path.len(), solution.trace.len());
        }
    }

    #[test]
    fn identical_inputs_yield_identical_paths() {
        let first = solve(&board3(), "BEEFCAKE");
        let second = solve(&board3(), "BEEFCAKE");

        assert_eq!(first.path, second.path);
        assert_eq!(first.trace, second.trace);
    }

    #[test]
    fn rerunning_one_solver_resets_its_state() {
        let board = board3();
        let mut solver = Solver::new(&board, "BEEFCAKE").unwrap();

        // tunnel marks persist within a run; a second run must start clean
        let first = solver.run();
        let second = solver.run();
        assert_eq!(first, second);
        assert!(matches!(first, Outcome::Solved(_)));
    }

    #[test]
    fn a_letter_absent_from_the_board_finds_nothing() {
        assert_eq!(board1().solve("AZB").unwrap(), Outcome::NoSolution);
    }

    #[test]
    fn a_word_shorter_than_the_maze_spells_finds_nothing() {
        // every route to the exit passes B, so "AC" can never arrive exact
        assert_eq!(board1().solve("AC").unwrap(), Outcome::NoSolution);
    }

    #[test]
    fn reaching_the_exit_early_is_not_success() {
        // the A behind the exit is unreachable; arriving at x with "" dead-ends
        let board = Board::parse("@-x-A").unwrap();
        assert_eq!(board.solve("A").unwrap(), Outcome::NoSolution);
    }

    #[test]
    fn a_trivial_straight_line_solves() {
        let board = Board::parse("@-A-x").unwrap();
        let solution = solve(&board, "A");
        assert_eq!(solution.path, "@-A-x");
    }

    #[test]
    fn invalid_words_are_rejected_before_searching() {
        let board = board1();

        assert_eq!(Solver::new(&board, "").unwrap_err(), WordError::Empty);
        assert_eq!(Solver::new(&board, "AbC").unwrap_err(), WordError::NotALetter('b'));
        assert_eq!(board.solve("A B").unwrap_err(), WordError::NotALetter(' '));
    }

    #[test]
    fn the_observer_sees_every_considered_cell_and_changes_nothing() {
        let board = board1();

        let mut visited_locations = Vec::new();
        let mut solver = Solver::new(&board, "ACB").unwrap();
        let observed = solver.run_observed(|visit| visited_locations.push(visit.location));

        assert_eq!(visited_locations.first(), Some(&board.entry()));
        assert_eq!(visited_locations.len() as u64, solver.nodes_visited());
        // more cells are considered than end up on the path
        assert!(visited_locations.len() >= "@---A---+|C|+---+|+-B-x".len());

        let mut silent = Solver::new(&board, "ACB").unwrap();
        assert_eq!(observed, silent.run());
    }

    #[test]
    fn an_exhausted_budget_aborts_the_search() {
        let board = board1();

        let mut strangled = Solver::new(&board, "ACB").unwrap().with_budget(1);
        assert_eq!(strangled.run(), Outcome::BudgetExhausted);
        assert_eq!(strangled.nodes_visited(), 1);

        let mut immediate = Solver::new(&board, "ACB").unwrap().with_budget(0);
        assert_eq!(immediate.run(), Outcome::BudgetExhausted);
        assert_eq!(immediate.nodes_visited(), 0);

        let mut roomy = Solver::new(&board, "ACB").unwrap().with_budget(100_000);
        assert!(matches!(roomy.run(), Outcome::Solved(_)));
    }

    #[test]
    fn boards_and_solvers_format_for_diagnostics() {
        let board = board1();
        let solver = Solver::new(&board, "ACB").unwrap();

        // unwrap_err on Result<Board, _> and Result<Solver, _> needs these Debug impls
        assert!(format!("{:?}", board).contains("entry"));
        assert!(format!("{:?}", solver).contains("target"));
    }

    #[test]
    fn every_direction_steps_exactly_one_cell() {
        let origin = Location(1, 1);
        let neighbors: HashSet<Location> = Direction::VARIANTS
            .iter()
            .map(|direction| direction.attempt_from(origin))
            .collect();

        assert_eq!(neighbors.len(), 4);
        for neighbor in neighbors {
            let dx = neighbor.0.abs_diff(origin.0);
            let dy = neighbor.1.abs_diff(origin.1);
            assert_eq!(dx + dy, 1);
        }
    }
}
