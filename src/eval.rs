//! Line counting and win/lose classification after a placement.
//!
//! A placement is judged only by the lines through the stone just played:
//! for each [`Axis`] the run length is `forward + backward + 1`. A length of
//! four or more wins, exactly three loses, anything shorter is neutral.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::Board;
use crate::config::Precedence;
use crate::topology::{Axis, Direction, Topology};
use crate::{CellId, Player};

/// Run length at which the mover wins.
pub const WIN_LENGTH: u32 = 4;
/// Run length at which the mover loses.
pub const LOSE_LENGTH: u32 = 3;

/// Outcome of one placement for the player who made it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Game continues.
    None,
    Win,
    Lose,
}

impl Verdict {
    /// Classify a single axis by its run length.
    #[inline]
    pub fn classify(length: u32) -> Verdict {
        if length >= WIN_LENGTH {
            Verdict::Win
        } else if length == LOSE_LENGTH {
            Verdict::Lose
        } else {
            Verdict::None
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Verdict::None
    }
}

/// Full result of judging a placement.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Evaluation {
    pub verdict: Verdict,
    /// Axis that produced the verdict, `None` when the game continues.
    pub axis: Option<Axis>,
    /// Cells of the deciding run in order along the axis; empty when the game continues.
    pub line: Vec<CellId>,
}

/// Stones of `player` met walking from `id` (exclusive) in `direction`.
///
/// The walk stops at the first gap, board edge, empty cell or opposing stone.
/// Unknown ids have no neighbours and count 0.
pub fn count_run(
    topology: &Topology,
    board: &Board,
    id: CellId,
    player: Player,
    direction: Direction,
) -> u32 {
    topology
        .ray(id, direction)
        .take_while(|&cell| board.is_owned_by(cell, player))
        .count() as u32
}

/// Length of the line through `id` along `axis`, counting `id` itself.
pub fn axis_length(
    topology: &Topology,
    board: &Board,
    id: CellId,
    player: Player,
    axis: Axis,
) -> u32 {
    let (a, b) = axis.directions();
    count_run(topology, board, id, player, a) + count_run(topology, board, id, player, b) + 1
}

/// Verdict for `player` having just played `id`, with Win taking precedence.
pub fn evaluate(topology: &Topology, board: &Board, id: CellId, player: Player) -> Verdict {
    evaluate_with(topology, board, id, player, Precedence::default())
}

/// Verdict for `player` having just played `id` under the given precedence.
pub fn evaluate_with(
    topology: &Topology,
    board: &Board,
    id: CellId,
    player: Player,
    precedence: Precedence,
) -> Verdict {
    decide(topology, board, id, player, precedence)
        .map(|(verdict, _)| verdict)
        .unwrap_or(Verdict::None)
}

/// Verdict plus the axis and cells that produced it.
pub fn assess(
    topology: &Topology,
    board: &Board,
    id: CellId,
    player: Player,
    precedence: Precedence,
) -> Evaluation {
    match decide(topology, board, id, player, precedence) {
        Some((verdict, axis)) => Evaluation {
            verdict,
            axis: Some(axis),
            line: line_cells(topology, board, id, player, axis),
        },
        None => Evaluation {
            verdict: Verdict::None,
            axis: None,
            line: Vec::new(),
        },
    }
}

/// The run through `id` along `axis`, ordered from the first direction's end
/// to the second's.
pub fn line_cells(
    topology: &Topology,
    board: &Board,
    id: CellId,
    player: Player,
    axis: Axis,
) -> Vec<CellId> {
    let (back, forward) = axis.directions();
    let n_back = count_run(topology, board, id, player, back) as usize;
    let n_forward = count_run(topology, board, id, player, forward) as usize;

    let mut cells: Vec<CellId> = topology.ray(id, back).take(n_back).collect();
    cells.reverse();
    cells.push(id);
    cells.extend(topology.ray(id, forward).take(n_forward));
    cells
}

fn decide(
    topology: &Topology,
    board: &Board,
    id: CellId,
    player: Player,
    precedence: Precedence,
) -> Option<(Verdict, Axis)> {
    let lengths = Axis::ALL.map(|axis| (axis, axis_length(topology, board, id, player, axis)));
    trace!(cell = id.0, ?player, ?lengths, "axis lengths");

    let order = match precedence {
        Precedence::WinFirst => [Verdict::Win, Verdict::Lose],
        Precedence::LoseFirst => [Verdict::Lose, Verdict::Win],
    };
    order.into_iter().find_map(|wanted| {
        lengths
            .iter()
            .find(|&&(_, len)| Verdict::classify(len) == wanted)
            .map(|&(axis, _)| (wanted, axis))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topo() -> &'static Topology {
        Topology::standard()
    }

    fn board_with(stones: &[(u8, Player)]) -> Board {
        let mut board = Board::new(topo());
        for &(id, player) in stones {
            board.place(CellId(id), player).unwrap();
        }
        board
    }

    fn white(ids: &[u8]) -> Board {
        let stones: Vec<(u8, Player)> = ids.iter().map(|&id| (id, Player::White)).collect();
        board_with(&stones)
    }

    #[test]
    fn test_classify() {
        assert_eq!(Verdict::classify(1), Verdict::None);
        assert_eq!(Verdict::classify(2), Verdict::None);
        assert_eq!(Verdict::classify(3), Verdict::Lose);
        assert_eq!(Verdict::classify(4), Verdict::Win);
        assert_eq!(Verdict::classify(5), Verdict::Win);
        assert_eq!(Verdict::classify(9), Verdict::Win);
    }

    #[test]
    fn test_is_terminal() {
        assert!(!Verdict::None.is_terminal());
        assert!(Verdict::Win.is_terminal());
        assert!(Verdict::Lose.is_terminal());
    }

    #[test]
    fn test_unknown_cell_has_no_run() {
        let board = white(&[28, 29, 30]);
        for dir in Direction::ALL {
            assert_eq!(count_run(topo(), &board, CellId(99), Player::White, dir), 0);
        }
        assert_eq!(axis_length(topo(), &board, CellId(61), Player::White, Axis::Row), 1);
        assert_eq!(evaluate(topo(), &board, CellId(200), Player::White), Verdict::None);
    }

    #[test]
    fn test_count_run_empty_board() {
        let board = Board::new(topo());
        for id in topo().cells() {
            for dir in Direction::ALL {
                for player in [Player::White, Player::Black] {
                    assert_eq!(count_run(topo(), &board, id, player, dir), 0);
                }
            }
        }
    }

    #[test]
    fn test_count_run_stops_at_opponent() {
        let board = board_with(&[
            (29, Player::White),
            (28, Player::Black),
            (27, Player::White),
        ]);
        assert_eq!(count_run(topo(), &board, CellId(30), Player::White, Direction::UpperLeft), 1);
        assert_eq!(count_run(topo(), &board, CellId(30), Player::Black, Direction::UpperLeft), 0);
    }

    #[test]
    fn test_count_run_stops_at_edge() {
        let board = white(&[26, 27, 28]);
        assert_eq!(count_run(topo(), &board, CellId(29), Player::White, Direction::UpperLeft), 3);
        assert_eq!(count_run(topo(), &board, CellId(26), Player::White, Direction::UpperLeft), 0);
    }

    #[test]
    fn test_single_stone_is_neutral() {
        let board = white(&[30]);
        assert_eq!(evaluate(topo(), &board, CellId(30), Player::White), Verdict::None);
    }

    #[test]
    fn test_two_in_a_row_is_neutral() {
        let board = white(&[29, 30]);
        assert_eq!(evaluate(topo(), &board, CellId(30), Player::White), Verdict::None);
    }

    #[test]
    fn test_three_in_a_row_loses() {
        let board = white(&[28, 29, 30]);
        assert_eq!(evaluate(topo(), &board, CellId(30), Player::White), Verdict::Lose);
        // Filling the middle closes the same line.
        assert_eq!(evaluate(topo(), &board, CellId(29), Player::White), Verdict::Lose);
    }

    #[test]
    fn test_blocked_three_loses() {
        let board = board_with(&[
            (27, Player::Black),
            (28, Player::White),
            (29, Player::White),
            (30, Player::White),
            (31, Player::Black),
        ]);
        assert_eq!(evaluate(topo(), &board, CellId(29), Player::White), Verdict::Lose);
    }

    #[test]
    fn test_three_against_edge_loses() {
        // (0,4) (0,5) (0,6): the row starts at the board edge.
        let board = white(&[0, 1, 2]);
        assert_eq!(evaluate(topo(), &board, CellId(0), Player::White), Verdict::Lose);
    }

    #[test]
    fn test_three_on_each_axis() {
        // Vertical through 30: 21, 30, 39.
        let board = white(&[21, 30, 39]);
        assert_eq!(evaluate(topo(), &board, CellId(39), Player::White), Verdict::Lose);
        // Diagonal through 30: 22, 30, 38.
        let board = white(&[22, 30, 38]);
        assert_eq!(evaluate(topo(), &board, CellId(22), Player::White), Verdict::Lose);
    }

    #[test]
    fn test_four_in_a_row_wins() {
        let board = white(&[28, 29, 30, 31]);
        assert_eq!(evaluate(topo(), &board, CellId(30), Player::White), Verdict::Win);
        assert_eq!(evaluate(topo(), &board, CellId(28), Player::White), Verdict::Win);
    }

    #[test]
    fn test_five_in_a_row_still_wins() {
        let board = white(&[26, 27, 28, 29, 30]);
        for id in 26..=30 {
            assert_eq!(evaluate(topo(), &board, CellId(id), Player::White), Verdict::Win);
        }
    }

    #[test]
    fn test_joining_two_pairs_wins() {
        let board = white(&[28, 29, 30, 31, 32]);
        assert_eq!(axis_length(topo(), &board, CellId(30), Player::White, Axis::Row), 5);
        assert_eq!(evaluate(topo(), &board, CellId(30), Player::White), Verdict::Win);
    }

    #[test]
    fn test_opponent_breaks_line() {
        let board = board_with(&[
            (28, Player::White),
            (29, Player::Black),
            (30, Player::White),
            (31, Player::White),
        ]);
        assert_eq!(evaluate(topo(), &board, CellId(30), Player::White), Verdict::None);
    }

    #[test]
    fn test_consecutive_ids_across_row_break() {
        // 3,4 end row 0 and 5,6 start row 1; they never form one line.
        let board = white(&[3, 4, 5, 6]);
        for id in [3u8, 4, 5, 6] {
            assert_eq!(evaluate(topo(), &board, CellId(id), Player::White), Verdict::None);
        }
    }

    #[test]
    fn test_win_and_lose_on_different_axes() {
        // Row 28-31 is four; vertical 13, 21, 30 is exactly three.
        let board = white(&[28, 29, 31, 13, 21, 30]);
        assert_eq!(axis_length(topo(), &board, CellId(30), Player::White, Axis::Row), 4);
        assert_eq!(axis_length(topo(), &board, CellId(30), Player::White, Axis::Vertical), 3);

        let win = assess(topo(), &board, CellId(30), Player::White, Precedence::WinFirst);
        assert_eq!(win.verdict, Verdict::Win);
        assert_eq!(win.axis, Some(Axis::Row));
        assert_eq!(win.line, vec![CellId(28), CellId(29), CellId(30), CellId(31)]);

        let lose = assess(topo(), &board, CellId(30), Player::White, Precedence::LoseFirst);
        assert_eq!(lose.verdict, Verdict::Lose);
        assert_eq!(lose.axis, Some(Axis::Vertical));
        assert_eq!(lose.line, vec![CellId(13), CellId(21), CellId(30)]);

        assert_eq!(evaluate(topo(), &board, CellId(30), Player::White), Verdict::Win);
    }

    #[test]
    fn test_assess_neutral_has_no_line() {
        let board = white(&[30]);
        let eval = assess(topo(), &board, CellId(30), Player::White, Precedence::WinFirst);
        assert_eq!(eval.verdict, Verdict::None);
        assert_eq!(eval.axis, None);
        assert!(eval.line.is_empty());
    }

    #[test]
    fn test_line_cells_diagonal_order() {
        let board = white(&[22, 30, 38]);
        assert_eq!(
            line_cells(topo(), &board, CellId(30), Player::White, Axis::Diagonal),
            vec![CellId(22), CellId(30), CellId(38)]
        );
    }
}
