//! Occupancy of every cell, packed into one bit mask per player.

use crate::error::GameError;
use crate::topology::Topology;
use crate::{CellId, Player};

/// Board state: which player (if any) holds each cell.
///
/// Stones are never removed during a game; only [`Board::reset`] clears them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    white: u64,
    black: u64,
    /// One bit per cell of the topology this board was built for.
    valid: u64,
}

impl Board {
    /// Create an empty board with one slot per cell of `topology`.
    pub fn new(topology: &Topology) -> Board {
        Board {
            white: 0,
            black: 0,
            valid: topology.full_mask(),
        }
    }

    /// Clear every cell.
    #[inline]
    pub fn reset(&mut self) {
        self.white = 0;
        self.black = 0;
    }

    #[inline]
    fn check(&self, id: CellId) -> Result<(), GameError> {
        if id.0 < 64 && self.valid & id.bit() != 0 {
            Ok(())
        } else {
            Err(GameError::InvalidCell(id))
        }
    }

    /// Current occupant of a cell.
    pub fn occupant_at(&self, id: CellId) -> Result<Option<Player>, GameError> {
        self.check(id)?;
        Ok(self.occupant_unchecked(id))
    }

    /// Occupant lookup for ids already known to be valid.
    #[inline]
    pub(crate) fn occupant_unchecked(&self, id: CellId) -> Option<Player> {
        let bit = id.bit();
        if self.white & bit != 0 {
            Some(Player::White)
        } else if self.black & bit != 0 {
            Some(Player::Black)
        } else {
            None
        }
    }

    /// Whether `player` has a stone on `id`. False for unknown ids.
    #[inline]
    pub fn is_owned_by(&self, id: CellId, player: Player) -> bool {
        id.0 < 64 && self.stones(player) & id.bit() != 0
    }

    /// Put `player`'s stone on an empty cell.
    pub fn place(&mut self, id: CellId, player: Player) -> Result<(), GameError> {
        if self.occupant_at(id)?.is_some() {
            return Err(GameError::IllegalMove(id));
        }
        match player {
            Player::White => self.white |= id.bit(),
            Player::Black => self.black |= id.bit(),
        }
        Ok(())
    }

    /// Mask of cells held by `player`.
    #[inline]
    pub fn stones(&self, player: Player) -> u64 {
        match player {
            Player::White => self.white,
            Player::Black => self.black,
        }
    }

    /// Mask of occupied cells.
    #[inline]
    pub fn occupied(&self) -> u64 {
        self.white | self.black
    }

    /// Total stones on the board.
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.occupied().count_ones()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied() == self.valid
    }

    /// Iterate over empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellId> {
        let mut free = self.valid & !self.occupied();
        std::iter::from_fn(move || {
            if free == 0 {
                return None;
            }
            let idx = free.trailing_zeros();
            free &= free - 1;
            Some(CellId(idx as u8))
        })
    }

    /// Multi-line text view laid out like the hexagon, for logs and terminals.
    pub fn render(&self, topology: &Topology) -> String {
        let mut out = String::new();
        let rows = topology.rows();
        for (r, row) in topology.layout().iter().enumerate() {
            // Cells are 4 chars wide; each row sits half a cell right of the one above.
            let leading = row.iter().take_while(|slot| slot.is_none()).count();
            let indent = (leading * 4 + r * 2).saturating_sub(rows.saturating_sub(1));
            out.push_str(&" ".repeat(indent));
            let cells: Vec<String> = row
                .iter()
                .flatten()
                .map(|&id| match self.occupant_unchecked(id) {
                    Some(player) => player.symbol().to_string(),
                    None => ".".to_string(),
                })
                .collect();
            out.push_str(cells.join("   ").trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::CELL_COUNT;

    fn board() -> Board {
        Board::new(Topology::standard())
    }

    #[test]
    fn test_board_new_is_empty() {
        let b = board();
        for id in Topology::standard().cells() {
            assert_eq!(b.occupant_at(id), Ok(None));
        }
        assert_eq!(b.stone_count(), 0);
        assert_eq!(b.empty_cells().count(), CELL_COUNT);
    }

    #[test]
    fn test_place_and_read_back() {
        let mut b = board();
        b.place(CellId(30), Player::White).unwrap();
        b.place(CellId(60), Player::Black).unwrap();
        assert_eq!(b.occupant_at(CellId(30)), Ok(Some(Player::White)));
        assert_eq!(b.occupant_at(CellId(60)), Ok(Some(Player::Black)));
        assert_eq!(b.occupant_at(CellId(0)), Ok(None));
        assert!(b.is_owned_by(CellId(30), Player::White));
        assert!(!b.is_owned_by(CellId(30), Player::Black));
        assert_eq!(b.stone_count(), 2);
    }

    #[test]
    fn test_place_occupied_is_illegal() {
        let mut b = board();
        b.place(CellId(12), Player::White).unwrap();
        let before = b;
        assert_eq!(b.place(CellId(12), Player::Black), Err(GameError::IllegalMove(CellId(12))));
        assert_eq!(b.place(CellId(12), Player::White), Err(GameError::IllegalMove(CellId(12))));
        assert_eq!(b, before);
    }

    #[test]
    fn test_invalid_cell() {
        let mut b = board();
        assert_eq!(b.occupant_at(CellId(61)), Err(GameError::InvalidCell(CellId(61))));
        assert_eq!(b.occupant_at(CellId(200)), Err(GameError::InvalidCell(CellId(200))));
        assert_eq!(b.place(CellId(64), Player::White), Err(GameError::InvalidCell(CellId(64))));
        assert_eq!(b.stone_count(), 0);
        assert!(!b.is_owned_by(CellId(250), Player::White));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut b = board();
        for id in [0u8, 17, 30, 44, 60] {
            b.place(CellId(id), Player::Black).unwrap();
        }
        b.reset();
        assert_eq!(b, board());
    }

    #[test]
    fn test_full_board() {
        let mut b = board();
        let ids: Vec<CellId> = b.empty_cells().collect();
        for (i, id) in ids.into_iter().enumerate() {
            let player = if i % 2 == 0 { Player::White } else { Player::Black };
            b.place(id, player).unwrap();
        }
        assert!(b.is_full());
        assert_eq!(b.empty_cells().count(), 0);
        assert_eq!(b.stones(Player::White) & b.stones(Player::Black), 0);
    }

    #[test]
    fn test_empty_cells_skips_occupied() {
        let mut b = board();
        b.place(CellId(0), Player::White).unwrap();
        b.place(CellId(2), Player::Black).unwrap();
        let first: Vec<u8> = b.empty_cells().take(3).map(|c| c.0).collect();
        assert_eq!(first, vec![1, 3, 4]);
    }

    #[test]
    fn test_render_shape() {
        let mut b = board();
        b.place(CellId(30), Player::White).unwrap();
        let text = b.render(Topology::standard());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0].trim(), ".   .   .   .   .");
        assert_eq!(lines[4].trim(), ".   .   .   .   W   .   .   .   .");
    }
}
