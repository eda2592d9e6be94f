use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

const SIDE: usize = BOARD_SIDE as usize;

/// One immutable state of the 3x3 board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Mark>", into = "Vec<Mark>")]
pub struct Snapshot {
    cells: Array2<Mark>,
}

impl Snapshot {
    pub fn empty() -> Self {
        Self {
            cells: Array2::default((SIDE, SIDE)),
        }
    }

    /// Builds a snapshot from 9 marks listed row-major.
    pub fn from_marks(marks: &[Mark]) -> Result<Self> {
        if marks.len() != usize::from(CELL_COUNT) {
            return Err(GameError::InvalidBoardShape);
        }
        let cells = Array2::from_shape_vec((SIDE, SIDE), marks.to_vec())
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { cells })
    }

    pub fn mark_at(&self, position: Position) -> Mark {
        self.cells[position.to_nd_index()]
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.mark_at(position).is_some()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|mark| mark.is_some()).count()
    }

    /// Returns a copy of this snapshot with `player` placed at `position`.
    pub fn with_mark(&self, position: Position, player: Player) -> Self {
        let mut cells = self.cells.clone();
        cells[position.to_nd_index()] = Some(player);
        Self { cells }
    }

    /// Marks in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Mark> + '_ {
        self.cells.iter().copied()
    }

    /// The three rows, top to bottom, each yielding its cells left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = (Position, Mark)> + '_> + '_ {
        self.cells.rows().into_iter().enumerate().map(|(row, cells)| {
            cells.into_iter().enumerate().map(move |(column, &mark)| {
                let index = (row * SIDE + column) as u8;
                (Position::new_unchecked(index), mark)
            })
        })
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<Mark>> for Snapshot {
    type Error = GameError;

    fn try_from(marks: Vec<Mark>) -> Result<Self> {
        Self::from_marks(&marks)
    }
}

impl From<Snapshot> for Vec<Mark> {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.iter().collect()
    }
}

impl Index<Position> for Snapshot {
    type Output = Mark;

    fn index(&self, position: Position) -> &Self::Output {
        &self.cells[position.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(index: u8) -> Position {
        Position::new(index).unwrap()
    }

    #[test]
    fn with_mark_leaves_original_untouched() {
        let empty = Snapshot::empty();
        let next = empty.with_mark(pos(4), Player::X);

        assert_eq!(empty.occupied_count(), 0);
        assert_eq!(next.occupied_count(), 1);
        assert_eq!(next[pos(4)], Some(Player::X));
        assert!(!empty.is_occupied(pos(4)));
    }

    #[test]
    fn from_marks_is_row_major() {
        let mut marks = [None; 9];
        marks[5] = Some(Player::O);
        let snapshot = Snapshot::from_marks(&marks).unwrap();

        assert_eq!(snapshot.mark_at(pos(5)), Some(Player::O));
        assert_eq!(snapshot.iter().collect::<Vec<_>>(), marks.to_vec());
        assert_eq!(
            Snapshot::from_marks(&[None; 8]),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn rows_visit_positions_in_order() {
        let snapshot = Snapshot::empty().with_mark(pos(7), Player::X);
        let rows: Vec<Vec<(Position, Mark)>> = snapshot.rows().map(|row| row.collect()).collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0].0, pos(0));
        assert_eq!(rows[1][2].0, pos(5));
        assert_eq!(rows[2][1], (pos(7), Some(Player::X)));
    }

    #[test]
    fn serializes_as_flat_row_major_list() {
        let snapshot = Snapshot::empty().with_mark(pos(1), Player::O);
        let json = serde_json::to_string(&snapshot).unwrap();

        assert_eq!(json, r#"[null,"O",null,null,null,null,null,null,null]"#);
        assert_eq!(serde_json::from_str::<Snapshot>(&json).unwrap(), snapshot);
    }

    #[test]
    fn deserializing_wrong_cell_count_fails() {
        assert!(serde_json::from_str::<Snapshot>("[]").is_err());
        assert!(serde_json::from_str::<Snapshot>(r#"[null,null,null,null,null,null,null,null,null,"X"]"#).is_err());
    }
}
