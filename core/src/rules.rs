use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Every line that wins the game, checked in this order.
pub const LINES: [[u8; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the player holding all three cells of the first complete line.
pub fn winner(snapshot: &Snapshot) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = snapshot[Position::new_unchecked(a)]?;
        let b = snapshot[Position::new_unchecked(b)];
        let c = snapshot[Position::new_unchecked(c)];
        (b == Some(mark) && c == Some(mark)).then_some(mark)
    })
}

/// Produces the snapshot following `player` marking `position`.
///
/// Occupied cells are rejected before finished games.
pub fn apply_move(snapshot: &Snapshot, position: Position, player: Player) -> Result<Snapshot> {
    if snapshot.is_occupied(position) {
        return Err(GameError::Occupied);
    }
    if winner(snapshot).is_some() {
        return Err(GameError::AlreadyWon);
    }
    Ok(snapshot.with_mark(position, player))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Won(Player),
    NextTurn(Player),
}

impl Status {
    pub fn for_board(snapshot: &Snapshot, next_player: Player) -> Self {
        match winner(snapshot) {
            Some(player) => Self::Won(player),
            None => Self::NextTurn(next_player),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won(player) => write!(f, "{} a gagné", player),
            Self::NextTurn(player) => write!(f, "Prochain tour : {}", player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use Player::*;

    fn board(cells: &str) -> Snapshot {
        let marks: alloc::vec::Vec<Mark> = cells
            .chars()
            .map(|c| match c {
                'X' => Some(X),
                'O' => Some(O),
                _ => None,
            })
            .collect();
        Snapshot::from_marks(&marks).unwrap()
    }

    fn pos(index: u8) -> Position {
        Position::new(index).unwrap()
    }

    #[test]
    fn each_line_wins_on_its_own() {
        for line in LINES {
            for player in [X, O] {
                let mut marks = [None; 9];
                for index in line {
                    marks[usize::from(index)] = Some(player);
                }
                let snapshot = Snapshot::from_marks(&marks).unwrap();
                assert_eq!(winner(&snapshot), Some(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn mixed_or_partial_lines_do_not_win() {
        assert_eq!(winner(&Snapshot::empty()), None);
        assert_eq!(winner(&board("XX.......")), None);
        assert_eq!(winner(&board("XXO......")), None);
        assert_eq!(winner(&board("X...O...X")), None);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        assert_eq!(winner(&board("XOXXOOOXX")), None);
    }

    #[test]
    fn first_line_in_order_wins_ties() {
        // Top row and left column both complete.
        assert_eq!(winner(&board("XXXX..X..")), Some(X));
        // Middle row listed before first column.
        assert_eq!(winner(&board("O..OOOO..")), Some(O));
        assert_eq!(winner(&board("OOOXXX...")), Some(O));
    }

    #[test]
    fn apply_move_rejects_occupied_then_finished() {
        let won = board("XXX.OO...");
        assert_eq!(apply_move(&won, pos(0), O), Err(GameError::Occupied));
        assert_eq!(apply_move(&won, pos(3), O), Err(GameError::AlreadyWon));

        let next = apply_move(&Snapshot::empty(), pos(4), X).unwrap();
        assert_eq!(next.mark_at(pos(4)), Some(X));
        assert_eq!(next.occupied_count(), 1);
    }

    #[test]
    fn status_text() {
        assert_eq!(
            Status::for_board(&Snapshot::empty(), X).to_string(),
            "Prochain tour : X"
        );
        let status = Status::for_board(&board("O..O..O.."), X);
        assert_eq!(status, Status::Won(O));
        assert_eq!(status.to_string(), "O a gagné");
    }
}
