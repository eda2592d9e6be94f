use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HistoryOutcome {
    NoChange,
    Changed,
}

impl HistoryOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Every board played so far and the one currently displayed.
///
/// Index 0 is always the empty board and `current` always points inside `snapshots`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct GameHistory {
    snapshots: Vec<Snapshot>,
    current: usize,
}

#[derive(Deserialize)]
struct HistoryRecord {
    snapshots: Vec<Snapshot>,
    current: usize,
}

/// Whether `next` is `prev` with exactly one empty cell filled by `player`.
fn is_single_move(prev: &Snapshot, next: &Snapshot, player: Player) -> bool {
    let mut filled = 0;
    for (before, after) in prev.iter().zip(next.iter()) {
        match (before, after) {
            (before, after) if before == after => {}
            (None, Some(mark)) if mark == player => filled += 1,
            _ => return false,
        }
    }
    filled == 1
}

impl TryFrom<HistoryRecord> for GameHistory {
    type Error = GameError;

    fn try_from(HistoryRecord { snapshots, current }: HistoryRecord) -> Result<Self> {
        if snapshots.first() != Some(&Snapshot::empty()) {
            return Err(GameError::InvalidHistory);
        }
        if !snapshots
            .windows(2)
            .enumerate()
            .all(|(index, pair)| is_single_move(&pair[0], &pair[1], Player::for_move(index)))
        {
            return Err(GameError::InvalidHistory);
        }
        if current >= snapshots.len() {
            return Err(GameError::MoveOutOfRange);
        }
        Ok(Self { snapshots, current })
    }
}

impl GameHistory {
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::empty()],
            current: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.current]
    }

    pub fn next_player(&self) -> Player {
        Player::for_move(self.current)
    }

    pub fn winner(&self) -> Option<Player> {
        rules::winner(self.current())
    }

    pub fn status(&self) -> Status {
        Status::for_board(self.current(), self.next_player())
    }

    /// Records `next` as the move following the current snapshot.
    ///
    /// Any snapshots after the current one are dropped first.
    pub fn play(&mut self, next: Snapshot) -> HistoryOutcome {
        let discarded = self.snapshots.len() - (self.current + 1);
        if discarded > 0 {
            log::debug!("dropping {} future snapshot(s)", discarded);
        }
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;
        HistoryOutcome::Changed
    }

    /// Places the current mover's mark at `position` and records the result.
    pub fn play_at(&mut self, position: Position) -> Result<HistoryOutcome> {
        let next = rules::apply_move(self.current(), position, self.next_player())?;
        Ok(self.play(next))
    }

    pub fn jump_to(&mut self, index: usize) -> Result<HistoryOutcome> {
        if index >= self.snapshots.len() {
            return Err(GameError::MoveOutOfRange);
        }
        if index == self.current {
            return Ok(HistoryOutcome::NoChange);
        }
        self.current = index;
        Ok(HistoryOutcome::Changed)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
