use super::{Board, CastlingRights, Color, Square};

/// Everything `undo` needs to put a position back exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pub(crate) board: Board,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
}

/// Stack of snapshots, one per applied move.
#[derive(Clone, Debug, Default)]
pub(crate) struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub(crate) fn new() -> Self {
        History {
            snapshots: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub(crate) fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshots.len()
    }
}
