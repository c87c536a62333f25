/// A candidate or applied placement: put `value` at (`row`, `col`).
///
/// Values are 1..=N; 0 marks an empty cell on the board and never
/// appears inside a `Move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub row: u8,
    pub col: u8,
    pub value: u8,
}

impl Move {
    pub fn new(row: u8, col: u8, value: u8) -> Self {
        Self { row, col, value }
    }
}

/// Identifies one of the two competing sides in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideId {
    A,
    B,
}

impl SideId {
    pub fn other(self) -> SideId {
        match self {
            SideId::A => SideId::B,
            SideId::B => SideId::A,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            SideId::A => 0,
            SideId::B => 1,
        }
    }
}

/// Final adjudication of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    SideA,
    SideB,
    Tie,
}

// Helpers

/// Top-left corner of the √N×√N block containing (row, col).
pub fn block_origin(row: usize, col: usize, block: usize) -> (usize, usize) {
    ((row / block) * block, (col / block) * block)
}
