//! Board coordinates.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A position on the board, row and column both in `0..=2`.
///
/// The bounds are guaranteed by construction, so anything holding a
/// `Position` can index the board without checking. Deserialization goes
/// through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: u64,
    col: u64,
}

/// Coordinates that do not name a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Position ({row}, {col}) is off the board")]
pub struct OffBoard {
    /// Requested row.
    pub row: u64,
    /// Requested column.
    pub col: u64,
}

impl TryFrom<RawPosition> for Position {
    type Error = OffBoard;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        let off_board = OffBoard {
            row: raw.row,
            col: raw.col,
        };
        let row = usize::try_from(raw.row).map_err(|_| off_board)?;
        let col = usize::try_from(raw.col).map_err(|_| off_board)?;
        Self::new(row, col).ok_or(off_board)
    }
}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a position, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then(|| Self::at(row as u8, col as u8))
    }

    /// Same as [`Position::new`] for untrusted signed input.
    pub fn try_from_signed(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// Creates position from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row, 0-2.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column, 0-2.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Converts position to a row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_bounds() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(2, 2).is_some());
        assert!(Position::new(3, 0).is_none());
        assert!(Position::new(0, 3).is_none());
    }

    #[test]
    fn test_try_from_signed() {
        assert_eq!(Position::try_from_signed(1, 2), Position::new(1, 2));
        assert!(Position::try_from_signed(-1, 0).is_none());
        assert!(Position::try_from_signed(0, -1).is_none());
        assert!(Position::try_from_signed(5, 0).is_none());
        assert!(Position::try_from_signed(i64::MAX, 0).is_none());
    }

    #[test]
    fn test_index_and_back() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Position::ALL[0].label(), "Top-left");
        assert_eq!(Position::ALL[4].label(), "Center");
        assert_eq!(Position::ALL[8].to_string(), "Bottom-right");
    }

    #[test]
    fn test_deserialize_checks_bounds() {
        let pos: Position = serde_json::from_str(r#"{"row":2,"col":1}"#).unwrap();
        assert_eq!(pos, Position::new(2, 1).unwrap());
        assert_eq!(pos.label(), "Bottom-center");

        assert!(serde_json::from_str::<Position>(r#"{"row":7,"col":0}"#).is_err());
        assert!(serde_json::from_str::<Position>(r#"{"row":0,"col":3}"#).is_err());
        assert!(serde_json::from_str::<Position>(r#"{"row":-1,"col":0}"#).is_err());
    }
}
