//! Sudoku board consistency check.
//!
//! A board is *valid* when no digit repeats inside any row, column or 3×3
//! box. Blank cells never conflict, and a valid board need not be solvable.

use crate::error::{AlgoError, Result};
use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 9;

/// Character marking an empty cell.
pub const BLANK: char = '.';

/// A parsed 9×9 board. Each cell is a digit `1..=9` or blank.
///
/// Deserializes from (and serializes to) an array of nine rows of nine
/// single-character strings, e.g. `[["5","3",".",...], ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct SudokuBoard {
    cells: [[Option<u8>; SIZE]; SIZE],
}

impl SudokuBoard {
    /// Parses a board from rows of characters.
    ///
    /// # Errors
    ///
    /// [`AlgoError::InvalidInput`] unless there are exactly nine rows of nine
    /// cells, each `'1'..='9'` or [`BLANK`].
    pub fn from_rows<R: AsRef<[char]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != SIZE {
            return Err(AlgoError::invalid(format!(
                "sudoku board must have {SIZE} rows, found {}",
                rows.len()
            )));
        }
        let mut cells = [[None; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != SIZE {
                return Err(AlgoError::invalid(format!(
                    "sudoku row {r} must have {SIZE} cells, found {}",
                    row.len()
                )));
            }
            for (c, &ch) in row.iter().enumerate() {
                cells[r][c] = parse_cell(ch, r, c)?;
            }
        }
        Ok(Self { cells })
    }

    /// Parses a board from nine strings of nine characters, e.g.
    /// `"53..7...."`.
    ///
    /// # Errors
    ///
    /// Same as [`from_rows`](Self::from_rows).
    pub fn from_strs<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let rows: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        Self::from_rows(&rows)
    }

    /// The digit at `(row, col)`, or `None` for a blank.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not below [`SIZE`].
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.cells[row][col]
    }

    /// Returns `true` if no digit repeats in any row, column or box.
    pub fn is_valid(&self) -> bool {
        // Bit d of each mask is set once digit d has been seen in that unit.
        let mut rows = [0u16; SIZE];
        let mut cols = [0u16; SIZE];
        let mut boxes = [0u16; SIZE];

        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let Some(digit) = *cell else { continue };
                let bit = 1u16 << digit;
                let b = (r / 3) * 3 + c / 3;
                if rows[r] & bit != 0 || cols[c] & bit != 0 || boxes[b] & bit != 0 {
                    tracing::debug!(row = r, col = c, digit, "sudoku conflict");
                    return false;
                }
                rows[r] |= bit;
                cols[c] |= bit;
                boxes[b] |= bit;
            }
        }
        true
    }
}

fn parse_cell(ch: char, row: usize, col: usize) -> Result<Option<u8>> {
    match ch {
        BLANK => Ok(None),
        '1'..='9' => Ok(Some(ch as u8 - b'0')),
        other => Err(AlgoError::invalid(format!(
            "sudoku cell ({row}, {col}) must be 1-9 or '{BLANK}', found {other:?}"
        ))),
    }
}

impl TryFrom<Vec<Vec<String>>> for SudokuBoard {
    type Error = AlgoError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self> {
        let mut chars = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let mut out = Vec::with_capacity(row.len());
            for (c, cell) in row.iter().enumerate() {
                let mut it = cell.chars();
                match (it.next(), it.next()) {
                    (Some(ch), None) => out.push(ch),
                    _ => {
                        return Err(AlgoError::invalid(format!(
                            "sudoku cell ({r}, {c}) must be a single character, found {cell:?}"
                        )))
                    }
                }
            }
            chars.push(out);
        }
        Self::from_rows(&chars)
    }
}

impl From<SudokuBoard> for Vec<Vec<String>> {
    fn from(board: SudokuBoard) -> Self {
        board
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(d) => d.to_string(),
                        None => BLANK.to_string(),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Parses `board` and reports whether it is valid.
///
/// # Errors
///
/// [`AlgoError::InvalidInput`] if the board is not 9×9 or holds a character
/// other than `'1'..='9'` and [`BLANK`].
pub fn is_valid_sudoku<R: AsRef<[char]>>(board: &[R]) -> Result<bool> {
    Ok(SudokuBoard::from_rows(board)?.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: [&str; 9] = [
        "53..7....",
        "6..195...",
        ".98....6.",
        "8...6...3",
        "4..8.3..1",
        "7...2...6",
        ".6....28.",
        "...419..5",
        "....8..79",
    ];

    fn canonical_rows() -> Vec<Vec<char>> {
        CANONICAL.iter().map(|r| r.chars().collect()).collect()
    }

    #[test]
    fn test_canonical_board_is_valid() {
        assert_eq!(is_valid_sudoku(&canonical_rows()), Ok(true));
        let board = SudokuBoard::from_strs(&CANONICAL).unwrap();
        assert_eq!(board.cell(0, 0), Some(5));
        assert_eq!(board.cell(0, 2), None);
    }

    #[test]
    fn test_row_conflict() {
        let mut rows = canonical_rows();
        rows[0][2] = '5';
        assert_eq!(is_valid_sudoku(&rows), Ok(false));
    }

    #[test]
    fn test_column_conflict() {
        let mut rows = canonical_rows();
        // 4 already sits at (4, 0); row 8 and the bottom-left box have no 4.
        rows[8][0] = '4';
        assert_eq!(is_valid_sudoku(&rows), Ok(false));
    }

    #[test]
    fn test_box_conflict() {
        let mut rows = canonical_rows();
        // 9 already sits at (2, 1), same top-left box, different row and column.
        rows[0][2] = '9';
        assert_eq!(is_valid_sudoku(&rows), Ok(false));
    }

    #[test]
    fn test_empty_board_is_valid() {
        let rows = vec![vec![BLANK; SIZE]; SIZE];
        assert_eq!(is_valid_sudoku(&rows), Ok(true));
    }

    #[test]
    fn test_malformed_boards() {
        let short = vec![vec![BLANK; SIZE]; 8];
        assert!(matches!(is_valid_sudoku(&short), Err(AlgoError::InvalidInput(_))));

        let mut narrow = vec![vec![BLANK; SIZE]; SIZE];
        narrow[4].pop();
        assert!(matches!(is_valid_sudoku(&narrow), Err(AlgoError::InvalidInput(_))));

        let mut bad_char = vec![vec![BLANK; SIZE]; SIZE];
        bad_char[1][1] = '0';
        assert!(matches!(is_valid_sudoku(&bad_char), Err(AlgoError::InvalidInput(_))));
    }

    #[test]
    fn test_string_cells_round_trip() {
        let board = SudokuBoard::from_strs(&CANONICAL).unwrap();
        let rows: Vec<Vec<String>> = board.clone().into();
        assert_eq!(rows[0][0], "5");
        assert_eq!(rows[0][2], ".");
        assert_eq!(SudokuBoard::try_from(rows).unwrap(), board);
    }

    #[test]
    fn test_multi_character_cell_rejected() {
        let mut rows: Vec<Vec<String>> = vec![vec![".".to_owned(); SIZE]; SIZE];
        rows[3][3] = "12".to_owned();
        assert!(SudokuBoard::try_from(rows).is_err());
    }
}
