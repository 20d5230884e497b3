//! Input validators: palindromes and sudoku boards.

pub mod palindrome;
pub mod sudoku;

pub use palindrome::is_palindrome;
pub use sudoku::{is_valid_sudoku, SudokuBoard};
