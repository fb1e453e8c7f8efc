use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const WORD_LENGTH: usize = 5;

/// Per-tile feedback color as reported by the game board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Yellow,
    Gray,
}

impl Color {
    /// Parses the single-letter code used in interactive input
    /// (G=green, Y=yellow, X=gray).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Color::Green),
            'Y' => Some(Color::Yellow),
            'X' => Some(Color::Gray),
            _ => None,
        }
    }
}

/// One observed (letter, color) pair at a board position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    pub letter: char,
    pub color: Color,
}

impl Tile {
    pub fn new(letter: char, color: Color) -> Result<Self, Error> {
        if !letter.is_ascii_alphabetic() {
            return Err(Error::BadLetter(letter.to_string()));
        }
        Ok(Tile {
            letter: letter.to_ascii_lowercase(),
            color,
        })
    }
}

/// A full row of feedback for one guessed word. Immutable once built.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FeedbackRow {
    tiles: [Tile; WORD_LENGTH],
}

impl FeedbackRow {
    pub fn new(tiles: Vec<Tile>) -> Result<Self, Error> {
        let tiles: [Tile; WORD_LENGTH] = tiles
            .try_into()
            .map_err(|v: Vec<Tile>| Error::RowLength(v.len()))?;
        Ok(FeedbackRow { tiles })
    }

    /// Builds a row from a guessed word and its G/Y/X color string.
    pub fn from_guess(guess: &str, colors: &str) -> Result<Self, Error> {
        if guess.chars().count() != WORD_LENGTH {
            return Err(Error::RowLength(guess.chars().count()));
        }
        if colors.chars().count() != WORD_LENGTH {
            return Err(Error::RowLength(colors.chars().count()));
        }
        let tiles: Result<Vec<Tile>, Error> = guess
            .chars()
            .zip(colors.chars())
            .map(|(letter, code)| {
                let color = Color::from_char(code)
                    .ok_or_else(|| Error::BadColor(code.to_string()))?;
                Tile::new(letter, color)
            })
            .collect();
        FeedbackRow::new(tiles?)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

/// Accumulated constraints from every feedback row seen so far in one
/// session. Later rows only add information: greens may overwrite a
/// position, yellow positions pile up without deduplication, and gray
/// letters are never removed.
#[derive(Clone, Debug, Default)]
pub struct ConstraintState {
    pub green: HashMap<usize, char>,
    pub yellow: HashMap<char, Vec<usize>>,
    pub gray: HashSet<char>,
}

impl ConstraintState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one feedback row into the state.
    pub fn update(&mut self, row: &FeedbackRow) {
        for (i, tile) in row.tiles().iter().enumerate() {
            match tile.color {
                Color::Green => {
                    self.green.insert(i, tile.letter);
                }
                Color::Yellow => {
                    self.yellow.entry(tile.letter).or_default().push(i);
                }
                Color::Gray => {
                    self.gray.insert(tile.letter);
                }
            }
        }
    }

    /// Replays a full row history into a fresh state.
    #[must_use]
    pub fn from_rows(rows: &[FeedbackRow]) -> Self {
        let mut state = Self::new();
        for row in rows {
            state.update(row);
        }
        state
    }

    /// A gray mark only excludes a letter outright when no green or
    /// yellow evidence exists for it; otherwise the letter may still
    /// occur in the word (it was gray for a surplus occurrence).
    pub fn is_hard_excluded(&self, letter: char) -> bool {
        self.gray.contains(&letter)
            && !self.green.values().any(|&g| g == letter)
            && !self.yellow.contains_key(&letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(guess: &str, colors: &str) -> FeedbackRow {
        FeedbackRow::from_guess(guess, colors).unwrap()
    }

    #[test]
    fn test_color_from_char() {
        assert_eq!(Color::from_char('G'), Some(Color::Green));
        assert_eq!(Color::from_char('y'), Some(Color::Yellow));
        assert_eq!(Color::from_char('X'), Some(Color::Gray));
        assert_eq!(Color::from_char('Z'), None);
    }

    #[test]
    fn test_tile_lowercases_letter() {
        let tile = Tile::new('A', Color::Green).unwrap();
        assert_eq!(tile.letter, 'a');
    }

    #[test]
    fn test_tile_rejects_non_alphabetic() {
        assert!(Tile::new('3', Color::Gray).is_err());
        assert!(Tile::new(' ', Color::Gray).is_err());
    }

    #[test]
    fn test_row_rejects_wrong_length() {
        assert!(FeedbackRow::from_guess("cran", "GGGG").is_err());
        assert!(FeedbackRow::from_guess("cranes", "GGGGGG").is_err());
        let four_tiles: Vec<Tile> = (0..4)
            .map(|_| Tile::new('a', Color::Gray).unwrap())
            .collect();
        assert!(FeedbackRow::new(four_tiles).is_err());
    }

    #[test]
    fn test_row_rejects_bad_color_code() {
        assert!(matches!(
            FeedbackRow::from_guess("crane", "GGGGZ"),
            Err(Error::BadColor(_))
        ));
    }

    #[test]
    fn test_update_records_each_color() {
        let mut state = ConstraintState::new();
        state.update(&row("crane", "GYXXX"));

        assert_eq!(state.green.get(&0), Some(&'c'));
        assert_eq!(state.yellow.get(&'r'), Some(&vec![1]));
        assert!(state.gray.contains(&'a'));
        assert!(state.gray.contains(&'n'));
        assert!(state.gray.contains(&'e'));
    }

    #[test]
    fn test_green_overwrite_allowed() {
        let mut state = ConstraintState::new();
        state.update(&row("crane", "GXXXX"));
        state.update(&row("slate", "GXXXX"));
        assert_eq!(state.green.get(&0), Some(&'s'));
    }

    #[test]
    fn test_yellow_positions_accumulate_without_dedup() {
        let mut state = ConstraintState::new();
        state.update(&row("crane", "XYXXX"));
        state.update(&row("brine", "XYXXX"));
        assert_eq!(state.yellow.get(&'r'), Some(&vec![1, 1]));
    }

    #[test]
    fn test_gray_accumulates() {
        let state = ConstraintState::from_rows(&[
            row("crane", "XXXXX"),
            row("moist", "XXXXX"),
        ]);
        for letter in "cranemoist".chars() {
            assert!(state.gray.contains(&letter));
        }
    }

    #[test]
    fn test_hard_exclusion_respects_green_and_yellow_evidence() {
        // 'e' gray at one position but green at another (double letter in
        // the target); must not be treated as absent.
        let state = ConstraintState::from_rows(&[row("eerie", "XXXXG")]);
        assert!(!state.is_hard_excluded('e'));
        assert!(state.is_hard_excluded('r'));
        assert!(state.is_hard_excluded('i'));
    }
}
