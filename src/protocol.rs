//! JSON boundary types: rows of
//! `{"letter": "<c>", "color": "green"|"yellow"|"gray"}` in,
//! `{possible_words, suggestions, count}` out.

use crate::constraints::{Color, FeedbackRow, Tile};
use crate::error::Error;
use crate::solver::{self, Solution};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
pub struct TileInput {
    pub letter: String,
    pub color: Color,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SolveRequest {
    pub rows: Vec<Vec<TileInput>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolveResponse {
    pub possible_words: Vec<String>,
    pub suggestions: Vec<String>,
    pub count: usize,
}

impl TileInput {
    fn into_tile(self) -> Result<Tile, Error> {
        let mut chars = self.letter.chars();
        let letter = chars
            .next()
            .ok_or_else(|| Error::BadLetter(self.letter.clone()))?;
        if chars.next().is_some() {
            return Err(Error::BadLetter(self.letter));
        }
        Tile::new(letter, self.color)
    }
}

impl SolveRequest {
    /// Validates every row up front; a single malformed tile rejects the
    /// whole request rather than filtering on partial constraints.
    pub fn into_rows(self) -> Result<Vec<FeedbackRow>, Error> {
        self.rows
            .into_iter()
            .map(|row| {
                let tiles: Result<Vec<Tile>, Error> =
                    row.into_iter().map(TileInput::into_tile).collect();
                FeedbackRow::new(tiles?)
            })
            .collect()
    }
}

impl From<Solution> for SolveResponse {
    fn from(solution: Solution) -> Self {
        let count = solution.count();
        SolveResponse {
            possible_words: solution.possible_words,
            suggestions: solution.suggestions,
            count,
        }
    }
}

/// The boundary operation: one JSON request in, one JSON response out.
/// Stateless and idempotent; each call runs its own fresh session.
pub fn handle_request(words: &[String], body: &str) -> Result<String, Error> {
    let request: SolveRequest = serde_json::from_str(body)?;
    let rows = request.into_rows()?;
    let response = SolveResponse::from(solver::solve(words, &rows));
    Ok(serde_json::to_string(&response)?)
}
