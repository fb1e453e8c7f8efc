// Library interface for wordle-helper
// This allows integration tests to access internal modules

pub mod cli;
pub mod constraints;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod solver;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use constraints::{Color, ConstraintState, FeedbackRow, Tile, WORD_LENGTH};
pub use error::Error;
pub use protocol::{handle_request, SolveRequest, SolveResponse};
pub use solver::{filter_words, rank_suggestions, solve, Solution, MAX_SUGGESTIONS};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
