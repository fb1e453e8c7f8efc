use crate::constraints::{FeedbackRow, WORD_LENGTH};
use crate::info_log;
use crate::solver::{self, Solution};
use clap::Parser;
use std::io::BufRead;

/// Wordle helper CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Read one JSON request from stdin and print the JSON response
    #[arg(long = "json")]
    pub json: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// Interactive input/output

enum GuessInput {
    Valid(String),
    Invalid,
    Exit,
    NewGame,
}

fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_valid_colors(colors: &str) -> bool {
    colors.len() == WORD_LENGTH
        && colors.chars().all(|c| c == 'G' || c == 'Y' || c == 'X')
}

fn read_guess<R: BufRead>(reader: &mut R) -> Option<GuessInput> {
    println!("\nEnter your guess (5 letters, or 'exit' to quit, or 'next' to start over):");
    let mut input = String::new();
    if reader.read_line(&mut input).ok()? == 0 {
        return Some(GuessInput::Exit);
    }
    let input = input.trim().to_lowercase();

    Some(match input.as_str() {
        "exit" => GuessInput::Exit,
        "next" => GuessInput::NewGame,
        _ if is_valid_word(&input) => GuessInput::Valid(input),
        _ => {
            println!("Invalid guess. Please enter 5 letters.");
            GuessInput::Invalid
        }
    })
}

fn read_colors<R: BufRead>(reader: &mut R) -> Option<String> {
    println!("Enter colors (G=green, Y=yellow, X=gray, e.g. GYXXG):");
    let mut input = String::new();
    if reader.read_line(&mut input).ok()? == 0 {
        return None;
    }
    let input = input.trim().to_uppercase();

    if is_valid_colors(&input) {
        Some(input)
    } else {
        println!("Invalid colors. Please enter 5 characters using G, Y, or X.");
        None
    }
}

fn display_solution(solution: &Solution) {
    println!("Possible words ({})", solution.count());
    for word in solution.possible_words.iter().take(5) {
        println!("{word}");
    }
    if solution.count() > 5 {
        println!("...and {} more", solution.count() - 5);
    }

    if !solution.suggestions.is_empty() {
        println!("Suggested guesses:");
        for (i, word) in solution.suggestions.iter().enumerate() {
            println!("{}. {}", i + 1, word);
        }
    }
}

/// Interactive loop. Each round appends one feedback row and replays the
/// whole history through a fresh session against the full word list, so
/// every display reflects exactly the rows entered so far.
pub fn run_interactive<R: BufRead>(wordbank: &[String], mut reader: R) {
    println!("Loaded {} words.", wordbank.len());
    let mut rows: Vec<FeedbackRow> = Vec::new();

    loop {
        let guess = match read_guess(&mut reader) {
            None | Some(GuessInput::Exit) => {
                println!("Exiting.");
                break;
            }
            Some(GuessInput::NewGame) => {
                rows.clear();
                println!("New game started. Loaded {} words.", wordbank.len());
                continue;
            }
            Some(GuessInput::Valid(g)) => g,
            Some(GuessInput::Invalid) => continue,
        };

        let Some(colors) = read_colors(&mut reader) else {
            continue;
        };

        let row = match FeedbackRow::from_guess(&guess, &colors) {
            Ok(row) => row,
            Err(e) => {
                println!("Could not read that row: {e}");
                continue;
            }
        };
        rows.push(row);
        info_log!("replaying {} feedback rows", rows.len());

        let solution = solver::solve(wordbank, &rows);
        display_solution(&solution);

        match solution.count() {
            0 => {
                println!("No candidates remain. Check your inputs.");
                break;
            }
            1 => {
                println!("Solution found: {}", solution.possible_words[0]);
                break;
            }
            _ => {}
        }
    }
}
