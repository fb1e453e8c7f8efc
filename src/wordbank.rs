use crate::constraints::WORD_LENGTH;
use crate::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn is_candidate_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Filters any line-based source down to lowercase five-letter words.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_candidate_word(word))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if is_candidate_word(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str_normalizes_and_filters() {
        let data = "CRANE\n slate \ncran\ncranes\ncr4ne\n\nmoist";
        let words = load_wordbank_from_str(data);
        assert_eq!(words, vec!["crane", "slate", "moist"]);
    }

    #[test]
    fn test_embedded_wordbank_is_clean() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| is_candidate_word(w)));
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_lowercase())));
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        assert!(load_wordbank_from_file("/nonexistent/wordbank.txt").is_err());
    }
}
