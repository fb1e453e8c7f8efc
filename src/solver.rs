use crate::constraints::{ConstraintState, FeedbackRow, WORD_LENGTH};
use crate::debug_log;
use std::collections::HashMap;

pub const MAX_SUGGESTIONS: usize = 10;

/// Result of one solving session: the consistent words and up to ten
/// ranked next guesses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub possible_words: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Solution {
    pub fn count(&self) -> usize {
        self.possible_words.len()
    }
}

/// Returns the subset of `words` consistent with every accumulated
/// constraint, in dictionary order.
pub fn filter_words(words: &[String], state: &ConstraintState) -> Vec<String> {
    let mut filtered = Vec::new();
    'word: for word in words {
        if word.chars().count() != WORD_LENGTH {
            continue;
        }
        let chars: Vec<char> = word.chars().collect();

        // First pass: greens must match exactly.
        for (&pos, &letter) in &state.green {
            if chars[pos] != letter {
                continue 'word;
            }
        }

        // Second pass: yellows must be present, but never at a position
        // where they were marked yellow.
        for (&letter, positions) in &state.yellow {
            if !chars.contains(&letter) {
                continue 'word;
            }
            for &pos in positions {
                if chars[pos] == letter {
                    continue 'word;
                }
            }
        }

        // Third pass: grays exclude the word only when the letter has no
        // green or yellow evidence at all.
        for &c in &chars {
            if state.is_hard_excluded(c) {
                continue 'word;
            }
        }

        filtered.push(word.clone());
    }
    filtered
}

/// Document frequency per letter: in how many candidate words does each
/// letter occur at least once.
fn letter_coverage(candidates: &[String]) -> HashMap<char, usize> {
    let mut coverage = HashMap::new();
    for word in candidates {
        let mut seen = [false; 26];
        for c in word.chars() {
            let idx = (c as u8 - b'a') as usize;
            if !seen[idx] {
                seen[idx] = true;
                *coverage.entry(c).or_insert(0) += 1;
            }
        }
    }
    coverage
}

fn score_word(word: &str, coverage: &HashMap<char, usize>) -> usize {
    let mut seen = [false; 26];
    let mut score = 0;
    for c in word.chars() {
        let idx = (c as u8 - b'a') as usize;
        if !seen[idx] {
            seen[idx] = true;
            score += coverage.get(&c).copied().unwrap_or(0);
        }
    }
    score
}

/// Ranks candidates by how many other candidates share their letters and
/// returns the top ten. A repeated letter counts once per word. Ties
/// break lexicographically so the ordering is reproducible.
pub fn rank_suggestions(candidates: &[String]) -> Vec<String> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let coverage = letter_coverage(candidates);
    let mut scored: Vec<(&String, usize)> = candidates
        .iter()
        .map(|w| (w, score_word(w, &coverage)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(word, _)| word.clone())
        .collect()
}

/// One full session: fold the row history into a fresh constraint state,
/// filter the dictionary once, rank the survivors. Nothing is carried
/// over between calls.
pub fn solve(words: &[String], rows: &[FeedbackRow]) -> Solution {
    let state = ConstraintState::from_rows(rows);
    debug_log!(
        "constraints: {} green, {} yellow, {} gray",
        state.green.len(),
        state.yellow.len(),
        state.gray.len()
    );
    let possible_words = filter_words(words, &state);
    let suggestions = rank_suggestions(&possible_words);
    Solution {
        possible_words,
        suggestions,
    }
}
