// crates/domain/src/rules.rs
//! パスフレーズ検証ルール
//!
//! A line is a valid passphrase when, in this order:
//!
//! 1. its last character is a terminal mark (`!`, `?` or `.`)
//! 2. the text before that mark splits into more than one word
//! 3. every character before the mark is lowercase or whitespace
//! 4. no word appears twice
//!
//! Checks 1 and 2 are shared. Checks 3 and 4 plus the terminal test are
//! provided per policy through [`PassphraseRules`].

use std::fmt;

pub mod general;
pub mod variant;

pub use general::GeneralRules;
pub use variant::VariantRules;

/// Characters accepted as the final mark of a passphrase.
pub const TERMINAL_MARKS: [char; 3] = ['!', '?', '.'];

/// Why a line was rejected. Reported for the first failing check only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    MissingTerminalMark,
    TooFewWords,
    InvalidCharacter,
    DuplicateWord,
}

impl Rejection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingTerminalMark => "missing terminal mark",
            Self::TooFewWords => "fewer than two words",
            Self::InvalidCharacter => "character other than lowercase or whitespace",
            Self::DuplicateWord => "duplicate word",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy for the policy-specific parts of passphrase validation.
///
/// Implementations must be pure: the same line always yields the same answer.
pub trait PassphraseRules: Send + Sync {
    /// `true` if the last character of `line` is one of [`TERMINAL_MARKS`].
    fn check_terminal(&self, line: &str) -> bool;

    /// `true` if every character before the terminal mark is lowercase or whitespace.
    fn check_body(&self, line: &str) -> bool;

    /// `true` if no word occurs more than once (case-sensitive).
    fn check_uniqueness(&self, words: &[&str]) -> bool;

    /// The first check that rejects `line`, or `None` if it is valid.
    fn diagnose(&self, line: &str) -> Option<Rejection> {
        if !self.check_terminal(line) {
            return Some(Rejection::MissingTerminalMark);
        }
        let words = split_words(line);
        if words.len() <= 1 {
            return Some(Rejection::TooFewWords);
        }
        if !self.check_body(line) {
            return Some(Rejection::InvalidCharacter);
        }
        if !self.check_uniqueness(&words) {
            return Some(Rejection::DuplicateWord);
        }
        None
    }

    fn validate(&self, line: &str) -> bool {
        self.diagnose(line).is_none()
    }
}

/// `line` without its final character. Empty for empty input.
pub fn body(line: &str) -> &str {
    line.char_indices().next_back().map_or("", |(idx, _)| &line[..idx])
}

/// Whitespace-separated words of `line`, excluding the terminal mark.
pub fn split_words(line: &str) -> Vec<&str> {
    body(line).split(is_space).filter(|word| !word.is_empty()).collect()
}

/// Unicode whitespace plus the information separators U+001C..=U+001F.
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

fn is_body_char(ch: char) -> bool {
    ch.is_lowercase() || is_space(ch)
}
