// crates/domain/src/rules/general.rs
//! Explicit-loop rule set. Constant extra space for every check.

use super::{PassphraseRules, TERMINAL_MARKS, is_body_char};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralRules;

impl PassphraseRules for GeneralRules {
    fn check_terminal(&self, line: &str) -> bool {
        let Some(last) = line.chars().next_back() else {
            return false;
        };
        let mut index = 0;
        while index < TERMINAL_MARKS.len() {
            if last == TERMINAL_MARKS[index] {
                return true;
            }
            index += 1;
        }
        false
    }

    fn check_body(&self, line: &str) -> bool {
        // The terminal mark sits at `len - 1`; a one-char line never enters the loop.
        let len = line.chars().count();
        for (index, ch) in line.chars().enumerate() {
            if index + 1 >= len {
                break;
            }
            if !is_body_char(ch) {
                return false;
            }
        }
        true
    }

    fn check_uniqueness(&self, words: &[&str]) -> bool {
        for i in 0..words.len().saturating_sub(1) {
            for k in i + 1..words.len() {
                if words[i] == words[k] {
                    return false;
                }
            }
        }
        true
    }
}
