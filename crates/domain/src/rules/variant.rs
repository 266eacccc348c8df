// crates/domain/src/rules/variant.rs
//! Iterator-based rule set. Uniqueness is checked through a hash set.

use std::collections::HashSet;

use super::{PassphraseRules, TERMINAL_MARKS, body, is_body_char};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantRules;

impl PassphraseRules for VariantRules {
    fn check_terminal(&self, line: &str) -> bool {
        line.chars().next_back().is_some_and(|last| TERMINAL_MARKS.contains(&last))
    }

    fn check_body(&self, line: &str) -> bool {
        body(line).chars().all(is_body_char)
    }

    fn check_uniqueness(&self, words: &[&str]) -> bool {
        words.iter().collect::<HashSet<_>>().len() == words.len()
    }
}
