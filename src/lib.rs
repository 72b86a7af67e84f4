//! Trie-based spelling correction with a known-error typo model.
//!
//! A [`Trie`] holds the dictionary and answers exact lookups and fuzzy
//! corrections; [`SpellChecker`] wraps it with a [`StringStrategy`] and
//! file loading. Corrections target exactly two typo classes: a wrong
//! vowel and an extra doubled letter.

mod checker;
mod error;
mod generator;
mod node;
mod string_strategy;
mod trie;

pub use crate::checker::SpellChecker;
pub use crate::error::{Result, TrispellError};
pub use crate::generator::{
    MisspellingGenerator, MisspellingGeneratorBuilder, MisspellingGeneratorBuilderError,
};
pub use crate::string_strategy::{AsciiStringStrategy, StringStrategy, UnicodeStringStrategy};
pub use crate::trie::Trie;
