//! Random misspelling generator for exercising the corrector.
//!
//! Deliberately produces only the two typo classes the correction model
//! handles: a vowel swapped for another vowel, and a letter typed twice.

use derive_builder::Builder;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::trie::{VOWELS, is_vowel};

/// Produces misspelled variants of dictionary words.
///
/// Build one with [`MisspellingGeneratorBuilder`]; the defaults are batches
/// of 50 words with a 20% vowel-swap and a 10% duplication chance.
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct MisspellingGenerator {
    /// How many words one batch produces.
    #[builder(default = "50")]
    count: usize,
    /// Chance that a vowel is swapped for a randomly chosen vowel.
    #[builder(default = "0.2")]
    vowel_swap_chance: f64,
    /// Chance that a letter is doubled.
    #[builder(default = "0.1")]
    duplicate_chance: f64,
}

impl MisspellingGeneratorBuilder {
    fn validate(&self) -> Result<(), String> {
        for chance in [self.vowel_swap_chance, self.duplicate_chance]
            .into_iter()
            .flatten()
        {
            if !(0.0..=1.0).contains(&chance) {
                return Err(format!("chance must be within 0.0..=1.0, got {chance}"));
            }
        }
        Ok(())
    }
}

impl MisspellingGenerator {
    /// Misspell a single word. The swapped-in vowel may equal the one it
    /// replaces, so a "swap" does not always change the word.
    pub fn misspell<R: Rng>(&self, word: &str, rng: &mut R) -> String {
        let mut out = String::with_capacity(word.len() + 2);
        for mut c in word.chars() {
            if is_vowel(c) && rng.random_bool(self.vowel_swap_chance) {
                c = VOWELS[rng.random_range(0..VOWELS.len())];
            }
            out.push(c);
            if rng.random_bool(self.duplicate_chance) {
                out.push(c);
            }
        }
        out
    }

    /// Produce a batch of misspellings of randomly picked words. Empty word
    /// lists yield an empty batch.
    pub fn generate<R: Rng>(&self, words: &[String], rng: &mut R) -> Vec<String> {
        let mut batch = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            if let Some(word) = words.choose(rng) {
                batch.push(self.misspell(word, rng));
            }
        }
        batch
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn vowel_swap_chance(&self) -> f64 {
        self.vowel_swap_chance
    }

    pub fn duplicate_chance(&self) -> f64 {
        self.duplicate_chance
    }
}
