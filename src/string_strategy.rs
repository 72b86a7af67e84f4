use unidecode::unidecode;

/// How raw text is transformed before it reaches the trie, which only ever
/// stores the 26 lowercase Latin letters.
pub trait StringStrategy: Clone + Default {
    fn new() -> Self;
    fn prepare(&self, s: &str) -> String;
}

/// Transliterates to ASCII first, so accented entries land on their
/// 26-letter skeleton instead of being dropped.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default)]
pub struct AsciiStringStrategy {}

impl StringStrategy for AsciiStringStrategy {
    fn new() -> Self {
        Self {}
    }

    fn prepare(&self, s: &str) -> String {
        unidecode(s)
    }
}

/// Passes text through untouched; characters outside the alphabet are then
/// skipped at the trie boundary.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default)]
pub struct UnicodeStringStrategy {}

impl StringStrategy for UnicodeStringStrategy {
    fn new() -> Self {
        Self {}
    }

    fn prepare(&self, s: &str) -> String {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_prepare_transliterates() {
        assert_eq!(AsciiStringStrategy::new().prepare("čičina"), "cicina");
    }

    #[test]
    fn ascii_prepare_keeps_plain_text() {
        assert_eq!(AsciiStringStrategy::new().prepare("daleko"), "daleko");
    }

    #[test]
    fn unicode_prepare_passes_through() {
        assert_eq!(UnicodeStringStrategy::new().prepare("čičina"), "čičina");
    }
}
