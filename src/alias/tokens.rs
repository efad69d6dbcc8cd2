//! Random tokens for template parts.

use rand::seq::IndexedRandom;

use super::words::{ADJECTIVES, NOUNS};

/// Produces the random pieces of a template alias.
///
/// Implementations must be safe to share between request handlers.
#[cfg_attr(test, mockall::automock)]
pub trait TokenSource: Send + Sync {
    /// Returns `count` words: adjectives first, a noun last.
    fn words(&self, count: usize) -> Vec<String>;

    /// Returns exactly `len` lowercase hex characters.
    fn hex(&self, len: usize) -> String;
}

/// Default [`TokenSource`].
///
/// Words are picked with the thread-local RNG; hex tokens come straight from
/// the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokens;

impl TokenSource for RandomTokens {
    fn words(&self, count: usize) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }

        let mut rng = rand::rng();
        let mut words: Vec<String> = ADJECTIVES
            .choose_multiple(&mut rng, count - 1)
            .map(|word| (*word).to_string())
            .collect();

        if let Some(noun) = NOUNS.choose(&mut rng) {
            words.push((*noun).to_string());
        }

        words
    }

    /// # Panics
    ///
    /// Panics if the system random number generator fails (extremely rare).
    fn hex(&self, len: usize) -> String {
        let mut buffer = vec![0u8; len.div_ceil(2)];

        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        let mut token = hex::encode(buffer);
        token.truncate(len);
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn listed(list: &[&str], word: &str) -> bool {
        list.iter().any(|entry| *entry == word)
    }

    #[test]
    fn test_hex_has_requested_length() {
        for len in [0, 1, 5, 6, 7, 32, 64] {
            assert_eq!(RandomTokens.hex(len).len(), len);
        }
    }

    #[test]
    fn test_hex_is_lowercase_hex() {
        let token = RandomTokens.hex(33);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_hex_produces_unique_tokens() {
        let tokens: HashSet<String> = (0..1000).map(|_| RandomTokens.hex(16)).collect();
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_words_count() {
        for count in 1..=4 {
            assert_eq!(RandomTokens.words(count).len(), count);
        }
        assert!(RandomTokens.words(0).is_empty());
    }

    #[test]
    fn test_words_end_with_noun() {
        let words = RandomTokens.words(3);

        assert!(listed(ADJECTIVES, &words[0]));
        assert!(listed(ADJECTIVES, &words[1]));
        assert!(listed(NOUNS, &words[2]));
    }

    #[test]
    fn test_adjectives_are_not_repeated() {
        let words = RandomTokens.words(4);
        let adjectives: HashSet<&String> = words[..3].iter().collect();
        assert_eq!(adjectives.len(), 3);
    }

    #[test]
    fn test_word_lists_are_address_safe() {
        for word in ADJECTIVES.iter().chain(NOUNS) {
            assert!(!word.is_empty());
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word}");
        }
    }
}
