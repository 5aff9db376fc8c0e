use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::Rng;

use super::GeneratorError;

/// Filtered, deduplicated word pool shared by all generation calls.
///
/// Built once at startup and read-only afterwards; handlers share it behind
/// an `Arc`.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Load a newline-delimited word file, keeping entries whose length lies
    /// in `[min_length, max_length]` and whose characters all satisfy
    /// `valid_char`.
    pub fn load<P: AsRef<Path>>(
        path: P,
        min_length: usize,
        max_length: usize,
        valid_char: impl Fn(char) -> bool,
    ) -> Result<Self, GeneratorError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| GeneratorError::Resource {
            path: path.display().to_string(),
            source,
        })?;

        let list = Self::from_words(
            raw.lines()
                .map(str::trim)
                .filter(|word| {
                    word.len() >= min_length
                        && word.len() <= max_length
                        && word.chars().all(&valid_char)
                })
                .map(String::from),
        );

        if list.is_empty() {
            return Err(GeneratorError::EmptyWordlist);
        }
        Ok(list)
    }

    /// Build a wordlist from an iterator of words, deduplicating while
    /// preserving first-occurrence order. No length or character filtering
    /// is applied.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();
        Self { words }
    }

    /// Draw `count` words independently and uniformly, with replacement.
    pub fn sample<'a, R: Rng>(
        &'a self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<&'a str>, GeneratorError> {
        if self.words.is_empty() {
            return Err(GeneratorError::EmptyWordlist);
        }
        Ok((0..count)
            .map(|_| self.words[rng.gen_range(0..self.words.len())].as_str())
            .collect())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in the pool, in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
