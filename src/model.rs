#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};
use smartstring::alias::String;

use crate::HashMap;

/// Word frequencies and the size of the corpus they were counted in
///
/// A `Model` is built by inserting words (see [`Model::upsert()`] and
/// [`Model::load_dictionary()`](crate::Model::load_dictionary)) and then
/// shared immutably with any number of [`Segmenter`](crate::Segmenter)s.
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug)]
pub struct Model {
    words: HashMap<String, u64>,
    corpus_size: u64,
    max_word_length: usize,
}

impl Model {
    /// Create an empty model using [`DEFAULT_CORPUS_SIZE`]
    pub fn new() -> Self {
        Self {
            words: HashMap::default(),
            corpus_size: DEFAULT_CORPUS_SIZE,
            max_word_length: 0,
        }
    }

    /// Create an empty model for a corpus of `corpus_size` words
    pub fn with_corpus_size(corpus_size: u64) -> Result<Self, InvalidCorpusSize> {
        let mut new = Self::new();
        new.set_corpus_size(corpus_size)?;
        Ok(new)
    }

    /// Insert `word` with the given `count`, replacing any earlier count
    ///
    /// Empty words are ignored.
    pub fn upsert(&mut self, word: &str, count: u64) {
        if word.is_empty() {
            return;
        }

        self.max_word_length = self.max_word_length.max(word.chars().count());
        match self.words.get_mut(word) {
            Some(existing) => *existing = count,
            None => {
                self.words.insert(word.into(), count);
            }
        }
    }

    /// Count stored for `word`, if any
    pub fn get(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    /// Base-10 logarithm of the probability of `word`
    pub fn log_probability(&self, word: &str) -> f64 {
        let total = self.corpus_size as f64;
        match self.words.get(word) {
            Some(&count) => (count as f64 / total).log10(),
            // Unknown words get a probability of 10 / (total * 10^len), which shrinks
            // tenfold with every character. Kept in log space so long words stay finite.
            None => 1.0 - total.log10() - word.chars().count() as f64,
        }
    }

    /// Length (in characters) of the longest word in the model
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    pub fn corpus_size(&self) -> u64 {
        self.corpus_size
    }

    /// Customize the corpus size used to turn counts into probabilities
    pub fn set_corpus_size(&mut self, corpus_size: u64) -> Result<(), InvalidCorpusSize> {
        if corpus_size == 0 {
            return Err(InvalidCorpusSize);
        }

        self.corpus_size = corpus_size;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Remove all words, resetting the maximum word length
    pub fn clear(&mut self) {
        self.words.clear();
        self.max_word_length = 0;
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: AsRef<str>> Extend<(K, u64)> for Model {
    fn extend<T: IntoIterator<Item = (K, u64)>>(&mut self, iter: T) {
        for (word, count) in iter {
            self.upsert(word.as_ref(), count);
        }
    }
}

impl<K: AsRef<str>> std::iter::FromIterator<(K, u64)> for Model {
    fn from_iter<T: IntoIterator<Item = (K, u64)>>(iter: T) -> Self {
        let mut new = Self::new();
        new.extend(iter);
        new
    }
}

#[derive(Debug)]
pub struct InvalidCorpusSize;

impl std::error::Error for InvalidCorpusSize {}

impl std::fmt::Display for InvalidCorpusSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("corpus size must be larger than zero")
    }
}

/// Number of words in the Google Books Ngram corpus
pub const DEFAULT_CORPUS_SIZE: u64 = 1_024_908_267_229;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert() {
        let mut model = Model::new();
        assert!(model.is_empty());
        assert_eq!(model.max_word_length(), 0);

        model.upsert("", 10);
        assert!(model.is_empty());

        model.upsert("fox", 10);
        model.upsert("brown", 20);
        model.upsert("fox", 30);
        assert_eq!(model.len(), 2);
        assert_eq!(model.get("fox"), Some(30));
        assert_eq!(model.get("dog"), None);
        assert_eq!(model.max_word_length(), 5);

        model.upsert("a", 1);
        assert_eq!(model.max_word_length(), 5);

        model.upsert("größe", 1);
        assert_eq!(model.max_word_length(), 5);

        model.clear();
        assert!(model.is_empty());
        assert_eq!(model.max_word_length(), 0);
    }

    #[test]
    fn probabilities() {
        let mut model = Model::with_corpus_size(1_000).unwrap();
        model.upsert("the", 100);
        assert!((model.log_probability("the") - -1.0).abs() < 1e-12);

        // 10 / (1000 * 10^2)
        assert!((model.log_probability("xy") - -4.0).abs() < 1e-12);
        assert!(model.log_probability("xyz") < model.log_probability("xy"));
        assert!((model.log_probability("ßü") - -4.0).abs() < 1e-12);
    }

    #[test]
    fn long_unknown_words() {
        let model = Model::new();
        let long = "q".repeat(300);
        let longer = "q".repeat(301);

        let score = model.log_probability(&long);
        assert!(score.is_finite());
        assert!(model.log_probability(&longer) < score);

        let expected = 1.0 - (DEFAULT_CORPUS_SIZE as f64).log10() - 300.0;
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn corpus_size() {
        assert_eq!(Model::new().corpus_size(), DEFAULT_CORPUS_SIZE);
        Model::with_corpus_size(0).unwrap_err();

        let mut model = Model::default();
        model.set_corpus_size(0).unwrap_err();
        assert_eq!(model.corpus_size(), DEFAULT_CORPUS_SIZE);
    }

    #[test]
    fn from_iter() {
        let model = vec![("choose", 80_000), ("spain", 20_000), ("choose", 7)]
            .into_iter()
            .collect::<Model>();
        assert_eq!(model.len(), 2);
        assert_eq!(model.get("choose"), Some(7));
    }
}
