//! Word segmentation using unigram frequencies
//!
//! Finds the split of an unspaced string (like `thequickbrownfox`) into the sequence of
//! words with the highest joint probability, by filling a triangular matrix of candidate
//! words from left to right. Only the last `limit` cells of the matrix are kept, and the
//! word boundaries of each cell are stored as a bit vector instead of a string.
//!
//! ```
//! use triangular_segment::{Model, Segmenter};
//!
//! let model = vec![("choose", 80_000), ("spain", 20_000), ("chooses", 7_000), ("pain", 90_000)]
//!     .into_iter()
//!     .collect::<Model>();
//!
//! let result = Segmenter::new(&model).segment_str("choosespain").unwrap();
//! assert_eq!(result.text(), "choose spain");
//! ```

mod bits;
mod load;
mod model;
mod segment;

pub use load::Columns;
pub use model::{InvalidCorpusSize, Model, DEFAULT_CORPUS_SIZE};
pub use segment::{InvalidLimit, Search, Segmentation, Segmenter};

#[cfg(feature = "test-cases")]
pub mod test_cases;
#[cfg(feature = "__test_data")]
pub mod test_data;

type HashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
