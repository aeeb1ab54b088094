use std::fmt;
use std::ops::{Index, IndexMut, Range};

use crate::bits::BitVec;
use crate::Model;

/// Splits text into words using the frequencies from a [`Model`]
///
/// A `Segmenter` only borrows its model, so any number of them can be used from
/// different threads while the model stays frozen.
#[derive(Clone, Copy, Debug)]
pub struct Segmenter<'a> {
    model: &'a Model,
    limit: Option<usize>,
}

impl<'a> Segmenter<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self { model, limit: None }
    }

    /// Customize the maximum word length `limit`
    ///
    /// Defaults to the length of the longest word in the model.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The maximum word length that will be considered
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or_else(|| self.model.max_word_length())
    }

    pub fn model(&self) -> &'a Model {
        self.model
    }

    /// Segment the text in `input`
    ///
    /// Returns `Err(InvalidLimit)` if the word length limit is zero, which also happens
    /// when no limit was set and the model is empty. The `search` parameter holds the
    /// working memory used during segmentation; passing it in allows callers to reuse
    /// its allocations.
    pub fn segment(&self, input: &str, search: &mut Search) -> Result<Segmentation, InvalidLimit> {
        let limit = match self.limit() {
            0 => return Err(InvalidLimit),
            limit => limit,
        };

        let text = Text::new(input, &mut search.offsets);
        Ok(SegmentState::new(text, self.model, limit, &mut search.window).run())
    }

    /// Segment the text in `input` using a fresh [`Search`]
    pub fn segment_str(&self, input: &str) -> Result<Segmentation, InvalidLimit> {
        self.segment(input, &mut Search::default())
    }
}

struct SegmentState<'a> {
    model: &'a Model,
    text: Text<'a>,
    limit: usize,
    window: &'a mut Window,
}

impl<'a> SegmentState<'a> {
    fn new(text: Text<'a>, model: &'a Model, limit: usize, window: &'a mut Window) -> Self {
        window.reset(limit.min(text.len()), text.len());
        Self {
            model,
            text,
            limit,
            window,
        }
    }

    /// Fill the triangular matrix row by row, keeping only the last `limit` cells
    fn run(mut self) -> Segmentation {
        let len = self.text.len();
        if len == 0 {
            return Segmentation::default();
        }

        for start in 0..len {
            let prefix_score = self.window.load_prefix(start).score;

            for part in 1..=self.limit.min(len - start) {
                let end = start + part;
                let score = prefix_score + self.model.log_probability(&self.text[start..end]);

                let (cell, prefix) = self.window.cell_and_prefix(end);
                // The cell for `start + limit` is also the one the prefix was read from; it
                // has no candidate of its own yet, so it is always replaced.
                if start == 0 || part == self.limit || score > cell.score {
                    cell.score = score;
                    cell.splits.copy_from(&prefix.splits);
                    if start > 0 {
                        debug_assert!(!cell.splits.test(start));
                        cell.splits.set(start);
                    }
                }
            }
        }

        let best = &self.window[len];
        let mut text = String::with_capacity(self.text.input.len() + len);
        let mut boundaries = Vec::new();
        let mut last = 0;
        for split in best.splits.decode() {
            text.push_str(&self.text[last..split]);
            text.push(' ');
            boundaries.push(split);
            last = split;
        }
        text.push_str(&self.text[last..len]);

        Segmentation {
            text,
            score: best.score,
            boundaries,
        }
    }
}

/// Working memory for a segmentation
///
/// Holds the ring of best partial solutions and the character offsets of the input.
/// A `Search` can be reused for any number of calls to [`Segmenter::segment()`].
#[derive(Clone, Debug, Default)]
pub struct Search {
    window: Window,
    offsets: Vec<usize>,
}

/// Ring buffer holding the best segmentation for the last few prefix lengths
///
/// Cells are addressed by the logical position (the length in characters of the prefix
/// they describe); `Window::slot()` is the only place translating positions to slots.
#[derive(Clone, Debug, Default)]
struct Window {
    cells: Vec<Cell>,
    prefix: Cell,
    size: usize,
}

impl Window {
    fn reset(&mut self, size: usize, bits: usize) {
        self.size = size;
        if self.cells.len() < size {
            self.cells.resize_with(size, Cell::default);
        }

        for cell in self.cells[..size].iter_mut() {
            cell.reset(bits);
        }
        self.prefix.reset(bits);
    }

    /// Copy the cell for `position` into the prefix, which is read for a whole row
    fn load_prefix(&mut self, position: usize) -> &Cell {
        match position {
            0 => self.prefix.clear(),
            _ => {
                let slot = self.slot(position);
                let cell = &self.cells[slot];
                self.prefix.score = cell.score;
                self.prefix.splits.copy_from(&cell.splits);
            }
        }
        &self.prefix
    }

    /// Mutable cell for `position`, along with the prefix loaded for the current row
    fn cell_and_prefix(&mut self, position: usize) -> (&mut Cell, &Cell) {
        let slot = self.slot(position);
        (&mut self.cells[slot], &self.prefix)
    }

    fn slot(&self, position: usize) -> usize {
        debug_assert!(self.size > 0);
        position % self.size
    }
}

impl Index<usize> for Window {
    type Output = Cell;

    fn index(&self, position: usize) -> &Self::Output {
        &self.cells[self.slot(position)]
    }
}

impl IndexMut<usize> for Window {
    fn index_mut(&mut self, position: usize) -> &mut Self::Output {
        let slot = self.slot(position);
        &mut self.cells[slot]
    }
}

#[derive(Clone, Debug, Default)]
struct Cell {
    score: f64,
    splits: BitVec,
}

impl Cell {
    fn reset(&mut self, bits: usize) {
        self.score = 0.0;
        self.splits.reset(bits);
    }

    fn clear(&mut self) {
        self.score = 0.0;
        self.splits.clear();
    }
}

/// Best segmentation found for some input
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segmentation {
    text: String,
    score: f64,
    boundaries: Vec<usize>,
}

impl Segmentation {
    /// The input with a single space inserted between words
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sum of the base-10 log probabilities of the words
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Character offsets into the input at which a space was inserted
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Input text, indexed by character rather than byte offsets
#[derive(Debug)]
struct Text<'a> {
    input: &'a str,
    offsets: &'a [usize],
}

impl<'a> Text<'a> {
    fn new(input: &'a str, offsets: &'a mut Vec<usize>) -> Self {
        offsets.clear();
        offsets.extend(input.char_indices().map(|(i, _)| i));
        offsets.push(input.len());
        Self { input, offsets }
    }

    fn len(&self) -> usize {
        self.offsets.len() - 1
    }
}

impl<'a> Index<Range<usize>> for Text<'a> {
    type Output = str;

    fn index(&self, index: Range<usize>) -> &Self::Output {
        &self.input[self.offsets[index.start]..self.offsets[index.end]]
    }
}

#[derive(Debug)]
pub struct InvalidLimit;

impl std::error::Error for InvalidLimit {}

impl fmt::Display for InvalidLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("word length limit must be larger than zero")
    }
}
