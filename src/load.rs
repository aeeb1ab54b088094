use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::{debug, trace};

use crate::Model;

/// Positions of the word and its count among the whitespace-separated fields of a line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Columns {
    pub term: usize,
    pub count: usize,
}

impl Default for Columns {
    fn default() -> Self {
        Self { term: 0, count: 1 }
    }
}

impl Model {
    /// Merge word counts from the dictionary file at `path` into the model
    ///
    /// Each line should hold at least two whitespace-separated fields; the word and its
    /// count are taken from the fields selected by `columns`. Lines that don't fit are
    /// skipped. Returns the number of entries applied.
    pub fn load_dictionary(&mut self, path: impl AsRef<Path>, columns: Columns) -> io::Result<usize> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let applied = self.load_from_reader(reader, columns)?;
        debug!("loaded {} entries from {:?}", applied, path);
        Ok(applied)
    }

    /// Merge word counts from `reader` into the model
    ///
    /// See [`Model::load_dictionary()`] for the expected format.
    pub fn load_from_reader<R: BufRead>(&mut self, mut reader: R, columns: Columns) -> io::Result<usize> {
        let mut ln = String::new();
        let (mut i, mut applied) = (0, 0);
        while reader.read_line(&mut ln)? > 0 {
            i += 1;
            match parse_line(&ln, columns) {
                Some((word, count)) => {
                    self.upsert(word, count);
                    applied += 1;
                }
                None => trace!("skipping malformed dictionary line {}: {:?}", i, ln.trim_end()),
            }
            ln.clear();
        }

        Ok(applied)
    }
}

fn parse_line(ln: &str, columns: Columns) -> Option<(&str, u64)> {
    let fields = ln.split_whitespace().collect::<Vec<_>>();
    if fields.len() < 2 {
        return None;
    }

    let word = *fields.get(columns.term)?;
    let count = u64::from_str(fields.get(columns.count)?).ok()?;
    Some((word, count))
}
