#![cfg(feature = "__test_data")]

use std::path::PathBuf;

use super::test_cases::check_segments;
use super::{Columns, Model, Search, Segmenter};

#[test]
fn test_data() {
    let model = model(crate_data_dir());
    crate::test_cases::run(&Segmenter::new(&model));
}

#[test]
fn bounded_window() {
    let model = model(crate_data_dir());
    let words = &["the", "quick", "brown", "fox"];
    let mut search = Search::default();
    assert!(check_segments(words, &mut search, &Segmenter::new(&model)));

    // Words longer than the limit can't be found
    let segmenter = Segmenter::new(&model).with_limit(3);
    assert!(!check_segments(words, &mut search, &segmenter));
    assert!(check_segments(&["the", "fox"], &mut search, &segmenter));
}

pub fn model(dir: PathBuf) -> Model {
    let uni_file = dir.join("en-unigrams.txt");
    let mut model = Model::new();
    model
        .load_dictionary(&uni_file, Columns::default())
        .unwrap_or_else(|e| panic!("error loading {:?}: {}", uni_file, e));
    model
}

pub fn crate_data_dir() -> PathBuf {
    PathBuf::from(format!("{}/data", env!("CARGO_MANIFEST_DIR")))
}
