use std::path::PathBuf;

use triangular_segment::{Columns, Model, Segmenter};

fn main() {
    let path = PathBuf::from(format!("{}/data/en-unigrams.txt", env!("CARGO_MANIFEST_DIR")));
    let mut model = Model::new();
    if let Err(e) = model.load_dictionary(&path, Columns::default()) {
        eprintln!("failed to load dictionary {:?}: {}", path, e);
        return;
    }

    let input = "thequickbrownfoxjumpsoverthelazydog";
    match Segmenter::new(&model).segment_str(input) {
        Ok(result) => {
            println!("input:  {}", input);
            println!("output: {}", result);
            println!("score:  {}", result.score());
        }
        Err(e) => eprintln!("error: {}", e),
    }
}
