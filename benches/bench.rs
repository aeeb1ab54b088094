#![cfg(feature = "__test_data")]

use bencher::{benchmark_group, benchmark_main, Bencher};

use triangular_segment::test_data::{crate_data_dir, model};
use triangular_segment::{Search, Segmenter};

benchmark_group!(benches, short, long, bounded, unknown);
benchmark_main!(benches);

fn short(bench: &mut Bencher) {
    let model = model(crate_data_dir());
    let segmenter = Segmenter::new(&model);
    let mut search = Search::default();
    bench.iter(|| {
        let _ = segmenter.segment("thisisatest", &mut search);
    });
}

fn long(bench: &mut Bencher) {
    let model = model(crate_data_dir());
    let segmenter = Segmenter::new(&model);
    let mut search = Search::default();
    bench.iter(|| {
        let _ = segmenter.segment(
            "itwasabrightcolddayinaprilandtheclockswerestrikingthirteen",
            &mut search,
        );
    });
}

fn bounded(bench: &mut Bencher) {
    let model = model(crate_data_dir());
    let segmenter = Segmenter::new(&model).with_limit(4);
    let mut search = Search::default();
    bench.iter(|| {
        let _ = segmenter.segment(
            "itwasabrightcolddayinaprilandtheclockswerestrikingthirteen",
            &mut search,
        );
    });
}

fn unknown(bench: &mut Bencher) {
    let model = model(crate_data_dir());
    let segmenter = Segmenter::new(&model).with_limit(64);
    let input = "zqxjvkwpyb".repeat(50);
    let mut search = Search::default();
    bench.iter(|| {
        let _ = segmenter.segment(&input, &mut search);
    });
}
