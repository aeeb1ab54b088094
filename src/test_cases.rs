use crate::{Search, Segmenter};

/// Run a segmenter against the built-in test cases
pub fn run(segmenter: &Segmenter<'_>) {
    let mut search = Search::default();
    {
        let result = segmenter.segment("", &mut search).unwrap();
        assert_eq!(result.text(), "");
        assert_eq!(result.score(), 0.0);
    }

    let mut success = true;
    for test in TEST_CASES.iter().copied() {
        success &= assert_segments(test, &mut search, segmenter);
    }

    assert!(success);
}

pub fn assert_segments(s: &[&str], search: &mut Search, segmenter: &Segmenter<'_>) -> bool {
    let result = segmenter.segment(&s.join(""), search).unwrap();
    let cmp = result.text().split(' ').collect::<Vec<_>>();
    let success = cmp == s;
    if !success {
        println!("expected: {:?}", s);
        println!("actual:   {:?}\n", cmp);
    }
    success
}

pub fn check_segments(s: &[&str], search: &mut Search, segmenter: &Segmenter<'_>) -> bool {
    match segmenter.segment(&s.join(""), search) {
        Ok(result) => s == result.text().split(' ').collect::<Vec<_>>(),
        Err(_) => false,
    }
}

/// Built-in test cases, segmented correctly by the bundled dictionary
pub const TEST_CASES: &[&[&str]] = &[
    &["choose", "spain"],
    &["this", "is", "a", "test"],
    &["now", "is", "the", "time", "for", "all", "good"],
    &[
        "the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog",
    ],
    &[
        "it", "was", "a", "bright", "cold", "day", "in", "april", "and", "the", "clocks", "were",
        "striking", "thirteen",
    ],
];
