use super::*;
use proptest::prelude::*;

#[test]
fn test_max_chars() {
    assert_eq!(max_chars(100.0, 6.0), 16);
    assert_eq!(max_chars(3.0, 6.0), 1);
    assert_eq!(max_chars(-20.0, 6.0), 1);
    assert_eq!(max_chars(f64::NAN, 6.0), 1);
    assert_eq!(max_chars(10.0, 0.0), 1);
}

#[test]
fn test_wrap_greedy() {
    assert_eq!(wrap_label("Design the API", 10), vec!["Design the", "API"]);
    assert_eq!(wrap_label("short", 10), vec!["short"]);
}

#[test]
fn test_wrap_collapses_whitespace() {
    assert_eq!(wrap_label("  a   b  ", 10), vec!["a b"]);
}

#[test]
fn test_wrap_empty() {
    assert!(wrap_label("", 5).is_empty());
    assert!(wrap_label("   ", 5).is_empty());
}

#[test]
fn test_wrap_splits_only_oversized_words() {
    assert_eq!(wrap_label("ab abcdefgh", 5), vec!["ab", "abcde", "fgh"]);
    assert_eq!(
        wrap_label("abcdefghij xy", 4),
        vec!["abcd", "efgh", "ij", "xy"]
    );
}

#[test]
fn test_wrap_tail_of_split_word_takes_next_word() {
    assert_eq!(wrap_label("abcdefg h", 5), vec!["abcde", "fg h"]);
}

#[test]
fn test_wrap_counts_chars_not_bytes() {
    assert_eq!(wrap_label("éé éé", 5), vec!["éé éé"]);
}

#[test]
fn test_first_baseline() {
    assert_eq!(first_baseline(100.0, 1, 15.0, 5.0), 105.0);
    assert_eq!(first_baseline(100.0, 3, 15.0, 5.0), 90.0);
    assert_eq!(first_baseline(100.0, 0, 15.0, 5.0), 105.0);
}

proptest! {
    #[test]
    fn prop_wrap_keeps_words_that_fit(
        words in prop::collection::vec("[a-z]{1,8}", 0..12),
        budget in 8usize..30,
    ) {
        let text = words.join(" ");
        let lines = wrap_label(&text, budget);
        for line in &lines {
            prop_assert!(line.chars().count() <= budget);
        }
        let rejoined: Vec<String> = lines
            .iter()
            .flat_map(|l| l.split(' ').map(str::to_string))
            .collect();
        prop_assert_eq!(rejoined, words);
    }
}
