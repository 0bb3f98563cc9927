// crates/engine/tests/dedup_order.rs
use stream_ops_engine::dedup_chars;

#[test]
fn reference_input() {
    assert_eq!(dedup_chars("dabaafde"), "dabfe");
}

#[test]
fn empty_and_single() {
    assert_eq!(dedup_chars(""), "");
    assert_eq!(dedup_chars("x"), "x");
}

#[test]
fn all_same_character() {
    assert_eq!(dedup_chars("aaaa"), "a");
}

#[test]
fn whitespace_is_a_character_too() {
    assert_eq!(dedup_chars("a a b b"), "a b");
}

#[test]
fn idempotent() {
    let once = dedup_chars("mississippi");
    assert_eq!(dedup_chars(&once), once);
}
