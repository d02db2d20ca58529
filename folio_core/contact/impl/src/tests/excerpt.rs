use pretty_assertions::assert_eq;

use crate::excerpt;

#[test]
fn short_text_is_unchanged() {
    assert_eq!(excerpt("Hello there", 100), "Hello there");
    assert_eq!(excerpt(&"a".repeat(100), 100), "a".repeat(100));
}

#[test]
fn long_text_is_truncated() {
    let text = format!("{}{}", "a".repeat(100), "b".repeat(50));
    assert_eq!(excerpt(&text, 100), format!("{}...", "a".repeat(100)));
}

#[test]
fn counts_characters() {
    let text = "é".repeat(101);
    assert_eq!(excerpt(&text, 100), format!("{}...", "é".repeat(100)));
}
