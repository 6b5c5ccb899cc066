use super::*;

#[test]
fn newline_resets_column() {
    let mut cursor = Cursor::new("ab\ncd");
    assert_eq!(cursor.position(), Position::new(1, 1));
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.position(), Position::new(1, 3));
    assert_eq!(cursor.bump(), Some('\n'));
    assert_eq!(cursor.position(), Position::new(2, 1));
    assert_eq!(cursor.current(), Some('c'));
}

#[test]
fn columns_count_characters_not_bytes() {
    let mut cursor = Cursor::new("🐦x");
    cursor.bump();
    assert_eq!(cursor.current(), Some('x'));
    assert_eq!(cursor.position().column, 2);
}

#[test]
fn restore_rewinds_offset_and_position() {
    let mut cursor = Cursor::new("FAKE\n NEWS");
    let saved = cursor.snapshot();
    let word = cursor.eat_while(|c| c != 'N');
    assert_eq!(word, "FAKE\n ");
    assert_eq!(cursor.position(), Position::new(2, 2));
    cursor.restore(saved);
    assert_eq!(cursor.position(), Position::new(1, 1));
    assert_eq!(cursor.current(), Some('F'));
}

#[test]
fn bump_at_end_is_none() {
    let mut cursor = Cursor::new("");
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.bump(), None);
    assert_eq!(cursor.peek(), None);
}
