use pretty_assertions::assert_eq;

use super::*;

#[test]
fn display_has_code_position_and_message() {
    let err = SyntaxError::new(
        ErrorCode::UnterminatedString,
        Position::new(4, 12),
        "Unterminated string",
    );
    assert_eq!(err.to_string(), "UNTERMINATED_STRING at 4:12: Unterminated string");
    assert_eq!((err.line(), err.column()), (4, 12));
}
