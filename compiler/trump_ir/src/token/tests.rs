use super::*;

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(TokenKind::keyword("YUGE"), Some(TokenKind::Yuge));
    assert_eq!(TokenKind::keyword("yuge"), None);
    assert_eq!(TokenKind::keyword("Yuge"), None);
}

#[test]
fn every_keyword_round_trips_through_its_spelling() {
    for &kind in TokenKind::KEYWORDS {
        assert_eq!(TokenKind::keyword(kind.as_str()), Some(kind));
        assert!(kind.is_keyword());
    }
}

#[test]
fn underscore_keywords_resolve() {
    assert_eq!(
        TokenKind::keyword("EXECUTIVE_ORDER"),
        Some(TokenKind::ExecutiveOrder)
    );
    assert_eq!(TokenKind::keyword("FAKE_NEWS"), Some(TokenKind::FakeNews));
    assert_eq!(TokenKind::keyword("FAKE"), None);
}

#[test]
fn operator_kinds_display_as_symbols() {
    assert_eq!(TokenKind::LtEq.to_string(), "<=");
    assert_eq!(TokenKind::Assign.to_string(), "=");
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
}

#[test]
fn literal_classification() {
    assert!(TokenKind::Int.is_literal());
    assert!(TokenKind::Winning.is_literal());
    assert!(!TokenKind::Ident.is_literal());
    assert!(!TokenKind::Plus.is_keyword());
}

#[test]
fn token_position_reports_line_and_column() {
    let tok = Token::new(TokenKind::Ident, "x", Position::new(3, 7));
    assert_eq!(tok.position().to_string(), "3:7");
    assert!(tok.is(TokenKind::Ident));
}
