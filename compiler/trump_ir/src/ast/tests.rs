use pretty_assertions::assert_eq;

use super::*;

fn ident(name: &str) -> Expression {
    Expression::Identifier(name.to_string())
}

#[test]
fn let_statement_prints_with_terminator() {
    let stmt = Statement::Let {
        keyword: LetKeyword::Tremendous,
        name: "x".into(),
        value: Expression::infix(Expression::Integer(1), InfixOp::Add, Expression::Integer(2)),
    };
    assert_eq!(stmt.to_string(), "TREMENDOUS x = (1 + 2);");
}

#[test]
fn compound_statements_print_without_terminator() {
    let stmt = Statement::If {
        condition: Expression::Boolean(true),
        consequence: Block::new(vec![Statement::Tweet(Expression::String("yes".into()))]),
        alternative: Some(Block::default()),
    };
    assert_eq!(
        stmt.to_string(),
        "BUILD WALL IF (WINNING) { TWEET \"yes\"; } ELSE { }"
    );
    assert!(stmt.is_compound());
}

#[test]
fn bare_build_statement_is_grouped() {
    assert_eq!(Statement::Expression(ident("BUILD")).to_string(), "(BUILD);");
    assert_eq!(Statement::Expression(ident("x")).to_string(), "x;");
    let call = Expression::call(ident("BUILD"), vec![]);
    assert_eq!(Statement::Expression(call).to_string(), "BUILD();");
}

#[test]
fn for_header_omits_inner_terminators() {
    let stmt = Statement::For(Box::new(ForLoop {
        init: Some(Statement::Let {
            keyword: LetKeyword::Yuge,
            name: "i".into(),
            value: Expression::Integer(0),
        }),
        condition: Some(Expression::infix(ident("i"), InfixOp::Lt, Expression::Integer(3))),
        update: Some(Statement::Assign {
            name: "i".into(),
            value: Expression::infix(ident("i"), InfixOp::Add, Expression::Integer(1)),
        }),
        body: Block::new(vec![Statement::Tweet(ident("i"))]),
    }));
    assert_eq!(
        stmt.to_string(),
        "MAKE AMERICA GREAT AGAIN FOR (YUGE i = 0; (i < 3); i = (i + 1)) { TWEET i; }"
    );
}

#[test]
fn function_literal_keeps_rating_text() {
    let literal = FunctionLiteral {
        name: None,
        parameters: vec!["a".into(), "b".into()],
        rating: Some(Rating::new("\"BEST\"")),
        body: Block::new(vec![Statement::Return(Expression::infix(
            ident("a"),
            InfixOp::Mul,
            ident("b"),
        ))]),
    };
    assert_eq!(
        Expression::function(literal).to_string(),
        "FUNCTION(a, b) RATED \"BEST\" { RETURN (a * b); }"
    );
}

#[test]
fn floats_print_their_source_text() {
    let expr = Expression::Float {
        value: 1.5,
        literal: "1.50".into(),
    };
    assert_eq!(expr.to_string(), "1.50");
}

#[test]
fn calls_indexes_and_arrays() {
    let expr = Expression::index(
        Expression::call(ident("push"), vec![Expression::Array(vec![]), Expression::Integer(45)]),
        Expression::prefix(PrefixOp::Neg, Expression::Integer(1)),
    );
    assert_eq!(expr.to_string(), "(push([], 45)[(-1)])");
}

#[test]
fn program_separates_statements_with_newlines() {
    let program = Program::new(vec![
        Statement::Expression(Expression::Boolean(false)),
        Statement::While {
            condition: Expression::Boolean(false),
            body: Block::default(),
        },
        Statement::Rally(ident("x")),
    ]);
    assert_eq!(
        program.to_string(),
        "LOSER;\nMAKE DEALS WHILE (LOSER) { }\nRALLY x;"
    );
    assert_eq!(program.len(), 3);
}
