#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use trump_ir::{Expression, InfixOp, LetKeyword, Statement};

use super::*;

fn parse_ok(source: &str) -> Program {
    let out = parse(source);
    assert!(
        !out.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        out.all_errors().map(ToString::to_string).collect::<Vec<_>>()
    );
    out.program
}

fn printed(source: &str) -> String {
    parse_ok(source).to_string()
}

#[test]
fn operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b);"),
        ("!-a", "(!(-a));"),
        ("a + b + c", "((a + b) + c);"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f);"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4));"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4);"),
        ("-(5 + 5)", "(-(5 + 5));"),
        ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d);"),
        (
            "add(a * b[2], b[1], 2 * [1, 2][1])",
            "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])));",
        ),
        ("a <= b != b >= c", "((a <= b) != (b >= c));"),
    ];
    for (source, expected) in cases {
        assert_eq!(printed(source), expected, "source: {source}");
    }
}

#[test]
fn declarations_with_both_keywords() {
    let program = parse_ok("YUGE x = 5; TREMENDOUS y = WINNING");
    assert_eq!(
        program.statements,
        vec![
            Statement::Let {
                keyword: LetKeyword::Yuge,
                name: "x".into(),
                value: Expression::Integer(5),
            },
            Statement::Let {
                keyword: LetKeyword::Tremendous,
                name: "y".into(),
                value: Expression::Boolean(true),
            },
        ]
    );
}

#[test]
fn assignment_statement() {
    let program = parse_ok("x = x + 1");
    assert_eq!(
        program.statements,
        vec![Statement::Assign {
            name: "x".into(),
            value: Expression::infix(
                Expression::Identifier("x".into()),
                InfixOp::Add,
                Expression::Integer(1)
            ),
        }]
    );
}

#[test]
fn output_and_return_statements() {
    assert_eq!(
        printed("TWEET \"hi\"\nRALLY 1\nEXECUTIVE_ORDER x; RETURN 2"),
        "TWEET \"hi\";\nRALLY 1;\nEXECUTIVE_ORDER x;\nRETURN 2;"
    );
}

#[test]
fn conditionals_with_and_without_else() {
    assert_eq!(
        printed("BUILD WALL IF (x > 5) { TWEET x } ELSE { TWEET 0 }"),
        "BUILD WALL IF ((x > 5)) { TWEET x; } ELSE { TWEET 0; }"
    );
    let program = parse_ok("BUILD WALL IF (x) { }");
    assert!(matches!(
        &program.statements[0],
        Statement::If { alternative: None, .. }
    ));
}

#[test]
fn while_loop() {
    assert_eq!(
        printed("MAKE DEALS WHILE (i < 10) { i = i + 1; }"),
        "MAKE DEALS WHILE ((i < 10)) { i = (i + 1); }"
    );
}

#[test]
fn for_loop_accepts_declaration_init() {
    let program = parse_ok("MAKE AMERICA GREAT AGAIN FOR (YUGE i = 0; i < 3; i = i + 1) { TWEET i; }");
    let Statement::For(for_loop) = &program.statements[0] else {
        panic!("expected a for loop, got {:?}", program.statements[0]);
    };
    assert!(for_loop.init.is_some());
    assert!(for_loop.condition.is_some());
    assert!(for_loop.update.is_some());
    assert_eq!(for_loop.body.statements.len(), 1);
}

#[test]
fn for_loop_clauses_may_be_empty() {
    let program = parse_ok("MAKE AMERICA GREAT AGAIN FOR (; ; ) { }");
    let Statement::For(for_loop) = &program.statements[0] else {
        panic!("expected a for loop");
    };
    assert!(for_loop.init.is_none());
    assert!(for_loop.condition.is_none());
    assert!(for_loop.update.is_none());
}

#[test]
fn function_literals_and_ratings() {
    assert_eq!(
        printed("YUGE add = FUNCTION(a, b) { RETURN a + b; }"),
        "YUGE add = FUNCTION(a, b) { RETURN (a + b); };"
    );
    assert_eq!(
        printed("FUNCTION() RATED 10/10 { 1 }"),
        "FUNCTION() RATED 10/10 { 1; };"
    );
    assert_eq!(
        printed("FUNCTION(x) RATED \"THE BEST\" { x }"),
        "FUNCTION(x) RATED \"THE BEST\" { x; };"
    );
    assert_eq!(printed("FUNCTION(x) RATED 9.5 { x }(3)"), "FUNCTION(x) RATED 9.5 { x; }(3);");
}

#[test]
fn named_function_declaration_is_a_let() {
    let program = parse_ok("YUGE FUNCTION double(n) { RETURN n * 2 }");
    let Statement::Let { name, value, .. } = &program.statements[0] else {
        panic!("expected a declaration");
    };
    assert_eq!(name, "double");
    let Expression::Function(literal) = value else {
        panic!("expected a function literal");
    };
    assert_eq!(literal.name.as_deref(), Some("double"));
    assert_eq!(literal.parameters, vec!["n".to_string()]);
}

#[test]
fn build_call_is_an_expression() {
    assert_eq!(printed("BUILD(1, 2)"), "BUILD(1, 2);");
}

#[test]
fn nested_blocks_are_statements() {
    assert_eq!(printed("{ YUGE a = 1; { a } }"), "{ YUGE a = 1; { a; } }");
}

#[test]
fn missing_name_reports_expected_identifier_once() {
    let out = parse("YUGE = 5;");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].code, ErrorCode::ExpectedIdentifier);
    assert_eq!(
        out.errors[0].to_string(),
        "EXPECTED_IDENTIFIER at 1:6: expected identifier after YUGE, got = instead"
    );
}

#[test]
fn mismatch_reports_at_the_offending_token() {
    let out = parse("YUGE x 5");
    assert_eq!(
        out.errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["UNEXPECTED_TOKEN at 1:8: expected next token to be =, got INT instead".to_string()]
    );
}

#[test]
fn missing_prefix_handler() {
    let out = parse(")");
    assert_eq!(
        out.errors[0].to_string(),
        "UNEXPECTED_TOKEN at 1:1: no prefix parse function for ) found"
    );
    assert!(out.program.is_empty());
}

#[test]
fn integer_overflow_is_reported() {
    let out = parse("99999999999999999999");
    assert_eq!(out.errors.len(), 1);
    assert!(out.errors[0].message.contains("as integer"));
}

#[test]
fn bad_parameter_is_expected_identifier() {
    let out = parse("FUNCTION(1) { }");
    assert_eq!(out.errors[0].code, ErrorCode::ExpectedIdentifier);
}

#[test]
fn unclosed_block_is_reported() {
    let out = parse("BUILD WALL IF (x) { TWEET x");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].position, Position::new(1, 19));
}

#[test]
fn lexer_errors_are_kept_separately() {
    let out = parse("YUGE s = \"open");
    assert!(out.errors.is_empty());
    assert_eq!(out.lex_errors.len(), 1);
    assert!(out.has_errors());
}

#[test]
fn comments_are_counted_through_the_parser() {
    let out = parse("// one\nFAKE NEWS: two\nYUGE x = 1 /* three */");
    assert_eq!(out.comments, 3);
    assert_eq!(out.program.len(), 1);
}

#[test]
fn garbage_input_terminates() {
    let out = parse("} ) ] , ; = = YUGE YUGE MAKE MAKE BUILD WALL ( ( [ [ @ #");
    assert!(out.has_errors());
}

#[test]
fn printed_program_reparses_to_same_shape() {
    let source = r#"
        YUGE x = 5;
        TREMENDOUS name = "Donald";
        YUGE FUNCTION greet(who) RATED 10/10 {
            RETURN "Hello, " + who;
        }
        BUILD WALL IF (x >= 5) { TWEET greet(name); } ELSE { RALLY "sad"; }
        MAKE DEALS WHILE (x > 0) { x = x - 1; }
        MAKE AMERICA GREAT AGAIN FOR (YUGE i = 0; i < 3; i = i + 1) { TWEET [i, -i][0]; }
        EXECUTIVE_ORDER !WINNING
        len([1, 2.50, "three"])
    "#;
    let first = parse_ok(source);
    let text = first.to_string();
    let second = parse_ok(&text);
    assert_eq!(first.len(), 8);
    assert_eq!(second.len(), first.len());
    assert_eq!(second.to_string(), text);
}

#[test]
fn grouped_build_survives_printing() {
    let first = parse_ok("(BUILD); TWEET BUILD; BUILD(1);");
    let text = first.to_string();
    assert_eq!(text, "(BUILD);\nTWEET BUILD;\nBUILD(1);");
    let second = parse_ok(&text);
    assert_eq!(second, first);
}

#[test]
fn recovery_steps_over_a_closed_inner_block() {
    let out = parse("BUILD WALL IF (x) { [FUNCTION() { 1 } 2]; TWEET 1; } TWEET 2;");
    assert_eq!(out.errors.len(), 1, "{:?}", out.errors);
    assert_eq!(out.program.len(), 2);
    let Statement::If { consequence, .. } = &out.program.statements[0] else {
        panic!("expected an if, got {:?}", out.program.statements[0]);
    };
    assert_eq!(
        consequence.statements,
        vec![Statement::Tweet(Expression::Integer(1))]
    );
    assert_eq!(
        out.program.statements[1],
        Statement::Tweet(Expression::Integer(2))
    );
}

#[test]
fn recovery_at_top_level_after_inner_block() {
    let out = parse("len(FUNCTION(a) { RETURN a; } 3); TWEET 4;");
    assert_eq!(out.errors.len(), 1, "{:?}", out.errors);
    assert_eq!(
        out.program.statements,
        vec![Statement::Tweet(Expression::Integer(4))]
    );
}

#[test]
fn parser_reports_its_own_errors() {
    let mut parser = Parser::new(trump_lexer::Lexer::new("YUGE = 1;"));
    let program = parser.parse_program();
    assert!(program.is_empty());
    assert_eq!(parser.errors().len(), 1);
    assert_eq!(
        parser.error_messages(),
        vec!["EXPECTED_IDENTIFIER at 1:6: expected identifier after YUGE, got = instead".to_string()]
    );
}

mod properties {
    use super::super::parse;
    use proptest::prelude::*;

    fn atom() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(vec!["x", "y", "len", "TREMENDOUS_SORT", "AMERICA_FIRST"])
                .prop_map(String::from),
            (0u32..1000).prop_map(|n| n.to_string()),
            (0u32..100, 0u32..100).prop_map(|(whole, frac)| format!("{whole}.{frac}")),
            "[a-z ]{0,8}".prop_map(|s| format!("\"{s}\"")),
            Just("WINNING".to_string()),
            Just("LOSER".to_string()),
            Just("(BUILD)".to_string()),
        ]
    }

    fn expression() -> impl Strategy<Value = String> {
        atom().prop_recursive(4, 32, 3, |inner| {
            let operator = prop::sample::select(vec!["+", "-", "*", "/", "==", "!=", "<", ">"]);
            let callee =
                prop::sample::select(vec!["len", "TREMENDOUS_SORT", "AMERICA_FIRST", "BUILD", "f"]);
            prop_oneof![
                inner.clone().prop_map(|e| format!("({e})")),
                inner.clone().prop_map(|e| format!("-{e}")),
                inner.clone().prop_map(|e| format!("!{e}")),
                (inner.clone(), operator, inner.clone())
                    .prop_map(|(l, op, r)| format!("({l} {op} {r})")),
                prop::collection::vec(inner.clone(), 0..3)
                    .prop_map(|items| format!("[{}]", items.join(", "))),
                (inner.clone(), inner.clone()).prop_map(|(l, i)| format!("{l}[{i}]")),
                (callee, prop::collection::vec(inner.clone(), 0..3))
                    .prop_map(|(f, args)| format!("{f}({})", args.join(", "))),
                inner.prop_map(|e| format!("FUNCTION(a, b) {{ RETURN {e}; }}")),
            ]
        })
    }

    fn simple_statement() -> impl Strategy<Value = String> {
        prop_oneof![
            expression().prop_map(|e| format!("YUGE x = {e};")),
            expression().prop_map(|e| format!("TREMENDOUS y = {e};")),
            expression().prop_map(|e| format!("x = {e};")),
            expression().prop_map(|e| format!("TWEET {e};")),
            expression().prop_map(|e| format!("RALLY {e};")),
            expression().prop_map(|e| format!("EXECUTIVE_ORDER {e};")),
            expression().prop_map(|e| format!("RETURN {e};")),
            expression().prop_map(|e| format!("{e};")),
        ]
    }

    fn statement() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => simple_statement(),
            1 => (expression(), simple_statement(), prop::option::of(simple_statement()))
                .prop_map(|(c, then, other)| match other {
                    Some(other) => format!("BUILD WALL IF ({c}) {{ {then} }} ELSE {{ {other} }}"),
                    None => format!("BUILD WALL IF ({c}) {{ {then} }}"),
                }),
            1 => (expression(), simple_statement())
                .prop_map(|(c, body)| format!("MAKE DEALS WHILE ({c}) {{ {body} }}")),
        ]
    }

    proptest! {
        #[test]
        fn printed_programs_reparse_identically(
            statements in prop::collection::vec(statement(), 1..6)
        ) {
            let source = statements.join("\n");
            let first = parse(&source);
            prop_assert!(!first.has_errors(), "{source}: {:?}", first.errors);

            let text = first.program.to_string();
            let second = parse(&text);
            prop_assert!(!second.has_errors(), "{text}: {:?}", second.errors);
            prop_assert_eq!(second.program.len(), first.program.len());
            prop_assert_eq!(&second.program, &first.program);
            prop_assert_eq!(second.program.to_string(), text);
        }
    }
}
