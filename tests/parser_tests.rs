// tests/parser_tests.rs

use trove_query::ast::{Expr, Operator, OperatorKind, Token, TokenKind};
use trove_query::lexer::lex;
use trove_query::parser::{parse, ParseError, Parser};

fn parse_str(input: &str) -> Expr {
    parse(lex(input)).unwrap()
}

fn word(s: &str) -> Expr {
    Expr::Word(s.to_string())
}

fn num(s: &str) -> Expr {
    Expr::Number(s.to_string())
}

fn string(s: &str) -> Expr {
    Expr::String(s.to_string())
}

fn title_like(term: &str) -> Expr {
    Expr::binary(word("en_title"), OperatorKind::Similar, string(term))
}

// ============================================================================
// Fallback
// ============================================================================

#[test]
fn test_bare_word_falls_back_to_title() {
    assert_eq!(parse_str("bebop"), title_like("bebop"));
}

#[test]
fn test_quoted_string_falls_back_to_title() {
    assert_eq!(parse_str(r#""spirited away""#), title_like("spirited away"));
}

#[test]
fn test_number_and_preserved_fall_back() {
    assert_eq!(parse_str("1984"), title_like("1984"));
    assert_eq!(parse_str("{a b}"), title_like("a b"));
}

#[test]
fn test_fallback_uses_configured_field() {
    let mut parser = Parser::with_fallback_field(lex("dune"), "original_title");
    assert_eq!(
        parser.parse().unwrap(),
        Expr::binary(word("original_title"), OperatorKind::Similar, string("dune"))
    );
}

#[test]
fn test_empty_input_falls_back_to_empty_term() {
    assert_eq!(parse_str(""), title_like(""));
    assert_eq!(parse_str("   "), title_like(""));
}

#[test]
fn test_fallback_not_used_when_tokens_follow() {
    // the stray word after the first comparison is skipped
    assert_eq!(parse_str("a b"), word("a"));
}

#[test]
fn test_group_never_falls_back() {
    assert_eq!(parse_str("( foo )"), word("foo"));
}

#[test]
fn test_fallback_inside_group_at_end_of_input() {
    assert_eq!(parse_str("( foo"), title_like("foo"));
}

// ============================================================================
// Atom Lists
// ============================================================================

#[test]
fn test_single_atom_is_not_a_list() {
    let expr = parse_str("year = 2000");
    assert_eq!(expr, Expr::binary(word("year"), OperatorKind::Eq, num("2000")));
}

#[test]
fn test_colon_list() {
    assert_eq!(parse_str("1:2:3"), Expr::List(vec![num("1"), num("2"), num("3")]));
    assert_eq!(parse_str("a : b : c"), Expr::List(vec![word("a"), word("b"), word("c")]));
}

#[test]
fn test_trailing_colon_forces_list() {
    assert_eq!(parse_str("1:"), Expr::List(vec![num("1")]));
    assert_eq!(parse_str("a :"), Expr::List(vec![word("a")]));
}

#[test]
fn test_trailing_colon_before_operator() {
    let expr = parse_str("kind ^ 1: & b = 2");
    assert_eq!(
        expr,
        Expr::binary(
            Expr::binary(word("kind"), OperatorKind::In, Expr::List(vec![num("1")])),
            OperatorKind::And,
            Expr::binary(word("b"), OperatorKind::Eq, num("2")),
        )
    );
}

#[test]
fn test_empty_group_in_list_ends_the_list() {
    // "()" is consumed but yields no atom, so it acts as a trailing colon and
    // the rest of the list is skipped
    assert_eq!(parse_str("1:():2"), Expr::List(vec![num("1")]));
}

#[test]
fn test_list_of_mixed_atoms() {
    let expr = parse_str(r#"kind ^ "book":2:{x}"#);
    assert_eq!(
        expr,
        Expr::binary(
            word("kind"),
            OperatorKind::In,
            Expr::List(vec![string("book"), num("2"), word("x")]),
        )
    );
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_comparison_operators() {
    let test_cases = vec![
        ("year < 2000", OperatorKind::Lt),
        ("year > 2000", OperatorKind::Gt),
        ("year = 2000", OperatorKind::Eq),
        ("year ~ 2000", OperatorKind::Similar),
        ("year ^ 2000", OperatorKind::In),
    ];

    for (input, op) in test_cases {
        assert_eq!(
            parse_str(input),
            Expr::binary(word("year"), op, num("2000")),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_double_equals() {
    assert_eq!(parse_str("x==y"), Expr::binary(word("x"), OperatorKind::Eq, word("y")));
}

#[test]
fn test_long_form_missed_after_field() {
    // the second character of the input is '<', so "<=" splits into '<' and '='
    // and the dangling '<' is dropped
    assert_eq!(parse_str("a<=b"), word("a"));
}

#[test]
fn test_comparison_chain_is_left_associative() {
    let expr = parse_str("a = b = c");
    assert_eq!(
        expr,
        Expr::binary(
            Expr::binary(word("a"), OperatorKind::Eq, word("b")),
            OperatorKind::Eq,
            word("c"),
        )
    );
}

#[test]
fn test_comparison_missing_right_operand_is_dropped() {
    assert_eq!(parse_str("year >"), word("year"));
    assert_eq!(parse_str("year > & b = 1"), Expr::binary(
        word("year"),
        OperatorKind::And,
        Expr::binary(word("b"), OperatorKind::Eq, num("1")),
    ));
}

#[test]
fn test_parser_never_sets_negate() {
    match &parse_str("a = 1 | b ~ 2") {
        Expr::Binary { op, left, right } => {
            assert_eq!(*op, Operator::new(OperatorKind::Or));
            assert!(matches!(**left, Expr::Binary { op: Operator { negate: false, .. }, .. }));
            assert!(matches!(**right, Expr::Binary { op: Operator { negate: false, .. }, .. }));
        }
        other => panic!("Expected binary expression, got {:?}", other),
    }
}

// ============================================================================
// Logic and Grouping
// ============================================================================

#[test]
fn test_grouped_and() {
    let expr = parse_str(r#"(title = "X") & (year > 2000)"#);
    assert_eq!(
        expr,
        Expr::binary(
            Expr::binary(word("title"), OperatorKind::Eq, string("X")),
            OperatorKind::And,
            Expr::binary(word("year"), OperatorKind::Gt, num("2000")),
        )
    );
}

#[test]
fn test_logic_chain_is_left_associative() {
    let expr = parse_str("a = 1 & b = 2 | c = 3");
    let a = Expr::binary(word("a"), OperatorKind::Eq, num("1"));
    let b = Expr::binary(word("b"), OperatorKind::Eq, num("2"));
    let c = Expr::binary(word("c"), OperatorKind::Eq, num("3"));
    assert_eq!(
        expr,
        Expr::binary(Expr::binary(a, OperatorKind::And, b), OperatorKind::Or, c)
    );
}

#[test]
fn test_parentheses_override_grouping() {
    let expr = parse_str("a = 1 & ( b = 2 | c = 3 )");
    let a = Expr::binary(word("a"), OperatorKind::Eq, num("1"));
    let b = Expr::binary(word("b"), OperatorKind::Eq, num("2"));
    let c = Expr::binary(word("c"), OperatorKind::Eq, num("3"));
    assert_eq!(
        expr,
        Expr::binary(a, OperatorKind::And, Expr::binary(b, OperatorKind::Or, c))
    );
}

#[test]
fn test_last_term_after_logic_falls_back() {
    assert_eq!(
        parse_str("a = 1 & bebop"),
        Expr::binary(
            Expr::binary(word("a"), OperatorKind::Eq, num("1")),
            OperatorKind::And,
            title_like("bebop"),
        )
    );
}

#[test]
fn test_group_as_comparison_operand() {
    let expr = parse_str("kind ^ ( 1:2 )");
    assert_eq!(
        expr,
        Expr::binary(word("kind"), OperatorKind::In, Expr::List(vec![num("1"), num("2")]))
    );
}

#[test]
fn test_nested_groups() {
    let expr = parse_str("( ( a = 1 ) )");
    assert_eq!(expr, Expr::binary(word("a"), OperatorKind::Eq, num("1")));
}

#[test]
fn test_unclosed_group_is_tolerated() {
    let expr = parse_str("( a = 1 & b = 2");
    assert_eq!(
        expr,
        Expr::binary(
            Expr::binary(word("a"), OperatorKind::Eq, num("1")),
            OperatorKind::And,
            Expr::binary(word("b"), OperatorKind::Eq, num("2")),
        )
    );
}

#[test]
fn test_stray_tokens_are_skipped() {
    assert_eq!(parse_str(") a = 1"), Expr::binary(word("a"), OperatorKind::Eq, num("1")));
    assert_eq!(parse_str("! a = 1"), Expr::binary(word("a"), OperatorKind::Eq, num("1")));
    assert_eq!(parse_str("a = 1 )"), Expr::binary(word("a"), OperatorKind::Eq, num("1")));
}

#[test]
fn test_leading_logic_operator_is_dropped() {
    assert_eq!(parse_str("& a = 1"), Expr::binary(word("a"), OperatorKind::Eq, num("1")));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_operand_after_and() {
    let err = parse(lex("a & ")).unwrap_err();
    assert_eq!(err, ParseError::MissingOperand { operator: "&".to_string() });
    assert_eq!(err.to_string(), "missing right-hand operand after '&'");
}

#[test]
fn test_missing_operand_after_or() {
    let err = parse(lex("a = 1 |")).unwrap_err();
    assert_eq!(err, ParseError::MissingOperand { operator: "|".to_string() });
}

#[test]
fn test_missing_operand_inside_group() {
    let err = parse(lex("( a &")).unwrap_err();
    assert!(matches!(err, ParseError::MissingOperand { ref operator } if operator == "&"));
}

#[test]
fn test_lone_logic_operator_is_an_error() {
    assert!(parse(lex("|")).is_err());
}

#[test]
fn test_hand_built_tokens() {
    let tokens = vec![
        Token::new(TokenKind::Word, "year"),
        Token::new(TokenKind::Ge, ">="),
        Token::new(TokenKind::Number, "2000"),
    ];
    assert_eq!(
        parse(tokens).unwrap(),
        Expr::binary(word("year"), OperatorKind::Ge, num("2000"))
    );
}

// ============================================================================
// Deep Input
// ============================================================================

#[test]
fn test_runaway_open_parens_fall_back() {
    assert_eq!(parse_str(&"(".repeat(10_000)), title_like(""));
}

#[test]
fn test_nesting_past_limit_is_flattened() {
    let query = format!("{}a = 1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(parse_str(&query), Expr::binary(word("a"), OperatorKind::Eq, num("1")));
}

#[test]
fn test_nesting_at_limit_is_parsed() {
    let depth = trove_query::parser::MAX_NESTING;
    let query = format!("{}a = 1{} & b = 2", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(
        parse_str(&query),
        Expr::binary(
            Expr::binary(word("a"), OperatorKind::Eq, num("1")),
            OperatorKind::And,
            Expr::binary(word("b"), OperatorKind::Eq, num("2")),
        )
    );
}

#[test]
fn test_long_logic_chain_parses_and_drops() {
    let query = format!("{}a = 1", "a = 1 & ".repeat(50_000));
    let expr = parse(lex(&query)).unwrap();
    assert!(matches!(
        expr,
        Expr::Binary { op: Operator { kind: OperatorKind::And, .. }, .. }
    ));
    drop(expr);
}
