//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Assignments and expression statements
//! - Operator precedence
//! - Calls and arrow functions
//! - If expressions and blocks
//! - Error reporting

use crate::{
    ast::{
        ast::{Expr, ExprType, ExprWrapper, Program, Stmt, StmtType},
        expressions::{
            ArrowFunctionExpr, CallExpr, FloatExpr, IfAlternative, IfExpr, IntegerExpr,
            SymbolExpr,
        },
        statements::{AssignStmt, ExpressionStmt},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    Span,
};

use super::parser::{parse, MAX_NESTING_DEPTH};

fn expression_of(program: &Program, index: usize) -> &ExprWrapper {
    &program.statements[index]
        .as_any()
        .downcast_ref::<ExpressionStmt>()
        .expect("expected an expression statement")
        .expression
}

#[test]
fn test_parse_assign_stmt() {
    let program = parse("a = 2").unwrap();
    assert_eq!(program.statements.len(), 1);

    let stmt = program.statements[0]
        .as_any()
        .downcast_ref::<AssignStmt>()
        .unwrap();

    assert_eq!(stmt.name.value, "a");
    assert_eq!(stmt.token.kind, TokenKind::Assignment);
    assert_eq!(stmt.value.get_expr_type(), ExprType::Integer);
    assert_eq!(stmt.span, Span::new(0, 5));
}

#[test]
fn test_parse_integer_and_float_literals() {
    let program = parse("42\n5.4321").unwrap();
    assert_eq!(program.statements.len(), 2);

    let int = expression_of(&program, 0)
        .as_any()
        .downcast_ref::<IntegerExpr>()
        .unwrap();
    assert_eq!(int.value, 42);

    let float = expression_of(&program, 1)
        .as_any()
        .downcast_ref::<FloatExpr>()
        .unwrap();
    assert_eq!(float.value, 5.4321);
    assert_eq!(float.token.span, Span::new(3, 9));
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("1 + (2 + 3) * 4", "(1 + ((2 + 3) * 4))"),
        ("a = true || 1 == 2 && false", "a = ((true || (1 == 2)) && false)"),
        (
            "!a <= -b != c < d > e >= f",
            "(((!a) <= (-b)) != (((c < d) > e) >= f))",
        ),
        ("a = b == c && d", "a = ((b == c) && d)"),
        ("-a * b", "((-a) * b)"),
        ("a + b - c", "((a + b) - c)"),
        ("a + b * c - d / e", "((a + (b * c)) - (d / e))"),
        ("!(true == false)", "(!(true == false))"),
    ];

    for (source, expected) in cases {
        let program = parse(source).unwrap();
        assert_eq!(program.to_string(), expected, "source: {}", source);
    }
}

#[test]
fn test_parse_multiple_statements() {
    let program = parse("a = 1\nb = a + 2;\nb").unwrap();

    assert_eq!(program.statements.len(), 3);
    assert_eq!(program.statements[0].get_stmt_type(), StmtType::AssignStmt);
    assert_eq!(program.statements[1].get_stmt_type(), StmtType::AssignStmt);
    assert_eq!(program.statements[2].get_stmt_type(), StmtType::ExpressionStmt);
    assert_eq!(program.to_string(), "a = 1\nb = (a + 2)\nb");
    assert_eq!(program.get_span(), Some(Span::new(0, 18)));
}

#[test]
fn test_parse_empty_program() {
    for source in ["", "   \n\t "] {
        let program = parse(source).unwrap();
        assert!(program.statements.is_empty());
        assert_eq!(program.get_span(), None);
    }
}

#[test]
fn test_parse_strings() {
    let program = parse("\"hello\" + 'x'").unwrap();
    assert_eq!(program.to_string(), "(\"hello\" + \"x\")");
}

#[test]
fn test_parse_sigils_as_symbols() {
    let program = parse("$src + $var").unwrap();
    assert_eq!(program.to_string(), "($src + $var)");

    let program = parse("$dest").unwrap();
    let symbol = expression_of(&program, 0)
        .as_any()
        .downcast_ref::<SymbolExpr>()
        .unwrap();
    assert_eq!(symbol.value, "$dest");
    assert_eq!(symbol.token.kind, TokenKind::Dest);
}

#[test]
fn test_parse_call_expr() {
    let program = parse("add(1, 2 * 3)").unwrap();
    assert_eq!(program.to_string(), "add(1, (2 * 3))");

    let call = expression_of(&program, 0)
        .as_any()
        .downcast_ref::<CallExpr>()
        .unwrap();
    assert_eq!(call.callee.value, "add");
    assert_eq!(call.arguments.len(), 2);
    assert_eq!(call.close_token.kind, TokenKind::CloseParen);
    assert_eq!(call.span, Span::new(0, 13));
}

#[test]
fn test_parse_call_without_arguments() {
    let program = parse("now()").unwrap();
    let call = expression_of(&program, 0)
        .as_any()
        .downcast_ref::<CallExpr>()
        .unwrap();

    assert!(call.arguments.is_empty());
    assert_eq!(call.span, Span::new(0, 5));
    assert_eq!(program.to_string(), "now()");
}

#[test]
fn test_parse_call_binds_tighter_than_operators() {
    let program = parse("-f(1) + g(2) * 3").unwrap();
    assert_eq!(program.to_string(), "((-f(1)) + (g(2) * 3))");
}

#[test]
fn test_call_missing_close_paren() {
    let error = parse("add(1, 2").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_token().kind, TokenKind::Semicolon);
}

#[test]
fn test_call_requires_identifier_anchors_at_operand() {
    let error = parse("(a + b)(1)").unwrap_err();

    assert_eq!(error.get_token().text, "a");
    assert_eq!(error.get_token().span, Span::new(1, 2));
}

#[test]
fn test_call_requires_identifier() {
    for source in ["(a + b)(1)", "1(2)"] {
        let error = parse(source).unwrap_err();
        assert!(
            matches!(
                error.get_kind(),
                ErrorImpl::ExpectedIdentifier {
                    context: "call expression name",
                    ..
                }
            ),
            "source: {}",
            source
        );
    }
}

#[test]
fn test_parse_arrow_function() {
    let program = parse("x ~> x + 1").unwrap();
    assert_eq!(program.to_string(), "x ~> (x + 1)");

    let arrow = expression_of(&program, 0)
        .as_any()
        .downcast_ref::<ArrowFunctionExpr>()
        .unwrap();
    assert_eq!(arrow.param.value, "x");
    assert_eq!(arrow.body.get_expr_type(), ExprType::Binary);
    assert_eq!(arrow.span, Span::new(0, 10));
}

#[test]
fn test_parse_arrow_function_argument() {
    let program = parse("map(x ~> x * 2, 3)").unwrap();
    assert_eq!(program.to_string(), "map(x ~> (x * 2), 3)");
}

#[test]
fn test_arrow_function_requires_identifier() {
    let error = parse("1 ~> x").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::ExpectedIdentifier {
            context: "arrow function parameter",
            token: String::from("1"),
        }
    );
    // The caret points at the operand, not the operator
    assert_eq!(error.get_token().kind, TokenKind::Int);
    assert_eq!(error.get_position(), (1, 1));
}

#[test]
fn test_parse_if_else() {
    let source = "if a > 1 { b } else { c }";
    let program = parse(source).unwrap();
    assert_eq!(program.to_string(), "if (a > 1) { b } else { c }");

    let if_expr = expression_of(&program, 0)
        .as_any()
        .downcast_ref::<IfExpr>()
        .unwrap();
    assert_eq!(if_expr.consequence.body.len(), 1);
    assert_eq!(if_expr.consequence.span, Span::new(9, 14));
    assert!(matches!(if_expr.alternative, Some(IfAlternative::Block(_))));
    assert_eq!(if_expr.span, Span::new(0, source.len()));
}

#[test]
fn test_parse_else_if_chain() {
    let program = parse("if a { 1 } else if b { 2 } else { 3 }").unwrap();
    assert_eq!(program.to_string(), "if a { 1 } else if b { 2 } else { 3 }");

    let if_expr = expression_of(&program, 0)
        .as_any()
        .downcast_ref::<IfExpr>()
        .unwrap();

    let Some(IfAlternative::ElseIf(else_if)) = &if_expr.alternative else {
        panic!("expected an else-if alternative");
    };
    assert_eq!(else_if.condition.to_string(), "b");
    assert_eq!(else_if.span, Span::new(16, 37));

    let Some(IfAlternative::Block(block)) = &else_if.alternative else {
        panic!("expected a block alternative");
    };
    assert_eq!(block.body.len(), 1);
    assert_eq!(block.span, Span::new(32, 37));
}

#[test]
fn test_parse_if_without_else() {
    let program = parse("if ok { go() }").unwrap();
    let if_expr = expression_of(&program, 0)
        .as_any()
        .downcast_ref::<IfExpr>()
        .unwrap();

    assert!(if_expr.alternative.is_none());
    assert_eq!(if_expr.span, Span::new(0, 14));
}

#[test]
fn test_parse_multiline_block() {
    let source = "if x {\n  y = 1\n  z\n}\n";
    let program = parse(source).unwrap();

    assert_eq!(program.statements.len(), 1);
    let if_expr = expression_of(&program, 0)
        .as_any()
        .downcast_ref::<IfExpr>()
        .unwrap();
    assert_eq!(if_expr.consequence.body.len(), 2);
    assert_eq!(if_expr.consequence.body[0].to_string(), "y = 1");
}

#[test]
fn test_if_expression_as_value() {
    let program = parse("x = if a { 1 } else { 2 }").unwrap();
    assert_eq!(program.to_string(), "x = if a { 1 } else { 2 }");
}

#[test]
fn test_statement_after_if_is_separate() {
    let program = parse("if a { 1 }\n-1").unwrap();

    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.statements[1].to_string(), "(-1)");
}

#[test]
fn test_if_requires_open_curly() {
    let error = parse("if true 1").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            token: String::from("1")
        }
    );
}

#[test]
fn test_else_requires_block_or_if() {
    let error = parse("if a { 1 } else 2").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_token().span, Span::new(16, 17));
}

#[test]
fn test_unterminated_block() {
    let source = "if true { 1";
    let error = parse(source).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnexpectedEof);
    assert_eq!(error.get_token().kind, TokenKind::EOF);
    assert_eq!(error.get_token().span, Span::point(source.len()));
}

#[test]
fn test_illegal_sigil() {
    let error = parse("$madeup").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::IllegalToken {
            token: String::from("$madeup")
        }
    );
    assert_eq!(error.get_position(), (1, 1));
}

#[test]
fn test_illegal_token_position() {
    let error = parse("a = 1\nb = $nope").unwrap_err();

    assert_eq!(error.get_error_name(), "IllegalToken");
    assert_eq!(error.get_position(), (2, 5));
}

#[test]
fn test_illegal_token_after_expression() {
    let error = parse("a @").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::IllegalToken {
            token: String::from("@")
        }
    );
}

#[test]
fn test_unterminated_string() {
    let error = parse("a = \"abc").unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedString { quote: '"' });
    assert_eq!(error.get_token().span, Span::new(4, 8));
}

#[test]
fn test_null_has_no_prefix_parser() {
    let error = parse("null").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::NoPrefixParser {
            kind: TokenKind::Null,
            token: String::from("null")
        }
    );
    assert!(error.to_string().contains("no prefix parser for NULL"));
}

#[test]
fn test_bare_semicolon_is_an_error() {
    let error = parse(";").unwrap_err();
    assert_eq!(error.get_error_name(), "NoPrefixParser");
}

#[test]
fn test_member_access_is_not_parsed() {
    let error = parse("a.b").unwrap_err();

    assert!(matches!(
        error.get_kind(),
        ErrorImpl::NoPrefixParser {
            kind: TokenKind::Dot,
            ..
        }
    ));
}

#[test]
fn test_integer_overflow() {
    let error = parse("99999999999999999999").unwrap_err();
    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_assignment_requires_identifier() {
    for source in ["1 = 2", "$src = 1", "(a) = 1"] {
        let error = parse(source).unwrap_err();
        assert!(
            matches!(
                error.get_kind(),
                ErrorImpl::ExpectedIdentifier {
                    context: "assignment target",
                    ..
                }
            ),
            "source: {}",
            source
        );
    }
}

#[test]
fn test_pipe_heads_produce_no_statement() {
    let program = parse("pipe\n| a").unwrap();

    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "a");
}

#[test]
fn test_composite_spans() {
    let program = parse("foo(1, 2) + 3").unwrap();
    assert_eq!(*expression_of(&program, 0).get_span(), Span::new(0, 13));

    let program = parse("-5").unwrap();
    assert_eq!(*expression_of(&program, 0).get_span(), Span::new(0, 2));

    // Grouping parentheses are not part of the inner node
    let program = parse("(1 + 2)").unwrap();
    assert_eq!(*expression_of(&program, 0).get_span(), Span::new(1, 6));
    assert_eq!(*program.statements[0].get_span(), Span::new(1, 6));
    assert_eq!(program.get_span(), Some(Span::new(1, 6)));
}

#[test]
fn test_value_keyword_does_not_end_line() {
    let program = parse("x = true\n-1").unwrap();

    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "x = (true - 1)");

    let program = parse("a = true\nb = 1").unwrap();
    assert_eq!(program.to_string(), "a = true\nb = 1");
}

#[test]
fn test_deep_nesting_is_an_error() {
    let error = parse(&"(".repeat(100_000)).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );
}

#[test]
fn test_deep_prefix_and_block_nesting_is_an_error() {
    let prefixes = format!("{}1", "-".repeat(100_000));
    assert_eq!(parse(&prefixes).unwrap_err().get_error_name(), "NestingTooDeep");

    let blocks = format!("{}1", "if a { ".repeat(50_000));
    assert_eq!(parse(&blocks).unwrap_err().get_error_name(), "NestingTooDeep");

    let chain = format!("if a {{ 1 }}{}", " else if a { 1 }".repeat(50_000));
    assert_eq!(parse(&chain).unwrap_err().get_error_name(), "NestingTooDeep");
}

#[test]
fn test_nesting_below_limit_parses() {
    let depth = 200;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let program = parse(&source).unwrap();

    assert_eq!(program.to_string(), "1");
}
