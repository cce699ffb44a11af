use decalc::{
    Evaluator, EvalError, Expr, LexError, Token, TokenKind,
    interpreter::lexer::tokens_to_source, parse, tokenize,
};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().into_iter().map(|token| token.kind).collect()
}

fn reprint(source: &str) -> String {
    parse(&tokenize(source).unwrap()).unwrap().to_string()
}

#[test]
fn tokenizes_every_operator() {
    use TokenKind::*;

    assert_eq!(kinds("+ - * / % ^ √ = == != > >= < <= || && , ( )"),
               [Plus, Minus, Star, Slash, Modulo, Exponent, SquareRoot, Assign, Equal,
                NotEqual, Greater, GreaterEqual, Less, LessEqual, LogicalOr, LogicalAnd, Comma,
                LeftParen, RightParen, Eof]);
}

#[test]
fn tokens_carry_text_value_and_offset() {
    let tokens = tokenize("rate_2 >= 1.5e2").unwrap();

    assert_eq!(tokens,
               [Token::new(TokenKind::Identifier, "rate_2", None).at(0),
                Token::new(TokenKind::GreaterEqual, ">=", None).at(7),
                Token::new(TokenKind::Number, "1.5e2", Some(150.0)).at(10),
                Token::eof().at(15)]);
    assert_eq!(tokens[2].to_string(), "(NUMBER, 1.5e2, 150)");
    assert_eq!(tokens[3].to_string(), "(EOF, , None)");
}

#[test]
fn whitespace_is_skipped_but_newlines_are_not() {
    assert_eq!(kinds(" \t1\r+ 2 "), kinds("1+2"));
    assert_eq!(tokenize("1 +\n2"),
               Err(LexError::UnexpectedCharacter { character: '\n',
                                                   position:  3, }));
}

#[test]
fn identifiers_accept_letters_digits_and_underscores() {
    assert_eq!(kinds("_tmp x1 größe"),
               [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("2x"), [TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn tokens_print_back_as_compact_source() {
    let tokens = tokenize("max( a , 2 )  * -b").unwrap();
    assert_eq!(tokens_to_source(&tokens), "max(a,2)*-b");
}

#[test]
fn hand_built_token_lists_parse_without_terminator() {
    let tokens = [Token::new(TokenKind::Identifier, "x", None),
                  Token::new(TokenKind::Star, "*", None),
                  Token::new(TokenKind::Number, "4", Some(4.0))];

    assert_eq!(parse(&tokens).unwrap().to_string(), "x * 4");
}

#[test]
fn pretty_printer_reproduces_formulas() {
    for source in ["x = (1 + 2) * 3",
                   "a = b = 2",
                   "-x ^ 2",
                   "√(a + b)",
                   "max(1, min(2, 3), sum(4))",
                   "f()",
                   "x >= 0 && x < 10 || y == 1",
                   "0.25 % 3"]
    {
        assert_eq!(reprint(source), source);
        assert_eq!(reprint(&reprint(source)), source);
    }

    assert_eq!(reprint("1.50*(2)"), "1.5 * (2)");
}

#[test]
fn parser_builds_left_associative_trees() {
    let expr = parse(&tokenize("8 - 4 - 2").unwrap()).unwrap();

    let Expr::Binary { left, operator, right } = expr else {
        panic!("expected a binary node");
    };
    assert_eq!(operator, TokenKind::Minus);
    assert_eq!(*right, Expr::Literal { value: 2.0 });
    assert!(matches!(*left, Expr::Binary { operator: TokenKind::Minus, .. }));
}

#[test]
fn identifiers_before_parentheses_are_calls() {
    let expr = parse(&tokenize("f(x, 2)").unwrap()).unwrap();
    assert!(matches!(&expr, Expr::Call { name, arguments } if name == "f" && arguments.len() == 2));

    let expr = parse(&tokenize("f").unwrap()).unwrap();
    assert!(matches!(expr, Expr::Variable { .. }));
}

#[test]
fn constraints_are_recognised() {
    for (source, expected) in [("x > 1", true),
                               ("x == 1 || y", true),
                               ("x != 1", true),
                               ("x + 1", false),
                               ("(x > 1)", false),
                               ("y = x > 1", false)]
    {
        let expr = parse(&tokenize(source).unwrap()).unwrap();
        assert_eq!(expr.is_constraint(), expected, "formula: {source}");
    }
}

#[test]
fn misplaced_operators_are_rejected_at_evaluation() {
    let mut evaluator = Evaluator::new();
    let one = || Box::new(Expr::Literal { value: 1.0 });

    let expr = Expr::Binary { left:     one(),
                              operator: TokenKind::Comma,
                              right:    one(), };
    assert_eq!(evaluator.eval(&expr),
               Err(EvalError::InvalidOperator { operator: ",".to_string(),
                                                node:     "binary", }));

    let expr = Expr::Logical { left:     one(),
                               operator: TokenKind::Plus,
                               right:    one(), };
    assert_eq!(evaluator.eval(&expr),
               Err(EvalError::InvalidOperator { operator: "+".to_string(),
                                                node:     "logical", }));

    let expr = Expr::Unary { operator: TokenKind::Star,
                             right:    one(), };
    assert_eq!(evaluator.eval(&expr),
               Err(EvalError::InvalidOperator { operator: "*".to_string(),
                                                node:     "unary", }));
}
