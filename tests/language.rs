use std::{cell::Cell, fs, num::NonZeroU64, rc::Rc};

use bigdecimal::{BigDecimal, RoundingMode};
use decalc::{
    Calculator, Error, EvalError, Evaluator, LexError, MathContext, ParseError, evaluate_to_string,
    interpreter::{calculator::formula_lines, evaluator::function::core::BUILTIN_FUNCTIONS},
    parse, tokenize,
};
use pretty_assertions::assert_eq;

fn assert_evaluates(source: &str, expected: &str) {
    assert_eq!(evaluate_to_string(source), expected, "formula: {source}");
}

fn eval_error(source: &str) -> Error {
    match Calculator::new().eval(source) {
        Ok(value) => panic!("Formula {source:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn precision(digits: u64) -> NonZeroU64 {
    NonZeroU64::new(digits).unwrap()
}

#[test]
fn example_formulas_work() {
    let script = fs::read_to_string("tests/example.formulas").unwrap();
    let mut calculator = Calculator::new();
    let mut checked = 0;
    let mut last = None;

    for line in script.lines().map(str::trim) {
        if let Some(expected) = line.strip_prefix("# =>") {
            let actual = last.take().unwrap_or_else(|| panic!("No formula before {line:?}"));
            assert_eq!(actual, expected.trim());
            checked += 1;
        } else if formula_lines(line).next().is_some() {
            last = Some(calculator.evaluate_to_string(line));
        }
    }

    assert_eq!(checked, formula_lines(&script).count());
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("1 + 2", "3");
    assert_evaluates("8 - 5", "3");
    assert_evaluates("7 * 9", "63");
    assert_evaluates("10 / 4", "2.5");
    assert_evaluates("7 % 3", "1");
    assert_evaluates("-7 % 3", "-1");
    assert_evaluates("2 ^ 10", "1024");
    assert_evaluates("0.1 + 0.2", "0.3");
}

#[test]
fn operator_precedence() {
    assert_evaluates("2 + 3 * 4", "14");
    assert_evaluates("(2 + 3) * 4", "20");
    assert_evaluates("2 * 3 ^ 2", "18");
    assert_evaluates("10 - 4 - 3", "3");
    assert_evaluates("100 / 10 / 5", "2");
    assert_evaluates("2 ^ 3 ^ 2", "512");
    assert_evaluates("-2 ^ 2", "-4");
    assert_evaluates("--3", "3");
    assert_evaluates("1 + 2 == 3", "1");
    assert_evaluates("1 < 2 == 1", "1");
}

#[test]
fn literals_are_normalized() {
    assert_evaluates("0.1", "0.1");
    assert_evaluates("123.4500", "123.45");
    assert_evaluates(".5", "0.5");
    assert_evaluates("1e3", "1000");
    assert_evaluates("2.5e-3", "0.0025");
    assert_evaluates("2.5 * 4", "10");
}

#[test]
fn results_are_rounded_to_the_context() {
    assert_evaluates("1 / 3", "0.3333333333333333");
    assert_evaluates("2 / 3", "0.6666666666666667");
    assert_evaluates("2 ^ 100", "1267650600228229000000000000000");

    let mut calculator = Calculator::with_context(MathContext::new(precision(5), RoundingMode::HalfUp));
    assert_eq!(calculator.evaluate_to_string("2 / 3"), "0.66667");

    calculator.set_rounding_mode(RoundingMode::Down);
    assert_eq!(calculator.evaluate_to_string("2 / 3"), "0.66666");

    calculator.set_precision(precision(30));
    assert_eq!(calculator.evaluate_to_string("1 / 3"), "0.333333333333333333333333333333");
    assert_eq!(calculator.math_context(), MathContext::new(precision(30), RoundingMode::Down));
}

#[test]
fn division_keeps_the_context_precision() {
    let mut calculator = Calculator::with_context(MathContext::new(precision(150), RoundingMode::HalfUp));

    assert_eq!(calculator.evaluate_to_string("1 / 3"), format!("0.{}", "3".repeat(150)));
    assert_eq!(calculator.evaluate_to_string("2 / 3"), format!("0.{}7", "6".repeat(149)));
    assert_eq!(calculator.evaluate_to_string("1 / 7"), format!("0.{}", "142857".repeat(25)));
    assert_eq!(calculator.evaluate_to_string("2 ^ -1"), "0.5");

    calculator.set_precision(precision(2));
    assert_eq!(calculator.evaluate_to_string("3 / 24"), "0.13");
    assert_eq!(calculator.evaluate_to_string("-3 / 24"), "-0.13");

    calculator.set_rounding_mode(RoundingMode::HalfEven);
    assert_eq!(calculator.evaluate_to_string("3 / 24"), "0.12");
}

#[test]
fn normalized_results_read_back_as_equal_values() {
    for source in ["0.1", "1e-7", "123.4500", "2 ^ 100", "-2.5e-3", "1 / 3"] {
        let mut calculator = Calculator::new();
        let value = calculator.eval(source).unwrap();
        let text = evaluate_to_string(source);

        let tokens = tokenize(&text).unwrap();
        assert_eq!(calculator.eval_tokens(&tokens).unwrap(), value, "formula {source} rendered as {text}");
    }
}

#[test]
fn exponentiation() {
    assert_evaluates("2 ^ 0", "1");
    assert_evaluates("0 ^ 0", "1");
    assert_evaluates("2 ^ -1", "0.5");
    assert_evaluates("(-2) ^ 3", "-8");
    assert_evaluates("1.1 ^ 2", "1.21");
    assert_evaluates("4 ^ 1.5", "8");
    assert_evaluates("abs(2 ^ 0.5 - sqrt(2)) < 1e-15", "1");

    assert!(matches!(eval_error("(-8) ^ 0.5"),
                     Error::Eval(EvalError::Domain { operation: "exponentiation", .. })));
    assert_eq!(eval_error("0 ^ -1"), Error::Eval(EvalError::DivisionByZero));
    assert_eq!(eval_error("2 ^ 1e30"),
               Error::Eval(EvalError::Overflow { operation: "exponentiation" }));
}

#[test]
fn results_outside_the_exponent_limits() {
    let overflow = |operation: &'static str| Error::Eval(EvalError::Overflow { operation });

    assert_eq!(eval_error("1e10 ^ 1e18"), overflow("exponentiation"));
    assert_eq!(eval_error("10 ^ 18446744073709551615"), overflow("exponentiation"));
    assert_eq!(eval_error("10 ^ 1000000"), overflow("exponentiation"));
    assert_eq!(eval_error("10 ^ 999999 * 10"), overflow("multiplication"));

    assert_evaluates("10 ^ 999999 / 10 ^ 999999", "1");
    assert_evaluates("10 ^ 1001", "1E+1001");
    assert_evaluates("0.1 ^ 1e18", "0");
    assert_evaluates("10 ^ -1e18", "0");
    assert_evaluates("(-1) ^ 1e18", "1");
    assert_evaluates("(-1) ^ 3", "-1");
    assert_evaluates("1 ^ 18446744073709551615", "1");
}

#[test]
fn comparisons_and_logic() {
    assert_evaluates("3 > 2", "1");
    assert_evaluates("3 < 2", "0");
    assert_evaluates("2 >= 2", "1");
    assert_evaluates("3 <= 2", "0");
    assert_evaluates("2.50 == 2.5", "1");
    assert_evaluates("1 != 1", "0");
    assert_evaluates("0 || 5", "1");
    assert_evaluates("0 || 0", "0");
    assert_evaluates("2 && 3", "1");
    assert_evaluates("0 && 1", "0");
    assert_evaluates("1 || 0 && 0", "1");
}

#[test]
fn logical_operators_short_circuit() {
    let calls = Rc::new(Cell::new(0));
    let mut calculator = Calculator::new();

    let counter = Rc::clone(&calls);
    calculator.register_function("touch",
                                 move |_: &[BigDecimal], _: &MathContext| -> Result<BigDecimal, EvalError> {
                                     counter.set(counter.get() + 1);
                                     Ok(BigDecimal::from(1))
                                 });

    assert_eq!(calculator.evaluate_to_string("1 || touch()"), "1");
    assert_eq!(calculator.evaluate_to_string("0 && touch()"), "0");
    assert_eq!(calls.get(), 0);

    assert_eq!(calculator.evaluate_to_string("0 || touch()"), "1");
    assert_eq!(calls.get(), 1);

    assert_eq!(calculator.evaluate_to_string("1 || undefined_name"), "1");
    assert_eq!(calculator.evaluate_to_string("0 && (x = 5)"), "0");
    assert_eq!(calculator.variable("x"), None);
}

#[test]
fn assignments_persist() {
    let mut calculator = Calculator::new();

    assert_eq!(calculator.evaluate_to_string("x = 5"), "5");
    assert_eq!(calculator.evaluate_to_string("x * 2"), "10");
    assert_eq!(calculator.evaluate_to_string("a = b = x - 2"), "3");
    assert_eq!(calculator.evaluate_to_string("a + b"), "6");
    assert_eq!(calculator.evaluate_to_string("x = x + 1"), "6");
    assert_eq!(calculator.variable("X"), Some(&BigDecimal::from(6)));
}

#[test]
fn failed_formulas_keep_earlier_assignments() {
    let mut calculator = Calculator::new();

    assert!(calculator.eval("(a = 2) + nope").is_err());
    assert_eq!(calculator.variable("a"), Some(&BigDecimal::from(2)));
}

#[test]
fn names_are_case_insensitive() {
    let mut calculator = Calculator::new();

    assert_eq!(calculator.evaluate_to_string("Total = 3"), "3");
    assert_eq!(calculator.evaluate_to_string("TOTAL + total"), "6");
    assert_eq!(calculator.evaluate_to_string("ABS(-1) + Max(1, 2)"), "3");
    assert_eq!(calculator.evaluate_to_string("PI == pi"), "1");

    let mut names: Vec<_> = calculator.variables().map(|(name, _)| name.to_string()).collect();
    names.sort();
    assert_eq!(names, ["e", "pi", "total"]);
}

#[test]
fn constants() {
    assert_evaluates("pi", "3.141592653589793");
    assert_evaluates("e", "2.718281828459045");
    assert_evaluates("round(pi, 2)", "3.14");

    let calculator = Calculator::with_context(MathContext::new(precision(4), RoundingMode::HalfUp));
    assert_eq!(calculator.variable("pi"), Some(&"3.142".parse::<BigDecimal>().unwrap()));
}

#[test]
fn builtin_functions() {
    assert_evaluates("abs(-2.5)", "2.5");
    assert_evaluates("sum(1, 2, 3.5)", "6.5");
    assert_evaluates("floor(-2.5)", "-3");
    assert_evaluates("floor(2.9)", "2");
    assert_evaluates("ceil(2.1)", "3");
    assert_evaluates("ceil(-2.9)", "-2");
    assert_evaluates("round(2.5)", "3");
    assert_evaluates("round(2.345, 2)", "2.35");
    assert_evaluates("round(1234, -2)", "1200");
    assert_evaluates("min(3, 1, 2)", "1");
    assert_evaluates("max(3, 1, 2)", "3");
    assert_evaluates("min(7)", "7");
    assert_evaluates("sqrt(16)", "4");
    assert_evaluates("√9", "3");
    assert_evaluates("√16 + 1", "5");
    assert_evaluates("sqrt(2)", "1.414213562373095");
}

#[test]
fn builtin_argument_errors() {
    assert_evaluates("abs(1, 2)", "abs requires exactly 1 argument, found 2.");
    assert_evaluates("sum()", "sum requires at least 1 argument, found 0.");
    assert_evaluates("round(1, 2, 3)", "round requires 1 or 2 arguments, found 3.");
    assert_evaluates("round(2.5, 0.5)",
                     "Invalid argument to round: decimal places 0.5 must be an integer.");
    assert_evaluates("sqrt(-1)", "Math domain error in sqrt: -1 is negative.");
    assert_evaluates("√-4", "Math domain error in square root: -4 is negative.");
}

#[test]
fn round_rejects_places_beyond_the_precision() {
    assert!(matches!(eval_error("round(2.345, 20)"),
                     Error::Eval(EvalError::InvalidArgument { name: "round", .. })));
    assert!(matches!(eval_error("round(1, 1e12)"),
                     Error::Eval(EvalError::InvalidArgument { name: "round", .. })));
    assert_evaluates("round(2.345, 20)",
                     "Invalid argument to round: 2.345 with 20 decimal places needs more than 16 digits.");
    assert_evaluates("round(1.5, 1e12)",
                     "Invalid argument to round: decimal places 1000000000000 is out of range.");
    assert_evaluates("round(0.001, 15)", "0.001");

    let mut calculator = Calculator::with_context(MathContext::new(precision(30), RoundingMode::HalfUp));
    assert_eq!(calculator.evaluate_to_string("round(2.345, 20)"), "2.345");
}

#[test]
fn registered_functions_replace_builtins() {
    let mut calculator = Calculator::new();
    calculator.register_function("ABS",
                                 |args: &[BigDecimal], _: &MathContext| -> Result<BigDecimal, EvalError> {
                                     Ok(args.iter().sum())
                                 });

    assert_eq!(calculator.evaluate_to_string("abs(-1, -2)"), "-3");
}

#[test]
fn undefined_names() {
    assert_eq!(eval_error("foo + 1"),
               Error::Eval(EvalError::UndefinedVariable { name: "foo".to_string() }));
    assert_eq!(eval_error("nope(1)"),
               Error::Eval(EvalError::UndefinedFunction { name: "nope".to_string() }));
    assert_evaluates("Foo", "Undefined variable 'Foo'.");
}

#[test]
fn unknown_function_arguments_are_not_evaluated() {
    let mut calculator = Calculator::new();

    assert!(calculator.eval("nope(y = 1)").is_err());
    assert_eq!(calculator.variable("y"), None);
}

#[test]
fn division_by_zero() {
    assert_evaluates("1 / 0", "Division by zero.");
    assert_evaluates("5 % (2 - 2)", "Division by zero.");
}

#[test]
fn syntax_errors_are_reported() {
    assert_eq!(eval_error("1 +"),
               Error::Parse(ParseError::ExpectedExpression { found:    "end of input".to_string(),
                                                             position: 3, }));
    assert_eq!(eval_error("1 2"),
               Error::Parse(ParseError::UnexpectedTrailingTokens { token:    "2".to_string(),
                                                                   position: 2, }));
    assert_eq!(eval_error("(1 + 2"),
               Error::Parse(ParseError::ExpectedClosingParen { found:    "end of input".to_string(),
                                                               position: 6, }));
    assert_eq!(eval_error("3 = 4"),
               Error::Parse(ParseError::InvalidAssignmentTarget { target: "3".to_string() }));
    assert_eq!(eval_error("max(1, 2"),
               Error::Parse(ParseError::ExpectedClosingParen { found:    "end of input".to_string(),
                                                               position: 8, }));
    assert_eq!(eval_error(""),
               Error::Parse(ParseError::ExpectedExpression { found:    "end of input".to_string(),
                                                             position: 0, }));
}

#[test]
fn lexical_errors_are_reported() {
    assert_eq!(eval_error("1 | 2"),
               Error::Lex(LexError::UnexpectedCharacter { character: '|',
                                                          position:  2, }));
    assert_eq!(eval_error("1\n2"),
               Error::Lex(LexError::UnexpectedCharacter { character: '\n',
                                                          position:  1, }));
    assert_eq!(eval_error("1.2.3"),
               Error::Lex(LexError::MalformedNumber { lexeme:   "1.2.3".to_string(),
                                                      position: 0, }));
    assert_evaluates("2 $ 3", "Invalid token '$' at position 2.");
}

#[test]
fn defines_evaluate_formula_source() {
    let mut calculator = Calculator::new();

    calculator.define("Width", "3 * 4").unwrap();
    assert_eq!(calculator.evaluate_to_string("width / 2"), "6");

    assert!(matches!(calculator.define("bad", "1 +"), Err(Error::Parse(_))));
    assert_eq!(calculator.variable("bad"), None);

    assert_eq!(calculator.define("width", "width / 0"), Err(Error::Eval(EvalError::DivisionByZero)));
    assert_eq!(calculator.variable("WIDTH"), Some(&BigDecimal::from(12)));
}

#[test]
fn evaluator_definitions_bind_parsed_formulas() {
    let mut evaluator = Evaluator::new();

    let answer = parse(&tokenize("2 * 21").unwrap()).unwrap();
    evaluator.define("Answer", &answer).unwrap();
    assert_eq!(evaluator.variable("answer"), Some(&BigDecimal::from(42)));

    let failing = parse(&tokenize("answer / 0").unwrap()).unwrap();
    assert_eq!(evaluator.define("answer", &failing), Err(EvalError::DivisionByZero));
    assert_eq!(evaluator.variable("ANSWER"), Some(&BigDecimal::from(42)));
}

#[test]
fn new_evaluators_know_every_builtin() {
    let evaluator = Evaluator::new();

    for name in BUILTIN_FUNCTIONS {
        assert!(evaluator.has_function(&name.to_uppercase()), "missing builtin {name}");
    }
    assert!(!evaluator.has_function("pi"));
}
