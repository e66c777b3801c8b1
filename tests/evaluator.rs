use kestrel::{
    ast::{BlockStatement, Expression, Program, Statement},
    evaluate_source,
    interpreter::{
        evaluator::{Context, core::MAX_CALL_DEPTH, eval as eval_program},
        object::{FALSE, NULL, Object, ObjectKind, TRUE},
    },
    parse,
};
use pretty_assertions::assert_eq;

fn eval(source: &str) -> Object {
    evaluate_source(source, &mut Context::new()).unwrap_or_else(|errors| {
                                                    panic!("Parsing {source:?} failed: \
                                                            {errors:?}")
                                                })
}

fn assert_integer(source: &str, expected: i64) {
    assert_eq!(eval(source), Object::Integer(expected), "source: {source:?}");
}

fn assert_boolean(source: &str, expected: bool) {
    assert_eq!(eval(source), Object::Boolean(expected), "source: {source:?}");
}

fn assert_error(source: &str, expected: &str) {
    let value = eval(source);
    assert!(value.is_error(), "{source:?} evaluated to {value:?}, not an error");
    assert_eq!(value.to_string(), expected, "source: {source:?}");
}

#[test]
fn integer_expressions() {
    let cases = [("5", 5),
                 ("10", 10),
                 ("-5", -5),
                 ("-10", -10),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("5 * 2 + 10", 20),
                 ("5 + 2 * 10", 25),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("2 * (5 + 10)", 30),
                 ("3 * 3 * 3 + 10", 37),
                 ("3 * (3 * 3) + 10", 37),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
                 ("-5 + 5 + -5 - 10", -15),
                 ("-5 * 2 + -5 - 10", -25),
                 ("-5 + 5 + -5 * 10", -50),
                 ("50 / 2 + 5 + -5 * 10", -20),
                 ("5 * (-5 + 10)", 25)];

    for (source, expected) in cases {
        assert_integer(source, expected);
    }
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_integer("7 / 2", 3);
    assert_integer("-7 / 2", -3);
    assert_integer("7 / -2", -3);
}

#[test]
fn integer_arithmetic_wraps() {
    assert_integer("9223372036854775807 + 1", i64::MIN);
    assert_integer("-9223372036854775807 - 2", i64::MAX);
    assert_integer("9223372036854775807 * 2", -2);
}

#[test]
fn boolean_expressions() {
    let cases = [("true", true),
                 ("false", false),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 < 1", false),
                 ("1 > 1", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("1 == 2", false),
                 ("1 != 2", true),
                 ("true == true", true),
                 ("false == false", true),
                 ("true == false", false),
                 ("false == true", false),
                 ("true != false", true),
                 ("false != true", true),
                 ("(1 < 2) == true", true),
                 ("(1 < 2) == false", false),
                 ("(1 > 2) == true", false),
                 ("false == (1 < 2)", false),
                 ("(1 < 2) == (1 < 2)", true)];

    for (source, expected) in cases {
        assert_boolean(source, expected);
    }
}

#[test]
fn booleans_are_shared_values() {
    assert_eq!(eval("true"), TRUE);
    assert_eq!(eval("1 < 2"), TRUE);
    assert_eq!(eval("!true"), FALSE);
    assert_eq!(eval("1 == 2"), FALSE);
}

#[test]
fn bang_operator() {
    let cases = [("!true", false),
                 ("!false", true),
                 ("!5", false),
                 ("!0", false),
                 ("!!true", true),
                 ("!!false", false),
                 ("!!5", true)];

    for (source, expected) in cases {
        assert_boolean(source, expected);
    }

    assert_boolean("let nothing = if (false) { 1 }; !nothing", true);
}

#[test]
fn if_else_expressions() {
    assert_integer("if (true) { 10 }", 10);
    assert_eq!(eval("if (false) { 10 }"), NULL);
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (0) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 }", 10);
    assert_eq!(eval("if (1 > 2) { 10 }"), NULL);
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
    assert_integer("if (1 > 2) { 10 } else { 10 + 10 }", 20);
    assert_eq!(eval("if (true) { }"), NULL);
}

#[test]
fn return_statements() {
    let cases = [("return 10;", 10),
                 ("return 10; 9;", 10),
                 ("return 10; 1 + 1;", 10),
                 ("return 2 * 5; 9;;", 10),
                 ("9; return 2 * 5; 9;", 10),
                 ("if (true) { if (true) { return 10; } return 1; }", 10),
                 ("if(true) {if(true) {return 10;} return 1;}", 10),
                 ("1 + if (true) { return 5; }", 5),
                 ("if (if (true) { return 7; }) { 2 }", 7),
                 ("let f = fn(x) { x }; f(if (true) { return 9; })", 9)];

    for (source, expected) in cases {
        assert_integer(source, expected);
    }
}

#[test]
fn return_value_never_escapes_the_program() {
    let value = eval("if (true) { return 10; }");
    assert_eq!(value.kind(), ObjectKind::Integer);
}

#[test]
fn error_handling() {
    let cases = [("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
                 ("true == 1", "type mismatch: BOOLEAN == INTEGER"),
                 ("-true", "unknown operator: -BOOLEAN"),
                 ("true + true;", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("5; true + true; 5;", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("true < false", "unknown operator: BOOLEAN < BOOLEAN"),
                 ("if (10 > 2) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) {\n  if (10 > 1) {\n    return true + false;\n  }\n  return 1;\n}",
                  "unknown operator: BOOLEAN + BOOLEAN"),
                 ("foobar", "identifier not found: foobar"),
                 ("1 / 0", "division by zero"),
                 ("let n = if (false) { 1 }; -n", "unknown operator: -NULL")];

    for (source, expected) in cases {
        assert_error(source, expected);
    }
}

#[test]
fn errors_stop_evaluation() {
    assert_error("let x = 1 + true; x", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-(1 + true)", "type mismatch: INTEGER + BOOLEAN");
    assert_error("(-true) + (1 + true)", "unknown operator: -BOOLEAN");
    assert_error("if (1 + true) { 1 } else { 2 }", "type mismatch: INTEGER + BOOLEAN");
    assert_error("let f = fn(a, b) { a }; f(1, -true)", "unknown operator: -BOOLEAN");
    assert_error("missing(1 + true)", "identifier not found: missing");
}

#[test]
fn let_statements() {
    assert_integer("let a = 5; a;", 5);
    assert_integer("let a = 5 * 5; a;", 25);
    assert_integer("let a = 5; let b = a; b;", 5);
    assert_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);
    assert_integer("let a = 1; let a = a + 1; a", 2);
    assert_eq!(eval("let a = 5;"), NULL);
}

#[test]
fn empty_program_is_null() {
    assert_eq!(eval(""), NULL);
    assert_eq!(eval(";;"), NULL);
}

#[test]
fn function_object() {
    let value = eval("fn(x) { x + 2; };");

    let Object::Function(function) = &value else {
        panic!("not a function: {value:?}");
    };
    assert_eq!(function.parameters.len(), 1);
    assert_eq!(function.parameters[0].name, "x");
    assert_eq!(function.body.to_string(), "{ (x + 2) }");
    assert_eq!(value.to_string(), "fn(x) { (x + 2) }");
}

#[test]
fn function_application() {
    let cases = [("let identity = fn(x) { x; }; identity(5);", 5),
                 ("let identity = fn(x) { return x; }; identity(5);", 5),
                 ("let double = fn(x) { x * 2; }; double(5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
                 ("fn(x) { x; }(5)", 5),
                 ("let seven = fn() { 7 }; seven()", 7)];

    for (source, expected) in cases {
        assert_integer(source, expected);
    }

    assert_eq!(eval("let nothing = fn() { }; nothing()"), NULL);
}

#[test]
fn return_stops_only_the_enclosing_call() {
    assert_integer("let f = fn() { return 1; 2 }; f(); 3", 3);
    assert_integer("let f = fn(x) { if (x > 0) { return x; } 0 }; f(4) + f(-4)", 4);
    assert_integer("let outer = fn() { let inner = fn() { return 1; }; inner() + 10 }; outer()",
                   11);
}

#[test]
fn closures() {
    assert_integer("let newAdder = fn(x) { fn(y) { x + y }; };\n\
                    let addTwo = newAdder(2);\n\
                    addTwo(2);",
                   4);

    assert_integer("let x = 1; let f = fn() { x }; let x = 2; f()", 2);
}

#[test]
fn function_scope_does_not_leak() {
    assert_integer("let x = 1; let f = fn() { let x = 2; x }; f(); x", 1);
    assert_integer("let f = fn(x) { x }; let x = 10; f(3) + x", 13);
    assert_error("let f = fn(y) { y }; f(1); y", "identifier not found: y");
}

#[test]
fn recursion() {
    assert_integer("let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };\n\
                    fib(15)",
                   610);
    assert_integer("let countdown = fn(n) { if (n == 0) { return 0; } countdown(n - 1) };\n\
                    countdown(100)",
                   0);
}

#[test]
fn higher_order_functions() {
    assert_integer("let twice = fn(f, x) { f(f(x)) };\n\
                    let inc = fn(n) { n + 1 };\n\
                    twice(inc, 5)",
                   7);
}

#[test]
fn runaway_recursion_is_an_error() {
    assert_error("let f = fn(n) { f(n + 1) }; f(0)",
                 &format!("maximum recursion depth exceeded: limit={MAX_CALL_DEPTH}"));
    assert_error("let f = fn(n) { 1 + f(n + 1) }; f(0)",
                 "maximum recursion depth exceeded: limit=1000");
}

#[test]
fn recursion_within_the_limit() {
    assert_integer("let down = fn(n) { if (n == 0) { 0 } else { 1 + down(n - 1) } }; down(900)",
                   900);

    let context = Context::new();
    let (program, _) = parse("let f = fn(n) { f(n + 1) }; f(0)");
    assert!(context.eval_program(&program).is_error());
    assert_eq!(context.call_depth(), 0);

    let (program, _) = parse("let g = fn(n) { n * 2 }; g(21)");
    assert_eq!(context.eval_program(&program), Object::Integer(21 * 2));
}

#[test]
fn call_errors() {
    assert_error("5(1)", "not a function: INTEGER");
    assert_error("true()", "not a function: BOOLEAN");
    assert_error("let f = fn(x) { x }; f(1, 2)", "wrong number of arguments: want=1, got=2");
    assert_error("let f = fn(x, y) { x }; f()", "wrong number of arguments: want=2, got=0");
    assert_error("let f = fn() { 1 + true }; f(); 5", "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn context_keeps_bindings_between_sources() {
    let mut context = Context::new();

    assert_eq!(evaluate_source("let a = 40;", &mut context), Ok(NULL));
    assert_eq!(evaluate_source("let inc = fn(x) { x + 1 };", &mut context), Ok(NULL));
    assert_eq!(evaluate_source("inc(inc(a))", &mut context), Ok(Object::Integer(42)));

    assert!(evaluate_source("let b 1;", &mut context).is_err());
    assert_eq!(evaluate_source("a", &mut context), Ok(Object::Integer(40)));
}

#[test]
fn parse_errors_prevent_evaluation() {
    let mut context = Context::new();

    let errors = evaluate_source("let a = 1; let b 2;", &mut context).unwrap_err();
    assert_eq!(errors.len(), 1);

    assert_eq!(evaluate_source("a", &mut context),
               Ok(Object::Error("identifier not found: a".to_string())));
}

#[test]
fn nested_block_statements() {
    let integer = |value| Expression::IntegerLiteral { value,
                                                       line: 1 };
    let block = BlockStatement { statements: vec![Statement::Return { value: integer(1),
                                                                      line:  1, },
                                                  Statement::Expression { expr: integer(2),
                                                                          line: 1, }],
                                 line:       1, };
    let program = Program { statements: vec![Statement::Block(block),
                                             Statement::Expression { expr: integer(3),
                                                                     line: 1, }], };

    assert_eq!(program.to_string(), "{ return 1; 2 }3");
    assert_eq!(eval_program(&program), Object::Integer(1));
}
