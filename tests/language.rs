use std::fs::{self};

use kestrel::{evaluate_source, interpreter::{evaluator::Context, object::Object}};
use walkdir::WalkDir;

fn run(source: &str) -> Result<Object, String> {
    match evaluate_source(source, &mut Context::new()) {
        Ok(value) if value.is_error() => Err(format!("ERROR: {value}")),
        Ok(value) => Ok(value),
        Err(errors) => Err(errors.iter()
                                 .map(ToString::to_string)
                                 .collect::<Vec<_>>()
                                 .join("\n")),
    }
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_kestrel_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("Example {} in {:?} failed:\n{}\n{}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No kestrel examples found in book/src");
}

fn extract_kestrel_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```kestrel") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: &str) {
    match run(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "Script: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = run(src) {
        panic!("Script succeeded with {value} but was expected to fail")
    }
}

#[test]
fn bindings_and_arithmetic() {
    assert_value("let x = 1 + 2\nx", "3");
    assert_value("let x = 7 * 9\nx == 63", "true");
    assert_value("let x = 8 - 5; x", "3");
    assert_value("let x = 10 / 2; x", "5");
}

#[test]
fn multi_line_programs() {
    assert_value(r"
        let a = 1;
        let b = 2;
        let sum = fn(x, y) {
            x + y
        };
        sum(a, b)
    ",
                 "3");
}

#[test]
fn values_render_for_display() {
    assert_value("1 < 2", "true");
    assert_value("!1", "false");
    assert_value("if (false) { 1 }", "null");
    assert_value("let x = 1;", "null");
    assert_value("fn(a, b) { a * b; }", "fn(a, b) { (a * b) }");
}

#[test]
fn script_file() {
    let script = fs::read_to_string("tests/example.ks").expect("missing file");
    assert_value(&script, "385");
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("let x = 1 / 0");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("foo == 1");
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure("let f = fn(x, y) { x + y };\nf(3)");
}

#[test]
fn syntax_error_is_error() {
    assert_failure("let f = fn(x { x }");
    assert_failure("if (true) { 1 ");
    assert_failure("1 +");
}
