use mathlang::{Options, evaluate, format, parse_source};

fn pretty(input: &str) -> String {
    format(input, &Options::default()).expect("formatting failed")
}

fn assert_reparses(input: &str) {
    let original = parse_source(input, &Options::default()).expect("parsing failed");
    let printed = original.to_string();
    let reparsed = parse_source(&printed, &Options::default())
        .unwrap_or_else(|err| panic!("{printed:?} does not parse: {err}"));
    assert_eq!(original, reparsed, "{input:?} printed as {printed:?}");
}

#[test]
fn fmt_single_statement_block_goes_inline() {
    assert_eq!(pretty("f(x) = {\n  2x\n}"), "f(x) = 2x");
}

#[test]
fn fmt_spacing() {
    assert_eq!(pretty("1+2*3"), "1 + 2 * 3");
    assert_eq!(pretty("f(1,2)"), "f(1, 2)");
    assert_eq!(pretty("x=1"), "x = 1");
}

#[test]
fn fmt_keeps_literal_source() {
    assert_eq!(pretty("0x10 + 1,000"), "0x10 + 1,000");
}

#[test]
fn fmt_parentheses_follow_grouping() {
    assert_eq!(pretty("(1 - 2) - 3"), "(1 - 2) - 3");
    assert_eq!(pretty("1 - (2 - 3)"), "1 - 2 - 3");
    assert_eq!(pretty("(2 * 3)^2"), "(2 * 3) ^ 2");
    assert_eq!(pretty("((1 + 2)) * 3"), "(1 + 2) * 3");
}

#[test]
fn fmt_negation() {
    assert_eq!(pretty("2 * -x"), "2 * (-x)");
    assert_eq!(pretty("-(1 + 2)"), "-(1 + 2)");
}

#[test]
fn fmt_juxtaposition() {
    assert_eq!(pretty("3 * x"), "3x");
    assert_eq!(pretty("2x^2 + 1"), "2x ^ 2 + 1");
    assert_eq!(pretty("x * 3"), "x * 3");
}

#[test]
fn fmt_block_definition() {
    let source = "f(x, y) = {\n  a = x\n  a + y\n}\nf(1, 2)";
    assert_eq!(pretty(source), source);
}

#[test]
fn fmt_nested_block_definition() {
    let source = "f(x) = {\n  g(y) = {\n    b = y\n    b * 2\n  }\n  g(x)\n}";
    assert_eq!(pretty(source), source);
}

#[test]
fn fmt_definition_without_parameters() {
    assert_eq!(pretty("g()=1"), "g() = 1");
}

#[test]
fn fmt_optimized() {
    assert_eq!(format("1 + 2", &Options::optimized()).unwrap(), "3");
    assert_eq!(
        format("f(x) = {\n  y = 2 * 3\n  y * x\n}", &Options::optimized()).unwrap(),
        "f(x) = {\n  y = 6\n  y * x\n}"
    );
}

#[test]
fn fmt_output_reparses_to_the_same_tree() {
    for source in [
        "1 + 2 * 3^4",
        "(1 - 2) - 3",
        "2^3^2",
        "(2^3)^2",
        "-x + 1",
        "2 * -(x - 1)",
        "(-x) * 2",
        "f(x, y) = {\n  a = x % y\n  a / 2\n}\nf(7, 3)",
        "3x^2 - 2x + 1",
        "g(h(1), -2)",
    ] {
        assert_reparses(source);
    }
}

#[test]
fn fmt_radix_coefficient_keeps_operator() {
    let source = "a = 1\n0x10 * a";
    let formatted = pretty(source);
    assert_eq!(formatted, source);
    assert_eq!(evaluate(&formatted, &Options::default()).unwrap(), 16.0);

    assert_eq!(pretty("b = 1\n0b11 * b"), "b = 1\n0b11 * b");
    assert_eq!(pretty("c = 1\n0o7 * c"), "c = 1\n0o7 * c");
}

#[test]
fn fmt_optimized_keeps_non_finite_expressions() {
    assert_eq!(format("10^400", &Options::optimized()).unwrap(), "10 ^ 400");
    assert_eq!(
        format("x = 1\n0 % 0 + x", &Options::optimized()).unwrap(),
        "x = 1\n0 % 0 + x"
    );
}
