use assert_matches::assert_matches;
use cliopts::*;
use rstest::rstest;

const IDENTIFIER: &str = "-i, --identifier <id> specify an id (required)";

#[test]
fn required_option_long() {
    let values = get_opts(IDENTIFIER, &["prog", "--identifier", "100"]).unwrap();

    assert_eq!(
        values.parsed().options().get("identifier"),
        Some(&OptionValue::Value("100".to_string()))
    );
    assert_eq!(values.get("i"), Lookup::Value("100"));
    assert_eq!(values.get("identifier"), Lookup::Value("100"));
    assert!(values.is_valid());
}

#[test]
fn flag_present_without_value() {
    let values = get_opts("-l, --list list mode", &["prog", "-l"]).unwrap();

    assert_eq!(values.get("l"), Lookup::NoValue);
    assert_eq!(values.get("list"), Lookup::NoValue);
    assert!(values.exists("list"));
    assert_eq!(values.get("list").value(), None);
}

#[test]
fn named_and_numbered_data() {
    let spec = format!("Usage: {{self}} <value1> [<value2>]\n{IDENTIFIER}");
    let values = get_opts(&spec, &["prog", "-i", "100", "-l", "bar1", "bar2", "bar3"]).unwrap();
    let data: Vec<(&str, &str)> = values
        .parsed()
        .data()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    assert_eq!(data, vec![("value1", "bar1"), ("value2", "bar2")]);
    assert_eq!(values.all_by_offset(), &["bar1", "bar2", "bar3"]);
    assert_contains(
        values.validation_errors(),
        ValidationError::UnexpectedValues(1),
    );
    assert_eq!(
        values
            .validation_errors()
            .iter()
            .filter(|e| matches!(e, ValidationError::UnexpectedValues(_)))
            .count(),
        1
    );
}

#[rstest]
#[case(vec!["prog"], "No value for <url1> was provided.")]
#[case(vec!["prog", "bar1", "bar2"], "Found 1 unexpected value.")]
fn positional_errors(#[case] argv: Vec<&str>, #[case] expected: &str) {
    let values = get_opts("Usage: {self} <url1>", &argv).unwrap();

    assert!(!values.is_valid());
    assert_eq!(values.error_text(), expected);
}

#[rstest]
#[case(vec!["prog"])]
#[case(vec!["prog", "-l"])]
#[case(vec!["prog", "-i"])]
#[case(vec!["prog", "--identifier"])]
#[case(vec!["prog", "--identifier="])]
#[case(vec!["prog", "-i", "-l"])]
fn required_option_missing(#[case] argv: Vec<&str>) {
    let spec = format!("{IDENTIFIER}\n-l list mode");
    let values = get_opts(&spec, &argv).unwrap();
    let required: Vec<&ValidationError> = values
        .validation_errors()
        .iter()
        .filter(|e| matches!(e, ValidationError::RequiredValue(_)))
        .collect();

    assert!(!values.is_valid());
    assert_eq!(
        required,
        vec![&ValidationError::RequiredValue("identifier".to_string())]
    );
    assert_eq!(
        required[0].to_string(),
        "Required value for argument identifier not found."
    );
}

#[rstest]
#[case(vec!["prog", "-i", "1"])]
#[case(vec!["prog", "-l", "-i", "1"])]
#[case(vec!["prog", "-i", "1", "-l"])]
#[case(vec!["prog", "-li", "1"])]
#[case(vec!["prog", "-li=1"])]
#[case(vec!["prog", "--identifier=1", "-l"])]
fn required_option_present(#[case] argv: Vec<&str>) {
    let spec = format!("{IDENTIFIER}\n-l list mode");
    let values = get_opts(&spec, &argv).unwrap();

    assert!(values.is_valid(), "{}", values.error_text());
    assert_eq!(values.get("identifier"), Lookup::Value("1"));
}

#[rstest]
#[case("-x, --ex <value> x", "x", "ex")]
#[case("-y, --why why", "y", "why")]
fn normalize_short_and_long(#[case] spec: &str, #[case] short: &str, #[case] long: &str) {
    let spec = TextSpecParser::parse(spec).unwrap();

    assert_eq!(spec.normalize(short), spec.normalize(long));
    assert_eq!(spec.normalize(long), Some(long));
    assert_eq!(spec.normalize("unknown"), None);
}

#[test]
fn equals_matches_separate_value() {
    let spec = "-o, --out <file> output";
    let joined = get_opts(spec, &["prog", "--out=a.txt"]).unwrap();
    let separate = get_opts(spec, &["prog", "--out", "a.txt"]).unwrap();

    assert_eq!(joined.parsed(), separate.parsed());
}

#[test]
fn malformed_spec() {
    assert_matches!(
        get_opts("-v be verbose\n<<nope", &["prog"]),
        Err(SpecError::MalformedSpecLine(line)) if line == "<<nope"
    );
}

#[test]
fn help_text() {
    let opts = CliOpts::from_text_spec(
        r#"
        Usage: {self} [options] <source> [<destination>]
        -i, --identifier <id> specify an id (required)
        -l list mode
        "#,
    )
    .unwrap()
    .color(ColorMode::Never);

    assert_eq!(
        opts.help_text(Some("copy")),
        r#"Usage: copy [options] <source> [<destination>]

Options:
  -i, --identifier <id> specify an id (required)
  -l                    list mode"#
    );
}

#[test]
fn help_generator_direct() {
    let spec = ArgumentsSpec::new(
        UsageSpec::new(
            ProgramName::Literal("tool".to_string()),
            vec![PositionalSpec::new("input", true)],
        ),
        vec![OptionSpec::new(Some('v'), Some("verbose".to_string()), None, "be verbose", false)
            .unwrap()],
    )
    .unwrap();

    assert_eq!(
        HelpGenerator::new(&spec).build(None),
        "Usage: tool [options] <input>\n\nOptions:\n  -v, --verbose be verbose"
    );
}

#[test]
fn outcome_exit_codes() {
    let opts = CliOpts::from_text_spec("-h, --help show help\n-n <name> the name (required)")
        .unwrap()
        .color(ColorMode::Never);

    assert_eq!(opts.evaluate(&["prog", "-h"]).exit_code(), Some(0));
    assert_eq!(opts.evaluate(&["prog"]).exit_code(), Some(1));
    assert_matches!(opts.evaluate(&["prog", "-n", "x"]), Outcome::Proceed(values) => {
        assert_eq!(values.get("n"), Lookup::Value("x"));
    });
}

#[test]
fn empty_argv() {
    let argv: &[&str] = empty::slice();
    let values = get_opts("Usage: {self} [<maybe>]", argv).unwrap();

    assert_eq!(values.program(), "");
    assert!(values.is_empty());
    assert!(values.is_valid());
}

#[cfg(feature = "unit_test")]
#[test]
fn values_from_test_dummy() {
    use std::sync::Arc;

    let spec = TextSpecParser::parse("Usage: {self} <url>\n-v, --verbose be verbose").unwrap();
    let parsed = ParsedArguments::test_dummy(
        "prog",
        vec![("v", OptionValue::NoValue)],
        vec![("url", "http://a")],
        vec!["http://a"],
    );
    let values = ArgumentValues::new(Arc::new(spec), parsed);

    assert_eq!(values.get("verbose"), Lookup::NoValue);
    assert_eq!(values.get("url"), Lookup::Value("http://a"));
    assert!(values.is_valid());
}

fn assert_contains(errors: &[ValidationError], expected: ValidationError) {
    assert!(
        errors.contains(&expected),
        "'{errors:?}' does not contain '{expected:?}'"
    );
}
