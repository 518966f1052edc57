//! Failure quality and boundary scenarios: what errors say, where they
//! point, and how they convert into standard error handling.

use combinator_framework::{
    char, digit_char, either, eof, sequence, string, with_label, ParseError, Stream,
};

#[test]
fn test_failure_rendering() {
    let parser = sequence(char('a'), char('b'));
    let result = parser.parse("ax");
    assert_eq!(
        result.error().to_string(),
        "Expected 'b', got x at line 1 column 2"
    );
}

#[test]
fn test_failure_rendering_at_eof() {
    let result = digit_char().parse("");
    assert_eq!(
        result.error().to_string(),
        "Expected digit, got <EOF> at line 1 column 1"
    );
}

#[test]
fn test_failure_on_later_line() {
    let parser = sequence(string("ab\n"), digit_char());
    let result = parser.parse("ab\nx");
    let error = result.error();
    assert_eq!(error.position.line, 2);
    assert_eq!(error.position.column, 1);
    assert_eq!(error.got, "x");
}

#[test]
fn test_failure_is_deepest_point_of_chosen_branch() {
    // The failure names the stage that actually failed, at its position.
    let parser = sequence(sequence(char('a'), char('b')), char('c'));
    let result = parser.parse("abx");
    let error = result.error();
    assert_eq!(error.expected, "'c'");
    assert_eq!(error.position.column, 3);
}

#[test]
fn test_either_reports_right_branch_got() {
    // The left branch consumed "ab" before failing, but the combined
    // failure reports what the right branch saw from the original input.
    let parser = either(string("abc"), char('z'));
    let result = parser.parse("abX");
    let error = result.error();
    assert_eq!(error.expected, "\"abc\" or 'z'");
    assert_eq!(error.got, "a");
    assert_eq!(error.position.column, 1);
}

#[test]
fn test_relabelled_grammar_reads_naturally() {
    let parser = with_label(
        either(char('+'), char('-')),
        "an operator",
    );
    let result = parser.parse("7");
    assert_eq!(
        result.error().to_string(),
        "Expected an operator, got 7 at line 1 column 1"
    );
}

#[test]
fn test_parse_error_is_std_error() {
    let result = digit_char().parse("x");
    let boxed: Box<dyn std::error::Error> = Box::new(result.error().clone());
    assert!(boxed.to_string().starts_with("Expected digit"));
}

#[test]
fn test_into_result_supports_question_mark() {
    fn run(input: &str) -> Result<char, ParseError> {
        let (value, remaining) = digit_char().parse(input).into_result()?;
        eof().run(&remaining).into_result()?;
        Ok(value)
    }

    assert_eq!(run("7").unwrap(), '7');
    assert_eq!(run("77").unwrap_err().expected, "<EOF>");
    assert_eq!(run("x").unwrap_err().expected, "digit");
}

#[test]
fn test_failure_recovery_keeps_original_stream_usable() {
    // A failed branch leaves the caller's stream untouched, so the same
    // stream value can be handed to another parser.
    let stream = Stream::new("42");
    assert!(char('x').run(&stream).is_failure());
    let result = digit_char().run(&stream);
    assert_eq!(result.value(), '4');
}
