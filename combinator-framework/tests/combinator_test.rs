use combinator_framework::{
    alpha_num_char, any, any_single, append, apply, assemble, at_least_one, between, bind, char,
    choice, collect, digit_char, either, keep_first, keep_second, many, map, not_followed_by,
    optional, pure, repeat, repeat_list, sep_by, sep_by1, sequence, some, string, with_label,
    ApplyFn, Parser, Stream,
};
use std::sync::Arc;

fn char_string(expected: char) -> Parser<String> {
    map(char(expected), |ch| ch.to_string())
}

#[test]
fn test_map() {
    let parser = map(digit_char(), |ch| ch.to_digit(10).unwrap());
    assert_eq!(parser.parse("7").value(), 7);
    assert_eq!(parser.label(), "digit");
    // Failure passes through with the inner parser's expectation.
    assert_eq!(parser.parse("x").error().expected, "digit");
}

#[test]
fn test_bind() {
    // A digit telling us how many 'x's follow.
    let parser = bind(digit_char(), |d| {
        repeat_list(d.to_digit(10).unwrap() as usize, char('x'))
    });
    assert_eq!(parser.parse("2xx").value(), vec!['x', 'x']);
    assert!(parser.parse("3xx").is_failure());
}

#[test]
fn test_apply() {
    let double: ApplyFn<char, String> = Arc::new(|ch: char| format!("{ch}{ch}"));
    let parser = apply(pure(double), char('a'));
    let result = parser.parse("ab");
    assert_eq!(result.clone().value(), "aa");
    assert_eq!(result.remaining().remaining(), "b");
}

#[test]
fn test_apply_curried_chain() {
    // Two-argument applicative style: pure(f).apply(p1).apply(p2), where f
    // is curried so each application peels off one argument.
    let pair: ApplyFn<char, ApplyFn<char, String>> = Arc::new(|first: char| {
        let partial: ApplyFn<char, String> =
            Arc::new(move |second: char| format!("{first}{second}"));
        partial
    });

    let parser = pure(pair).apply(char('a')).apply(char('b'));
    let result = parser.parse("abc");
    assert_eq!(result.clone().value(), "ab");
    assert_eq!(result.remaining().remaining(), "c");

    // Each argument parser fails in order, like any other sequencing.
    assert_eq!(parser.parse("xbc").error().expected, "'a'");
    assert_eq!(parser.parse("axc").error().expected, "'b'");
}

#[test]
fn test_sequence() {
    // Scenario: 'a' then 'b' over "abc" yields 'b' with "c" left.
    let parser = sequence(char('a'), char('b'));
    let result = parser.parse("abc");
    assert_eq!(result.clone().value(), 'b');
    assert_eq!(result.remaining().remaining(), "c");
}

#[test]
fn test_sequence_failure_from_either_stage() {
    let parser = sequence(char('a'), char('b'));
    assert_eq!(parser.parse("xbc").error().expected, "'a'");
    assert_eq!(parser.parse("axc").error().expected, "'b'");
}

#[test]
fn test_keep_first() {
    let parser = keep_first(char('a'), char('b'));
    let result = parser.parse("abc");
    assert_eq!(result.clone().value(), 'a');
    assert_eq!(result.remaining().remaining(), "c");
}

#[test]
fn test_keep_second_is_sequence() {
    let stream = Stream::new("abc");
    assert_eq!(
        keep_second(char('a'), char('b')).run(&stream),
        sequence(char('a'), char('b')).run(&stream)
    );
}

#[test]
fn test_either_prefers_left() {
    let result = either(char('a'), char('b')).parse("abc");
    assert_eq!(result.value(), 'a');
}

#[test]
fn test_either_falls_back_to_right() {
    // Scenario: 'a' or 'b' over "banana".
    let result = either(char('a'), char('b')).parse("banana");
    assert_eq!(result.clone().value(), 'b');
    assert_eq!(result.remaining().remaining(), "anana");
}

#[test]
fn test_either_label_and_combined_failure() {
    let parser = either(char('a'), char('b'));
    assert_eq!(parser.label(), "'a' or 'b'");
    let result = parser.parse("xyz");
    let error = result.error();
    assert_eq!(error.expected, "'a' or 'b'");
    assert_eq!(error.got, "x");
}

#[test]
fn test_any_takes_first_match() {
    let parser = any(vec![char('a'), char('b'), char('c')]);
    assert_eq!(parser.parse("c").value(), 'c');
    assert_eq!(parser.label(), "'a' or 'b' or 'c'");
}

#[test]
fn test_any_combined_failure() {
    let parser = any(vec![char('a'), char('b')]);
    let result = parser.parse("z");
    let error = result.error();
    assert_eq!(error.expected, "'a' or 'b'");
    assert_eq!(error.got, "z");
    assert_eq!(error.position.column, 1);
}

#[test]
fn test_choice_is_any() {
    assert_eq!(
        choice(vec![char('a'), char('b')]).parse("b").value(),
        any(vec![char('a'), char('b')]).parse("b").value()
    );
}

#[test]
#[should_panic(expected = "`any` requires at least one parser")]
fn test_any_of_nothing_panics() {
    let _ = any::<char>(Vec::new());
}

#[test]
fn test_append_concatenates() {
    let parser = append(char_string('a'), char_string('b'));
    let result = parser.parse("abc");
    assert_eq!(result.clone().value(), "ab");
    assert_eq!(result.remaining().remaining(), "c");
}

#[test]
fn test_append_takes_right_label() {
    let parser = append(char_string('a'), char_string('b'));
    assert_eq!(parser.label(), "'b'");
}

#[test]
fn test_append_first_failure_wins() {
    let parser = append(char_string('a'), char_string('b'));
    assert_eq!(parser.parse("xb").error().expected, "'a'");
    assert_eq!(parser.parse("ax").error().expected, "'b'");
}

#[test]
fn test_assemble() {
    let parser = assemble(vec![char_string('a'), char_string('b'), char_string('c')]);
    assert_eq!(parser.parse("abc").value(), "abc");
}

#[test]
#[should_panic(expected = "`assemble` requires at least one parser")]
fn test_assemble_of_nothing_panics() {
    let _ = assemble::<String>(Vec::new());
}

#[test]
fn test_collect_yields_one_element_per_parser() {
    let parser = collect(vec![char('a'), char('b'), char('c')]);
    assert_eq!(parser.parse("abc").value(), vec!['a', 'b', 'c']);
}

#[test]
fn test_optional_present() {
    let parser = optional(char_string('a'));
    let result = parser.parse("ab");
    assert_eq!(result.clone().value(), "a");
    assert_eq!(result.remaining().remaining(), "b");
}

#[test]
fn test_optional_absent_never_fails() {
    let parser = optional(char_string('a'));
    let result = parser.parse("xb");
    assert_eq!(result.clone().value(), "");
    assert_eq!(result.remaining().remaining(), "xb");
}

#[test]
fn test_many_zero_matches() {
    let result = many(char('a')).parse("bbb");
    assert_eq!(result.clone().value(), Vec::<char>::new());
    assert_eq!(result.remaining().remaining(), "bbb");
}

#[test]
fn test_many_collects_until_mismatch() {
    // Scenario: many 'a' over "aaab".
    let result = many(char('a')).parse("aaab");
    assert_eq!(result.clone().value(), vec!['a', 'a', 'a']);
    assert_eq!(result.remaining().remaining(), "b");
}

#[test]
#[should_panic(expected = "succeeds without consuming")]
fn test_many_of_nonconsuming_parser_panics() {
    let _ = many(pure('a')).parse("bbb");
}

#[test]
fn test_some_requires_one() {
    let parser = some(char('a'));
    assert_eq!(parser.parse("aab").value(), vec!['a', 'a']);
    assert_eq!(parser.parse("b").error().expected, "'a'");
}

#[test]
fn test_at_least_one_joins_values() {
    let parser = at_least_one(map(digit_char(), |ch| ch.to_string()));
    let result = parser.parse("123x");
    assert_eq!(result.clone().value(), "123");
    assert_eq!(result.remaining().remaining(), "x");
    assert!(parser.parse("x").is_failure());
}

#[test]
fn test_repeat_string_monoid() {
    // Scenario: exactly three 'a's over "aaab", string monoid.
    let parser = repeat(3, char_string('a'));
    let result = parser.parse("aaab");
    assert_eq!(result.clone().value(), "aaa");
    assert_eq!(result.remaining().remaining(), "b");
}

#[test]
fn test_repeat_label() {
    assert_eq!(repeat(3, char_string('a')).label(), "3 times 'a'");
    assert_eq!(repeat(3, map(digit_char(), |ch| ch.to_string())).label(), "3 times digit");
}

#[test]
fn test_repeat_too_few_occurrences() {
    let parser = repeat(3, char_string('a'));
    let result = parser.parse("aab");
    let error = result.error();
    assert_eq!(error.expected, "'a'");
    assert_eq!(error.got, "b");
    assert_eq!(error.position.column, 3);
}

#[test]
#[should_panic(expected = "`repeat` requires at least one repetition")]
fn test_repeat_zero_panics() {
    let _ = repeat(0, char_string('a'));
}

#[test]
fn test_repeat_list() {
    // Scenario: exactly three 'a's, kept as a sequence.
    let result = repeat_list(3, char('a')).parse("aaab");
    assert_eq!(result.clone().value(), vec!['a', 'a', 'a']);
    assert_eq!(result.remaining().remaining(), "b");
}

#[test]
#[should_panic(expected = "`repeat_list` requires at least one repetition")]
fn test_repeat_list_zero_panics() {
    let _ = repeat_list(0, char('a'));
}

#[test]
fn test_between() {
    // Scenario: 'x' between parentheses.
    let parser = between(char('('), char(')'), char('x'));
    assert_eq!(parser.parse("(x)").value(), 'x');
    assert_eq!(parser.label(), "between");
}

#[test]
fn test_between_inner_failures_stay_precise() {
    let parser = between(char('('), char(')'), char('x'));
    assert_eq!(parser.parse("x)").error().expected, "'('");
    assert_eq!(parser.parse("(y)").error().expected, "'x'");
    assert_eq!(parser.parse("(x!").error().expected, "')'");
}

#[test]
fn test_sep_by1() {
    let parser = sep_by1(char(','), any_single());
    let result = parser.parse("a,b,c");
    assert_eq!(result.clone().value(), vec!['a', 'b', 'c']);
    assert!(result.remaining().is_eof());
    assert_eq!(parser.label(), "sepBy1");
}

#[test]
fn test_sep_by1_requires_leading_element() {
    let parser = sep_by1(char(','), digit_char());
    assert!(parser.parse("x").is_failure());
}

#[test]
fn test_sep_by1_leaves_trailing_separator() {
    let parser = sep_by1(char(','), digit_char());
    let result = parser.parse("1,2,");
    assert_eq!(result.clone().value(), vec!['1', '2']);
    assert_eq!(result.remaining().remaining(), ",");
}

#[test]
fn test_sep_by() {
    // Scenario: any characters separated by commas.
    let result = sep_by(char(','), any_single()).parse("a,b,c");
    assert_eq!(result.clone().value(), vec!['a', 'b', 'c']);
    assert_eq!(result.remaining().remaining(), "");
}

#[test]
fn test_sep_by_empty_input_succeeds() {
    let parser = sep_by(char(','), digit_char());
    let result = parser.parse("");
    assert_eq!(result.value(), Vec::<char>::new());
}

#[test]
fn test_not_followed_by_keyword_boundary() {
    // "print" must not be a prefix of a longer identifier.
    let keyword = || keep_first(string("print"), not_followed_by(alpha_num_char()));
    assert!(keyword().parse("printXYZ").is_failure());
    let result = keyword().parse("print ");
    assert_eq!(result.value(), "print");
}

#[test]
fn test_not_followed_by_consumes_nothing() {
    let parser = not_followed_by(char('a'));
    let result = parser.parse("bcd");
    assert_eq!(result.clone().value(), "");
    assert_eq!(result.remaining().offset(), 0);
}

#[test]
fn test_not_followed_by_fails_on_match() {
    let parser = not_followed_by(char('a'));
    let result = parser.parse("abc");
    let error = result.error();
    assert_eq!(error.expected, "notFollowedBy('a')");
    assert_eq!(error.got, "a");
}

#[test]
fn test_with_label_rewrites_expectation_only() {
    let parser = with_label(digit_char(), "a number");
    let result = parser.parse("x1");
    let error = result.error();
    assert_eq!(error.expected, "a number");
    assert_eq!(error.got, "x");
    assert_eq!(error.position.column, 1);
}

#[test]
fn test_method_forms_match_free_functions() {
    // Comparisons share one stream: result equality includes the identity
    // of the underlying buffer.
    let stream = Stream::new("abc");
    assert_eq!(
        sequence(char('a'), char('b')).run(&stream),
        char('a').sequence(char('b')).run(&stream)
    );
    assert_eq!(
        keep_first(char('a'), char('b')).run(&stream),
        char('a').then_ignore(char('b')).run(&stream)
    );
    assert_eq!(
        map(char('a'), |ch| ch.to_string()).run(&stream),
        char('a').map(|ch| ch.to_string()).run(&stream)
    );
    assert_eq!(
        append(char_string('a'), char_string('b')).run(&stream),
        char_string('a').append(char_string('b')).run(&stream)
    );

    let stream = Stream::new("bx");
    assert_eq!(
        either(char('a'), char('b')).run(&stream),
        char('a').or(char('b')).run(&stream)
    );
    assert_eq!(
        not_followed_by(char('a')).run(&stream),
        char('a').not_followed_by().run(&stream)
    );
}
