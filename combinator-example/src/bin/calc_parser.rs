//! Calculator parser example.
//!
//! Shows how a recursive grammar is assembled from the combinator
//! framework: a self-referential `expr` rule built with `recursive`,
//! precedence expressed by layering `operator_chain`, and evaluation done
//! directly in `map` while parsing.

use combinator_framework::{
    at_least_one, between, bind, char, digit_char, either, eof, keep_first, many, map, one_of,
    recursive, Parser,
};

/// Left-associative chain: `operand (op operand)*`, folded as it parses.
fn operator_chain(operand: Parser<i64>, operators: &str) -> Parser<i64> {
    let rhs = {
        let operand = operand.clone();
        bind(one_of(operators), move |op| {
            map(operand.clone(), move |value| (op, value))
        })
    };
    let tail = many(rhs);
    bind(operand, move |first| {
        map(tail.clone(), move |rest| {
            rest.into_iter()
                .fold(first, |acc, (op, value)| apply_operator(acc, op, value))
        })
    })
}

fn apply_operator(left: i64, op: char, right: i64) -> i64 {
    match op {
        '+' => left + right,
        '-' => left - right,
        '*' => left * right,
        '/' => left / right,
        _ => left,
    }
}

/// expr   = term (('+' | '-') term)*
/// term   = factor (('*' | '/') factor)*
/// factor = number | '(' expr ')'
fn expression() -> Parser<i64> {
    let expr = recursive::<i64>();
    let expr_ref = expr.parser();

    let number = map(
        at_least_one(map(digit_char(), String::from)),
        |digits| digits.parse().unwrap_or(0),
    );
    let factor = either(between(char('('), char(')'), expr_ref), number);
    let term = operator_chain(factor, "*/");
    expr.recurse(operator_chain(term, "+-"))
}

fn main() {
    println!("=== Calculator Parser Example ===\n");

    // The root parser must consume the whole input.
    let calculator = keep_first(expression(), eof());

    let inputs = [
        "1+2*3",
        "(1+2)*3",
        "10-4-3",
        "2*(3+4)-5",
        "((7))",
        "1+",
        "1 + 2",
    ];

    for input in inputs {
        print!("{input:<12} => ");
        match calculator.parse(input).into_result() {
            Ok((value, _)) => println!("{value}"),
            Err(error) => println!("{error}"),
        }
    }
}
