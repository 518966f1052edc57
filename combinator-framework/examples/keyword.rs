//! Minimal combinator example.
//!
//! Demonstrates the combinator-framework workflow:
//! 1. Build leaf parsers from primitives.
//! 2. Compose them with combinators.
//! 3. Run the root parser over an input string.
//!
//! The example recognises the keyword `let` as a whole word: `let` followed
//! by another identifier character is a different identifier, not the
//! keyword.

use combinator_framework::{alpha_num_char, keep_first, not_followed_by, string, Parser};

fn keyword(word: &str) -> Parser<String> {
    keep_first(string(word), not_followed_by(alpha_num_char()))
}

fn main() {
    println!("=== Keyword Example ===\n");

    let let_keyword = keyword("let");

    for input in ["let x = 1", "letter", "lex", "let"] {
        println!("Input: {input:?}");
        let result = let_keyword.parse(input);
        match result.into_result() {
            Ok((value, remaining)) => {
                println!("  Matched keyword {:?}, rest: {:?}", value, remaining.remaining().as_ref());
            }
            Err(error) => println!("  {error}"),
        }
        println!();
    }
}
