//! Combinator Framework
//!
//! Parser combinators over immutable character streams: a first-class
//! [`Parser`] value, a [`ParseResult`] that carries position and
//! expectations, and the algebra (`either`, `many`, `between`, `sep_by`,
//! `recursive`, ...) from which recursive-descent grammars are composed.

pub mod combinator;
pub mod join;
pub mod parser;
pub mod primitive;
pub mod recursive;
pub mod result;
pub mod stream;

pub use combinator::{
    any, append, apply, assemble, at_least_one, between, bind, choice, collect, either,
    keep_first, keep_second, many, map, not_followed_by, optional, repeat, repeat_list, sep_by,
    sep_by1, sequence, some, with_label, ApplyFn,
};
pub use common_framework::{Position, TextSlice};
pub use join::Join;
pub use parser::Parser;
pub use primitive::{
    alpha_num_char, any_single, char, digit_char, eof, fail, none_of, one_of, pure, satisfy,
    string, succeed,
};
pub use recursive::{recursive, RecursiveParser};
pub use result::{ParseError, ParseResult};
pub use stream::Stream;
