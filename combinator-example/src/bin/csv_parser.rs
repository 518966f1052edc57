//! CSV parser example.
//!
//! A record is fields separated by commas; a file is records separated by
//! line feeds. Fields may be empty, so the whole grammar never fails,
//! which also demonstrates that `sep_by` is total.

use combinator_framework::{char, eof, keep_first, map, many, none_of, sep_by, Parser};

fn field() -> Parser<String> {
    map(many(none_of(",\n")), |chars| chars.into_iter().collect())
}

fn record() -> Parser<Vec<String>> {
    sep_by(char(','), field())
}

fn file() -> Parser<Vec<Vec<String>>> {
    keep_first(sep_by(char('\n'), record()), eof())
}

fn main() {
    println!("=== CSV Parser Example ===\n");

    let input = "name,role,city\nada,engineer,london\ngrace,admiral,\n,,arlington";
    println!("Input:\n{input}\n");

    let result = file().parse(input);
    match result.into_result() {
        Ok((records, _)) => {
            for (index, fields) in records.iter().enumerate() {
                println!("Record {index}: {fields:?}");
            }
        }
        Err(error) => println!("{error}"),
    }
}
