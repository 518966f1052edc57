//! Forward-declared parsers for self-referential grammars.
//!
//! A grammar like `expr = '(' expr ')' | 'x'` needs a back-edge between
//! parsers that are plain values. Strict construction cannot build that
//! cycle in one pass, so [`recursive`] hands out a placeholder first and
//! [`RecursiveParser::recurse`] fills in the body afterwards.

use crate::parser::Parser;
use std::sync::{Arc, OnceLock, Weak};

/// Creates a forward-declared parser whose body is installed later.
///
/// Clone the placeholder (via [`RecursiveParser::parser`]) into the body
/// wherever the grammar refers to itself, then call
/// [`RecursiveParser::recurse`] exactly once with the finished body.
/// Running the placeholder before the body is installed panics: that is
/// a construction-order bug, not a parse failure.
pub fn recursive<T: 'static>() -> RecursiveParser<T> {
    RecursiveParser::new()
}

/// A parser placeholder plus the write-once slot its body lives in.
///
/// The placeholder's closure holds only a [`Weak`] reference to the slot;
/// the parser returned by [`RecursiveParser::recurse`] owns the strong
/// one. The slot keeps the body alive and the body's embedded placeholder
/// clones point back at the slot only weakly, so the cycle contains no
/// strong loop and frees normally when the grammar is dropped.
pub struct RecursiveParser<T: 'static> {
    slot: Arc<OnceLock<Parser<T>>>,
    placeholder: Parser<T>,
}

impl<T: 'static> RecursiveParser<T> {
    fn new() -> Self {
        let slot: Arc<OnceLock<Parser<T>>> = Arc::new(OnceLock::new());
        let weak: Weak<OnceLock<Parser<T>>> = Arc::downgrade(&slot);
        let placeholder = Parser::new("<recursive>", move |input| {
            let slot = weak
                .upgrade()
                .expect("recursive parser used after its installed body was dropped");
            let body = slot
                .get()
                .expect("recursive parser run before `recurse` installed a body");
            body.run(input)
        });
        Self { slot, placeholder }
    }

    /// Returns a handle to the placeholder for self-reference inside the
    /// body under construction.
    pub fn parser(&self) -> Parser<T> {
        self.placeholder.clone()
    }

    /// Installs `body` and returns the finished parser.
    ///
    /// Consumes the declaration, so the body can be installed only once.
    /// The returned parser keeps the slot alive on behalf of every
    /// placeholder clone embedded in the body.
    pub fn recurse(self, body: Parser<T>) -> Parser<T> {
        let label = body.label().to_string();
        if self.slot.set(body).is_err() {
            panic!("recursive parser body installed twice");
        }
        let slot = self.slot;
        Parser::new(label, move |input| match slot.get() {
            Some(body) => body.run(input),
            // Unreachable: set just above, and nothing ever clears the slot.
            None => panic!("recursive parser body missing"),
        })
    }
}
