//! A parser for bracketed inline shortcodes.
//!
//! Shortcodes are small macros embedded in free-form text, either self-closing,
//!
//! ```text
//! [gallery 12 size="large"]
//! ```
//!
//! or enclosing a body that ends with a matching end tag,
//!
//! ```text
//! [quote author=anon]Some text[/quote]
//! ```
//!
//! Whether a name encloses content is decided by the caller through [`Classify`], at the point
//! the start tag is complete. Malformed shortcodes never abort a scan, they are reported as
//! [`Event::Error`] with the raw source span and scanning resumes as text.
//!
//! ```
//! use shortcode::{Event, Parser};
//!
//! let src = "see [ref 3] and [note]a remark[/note]";
//! let events = Parser::new(src, |name: &str| name == "note").collect::<Vec<_>>();
//! assert_eq!(events[0], Event::Text("see "));
//! match &events[3] {
//!     Event::Shortcode(s) => {
//!         assert_eq!(s.name(), "note");
//!         assert_eq!(s.content(), Some("a remark"));
//!     }
//!     _ => panic!(),
//! }
//! ```
//!
//! The content of an enclosing shortcode is not parsed for further shortcodes.

pub mod render;

mod attr;
mod error;
mod inline;
mod lex;
mod shortcode;
mod span;
mod tag;

use span::Span;

pub use attr::Attributes;
pub use error::Error;
pub use error::ErrorKind;
pub use shortcode::Shortcode;

/// An event produced by the parser, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'s> {
    /// Text outside of any shortcode. Never empty.
    Text(&'s str),
    /// A self-closing or enclosing shortcode.
    Shortcode(Shortcode),
    /// A span that could not be recognized, with the reason.
    Error(&'s str, Error),
}

/// Decides whether a shortcode name is followed by content and an end tag.
pub trait Classify {
    fn expects_content(&self, name: &str) -> bool;
}

impl<F> Classify for F
where
    F: Fn(&str) -> bool,
{
    fn expects_content(&self, name: &str) -> bool {
        self(name)
    }
}

/// Receiver of parse events, see [`parse`].
pub trait Handler<'s>: Classify {
    fn text(&mut self, text: &'s str);

    fn shortcode(&mut self, shortcode: Shortcode);

    fn parse_error(&mut self, raw: &'s str, error: Error);
}

/// Scan `src`, delivering every event to `handler` in source order.
///
/// Never fails; malformed spans are delivered with [`Handler::parse_error`].
pub fn parse<'s, H: Handler<'s> + ?Sized>(src: &'s str, handler: &mut H) {
    let mut scanner = inline::Scanner::new(src);
    while let Some((event, _)) = scanner.next_event(&*handler) {
        match event {
            Event::Text(text) => handler.text(text),
            Event::Shortcode(shortcode) => handler.shortcode(shortcode),
            Event::Error(raw, error) => handler.parse_error(raw, error),
        }
    }
}

/// Parse a source that consists of exactly one shortcode.
///
/// Equivalent to `src.parse::<Shortcode>()`.
pub fn parse_shortcode(src: &str) -> Result<Shortcode, Error> {
    src.parse()
}

/// Iterator over the events of a source.
pub struct Parser<'s, C> {
    scanner: inline::Scanner<'s>,
    classify: C,
}

impl<'s, C: Classify> Parser<'s, C> {
    #[must_use]
    pub fn new(src: &'s str, classify: C) -> Self {
        Self {
            scanner: inline::Scanner::new(src),
            classify,
        }
    }

    /// Turn the parser into an iterator of tuples, each with an event and its corresponding
    /// byte range in the source.
    ///
    /// The ranges are contiguous and together cover the whole source.
    #[must_use]
    pub fn into_offset_iter(self) -> OffsetIter<'s, C> {
        OffsetIter { parser: self }
    }
}

impl<'s, C: Classify> Iterator for Parser<'s, C> {
    type Item = Event<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scanner
            .next_event(&self.classify)
            .map(|(event, _)| event)
    }
}

/// An iterator that is identical to a [`Parser`], except that it also emits the location of
/// each event within the input.
pub struct OffsetIter<'s, C> {
    parser: Parser<'s, C>,
}

impl<'s, C: Classify> Iterator for OffsetIter<'s, C> {
    type Item = (Event<'s>, std::ops::Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        self.parser
            .scanner
            .next_event(&self.parser.classify)
            .map(|(event, span)| (event, span.into()))
    }
}
