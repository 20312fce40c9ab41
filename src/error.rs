/// A recoverable failure to recognize a shortcode.
///
/// The offset is in bytes, relative to the input handed to the entry point that reported it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct Error {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl Error {
    #[must_use]
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub(crate) fn translate(self, n: usize) -> Self {
        Self {
            offset: self.offset + n,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// Name is empty or contains a character other than a letter, digit, `_` or `-`.
    #[error("invalid shortcode name {0:?}")]
    InvalidName(String),
    /// Input ended inside a quoted value.
    #[error("unterminated quote, expected closing {quote}")]
    UnterminatedQuote { quote: char },
    /// A quote appeared in the middle of an unquoted value.
    #[error("unexpected quote {quote} in unquoted value")]
    UnexpectedQuote { quote: char },
    /// An `=` appeared where an attribute name or value should start.
    #[error("unexpected '='")]
    UnexpectedEquals,
    /// A named attribute starting with `$`, which is kept for positional attributes.
    #[error("attribute name {0:?} is reserved")]
    ReservedAttributeName(String),
    #[error("attribute {name:?} is missing a value")]
    MissingAttributeValue { name: String },
    /// Not a bracketed `[name ...]` span.
    #[error("invalid shortcode")]
    InvalidShortcode,
    #[error("end tag [/{found}] does not match [{expected}]")]
    MismatchedEndTag { expected: String, found: String },
    /// A `[` inside the content of an enclosing shortcode was not an end tag.
    #[error("expected end tag [/{expected}]")]
    ExpectedEndTag { expected: String },
    /// Input ended before the shortcode was closed.
    #[error("unterminated shortcode")]
    UnterminatedShortcode,
}
