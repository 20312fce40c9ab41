use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

use crate::attr::positional_key;
use crate::Attributes;
use crate::Error;
use crate::ErrorKind;
use crate::Event;

/// A recognized shortcode, e.g. `[name key="value"]` or `[name]content[/name]`.
///
/// The content is set if and only if the shortcode was matched with an end tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcode {
    name: String,
    attributes: Attributes,
    content: Option<String>,
}

impl Shortcode {
    pub(crate) fn new(name: String, attributes: Attributes) -> Self {
        Self {
            name,
            attributes,
            content: None,
        }
    }

    /// Same name and attributes, with `content` as body.
    #[must_use]
    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..self
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    #[must_use]
    pub fn is_enclosing(&self) -> bool {
        self.content.is_some()
    }

    /// Look up an attribute, ignoring the case of `name`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.attributes.get(&name.to_lowercase())
    }

    #[must_use]
    pub fn positional_value(&self, i: usize) -> Option<&str> {
        self.attributes.get(&positional_key(i))
    }

    /// Positional attributes in ascending index order.
    pub fn positional_values(&self) -> impl Iterator<Item = &str> + '_ {
        (0..).map_while(|i| self.positional_value(i))
    }
}

impl fmt::Display for Shortcode {
    /// Canonical form: attribute values are quoted unless a positional value can go bare, quote
    /// style, escapes and whitespace of the source are not preserved.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.name)?;
        let mut positional = 0;
        for (key, val) in self.attributes.iter() {
            f.write_char(' ')?;
            if key == positional_key(positional) {
                positional += 1;
                if is_bare(val) {
                    f.write_str(val)?;
                } else {
                    write_quoted(f, val)?;
                }
            } else {
                if is_bare(key) {
                    f.write_str(key)?;
                } else {
                    write_quoted(f, key)?;
                }
                f.write_char('=')?;
                write_quoted(f, val)?;
            }
        }
        f.write_char(']')?;
        if let Some(content) = &self.content {
            write!(f, "{}[/{}]", content, self.name)?;
        }
        Ok(())
    }
}

fn is_bare(val: &str) -> bool {
    !val.is_empty()
        && !val
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '=' | '"' | '\'' | ']' | '\\'))
}

/// Quote with `"`, or `'` if that avoids escaping. Backslashes and the quote are escaped.
fn write_quoted(f: &mut fmt::Formatter<'_>, val: &str) -> fmt::Result {
    let quote = if val.contains('"') && !val.contains('\'') {
        '\''
    } else {
        '"'
    };
    f.write_char(quote)?;
    for c in val.chars() {
        if c == quote || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char(quote)
}

impl FromStr for Shortcode {
    type Err = Error;

    /// Parse a source consisting of exactly one shortcode.
    ///
    /// Anything following the first `]` makes the shortcode enclosing, so it must be the body and
    /// a matching end tag.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let enclosing = src.find(']').map_or(false, |i| i + 1 < src.len());
        let mut shortcode = None;
        for (event, range) in crate::Parser::new(src, |_: &str| enclosing).into_offset_iter() {
            match event {
                Event::Shortcode(s) if shortcode.is_none() => shortcode = Some(s),
                Event::Error(_, e) => return Err(e),
                _ => return Err(Error::new(ErrorKind::InvalidShortcode, range.start)),
            }
        }
        shortcode.ok_or(Error::new(ErrorKind::InvalidShortcode, 0))
    }
}
