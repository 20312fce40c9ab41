//! Expansion of shortcodes into text.
//!
//! ```
//! use shortcode::render::Registry;
//!
//! let registry = Registry::new()
//!     .self_closing("br", |_| "<br>".to_string())
//!     .enclosing("b", |s| format!("<b>{}</b>", s.content().unwrap_or_default()));
//!
//! assert_eq!(
//!     registry.render("a[br][b]bold[/b] [unknown x]"),
//!     "a<br><b>bold</b> [unknown x]",
//! );
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::Classify;
use crate::Event;
use crate::Parser;
use crate::Shortcode;

type Expand = Box<dyn Fn(&Shortcode) -> String + Send + Sync>;

struct Entry {
    enclosing: bool,
    expand: Expand,
}

/// Named expansions, also used to classify names while scanning.
///
/// Text, shortcodes without an expansion and malformed spans are copied from the source as they
/// are. The output of an expansion is not scanned again.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<String, Entry>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shortcode that has no content, replacing any previous registration of `name`.
    #[must_use]
    pub fn self_closing<F>(self, name: impl Into<String>, expand: F) -> Self
    where
        F: Fn(&Shortcode) -> String + Send + Sync + 'static,
    {
        self.register(name.into(), false, Box::new(expand))
    }

    /// Register a shortcode that encloses content up to a matching end tag.
    #[must_use]
    pub fn enclosing<F>(self, name: impl Into<String>, expand: F) -> Self
    where
        F: Fn(&Shortcode) -> String + Send + Sync + 'static,
    {
        self.register(name.into(), true, Box::new(expand))
    }

    fn register(mut self, name: String, enclosing: bool, expand: Expand) -> Self {
        self.entries.insert(name, Entry { enclosing, expand });
        self
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn render(&self, src: &str) -> String {
        let mut out = String::with_capacity(src.len());
        self.push(src, &mut out);
        out
    }

    /// Append the expansion of `src` to `out`.
    pub fn push(&self, src: &str, out: &mut String) {
        let classify = |name: &str| self.expects_content(name);
        for (event, range) in Parser::new(src, classify).into_offset_iter() {
            match event {
                Event::Text(text) => out.push_str(text),
                Event::Shortcode(s) => match self.entries.get(s.name()) {
                    Some(entry) => out.push_str(&(entry.expand)(&s)),
                    None => {
                        tracing::trace!(name = s.name(), "no expansion registered");
                        out.push_str(&src[range]);
                    }
                },
                Event::Error(raw, _) => out.push_str(raw),
            }
        }
    }
}

impl Classify for Registry {
    fn expects_content(&self, name: &str) -> bool {
        self.entries.get(name).map_or(false, |e| e.enclosing)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, e)| {
                let kind = if e.enclosing {
                    "enclosing"
                } else {
                    "self-closing"
                };
                (name, kind)
            }))
            .finish()
    }
}
