use crate::lex::Lexer;
use crate::Error;
use crate::ErrorKind;

/// Parse the attribute part of a start tag.
///
/// A token followed by `=` names an attribute and the next token is its value; the name is
/// lowercased and may not start with `$`. Any other token is positional and stored under `$0`,
/// `$1`, ... in order.
pub(crate) fn parse(src: &str) -> Result<Attributes, Error> {
    let mut attrs = Attributes::new();
    let mut positional = 0;
    let mut tokens = Lexer::new(src);

    while let Some(token) = tokens.next().transpose()? {
        if token.assign.is_some() {
            let value = match tokens.next().transpose()? {
                Some(value) => value,
                None => {
                    return Err(Error::new(
                        ErrorKind::MissingAttributeValue {
                            name: token.value.to_string(),
                        },
                        token.offset,
                    ))
                }
            };
            if let Some(pos) = value.assign {
                return Err(Error::new(ErrorKind::UnexpectedEquals, pos));
            }
            let name = token.value.to_lowercase();
            if name.starts_with('$') {
                return Err(Error::new(
                    ErrorKind::ReservedAttributeName(name),
                    token.offset,
                ));
            }
            attrs.insert(name, value.value.into_owned());
        } else {
            attrs.insert(positional_key(positional), token.value.into_owned());
            positional += 1;
        }
    }

    Ok(attrs)
}

pub(crate) fn positional_key(i: usize) -> String {
    format!("${}", i)
}

/// Attributes of a shortcode, in the order they first appeared.
///
/// Named attributes are keyed by their lowercased name, positional attributes by `$0`, `$1`, ...
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `val`, keeping the position of a previous value for the same key.
    pub(crate) fn insert(&mut self, key: String, val: String) {
        if let Some((_, prev)) = self.0.iter_mut().find(|(k, _)| *k == key) {
            *prev = val;
        } else {
            self.0.push((key, val));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Exact lookup, keys are not case folded here.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k.into(), v.into());
        }
        attrs
    }
}
