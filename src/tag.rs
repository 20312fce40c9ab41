use crate::attr;
use crate::Error;
use crate::ErrorKind;
use crate::Shortcode;

/// Parse a complete start tag, `[name attributes...]`.
///
/// The name runs from just after the `[` to the first whitespace. The returned shortcode never
/// has content.
pub(crate) fn parse(src: &str) -> Result<Shortcode, Error> {
    let inner = src
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .filter(|s| src.len() >= 3 && !s.trim().is_empty())
        .ok_or(Error::new(ErrorKind::InvalidShortcode, 0))?;

    let name_end = inner.find(char::is_whitespace).unwrap_or(inner.len());
    let name = &inner[..name_end];
    if !valid_name(name) {
        return Err(Error::new(ErrorKind::InvalidName(name.to_string()), 1));
    }

    let attributes = attr::parse(&inner[name_end..]).map_err(|e| e.translate(1 + name_end))?;

    Ok(Shortcode::new(name.to_string(), attributes))
}

pub(crate) fn valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name)
}

fn is_name(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-')
}
