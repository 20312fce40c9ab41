use std::borrow::Cow;

use crate::Error;
use crate::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'s> {
    /// Token text, without surrounding quotes and with escapes resolved.
    pub value: Cow<'s, str>,
    /// Offset of the first character, including an opening quote.
    pub offset: usize,
    /// Offset of a `=` directly following the token, if any.
    pub assign: Option<usize>,
}

/// Splits the attribute part of a start tag into tokens.
///
/// Tokens are separated by whitespace. A token may be quoted with `"` or `'`, in which case only
/// the same quote ends it. An `=` outside of quotes ends a token and marks it as an attribute
/// name. A backslash makes the following character literal, quoted or not. Iteration stops after
/// the first error.
#[derive(Clone)]
pub(crate) struct Lexer<'s> {
    src: &'s str,
    chars: std::str::Chars<'s>,
    pos: usize,
    done: bool,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Lexer<'s> {
        Lexer {
            src,
            chars: src.chars(),
            pos: 0,
            done: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    fn eat(&mut self) -> Option<char> {
        let c = self.chars.next();
        self.pos += c.map_or(0, char::len_utf8);
        c
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while self.peek().map_or(false, &mut predicate) {
            self.eat();
        }
    }

    fn token(&mut self) -> Result<Option<Token<'s>>, Error> {
        self.eat_while(char::is_whitespace);

        let offset = self.pos;
        let Some(first) = self.peek() else {
            return Ok(None);
        };

        let value = match first {
            '"' | '\'' => {
                self.eat();
                let start = self.pos;
                loop {
                    match self.eat() {
                        None => {
                            return Err(Error::new(
                                ErrorKind::UnterminatedQuote { quote: first },
                                offset,
                            ))
                        }
                        Some('\\') => {
                            self.eat();
                        }
                        Some(c) if c == first => break,
                        Some(_) => {}
                    }
                }
                unescape(&self.src[start..self.pos - first.len_utf8()])
            }
            '=' => return Err(Error::new(ErrorKind::UnexpectedEquals, offset)),
            _ => {
                while let Some(c) = self.peek() {
                    if c.is_whitespace() || c == '=' {
                        break;
                    }
                    if is_quote(c) {
                        return Err(Error::new(ErrorKind::UnexpectedQuote { quote: c }, self.pos));
                    }
                    self.eat();
                    if c == '\\' {
                        self.eat();
                    }
                }
                unescape(&self.src[offset..self.pos])
            }
        };

        self.eat_while(char::is_whitespace);
        let assign = (self.peek() == Some('=')).then_some(self.pos);
        if assign.is_some() {
            self.eat();
        }

        Ok(Some(Token {
            value,
            offset,
            assign,
        }))
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Result<Token<'s>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.token().transpose();
        if !matches!(token, Some(Ok(_))) {
            self.done = true;
        }
        token
    }
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

/// Drop each escaping backslash. A trailing backslash is kept.
fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('\\') {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod test {
    use super::Token;
    use crate::Error;
    use crate::ErrorKind;

    macro_rules! test_lex {
        ($src:expr $(,$($token:expr),* $(,)?)?) => {
            #[allow(unused)]
            let actual = super::Lexer::new($src).collect::<Vec<_>>();
            let expected: Vec<Result<Token, Error>> = vec![$($($token),*,)?];
            assert_eq!(actual, expected, "{}", $src);
        };
    }

    fn t(value: &str, offset: usize, assign: Option<usize>) -> Result<Token, Error> {
        Ok(Token {
            value: value.into(),
            offset,
            assign,
        })
    }

    #[test]
    fn empty() {
        test_lex!("");
        test_lex!("   ");
    }

    #[test]
    fn bare() {
        test_lex!("abc", t("abc", 0, None));
        test_lex!(
            " abc  def",
            t("abc", 1, None),
            t("def", 6, None),
        );
    }

    #[test]
    fn assign() {
        test_lex!(
            "k=v",
            t("k", 0, Some(1)),
            t("v", 2, None),
        );
        test_lex!(
            "k = v",
            t("k", 0, Some(2)),
            t("v", 4, None),
        );
    }

    #[test]
    fn quoted() {
        test_lex!(
            r#""a b" 'c d'"#,
            t("a b", 0, None),
            t("c d", 6, None),
        );
        test_lex!(
            r#"k="it's""#,
            t("k", 0, Some(1)),
            t("it's", 2, None),
        );
        test_lex!(
            r#"k='say "hi"'"#,
            t("k", 0, Some(1)),
            t(r#"say "hi""#, 2, None),
        );
        test_lex!(r#""""#, t("", 0, None));
    }

    #[test]
    fn quoted_name() {
        test_lex!(
            r#""Key"=v"#,
            t("Key", 0, Some(5)),
            t("v", 6, None),
        );
    }

    #[test]
    fn unicode() {
        test_lex!(
            "ÿ=ö ü",
            t("ÿ", 0, Some(2)),
            t("ö", 3, None),
            t("ü", 6, None),
        );
    }

    #[test]
    fn unterminated_quote() {
        test_lex!(
            r#"a "bc"#,
            t("a", 0, None),
            Err(Error::new(ErrorKind::UnterminatedQuote { quote: '"' }, 2)),
        );
        test_lex!(
            r#"'bc""#,
            Err(Error::new(ErrorKind::UnterminatedQuote { quote: '\'' }, 0)),
        );
    }

    #[test]
    fn unexpected_quote() {
        test_lex!(
            r#"ab"c""#,
            Err(Error::new(ErrorKind::UnexpectedQuote { quote: '"' }, 2)),
        );
    }

    #[test]
    fn unexpected_equals() {
        test_lex!("=v", Err(Error::new(ErrorKind::UnexpectedEquals, 0)));
        test_lex!(
            "k==v",
            t("k", 0, Some(1)),
            Err(Error::new(ErrorKind::UnexpectedEquals, 2)),
        );
    }

    #[test]
    fn escape_bare() {
        test_lex!(r"a\ b c", t("a b", 0, None), t("c", 5, None));
        test_lex!(r"k\=v", t("k=v", 0, None));
        test_lex!(r"k=it\'s", t("k", 0, Some(1)), t("it's", 2, None));
        test_lex!(r"a\\b", t(r"a\b", 0, None));
        test_lex!(r"a\", t(r"a\", 0, None));
    }

    #[test]
    fn escape_quoted() {
        test_lex!(r#""say \"hi\"""#, t(r#"say "hi""#, 0, None));
        test_lex!(r#"'\\' x"#, t(r"\", 0, None), t("x", 5, None));
        test_lex!(
            r#""a\""#,
            Err(Error::new(ErrorKind::UnterminatedQuote { quote: '"' }, 0)),
        );
    }
}
