use crate::tag;
use crate::Classify;
use crate::Error;
use crate::ErrorKind;
use crate::Event;
use crate::Shortcode;
use crate::Span;

use State::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside of any shortcode, buffering text.
    Text,
    /// Inside a start tag, after `[`.
    Start,
    /// Inside the body of an enclosing shortcode.
    Content,
    /// Saw `[` inside a body, expecting `/`.
    StartEnd,
    /// Inside an end tag, after `[/`.
    EndName,
}

/// An enclosing shortcode waiting for its end tag.
#[derive(Debug)]
struct Open {
    tag: Shortcode,
    /// Position of the `[` of the start tag.
    start: usize,
    content: Span,
}

/// Scanner over a full text body.
///
/// Content of an enclosing shortcode is not scanned for nested shortcodes, the first `[` in it
/// must begin the end tag.
#[derive(Debug)]
pub(crate) struct Scanner<'s> {
    src: &'s str,
    state: State,
    /// Start of the buffered span.
    start: usize,
    pos: usize,
    open: Option<Open>,
}

impl<'s> Scanner<'s> {
    pub fn new(src: &'s str) -> Self {
        Self {
            src,
            state: Text,
            start: 0,
            pos: 0,
            open: None,
        }
    }

    fn eat(&mut self) -> Option<char> {
        let c = self.src[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance until the next event, consulting `classify` whenever a start tag is complete.
    pub fn next_event<C: Classify + ?Sized>(&mut self, classify: &C) -> Option<(Event<'s>, Span)> {
        loop {
            let at = self.pos;
            let Some(c) = self.eat() else {
                return self.finish();
            };

            let event = match self.state {
                Text => {
                    if c == '[' {
                        let text = self.flush_text(at);
                        self.state = Start;
                        self.start = at;
                        text
                    } else {
                        None
                    }
                }
                Start => {
                    if c == ']' {
                        self.start_tag(classify)
                    } else {
                        None
                    }
                }
                Content => {
                    if c == '[' {
                        if let Some(open) = &mut self.open {
                            open.content = open.content.with_end(at);
                        }
                        self.state = StartEnd;
                        self.start = at;
                    }
                    None
                }
                StartEnd => {
                    if c == '/' {
                        self.state = EndName;
                        None
                    } else {
                        self.abandon()
                    }
                }
                EndName => {
                    if c == ']' {
                        self.end_tag()
                    } else {
                        None
                    }
                }
            };

            if event.is_some() {
                return event;
            }
        }
    }

    fn flush_text(&self, end: usize) -> Option<(Event<'s>, Span)> {
        let span = Span::new(self.start, end);
        (!span.is_empty()).then(|| (Event::Text(span.of(self.src)), span))
    }

    fn start_tag<C: Classify + ?Sized>(&mut self, classify: &C) -> Option<(Event<'s>, Span)> {
        let span = Span::new(self.start, self.pos);
        self.start = self.pos;
        match tag::parse(span.of(self.src)) {
            Ok(tag) if classify.expects_content(tag.name()) => {
                self.open = Some(Open {
                    tag,
                    start: span.start(),
                    content: Span::empty_at(self.pos),
                });
                self.state = Content;
                None
            }
            Ok(tag) => {
                self.state = Text;
                Some((Event::Shortcode(tag), span))
            }
            Err(e) => {
                self.state = Text;
                Some(self.error(span, e.translate(span.start())))
            }
        }
    }

    fn end_tag(&mut self) -> Option<(Event<'s>, Span)> {
        let open = self.open.take()?;
        let span = Span::new(open.start, self.pos);
        let name = &self.src[self.start + "[/".len()..self.pos - "]".len()];
        let tag_start = self.start;
        self.state = Text;
        self.start = self.pos;
        if name == open.tag.name() {
            let content = open.content.of(self.src);
            Some((Event::Shortcode(open.tag.with_content(content)), span))
        } else {
            let kind = ErrorKind::MismatchedEndTag {
                expected: open.tag.name().to_string(),
                found: name.to_string(),
            };
            Some(self.error(span, Error::new(kind, tag_start)))
        }
    }

    /// A `[` inside content that does not begin an end tag. The open tag and its content are
    /// reported as an error and scanning resumes as text from the `[`.
    fn abandon(&mut self) -> Option<(Event<'s>, Span)> {
        let open = self.open.take()?;
        let bracket = self.start;
        let span = Span::new(open.start, bracket);
        let kind = ErrorKind::ExpectedEndTag {
            expected: open.tag.name().to_string(),
        };
        self.state = Text;
        self.pos = bracket;
        Some(self.error(span, Error::new(kind, bracket)))
    }

    fn finish(&mut self) -> Option<(Event<'s>, Span)> {
        let end = self.src.len();
        let event = match self.state {
            Text => self.flush_text(end),
            Start => {
                let span = Span::new(self.start, end);
                Some(self.error(span, Error::new(ErrorKind::UnterminatedShortcode, span.start())))
            }
            Content | StartEnd | EndName => self.open.take().map(|open| {
                let span = Span::new(open.start, end);
                self.error(span, Error::new(ErrorKind::UnterminatedShortcode, span.start()))
            }),
        };
        self.state = Text;
        self.start = end;
        event
    }

    fn error(&self, span: Span, error: Error) -> (Event<'s>, Span) {
        tracing::debug!(
            offset = error.offset,
            kind = %error.kind,
            "recovered from malformed shortcode"
        );
        (Event::Error(span.of(self.src), error), span)
    }
}
