#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "{} > {}", start, end);
        Self { start, end }
    }

    pub fn empty_at(start: usize) -> Self {
        Self::new(start, start)
    }

    pub fn with_end(self, end: usize) -> Self {
        Self::new(self.start, end)
    }

    pub fn start(self) -> usize {
        self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn of(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}
