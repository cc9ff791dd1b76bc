/// A cursor for byte-by-byte inline parsing.
///
/// Inline input is entity-escaped ASCII-delimited markdown, so all
/// delimiter checks are byte checks; multi-byte characters are only ever
/// copied through as text.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The byte before the current position, if any.
    pub fn prev(&self) -> Option<u8> {
        self.i.checked_sub(1).map(|p| self.s.as_bytes()[p])
    }

    /// Remaining unparsed input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat)
    }

    /// True when the current position begins a token: start of input or
    /// preceded by a non-word byte. Autolink and issue-key rules only fire
    /// at token starts so they never match inside a longer word.
    pub fn at_token_start(&self) -> bool {
        match self.prev() {
            None => true,
            Some(b) => !b.is_ascii_alphanumeric() && b != b'_' && b != b'.',
        }
    }

    /// Advances by one byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances past one full character, keeping the index on a UTF-8
    /// boundary.
    pub fn bump_char(&mut self) {
        if let Some(c) = self.s[self.i..].chars().next() {
            self.i += c.len_utf8();
        }
    }
}
