/// A read position inside an expression's source text.
///
/// The cursor only moves forward. All lookahead helpers skip leading
/// whitespace first, so grammar levels never deal with spacing themselves.
/// Offsets are byte offsets into `source`; [`Cursor::position`] converts them
/// to the character offsets reported in errors.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source,
               offset: 0 }
    }

    /// The unconsumed part of the source.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// The current byte offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.offset == self.source.len()
    }

    /// The current position as a character offset.
    ///
    /// # Example
    /// ```
    /// use numeval::interpreter::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("\u{3000}42");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.offset(), 3);
    /// assert_eq!(cursor.position(), 1);
    /// ```
    #[must_use]
    pub fn position(&self) -> usize {
        self.position_of(self.offset)
    }

    /// Converts an earlier byte offset of this cursor into a character offset.
    #[must_use]
    pub fn position_of(&self, offset: usize) -> usize {
        self.source[..offset].chars().count()
    }

    /// Advances past a run of whitespace. Does nothing if there is none.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.offset += rest.len() - rest.trim_start().len();
    }

    /// Skips whitespace, then reports whether the input continues with
    /// `literal`. The cursor does not move past the literal.
    ///
    /// # Example
    /// ```
    /// use numeval::interpreter::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  ** 2");
    /// assert!(cursor.peek_literal("*"));
    /// assert!(cursor.peek_literal("**"));
    /// assert!(!cursor.peek_literal("/"));
    /// assert_eq!(cursor.offset(), 2);
    /// ```
    pub fn peek_literal(&mut self, literal: &str) -> bool {
        self.skip_whitespace();
        self.rest().starts_with(literal)
    }

    /// Consumes `literal` if it comes next (after whitespace).
    ///
    /// On a mismatch nothing but the leading whitespace is consumed and
    /// `false` is returned.
    ///
    /// # Example
    /// ```
    /// use numeval::interpreter::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" ( 1");
    /// assert!(!cursor.consume_literal(")"));
    /// assert_eq!(cursor.offset(), 1);
    /// assert!(cursor.consume_literal("("));
    /// assert_eq!(cursor.offset(), 2);
    /// ```
    pub fn consume_literal(&mut self, literal: &str) -> bool {
        if !self.peek_literal(literal) {
            return false;
        }
        self.offset += literal.len();
        log::trace!("consumed {literal:?}, now at {}", self.position());
        true
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes one character, which must be the one returned by
    /// [`Cursor::peek_char`].
    pub const fn bump(&mut self, ch: char) {
        self.offset += ch.len_utf8();
    }

    /// The text consumed since byte offset `start`.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }
}
