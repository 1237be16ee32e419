use tc_span::BytePos;

/// Character reader over an expression with a single character of push-back.
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    prev_len: Option<usize>,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Cursor<'a> {
        Cursor {
            input,
            pos: 0,
            prev_len: None,
        }
    }

    pub fn as_str(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn pos(&self) -> BytePos {
        BytePos::from_usize(self.pos)
    }

    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    pub fn next(&mut self) -> Option<char> {
        let Some(c) = self.peek() else {
            self.prev_len = None;
            return None;
        };

        self.pos += c.len_utf8();
        self.prev_len = Some(c.len_utf8());

        Some(c)
    }

    /// Steps back over the character returned by the last successful [`Cursor::next`].
    pub fn unread(&mut self) {
        debug_assert!(self.prev_len.is_some(), "unread without a preceding read");

        if let Some(len) = self.prev_len.take() {
            self.pos -= len;
        }
    }

    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }
}
