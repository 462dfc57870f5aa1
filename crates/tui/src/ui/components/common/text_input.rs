//! UTF-8 safe text input state with cursor management and word-level
//! replacement used by the search box.

use std::ops::Range;

use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInputState {
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Replace the whole buffer and park the cursor at the end.
    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        self.cursor = self.input.len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Display width of the text before the cursor, for terminal cursor
    /// placement.
    pub fn cursor_column(&self) -> usize {
        self.input[..self.cursor].width()
    }

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            let start = self.cursor - prev.len_utf8();
            self.input.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    /// Byte range of the word ending at the cursor (from the preceding
    /// whitespace up to the cursor).
    pub fn current_word_range(&self) -> Range<usize> {
        let before = &self.input[..self.cursor];
        let start = before
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(index, c)| index + c.len_utf8())
            .unwrap_or(0);
        start..self.cursor
    }

    pub fn current_word(&self) -> &str {
        &self.input[self.current_word_range()]
    }

    /// Replace `range` with `text` and place the cursor after it, or
    /// `cursor_back` characters before its end.
    pub fn replace_range(&mut self, range: Range<usize>, text: &str, cursor_back: usize) {
        self.input.replace_range(range.clone(), text);
        let mut cursor = range.start + text.len();
        for c in text.chars().rev().take(cursor_back) {
            cursor -= c.len_utf8();
        }
        self.cursor = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_move_insert_backspace() {
        let mut st = TextInputState::new();
        st.set_input("h🙂llo");
        st.move_left();
        st.move_left();
        st.move_left();
        st.move_left();
        st.insert_char('e');
        assert_eq!(st.input(), "he🙂llo");
        st.move_right();
        st.backspace();
        assert_eq!(st.input(), "hello");
        st.move_left();
        st.backspace();
        assert_eq!(st.input(), "ello");
        assert_eq!(st.cursor_column(), 0);

        st.set_input("日本");
        assert_eq!(st.cursor_column(), 4);
    }

    #[test]
    fn current_word_stops_at_whitespace() {
        let mut st = TextInputState::new();
        st.set_input("release in:gen");
        assert_eq!(st.current_word(), "in:gen");
        st.set_input("release ");
        assert_eq!(st.current_word(), "");
    }

    #[test]
    fn replace_range_positions_cursor() {
        let mut st = TextInputState::new();
        st.set_input("deploy fr");
        let range = st.current_word_range();
        st.replace_range(range, "from:", 0);
        assert_eq!(st.input(), "deploy from:");
        assert_eq!(st.cursor(), st.input().len());

        let range = st.current_word_range();
        st.replace_range(range.end..range.end, " \"\"", 1);
        assert_eq!(st.input(), "deploy from: \"\"");
        assert_eq!(st.cursor(), st.input().len() - 1);
    }
}
