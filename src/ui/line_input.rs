use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Submit,
}

/// Single-line answer field with a character limit.
pub struct LineInput {
    text: String,
    /// Cursor position as a char index (0 = before first char).
    cursor: usize,
    max_chars: usize,
}

impl LineInput {
    pub fn new(max_chars: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            max_chars,
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Returns (before_cursor, cursor_char, after_cursor) for styled rendering.
    /// When cursor is at end of text, cursor_char is None.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let byte_offset = self.char_to_byte(self.cursor);
        match self.text[byte_offset..].chars().next() {
            Some(ch) => {
                let next_byte = byte_offset + ch.len_utf8();
                (&self.text[..byte_offset], Some(ch), &self.text[next_byte..])
            }
            None => (&self.text, None, ""),
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Enter => return InputResult::Submit,

            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.cursor < self.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.len();
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.remove_char_at(self.cursor - 1);
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.len() {
                    self.remove_char_at(self.cursor);
                }
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.len();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word_back();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.len() < self.max_chars {
                    let byte_offset = self.char_to_byte(self.cursor);
                    self.text.insert(byte_offset, ch);
                    self.cursor += 1;
                }
            }
            _ => {}
        }
        InputResult::Continue
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Convert char index to byte offset.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    fn remove_char_at(&mut self, char_idx: usize) {
        let byte_offset = self.char_to_byte(char_idx);
        if let Some(ch) = self.text[byte_offset..].chars().next() {
            self.text
                .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
        }
    }

    /// Delete word before cursor (unix-word-rubout: skip whitespace, then non-whitespace).
    fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        let start_byte = self.char_to_byte(pos);
        let end_byte = self.char_to_byte(self.cursor);
        self.text.replace_range(start_byte..end_byte, "");
        self.cursor = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn typed(text: &str, max_chars: usize) -> LineInput {
        let mut input = LineInput::new(max_chars);
        for ch in text.chars() {
            input.handle(key(KeyCode::Char(ch)));
        }
        input
    }

    #[test]
    fn test_typing_and_submit() {
        let mut input = typed("corrí", 30);
        assert_eq!(input.value(), "corrí");
        assert_eq!(input.handle(key(KeyCode::Enter)), InputResult::Submit);
        assert_eq!(input.value(), "corrí");
    }

    #[test]
    fn test_char_limit_drops_extra_input() {
        let input = typed("abcdefgh", 5);
        assert_eq!(input.value(), "abcde");
    }

    #[test]
    fn test_limit_counts_chars_not_bytes() {
        let input = typed("ñññ", 3);
        assert_eq!(input.value(), "ñññ");
    }

    #[test]
    fn test_backspace_and_delete_multibyte() {
        let mut input = typed("añb", 30);
        input.handle(key(KeyCode::Left));
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "ab");

        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_insert_mid_text() {
        let mut input = typed("ac", 30);
        input.handle(key(KeyCode::Left));
        input.handle(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = typed("hablamos", 30);
        input.handle(ctrl('u'));
        assert_eq!(input.value(), "");
        assert_eq!(input.render_parts(), ("", None, ""));
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut input = typed("nos vamos  ", 30);
        input.handle(ctrl('w'));
        assert_eq!(input.value(), "nos ");
    }

    #[test]
    fn test_ctrl_chars_are_not_inserted() {
        let mut input = typed("ab", 30);
        input.handle(ctrl('a'));
        input.handle(ctrl('s'));
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_render_parts_cursor_positions() {
        let mut input = typed("hola", 30);
        assert_eq!(input.render_parts(), ("hola", None, ""));

        input.handle(key(KeyCode::Home));
        assert_eq!(input.render_parts(), ("", Some('h'), "ola"));

        input.handle(ctrl('e'));
        input.handle(key(KeyCode::Left));
        assert_eq!(input.render_parts(), ("hol", Some('a'), ""));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut input = typed("x", 30);
        for _ in 0..3 {
            input.handle(key(KeyCode::Right));
        }
        assert_eq!(input.render_parts(), ("x", None, ""));
        for _ in 0..3 {
            input.handle(key(KeyCode::Left));
        }
        assert_eq!(input.render_parts(), ("", Some('x'), ""));
    }
}
