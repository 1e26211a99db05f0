//! Single-line text input
//!
//! Backs the "add hero" field and the name editor. Owns its value and a
//! cursor (as a char index); the parent decides what Enter and Esc mean.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, 0..=len
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input pre-filled with `value`, cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Take the current value, leaving the input empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    /// Apply an editing key. Returns true if the key changed or moved
    /// anything; Enter, Esc and Tab are left to the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_index();
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return true;
                }
                self.cursor -= 1;
                let at = self.byte_index();
                self.value.remove(at);
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.value.chars().count() {
                    let at = self.byte_index();
                    self.value.remove(at);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }

    /// Render as `label value` with a block cursor when active
    pub fn line<'a>(&'a self, label: &'a str, style: Style, active: bool) -> Line<'a> {
        let mut spans = vec![Span::styled(label, style)];
        if !active {
            spans.push(Span::raw(self.value.as_str()));
            return Line::from(spans);
        }

        let at = self.byte_index();
        let (before, rest) = self.value.split_at(at);
        let mut rest_chars = rest.chars();
        let under = rest_chars.next().map_or_else(|| " ".to_string(), String::from);

        spans.push(Span::raw(before));
        spans.push(Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)));
        spans.push(Span::raw(rest_chars.as_str()));
        Line::from(spans)
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }
}
