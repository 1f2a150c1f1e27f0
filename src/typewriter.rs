/// Milliseconds between two typed characters.
pub const TYPE_INTERVAL_MS: u64 = 100;

/// Reveals a line of text one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    // byte offset of the typed prefix, always on a char boundary
    cursor: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
        }
    }

    pub fn typed(&self) -> &str {
        &self.text[..self.cursor]
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Types the next character and returns the new prefix, `None` once finished.
    pub fn advance(&mut self) -> Option<&str> {
        let next = self.text[self.cursor..].chars().next()?;
        self.cursor += next.len_utf8();
        Some(self.typed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = Typewriter::new("Hi!");
        assert_eq!(tw.typed(), "");
        assert_eq!(tw.advance(), Some("H"));
        assert_eq!(tw.advance(), Some("Hi"));
        assert_eq!(tw.advance(), Some("Hi!"));
        assert!(tw.is_done());
        assert_eq!(tw.advance(), None);
        assert_eq!(tw.typed(), "Hi!");
    }

    #[test]
    fn test_multibyte_chars_stay_whole() {
        let mut tw = Typewriter::new("a→ü");
        let steps: Vec<String> = std::iter::from_fn(|| tw.advance().map(str::to_owned)).collect();
        assert_eq!(steps, vec!["a", "a→", "a→ü"]);
    }

    #[test]
    fn test_empty_text_is_done() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_done());
        assert_eq!(tw.advance(), None);
    }
}
