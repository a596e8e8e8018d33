//! Module name entry
//!
//! Module names double as file names, so only `0-9`, `A-Z`, `a-z`, `-` and
//! `_` are accepted. Invalid characters are dropped as they are typed rather
//! than reported at submission.

use std::ops::Range;

/// Whether `c` may appear in a module name
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Whether `name` is a usable module name
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

/// Result of feeding text into a [`NameEntry`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditResult {
    /// Characters that made it into the entry
    pub inserted: usize,
    /// Characters dropped (invalid, or beyond the length limit)
    pub rejected: usize,
}

/// Text entry that only ever holds a valid (possibly empty) module name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    text: String,
    max_len: usize,
}

impl NameEntry {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            max_len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Replace the whole content
    pub fn set_text(&mut self, text: &str) -> EditResult {
        self.text.clear();
        self.insert(0, text)
    }

    /// Insert `text` at character position `pos` (clamped to the end)
    pub fn insert(&mut self, pos: usize, text: &str) -> EditResult {
        // Content is ASCII only, so char and byte positions agree
        let mut at = pos.min(self.text.len());
        let mut result = EditResult::default();

        for c in text.chars() {
            if !is_name_char(c) || self.text.len() >= self.max_len {
                result.rejected += 1;
                continue;
            }
            self.text.insert(at, c);
            at += 1;
            result.inserted += 1;
        }

        result
    }

    /// Append at the end, as typing would
    pub fn push_str(&mut self, text: &str) -> EditResult {
        self.insert(self.text.len(), text)
    }

    /// Delete a character range (clamped to the content)
    pub fn delete(&mut self, range: Range<usize>) {
        let end = range.end.min(self.text.len());
        let start = range.start.min(end);
        self.text.replace_range(start..end, "");
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(is_valid_name("SAT2"));
        assert!(is_valid_name("Amateur-sats_2"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("my sats"));
        assert!(!is_valid_name("../etc"));
        assert!(!is_valid_name("Ørsted"));
    }

    #[test]
    fn invalid_characters_never_enter_the_entry() {
        let mut entry = NameEntry::new(25);
        let result = entry.push_str("NOAA 19/APT");
        assert_eq!(entry.text(), "NOAA19APT");
        assert_eq!(result.inserted, 9);
        assert_eq!(result.rejected, 2);
        assert!(!entry.text().contains(' '));
    }

    #[test]
    fn insert_at_position() {
        let mut entry = NameEntry::new(25);
        entry.set_text("SAT");
        entry.insert(1, "x y");
        assert_eq!(entry.text(), "SxyAT");
        entry.insert(100, "2");
        assert_eq!(entry.text(), "SxyAT2");
    }

    #[test]
    fn length_is_limited() {
        let mut entry = NameEntry::new(5);
        let result = entry.push_str("ABCDEFG");
        assert_eq!(entry.text(), "ABCDE");
        assert_eq!(result.rejected, 2);
    }

    #[test]
    fn delete_range_is_clamped() {
        let mut entry = NameEntry::new(25);
        entry.set_text("ISS-ZARYA");
        entry.delete(3..100);
        assert_eq!(entry.text(), "ISS");
        entry.delete(10..12);
        assert_eq!(entry.text(), "ISS");
        entry.delete(0..3);
        assert!(entry.is_empty());
    }
}
