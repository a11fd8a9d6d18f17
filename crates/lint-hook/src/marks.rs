//! Line marks: the visual payload handed to the host and the per-file
//! registry of installed marks.
//!
//! Marks are derived state. The engine never edits the document; it asks the
//! host to decorate one line range and keeps the returned disposable handle so
//! the decoration can be withdrawn before the next check and on teardown.

use crate::host::Mark;
use std::collections::HashMap;
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Column span meaning "the whole line, clamp to its end".
///
/// Used when the flagged line is blank or lies outside the checked text, so
/// there is no measured width to span.
pub const FULL_LINE_COLUMNS: Range<usize> = 0..999;

/// A request to visually mark one line range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSpec {
    /// Zero-based line index in the file's view.
    pub line: usize,
    /// Half-open column span in display cells. Hosts clamp ends past the
    /// line's actual width.
    pub columns: Range<usize>,
    /// Style class resolved by the host's theme, e.g. `"lint-error"`.
    pub style_class: String,
    /// Tooltip text shown on hover: the diagnostic message.
    pub tooltip: String,
}

/// Compute the column span covering the full displayed width of line
/// `line_index` (zero-based) of `text`.
///
/// Returns [`FULL_LINE_COLUMNS`] when the line does not exist or is blank;
/// otherwise `0..w` where `w` is the line's Unicode display width (so tabs
/// count as one cell and CJK/emoji as two).
pub fn line_columns(text: &str, line_index: usize) -> Range<usize> {
    match text.lines().nth(line_index) {
        Some(line) if !line.trim().is_empty() => 0..line.width(),
        _ => FULL_LINE_COLUMNS,
    }
}

/// The uri → mark mapping.
///
/// Holds at most one mark per uri: installing a new mark for a uri first
/// clears any prior one. Dropping the registry clears everything it still
/// holds.
#[derive(Default)]
pub struct MarkRegistry {
    marks: HashMap<String, Box<dyn Mark>>,
}

impl MarkRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain `mark` for `uri`, clearing any mark previously held for it.
    pub fn install(&mut self, uri: &str, mark: Box<dyn Mark>) {
        self.clear(uri);
        self.marks.insert(uri.to_string(), mark);
    }

    /// Clear and forget the mark for `uri`, if one is held.
    ///
    /// Returns `true` if a mark was cleared.
    pub fn clear(&mut self, uri: &str) -> bool {
        match self.marks.remove(uri) {
            Some(mut mark) => {
                mark.clear();
                true
            }
            None => false,
        }
    }

    /// Clear every held mark and empty the registry.
    pub fn clear_all(&mut self) {
        for (_, mut mark) in self.marks.drain() {
            mark.clear();
        }
    }

    /// Number of uris currently holding a mark.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no marks are held.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns `true` if `uri` currently holds a mark.
    pub fn contains(&self, uri: &str) -> bool {
        self.marks.contains_key(uri)
    }
}

impl Drop for MarkRegistry {
    fn drop(&mut self) {
        self.clear_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct CountingMark(Rc<RefCell<usize>>);

    impl Mark for CountingMark {
        fn clear(&mut self) {
            *self.0.borrow_mut() += 1;
        }
    }

    fn counting_mark() -> (Box<dyn Mark>, Rc<RefCell<usize>>) {
        let count = Rc::new(RefCell::new(0));
        (Box::new(CountingMark(count.clone())), count)
    }

    #[test]
    fn test_install_replaces_and_clears_prior() {
        let mut registry = MarkRegistry::new();
        let (first, first_clears) = counting_mark();
        let (second, second_clears) = counting_mark();

        registry.install("a.py", first);
        assert_eq!(registry.len(), 1);

        registry.install("a.py", second);
        assert_eq!(registry.len(), 1);
        assert_eq!(*first_clears.borrow(), 1);
        assert_eq!(*second_clears.borrow(), 0);
    }

    #[test]
    fn test_clear_reports_presence() {
        let mut registry = MarkRegistry::new();
        let (mark, clears) = counting_mark();
        registry.install("a.py", mark);

        assert!(registry.clear("a.py"));
        assert_eq!(*clears.borrow(), 1);
        assert!(!registry.clear("a.py"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_drop_clears_everything() {
        let (mark_a, clears_a) = counting_mark();
        let (mark_b, clears_b) = counting_mark();
        {
            let mut registry = MarkRegistry::new();
            registry.install("a.py", mark_a);
            registry.install("b.py", mark_b);
        }
        assert_eq!(*clears_a.borrow(), 1);
        assert_eq!(*clears_b.borrow(), 1);
    }

    #[test]
    fn test_line_columns_uses_display_width() {
        let text = "plain\nw\u{ff49}de\n";
        assert_eq!(line_columns(text, 0), 0..5);
        // 'w' + fullwidth 'i' (2 cells) + "de"
        assert_eq!(line_columns(text, 1), 0..5);
    }

    #[test]
    fn test_line_columns_falls_back_to_full_line() {
        let text = "one\n\n   \n";
        assert_eq!(line_columns(text, 1), FULL_LINE_COLUMNS);
        assert_eq!(line_columns(text, 2), FULL_LINE_COLUMNS);
        assert_eq!(line_columns(text, 99), FULL_LINE_COLUMNS);
    }
}
