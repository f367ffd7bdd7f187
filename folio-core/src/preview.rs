//! Full-screen preview navigation
//!
//! Tracks which portfolio card (if any) is open in the full-screen viewer.
//! The selection round-trips through the `preview` query parameter so a
//! shared link reopens the same card.

use tracing::debug;

/// Query parameter that carries the open preview index.
pub const PREVIEW_QUERY_KEY: &str = "preview";

/// Keys the preview and carousel react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl NavKey {
    /// Parse a DOM-style key name.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" | "Esc" => Some(NavKey::Escape),
            "ArrowLeft" | "Left" => Some(NavKey::ArrowLeft),
            "ArrowRight" | "Right" => Some(NavKey::ArrowRight),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewNavigator {
    selected: Option<usize>,
    item_count: usize,
}

impl PreviewNavigator {
    pub fn new(item_count: usize) -> Self {
        Self {
            selected: None,
            item_count,
        }
    }

    /// Restore from the `preview` query value. Only the leading integer is
    /// read, so `3abc` and `3.0` both open card 3. Anything that is not an
    /// in-range index is ignored.
    pub fn from_query(item_count: usize, preview: Option<&str>) -> Self {
        let mut navigator = Self::new(item_count);
        if let Some(index) = preview
            .and_then(leading_index)
            .filter(|index| *index < item_count)
        {
            navigator.selected = Some(index);
        }
        navigator
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Value to write back to the `preview` query parameter; `None` means
    /// the parameter should be removed.
    pub fn query_value(&self) -> Option<String> {
        self.selected.map(|index| index.to_string())
    }

    pub fn open(&mut self, index: usize) {
        if index >= self.item_count {
            return;
        }
        debug!(index, "preview opened");
        self.selected = Some(index);
    }

    pub fn close(&mut self) {
        if self.selected.take().is_some() {
            debug!("preview closed");
        }
    }

    /// Next card, wrapping to the first. No-op when closed.
    pub fn next(&mut self) {
        if let Some(index) = self.selected
            && self.item_count > 0
        {
            self.selected = Some((index + 1) % self.item_count);
        }
    }

    /// Previous card, wrapping to the last. No-op when closed.
    pub fn prev(&mut self) {
        if let Some(index) = self.selected
            && self.item_count > 0
        {
            self.selected = Some(if index == 0 {
                self.item_count - 1
            } else {
                index - 1
            });
        }
    }

    /// Returns whether the key was consumed. Keys are only consumed while a
    /// preview is open, so the carousel can handle them otherwise.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            NavKey::Escape => self.close(),
            NavKey::ArrowRight => self.next(),
            NavKey::ArrowLeft => self.prev(),
        }
        true
    }

    /// The item set changed; drop a selection that no longer exists.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        if self.selected.is_some_and(|index| index >= item_count) {
            self.selected = None;
        }
    }
}

/// Leading decimal integer of a query value, after optional whitespace and
/// sign. Negative values other than zero never name a card.
fn leading_index(raw: &str) -> Option<usize> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    let index = digits.parse::<usize>().ok()?;
    if negative && index != 0 {
        return None;
    }
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_restores_only_valid_indices() {
        assert_eq!(PreviewNavigator::from_query(6, Some("3")).selected(), Some(3));
        assert_eq!(PreviewNavigator::from_query(6, Some("6")).selected(), None);
        assert_eq!(PreviewNavigator::from_query(6, Some("-1")).selected(), None);
        assert_eq!(PreviewNavigator::from_query(6, Some("abc")).selected(), None);
        assert_eq!(PreviewNavigator::from_query(6, None).selected(), None);
    }

    #[test]
    fn query_reads_the_leading_integer() {
        let selected =
            |raw: &str| PreviewNavigator::from_query(6, Some(raw)).selected();
        assert_eq!(selected("3abc"), Some(3));
        assert_eq!(selected("3.0"), Some(3));
        assert_eq!(selected(" 4 "), Some(4));
        assert_eq!(selected("+2"), Some(2));
        assert_eq!(selected("-0"), Some(0));
        assert_eq!(selected("07"), None);
        assert_eq!(selected("05"), Some(5));
        assert_eq!(selected(""), None);
        assert_eq!(selected("x3"), None);
        assert_eq!(selected("-2"), None);
        assert_eq!(selected("99999999999999999999999"), None);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut nav = PreviewNavigator::new(3);
        nav.open(2);
        nav.next();
        assert_eq!(nav.selected(), Some(0));
        nav.prev();
        assert_eq!(nav.selected(), Some(2));
        assert_eq!(nav.query_value().as_deref(), Some("2"));
    }

    #[test]
    fn closed_navigator_ignores_navigation() {
        let mut nav = PreviewNavigator::new(3);
        nav.next();
        assert_eq!(nav.selected(), None);
        assert!(!nav.handle_key(NavKey::ArrowRight));
        assert_eq!(nav.query_value(), None);
    }

    #[test]
    fn keys_drive_an_open_preview() {
        let mut nav = PreviewNavigator::new(4);
        nav.open(0);
        assert!(nav.handle_key(NavKey::ArrowLeft));
        assert_eq!(nav.selected(), Some(3));
        assert!(nav.handle_key(NavKey::Escape));
        assert!(!nav.is_open());
    }

    #[test]
    fn shrinking_drops_stale_selection() {
        let mut nav = PreviewNavigator::new(6);
        nav.open(5);
        nav.set_item_count(4);
        assert!(!nav.is_open());
    }

    #[test]
    fn key_names() {
        assert_eq!(NavKey::from_key_name("ArrowLeft"), Some(NavKey::ArrowLeft));
        assert_eq!(NavKey::from_key_name("Escape"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_key_name("Enter"), None);
    }
}
