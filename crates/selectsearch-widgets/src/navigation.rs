//! Keyboard navigation over the rendered list.

use selectsearch_core::Key;

/// Keys the widget distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Enter / Return
    Enter,
    /// Anything else (typing, editing)
    Other,
}

impl From<Key> for NavKey {
    fn from(key: Key) -> Self {
        match key {
            Key::Up => Self::Up,
            Key::Down => Self::Down,
            Key::Enter => Self::Enter,
            _ => Self::Other,
        }
    }
}

impl From<&Key> for NavKey {
    fn from(key: &Key) -> Self {
        Self::from(*key)
    }
}

/// Cursor over the currently rendered items.
///
/// Stays within `[0, count - 1]`, or at 0 when nothing is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrowCursor {
    index: usize,
}

impl ArrowCursor {
    /// Cursor at the first item.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Current position.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Move up, stopping at the first item.
    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Move down, stopping at the last of `count` items.
    pub fn down(&mut self, count: usize) {
        if self.index + 1 < count {
            self.index += 1;
        }
    }

    /// Back to the first item.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Move to `index`, clamped to `count` items.
    pub fn set(&mut self, index: usize, count: usize) {
        self.index = index;
        self.clamp(count);
    }

    /// Pull the cursor back inside `count` items.
    pub fn clamp(&mut self, count: usize) {
        self.index = self.index.min(count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // NavKey Tests
    // =========================================================================

    #[test]
    fn test_nav_key_from_key() {
        assert_eq!(NavKey::from(Key::Up), NavKey::Up);
        assert_eq!(NavKey::from(Key::Down), NavKey::Down);
        assert_eq!(NavKey::from(&Key::Enter), NavKey::Enter);
        assert_eq!(NavKey::from(Key::Char('x')), NavKey::Other);
        assert_eq!(NavKey::from(Key::Left), NavKey::Other);
        assert_eq!(NavKey::from(Key::Backspace), NavKey::Other);
    }

    // =========================================================================
    // ArrowCursor Tests
    // =========================================================================

    #[test]
    fn test_cursor_floor() {
        let mut c = ArrowCursor::new();
        c.up();
        c.up();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_cursor_ceiling() {
        let mut c = ArrowCursor::new();
        for _ in 0..10 {
            c.down(3);
        }
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_cursor_empty_list() {
        let mut c = ArrowCursor::new();
        c.down(0);
        assert_eq!(c.index(), 0);
        c.clamp(0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_cursor_clamp_after_shrink() {
        let mut c = ArrowCursor::new();
        c.set(7, 10);
        assert_eq!(c.index(), 7);
        c.clamp(3);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_cursor_reset() {
        let mut c = ArrowCursor::new();
        c.set(4, 10);
        c.reset();
        assert_eq!(c.index(), 0);
    }

    proptest! {
        #[test]
        fn prop_cursor_in_bounds(moves in prop::collection::vec(any::<bool>(), 0..50), count in 0usize..8) {
            let mut c = ArrowCursor::new();
            for down in moves {
                if down { c.down(count) } else { c.up() }
                if count == 0 {
                    prop_assert_eq!(c.index(), 0);
                } else {
                    prop_assert!(c.index() < count);
                }
            }
        }
    }
}
