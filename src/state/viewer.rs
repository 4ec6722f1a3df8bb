/// Modal viewer state and the page scroll lock
///
/// A `Viewer` shows at most one item full-screen at a time. Opening an
/// item captures the sequence it was opened from, so prev/next always
/// navigate the same list the user clicked in (filtered grid, featured
/// strip, or full collection). While any viewer is open the page behind
/// it must not scroll; that is tracked by a single app-owned
/// `ScrollLock` shared between viewers.

use super::navigation::{advance, Direction};

/// Counting lock over the page's scroll suppression.
///
/// Acquire/release instead of a raw boolean toggle: a viewer acquires
/// once on closed->open and releases once on open->closed, so redundant
/// closes and replace-opens can never strand the page unscrollable.
#[derive(Debug, Default)]
pub struct ScrollLock {
    holds: u32,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self) {
        self.holds += 1;
    }

    /// Releasing an unheld lock is a no-op.
    pub fn release(&mut self) {
        self.holds = self.holds.saturating_sub(1);
    }

    /// Whether page scrolling is currently suppressed.
    pub fn locked(&self) -> bool {
        self.holds > 0
    }

    #[cfg(test)]
    pub fn holds(&self) -> u32 {
        self.holds
    }
}

/// Ephemeral full-screen viewer state.
///
/// `T` is a cheap handle to the displayed item (the content statics are
/// borrowed, so `&'static GalleryImage` in practice).
#[derive(Debug)]
pub struct Viewer<T> {
    active: Option<Active<T>>,
}

#[derive(Debug)]
struct Active<T> {
    /// The sequence the item was opened from, captured at open time
    sequence: Vec<T>,
    index: usize,
}

impl<T: Copy> Viewer<T> {
    /// A closed viewer. Created on startup, discarded with the page.
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// The displayed item and its position within the captured sequence.
    pub fn current(&self) -> Option<(T, usize)> {
        self.active
            .as_ref()
            .map(|active| (active.sequence[active.index], active.index))
    }

    /// Length of the captured sequence, 0 when closed.
    pub fn sequence_len(&self) -> usize {
        self.active.as_ref().map_or(0, |active| active.sequence.len())
    }

    /// Open the item at `index` of `sequence`, replacing any item that
    /// is already showing. The scroll lock is acquired only on the
    /// closed->open transition, so a replace holds exactly one unit.
    pub fn open(&mut self, sequence: Vec<T>, index: usize, lock: &mut ScrollLock) {
        debug_assert!(index < sequence.len(), "open index out of bounds");

        if self.active.is_none() {
            lock.acquire();
        }
        self.active = Some(Active { sequence, index });
    }

    /// Close the viewer and release the scroll lock. Idempotent:
    /// closing an already-closed viewer changes nothing.
    pub fn close(&mut self, lock: &mut ScrollLock) {
        if self.active.take().is_some() {
            lock.release();
        }
    }

    /// Step to the neighbouring item with wraparound. No-op while
    /// closed; callers route key events here unguarded.
    pub fn advance(&mut self, direction: Direction) {
        if let Some(active) = self.active.as_mut() {
            let (_, new_index) = advance(&active.sequence, active.index, direction);
            active.index = new_index;
        }
    }
}

impl<T: Copy> Default for Viewer<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_cycles_lock() {
        let mut lock = ScrollLock::new();
        let mut viewer: Viewer<u32> = Viewer::new();

        viewer.open(vec![1, 2, 3], 0, &mut lock);
        assert!(viewer.is_open());
        assert!(lock.locked());

        viewer.close(&mut lock);
        assert!(!viewer.is_open());
        assert!(!lock.locked());
    }

    #[test]
    fn test_replace_open_holds_lock_once() {
        let mut lock = ScrollLock::new();
        let mut viewer: Viewer<&str> = Viewer::new();

        viewer.open(vec!["a", "b"], 0, &mut lock);
        viewer.open(vec!["c"], 0, &mut lock);

        // Exactly one item showing, exactly one hold
        assert_eq!(viewer.current(), Some(("c", 0)));
        assert_eq!(lock.holds(), 1);

        viewer.close(&mut lock);
        assert!(!lock.locked());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut lock = ScrollLock::new();
        let mut viewer: Viewer<u32> = Viewer::new();

        viewer.close(&mut lock);
        assert!(viewer.current().is_none());
        assert!(!lock.locked());
    }

    #[test]
    fn test_two_viewers_share_one_lock() {
        let mut lock = ScrollLock::new();
        let mut lightbox: Viewer<u32> = Viewer::new();
        let mut modal: Viewer<u32> = Viewer::new();

        lightbox.open(vec![1], 0, &mut lock);
        modal.open(vec![2], 0, &mut lock);
        assert_eq!(lock.holds(), 2);

        lightbox.close(&mut lock);
        assert!(lock.locked());
        modal.close(&mut lock);
        assert!(!lock.locked());
    }

    #[test]
    fn test_advance_navigates_captured_sequence() {
        let mut lock = ScrollLock::new();
        let mut viewer: Viewer<u32> = Viewer::new();

        viewer.open(vec![5, 8], 0, &mut lock);
        viewer.advance(Direction::Next);
        assert_eq!(viewer.current(), Some((8, 1)));
        viewer.advance(Direction::Next);
        assert_eq!(viewer.current(), Some((5, 0)));
        viewer.advance(Direction::Prev);
        assert_eq!(viewer.current(), Some((8, 1)));
    }

    #[test]
    fn test_advance_while_closed_is_noop() {
        let mut viewer: Viewer<u32> = Viewer::new();
        viewer.advance(Direction::Next);
        assert!(viewer.current().is_none());
    }
}
