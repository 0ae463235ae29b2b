/// Position of the active slide within a deck.
///
/// Invariant: `index < total` whenever `total > 0`. For an empty deck the
/// index is `0` and every movement is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    index: usize,
    total: usize,
}

impl NavigationState {
    /// Starts at the first slide of a deck with `total` slides.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }

    /// Moves by `offset` slides, absorbing movement past either end.
    ///
    /// Returns the new index.
    pub fn move_by(&mut self, offset: isize) -> usize {
        let Some(last) = self.last_index() else {
            return self.index;
        };
        self.index = match self.index.checked_add_signed(offset) {
            Some(target) => target.min(last),
            None if offset < 0 => 0,
            None => last,
        };
        self.index
    }

    pub fn jump_first(&mut self) -> usize {
        self.index = 0;
        self.index
    }

    pub fn jump_last(&mut self) -> usize {
        self.index = self.last_index().unwrap_or(0);
        self.index
    }

    fn last_index(&self) -> Option<usize> {
        self.total.checked_sub(1)
    }
}
