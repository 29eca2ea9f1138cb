use super::error::RotationError;

/// Index into a collection, always kept in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    current: usize,
    len: usize,
}

impl SelectionState {
    /// Selection over `len` items starting at index 0.
    ///
    /// A zero length is treated as one so the bounds invariant holds even
    /// if a caller bypasses [`Collection`](super::Collection).
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    /// Move to the next index, wrapping to 0 after the last one.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Jump to `index`.
    pub fn select(&mut self, index: usize) -> Result<(), RotationError> {
        if index >= self.len {
            return Err(RotationError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Index `delta` steps away from the current one, wrapping both ways.
    pub fn offset(&self, delta: isize) -> usize {
        let len = self.len as isize;
        (self.current as isize + delta).rem_euclid(len) as usize
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps() {
        let mut selection = SelectionState::new(3);
        selection.advance();
        selection.advance();
        assert_eq!(selection.current(), 2);
        selection.advance();
        assert_eq!(selection.current(), 0);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut selection = SelectionState::new(3);
        assert_eq!(
            selection.select(3),
            Err(RotationError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(selection.current(), 0);
        assert!(selection.select(2).is_ok());
        assert_eq!(selection.current(), 2);
    }

    #[test]
    fn single_item_stays_at_zero() {
        let mut selection = SelectionState::new(1);
        for _ in 0..5 {
            selection.advance();
            assert_eq!(selection.current(), 0);
        }
    }

    #[test]
    fn zero_length_is_treated_as_one() {
        let mut selection = SelectionState::new(0);
        selection.advance();
        assert_eq!(selection.current(), 0);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn offset_wraps_both_directions() {
        let selection = SelectionState::new(4);
        assert_eq!(selection.offset(-1), 3);
        assert_eq!(selection.offset(1), 1);
        assert_eq!(selection.offset(9), 1);
    }
}
