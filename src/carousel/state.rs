use tracing::trace;

/// A transition accepted by the store and not yet committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub from: usize,
    pub to: usize,
}

/// Current slide plus the single in-flight transition, if any.
///
/// `current_index` is always a valid slide, and at most one transition is
/// pending at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    len: usize,
    pending: Option<PendingTransition>,
}

impl CarouselState {
    /// State for `len` slides showing the first one. `len` must be non-zero.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            current_index: 0,
            len,
            pending: None,
        }
    }

    /// Gate for every slide change.
    ///
    /// Returns `None` when `index` is the current slide, out of range, or when
    /// another transition is still in flight.
    pub fn request_go_to(&mut self, index: usize) -> Option<PendingTransition> {
        if let Some(pending) = self.pending {
            trace!(index, ?pending, "transition in flight, request dropped");
            return None;
        }
        if index == self.current_index || index >= self.len {
            trace!(index, current = self.current_index, "request ignored");
            return None;
        }

        let transition = PendingTransition {
            from: self.current_index,
            to: index,
        };
        self.pending = Some(transition);
        Some(transition)
    }

    /// Makes `index` current and clears the in-flight transition.
    pub(crate) fn commit(&mut self, index: usize) {
        if index < self.len {
            self.current_index = index;
        }
        self.pending = None;
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Slide carrying the active highlight. It moves to the target as soon as
    /// a transition starts, before the commit.
    pub fn active_index(&self) -> usize {
        self.pending.map_or(self.current_index, |p| p.to)
    }

    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next_index(&self) -> usize {
        (self.current_index + 1) % self.len
    }

    pub fn prev_index(&self) -> usize {
        (self.current_index + self.len - 1) % self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_marks_transition_pending() {
        let mut state = CarouselState::new(4);
        let t = state.request_go_to(2).unwrap();
        assert_eq!(t, PendingTransition { from: 0, to: 2 });
        assert!(state.is_transitioning());
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn second_request_is_rejected_while_pending() {
        let mut state = CarouselState::new(4);
        state.request_go_to(1).unwrap();
        assert_eq!(state.request_go_to(3), None);
        assert_eq!(state.pending(), Some(PendingTransition { from: 0, to: 1 }));
    }

    #[test]
    fn same_or_out_of_range_index_is_a_no_op() {
        let mut state = CarouselState::new(3);
        assert_eq!(state.request_go_to(0), None);
        assert_eq!(state.request_go_to(3), None);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn commit_clears_pending() {
        let mut state = CarouselState::new(3);
        state.request_go_to(2).unwrap();
        state.commit(2);
        assert_eq!(state.current_index(), 2);
        assert!(!state.is_transitioning());
        assert!(state.request_go_to(0).is_some());
    }

    #[test]
    fn indices_wrap_around() {
        let mut state = CarouselState::new(3);
        assert_eq!(state.prev_index(), 2);
        state.request_go_to(2).unwrap();
        state.commit(2);
        assert_eq!(state.next_index(), 0);
    }
}
