/// Fixed-size ring of frame slots, each holding the fence token of the last
/// submission recorded into it.
///
/// `T` is the fence type. `FrameSync` uses `wgpu::SubmissionIndex`; tests use
/// plain integers.
#[derive(Debug)]
pub struct FrameRing<T> {
    slots: Vec<Option<T>>,
    current: usize,
}

impl<T> FrameRing<T> {
    /// Creates a ring with `len` slots. A zero length is raised to one.
    pub fn new(len: usize) -> Self {
        let len = len.max(1);
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
            current: 0,
        }
    }

    /// Number of slots (frames in flight).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Index of the slot the next frame records into.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Takes the fence guarding the current slot, if it has been used before.
    ///
    /// The caller must wait on the returned fence before reusing the slot.
    pub fn take_current(&mut self) -> Option<T> {
        self.slots[self.current].take()
    }

    /// Returns the fence of the current slot without clearing it.
    pub fn peek_current(&self) -> Option<&T> {
        self.slots[self.current].as_ref()
    }

    /// Stores `fence` in the current slot and advances to the next one.
    pub fn complete_current(&mut self, fence: T) {
        self.slots[self.current] = Some(fence);
        self.current = (self.current + 1) % self.slots.len();
    }

    /// Number of slots holding a fence that has not been taken yet.
    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Drains every outstanding fence, oldest slot first.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        let len = self.slots.len();
        let start = self.current;
        (0..len).filter_map(move |i| self.slots[(start + i) % len].take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_is_raised_to_one() {
        let ring: FrameRing<u64> = FrameRing::new(0);
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn fresh_slots_have_no_fence() {
        let mut ring: FrameRing<u64> = FrameRing::new(2);
        assert_eq!(ring.take_current(), None);
        assert_eq!(ring.pending(), 0);
    }

    #[test]
    fn slots_rotate_and_wrap() {
        let mut ring = FrameRing::new(2);
        assert_eq!(ring.current_index(), 0);
        ring.complete_current(10u64);
        assert_eq!(ring.current_index(), 1);
        ring.complete_current(11);
        assert_eq!(ring.current_index(), 0);

        // Slot 0 now guards the first submission.
        assert_eq!(ring.peek_current(), Some(&10));
        assert_eq!(ring.take_current(), Some(10));
        assert_eq!(ring.take_current(), None);
    }

    #[test]
    fn reusing_a_slot_replaces_its_fence() {
        let mut ring = FrameRing::new(1);
        ring.complete_current(1u64);
        assert_eq!(ring.take_current(), Some(1));
        ring.complete_current(2);
        assert_eq!(ring.take_current(), Some(2));
    }

    #[test]
    fn drain_yields_oldest_first() {
        let mut ring = FrameRing::new(3);
        ring.complete_current(1u64);
        ring.complete_current(2);
        ring.complete_current(3);
        ring.complete_current(4); // overwrites slot 0

        let drained: Vec<u64> = ring.drain().collect();
        assert_eq!(drained, vec![2, 3, 4]);
        assert_eq!(ring.pending(), 0);
    }
}
