//! Record and scan-group sequencing.

use std::sync::atomic::{AtomicI32, Ordering};

/// Monotonic counters shared by all record builders of one processor instance.
///
/// `record_number` starts at 0 and increments on every successful record build;
/// it never resets for the lifetime of the processor. `group_number` starts at
/// -1 and is advanced exactly once at the start of each cellular batch, so the
/// first batch carries group 0. There is no rollback: a batch whose items are
/// all rejected still consumed its group number.
#[derive(Debug)]
pub struct Sequencer {
    record_number: AtomicI32,
    group_number: AtomicI32,
}

impl Sequencer {
    pub fn new() -> Self {
        Sequencer {
            record_number: AtomicI32::new(0),
            group_number: AtomicI32::new(-1),
        }
    }

    /// Claim the next record number.
    pub fn next_record_number(&self) -> i32 {
        self.record_number.fetch_add(1, Ordering::Relaxed)
    }

    /// Advance the scan-group counter and return the new group number.
    pub fn advance_group(&self) -> i32 {
        self.group_number.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// The group number of the batch currently being processed.
    pub fn current_group(&self) -> i32 {
        self.group_number.load(Ordering::Relaxed)
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Sequencer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Sequencer;

    #[test]
    fn record_numbers_are_contiguous_from_zero() {
        let sequencer = Sequencer::new();
        for expected in 0..5 {
            assert_eq!(sequencer.next_record_number(), expected);
        }
    }

    #[test]
    fn first_group_is_zero() {
        let sequencer = Sequencer::new();
        assert_eq!(sequencer.current_group(), -1);
        assert_eq!(sequencer.advance_group(), 0);
        assert_eq!(sequencer.current_group(), 0);
        assert_eq!(sequencer.advance_group(), 1);
    }
}
