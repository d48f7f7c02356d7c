//! The batch sequence capability consumed by training loops.

use sparsefeed_core::error::Result;
use std::iter::FusedIterator;

/// An indexable, epoch-aware source of training batches.
///
/// Callers drive the sequence: fetch `0..len()` in any order, then call
/// [`on_epoch_end`](Self::on_epoch_end) before starting the next pass.
/// Because reshuffling takes `&mut self`, no batch reference can outlive
/// an epoch boundary.
pub trait BatchSequence {
    /// The batch type produced for one training step.
    type Item;

    /// Number of batches in one epoch.
    fn len(&self) -> usize;

    /// Whether an epoch yields no batches at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produces batch `index`, with `0 <= index < len()`.
    fn get_item(&self, index: usize) -> Result<Self::Item>;

    /// Hook invoked by the caller after every full pass.
    fn on_epoch_end(&mut self);

    /// Iterates over every batch of the current epoch in index order.
    fn epoch_iter(&self) -> EpochIter<'_, Self>
    where
        Self: Sized,
    {
        EpochIter::new(self)
    }
}

/// Iterator over one epoch of a [`BatchSequence`].
#[derive(Debug)]
pub struct EpochIter<'s, S: BatchSequence> {
    sequence: &'s S,
    next: usize,
    end: usize,
}

impl<'s, S: BatchSequence> EpochIter<'s, S> {
    /// Creates an iterator positioned at the first batch.
    pub fn new(sequence: &'s S) -> Self {
        Self {
            sequence,
            next: 0,
            end: sequence.len(),
        }
    }
}

impl<S: BatchSequence> Iterator for EpochIter<'_, S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.sequence.get_item(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<S: BatchSequence> ExactSizeIterator for EpochIter<'_, S> {}

impl<S: BatchSequence> FusedIterator for EpochIter<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use sparsefeed_core::error::DataError;

    /// Sequence of `n` integers with a reversible order.
    struct Counting {
        n: usize,
        reversed: bool,
    }

    impl BatchSequence for Counting {
        type Item = usize;

        fn len(&self) -> usize {
            self.n
        }

        fn get_item(&self, index: usize) -> Result<usize> {
            if index >= self.n {
                return Err(DataError::index_out_of_range(index, self.n));
            }
            Ok(if self.reversed { self.n - 1 - index } else { index })
        }

        fn on_epoch_end(&mut self) {
            self.reversed = !self.reversed;
        }
    }

    #[test]
    fn test_epoch_iter_visits_every_index() {
        let mut seq = Counting { n: 4, reversed: false };
        let first: Vec<_> = seq.epoch_iter().map(|r| r.unwrap()).collect();
        assert_eq!(first, vec![0, 1, 2, 3]);

        seq.on_epoch_end();
        let second: Vec<_> = seq.epoch_iter().map(|r| r.unwrap()).collect();
        assert_eq!(second, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_epoch_iter_size_hint() {
        let seq = Counting { n: 3, reversed: false };
        let mut iter = seq.epoch_iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.by_ref().for_each(drop);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_empty_sequence() {
        let seq = Counting { n: 0, reversed: false };
        assert!(seq.is_empty());
        assert_eq!(seq.epoch_iter().count(), 0);
    }
}
