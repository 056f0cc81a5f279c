//! Cyclic cursors and roster permutation.
//!
//! A [`Cycle`] repeats a finite sequence indefinitely: an index counter
//! modulo the sequence length, advancing by exactly one position per
//! consumption. The cursor moves only when a value is actually consumed,
//! so days that produce no assignment never cost the rotation a turn.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// An infinite, order-preserving repeating cursor over a finite sequence.
#[derive(Debug, Clone)]
pub struct Cycle<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T: Clone> Cycle<T> {
    /// Creates a cycle over `items`.
    ///
    /// # Panics
    /// Panics if `items` is empty. Callers validate non-emptiness first
    /// (see [`validate_request`](crate::validation::validate_request)).
    pub fn new(items: Vec<T>) -> Self {
        assert!(!items.is_empty(), "cannot cycle over an empty sequence");
        Self { items, cursor: 0 }
    }

    /// Consumes the next value, advancing the cursor by one position and
    /// wrapping to the start after the last element.
    pub fn next(&mut self) -> T {
        let item = self.items[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.items.len();
        item
    }

    /// The value `next` would return, without advancing.
    pub fn peek(&self) -> &T {
        &self.items[self.cursor]
    }
}

/// Applies a single seeded permutation to `items`.
///
/// Pure: the same seed always yields the same order. The scheduler calls
/// this at most once per generation, before cycling begins, so that
/// randomization never affects per-day ordering afterwards.
pub fn permute<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut shuffled = items.to_vec();
    let mut rng = SmallRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        let mut cycle = Cycle::new(vec!["A", "B", "C"]);
        let drawn: Vec<&str> = (0..7).map(|_| cycle.next()).collect();
        assert_eq!(drawn, vec!["A", "B", "C", "A", "B", "C", "A"]);
    }

    #[test]
    fn test_cycle_peek_does_not_advance() {
        let mut cycle = Cycle::new(vec![1, 2]);
        assert_eq!(*cycle.peek(), 1);
        assert_eq!(*cycle.peek(), 1);
        assert_eq!(cycle.next(), 1);
        assert_eq!(*cycle.peek(), 2);
    }

    #[test]
    fn test_cycle_single_element() {
        let mut cycle = Cycle::new(vec!["only"]);
        assert_eq!(cycle.next(), "only");
        assert_eq!(cycle.next(), "only");
    }

    #[test]
    #[should_panic(expected = "empty sequence")]
    fn test_cycle_rejects_empty() {
        let _ = Cycle::<String>::new(Vec::new());
    }

    #[test]
    fn test_permute_deterministic() {
        let items: Vec<i32> = (0..10).collect();
        assert_eq!(permute(&items, 42), permute(&items, 42));
    }

    #[test]
    fn test_permute_preserves_elements() {
        let items = vec!["A", "B", "C", "D", "E"];
        let mut shuffled = permute(&items, 7);
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn test_permute_single_element() {
        assert_eq!(permute(&["solo"], 123), vec!["solo"]);
    }
}
