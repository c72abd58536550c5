use rand::Rng;

/// A shuffled stack of word-pool indices.
///
/// Reading orders take the whole stack; boards deal off the top of their
/// own partially shuffled stack, which is a uniform sample without
/// replacement.
pub struct WordDeck {
    order: Vec<usize>,
    cursor: usize,
}

impl WordDeck {
    /// Shuffle the indices `0..len` with `rng`.
    pub fn new_shuffled<R: Rng>(len: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..len).collect();

        // Fisher-Yates shuffle
        for i in (1..order.len()).rev() {
            let j = rng.gen_range(0..=i);
            order.swap(i, j);
        }

        WordDeck { order, cursor: 0 }
    }

    /// Shuffle only the top `k` slots of `0..len`; the rest stay in order.
    pub fn new_partially_shuffled<R: Rng>(len: usize, k: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..len).collect();

        // Forward Fisher-Yates, stopped after k swaps
        for i in 0..k.min(len) {
            let j = rng.gen_range(i..len);
            order.swap(i, j);
        }

        WordDeck { order, cursor: 0 }
    }

    /// Deal up to `n` indices.
    pub fn deal_n(&mut self, n: usize) -> Vec<usize> {
        let end = (self.cursor + n).min(self.order.len());
        let dealt = self.order[self.cursor..end].to_vec();
        self.cursor = end;
        dealt
    }

    /// The undealt part of the permutation.
    pub fn into_remaining(self) -> Vec<usize> {
        let mut order = self.order;
        order.drain(..self.cursor);
        order
    }
}

/// Uniform random permutation of `0..len`.
pub fn permutation<R: Rng>(len: usize, rng: &mut R) -> Vec<usize> {
    WordDeck::new_shuffled(len, rng).into_remaining()
}

/// `k` distinct indices drawn uniformly from `0..len`.
pub fn sample<R: Rng>(len: usize, k: usize, rng: &mut R) -> Vec<usize> {
    WordDeck::new_partially_shuffled(len, k, rng).deal_n(k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn permutation_covers_every_index_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut order = permutation(21, &mut rng);
        order.sort_unstable();
        assert_eq!(order, (0..21).collect::<Vec<_>>());
    }

    #[test]
    fn sample_has_distinct_indices_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let picked = sample(21, 16, &mut rng);
            assert_eq!(picked.len(), 16);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 16);
            assert!(picked.iter().all(|&i| i < 21));
        }
    }

    #[test]
    fn deal_stops_at_the_end() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck = WordDeck::new_shuffled(3, &mut rng);
        assert_eq!(deck.deal_n(2).len(), 2);
        assert_eq!(deck.deal_n(5).len(), 1);
        assert!(deck.deal_n(1).is_empty());
    }

    #[test]
    fn partial_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut order = WordDeck::new_partially_shuffled(10, 3, &mut rng).into_remaining();
        order.sort_unstable();
        assert_eq!(order, (0..10).collect::<Vec<_>>());

        // No swaps requested, nothing moves.
        let untouched = WordDeck::new_partially_shuffled(6, 0, &mut rng).into_remaining();
        assert_eq!(untouched, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn sample_larger_than_pool_takes_everything() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut picked = sample(5, 9, &mut rng);
        picked.sort_unstable();
        assert_eq!(picked, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn deck_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<usize> {
            let mut rng = StdRng::seed_from_u64(seed);
            permutation(30, &mut rng)
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn top_slot_is_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 8_000;
        let mut counts = [0usize; 4];
        for _ in 0..draws {
            counts[permutation(4, &mut rng)[0]] += 1;
        }
        let expected = draws / 4;
        for (index, &count) in counts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < expected * 15 / 100,
                "index {index} led {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn sample_membership_is_uniform() {
        let mut rng = StdRng::seed_from_u64(77);
        let draws = 10_000;
        let mut counts = [0usize; 10];
        for _ in 0..draws {
            for i in sample(10, 3, &mut rng) {
                counts[i] += 1;
            }
        }
        let expected = draws * 3 / 10;
        for (index, &count) in counts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < expected / 10,
                "index {index} sampled {count} times, expected about {expected}"
            );
        }
    }
}
