//! Response selection policies.
//!
//! Once a rule has matched, one of its templates has to be picked. The
//! default policy walks each rule's templates in order, wrapping at the end,
//! so the same rule never answers twice in a row with the same text and the
//! sequence is reproducible. A seeded random policy is available for a less
//! mechanical feel; it is always seeded so runs can be replayed.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configured selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Selection {
    /// Cycle through each rule's templates in declaration order.
    #[default]
    RoundRobin,
    /// Pick uniformly at random from a generator seeded with `seed`.
    Random { seed: u64 },
}

/// Live selection state for one conversation.
#[derive(Debug, Clone)]
pub(crate) enum Selector {
    /// Next template index per rule index.
    RoundRobin(HashMap<usize, usize>),
    Random(StdRng),
}

impl Selector {
    pub(crate) fn new(selection: Selection) -> Self {
        match selection {
            Selection::RoundRobin => Self::RoundRobin(HashMap::new()),
            Selection::Random { seed } => Self::Random(StdRng::seed_from_u64(seed)),
        }
    }

    /// Choose a template index in `0..template_count` for `rule_index`.
    pub(crate) fn next(&mut self, rule_index: usize, template_count: usize) -> usize {
        if template_count == 0 {
            return 0;
        }
        match self {
            Self::RoundRobin(cursors) => {
                let cursor = cursors.entry(rule_index).or_insert(0);
                let chosen = *cursor % template_count;
                *cursor = (chosen + 1) % template_count;
                chosen
            }
            Self::Random(rng) => rng.gen_range(0..template_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin_cycles() {
        let mut selector = Selector::new(Selection::RoundRobin);
        let picks: Vec<usize> = (0..7).map(|_| selector.next(3, 3)).collect();
        assert_eq!(picks, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_round_robin_is_per_rule() {
        let mut selector = Selector::new(Selection::RoundRobin);
        assert_eq!(selector.next(0, 2), 0);
        assert_eq!(selector.next(1, 2), 0);
        assert_eq!(selector.next(0, 2), 1);
        assert_eq!(selector.next(1, 2), 1);
        assert_eq!(selector.next(0, 2), 0);
    }

    #[test]
    fn test_random_is_seeded() {
        let mut a = Selector::new(Selection::Random { seed: 7 });
        let mut b = Selector::new(Selection::Random { seed: 7 });
        let picks_a: Vec<usize> = (0..20).map(|_| a.next(0, 5)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.next(0, 5)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 5));
    }

    #[test]
    fn test_empty_template_set() {
        let mut selector = Selector::new(Selection::RoundRobin);
        assert_eq!(selector.next(0, 0), 0);
    }

    #[test]
    fn test_selection_serde() -> Result<(), serde_json::Error> {
        let random: Selection = serde_json::from_str(r#"{"policy": "random", "seed": 42}"#)?;
        assert_eq!(random, Selection::Random { seed: 42 });
        let round_robin: Selection = serde_json::from_str(r#"{"policy": "round_robin"}"#)?;
        assert_eq!(round_robin, Selection::RoundRobin);
        Ok(())
    }
}
