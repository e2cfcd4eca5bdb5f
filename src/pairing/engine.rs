//! Shuffle-and-repair pairing of a question pool against itself.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::error::{PairingError, Result};
use super::question::Question;
use super::random::RandomSource;

/// Default number of shuffle-and-repair attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Tuning knobs for [`PairingEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingConfig {
    /// Upper bound on shuffle-and-repair attempts. Must be at least 1.
    pub max_attempts: u32,
    /// Reject attempts whose first group-A record equals the second group-B
    /// record (compared on question and answer). Only positions 0 and 1 are
    /// inspected. Decks generated with this gate switched off will differ from
    /// decks generated with it on for the same seed.
    pub first_pair_gate: bool,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            first_pair_gate: true,
        }
    }
}

/// Two index-aligned groups of questions.
///
/// `group_a[i]` and `group_b[i]` are shown side by side as the i-th pairing.
/// Group A is the pool in its original order; group B is a permutation of the
/// pool that never shows the same question text at the same index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pairing {
    group_a: Vec<Question>,
    group_b: Vec<Question>,
    attempts: u32,
}

impl Pairing {
    /// Rebuild a pairing from groups produced earlier.
    ///
    /// The groups must have equal length and must not repeat a question text
    /// at any index. The attempt count of a rebuilt pairing is 0.
    pub fn from_groups(group_a: Vec<Question>, group_b: Vec<Question>) -> Result<Self> {
        if group_a.len() != group_b.len() {
            return Err(PairingError::InvalidArgument(format!(
                "group A has {} questions but group B has {}",
                group_a.len(),
                group_b.len()
            )));
        }
        if let Some(index) = first_self_match(&group_a, &group_b) {
            return Err(PairingError::InvalidArgument(format!(
                "both groups show '{}' at index {}",
                group_a[index].question(),
                index
            )));
        }
        Ok(Self {
            group_a,
            group_b,
            attempts: 0,
        })
    }

    /// Group A, in pool order.
    #[inline]
    pub fn group_a(&self) -> &[Question] {
        &self.group_a
    }

    /// Group B, the shuffled counterpart of group A.
    #[inline]
    pub fn group_b(&self) -> &[Question] {
        &self.group_b
    }

    /// Number of shuffle-and-repair attempts it took to find this pairing.
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Number of pairings.
    #[inline]
    pub fn len(&self) -> usize {
        self.group_a.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.group_a.is_empty()
    }

    /// Iterate over `(group_a[i], group_b[i])` in index order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Question, &Question)> {
        self.group_a.iter().zip(self.group_b.iter())
    }

    /// Split into `(group_a, group_b)`.
    pub fn into_groups(self) -> (Vec<Question>, Vec<Question>) {
        (self.group_a, self.group_b)
    }
}

/// Pairs a question pool against a permutation of itself.
///
/// Each attempt shuffles a private working copy of the pool, then walks it
/// once from left to right. Whenever position `i` shows group A's question in
/// group B as well, the first later entry with a different question text is
/// swapped in. Self-matches with no such entry stay in place for that attempt.
/// An attempt is accepted when the first-pair gate (if enabled) passes and no
/// position is left self-matched. The working copy carries over from one
/// attempt to the next.
#[derive(Debug, Clone, Default)]
pub struct PairingEngine {
    config: PairingConfig,
}

impl PairingEngine {
    pub fn new(config: PairingConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine runs with.
    #[inline]
    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    /// Pair `pool` using randomness from `rng`.
    ///
    /// # Errors
    ///
    /// - [`PairingError::InvalidArgument`] if the retry budget is zero.
    /// - [`PairingError::UnsatisfiableInput`] for a single-question pool, for a
    ///   pool where one question text fills more than half the entries, and
    ///   when no attempt within the budget is accepted.
    pub fn pair<R: RandomSource>(&self, pool: &[Question], rng: &mut R) -> Result<Pairing> {
        if self.config.max_attempts == 0 {
            return Err(PairingError::InvalidArgument(
                "the retry budget must allow at least one attempt".to_string(),
            ));
        }

        match pool.len() {
            0 => return Ok(Pairing::default()),
            1 => {
                return Err(PairingError::UnsatisfiableInput(format!(
                    "a single question ('{}') can only be paired with itself",
                    pool[0].question()
                )));
            },
            _ => {},
        }

        if let Some((text, count)) = dominant_question(pool) {
            return Err(PairingError::UnsatisfiableInput(format!(
                "question '{}' appears {} times in a pool of {}, so some position must repeat it",
                text,
                count,
                pool.len()
            )));
        }

        let mut working = pool.to_vec();
        for attempt in 1..=self.config.max_attempts {
            rng.shuffle(&mut working);
            repair_self_matches(pool, &mut working);

            if self.config.first_pair_gate && pool[0] == working[1] {
                trace!(attempt, "first-pair gate rejected attempt");
                continue;
            }
            if let Some(index) = first_self_match(pool, &working) {
                trace!(attempt, index, "unresolved self-match");
                continue;
            }

            debug!(attempt, questions = pool.len(), "accepted pairing");
            return Ok(Pairing {
                group_a: pool.to_vec(),
                group_b: working,
                attempts: attempt,
            });
        }

        Err(PairingError::UnsatisfiableInput(format!(
            "no valid pairing for {} questions after {} attempts",
            pool.len(),
            self.config.max_attempts
        )))
    }
}

/// Pair `pool` with the default configuration.
pub fn pair<R: RandomSource>(pool: &[Question], rng: &mut R) -> Result<Pairing> {
    PairingEngine::default().pair(pool, rng)
}

/// Single forward pass that swaps later entries into self-matched positions.
fn repair_self_matches(group_a: &[Question], group_b: &mut [Question]) {
    for i in 0..group_a.len() {
        if !group_a[i].same_question(&group_b[i]) {
            continue;
        }
        if let Some(offset) = group_b[i + 1..]
            .iter()
            .position(|candidate| !group_a[i].same_question(candidate))
        {
            group_b.swap(i, i + 1 + offset);
        }
    }
}

fn first_self_match(group_a: &[Question], group_b: &[Question]) -> Option<usize> {
    group_a
        .iter()
        .zip(group_b)
        .position(|(a, b)| a.same_question(b))
}

/// A question text that occurs in more than half the pool, if any.
///
/// Such a pool has no arrangement without self-matches.
fn dominant_question(pool: &[Question]) -> Option<(&str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(pool.len());
    for q in pool {
        *counts.entry(q.question()).or_default() += 1;
    }
    counts
        .into_iter()
        .find(|&(_, count)| count * 2 > pool.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::random::SeededRandom;

    /// Replays fixed permutations, cycling through them. Applying `perm` turns
    /// the current buffer `old` into `new[i] = old[perm[i]]`.
    struct Scripted {
        perms: Vec<Vec<usize>>,
        calls: usize,
    }

    impl Scripted {
        fn new(perms: Vec<Vec<usize>>) -> Self {
            Self { perms, calls: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn shuffle<T>(&mut self, items: &mut [T]) {
            let perm = &self.perms[self.calls % self.perms.len()];
            self.calls += 1;
            for i in 0..items.len() {
                let mut src = perm[i];
                while src < i {
                    src = perm[src];
                }
                items.swap(i, src);
            }
        }
    }

    fn pool(n: usize) -> Vec<Question> {
        (1..=n)
            .map(|i| Question::new(format!("Q{i}"), format!("A{i}")))
            .collect()
    }

    fn texts(questions: &[Question]) -> Vec<&str> {
        questions.iter().map(Question::question).collect()
    }

    #[test]
    fn test_scripted_source_applies_permutation() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        Scripted::new(vec![vec![2, 0, 3, 1]]).shuffle(&mut items);
        assert_eq!(items, vec!['c', 'a', 'd', 'b']);
    }

    #[test]
    fn test_empty_pool() {
        let pairing = pair(&[], &mut SeededRandom::default()).unwrap();
        assert!(pairing.is_empty());
        assert!(pairing.group_b().is_empty());
        assert_eq!(pairing.attempts(), 0);
    }

    #[test]
    fn test_single_question_is_unsatisfiable() {
        let err = pair(&pool(1), &mut SeededRandom::default()).unwrap_err();
        assert!(matches!(err, PairingError::UnsatisfiableInput(_)));
    }

    #[test]
    fn test_zero_budget_is_invalid() {
        let engine = PairingEngine::new(PairingConfig {
            max_attempts: 0,
            ..PairingConfig::default()
        });
        let err = engine.pair(&pool(4), &mut SeededRandom::default()).unwrap_err();
        assert!(matches!(err, PairingError::InvalidArgument(_)));
    }

    #[test]
    fn test_all_duplicates_fail_fast() {
        let pool = vec![Question::new("Same", "x"); 5];
        let mut rng = Scripted::new(vec![vec![0, 1, 2, 3, 4]]);
        let err = pair(&pool, &mut rng).unwrap_err();
        assert!(matches!(err, PairingError::UnsatisfiableInput(_)));
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn test_golden_accepts_first_derangement() {
        let mut rng = Scripted::new(vec![vec![2, 3, 0, 1]]);
        let pairing = pair(&pool(4), &mut rng).unwrap();
        assert_eq!(texts(pairing.group_a()), ["Q1", "Q2", "Q3", "Q4"]);
        assert_eq!(texts(pairing.group_b()), ["Q3", "Q4", "Q1", "Q2"]);
        assert_eq!(pairing.attempts(), 1);
    }

    #[test]
    fn test_golden_repair_then_gate_retry() {
        // Attempt 1 leaves the pool in order; the repair pass turns it into
        // Q2 Q1 Q4 Q3, which puts Q1 at group B index 1 and fails the gate.
        // Attempt 2 reverses that buffer into Q3 Q4 Q1 Q2.
        let mut rng = Scripted::new(vec![vec![0, 1, 2, 3], vec![3, 2, 1, 0]]);
        let pairing = pair(&pool(4), &mut rng).unwrap();
        assert_eq!(texts(pairing.group_b()), ["Q3", "Q4", "Q1", "Q2"]);
        assert_eq!(pairing.attempts(), 2);
    }

    #[test]
    fn test_golden_unresolved_tail_is_retried() {
        // Attempt 1 yields Q2 Q3 Q1 Q4: the last position cannot be repaired.
        // Attempt 2 yields Q4 Q2 Q3 Q1, and repair swaps Q3 into index 1.
        let mut rng = Scripted::new(vec![vec![1, 2, 0, 3], vec![3, 0, 1, 2]]);
        let pairing = pair(&pool(4), &mut rng).unwrap();
        assert_eq!(texts(pairing.group_b()), ["Q4", "Q3", "Q2", "Q1"]);
        assert_eq!(pairing.attempts(), 2);
    }

    #[test]
    fn test_gate_exhausts_budget() {
        // Both scripted orders repair into arrangements with Q1 at index 1.
        let engine = PairingEngine::new(PairingConfig {
            max_attempts: 25,
            ..PairingConfig::default()
        });
        let mut rng = Scripted::new(vec![vec![0, 1, 2, 3], vec![1, 2, 3, 0]]);
        let err = engine.pair(&pool(4), &mut rng).unwrap_err();
        assert!(matches!(err, PairingError::UnsatisfiableInput(_)));
        assert_eq!(rng.calls, 25);
    }

    #[test]
    fn test_gate_compares_whole_records() {
        let pool = vec![
            Question::new("Q1", "A"),
            Question::new("Q2", "B"),
            Question::new("Q3", "C"),
            Question::new("Q1", "X"),
        ];
        let mut rng = Scripted::new(vec![vec![1, 3, 0, 2]]);
        let pairing = pair(&pool, &mut rng).unwrap();
        assert_eq!(pairing.group_b()[1], Question::new("Q1", "X"));
        assert_eq!(pairing.attempts(), 1);
    }

    #[test]
    fn test_two_questions_need_gate_disabled() {
        let err = pair(&pool(2), &mut SeededRandom::default()).unwrap_err();
        assert!(matches!(err, PairingError::UnsatisfiableInput(_)));

        let engine = PairingEngine::new(PairingConfig {
            first_pair_gate: false,
            ..PairingConfig::default()
        });
        let pairing = engine.pair(&pool(2), &mut SeededRandom::default()).unwrap();
        assert_eq!(texts(pairing.group_b()), ["Q2", "Q1"]);
    }

    #[test]
    fn test_seed_42_golden() {
        let pool = pool(4);
        let first = pair(&pool, &mut SeededRandom::new(42)).unwrap();
        assert_eq!(texts(first.group_a()), ["Q1", "Q2", "Q3", "Q4"]);
        assert_eq!(texts(first.group_b()), ["Q4", "Q3", "Q2", "Q1"]);
        assert_eq!(first.attempts(), 3);

        let second = pair(&pool, &mut SeededRandom::new(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_gate_rejects_every_derangement_of_alternating_pool() {
        // Every text derangement puts Q1/a at group B index 1
        let pool = vec![
            Question::new("Q1", "a"),
            Question::new("Q2", "b"),
            Question::new("Q1", "a"),
            Question::new("Q2", "b"),
        ];
        let gated = PairingEngine::new(PairingConfig {
            max_attempts: 200,
            ..PairingConfig::default()
        });
        let err = gated.pair(&pool, &mut SeededRandom::new(1)).unwrap_err();
        assert!(matches!(err, PairingError::UnsatisfiableInput(_)));

        let ungated = PairingEngine::new(PairingConfig {
            first_pair_gate: false,
            ..PairingConfig::default()
        });
        let pairing = ungated.pair(&pool, &mut SeededRandom::new(1)).unwrap();
        assert_eq!(texts(pairing.group_b()), ["Q2", "Q1", "Q2", "Q1"]);
    }

    #[test]
    fn test_caller_pool_untouched() {
        let pool = pool(6);
        let snapshot = pool.clone();
        let _ = pair(&pool, &mut SeededRandom::new(1)).unwrap();
        assert_eq!(pool, snapshot);
    }

    #[test]
    fn test_duplicate_texts_within_half() {
        let pool = vec![
            Question::new("Q1", "a"),
            Question::new("Q1", "b"),
            Question::new("Q2", "c"),
            Question::new("Q3", "d"),
            Question::new("Q4", "e"),
        ];
        let pairing = pair(&pool, &mut SeededRandom::new(9)).unwrap();
        assert!(pairing.pairs().all(|(a, b)| !a.same_question(b)));
        let mut sorted = pairing.group_b().to_vec();
        sorted.sort();
        let mut expected = pool.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_from_groups_validates() {
        let a = pool(2);
        let b = vec![a[1].clone(), a[0].clone()];
        let pairing = Pairing::from_groups(a.clone(), b).unwrap();
        assert_eq!(pairing.attempts(), 0);
        assert_eq!(pairing.len(), 2);

        assert!(matches!(
            Pairing::from_groups(a.clone(), a.clone()),
            Err(PairingError::InvalidArgument(_))
        ));
        assert!(matches!(
            Pairing::from_groups(a.clone(), a[..1].to_vec()),
            Err(PairingError::InvalidArgument(_))
        ));
    }
}
