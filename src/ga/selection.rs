//! Parent-pair selection strategies.
//!
//! Selection runs once per crossover over the chromosomes not yet used in
//! the current generation, and always yields two distinct parents.
//!
//! # References
//!
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use super::types::{Fitness, Individual};
use crate::error::{GroupingError, Result};

/// Upper bound on draws per selected pair before giving up.
///
/// With at least two distinct candidates both strategies succeed with
/// probability 1; the bound turns a bookkeeping bug into an error instead
/// of a hang.
const MAX_ATTEMPTS: usize = 10_000;

/// Selection strategy for choosing a pair of parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use u_grouping::ga::Selection;
///
/// // Fitness-ranked selection (default)
/// let sel = Selection::Rank;
///
/// // Uniform selection, ignoring fitness
/// let sel = Selection::Random;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Selection {
    /// Two uniform draws with replacement, redrawn until distinct.
    ///
    /// # Complexity
    /// O(1) expected per pair
    Random,

    /// Linear rank selection.
    ///
    /// Candidates are sorted ascending by fitness and the k-th (1-based)
    /// gets weight `k * 100 / (n(n+1)/2)`, so the fittest candidate has
    /// the largest share and the weights sum to 100. An integer is drawn
    /// in `[0, 100)` and the cumulative table is walked to find the hit.
    ///
    /// # Complexity
    /// O(n log n) per pair (sort), O(n) per draw
    #[default]
    Rank,
}

impl Selection {
    /// All strategies, in declaration order.
    pub const ALL: [Selection; 2] = [Selection::Random, Selection::Rank];

    /// Selects two distinct parents from `candidates`.
    ///
    /// Returns indices into `candidates`. Distinctness is by
    /// [`Individual::id`].
    ///
    /// # Errors
    /// [`GroupingError::SelectionExhaustion`] if `candidates` does not hold
    /// two distinct individuals.
    pub fn select_pair<I: Individual, R: Rng>(
        &self,
        candidates: &[&I],
        rng: &mut R,
    ) -> Result<(usize, usize)> {
        let exhausted = GroupingError::SelectionExhaustion {
            available: candidates.len(),
        };
        if candidates.len() < 2 {
            return Err(exhausted);
        }

        let pair = match self {
            Selection::Random => random_pair(candidates, rng),
            Selection::Rank => rank_pair(candidates, rng),
        };
        pair.ok_or(exhausted)
    }
}

/// Uniform with-replacement draws until the two picks differ.
fn random_pair<I: Individual, R: Rng>(candidates: &[&I], rng: &mut R) -> Option<(usize, usize)> {
    let n = candidates.len();
    for _ in 0..MAX_ATTEMPTS {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        if candidates[a].id() != candidates[b].id() {
            return Some((a, b));
        }
    }
    None
}

/// Rank-weighted draws: first hit is parent 1, next distinct hit parent 2.
fn rank_pair<I: Individual, R: Rng>(candidates: &[&I], rng: &mut R) -> Option<(usize, usize)> {
    // Ascending by fitness; stable so equal fitness keeps input order.
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
        candidates[a]
            .fitness()
            .to_f64()
            .partial_cmp(&candidates[b].fitness().to_f64())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let weights = rank_weights(order.len());

    let mut first: Option<usize> = None;
    for _ in 0..MAX_ATTEMPTS {
        let hit = order[weighted_index(&weights, rng.random_range(0..100u32) as f64)];
        match first {
            None => first = Some(hit),
            Some(p1) if candidates[p1].id() != candidates[hit].id() => return Some((p1, hit)),
            Some(_) => {}
        }
    }
    None
}

/// Linear rank weights for `n` candidates sorted ascending by fitness.
///
/// Weight of rank `k` (1-based) is `k * 100 / (n(n+1)/2)`; the weights sum
/// to 100.
pub fn rank_weights(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let unit = 100.0 / (n * (n + 1) / 2) as f64;
    (1..=n).map(|k| k as f64 * unit).collect()
}

/// First index whose cumulative weight exceeds `threshold`.
///
/// Falls back to the last index when rounding leaves the total just short
/// of the threshold.
fn weighted_index(weights: &[f64], threshold: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    weights.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::ids::ChromosomeId;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct TestInd {
        id: u64,
        fit: f64,
    }

    impl Individual for TestInd {
        type Fitness = f64;
        fn id(&self) -> ChromosomeId {
            ChromosomeId(self.id)
        }
        fn fitness(&self) -> f64 {
            self.fit
        }
    }

    fn make_population(fitnesses: &[f64]) -> Vec<TestInd> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| TestInd {
                id: i as u64 + 1,
                fit: f,
            })
            .collect()
    }

    fn refs(pop: &[TestInd]) -> Vec<&TestInd> {
        pop.iter().collect()
    }

    #[test]
    fn test_rank_weights_proportional() {
        let w = rank_weights(4);
        assert_eq!(w.len(), 4);
        assert!((w.iter().sum::<f64>() - 100.0).abs() < 1e-9);
        for (k, &wk) in w.iter().enumerate() {
            assert!((wk / w[0] - (k + 1) as f64).abs() < 1e-9);
        }
        assert!(rank_weights(0).is_empty());
        assert_eq!(rank_weights(1), vec![100.0]);
    }

    #[test]
    fn test_weighted_index_walk() {
        let w = rank_weights(4); // 10, 20, 30, 40
        assert_eq!(weighted_index(&w, 0.0), 0);
        assert_eq!(weighted_index(&w, 9.0), 0);
        assert_eq!(weighted_index(&w, 10.0), 1);
        assert_eq!(weighted_index(&w, 59.0), 2);
        assert_eq!(weighted_index(&w, 60.0), 3);
        assert_eq!(weighted_index(&w, 99.0), 3);
        assert_eq!(weighted_index(&w, 100.0), 3);
    }

    #[test]
    fn test_pairs_are_distinct() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0, 3.0]);
        let candidates = refs(&pop);
        let mut rng = create_rng(42);
        for sel in Selection::ALL {
            for _ in 0..1000 {
                let (a, b) = sel.select_pair(&candidates, &mut rng).unwrap();
                assert_ne!(a, b, "{sel:?} returned the same parent twice");
                assert!(a < candidates.len() && b < candidates.len());
            }
        }
    }

    #[test]
    fn test_rank_favors_best() {
        let pop = make_population(&[1.0, 50.0, 100.0, 20.0]);
        let candidates = refs(&pop);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let (a, _) = Selection::Rank.select_pair(&candidates, &mut rng).unwrap();
            counts[a] += 1;
        }
        // Index 2 (fitness=100.0, best) should be picked first most often,
        // index 0 (fitness=1.0, worst) least often.
        assert!(
            counts[2] > counts[0] * 3,
            "best should dominate worst: {counts:?}"
        );
        assert!(counts[2] > 3000, "expected ~40% for the best, got {counts:?}");
    }

    #[test]
    fn test_random_is_roughly_uniform() {
        let pop = make_population(&[1.0, 50.0, 100.0, 20.0]);
        let candidates = refs(&pop);
        let mut rng = create_rng(7);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let (a, b) = Selection::Random.select_pair(&candidates, &mut rng).unwrap();
            counts[a] += 1;
            counts[b] += 1;
        }
        for &c in &counts {
            assert!(c > 4000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_two_candidates_always_pair_up() {
        let pop = make_population(&[5.0, 5.0]);
        let candidates = refs(&pop);
        let mut rng = create_rng(1);
        for sel in Selection::ALL {
            let (a, b) = sel.select_pair(&candidates, &mut rng).unwrap();
            assert_eq!(a + b, 1);
        }
    }

    #[test]
    fn test_single_candidate_is_exhaustion() {
        let pop = make_population(&[5.0]);
        let candidates = refs(&pop);
        let mut rng = create_rng(1);
        for sel in Selection::ALL {
            let err = sel.select_pair(&candidates, &mut rng).unwrap_err();
            assert_eq!(err, GroupingError::SelectionExhaustion { available: 1 });
        }
    }

    #[test]
    fn test_same_id_twice_is_exhaustion() {
        // Two entries that are the same chromosome cannot form a pair.
        let ind = TestInd { id: 9, fit: 1.0 };
        let candidates = vec![&ind, &ind];
        let mut rng = create_rng(1);
        for sel in Selection::ALL {
            assert!(matches!(
                sel.select_pair(&candidates, &mut rng),
                Err(GroupingError::SelectionExhaustion { available: 2 })
            ));
        }
    }
}
