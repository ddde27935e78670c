//! Gene-split crossover operators and the repair step.
//!
//! Operators work on the flattened gene sequence of a chromosome: the
//! person positions of every group, concatenated in group order. Each
//! operator deals the parent's genes into two provisional lists; the
//! lists are then completed from the other parent by
//! [`add_missing_genes`], which restores the partition property.
//!
//! # Operators
//!
//! - [`Crossover::OnePoint`]: first half / second half
//! - [`Crossover::TwoPoint`]: a random middle segment against the rest
//! - [`Crossover::Uniform`]: even / odd positions
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, Ch. 3
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use std::collections::HashSet;

use rand::Rng;

/// Crossover operator applied to a pair of parents.
///
/// # Examples
///
/// ```
/// use u_grouping::ga::Crossover;
///
/// let genes: Vec<usize> = (0..8).collect();
/// let mut rng = u_grouping::random::create_rng(42);
/// let (a, b) = Crossover::OnePoint.split(&genes, &mut rng);
/// assert_eq!(a, vec![0, 1, 2, 3]);
/// assert_eq!(b, vec![4, 5, 6, 7]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Crossover {
    /// Indices below `size / 2` go to the first list, the rest to the second.
    OnePoint,

    /// A random segment `[point1, point2]` goes to the second list,
    /// everything outside it to the first.
    ///
    /// `point1` is uniform in `[0, size/2)` and `point2 = point1 +`
    /// uniform in `[0, size/2 - 1)`, so the segment never exceeds half
    /// the chromosome.
    TwoPoint,

    /// Even indices go to the first list, odd indices to the second.
    #[default]
    Uniform,
}

impl Crossover {
    /// All operators, in declaration order.
    pub const ALL: [Crossover; 3] = [Crossover::OnePoint, Crossover::TwoPoint, Crossover::Uniform];

    /// Deals `genes` into two provisional lists.
    ///
    /// The lists are not complete partitions yet; see [`Crossover::recombine`].
    pub fn split<R: Rng>(&self, genes: &[usize], rng: &mut R) -> (Vec<usize>, Vec<usize>) {
        match self {
            Crossover::OnePoint => one_point_split(genes),
            Crossover::TwoPoint => two_point_split(genes, rng),
            Crossover::Uniform => uniform_split(genes),
        }
    }

    /// Splits `genes` and repairs both lists against `other_genes`.
    ///
    /// Both parents must be partitions of the same person universe. The
    /// result is two lists of exactly `genes.len()` entries, each free of
    /// duplicates.
    pub fn recombine<R: Rng>(
        &self,
        genes: &[usize],
        other_genes: &[usize],
        rng: &mut R,
    ) -> (Vec<usize>, Vec<usize>) {
        let (list_a, list_b) = self.split(genes, rng);
        add_missing_genes(other_genes, list_a, list_b, genes.len())
    }
}

fn one_point_split(genes: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let mid = genes.len() / 2;
    (genes[..mid].to_vec(), genes[mid..].to_vec())
}

fn two_point_split<R: Rng>(genes: &[usize], rng: &mut R) -> (Vec<usize>, Vec<usize>) {
    let half = genes.len() / 2;
    let point1 = draw_below(half, rng);
    let point2 = point1 + draw_below(half.saturating_sub(1), rng);

    let mut list_a = Vec::with_capacity(genes.len());
    let mut list_b = Vec::with_capacity(point2 - point1 + 1);
    for (i, &gene) in genes.iter().enumerate() {
        if i < point1 || i > point2 {
            list_a.push(gene);
        } else {
            list_b.push(gene);
        }
    }
    (list_a, list_b)
}

fn uniform_split(genes: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let mut list_a = Vec::with_capacity(genes.len().div_ceil(2));
    let mut list_b = Vec::with_capacity(genes.len() / 2);
    for (i, &gene) in genes.iter().enumerate() {
        if i % 2 == 0 {
            list_a.push(gene);
        } else {
            list_b.push(gene);
        }
    }
    (list_a, list_b)
}

/// Uniform draw in `[0, bound)`; an empty range yields 0.
fn draw_below<R: Rng>(bound: usize, rng: &mut R) -> usize {
    if bound == 0 {
        0
    } else {
        rng.random_range(0..bound)
    }
}

/// Completes two provisional lists from the other parent's genes.
///
/// Walks `other_genes` in order. A gene is appended to `list_a` while
/// `list_a` holds fewer than `size` genes and does not contain it yet;
/// otherwise it is appended to `list_b`.
///
/// When both parents are partitions of the same universe, `list_a` ends
/// up as a full permutation of the universe and `list_b` receives exactly
/// the genes `list_a` already had, so it is a full permutation as well.
pub fn add_missing_genes(
    other_genes: &[usize],
    mut list_a: Vec<usize>,
    mut list_b: Vec<usize>,
    size: usize,
) -> (Vec<usize>, Vec<usize>) {
    let mut in_a: HashSet<usize> = list_a.iter().copied().collect();
    list_a.reserve(size.saturating_sub(list_a.len()));
    list_b.reserve(size.saturating_sub(list_b.len()));

    for &gene in other_genes {
        if list_a.len() < size && !in_a.contains(&gene) {
            list_a.push(gene);
            in_a.insert(gene);
        } else {
            list_b.push(gene);
        }
    }
    (list_a, list_b)
}

// ============================================================================
// Tests
// ============================================================================
