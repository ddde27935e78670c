//! Core trait definitions for the grouping GA.
//!
//! [`Individual`] is the seam between the generic selection strategies and
//! the concrete [`Chromosome`](super::Chromosome): selection only needs an
//! identity and a comparable fitness.

use super::ids::ChromosomeId;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Higher fitness is considered better (maximization).
///
/// Built-in implementations exist for `f64` and `f32`.
pub trait Fitness: PartialOrd + Copy + std::fmt::Debug + 'static {
    /// Returns a value below every reachable fitness.
    ///
    /// Used as the comparison baseline when searching for the best
    /// individual, so no sign assumption is made about real fitness values.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn worst() -> Self {
        f32::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution that selection strategies can rank.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct Candidate {
///     id: ChromosomeId,
///     fitness: f64,
/// }
///
/// impl Individual for Candidate {
///     type Fitness = f64;
///     fn id(&self) -> ChromosomeId { self.id }
///     fn fitness(&self) -> f64 { self.fitness }
/// }
/// ```
pub trait Individual: Clone {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Identity used for "distinct parents" checks.
    fn id(&self) -> ChromosomeId;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_is_below_everything() {
        assert!(<f64 as Fitness>::worst() < -1e300);
        assert!(<f64 as Fitness>::worst() < 0.0);
        assert!(<f32 as Fitness>::worst() < f32::MIN);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(2.5f32.to_f64(), 2.5);
        assert_eq!(Fitness::to_f64(-1.0f64), -1.0);
    }
}
