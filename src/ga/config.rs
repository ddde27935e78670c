//! Grouping GA configuration.
//!
//! [`GroupingConfig`] holds all parameters that control the evolutionary loop.

use super::operators::Crossover;
use super::selection::Selection;
use crate::error::{GroupingError, Result};

/// Configuration for the grouping GA.
///
/// Controls population size, run length, elitism, operator choice,
/// mutation rate, and the size of the groups being formed.
///
/// # Defaults
///
/// ```
/// use u_grouping::ga::GroupingConfig;
///
/// let config = GroupingConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generation_count, 100);
/// assert_eq!(config.group_size, 4);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_grouping::ga::{Crossover, GroupingConfig, Selection};
///
/// let config = GroupingConfig::default()
///     .with_population_size(40)
///     .with_crossover(Crossover::TwoPoint)
///     .with_selection(Selection::Random)
///     .with_mutation_rate(5)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupingConfig {
    /// Number of chromosomes in the population.
    ///
    /// Must be even: every generation pairs up the whole population.
    pub population_size: usize,

    /// Number of generations to run.
    pub generation_count: usize,

    /// Whether the best chromosome is carried into the next generation.
    pub use_elitism: bool,

    /// Crossover operator.
    pub crossover: Crossover,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Chance, in percent (0–100), that each crossover survivor is mutated.
    pub mutation_rate: u32,

    /// Persons per group. Must divide the number of persons.
    pub group_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generation_count: 100,
            use_elitism: true,
            crossover: Crossover::default(),
            selection: Selection::default(),
            mutation_rate: 3,
            group_size: 4,
            seed: None,
        }
    }
}

impl GroupingConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, enabled: bool) -> Self {
        self.use_elitism = enabled;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the mutation rate in percent, clamped to 100.
    pub fn with_mutation_rate(mut self, percent: u32) -> Self {
        self.mutation_rate = percent.min(100);
        self
    }

    /// Sets the group size.
    pub fn with_group_size(mut self, n: usize) -> Self {
        self.group_size = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the input-independent parameters.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.population_size % 2 != 0 {
            return Err(invalid(
                "population_size must be even so every chromosome can be paired",
            ));
        }
        if self.generation_count == 0 {
            return Err(invalid("generation_count must be at least 1"));
        }
        if self.mutation_rate > 100 {
            return Err(invalid("mutation_rate must be a percentage in 0..=100"));
        }
        if self.group_size == 0 {
            return Err(invalid("group_size must be at least 1"));
        }
        Ok(())
    }

    /// Validates the configuration against the number of persons to group.
    pub fn validate_for(&self, person_count: usize) -> Result<()> {
        self.validate()?;
        if person_count == 0 {
            return Err(invalid("there are no persons to group"));
        }
        if person_count % self.group_size != 0 {
            return Err(GroupingError::InvalidConfiguration(format!(
                "group_size {} does not divide person count {}",
                self.group_size, person_count
            )));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> GroupingError {
    GroupingError::InvalidConfiguration(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GroupingConfig::default();
        assert_eq!(config.population_size, 20);
        assert_eq!(config.generation_count, 100);
        assert!(config.use_elitism);
        assert_eq!(config.crossover, Crossover::Uniform);
        assert_eq!(config.selection, Selection::Rank);
        assert_eq!(config.mutation_rate, 3);
        assert_eq!(config.group_size, 4);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GroupingConfig::default()
            .with_population_size(50)
            .with_generation_count(10)
            .with_elitism(false)
            .with_crossover(Crossover::OnePoint)
            .with_selection(Selection::Random)
            .with_mutation_rate(10)
            .with_group_size(5)
            .with_seed(42);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.generation_count, 10);
        assert!(!config.use_elitism);
        assert_eq!(config.crossover, Crossover::OnePoint);
        assert_eq!(config.selection, Selection::Random);
        assert_eq!(config.mutation_rate, 10);
        assert_eq!(config.group_size, 5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_mutation_rate() {
        let config = GroupingConfig::default().with_mutation_rate(250);
        assert_eq!(config.mutation_rate, 100);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GroupingConfig::default().validate().is_ok());
        assert!(GroupingConfig::default().validate_for(20).is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GroupingConfig::default().with_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_odd_population() {
        for elitism in [true, false] {
            let config = GroupingConfig::default()
                .with_population_size(7)
                .with_elitism(elitism);
            assert!(matches!(
                config.validate(),
                Err(GroupingError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GroupingConfig::default().with_generation_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_mutation_rate_set_directly() {
        let config = GroupingConfig {
            mutation_rate: 101,
            ..GroupingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_group_size() {
        let config = GroupingConfig::default().with_group_size(0);
        assert!(config.validate().is_err());
        assert!(config.validate_for(8).is_err());
    }

    #[test]
    fn test_validate_group_size_must_divide() {
        let config = GroupingConfig::default().with_group_size(3);
        let err = config.validate_for(20).unwrap_err();
        assert_eq!(
            err,
            GroupingError::InvalidConfiguration(
                "group_size 3 does not divide person count 20".into()
            )
        );
        assert!(config.validate_for(21).is_ok());
    }

    #[test]
    fn test_validate_no_persons() {
        assert!(GroupingConfig::default().validate_for(0).is_err());
    }
}
