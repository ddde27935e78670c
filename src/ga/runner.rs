//! Grouping GA run loop.
//!
//! [`GroupingRunner`] orchestrates the complete evolutionary process:
//! validation → initial population → breed generation → report → repeat.

use std::sync::Arc;

use rand::Rng;

use super::config::GroupingConfig;
use super::ids::IdAllocator;
use super::population::Population;
use super::summary::ChromosomeSummary;
use crate::error::{GroupingError, Result};
use crate::models::{Person, PersonSource};
use crate::random::create_rng;

/// Per-generation report passed to the observer.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// 1-based generation number.
    pub generation: usize,
    /// Best chromosome of this generation.
    pub best: ChromosomeSummary,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Mean fitness over the population.
    pub mean_fitness: f64,
}

/// Result of a grouping run.
#[derive(Debug, Clone)]
pub struct GroupingResult {
    /// Best chromosome of the final generation.
    pub best: ChromosomeSummary,

    /// Best fitness value (same as `best.fitness`).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness of the initial population followed by the best
    /// fitness at the end of each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the grouping GA.
///
/// # Usage
///
/// ```
/// use u_grouping::ga::{GroupingConfig, GroupingRunner};
/// use u_grouping::models::SyntheticPeople;
///
/// let config = GroupingConfig::default()
///     .with_generation_count(10)
///     .with_seed(42);
/// let result = GroupingRunner::run(&SyntheticPeople::default(), &config).unwrap();
/// assert_eq!(result.best.groups.len(), 5);
/// ```
pub struct GroupingRunner;

impl GroupingRunner {
    /// Runs the grouping GA.
    ///
    /// # Errors
    /// [`GroupingError::InvalidConfiguration`] if the configuration does
    /// not fit the persons supplied by `source`; any structural error from
    /// the generation loop.
    pub fn run<S: PersonSource + ?Sized>(source: &S, config: &GroupingConfig) -> Result<GroupingResult> {
        Self::run_with_observer(source, config, |_| {})
    }

    /// Runs the grouping GA, calling `observer` after every generation.
    pub fn run_with_observer<S, F>(
        source: &S,
        config: &GroupingConfig,
        observer: F,
    ) -> Result<GroupingResult>
    where
        S: PersonSource + ?Sized,
        F: FnMut(&GenerationReport),
    {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(source, config, &mut rng, observer)
    }

    /// Runs the grouping GA with a caller-supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<S, R, F>(
        source: &S,
        config: &GroupingConfig,
        rng: &mut R,
        mut observer: F,
    ) -> Result<GroupingResult>
    where
        S: PersonSource + ?Sized,
        R: Rng,
        F: FnMut(&GenerationReport),
    {
        let persons: Arc<[Person]> = source.persons().into();
        config.validate_for(persons.len())?;

        tracing::info!(
            persons = persons.len(),
            population_size = config.population_size,
            generations = config.generation_count,
            group_size = config.group_size,
            crossover = ?config.crossover,
            selection = ?config.selection,
            elitism = config.use_elitism,
            "grouping run started"
        );

        let mut ids = IdAllocator::new();
        let mut population = Population::generate_initial_population(
            config.population_size,
            config.group_size,
            persons,
            &mut ids,
            rng,
        )?;

        let mut fitness_history = Vec::with_capacity(config.generation_count + 1);
        fitness_history.push(best_fitness(&population)?);

        for gen in 0..config.generation_count {
            population = population.make_generation(config, &mut ids, rng)?;

            let report = generation_report(&population, gen + 1)?;
            tracing::debug!(
                generation = report.generation,
                best = %report.best.id,
                best_fitness = report.best_fitness,
                mean_fitness = report.mean_fitness,
                "generation complete"
            );
            fitness_history.push(report.best_fitness);
            observer(&report);
        }

        let best = population
            .find_best_chromosome()
            .ok_or_else(empty_population)?
            .summary();

        tracing::info!(
            best = %best.id,
            best_fitness = best.fitness,
            chromosomes_created = ids.issued(),
            "grouping run finished"
        );

        Ok(GroupingResult {
            best_fitness: best.fitness,
            best,
            generations: config.generation_count,
            fitness_history,
        })
    }
}

fn generation_report(population: &Population, generation: usize) -> Result<GenerationReport> {
    let best = population
        .find_best_chromosome()
        .ok_or_else(empty_population)?;
    Ok(GenerationReport {
        generation,
        best: best.summary(),
        best_fitness: best.fitness(),
        mean_fitness: population.mean_fitness().ok_or_else(empty_population)?,
    })
}

fn best_fitness(population: &Population) -> Result<f64> {
    population
        .find_best_chromosome()
        .map(|c| c.fitness())
        .ok_or_else(empty_population)
}

fn empty_population() -> GroupingError {
    GroupingError::DegenerateInput("population is empty".into())
}

// ============================================================================
// Tests
// ============================================================================
