//! Population and generational replacement.
//!
//! One generation pairs up every chromosome of the current population
//! exactly once:
//!
//! 1. With elitism, a copy of the current best is inserted first.
//! 2. Two distinct unused chromosomes are selected, marked used, and
//!    crossed; each of the two survivors may be mutated.
//! 3. Survivors are appended until every chromosome has been used.
//! 4. The elite slot makes the new population one larger than the old
//!    one; one chromosome is then eliminated (a duplicate of the elite if
//!    crossover carried it through, otherwise the least fit).

use std::sync::Arc;

use rand::Rng;

use super::chromosome::{Chromosome, Origin};
use super::config::GroupingConfig;
use super::ids::{ChromosomeId, IdAllocator};
use super::summary::ChromosomeSummary;
use super::types::Fitness;
use crate::error::{GroupingError, Result};
use crate::models::Person;

/// An ordered collection of chromosomes over one person universe.
#[derive(Debug, Clone)]
pub struct Population {
    target_size: usize,
    group_size: usize,
    chromosomes: Vec<Chromosome>,
}

impl Population {
    /// Creates an empty population.
    pub fn new(target_size: usize, group_size: usize) -> Self {
        Self {
            target_size,
            group_size,
            chromosomes: Vec::with_capacity(target_size + 1),
        }
    }

    /// Builds `target_size` random chromosomes over `persons`.
    pub fn generate_initial_population<R: Rng>(
        target_size: usize,
        group_size: usize,
        persons: Arc<[Person]>,
        ids: &mut IdAllocator,
        rng: &mut R,
    ) -> Result<Self> {
        let mut population = Self::new(target_size, group_size);
        for _ in 0..target_size {
            let chromosome =
                Chromosome::random(ids.next_id(), group_size, Arc::clone(&persons), rng)?;
            population.push(chromosome, Origin::Initial);
        }
        Ok(population)
    }

    /// Number of chromosomes the population is meant to hold.
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Persons per group.
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Chromosomes in insertion order.
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Number of chromosomes currently held.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Whether the population holds no chromosomes.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Appends a chromosome, tagging it with its provenance.
    pub fn push(&mut self, mut chromosome: Chromosome, origin: Origin) {
        chromosome.set_origin(origin);
        self.chromosomes.push(chromosome);
    }

    /// The chromosome with the highest fitness; the first one wins ties.
    ///
    /// The comparison baseline is [`Fitness::worst`], so any finite fitness,
    /// including zero or negative values, can win.
    pub fn find_best_chromosome(&self) -> Option<&Chromosome> {
        let mut best: Option<&Chromosome> = None;
        let mut best_fitness = <f64 as Fitness>::worst();
        for ch in &self.chromosomes {
            if ch.fitness() > best_fitness {
                best_fitness = ch.fitness();
                best = Some(ch);
            }
        }
        best
    }

    /// Mean fitness over all chromosomes.
    pub fn mean_fitness(&self) -> Option<f64> {
        if self.chromosomes.is_empty() {
            return None;
        }
        let total: f64 = self.chromosomes.iter().map(Chromosome::fitness).sum();
        Some(total / self.chromosomes.len() as f64)
    }

    /// Snapshots of every chromosome, in order.
    pub fn summaries(&self) -> Vec<ChromosomeSummary> {
        self.chromosomes.iter().map(Chromosome::summary).collect()
    }

    /// Produces the next generation.
    ///
    /// Uses `config.use_elitism`, `config.crossover`, `config.selection`
    /// and `config.mutation_rate`. Survivors that are carried-over parents
    /// keep their id unless they get mutated, in which case they become a
    /// new individual with a fresh id. Survivors sharing the elite's id are
    /// tagged [`Origin::Elite`], all others [`Origin::Offspring`].
    ///
    /// # Errors
    /// - [`GroupingError::DegenerateInput`] if the population is empty.
    /// - [`GroupingError::SelectionExhaustion`] if the chromosomes cannot
    ///   be paired up (odd population size).
    pub fn make_generation<R: Rng>(
        &self,
        config: &GroupingConfig,
        ids: &mut IdAllocator,
        rng: &mut R,
    ) -> Result<Population> {
        if self.chromosomes.is_empty() {
            return Err(GroupingError::DegenerateInput(
                "cannot breed an empty population".into(),
            ));
        }

        let mut next = Population::new(self.chromosomes.len(), self.group_size);
        let mut elite_id: Option<ChromosomeId> = None;
        if config.use_elitism {
            if let Some(best) = self.find_best_chromosome() {
                elite_id = Some(best.id());
                next.push(best.clone(), Origin::Elite);
            }
        }

        let mut used = vec![false; self.chromosomes.len()];
        loop {
            let unused: Vec<usize> = (0..used.len()).filter(|&i| !used[i]).collect();
            if unused.is_empty() {
                break;
            }

            let candidates: Vec<&Chromosome> =
                unused.iter().map(|&i| &self.chromosomes[i]).collect();
            let (a, b) = config.selection.select_pair(&candidates, rng)?;
            let (i, j) = (unused[a], unused[b]);
            used[i] = true;
            used[j] = true;

            let parent1 = &self.chromosomes[i];
            let parent2 = &self.chromosomes[j];
            let survivors = parent1.crossover(parent2, config.crossover, ids, rng)?;

            for mut survivor in survivors {
                if rng.random_range(0..100) < config.mutation_rate {
                    survivor.mutate(rng)?;
                    if survivor.id() == parent1.id() || survivor.id() == parent2.id() {
                        survivor.set_id(ids.next_id());
                    }
                }
                let origin = if Some(survivor.id()) == elite_id {
                    Origin::Elite
                } else {
                    Origin::Offspring
                };
                next.push(survivor, origin);
            }
        }

        if next.len() > self.chromosomes.len() {
            next.eliminate_worst_chromosome();
        }
        Ok(next)
    }

    /// Removes one chromosome to absorb the elite's extra slot.
    ///
    /// Prefers an [`Origin::Elite`] chromosome past the first slot (the
    /// elite carried through crossover a second time); otherwise removes
    /// the chromosome with the strictly lowest fitness, first occurrence
    /// on ties.
    pub fn eliminate_worst_chromosome(&mut self) -> Option<Chromosome> {
        if let Some(dup) = self
            .chromosomes
            .iter()
            .skip(1)
            .position(|ch| ch.origin() == Origin::Elite)
        {
            let removed = self.chromosomes.remove(dup + 1);
            tracing::trace!(id = %removed.id(), "removed duplicated elite");
            return Some(removed);
        }

        let mut worst: Option<usize> = None;
        for (idx, ch) in self.chromosomes.iter().enumerate() {
            if worst.map_or(true, |w| ch.fitness() < self.chromosomes[w].fitness()) {
                worst = Some(idx);
            }
        }
        let removed = self.chromosomes.remove(worst?);
        tracing::trace!(id = %removed.id(), fitness = removed.fitness(), "removed worst chromosome");
        Some(removed)
    }
}

// ============================================================================
// Tests
// ============================================================================
