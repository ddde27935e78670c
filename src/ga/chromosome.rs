//! Chromosome: a full partition of the person universe into groups.
//!
//! # Encoding
//!
//! The person universe is a frozen `Arc<[Person]>` shared by every
//! chromosome of a run. A gene is a position into that slice; a
//! chromosome is an ordered list of [`Group`]s of exactly `group_size`
//! genes each. Flattening the groups in order gives the gene sequence the
//! crossover operators work on.
//!
//! If the number of persons is not a multiple of `group_size`, the
//! trailing persons never fill a group and are left out of the partition.
//! The runner rejects such inputs up front.

use std::sync::Arc;

use rand::Rng;

use super::group::Group;
use super::ids::{ChromosomeId, IdAllocator};
use super::operators::Crossover;
use super::summary::{ChromosomeSummary, GroupSummary};
use super::types::Individual;
use crate::error::{GroupingError, Result};
use crate::models::Person;

/// Where a chromosome in a population came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    /// Built from a fresh partition (initial population).
    Initial,
    /// Carried over unchanged as the best chromosome of the previous generation.
    Elite,
    /// Survivor of a crossover (a new offspring or a surviving parent).
    Offspring,
}

/// A candidate partition of all persons into equal-sized groups.
///
/// Higher fitness = better partition (maximization convention).
#[derive(Clone)]
pub struct Chromosome {
    id: ChromosomeId,
    origin: Origin,
    group_size: usize,
    groups: Vec<Group>,
    chromosome_size: usize,
    fitness: f64,
    persons: Arc<[Person]>,
}

impl std::fmt::Debug for Chromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chromosome")
            .field("id", &self.id)
            .field("origin", &self.origin)
            .field("group_size", &self.group_size)
            .field("chromosome_size", &self.chromosome_size)
            .field("fitness", &self.fitness)
            .field("groups", &self.groups)
            .finish()
    }
}

impl Individual for Chromosome {
    type Fitness = f64;

    fn id(&self) -> ChromosomeId {
        self.id
    }

    fn fitness(&self) -> f64 {
        self.fitness
    }
}

impl Chromosome {
    /// Builds a chromosome from a uniformly random partition.
    ///
    /// Persons are drawn by rejection sampling: a uniform index is drawn
    /// until it hits a person not placed yet. The "placed" marks live in a
    /// scratch vector local to this call.
    ///
    /// # Errors
    /// See [`Chromosome::from_genes`].
    pub fn random<R: Rng>(
        id: ChromosomeId,
        group_size: usize,
        persons: Arc<[Person]>,
        rng: &mut R,
    ) -> Result<Self> {
        let n = persons.len();
        let mut assigned = vec![false; n];
        let mut genes = Vec::with_capacity(n);

        for _ in 0..n {
            let pick = loop {
                let candidate = rng.random_range(0..n);
                if !assigned[candidate] {
                    break candidate;
                }
            };
            assigned[pick] = true;
            genes.push(pick);
        }

        Self::from_genes(id, group_size, persons, &genes)
    }

    /// Builds a chromosome by cutting `genes` into consecutive groups.
    ///
    /// Every `group_size` genes seal one group; a trailing remainder
    /// shorter than `group_size` is dropped.
    ///
    /// # Errors
    /// - [`GroupingError::InvalidConfiguration`] if `group_size` is zero.
    /// - [`GroupingError::DegenerateInput`] if no complete group can be
    ///   formed.
    ///
    /// # Panics
    /// Panics if a gene is not a valid position into `persons`.
    pub fn from_genes(
        id: ChromosomeId,
        group_size: usize,
        persons: Arc<[Person]>,
        genes: &[usize],
    ) -> Result<Self> {
        if group_size == 0 {
            return Err(GroupingError::InvalidConfiguration(
                "group_size must be at least 1".into(),
            ));
        }

        let groups = genes
            .chunks_exact(group_size)
            .enumerate()
            .map(|(i, chunk)| Group::new(i + 1, chunk.to_vec(), &persons))
            .collect::<Result<Vec<_>>>()?;
        let fitness = calculate_fitness(&groups)?;

        Ok(Self {
            id,
            origin: Origin::Initial,
            group_size,
            chromosome_size: group_size * groups.len(),
            groups,
            fitness,
            persons,
        })
    }

    /// Chromosome id.
    pub fn id(&self) -> ChromosomeId {
        self.id
    }

    /// Provenance tag.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Persons per group.
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Groups in chromosome order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of genes: `group_size × groups().len()`.
    pub fn chromosome_size(&self) -> usize {
        self.chromosome_size
    }

    /// Mean group similarity.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// The shared person universe.
    pub fn persons(&self) -> &Arc<[Person]> {
        &self.persons
    }

    /// Flattened gene sequence, in group order.
    pub fn genes(&self) -> Vec<usize> {
        self.groups
            .iter()
            .flat_map(|g| g.members().iter().copied())
            .collect()
    }

    /// Snapshot with person ids instead of positions.
    pub fn summary(&self) -> ChromosomeSummary {
        ChromosomeSummary {
            id: self.id,
            fitness: self.fitness,
            groups: self
                .groups
                .iter()
                .map(|g| GroupSummary {
                    id: g.id(),
                    similarity: g.similarity(),
                    person_ids: g.members().iter().map(|&m| self.persons[m].id).collect(),
                })
                .collect(),
        }
    }

    pub(crate) fn set_origin(&mut self, origin: Origin) {
        self.origin = origin;
    }

    pub(crate) fn set_id(&mut self, id: ChromosomeId) {
        self.id = id;
    }

    /// Crosses `self` with `other` and keeps the two fittest of the family.
    ///
    /// Splits `self`'s genes with `operator`, repairs both lists against
    /// `other`'s genes, and builds two offspring with fresh ids from `ids`.
    /// The four chromosomes `[self, other, offspring1, offspring2]` are then
    /// stable-sorted by descending fitness and owned copies of the first two
    /// are returned. A surviving parent keeps its id.
    ///
    /// Both parents must partition the same person universe.
    pub fn crossover<R: Rng>(
        &self,
        other: &Chromosome,
        operator: Crossover,
        ids: &mut IdAllocator,
        rng: &mut R,
    ) -> Result<[Chromosome; 2]> {
        debug_assert_eq!(self.chromosome_size, other.chromosome_size);
        debug_assert!(Arc::ptr_eq(&self.persons, &other.persons));

        let (list_a, list_b) = operator.recombine(&self.genes(), &other.genes(), rng);

        let mut offspring1 =
            Self::from_genes(ids.next_id(), self.group_size, Arc::clone(&self.persons), &list_a)?;
        let mut offspring2 =
            Self::from_genes(ids.next_id(), self.group_size, Arc::clone(&self.persons), &list_b)?;
        offspring1.origin = Origin::Offspring;
        offspring2.origin = Origin::Offspring;

        let mut family: [&Chromosome; 4] = [self, other, &offspring1, &offspring2];
        family.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok([family[0].clone(), family[1].clone()])
    }

    /// Swaps two randomly chosen persons.
    ///
    /// Two gene positions are drawn independently in
    /// `[0, chromosome_size)`. Equal positions leave the chromosome
    /// untouched. Otherwise the persons are exchanged, the affected groups'
    /// similarity is recomputed, then the fitness.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        if self.chromosome_size == 0 {
            return Ok(());
        }
        let i = rng.random_range(0..self.chromosome_size);
        let j = rng.random_range(0..self.chromosome_size);
        if i == j {
            return Ok(());
        }

        let (g1, p1) = self.locate(i);
        let (g2, p2) = self.locate(j);
        let a = self.groups[g1].members()[p1];
        let b = self.groups[g2].members()[p2];
        *self.groups[g1].member_mut(p1) = b;
        *self.groups[g2].member_mut(p2) = a;

        self.groups[g1].refresh(&self.persons)?;
        if g2 != g1 {
            self.groups[g2].refresh(&self.persons)?;
        }
        self.fitness = calculate_fitness(&self.groups)?;
        Ok(())
    }

    /// Maps a flattened gene position to (group index, position in group).
    fn locate(&self, gene: usize) -> (usize, usize) {
        (gene / self.group_size, gene % self.group_size)
    }
}

/// Mean similarity of `groups`.
///
/// # Errors
/// [`GroupingError::DegenerateInput`] if `groups` is empty.
pub fn calculate_fitness(groups: &[Group]) -> Result<f64> {
    if groups.is_empty() {
        return Err(GroupingError::DegenerateInput(
            "cannot compute fitness of a chromosome with no groups".into(),
        ));
    }
    let total: f64 = groups.iter().map(Group::similarity).sum();
    Ok(total / groups.len() as f64)
}

// ============================================================================
// Tests
// ============================================================================
