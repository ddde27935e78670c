//! Genetic Algorithm for interest-based group formation.
//!
//! A chromosome is a partition of all persons into equal-sized groups;
//! its fitness is the mean interest similarity of its groups. A
//! population of chromosomes is bred generation by generation through
//! pairwise selection, crossover with repair, swap mutation, and
//! elitist replacement.
//!
//! # Key Types
//!
//! - [`GroupingConfig`]: Algorithm parameters (population size, operators, group size)
//! - [`GroupingRunner`]: Executes the evolutionary loop
//! - [`GroupingResult`]: Final result with fitness history
//! - [`Population`]: Selection and generational replacement
//! - [`Chromosome`] / [`Group`]: Partition encoding and scoring
//!
//! # Submodules
//!
//! - [`operators`]: Gene-split crossover operators and the repair step
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Falkenauer (1998), *Genetic Algorithms and Grouping Problems*

mod chromosome;
mod config;
mod group;
mod ids;
pub mod operators;
mod population;
mod runner;
mod selection;
mod summary;
mod types;

pub use chromosome::{calculate_fitness, Chromosome, Origin};
pub use config::GroupingConfig;
pub use group::{similarity_of, Group};
pub use ids::{ChromosomeId, IdAllocator};
pub use operators::Crossover;
pub use population::Population;
pub use runner::{GenerationReport, GroupingResult, GroupingRunner};
pub use selection::{rank_weights, Selection};
pub use summary::{ChromosomeSummary, GroupSummary};
pub use types::{Fitness, Individual};
