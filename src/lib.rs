//! Interest-based group formation with a genetic algorithm.
//!
//! Partitions a fixed set of persons, each holding a set of interests,
//! into equal-sized groups whose members share as many interests as
//! possible.
//!
//! - **`models`**: Input records: `Person`, `Interest`, the
//!   `PersonSource` contract, and a seeded synthetic data generator.
//! - **`ga`**: The evolutionary engine: chromosome encoding, crossover
//!   and repair, mutation, selection, generational replacement, and the
//!   run loop.
//!
//! # Quick Start
//!
//! ```
//! use u_grouping::ga::{Crossover, GroupingConfig, GroupingRunner, Selection};
//! use u_grouping::models::SyntheticPeople;
//!
//! let people = SyntheticPeople::default(); // 20 persons, 10 interests
//! let config = GroupingConfig::default()
//!     .with_group_size(4)
//!     .with_crossover(Crossover::Uniform)
//!     .with_selection(Selection::Rank)
//!     .with_generation_count(25)
//!     .with_seed(42);
//!
//! let result = GroupingRunner::run(&people, &config).unwrap();
//! println!("{}", result.best);
//! ```
//!
//! # Architecture
//!
//! Single-threaded and synchronous. All randomness flows through an
//! injected `rand::Rng`, so a fixed seed reproduces a run exactly.

pub mod error;
pub mod ga;
pub mod models;
pub mod random;

pub use error::{GroupingError, Result};
