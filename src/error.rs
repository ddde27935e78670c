//! Error type shared by the grouping engine.
//!
//! The engine has no I/O surface: every error is either a configuration
//! problem caught before the first generation, or a structural fault in
//! the evolutionary bookkeeping that must be surfaced instead of looping
//! or dividing by zero.

/// Errors produced while configuring or running the grouping GA.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GroupingError {
    /// A configuration value is out of range or inconsistent with the input.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An empty group, chromosome, or population reached a computation
    /// that needs at least one element.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A selection strategy could not find two distinct unused chromosomes.
    #[error("selection exhausted: {available} unused chromosome(s), need 2 distinct")]
    SelectionExhaustion {
        /// Number of unused chromosomes left when selection gave up.
        available: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GroupingError>;
