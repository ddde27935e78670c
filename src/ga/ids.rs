//! Chromosome identity.

/// Identifier of a chromosome, unique within one run.
///
/// Ids are only compared for equality ("are these two parents the same
/// chromosome?"); they carry no ordering meaning for the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChromosomeId(pub u64);

impl std::fmt::Display for ChromosomeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues strictly increasing [`ChromosomeId`]s, starting at 1.
///
/// Owned by whoever assembles chromosomes (the runner, or a test) and
/// passed down by `&mut`.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    /// Creates an allocator whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next id.
    pub fn next_id(&mut self) -> ChromosomeId {
        let id = ChromosomeId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}
