//! Groups (genes) and their similarity score.
//!
//! # Similarity
//!
//! For every distinct interest held by at least one member, the share of
//! members holding it is taken as a percentage. The group's similarity is
//! the mean of those percentages over all distinct interests present:
//!
//! ```text
//! similarity = Σ_i (holders(i) / members × 100) / |distinct interests|
//! ```
//!
//! A group whose members hold identical interest sets scores 100; a group
//! whose members share nothing scores `100 / members`.

use std::collections::BTreeMap;

use crate::error::{GroupingError, Result};
use crate::models::Person;

/// A group of persons inside one chromosome.
///
/// Members are positions into the person slice the owning chromosome was
/// built from. `similarity` is always consistent with `members`: it is
/// computed on construction and after every membership change.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    id: usize,
    members: Vec<usize>,
    similarity: f64,
}

impl Group {
    /// Builds a group and computes its similarity.
    ///
    /// # Errors
    /// [`GroupingError::DegenerateInput`] if `members` is empty.
    pub fn new(id: usize, members: Vec<usize>, persons: &[Person]) -> Result<Self> {
        let similarity = similarity_of(&members, persons)?;
        Ok(Self {
            id,
            members,
            similarity,
        })
    }

    /// Group id, 1-based within its chromosome.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Member positions in group order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Similarity score in `[0, 100]`.
    pub fn similarity(&self) -> f64 {
        self.similarity
    }

    /// Mutable access to one member slot. Callers must [`refresh`](Self::refresh)
    /// afterwards.
    pub(crate) fn member_mut(&mut self, position: usize) -> &mut usize {
        &mut self.members[position]
    }

    /// Recomputes similarity after a membership change.
    pub(crate) fn refresh(&mut self, persons: &[Person]) -> Result<()> {
        self.similarity = similarity_of(&self.members, persons)?;
        Ok(())
    }
}

/// Computes the similarity of a set of members.
///
/// Members that hold no interests still count toward the member total.
/// When no member holds any interest the similarity is `0.0`.
///
/// # Errors
/// [`GroupingError::DegenerateInput`] if `members` is empty.
pub fn similarity_of(members: &[usize], persons: &[Person]) -> Result<f64> {
    if members.is_empty() {
        return Err(GroupingError::DegenerateInput(
            "cannot compute similarity of an empty group".into(),
        ));
    }

    let mut holders: BTreeMap<u32, usize> = BTreeMap::new();
    for &m in members {
        for interest_id in persons[m].interest_ids() {
            *holders.entry(interest_id).or_insert(0) += 1;
        }
    }

    if holders.is_empty() {
        return Ok(0.0);
    }

    let member_count = members.len() as f64;
    let total: f64 = holders
        .values()
        .map(|&count| count as f64 / member_count * 100.0)
        .sum();

    Ok(total / holders.len() as f64)
}
