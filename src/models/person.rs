//! Person model.

use std::collections::BTreeSet;

use super::Interest;

/// A person to be placed into exactly one group.
///
/// Persons are immutable once handed to the engine. Any per-run bookkeeping
/// (such as "already assigned to a group") lives in scratch structures owned
/// by the algorithm, never on the person itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Unique person identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Interests held by this person.
    pub interests: Vec<Interest>,
}

impl Person {
    /// Creates a person with no interests.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            interests: Vec::new(),
        }
    }

    /// Adds one interest.
    pub fn with_interest(mut self, interest: Interest) -> Self {
        self.interests.push(interest);
        self
    }

    /// Replaces the interest list.
    pub fn with_interests(mut self, interests: Vec<Interest>) -> Self {
        self.interests = interests;
        self
    }

    /// Distinct interest ids held by this person.
    ///
    /// An interest listed more than once counts once.
    pub fn interest_ids(&self) -> BTreeSet<u32> {
        self.interests.iter().map(|i| i.id).collect()
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Person({}): {}, Interests: ", self.id, self.name)?;
        for (i, interest) in self.interests.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{interest}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_builder() {
        let p = Person::new(1, "P-1")
            .with_interest(Interest::new(1, "I-1"))
            .with_interest(Interest::new(2, "I-2"));
        assert_eq!(p.id, 1);
        assert_eq!(p.name, "P-1");
        assert_eq!(p.interests.len(), 2);
    }

    #[test]
    fn test_interest_ids_deduplicates() {
        let p = Person::new(1, "P-1").with_interests(vec![
            Interest::new(4, "I-4"),
            Interest::new(2, "I-2"),
            Interest::new(4, "I-4"),
        ]);
        let ids: Vec<u32> = p.interest_ids().into_iter().collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_display() {
        let p = Person::new(7, "Ada")
            .with_interests(vec![Interest::new(1, "Math"), Interest::new(2, "Poetry")]);
        assert_eq!(p.to_string(), "Person(7): Ada, Interests: Math, Poetry");
    }
}
