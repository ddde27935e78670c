//! Rendering-free snapshots of chromosomes.

use super::ids::ChromosomeId;

/// Snapshot of one group inside a [`ChromosomeSummary`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSummary {
    /// Group id, 1-based within its chromosome.
    pub id: usize,
    /// Group similarity in `[0, 100]`.
    pub similarity: f64,
    /// Member person ids, in group order.
    pub person_ids: Vec<u32>,
}

/// Snapshot of a chromosome: identity, fitness, and its partition.
///
/// Returned by the runner after every generation and at completion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChromosomeSummary {
    /// Chromosome id.
    pub id: ChromosomeId,
    /// Mean group similarity.
    pub fitness: f64,
    /// Groups in chromosome order.
    pub groups: Vec<GroupSummary>,
}

impl ChromosomeSummary {
    /// All person ids across groups, in gene order.
    pub fn person_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.groups.iter().flat_map(|g| g.person_ids.iter().copied())
    }
}

impl std::fmt::Display for ChromosomeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Chromosome({}) fitness={:.4}", self.id, self.fitness)?;
        for group in &self.groups {
            write!(f, "  Group({}) similarity={:.4} people=", group.id, group.similarity)?;
            for (i, pid) in group.person_ids.iter().enumerate() {
                if i > 0 {
                    f.write_str("-")?;
                }
                write!(f, "{pid}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChromosomeSummary {
        ChromosomeSummary {
            id: ChromosomeId(3),
            fitness: 75.0,
            groups: vec![
                GroupSummary {
                    id: 1,
                    similarity: 100.0,
                    person_ids: vec![1, 4],
                },
                GroupSummary {
                    id: 2,
                    similarity: 50.0,
                    person_ids: vec![2, 3],
                },
            ],
        }
    }

    #[test]
    fn test_person_ids_in_gene_order() {
        let ids: Vec<u32> = sample().person_ids().collect();
        assert_eq!(ids, vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.starts_with("Chromosome(3) fitness=75.0000\n"));
        assert!(text.contains("Group(1) similarity=100.0000 people=1-4"));
        assert!(text.contains("Group(2) similarity=50.0000 people=2-3"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: ChromosomeSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
