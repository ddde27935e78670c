//! Interest model.

/// Something a person cares about (a topic, hobby, skill, ...).
///
/// Interests are compared by `id` when computing group similarity;
/// `name` is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interest {
    /// Unique interest identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
}

impl Interest {
    /// Creates a new interest.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
