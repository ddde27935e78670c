//! Synthetic demo data.
//!
//! Fabricates a pool of interests and a set of persons that each pick a
//! fixed number of distinct interests at random. Useful for benchmarks,
//! demos, and tests that need realistic-looking input without fixtures.

use rand::Rng;

use super::{Interest, Person, PersonSource};
use crate::random::create_rng;

/// Seeded generator of fabricated persons and interests.
///
/// # Defaults
///
/// ```
/// use u_grouping::models::{PersonSource, SyntheticPeople};
///
/// let people = SyntheticPeople::default().persons();
/// assert_eq!(people.len(), 20);
/// assert!(people.iter().all(|p| p.interests.len() == 5));
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticPeople {
    /// Size of the interest pool (`I-1 ..= I-n`).
    pub interest_count: usize,
    /// Number of persons to fabricate (`P-1 ..= P-n`).
    pub person_count: usize,
    /// Distinct interests drawn per person; capped at `interest_count`.
    pub interests_per_person: usize,
    /// Seed for the interest draws.
    pub seed: u64,
}

impl Default for SyntheticPeople {
    fn default() -> Self {
        Self {
            interest_count: 10,
            person_count: 20,
            interests_per_person: 5,
            seed: 42,
        }
    }
}

impl SyntheticPeople {
    /// Sets the interest pool size.
    pub fn with_interest_count(mut self, n: usize) -> Self {
        self.interest_count = n;
        self
    }

    /// Sets the number of persons.
    pub fn with_person_count(mut self, n: usize) -> Self {
        self.person_count = n;
        self
    }

    /// Sets the number of interests per person.
    pub fn with_interests_per_person(mut self, n: usize) -> Self {
        self.interests_per_person = n;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The interest pool, ids starting at 1.
    pub fn interests(&self) -> Vec<Interest> {
        (1..=self.interest_count as u32)
            .map(|i| Interest::new(i, format!("I-{i}")))
            .collect()
    }

    /// Fabricates persons using the supplied generator.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Person> {
        let pool = self.interests();
        let per_person = self.interests_per_person.min(pool.len());

        (1..=self.person_count as u32)
            .map(|i| {
                let mut remaining = pool.clone();
                let interests = (0..per_person)
                    .map(|_| remaining.remove(rng.random_range(0..remaining.len())))
                    .collect();
                Person::new(i, format!("P-{i}")).with_interests(interests)
            })
            .collect()
    }
}

impl PersonSource for SyntheticPeople {
    fn persons(&self) -> Vec<Person> {
        let mut rng = create_rng(self.seed);
        self.generate(&mut rng)
    }
}
