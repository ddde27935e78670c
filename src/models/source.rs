//! Input contract for the persons to be grouped.

use super::Person;

/// Supplies the ordered collection of persons to partition.
///
/// The order is significant only for reproducibility: with a fixed seed,
/// the same ordered input yields the same run.
pub trait PersonSource {
    /// Returns the persons to group, in a stable order.
    fn persons(&self) -> Vec<Person>;
}

impl PersonSource for [Person] {
    fn persons(&self) -> Vec<Person> {
        self.to_vec()
    }
}

impl PersonSource for Vec<Person> {
    fn persons(&self) -> Vec<Person> {
        self.clone()
    }
}

impl<S: PersonSource + ?Sized> PersonSource for &S {
    fn persons(&self) -> Vec<Person> {
        (**self).persons()
    }
}
