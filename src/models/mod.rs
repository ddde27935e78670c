//! Grouping domain models.
//!
//! Plain, immutable input records. The GA never mutates these: chromosomes
//! refer to persons by their position in a shared, frozen person slice.
//!
//! # Domain Mappings
//!
//! | u-grouping | Education | Events | Workplace |
//! |------------|-----------|--------|-----------|
//! | Person | Student | Attendee | Employee |
//! | Interest | Topic | Session Track | Skill |
//! | Group | Study Group | Table | Team |

mod interest;
mod person;
mod source;
mod synthetic;

pub use interest::Interest;
pub use person::Person;
pub use source::PersonSource;
pub use synthetic::SyntheticPeople;
