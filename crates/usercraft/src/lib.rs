//! # Usercraft: containers, iteration and sorting by example
//!
//! A small user directory worked through the everyday collection idioms:
//! traversing a map, searching for a minimum or maximum, copying a
//! filtered subset, updating every element in place, and sorting under
//! different orderings.
//!
//! ## Learning Path
//!
//! 1. [`user`] - A value type with accessors, a text rendering and explicit
//!    orderings
//! 2. [`render`] - One printing routine for every iterable collection
//! 3. [`query`] - Extremum search, filtered copies, bulk updates, sorts
//! 4. [`roster`] - A custom container with its own iterators
//! 5. [`workshop`] - All of the above, step by step, on one data set
//!
//! ## Quick Start
//!
//! ```bash
//! # Run all tests
//! cargo test -p usercraft
//!
//! # Run the walkthrough
//! cargo run -p usercraft-cli -- run
//! ```

pub mod error;
pub mod query;
pub mod render;
pub mod roster;
pub mod user;
pub mod workshop;

pub use error::{Result, UsercraftError};
pub use query::{ADULT_AGE, AgeMap, Person};
pub use roster::Roster;
pub use user::{FollowersFormula, SortOrder, User, followers_for_age};
pub use workshop::{Enrollment, Workshop, WorkshopReport, WorkshopSettings};
