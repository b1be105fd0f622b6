//! # The `User` record
//!
//! A user is a name, an age, and a follower count derived from the age.
//! The follower count starts at zero and is filled in later by
//! [`crate::query::refresh_followers`].
//!
//! ## Ordering
//!
//! `User` deliberately does not implement `Ord`. Equality compares every
//! field, while popularity ordering compares only `followers_count`, so the
//! two cannot agree. Orderings are passed explicitly instead:
//!
//! ```
//! use usercraft::{SortOrder, User};
//!
//! let mut users = vec![User::new("Ann@", 15), User::new("Cloe", 18)];
//! users[0].set_followers_count(1150);
//! users[1].set_followers_count(1180);
//!
//! users.sort_unstable_by(|a, b| SortOrder::Descending.compare(a, b));
//! assert_eq!(users[0].name(), "Cloe");
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A person in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    name: String,
    age: u32,
    followers_count: u32,
}

impl User {
    /// Creates a user with no followers.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self::with_followers(name, age, 0)
    }

    /// Creates a user with an explicit follower count.
    pub fn with_followers(name: impl Into<String>, age: u32, followers_count: u32) -> Self {
        Self {
            name: name.into(),
            age,
            followers_count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn followers_count(&self) -> u32 {
        self.followers_count
    }

    pub fn set_followers_count(&mut self, followers_count: u32) {
        self.followers_count = followers_count;
    }
}

impl Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Name: {}, Age: {}, Followers: {}}}",
            self.name, self.age, self.followers_count
        )
    }
}

impl From<(&String, &u32)> for User {
    fn from((name, age): (&String, &u32)) -> Self {
        Self::new(name.clone(), *age)
    }
}

impl From<(String, u32)> for User {
    fn from((name, age): (String, u32)) -> Self {
        Self::new(name, age)
    }
}

impl From<(&str, u32)> for User {
    fn from((name, age): (&str, u32)) -> Self {
        Self::new(name, age)
    }
}

// ============================================================================
// Popularity
// ============================================================================

/// Linear formula deriving a follower count from an age:
/// `(base + age) * multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowersFormula {
    pub base: u32,
    pub multiplier: u32,
}

impl FollowersFormula {
    pub const fn new(base: u32, multiplier: u32) -> Self {
        Self { base, multiplier }
    }

    /// Returns `None` if the result does not fit in a `u32`.
    pub fn apply(&self, age: u32) -> Option<u32> {
        age.checked_add(self.base)?.checked_mul(self.multiplier)
    }
}

impl Default for FollowersFormula {
    fn default() -> Self {
        Self::new(100, 10)
    }
}

/// Follower count for `age` under the default formula `(100 + age) * 10`.
pub fn followers_for_age(age: u32) -> Option<u32> {
    FollowersFormula::default().apply(age)
}

/// Direction of a popularity ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Fewest followers first.
    #[default]
    Ascending,
    /// Most followers first.
    Descending,
}

impl SortOrder {
    pub fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            SortOrder::Ascending => by_followers(a, b),
            SortOrder::Descending => by_followers_desc(a, b),
        }
    }
}

/// Orders users by follower count, fewest first.
pub fn by_followers(a: &User, b: &User) -> Ordering {
    a.followers_count.cmp(&b.followers_count)
}

/// Orders users by follower count, most first.
pub fn by_followers_desc(a: &User, b: &User) -> Ordering {
    b.followers_count.cmp(&a.followers_count)
}
