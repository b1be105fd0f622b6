//! # A custom user container
//!
//! [`Roster`] owns an ordered list of users and hands out its own iterator
//! types. Because it implements `IntoIterator` for `Roster`, `&Roster` and
//! `&mut Roster`, every generic routine written for `Vec<User>` (rendering,
//! extremum search, filtering, the followers update) accepts it unchanged.
//!
//! ```
//! use usercraft::{query, render, Roster, User};
//!
//! let roster: Roster = [User::new("Tom", 30), User::new("Ann@", 15)]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(query::youngest(&roster).unwrap().name(), "Ann@");
//! assert_eq!(
//!     render::elements_to_string(&roster),
//!     "{{Name: Tom, Age: 30, Followers: 0},{Name: Ann@, Age: 15, Followers: 0},}"
//! );
//! ```

use std::iter::FusedIterator;
use std::slice;
use std::vec;

use serde::{Deserialize, Serialize};

use crate::query;
use crate::user::{SortOrder, User};

/// An ordered, growable collection of users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user at the end.
    pub fn push(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&User> {
        self.users.get(index)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.users.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut {
            inner: self.users.iter_mut(),
        }
    }

    /// Reorders the roster by follower count. Not stable.
    pub fn sort_by_followers(&mut self, order: SortOrder) {
        query::sort_by_followers(&mut self.users, order);
    }

    /// Reorders the roster from the youngest to the oldest. Not stable.
    pub fn sort_by_age(&mut self) {
        query::sort_by_age(&mut self.users);
    }

    pub fn as_slice(&self) -> &[User] {
        &self.users
    }

    pub fn into_vec(self) -> Vec<User> {
        self.users
    }
}

impl From<Vec<User>> for Roster {
    fn from(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl FromIterator<User> for Roster {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().collect(),
        }
    }
}

impl Extend<User> for Roster {
    fn extend<I: IntoIterator<Item = User>>(&mut self, iter: I) {
        self.users.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a User;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Roster {
    type Item = &'a mut User;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl IntoIterator for Roster {
    type Item = User;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.users.into_iter(),
        }
    }
}

// ============================================================================
// Iterators
// ============================================================================

/// Borrowing iterator over a [`Roster`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, User>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a User;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for Iter<'_> {}

/// Mutable iterator over a [`Roster`].
#[derive(Debug)]
pub struct IterMut<'a> {
    inner: slice::IterMut<'a, User>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut User;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IterMut<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IterMut<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for IterMut<'_> {}

/// Owning iterator over a [`Roster`].
#[derive(Debug, Clone)]
pub struct IntoIter {
    inner: vec::IntoIter<User>,
}

impl Iterator for IntoIter {
    type Item = User;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for IntoIter {}
