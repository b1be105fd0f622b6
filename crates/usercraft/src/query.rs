//! # Queries over users
//!
//! Extremum search, filtered copies, the followers update and sorting.
//! Every query is generic over `IntoIterator`, so the same function runs
//! against the age map, a `Vec<User>` and a [`Roster`](crate::Roster).
//!
//! ## Ties
//!
//! [`first_min_by_key`] and [`first_max_by_key`] both keep the FIRST
//! element among equals. This matters for "one of the oldest users": the
//! standard library's `Iterator::max_by_key` keeps the last maximum
//! instead, so it would report a different user.
//!
//! ```
//! use usercraft::query::first_max_by_key;
//!
//! let ages = [("BruNo", 24), ("Ann@", 15), ("1gor", 24)];
//!
//! let (name, _) = first_max_by_key(ages, |(_, age)| *age).unwrap();
//! assert_eq!(name, "BruNo");
//!
//! let (name, _) = ages.into_iter().max_by_key(|(_, age)| *age).unwrap();
//! assert_eq!(name, "1gor");
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::{debug, warn};

use crate::error::{Result, UsercraftError};
use crate::user::{FollowersFormula, SortOrder, User};

/// User name to age, iterated in name order.
pub type AgeMap = BTreeMap<String, u32>;

/// Minimum age of an adult.
pub const ADULT_AGE: u32 = 18;

/// Anything with a name and an age: map entries and users alike.
pub trait Person {
    fn name(&self) -> &str;
    fn age(&self) -> u32;
}

impl Person for User {
    fn name(&self) -> &str {
        User::name(self)
    }

    fn age(&self) -> u32 {
        User::age(self)
    }
}

impl<T: Person + ?Sized> Person for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn age(&self) -> u32 {
        (**self).age()
    }
}

impl<T: Person + ?Sized> Person for &mut T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn age(&self) -> u32 {
        (**self).age()
    }
}

impl<K: AsRef<str>> Person for (K, &u32) {
    fn name(&self) -> &str {
        self.0.as_ref()
    }

    fn age(&self) -> u32 {
        *self.1
    }
}

impl<K: AsRef<str>> Person for (K, u32) {
    fn name(&self) -> &str {
        self.0.as_ref()
    }

    fn age(&self) -> u32 {
        self.1
    }
}

// ============================================================================
// Extremum search
// ============================================================================

/// Returns the element with the smallest key; the first one on ties.
pub fn first_min_by_key<I, K, F>(items: I, mut key: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    items
        .into_iter()
        .reduce(|best, item| if key(&item) < key(&best) { item } else { best })
}

/// Returns the element with the largest key; the first one on ties.
pub fn first_max_by_key<I, K, F>(items: I, mut key: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    items
        .into_iter()
        .reduce(|best, item| if key(&item) > key(&best) { item } else { best })
}

/// Returns the greatest element under `compare`; the first one on ties.
pub fn first_max_by<I, F>(items: I, mut compare: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    items
        .into_iter()
        .reduce(|best, item| if compare(&item, &best).is_gt() { item } else { best })
}

pub fn youngest<I>(people: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Person,
{
    first_min_by_key(people, Person::age)
}

/// One of the oldest people: the first encountered among equal ages.
pub fn oldest<I>(people: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Person,
{
    first_max_by_key(people, Person::age)
}

/// The user with the most followers, first encountered on ties.
pub fn most_popular<I>(users: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Borrow<User>,
{
    first_max_by_key(users, |user| user.borrow().followers_count())
}

// ============================================================================
// Filtering
// ============================================================================

/// Collects every person at least `min_age` old, keeping iteration order.
pub fn adults<I, C>(people: I, min_age: u32) -> C
where
    I: IntoIterator,
    I::Item: Person,
    C: FromIterator<I::Item>,
{
    people
        .into_iter()
        .filter(|person| person.age() >= min_age)
        .collect()
}

/// Copies the adult entries of `ages` into a new map.
pub fn adult_ages(ages: &AgeMap, min_age: u32) -> AgeMap {
    ages.iter()
        .filter(|entry| entry.age() >= min_age)
        .map(|(name, age)| (name.clone(), *age))
        .collect()
}

// ============================================================================
// Building and updating
// ============================================================================

/// Inserts `name` unless it is already present.
///
/// Returns `false` and leaves the existing age untouched on a duplicate.
pub fn enroll(ages: &mut AgeMap, name: impl Into<String>, age: u32) -> bool {
    match ages.entry(name.into()) {
        Entry::Vacant(slot) => {
            debug!(name = %slot.key(), age, "enrolled user");
            slot.insert(age);
            true
        }
        Entry::Occupied(existing) => {
            warn!(
                name = %existing.key(),
                kept_age = *existing.get(),
                ignored_age = age,
                "user already enrolled"
            );
            false
        }
    }
}

/// One user per map entry, in key order, with no followers yet.
pub fn users_from_ages(ages: &AgeMap) -> Vec<User> {
    ages.iter().map(User::from).collect()
}

/// Recomputes every user's follower count from their age.
///
/// Returns the number of users updated. Stops at the first user whose
/// count overflows; users before it keep their new counts.
pub fn refresh_followers<'a, I>(users: I, formula: FollowersFormula) -> Result<usize>
where
    I: IntoIterator<Item = &'a mut User>,
{
    let mut updated = 0;
    for user in users {
        let followers = formula
            .apply(user.age())
            .ok_or_else(|| UsercraftError::FollowersOverflow {
                name: user.name().to_string(),
                age: user.age(),
            })?;
        user.set_followers_count(followers);
        updated += 1;
    }
    debug!(updated, ?formula, "refreshed followers");
    Ok(updated)
}

// ============================================================================
// Sorting
// ============================================================================

/// Sorts in place by follower count. Not stable.
pub fn sort_by_followers(users: &mut [User], order: SortOrder) {
    users.sort_unstable_by(|a, b| order.compare(a, b));
}

/// Sorts in place from the youngest to the oldest. Not stable.
pub fn sort_by_age(users: &mut [User]) {
    users.sort_unstable_by_key(User::age);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> AgeMap {
        AgeMap::from([
            ("BruNo".to_string(), 24),
            ("Ann@".to_string(), 15),
            ("dian_a".to_string(), 17),
            ("1gor".to_string(), 24),
            ("Cloe".to_string(), 18),
        ])
    }

    #[test]
    fn youngest_in_map() {
        let ages = seed();
        let youngest = youngest(&ages).unwrap();
        assert_eq!(youngest, (&"Ann@".to_string(), &15));
    }

    #[test]
    fn oldest_in_map_is_first_in_key_order() {
        let ages = seed();
        let (name, age) = oldest(&ages).unwrap();
        assert_eq!(name, "1gor");
        assert_eq!(*age, 24);
    }

    #[test]
    fn extremum_of_empty_input_is_none() {
        assert!(youngest(&AgeMap::new()).is_none());
        assert!(most_popular(Vec::<User>::new()).is_none());
    }

    #[test]
    fn first_min_keeps_first_on_ties() {
        let items = [(1, 'a'), (0, 'b'), (0, 'c')];
        assert_eq!(first_min_by_key(items, |(k, _)| *k), Some((0, 'b')));
    }

    #[test]
    fn adult_ages_copies_matching_entries() {
        let adults = adult_ages(&seed(), ADULT_AGE);
        let expected = AgeMap::from([
            ("BruNo".to_string(), 24),
            ("1gor".to_string(), 24),
            ("Cloe".to_string(), 18),
        ]);
        assert_eq!(adults, expected);
    }

    #[test]
    fn adults_collects_borrowed_users() {
        let users = users_from_ages(&seed());
        let adults: Vec<&User> = adults(&users, ADULT_AGE);
        let names: Vec<_> = adults.iter().map(|u| u.name()).collect();
        assert_eq!(names, ["1gor", "BruNo", "Cloe"]);
    }

    #[test]
    fn enroll_does_not_overwrite() {
        let mut ages = seed();
        assert!(enroll(&mut ages, "Kate", 27));
        assert!(!enroll(&mut ages, "Kate", 99));
        assert_eq!(ages["Kate"], 27);
        assert_eq!(ages.len(), 6);
    }

    #[test]
    fn users_from_ages_round_trips() {
        let ages = seed();
        let users = users_from_ages(&ages);

        assert_eq!(users.len(), ages.len());
        for (user, (name, age)) in users.iter().zip(&ages) {
            assert_eq!(user.name(), name);
            assert_eq!(user.age(), *age);
            assert_eq!(user.followers_count(), 0);
        }
    }

    #[test]
    fn refresh_followers_applies_formula() {
        let mut users = users_from_ages(&seed());
        let updated = refresh_followers(&mut users, FollowersFormula::default()).unwrap();

        assert_eq!(updated, 5);
        let bruno = users.iter().find(|u| u.name() == "BruNo").unwrap();
        assert_eq!(bruno.followers_count(), 1240);
    }

    #[test]
    fn refresh_followers_reports_overflow() {
        let mut users = vec![User::new("ok", 1), User::new("huge", u32::MAX)];
        let err = refresh_followers(&mut users, FollowersFormula::default()).unwrap_err();

        assert!(matches!(
            err,
            UsercraftError::FollowersOverflow { ref name, age } if name == "huge" && age == u32::MAX
        ));
        assert_eq!(users[0].followers_count(), 1010);
    }

    #[test]
    fn most_popular_prefers_first_on_ties() {
        let users = vec![
            User::with_followers("a", 24, 1240),
            User::with_followers("b", 24, 1240),
            User::with_followers("c", 15, 1150),
        ];
        assert_eq!(most_popular(&users).unwrap().name(), "a");
    }

    #[test]
    fn comparator_max_agrees_with_most_popular() {
        let users = vec![
            User::with_followers("a", 24, 1240),
            User::with_followers("b", 24, 1240),
            User::with_followers("c", 30, 1300),
            User::with_followers("d", 30, 1300),
        ];
        let by_comparator = first_max_by(&users, |a, b| crate::user::by_followers(a, b)).unwrap();
        assert_eq!(by_comparator.name(), "c");
        assert_eq!(by_comparator, most_popular(&users).unwrap());
    }

    #[test]
    fn sorts_by_followers_both_ways() {
        let mut users = users_from_ages(&seed());
        refresh_followers(&mut users, FollowersFormula::default()).unwrap();

        sort_by_followers(&mut users, SortOrder::Descending);
        assert!(users
            .windows(2)
            .all(|w| w[0].followers_count() >= w[1].followers_count()));

        sort_by_followers(&mut users, SortOrder::Ascending);
        assert!(users
            .windows(2)
            .all(|w| w[0].followers_count() <= w[1].followers_count()));
    }

    #[test]
    fn sort_by_age_orders_youngest_first() {
        let mut users = users_from_ages(&seed());
        sort_by_age(&mut users);
        let ages: Vec<_> = users.iter().map(User::age).collect();
        assert_eq!(ages, [15, 17, 18, 24, 24]);
    }
}
