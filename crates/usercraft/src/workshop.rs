//! # The workshop walkthrough
//!
//! Runs Parts I to V in order against one age map and writes a labeled
//! block for every intermediate result:
//!
//! - **Part I**: youngest, one of the oldest, adults, and a new entry in the
//!   age map.
//! - **Part II**: the map converted into a `Vec<User>`.
//! - **Part III**: the same queries on the vector, plus a friend appended
//!   and an age sort.
//! - **Part IV**: follower counts derived from ages, the most popular
//!   user, and popularity sorts in both directions.
//! - **Part V**: the vector moved into a [`Roster`] and Part III repeated
//!   with the unchanged generic queries.
//!
//! ```
//! use usercraft::{Workshop, WorkshopSettings};
//!
//! let mut out = Vec::new();
//! let report = Workshop::new(WorkshopSettings::default()).run(&mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("I.1 The youngest user is Ann@ with age 15"));
//! assert_eq!(report.users.len(), 7);
//! ```

use std::fmt::Display;
use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::query::{self, ADULT_AGE, AgeMap, Person};
use crate::render::{write_elements, write_entries};
use crate::roster::Roster;
use crate::user::{FollowersFormula, SortOrder, User, by_followers, by_followers_desc};

/// A name and age to place in the age map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub name: String,
    pub age: u32,
}

impl Enrollment {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Inputs of a workshop run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopSettings {
    /// Initial contents of the age map.
    pub seed: Vec<Enrollment>,
    /// Added to the map in Part I.
    pub new_user: Enrollment,
    /// Appended to the vector in Part III.
    pub friend: Enrollment,
    pub adult_age: u32,
    pub formula: FollowersFormula,
}

impl Default for WorkshopSettings {
    fn default() -> Self {
        Self {
            seed: vec![
                Enrollment::new("BruNo", 24),
                Enrollment::new("Ann@", 15),
                Enrollment::new("dian_a", 17),
                Enrollment::new("1gor", 24),
                Enrollment::new("Cloe", 18),
            ],
            new_user: Enrollment::new("Kate", 27),
            friend: Enrollment::new("Tom", 30),
            adult_age: ADULT_AGE,
            formula: FollowersFormula::default(),
        }
    }
}

impl WorkshopSettings {
    /// Builds the age map from the seed entries. Later duplicates are ignored.
    pub fn age_map(&self) -> AgeMap {
        let mut ages = AgeMap::new();
        for entry in &self.seed {
            query::enroll(&mut ages, entry.name.clone(), entry.age);
        }
        ages
    }
}

/// Final state of every collection after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkshopReport {
    /// The age map including the Part I addition.
    pub ages: AgeMap,
    /// The vector as left by Part IV: followers set, most popular first.
    pub users: Vec<User>,
    /// The custom container as left by Part V: sorted by age.
    pub roster: Roster,
}

pub struct Workshop {
    settings: WorkshopSettings,
}

impl Workshop {
    pub fn new(settings: WorkshopSettings) -> Self {
        Self { settings }
    }

    /// Runs every part, writing the labeled listings to `out`.
    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<WorkshopReport> {
        let settings = &self.settings;
        info!(
            seed = settings.seed.len(),
            adult_age = settings.adult_age,
            "starting workshop"
        );

        // Part I: the age map.
        let mut ages = settings.age_map();
        write!(out, "Users age map: ")?;
        entries_block(out, &ages)?;

        age_line(out, "I.1 The youngest user is", query::youngest(&ages))?;
        age_line(out, "I.2 One of the oldest user is", query::oldest(&ages))?;

        write!(out, "\nI.3 Adult users only: \n")?;
        for (name, age) in ages.iter().filter(|entry| entry.age() >= settings.adult_age) {
            write!(out, "{name}:{age},")?;
        }
        writeln!(out)?;

        let adults = query::adult_ages(&ages, settings.adult_age);
        write!(out, "\nI.3 Adult users only: ")?;
        entries_block(out, &adults)?;

        query::enroll(&mut ages, settings.new_user.name.clone(), settings.new_user.age);
        write!(out, "\nI.4 Users map with new user:")?;
        entries_block(out, &ages)?;

        // Part II: map to vector.
        let mut users = query::users_from_ages(&ages);
        write!(out, "\nII.2 Users map:")?;
        entries_block(out, &ages)?;
        write!(out, "\nII.2 Users copied to vector:")?;
        elements_block(out, &users)?;

        // Part III: the same queries on the vector.
        repeat_queries(out, "III", &users, settings.adult_age)?;

        users.push(User::new(
            settings.friend.name.clone(),
            settings.friend.age,
        ));
        write!(out, "\nIII.4 Users vector with new user:")?;
        elements_block(out, &users)?;

        query::sort_by_age(&mut users);
        write!(out, "\nIII.5 Users sorted from the youngest to the oldest:")?;
        elements_block(out, &users)?;

        // Part IV: popularity.
        query::refresh_followers(&mut users, settings.formula)?;
        write!(out, "\nIV.2 Users after followers init:")?;
        elements_block(out, &users)?;

        user_line(out, "IV.3 The most popular user is", query::most_popular(&users))?;
        user_line(
            out,
            "IV.3 The most popular user is",
            query::first_max_by(&users, |a, b| by_followers(a, b)),
        )?;

        query::sort_by_followers(&mut users, SortOrder::Descending);
        write!(out, "\nIV.4 Users sorted by number of followers (descending): ")?;
        elements_block(out, &users)?;

        query::sort_by_followers(&mut users, SortOrder::Ascending);
        write!(out, "\nIV.4 Users sorted by number of followers (ascending): ")?;
        elements_block(out, &users)?;

        // Same order as SortOrder::Descending, through the named comparator.
        users.sort_unstable_by(by_followers_desc);
        write!(out, "\nIV.4 Users sorted by number of followers (descending) ")?;
        elements_block(out, &users)?;

        // Part V: the custom container.
        let mut roster: Roster = users.iter().cloned().collect();
        write!(out, "\nV.3 Users in custom container:")?;
        elements_block(out, &roster)?;

        repeat_queries(out, "V.4", &roster, settings.adult_age)?;

        roster.sort_by_age();
        write!(out, "\nV.4 Custom container sorted from the youngest to the oldest:")?;
        elements_block(out, &roster)?;

        out.flush()?;
        info!(
            ages = ages.len(),
            users = users.len(),
            roster = roster.len(),
            "workshop finished"
        );

        Ok(WorkshopReport {
            ages,
            users,
            roster,
        })
    }
}

/// Youngest, one of the oldest, and adults of any user collection.
fn repeat_queries<'a, W, C>(out: &mut W, part: &str, users: C, adult_age: u32) -> Result<()>
where
    W: Write + ?Sized,
    C: IntoIterator<Item = &'a User> + Copy,
{
    user_line(
        out,
        &format!("{part}.1 The youngest user is"),
        query::youngest(users),
    )?;
    user_line(
        out,
        &format!("{part}.2 One of the oldest users is"),
        query::oldest(users),
    )?;

    let adults: Vec<&User> = query::adults(users, adult_age);
    debug!(part, adults = adults.len(), "filtered adults");
    write!(out, "\n{part}.3 Adult users only:")?;
    elements_block(out, adults)?;
    Ok(())
}

fn entries_block<W: Write + ?Sized>(out: &mut W, ages: &AgeMap) -> Result<()> {
    writeln!(out)?;
    write_entries(out, ages)?;
    writeln!(out)?;
    Ok(())
}

fn elements_block<W, I>(out: &mut W, elements: I) -> Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    writeln!(out)?;
    write_elements(out, elements)?;
    writeln!(out)?;
    Ok(())
}

fn age_line<W, P>(out: &mut W, label: &str, found: Option<P>) -> Result<()>
where
    W: Write + ?Sized,
    P: Person,
{
    match found {
        Some(person) => writeln!(out, "\n{label} {} with age {}", person.name(), person.age())?,
        None => writeln!(out, "\n{label} nobody: no users")?,
    }
    Ok(())
}

fn user_line<W: Write + ?Sized>(out: &mut W, label: &str, found: Option<&User>) -> Result<()> {
    match found {
        Some(user) => writeln!(out, "\n{label} {user}")?,
        None => writeln!(out, "\n{label} nobody: no users")?,
    }
    Ok(())
}
