//! # Rendering listings
//!
//! One routine prints any iterable collection as `{e1,e2,...,}`. It only
//! asks for `IntoIterator` and a `Display` item, so the same function
//! serves `Vec<User>`, `&[User]`, a [`Roster`](crate::Roster) or any
//! iterator adapter chain.
//!
//! Key/value collections go through [`write_entries`], which renders each
//! pair as `{key, value}`.
//!
//! ```
//! use std::collections::BTreeMap;
//! use usercraft::render::{entries_to_string, elements_to_string};
//!
//! let ages = BTreeMap::from([("Ann@".to_string(), 15), ("Cloe".to_string(), 18)]);
//! assert_eq!(entries_to_string(&ages), "{{Ann@, 15},{Cloe, 18},}");
//! assert_eq!(elements_to_string(ages.values()), "{15,18,}");
//! ```

use std::fmt::{self, Display, Write as _};
use std::io;

/// Writes every element followed by a comma, wrapped in braces.
pub fn write_elements<W, I>(out: &mut W, elements: I) -> io::Result<()>
where
    W: io::Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    out.write_all(elements_to_string(elements).as_bytes())
}

/// Writes every `(key, value)` pair as `{key, value},`, wrapped in braces.
pub fn write_entries<W, I, K, V>(out: &mut W, entries: I) -> io::Result<()>
where
    W: io::Write + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    out.write_all(entries_to_string(entries).as_bytes())
}

pub fn elements_to_string<I>(elements: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut listing = String::new();
    fmt_listing(&mut listing, elements, |out, element| write!(out, "{element}"))
        .expect("writing to String cannot fail");
    listing
}

pub fn entries_to_string<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let mut listing = String::new();
    fmt_listing(&mut listing, entries, |out, (key, value)| {
        write!(out, "{{{key}, {value}}}")
    })
    .expect("writing to String cannot fail");
    listing
}

fn fmt_listing<W, I, F>(out: &mut W, items: I, mut fmt_item: F) -> fmt::Result
where
    W: fmt::Write,
    I: IntoIterator,
    F: FnMut(&mut W, I::Item) -> fmt::Result,
{
    out.write_char('{')?;
    for item in items {
        fmt_item(out, item)?;
        out.write_char(',')?;
    }
    out.write_char('}')
}
