//! Repeated-value detection.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns true if any value occurs more than once in `collection`.
///
/// Short-circuits on the first repeated value. Empty and single-element
/// slices never contain duplicates.
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::has_duplicates;
///
/// assert!(has_duplicates(&[1, 1, 2]));
/// assert!(!has_duplicates(&[1, 2, 3]));
/// assert!(!has_duplicates::<i32>(&[]));
/// ```
#[must_use]
pub fn has_duplicates<T>(collection: &[T]) -> bool
where
    T: Eq + Hash,
{
    let mut seen = HashSet::with_capacity(collection.len());

    collection.iter().any(|element| !seen.insert(element))
}

/// Returns true if any two elements of `collection` map to the same key
/// under `iteratee`.
///
/// Short-circuits on the first repeated key.
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::has_duplicates_by;
///
/// let words = ["ant", "bee", "cow", "asp"];
/// assert!(has_duplicates_by(&words, |element| element.as_bytes()[0]));
/// assert!(!has_duplicates_by(&words, |element| element.to_string()));
/// ```
#[must_use]
pub fn has_duplicates_by<T, K, F>(collection: &[T], mut iteratee: F) -> bool
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(collection.len());

    collection.iter().any(|element| !seen.insert(iteratee(element)))
}
