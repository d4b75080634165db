//! Set-like relations between slices.
//!
//! # Properties
//!
//! The empty-subset cases follow set-theory convention and are deliberately
//! asymmetric:
//!
//! ```text
//! every(collection, []) == true     // vacuous universal quantification
//! some(collection, [])  == false    // vacuous existential quantification
//! ```
//!
//! [`intersect`] follows the order and multiplicity of its *second* argument:
//! the first argument only decides membership.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns true if all elements of `subset` are contained in `collection`,
/// or if `subset` is empty.
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::every;
///
/// assert!(every(&[1, 2, 3, 4], &[2, 4]));
/// assert!(!every(&[1, 2, 3, 4], &[2, 5]));
/// assert!(every(&[1, 2, 3], &[]));
/// ```
#[must_use]
pub fn every<T: PartialEq>(collection: &[T], subset: &[T]) -> bool {
    subset.iter().all(|element| collection.contains(element))
}

/// Returns true if at least one element of `subset` is contained in
/// `collection`.
///
/// An empty `subset` yields false, unlike [`every`].
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::some;
///
/// assert!(some(&[1, 2, 3, 4], &[4, 9]));
/// assert!(!some(&[1, 2, 3, 4], &[5, 9]));
/// assert!(!some(&[1, 2, 3], &[]));
/// ```
#[must_use]
pub fn some<T: PartialEq>(collection: &[T], subset: &[T]) -> bool {
    subset.iter().any(|element| collection.contains(element))
}

/// Returns the intersection of two slices.
///
/// Membership is decided by a hash lookup over `list1`; the result then
/// contains every element of `list2` found in `list1`, in `list2`'s order
/// and with `list2`'s duplicates preserved.
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::intersect;
///
/// assert_eq!(intersect(&[1, 2, 3], &[3, 2, 2]), vec![3, 2, 2]);
/// assert_eq!(intersect(&[1, 2], &[4, 5]), Vec::<i32>::new());
/// ```
#[must_use]
pub fn intersect<T>(list1: &[T], list2: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let seen: HashSet<&T> = list1.iter().collect();

    list2
        .iter()
        .filter(|element| seen.contains(*element))
        .cloned()
        .collect()
}
