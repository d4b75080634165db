//! Linear search over slices.

/// Returns the first element for which `predicate` holds.
///
/// Scans left to right and stops at the first match; `None` when no element
/// satisfies the predicate.
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::find;
///
/// let numbers = [1, 2, 3, 4];
/// assert_eq!(find(&numbers, |element| element % 2 == 0), Some(&2));
/// assert_eq!(find(&numbers, |element| *element > 9), None);
/// ```
#[must_use]
pub fn find<T, P>(collection: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    collection.iter().find(|element| predicate(element))
}
