//! Helpers for moving between values and optional references.

/// Moves `value` into a fresh heap allocation and returns the owning box.
///
/// The box is independent of the original binding: for `Copy` types,
/// mutating the original afterwards never changes the boxed value.
///
/// # Examples
///
/// ```rust
/// use seqfn::optional::to_boxed;
///
/// let mut original = 5;
/// let boxed = to_boxed(original);
/// original = 9;
/// assert_eq!(*boxed, 5);
/// assert_eq!(original, 9);
/// ```
#[must_use]
pub fn to_boxed<T>(value: T) -> Box<T> {
    Box::new(value)
}

/// Returns the referenced value cloned when present, else `fallback`.
///
/// An absent reference is never dereferenced.
///
/// # Examples
///
/// ```rust
/// use seqfn::optional::from_ref_or;
///
/// assert_eq!(from_ref_or(Some(&5), 9), 5);
/// assert_eq!(from_ref_or(None, 9), 9);
/// ```
#[must_use]
pub fn from_ref_or<T: Clone>(reference: Option<&T>, fallback: T) -> T {
    reference.map_or(fallback, Clone::clone)
}
