//! Order-preserving transforms: map, flat map, filter, and reduce.
//!
//! Every transform visits elements left to right, invokes its callback
//! exactly once per element (or until a fallible mapper reports an error),
//! and returns a freshly allocated result. Inputs are never mutated.
//!
//! # Properties
//!
//! ```text
//! map(xs, f).len() == xs.len()
//! map(xs, f)[i] == f(&xs[i])                        // for every index i
//! filter(xs, p)  keeps exactly the satisfying elements, in order
//! reduce([], f, initial) == initial
//! try_map short-circuits: Err(e) carries no partial result
//! ```
//!
//! Each index-oblivious form delegates to its `_with_index` counterpart with
//! a closure that ignores the index.

/// Transforms a slice into a vector of another type.
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::map;
///
/// let lengths = map(&["one", "three"], |element| element.len());
/// assert_eq!(lengths, vec![3, 5]);
/// ```
#[must_use]
pub fn map<T, R, F>(collection: &[T], mut iteratee: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    map_with_index(collection, |element, _| iteratee(element))
}

/// Transforms a slice into a vector of another type, passing each element's
/// zero-based index to the iteratee.
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::map_with_index;
///
/// let indexed = map_with_index(&["a", "b"], |element, index| format!("{index}:{element}"));
/// assert_eq!(indexed, vec!["0:a", "1:b"]);
/// ```
#[must_use]
pub fn map_with_index<T, R, F>(collection: &[T], mut iteratee: F) -> Vec<R>
where
    F: FnMut(&T, usize) -> R,
{
    collection
        .iter()
        .enumerate()
        .map(|(index, element)| iteratee(element, index))
        .collect()
}

/// Transforms a slice with a fallible iteratee, short-circuiting on the
/// first error.
///
/// On success the full mapped vector is returned; on the first `Err` the
/// error is returned immediately and all partially mapped values are
/// discarded.
///
/// # Errors
///
/// Returns the first error reported by `iteratee`, verbatim.
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::try_map;
///
/// let parsed: Result<Vec<i32>, _> = try_map(&["1", "2"], |element| element.parse());
/// assert_eq!(parsed.unwrap(), vec![1, 2]);
///
/// let failed: Result<Vec<i32>, _> = try_map(&["1", "x"], |element| element.parse());
/// assert!(failed.is_err());
/// ```
pub fn try_map<T, R, E, F>(collection: &[T], mut iteratee: F) -> Result<Vec<R>, E>
where
    F: FnMut(&T) -> Result<R, E>,
{
    try_map_with_index(collection, |element, _| iteratee(element))
}

/// Transforms a slice with a fallible, index-aware iteratee,
/// short-circuiting on the first error.
///
/// # Errors
///
/// Returns the first error reported by `iteratee`, verbatim. No partially
/// mapped vector is observable alongside the error.
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::try_map_with_index;
///
/// let result: Result<Vec<usize>, String> = try_map_with_index(&[10, 20], |element, index| {
///     Ok(element + index)
/// });
/// assert_eq!(result.unwrap(), vec![10, 21]);
/// ```
pub fn try_map_with_index<T, R, E, F>(collection: &[T], mut iteratee: F) -> Result<Vec<R>, E>
where
    F: FnMut(&T, usize) -> Result<R, E>,
{
    let mut result = Vec::with_capacity(collection.len());

    for (index, element) in collection.iter().enumerate() {
        result.push(iteratee(element, index)?);
    }

    Ok(result)
}

/// Transforms each element into a subsequence and concatenates the results
/// in order.
///
/// An empty subsequence contributes nothing to the output.
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::flat_map;
///
/// let expanded = flat_map(&[1, 3], |element| vec![*element, element + 1]);
/// assert_eq!(expanded, vec![1, 2, 3, 4]);
/// ```
#[must_use]
pub fn flat_map<T, R, F>(collection: &[T], mut iteratee: F) -> Vec<R>
where
    F: FnMut(&T) -> Vec<R>,
{
    flat_map_with_index(collection, |element, _| iteratee(element))
}

/// Index-aware form of [`flat_map`].
#[must_use]
pub fn flat_map_with_index<T, R, F>(collection: &[T], mut iteratee: F) -> Vec<R>
where
    F: FnMut(&T, usize) -> Vec<R>,
{
    let mut result = Vec::with_capacity(collection.len());

    for (index, element) in collection.iter().enumerate() {
        result.extend(iteratee(element, index));
    }

    result
}

/// Returns the elements for which `predicate` holds, in their original
/// order.
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::filter;
///
/// let even = filter(&[1, 2, 3, 4], |element| element % 2 == 0);
/// assert_eq!(even, vec![2, 4]);
/// ```
#[must_use]
pub fn filter<T, P>(collection: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter_with_index(collection, |element, _| predicate(element))
}

/// Index-aware form of [`filter`].
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::filter_with_index;
///
/// let odd_positions = filter_with_index(&["a", "b", "c"], |_, index| index % 2 == 1);
/// assert_eq!(odd_positions, vec!["b"]);
/// ```
#[must_use]
pub fn filter_with_index<T, P>(collection: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize) -> bool,
{
    collection
        .iter()
        .enumerate()
        .filter(|(index, element)| predicate(element, *index))
        .map(|(_, element)| element.clone())
        .collect()
}

/// Left-folds a slice into a single value, starting from `initial`.
///
/// An empty slice returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::reduce;
///
/// let sum = reduce(&[1, 2, 3, 4, 5], |accumulator, element| accumulator + element, 0);
/// assert_eq!(sum, 15);
/// ```
#[must_use]
pub fn reduce<T, R, F>(collection: &[T], mut accumulator: F, initial: R) -> R
where
    F: FnMut(R, &T) -> R,
{
    reduce_with_index(
        collection,
        |aggregate, element, _| accumulator(aggregate, element),
        initial,
    )
}

/// Index-aware form of [`reduce`].
///
/// # Examples
///
/// ```rust
/// use seqfn::seq::reduce_with_index;
///
/// let weighted = reduce_with_index(
///     &[10, 20, 30],
///     |aggregate, element, index| aggregate + element * index,
///     0,
/// );
/// assert_eq!(weighted, 80);
/// ```
#[must_use]
pub fn reduce_with_index<T, R, F>(collection: &[T], mut accumulator: F, initial: R) -> R
where
    F: FnMut(R, &T, usize) -> R,
{
    collection
        .iter()
        .enumerate()
        .fold(initial, |aggregate, (index, element)| {
            accumulator(aggregate, element, index)
        })
}
