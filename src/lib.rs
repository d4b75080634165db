//! # seqfn
//!
//! Pure, generic utility functions over ordered slices and optional values.
//!
//! ## Overview
//!
//! This library provides a small set of freestanding combinators packaged as
//! direct slice-in, vector-out functions:
//!
//! - **Search**: [`find`](seq::find)
//! - **Set relations**: [`every`](seq::every), [`some`](seq::some),
//!   [`intersect`](seq::intersect)
//! - **Transforms**: [`map`](seq::map), [`try_map`](seq::try_map),
//!   [`flat_map`](seq::flat_map), [`filter`](seq::filter),
//!   [`reduce`](seq::reduce), each with a `_with_index` variant
//! - **Duplicate detection**: [`has_duplicates`](seq::has_duplicates),
//!   [`has_duplicates_by`](seq::has_duplicates_by)
//! - **Optional values**: [`to_boxed`](optional::to_boxed),
//!   [`from_ref_or`](optional::from_ref_or)
//!
//! Every function is a synchronous, side-effect-free computation: inputs are
//! borrowed and never mutated, outputs are freshly allocated and share
//! nothing with the inputs after return.
//!
//! ## Example
//!
//! ```rust
//! use seqfn::prelude::*;
//!
//! let numbers = [1, 2, 3, 4, 5];
//!
//! let doubled = map(&numbers, |element| element * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
//!
//! let even = filter(&numbers, |element| element % 2 == 0);
//! assert_eq!(even, vec![2, 4]);
//!
//! let sum = reduce(&numbers, |accumulator, element| accumulator + element, 0);
//! assert_eq!(sum, 15);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every public function of the crate.
///
/// # Usage
///
/// ```rust
/// use seqfn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optional::*;
    pub use crate::seq::*;
}

pub mod optional;
pub mod seq;
