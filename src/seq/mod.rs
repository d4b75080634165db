//! Combinators over ordered slices.
//!
//! Four families of functions, all pure and all preserving their input:
//!
//! - [`find`]: first element matching a predicate
//! - [`every`], [`some`], [`intersect`]: set-like relations between slices
//! - [`map`], [`try_map`], [`flat_map`], [`filter`], [`reduce`] and their
//!   `_with_index` variants: order-preserving transforms
//! - [`has_duplicates`], [`has_duplicates_by`]: repeated-value detection
//!
//! Each index-oblivious transform delegates to its `_with_index` counterpart
//! with an index-ignoring closure, so both forms always agree.

mod duplicates;
mod search;
mod sets;
mod transform;

pub use duplicates::{has_duplicates, has_duplicates_by};
pub use search::find;
pub use sets::{every, intersect, some};
pub use transform::{
    filter, filter_with_index, flat_map, flat_map_with_index, map, map_with_index, reduce,
    reduce_with_index, try_map, try_map_with_index,
};
