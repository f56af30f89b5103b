//! Bloom filters over strings whose `k` hash functions are all derived from one
//! digest algorithm by salting the input with the function number.
//!
//! Sizing follows the usual formulas: `m = ceil(-n ln(p) / ln(2)^2)` and
//! `k = ceil(m / max_items * ln 2)`, with `max_items` as the index space of
//! every function. By default [`Filter::contains`] reports a value present when
//! any of its indices is active; see [`QueryMode`].

pub mod digest;
pub mod error;
pub mod filter;
pub mod hash;
pub mod set_membership;
pub mod sizing;
mod store;

pub use digest::{supported_algorithms, DigestAlgorithm};
pub use error::FilterError;
pub use filter::{Filter, FilterBuilder, FilterOptions, QueryMode};
pub use set_membership::SetMembership;
