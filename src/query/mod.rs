//! Read-only queries: membership, positions and quantifiers.

pub mod contains;
pub mod index;

pub use contains::{contains, scan_contains, ByCount, CountLookup, Membership, Strategy};
pub use index::{all_of, any_of, index_of, index_of_by};
