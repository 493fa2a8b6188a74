//! Search strategies over an unsorted dataset.
//!
//! Both strategies borrow the caller's slice and never reorder it.
//! Binary search sorts a private working copy, so the index it reports
//! refers to sorted order and may differ from the linear index for the
//! same key.

mod binary;
mod linear;

pub use binary::binary_search_with_trace;
pub use linear::linear_search;
