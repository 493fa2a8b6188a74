//! Search and extremum algorithm comparison toolkit.
//!
//! The engines in [`search`] and [`extremum`] are pure functions over a
//! borrowed slice. Everything around them (data loading, timing,
//! formatting) lives in separate modules and only feeds inputs in or
//! renders results out.

pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod extremum;
pub mod models;
pub mod search;
pub mod timing;
