//! Ordering endpoint adapters.

pub mod b2b;
