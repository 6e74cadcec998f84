//! cloudhub_core - pure listing and calendar logic for CloudHub.
//!
//! Everything in this crate is synchronous and free of I/O. Callers fetch
//! items however they like and hand them in as plain slices.

pub mod calendar;
pub mod listing;
pub mod serde;
