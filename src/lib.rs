#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(
    clippy::nursery,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::module_name_repetitions)]

//! Translates provider football event feeds into a normalized match timeline.
//!
//! The `domain` tree holds the provider-agnostic model (teams, periods,
//! events, dataset metadata). Each provider gets its own module with the raw
//! wire records, code tables, and a deserializer producing an
//! [`domain::dataset::EventDataset`]; `statsbomb` is the first of these.

pub mod domain;
pub mod statsbomb;

mod util;
