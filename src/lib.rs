//! Bin storage for histograms.
//!
//! A [`Storage`](st::Storage) holds one value per bin over one of three
//! interchangeable backings: a growable `Vec` ([`VecBacking`](st::VecBacking)), a
//! fixed-capacity inline array ([`ArrayBacking`](st::ArrayBacking)) or a sparse map
//! that only keeps non-default bins ([`MapBacking`](st::MapBacking)). Storages over
//! different backings can be assigned from, compared with and added to each other.
//!
//! Bins are either plain counters, incremented with `+=`, or
//! [`Accumulator`](core::Accumulator)s, which are called instead.

extern crate log;
extern crate num_traits as num;
extern crate parking_lot;

#[macro_use]
pub mod core;
pub mod concurrent;
pub use crate::core::errors::*;
pub mod st;

#[cfg(test)]
pub mod tests;
