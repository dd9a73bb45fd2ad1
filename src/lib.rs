//! Tip Pool Engine for restaurant shifts
//!
//! This crate settles a shift's tip pools: servers and events tip out to the
//! bar and to support staff, and each pool is distributed back to its
//! members by hours worked.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
