#![warn(unreachable_pub, missing_debug_implementations)]

//! The core `quenet` library. This crate defines [the routine](solve::solve) that turns a
//! model specification into a [solution](Solution) of per-center and per-class queueing
//! metrics derived from the operational laws and mean value analysis.

#[macro_use]
mod ident;

pub mod model;
pub mod report;
pub mod solution;
pub mod solve;
pub mod spec;
pub mod units;

#[cfg(test)]
pub(crate) mod testing;

pub use model::{
    Center, CenterId, ClassId, ClassKind, DemandEntry, Discipline, Model, WorkloadClass,
};
pub use report::Report;
pub use solution::{Metrics, Solution};
pub use solve::{solve, Algorithm, Error, SolveError};
pub use spec::{Spec, SpecError};
