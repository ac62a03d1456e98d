//! fleetmix-solver — cost-optimal accelerator fleet sizing.
//!
//! Turns a workload forecast and a set of per-type throughput profiles into
//! the cheapest integer mix of accelerator units that sustains the load, or
//! reports that no mix exists.
//!
//! # Architecture
//!
//! ```text
//! Planner::run
//!   ├── slicer: workload matrix × request rate → equal-sized slices
//!   ├── model:  slices + profiles → mixed-integer program
//!   │            x[slice][type] ∈ [0,1]   fractional assignment
//!   │            n[type]        ∈ ℤ≥0     provisioned units
//!   └── solve:  optimal → Allocation
//!               infeasible → None
//!               anything else → error
//! ```
//!
//! Fractional assignment and integer procurement are solved as one joint
//! program, so the optimum can split a single category's traffic across
//! types whenever a mixed fleet is cheaper than any single-type fleet.
//! Each `run` is a self-contained synchronous computation; planners hold no
//! shared mutable state, so concurrent solves do not interfere.

pub mod error;
pub mod model;
pub mod planner;
pub mod slicer;

pub use error::{PlannerError, PlannerResult};
pub use planner::{Allocation, Planner, render_diagnostics};
pub use slicer::{Slice, slice_workload};
