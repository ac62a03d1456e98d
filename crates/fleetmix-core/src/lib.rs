//! fleetmix-core — domain types for accelerator fleet capacity plans.
//!
//! A capacity plan describes a request-traffic forecast and the accelerator
//! types available to serve it:
//!
//! - [`PlanConfig`]: the workload distribution matrix, total request rate,
//!   accelerator profiles, and slicing granularity. Loadable from JSON or
//!   TOML.
//! - [`GpuProfile`]: per-type unit cost, per-category throughput matrix, and
//!   an optional provisioning cap.
//!
//! Validation is eager and happens before any solve: shape mismatches,
//! non-finite numbers, and non-positive scalars are rejected with a
//! descriptive [`ConfigError`] rather than coerced.

pub mod config;
pub mod error;

pub use config::{GpuProfile, PlanConfig};
pub use error::{ConfigError, ConfigResult};
