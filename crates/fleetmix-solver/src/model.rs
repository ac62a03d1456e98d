//! Capacity model construction.
//!
//! Builds the mixed-integer program that couples fractional workload
//! assignment with integer unit procurement:
//!
//! ```text
//! minimize    sum_t  cost[t] * n[t]
//! subject to  sum_t  x[s][t] == 1                        for every slice s
//!             x[s][t] == 0              where tputs[t][cell(s)] is zero
//!             sum_s  w(s) / tputs[t][cell(s)] * x[s][t] <= n[t]   per type t
//!             x[s][t] in [0, 1],   n[t] integer in [0, cap(t)]
//! ```
//!
//! Solving assignment and procurement jointly finds the true minimum-cost
//! integer fleet directly, including mixed-type splits that solving a
//! continuous balancing problem and rounding up would miss.

use good_lp::constraint::Constraint;
use good_lp::{Expression, ProblemVariables, Variable, constraint, variable};

use fleetmix_core::GpuProfile;

use crate::slicer::Slice;

/// A built, not yet solved, capacity model.
///
/// Variable layout mirrors the inputs: `assign[s][t]` follows slice emission
/// order and profile iteration order, and `units[t]` follows profile
/// iteration order. The planner relies on this correspondence when reading
/// the solution back.
pub struct CapacityModel {
    pub(crate) vars: ProblemVariables,
    /// Fraction of slice s routed to type t.
    pub(crate) assign: Vec<Vec<Variable>>,
    /// Provisioned unit count for type t.
    pub(crate) units: Vec<Variable>,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) objective: Expression,
}

impl CapacityModel {
    /// Build the program for the given slices and profiles.
    pub fn build(slices: &[Slice], profiles: &[&GpuProfile]) -> Self {
        let mut vars = ProblemVariables::new();

        let assign: Vec<Vec<Variable>> = slices
            .iter()
            .map(|_| {
                profiles
                    .iter()
                    .map(|_| vars.add(variable().min(0.0).max(1.0)))
                    .collect()
            })
            .collect();

        let cap = unconstrained_cap(slices, profiles);
        let units: Vec<Variable> = profiles
            .iter()
            .map(|profile| {
                let bound = profile.max_count.map_or(cap, f64::from);
                vars.add(variable().integer().min(0.0).max(bound))
            })
            .collect();

        let mut constraints = Vec::new();

        // Coverage: every slice is fully assigned, possibly split across
        // types, never dropped. Zero-workload slices included.
        for row in &assign {
            let covered: Expression = row.iter().map(|&x| Expression::from(x)).sum();
            constraints.push(constraint!(covered == 1.0));
        }

        // A type with zero throughput for a category takes none of it.
        for (s, slice) in slices.iter().enumerate() {
            for (t, profile) in profiles.iter().enumerate() {
                if profile.tputs[slice.row][slice.col] == 0.0 {
                    let excluded = assign[s][t];
                    constraints.push(constraint!(excluded == 0.0));
                }
            }
        }

        // Capacity: the aggregate GPU-equivalent load on a type stays within
        // its provisioned unit count. Zero-throughput terms are already
        // forced to zero above and are skipped here.
        for (t, profile) in profiles.iter().enumerate() {
            let load: Expression = slices
                .iter()
                .enumerate()
                .filter(|(_, slice)| profile.tputs[slice.row][slice.col] > 0.0)
                .map(|(s, slice)| {
                    let tput = profile.tputs[slice.row][slice.col];
                    (slice.workload / tput) * assign[s][t]
                })
                .sum();
            let n = units[t];
            constraints.push(constraint!(load <= n));
        }

        let objective: Expression = profiles
            .iter()
            .zip(&units)
            .map(|(profile, &n)| profile.cost * n)
            .sum();

        Self {
            vars,
            assign,
            units,
            constraints,
            objective,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.assign.iter().map(Vec::len).sum::<usize>() + self.units.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

/// Bound for unit-count variables of profiles without a `max_count`.
///
/// No feasible solution provisions more units of any type than the total
/// workload divided by the smallest positive throughput anywhere in the
/// instance, so this cap keeps the program bounded without ever binding.
/// With no positive throughput at all it resolves to zero and the usual
/// coverage/exclusion interplay decides feasibility.
pub(crate) fn unconstrained_cap(slices: &[Slice], profiles: &[&GpuProfile]) -> f64 {
    let total_workload: f64 = slices.iter().map(|s| s.workload).sum();
    let min_positive_tput = profiles
        .iter()
        .flat_map(|p| p.tputs.iter().flatten())
        .copied()
        .filter(|&t| t > 0.0)
        .fold(f64::INFINITY, f64::min);

    if min_positive_tput.is_finite() {
        (total_workload / min_positive_tput).ceil() + 1.0
    } else {
        0.0
    }
}
