//! Capacity planner — solve and result interpretation.
//!
//! Owns the full solve pipeline: validate once at construction, then per
//! `run` slice the workload, build the capacity model, hand it to the MILP
//! backend, and map the raw solution back to per-type unit counts.
//! Infeasibility is a first-class outcome (`Ok(None)`), distinct from
//! backend malfunction (`Err`).

use std::collections::BTreeMap;
use std::fmt::Write as _;

use good_lp::{ResolutionError, Solution, SolverModel, default_solver};
use serde::Serialize;
use tracing::{debug, info, warn};

use fleetmix_core::{GpuProfile, PlanConfig};

use crate::error::{PlannerError, PlannerResult};
use crate::model::CapacityModel;
use crate::slicer::slice_workload;

/// Corrections larger than this when rounding a unit count to an integer are
/// worth a warning; anything below is ordinary solver tolerance.
const INTEGRALITY_WARN_TOLERANCE: f64 = 1e-4;

/// The cheapest integer fleet that sustains the forecast load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    /// Provisioned unit count per accelerator type, in type-identifier
    /// order.
    pub counts: BTreeMap<String, u32>,
    /// Total fleet cost: the objective value at the optimum.
    pub cost: f64,
}

/// Capacity planner for one plan configuration.
///
/// Construction validates the config eagerly; nothing is checked again at
/// solve time. A planner is immutable, so concurrent `run` calls on
/// separate planners (or the same one behind a shared reference) do not
/// interfere.
pub struct Planner {
    config: PlanConfig,
}

impl Planner {
    /// Validate the config and build a planner.
    pub fn new(config: PlanConfig) -> PlannerResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Solve for the cheapest feasible fleet.
    ///
    /// `Ok(None)` means proven infeasible: no mix of the configured types,
    /// saturated at their max counts, covers the workload. An unbounded or
    /// failed backend status is an error, never `None`.
    ///
    /// With `diagnostics` set, an optimal solve also prints the decision
    /// matrix and vector to stdout in the format of [`render_diagnostics`].
    pub fn run(&self, diagnostics: bool) -> PlannerResult<Option<Allocation>> {
        let Some(solved) = self.solve_raw()? else {
            return Ok(None);
        };

        if diagnostics {
            print!("{}", render_diagnostics(&solved.assignments, &solved.counts));
        }

        let counts: BTreeMap<String, u32> = self
            .config
            .gpu_info
            .keys()
            .cloned()
            .zip(solved.counts.iter().copied())
            .collect();

        Ok(Some(Allocation {
            counts,
            cost: solved.cost,
        }))
    }

    /// Slice, build, solve, and read back the raw decision variables.
    pub(crate) fn solve_raw(&self) -> PlannerResult<Option<SolvedDecisions>> {
        if self.config.gpu_info.is_empty() {
            debug!("no accelerator profiles configured, trivially infeasible");
            return Ok(None);
        }

        let slices = slice_workload(
            &self.config.workload_distribution,
            self.config.total_request_rate,
            self.config.slice_factor,
        );
        let profiles: Vec<&GpuProfile> = self.config.gpu_info.values().collect();

        let model = CapacityModel::build(&slices, &profiles);
        debug!(
            slices = slices.len(),
            types = profiles.len(),
            variables = model.num_variables(),
            constraints = model.num_constraints(),
            "capacity model built"
        );

        let CapacityModel {
            vars,
            assign,
            units,
            constraints,
            objective,
        } = model;

        let mut problem = vars.minimise(objective).using(default_solver);
        for constraint in constraints {
            problem = problem.with(constraint);
        }

        let solution = match problem.solve() {
            Ok(solution) => solution,
            Err(ResolutionError::Infeasible) => {
                info!("no feasible allocation under the configured unit limits");
                return Ok(None);
            }
            Err(ResolutionError::Unbounded) => return Err(PlannerError::Unbounded),
            Err(other) => return Err(PlannerError::Solver(other.to_string())),
        };

        let assignments: Vec<Vec<f64>> = assign
            .iter()
            .map(|row| row.iter().map(|&x| solution.value(x)).collect())
            .collect();

        let mut counts = Vec::with_capacity(units.len());
        for (t, &n) in units.iter().enumerate() {
            let raw = solution.value(n);
            let rounded = raw.round().max(0.0);
            if (raw - rounded).abs() > INTEGRALITY_WARN_TOLERANCE {
                warn!(type_index = t, raw, "unit count came back non-integral, rounding");
            }
            counts.push(rounded as u32);
        }

        let cost: f64 = profiles
            .iter()
            .zip(&counts)
            .map(|(profile, &count)| profile.cost * f64::from(count))
            .sum();

        info!(cost, "optimal allocation found");
        Ok(Some(SolvedDecisions {
            assignments,
            counts,
            cost,
        }))
    }
}

/// Raw decision variables read back from an optimal solve.
///
/// `assignments` rows follow slice emission order and its columns follow
/// profile iteration order; `counts` follows profile iteration order.
#[derive(Debug, Clone)]
pub(crate) struct SolvedDecisions {
    pub assignments: Vec<Vec<f64>>,
    pub counts: Vec<u32>,
    pub cost: f64,
}

/// Render the decision matrix and vector as label-delimited text.
///
/// Downstream tooling locates the two sections by matching the literal
/// `Decision Matrix:` and `Decision Vector:` labels and parses each
/// `[v1, v2, ...]` row, so both the labels and the row format are a
/// compatibility contract.
pub fn render_diagnostics(assignments: &[Vec<f64>], counts: &[u32]) -> String {
    let mut out = String::new();

    out.push_str("Decision Matrix:\n");
    for row in assignments {
        let cells: Vec<String> = row.iter().map(f64::to_string).collect();
        let _ = writeln!(out, "[{}]", cells.join(", "));
    }

    out.push_str("Decision Vector:\n");
    let cells: Vec<String> = counts.iter().map(u32::to_string).collect();
    let _ = writeln!(out, "[{}]", cells.join(", "));

    out
}
