//! Capacity-plan configuration parser.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// A capacity plan: the traffic forecast plus the candidate accelerators.
///
/// `workload_distribution[i][j]` is the fraction of `total_request_rate`
/// attributable to request-size category (i, j); rows and columns typically
/// bucket input and output length. Every profile's throughput matrix must
/// have the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub workload_distribution: Vec<Vec<f64>>,
    pub total_request_rate: f64,
    /// Candidate accelerator types, keyed by type identifier (e.g. "A10G").
    /// Ordered map: iteration order fixes result and diagnostics ordering.
    pub gpu_info: BTreeMap<String, GpuProfile>,
    /// How many equal slices each workload cell is split into before
    /// assignment. Higher values let the optimizer split one category's
    /// traffic more finely across types.
    pub slice_factor: u32,
}

/// One candidate accelerator type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuProfile {
    /// Cost per provisioned unit over the planning horizon.
    pub cost: f64,
    /// Requests per unit time one unit serves for each category. Zero means
    /// the type cannot serve that category at all.
    pub tputs: Vec<Vec<f64>>,
    /// Upper bound on provisioned units. Absent means unconstrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u32>,
}

impl PlanConfig {
    /// Load a plan from a `.json` or `.toml` file, dispatching on extension.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: display,
                source,
            }),
            Some("toml") => toml::from_str(&content).map_err(|source| ConfigError::Toml {
                path: display,
                source,
            }),
            _ => Err(ConfigError::UnsupportedFormat(display)),
        }
    }

    /// (rows, cols) of the workload matrix.
    pub fn shape(&self) -> (usize, usize) {
        let rows = self.workload_distribution.len();
        let cols = self
            .workload_distribution
            .first()
            .map_or(0, Vec::len);
        (rows, cols)
    }

    /// Check shapes, signs, and finiteness. Nothing is coerced: the first
    /// violation is returned as a descriptive error.
    pub fn validate(&self) -> ConfigResult<()> {
        let (rows, cols) = self.shape();
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyWorkload);
        }

        for (row, fractions) in self.workload_distribution.iter().enumerate() {
            if fractions.len() != cols {
                return Err(ConfigError::RaggedWorkload {
                    row,
                    got: fractions.len(),
                    expected: cols,
                });
            }
            for (col, &value) in fractions.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::BadWorkloadCell { row, col, value });
                }
            }
        }

        if !self.total_request_rate.is_finite() || self.total_request_rate <= 0.0 {
            return Err(ConfigError::BadRequestRate(self.total_request_rate));
        }

        if self.slice_factor == 0 {
            return Err(ConfigError::ZeroSliceFactor);
        }

        for (name, profile) in &self.gpu_info {
            if !profile.cost.is_finite() || profile.cost < 0.0 {
                return Err(ConfigError::BadCost {
                    name: name.clone(),
                    cost: profile.cost,
                });
            }

            if profile.tputs.len() != rows {
                return Err(ConfigError::TputRowCountMismatch {
                    name: name.clone(),
                    got: profile.tputs.len(),
                    rows,
                    cols,
                });
            }
            for (row, tputs) in profile.tputs.iter().enumerate() {
                if tputs.len() != cols {
                    return Err(ConfigError::TputShapeMismatch {
                        name: name.clone(),
                        row,
                        got: tputs.len(),
                        rows,
                        cols,
                    });
                }
                for (col, &value) in tputs.iter().enumerate() {
                    if !value.is_finite() || value < 0.0 {
                        return Err(ConfigError::BadTputCell {
                            name: name.clone(),
                            row,
                            col,
                            value,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
