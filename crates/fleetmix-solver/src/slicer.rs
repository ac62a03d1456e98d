//! Workload slicing.
//!
//! Decomposes the scaled workload matrix into equal-sized slices, the unit
//! of assignment granularity for the capacity model. Each cell (i, j) emits
//! exactly `slice_factor` slices carrying `cell_workload / slice_factor`
//! each, in row-major (i, j, replica) order. The order is load-bearing: row
//! k of the decision matrix corresponds to slice k of this sequence.

/// An equal-sized fragment of one workload cell's request rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub row: usize,
    pub col: usize,
    /// Absolute request rate carried by this slice.
    pub workload: f64,
}

/// Split every workload cell into `slice_factor` equal slices.
///
/// Inputs are assumed validated: callers reject non-positive rates and a
/// zero slice factor before reaching this point.
pub fn slice_workload(
    workload_distribution: &[Vec<f64>],
    total_request_rate: f64,
    slice_factor: u32,
) -> Vec<Slice> {
    let cells: usize = workload_distribution.iter().map(Vec::len).sum();
    let mut slices = Vec::with_capacity(cells * slice_factor as usize);

    for (row, fractions) in workload_distribution.iter().enumerate() {
        for (col, &fraction) in fractions.iter().enumerate() {
            let workload = fraction * total_request_rate / f64::from(slice_factor);
            for _ in 0..slice_factor {
                slices.push(Slice { row, col, workload });
            }
        }
    }

    slices
}
