//! Benjamini-Hochberg false-discovery-rate correction.

use std::cmp::Ordering;

use crate::error::EngineError;

/// Adjust a batch of raw p-values with the Benjamini-Hochberg step-up
/// procedure.
///
/// The output is index-aligned with the input. Each adjusted value is
/// `min` over ranks at or above the value's own of `p * m / rank`, capped
/// at 1, which makes the adjusted values monotone when revisited in raw
/// ascending order and never smaller than the raw value.
///
/// The correction is a joint operation: its strength depends on the total
/// number of tests in the batch, so it must receive every raw p-value of
/// one enrichment call at once. An empty batch yields an empty batch.
pub fn benjamini_hochberg(p_values: &[f64]) -> Result<Vec<f64>, EngineError> {
    let m = p_values.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    for (index, &p) in p_values.iter().enumerate() {
        if !(0.0..=1.0).contains(&p) {
            return Err(EngineError::InvalidPValue { index, p });
        }
    }

    let mut order: Vec<usize> = (0..m).collect();
    order.sort_by(|&a, &b| {
        p_values[a]
            .partial_cmp(&p_values[b])
            .unwrap_or(Ordering::Equal)
    });

    // Walk from the largest p-value down, carrying the running minimum so
    // the adjusted values stay monotone in rank order.
    let mut adjusted = vec![0.0; m];
    let mut running_min = 1.0_f64;
    for rank in (0..m).rev() {
        let index = order[rank];
        let candidate = (p_values[index] * m as f64 / (rank + 1) as f64).min(1.0);
        running_min = running_min.min(candidate);
        adjusted[index] = running_min;
    }

    Ok(adjusted)
}
