//! Deterministic point capping for large scatter charts.

/// Cap on points per scatter chart before sampling kicks in.
pub const MAX_CHART_POINTS: usize = 3000;

/// Evenly-spaced stride sample. Returns the input unchanged when it is at or
/// under `cap`, and exactly `cap` items otherwise. Deterministic so repeated
/// renders of the same subset plot the same points.
pub fn stride_sample<T: Clone>(items: &[T], cap: usize) -> Vec<T> {
    if items.len() <= cap {
        return items.to_vec();
    }
    if cap == 0 {
        return Vec::new();
    }
    (0..cap)
        .map(|i| items[i * items.len() / cap].clone())
        .collect()
}
