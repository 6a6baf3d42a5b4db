//! k-th nearest neighbor distance as an outlier score.
//!
//! For one-dimensional data the distance between two points is
//! `|x_i - x_j|`. Each row of the distance matrix keeps the point's
//! distance to itself (0), so `k = 1` scores every point 0 and `k = 2` is
//! the distance to the closest other point.

use tracing::trace;

use outlier_core::errors::DetectionError;

use super::types::KnnScore;
use crate::stats::summary::ensure_finite;

/// Full pairwise distance matrix, `matrix[i][j] = |values[i] - values[j]|`.
pub fn distance_matrix(values: &[f64]) -> Vec<Vec<f64>> {
    values
        .iter()
        .map(|&a| values.iter().map(|&b| (a - b).abs()).collect())
        .collect()
}

/// Score every point by the distance to its k-th nearest neighbor.
///
/// `k` is 1-based and counts the point itself. Scores are returned in
/// index order.
///
/// # Errors
/// `InvalidNeighborOrder` unless `1 <= k <= values.len()`; `NonFinite` if a
/// value is NaN or infinite; `DistanceOverflow` if `max - min` is not
/// representable.
pub fn score(values: &[f64], k: usize) -> Result<Vec<KnnScore>, DetectionError> {
    let n = values.len();
    if k == 0 || k > n {
        return Err(DetectionError::InvalidNeighborOrder { k, n });
    }
    ensure_finite(values)?;

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(max - min).is_finite() {
        return Err(DetectionError::DistanceOverflow { min, max });
    }

    let scores = distance_matrix(values)
        .into_iter()
        .enumerate()
        .map(|(index, mut row)| {
            row.sort_by(f64::total_cmp);
            let score = row[k - 1];
            trace!(index, score, "knn row scored");
            KnnScore {
                index,
                value: values[index],
                score,
            }
        })
        .collect();

    Ok(scores)
}

/// Scores ordered from most to least isolated; ties keep index order.
pub fn rank_by_score(scores: &[KnnScore]) -> Vec<KnnScore> {
    let mut ranked = scores.to_vec();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
    ranked
}
