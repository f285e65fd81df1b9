/// Estimate a single salary value from a pair of bounds.
///
/// The mean is used when both bounds are known. A lone lower bound is raised
/// by 20%, a lone upper bound is lowered by 20%.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}
