use serde::{Deserialize, Serialize};

/// Lower and upper salary bound, either of them may be missing
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct SalaryRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl SalaryRange {
    pub fn new(from: Option<f64>, to: Option<f64>) -> Self {
        Self { from, to }
    }
}
