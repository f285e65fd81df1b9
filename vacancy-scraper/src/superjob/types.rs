use salary_analyzer::api::SalaryBounds;
use salary_analyzer::SalaryRange;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vacancy {
    pub id: u64,
    pub profession: String,
    pub payment_from: Option<f64>,
    pub payment_to: Option<f64>,
    pub currency: Option<String>,
}

/// SuperJob reports an unspecified payment bound as 0
fn specified(payment: Option<f64>) -> Option<f64> {
    payment.filter(|&amount| amount > 0.0)
}

impl SalaryBounds for Vacancy {
    fn rub_salary_range(&self) -> Option<SalaryRange> {
        if self.currency.as_deref() != Some("rub") {
            return None;
        }
        Some(SalaryRange::new(
            specified(self.payment_from),
            specified(self.payment_to),
        ))
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) objects: Vec<Vacancy>,
    pub(crate) total: u32,
    #[serde(default)]
    pub(crate) more: bool,
}
