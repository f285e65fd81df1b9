use salary_analyzer::api::SalaryBounds;
use salary_analyzer::SalaryRange;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
    pub gross: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vacancy {
    pub id: String,
    pub name: String,
    pub salary: Option<Salary>,
}

impl SalaryBounds for Vacancy {
    fn rub_salary_range(&self) -> Option<SalaryRange> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some("RUR") {
            return None;
        }
        Some(SalaryRange::new(salary.from, salary.to))
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) items: Vec<Vacancy>,
    pub(crate) pages: u32,
    #[serde(default)]
    pub(crate) found: u32,
}
