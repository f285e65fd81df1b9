use std::error::Error;

use async_trait::async_trait;

use crate::models::SalaryRange;
use crate::predictor::predict_salary;

/// Capability of a vacancy record to expose its salary bounds in rubles.
pub trait SalaryBounds {
    /// `None` when the record carries no salary or the salary is in a foreign currency
    fn rub_salary_range(&self) -> Option<SalaryRange>;

    fn predict_rub_salary(&self) -> Option<f64> {
        let range = self.rub_salary_range()?;
        predict_salary(range.from, range.to)
    }
}

/// Trait for retrieving every vacancy a job platform lists for a programming language
#[async_trait]
pub trait VacancyFetcher {
    type Vacancy: SalaryBounds + Send;
    type E: Error + Send + Sync + 'static;
    async fn fetch_vacancies(&self, language: &str) -> Result<Vec<Self::Vacancy>, Self::E>;
}
