use serde::{Deserialize, Serialize};

use crate::api::SalaryBounds;

/// Vacancy counts and average salary for one programming language on one platform
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LanguageStatistics {
    pub language: String,
    pub vacancies_found: usize,
    /// number of vacancies a salary estimate could be derived from
    pub vacancies_processed: usize,
    /// truncated mean of the estimates, `None` if no vacancy was processed
    pub average_salary: Option<u64>,
}

impl LanguageStatistics {
    pub fn from_vacancies<V: SalaryBounds>(language: &str, vacancies: &[V]) -> Self {
        let salaries = vacancies
            .iter()
            .filter_map(|vacancy| vacancy.predict_rub_salary())
            .collect::<Vec<_>>();
        log::debug!(
            "{}: {} of {} vacancies carry a rub salary",
            language,
            salaries.len(),
            vacancies.len()
        );
        Self {
            language: language.to_owned(),
            vacancies_found: vacancies.len(),
            vacancies_processed: salaries.len(),
            average_salary: average(&salaries),
        }
    }
}

fn average(salaries: &[f64]) -> Option<u64> {
    if salaries.is_empty() {
        return None;
    }
    let mean = salaries.iter().sum::<f64>() / salaries.len() as f64;
    Some(mean.trunc() as u64)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::SalaryRange;

    struct Posting(Option<SalaryRange>);

    impl SalaryBounds for Posting {
        fn rub_salary_range(&self) -> Option<SalaryRange> {
            self.0
        }
    }

    fn exact(salary: f64) -> Posting {
        Posting(Some(SalaryRange::new(Some(salary), Some(salary))))
    }

    #[test]
    fn test_no_vacancies() {
        let stats = LanguageStatistics::from_vacancies::<Posting>("Go", &[]);
        assert_eq!(stats.vacancies_found, 0);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, None);
    }

    #[test]
    fn test_nothing_processed_has_no_average() {
        let vacancies = vec![Posting(None), Posting(Some(SalaryRange::default()))];
        let stats = LanguageStatistics::from_vacancies("Shell", &vacancies);
        assert_eq!(stats.vacancies_found, 2);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, None);
    }

    #[test]
    fn test_average_is_truncated() {
        let stats = LanguageStatistics::from_vacancies("Rust", &[exact(100.0), exact(101.0)]);
        assert_eq!(stats.average_salary, Some(100));
    }

    #[test]
    fn test_counts_ignore_order() {
        let forward = vec![exact(90_000.0), Posting(None), exact(110_000.0)];
        let backward = vec![exact(110_000.0), Posting(None), exact(90_000.0)];
        let a = LanguageStatistics::from_vacancies("Java", &forward);
        let b = LanguageStatistics::from_vacancies("Java", &backward);
        assert_eq!(a, b);
        assert_eq!(a.vacancies_found, 3);
        assert_eq!(a.vacancies_processed, 2);
        assert_eq!(a.average_salary, Some(100_000));
    }

    #[test]
    fn test_serializes_missing_average_as_null() {
        let stats = LanguageStatistics::from_vacancies::<Posting>("C", &[]);
        let json = serde_json::to_value(&stats).expect("serializable");
        assert_eq!(json["language"], "C");
        assert!(json["average_salary"].is_null());
    }
}
