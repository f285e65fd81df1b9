use salary_analyzer::api::VacancyFetcher;
use salary_analyzer::LanguageStatistics;

/// Fetch and aggregate vacancies for every language, one language at a time.
/// The first failing fetch aborts the whole collection.
pub async fn collect_statistics<F>(
    fetcher: &F,
    languages: &[String],
) -> Result<Vec<LanguageStatistics>, F::E>
where
    F: VacancyFetcher + Sync,
{
    let mut statistics = Vec::with_capacity(languages.len());
    for language in languages {
        let vacancies = fetcher.fetch_vacancies(language).await?;
        let language_statistics = LanguageStatistics::from_vacancies(language, &vacancies);
        log::info!(
            "{}: found {}, processed {}, average {:?}",
            language,
            language_statistics.vacancies_found,
            language_statistics.vacancies_processed,
            language_statistics.average_salary
        );
        statistics.push(language_statistics);
    }
    Ok(statistics)
}
