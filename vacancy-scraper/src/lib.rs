pub mod headhunter;
pub mod superjob;

/// Search phrase both platforms are queried with
pub(crate) fn search_text(language: &str) -> String {
    format!("Программист {}", language)
}
