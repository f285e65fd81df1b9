pub mod api;
pub mod models;
pub mod predictor;
pub mod statistics;

pub use models::SalaryRange;
pub use statistics::LanguageStatistics;
