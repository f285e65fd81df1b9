pub mod auth;
pub mod scraper;
pub mod types;

use reqwest::StatusCode;
use thiserror::Error;

pub use auth::Credentials;
pub use scraper::Client;

type Result<T> = std::result::Result<T, Error>;
#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to fetch vacancies from: '{0}', status: {1}")]
    RequestNotOk(String, StatusCode),
    #[error("Authorization rejected, status: {0}")]
    Unauthorized(StatusCode),
}
