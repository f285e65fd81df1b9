use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use salary_analyzer::api::VacancyFetcher;
use serde::Serialize;

use crate::headhunter::types::{ApiResponse, Vacancy};
use crate::headhunter::{Error, Result};

const API_URL: &str = "https://api.hh.ru";
const AGENT: &str = concat!("vacancy-scraper/", env!("CARGO_PKG_VERSION"));
const PROGRAMMER_SPECIALIZATION: &str = "1.221";
const MOSCOW_AREA: u32 = 1;
const PERIOD_DAYS: u32 = 30;

#[derive(Serialize, Debug)]
struct SearchParams<'a> {
    specialization: &'static str,
    area: u32,
    period: u32,
    text: &'a str,
    page: u32,
}

/// HeadHunter vacancy search, no authorization needed
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self::with_base_url(reqwest::Client::new(), API_URL)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    async fn fetch_page(&self, text: &str, page: u32) -> Result<ApiResponse> {
        let url = format!("{}/vacancies", self.base_url);
        let params = SearchParams {
            specialization: PROGRAMMER_SPECIALIZATION,
            area: MOSCOW_AREA,
            period: PERIOD_DAYS,
            text,
            page,
        };
        log::debug!("requesting vacancies from hh, page: {}, text: {}", page, text);
        let resp = self
            .client
            .get(&url)
            .header(USER_AGENT, AGENT)
            .query(&params)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve vacancies for page: {}, text: {}, status: {}, error resp body: {:?}",
                page,
                text,
                status,
                error_body,
            );
            return Err(Error::RequestNotOk(url, status));
        }
        let page_data: ApiResponse = resp.json().await?;
        log::debug!(
            "retrieved page {} of {} for text: {}, found: {}",
            page,
            page_data.pages,
            text,
            page_data.found
        );
        Ok(page_data)
    }
}

#[async_trait]
impl VacancyFetcher for Client {
    type Vacancy = Vacancy;
    type E = Error;

    async fn fetch_vacancies(&self, language: &str) -> Result<Vec<Vacancy>> {
        let text = crate::search_text(language);
        let mut vacancies = Vec::new();
        let mut page = 0;
        loop {
            let page_data = self.fetch_page(&text, page).await?;
            vacancies.extend(page_data.items);
            if page + 1 >= page_data.pages {
                break;
            }
            page += 1;
        }
        log::info!("gathered {} hh vacancies for {}", vacancies.len(), language);
        Ok(vacancies)
    }
}
