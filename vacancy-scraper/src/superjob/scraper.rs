use async_trait::async_trait;
use salary_analyzer::api::VacancyFetcher;
use serde::Serialize;

use crate::superjob::auth::{authorize, Credentials};
use crate::superjob::types::{ApiResponse, Vacancy};
use crate::superjob::{Error, Result};

const API_URL: &str = "https://api.superjob.ru/2.0";
const PROGRAMMING_CATALOGUE: u32 = 48;
const MOSCOW_TOWN: u32 = 4;
const PAGE_SIZE: u32 = 100;

#[derive(Serialize, Debug)]
struct SearchParams<'a> {
    keyword: &'a str,
    town: u32,
    catalogues: u32,
    page: u32,
    count: u32,
}

/// Authorized SuperJob vacancy search
pub struct Client {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
    access_token: String,
}

impl Client {
    pub async fn connect(credentials: &Credentials) -> Result<Self> {
        Self::connect_to(reqwest::Client::new(), API_URL, credentials).await
    }

    /// Authorize against the api at `base_url` and keep the token for later searches
    pub async fn connect_to(
        client: reqwest::Client,
        base_url: &str,
        credentials: &Credentials,
    ) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let token = authorize(&client, &base_url, credentials).await?;
        Ok(Self {
            client,
            base_url,
            secret_key: credentials.secret_key.clone(),
            access_token: token.access_token,
        })
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<ApiResponse> {
        let url = format!("{}/vacancies/", self.base_url);
        let params = SearchParams {
            keyword,
            town: MOSCOW_TOWN,
            catalogues: PROGRAMMING_CATALOGUE,
            page,
            count: PAGE_SIZE,
        };
        log::debug!("requesting vacancies from superjob, page: {}, keyword: {}", page, keyword);
        let resp = self
            .client
            .get(&url)
            .header("X-Api-App-Id", &self.secret_key)
            .bearer_auth(&self.access_token)
            .query(&params)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve vacancies for page: {}, keyword: {}, status: {}, error resp body: {:?}",
                page,
                keyword,
                status,
                error_body,
            );
            return Err(Error::RequestNotOk(url, status));
        }
        let page_data: ApiResponse = resp.json().await?;
        log::debug!(
            "retrieved page {} for keyword: {}, total: {}, more: {}",
            page,
            keyword,
            page_data.total,
            page_data.more
        );
        Ok(page_data)
    }
}

#[async_trait]
impl VacancyFetcher for Client {
    type Vacancy = Vacancy;
    type E = Error;

    async fn fetch_vacancies(&self, language: &str) -> Result<Vec<Vacancy>> {
        let keyword = crate::search_text(language);
        let mut vacancies = Vec::new();
        let mut page = 0;
        loop {
            let page_data = self.fetch_page(&keyword, page).await?;
            vacancies.extend(page_data.objects);
            let pages = page_data.total.div_ceil(PAGE_SIZE);
            if page + 1 >= pages {
                break;
            }
            page += 1;
        }
        log::info!("gathered {} superjob vacancies for {}", vacancies.len(), language);
        Ok(vacancies)
    }
}
