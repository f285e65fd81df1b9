mod collect;
mod config;
mod report;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use salary_analyzer::LanguageStatistics;
use serde::Serialize;
use thiserror::Error;
use vacancy_scraper::{headhunter, superjob};

use crate::collect::collect_statistics;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Environment variable '{0}' is not set")]
    MissingVariable(&'static str),
    #[error("HeadHunter: {0}")]
    HeadHunter(#[from] headhunter::Error),
    #[error("SuperJob: {0}")]
    SuperJob(#[from] superjob::Error),
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Site {
    Superjob,
    Headhunter,
}

impl Site {
    fn title(&self) -> &'static str {
        match self {
            Site::Superjob => "SuperJob Moscow",
            Site::Headhunter => "HeadHunter Moscow",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Table,
    Json,
}

/// Vacancy counts and average salaries per programming language in Moscow
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job platforms to query, all of them when omitted
    #[clap(long, value_enum)]
    site: Vec<Site>,

    /// Programming languages to report on, a built-in list when omitted
    #[clap(long)]
    language: Vec<String>,

    #[clap(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Serialize)]
struct Report {
    title: &'static str,
    statistics: Vec<LanguageStatistics>,
}

/// Superjob first, headhunter second, each at most once
fn selected_sites(requested: &[Site]) -> Vec<Site> {
    [Site::Superjob, Site::Headhunter]
        .into_iter()
        .filter(|site| requested.is_empty() || requested.contains(site))
        .collect()
}

async fn collect_report(site: Site, languages: &[String]) -> Result<Report, Error> {
    log::info!("collecting statistics from {}", site.title());
    let statistics = match site {
        Site::Superjob => {
            let credentials = config::superjob_credentials()?;
            let client = superjob::Client::connect(&credentials).await?;
            collect_statistics(&client, languages).await?
        }
        Site::Headhunter => {
            let client = headhunter::Client::new();
            collect_statistics(&client, languages).await?
        }
    };
    Ok(Report {
        title: site.title(),
        statistics,
    })
}

async fn run(args: Cli) -> Result<(), Error> {
    let languages = config::languages(args.language);
    let mut reports = Vec::new();
    for site in selected_sites(&args.site) {
        reports.push(collect_report(site, &languages).await?);
    }
    match args.format {
        Format::Table => {
            for site_report in &reports {
                println!("{}", report::render_table(site_report.title, &site_report.statistics));
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        log::error!("run failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
