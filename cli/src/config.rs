use vacancy_scraper::superjob::Credentials;

use crate::Error;

pub const DEFAULT_LANGUAGES: [&str; 14] = [
    "TypeScript",
    "Swift",
    "Scala",
    "Objective-C",
    "Shell",
    "Go",
    "C",
    "C#",
    "C++",
    "PHP",
    "Ruby",
    "Python",
    "Java",
    "JavaScript",
];

const SECRET_KEY: &str = "SUPERJOB_SECRET_KEY";
const LOGIN: &str = "SUPERJOB_LOGIN";
const APP_ID: &str = "SUPERJOB_APP_ID";
const PASSWORD: &str = "SUPERJOB_PASSWORD";

/// Read superjob credentials from the process environment
pub fn superjob_credentials() -> Result<Credentials, Error> {
    superjob_credentials_from(|name| std::env::var(name).ok())
}

pub fn superjob_credentials_from<F>(lookup: F) -> Result<Credentials, Error>
where
    F: Fn(&'static str) -> Option<String>,
{
    let var = |name: &'static str| lookup(name).ok_or(Error::MissingVariable(name));
    Ok(Credentials {
        login: var(LOGIN)?,
        password: var(PASSWORD)?,
        app_id: var(APP_ID)?,
        secret_key: var(SECRET_KEY)?,
    })
}

/// Languages given on the command line, or the default list
pub fn languages(requested: Vec<String>) -> Vec<String> {
    if requested.is_empty() {
        DEFAULT_LANGUAGES.into_iter().map(String::from).collect()
    } else {
        requested
    }
}
