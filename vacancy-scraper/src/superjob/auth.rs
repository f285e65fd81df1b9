use std::fmt;

use serde::{Deserialize, Serialize};

use crate::superjob::{Error, Result};

/// Account and application secrets exchanged for an access token
#[derive(Clone)]
pub struct Credentials {
    pub login: String,
    pub password: String,
    pub app_id: String,
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"***")
            .field("app_id", &self.app_id)
            .field("secret_key", &"***")
            .finish()
    }
}

#[derive(Serialize, Debug)]
struct PasswordGrant<'a> {
    login: &'a str,
    password: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

pub async fn authorize(
    client: &reqwest::Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken> {
    let url = format!("{}/oauth2/password/", base_url);
    let params = PasswordGrant {
        login: &credentials.login,
        password: &credentials.password,
        client_id: &credentials.app_id,
        client_secret: &credentials.secret_key,
    };
    log::debug!("authorizing at superjob as {}", credentials.login);
    let resp = client.get(&url).query(&params).send().await?;
    let status = resp.status();
    if !status.is_success() {
        let error_body = resp.text().await;
        log::error!(
            "superjob authorization failed, status: {}, error resp body: {:?}",
            status,
            error_body
        );
        return Err(Error::Unauthorized(status));
    }
    let token: AccessToken = resp.json().await?;
    log::info!("authorized at superjob, token expires in: {:?}s", token.expires_in);
    Ok(token)
}
