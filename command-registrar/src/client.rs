use crate::error::{Error, Result};
use crate::validate;
use model::command::{Command, RegisteredCommand};
use model::Snowflake;
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;

const API_BASE: &str = "https://discord.com/api/v10";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Guild(Snowflake),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Guild(guild_id) => write!(f, "guild {}", guild_id),
        }
    }
}

pub struct Registrar {
    application_id: Snowflake,
    token: String,
    http_client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct RateLimitResponse {
    retry_after: f64,
}

impl Registrar {
    pub fn new(application_id: Snowflake, token: String) -> Registrar {
        Registrar {
            application_id,
            token,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn new_with_client(
        application_id: Snowflake,
        token: String,
        http_client: reqwest::Client,
    ) -> Registrar {
        Registrar {
            application_id,
            token,
            http_client,
        }
    }

    /// Overwrites the scope's entire command set with the given catalog.
    /// Commands absent from the catalog become uninvocable. The registry
    /// serializes writes per scope, so concurrent publishes to the same
    /// scope are last-writer-wins.
    ///
    /// The catalog is validated first; any violation aborts the publish
    /// before a request is made.
    pub async fn publish(
        &self,
        catalog: &[Command],
        scope: Scope,
    ) -> Result<Vec<RegisteredCommand>> {
        let violations = validate::validate(catalog);
        if !violations.is_empty() {
            return Error::Validation(violations).into();
        }

        let url = match scope {
            Scope::Global => format!("{}/applications/{}/commands", API_BASE, self.application_id),
            Scope::Guild(guild_id) => format!(
                "{}/applications/{}/guilds/{}/commands",
                API_BASE, self.application_id, guild_id
            ),
        };

        let res = self
            .http_client
            .put(url)
            .header("Authorization", format!("Bot {}", self.token))
            .json(&catalog)
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            Ok(res.json().await?)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            let body: RateLimitResponse = res.json().await?;
            Error::RateLimited {
                retry_after: body.retry_after,
            }
            .into()
        } else {
            let body = res.text().await?;
            Error::Response { status, body }.into()
        }
    }
}
