use crate::Result;
use model::Snowflake;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub application_id: Snowflake,
    pub bot_token: String,
    pub guild_id: Option<Snowflake>,
}

impl Config {
    pub fn from_envvar() -> Result<Config> {
        Ok(envy::from_env()?)
    }
}
