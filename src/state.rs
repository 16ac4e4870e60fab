use crate::config::Config;
use crate::errors::Error;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AppState {
    pub client: riffs::Client,
}

impl AppState {
    /// # Errors
    /// If the environment holds an invalid configuration.
    pub fn new() -> Result<Self, Error> {
        Self::from_config(&Config::from_env()?)
    }

    /// # Errors
    /// If the http client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let reqwest = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let client =
            riffs::Client::new(config.base_url()?, reqwest).with_wallet_header(config.wallet_header);
        Ok(Self { client })
    }
}
