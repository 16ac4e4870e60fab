use serde::Deserialize;
use url::Url;

use crate::errors::Error;

/// Reads `NEXT_PUBLIC_API_URL` and `NEXT_PUBLIC_API_WALLET_HEADER`.
pub const ENV_PREFIX: &str = "NEXT_PUBLIC_API_";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub url: Option<Url>,
    #[serde(default)]
    pub wallet_header: bool,
}

impl Config {
    /// # Errors
    /// If a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(std::env::vars())
    }

    /// Empty variables count as unset.
    ///
    /// # Errors
    /// If a variable is set but cannot be parsed.
    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars = vars.into_iter().filter(|(_, value)| !value.is_empty());
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }

    /// The configured url or [`riffs::DEFAULT_BASE_URL`].
    ///
    /// # Errors
    /// Never for the built-in default.
    pub fn base_url(&self) -> Result<Url, Error> {
        match &self.url {
            Some(url) => Ok(url.clone()),
            None => Ok(Url::parse(riffs::DEFAULT_BASE_URL)?),
        }
    }
}
