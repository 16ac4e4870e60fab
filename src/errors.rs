#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] envy::Error),
    #[error(transparent)]
    ParseUrl(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] riffs::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl Error {
    /// Api failures were already shown to the user as a toast.
    #[must_use]
    pub fn is_notified(&self) -> bool {
        matches!(self, Error::Api(_))
    }
}
