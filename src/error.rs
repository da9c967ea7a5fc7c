use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("you're not logged in")]
    NotLoggedIn,

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned status: {0}")]
    Api(String),

    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
