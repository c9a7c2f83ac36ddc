use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid target URL: {0}.")]
    InvalidTarget(#[from] url::ParseError),

    #[error("Request failed: {0}.")]
    Transport(#[from] reqwest::Error),
}
