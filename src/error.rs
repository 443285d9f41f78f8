use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to the catalog server failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog server answered {status} with a body that is not valid JSON: {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },

    #[error("catalog server reported success without a product id")]
    MissingId,

    #[error(transparent)]
    Templating(#[from] askama::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
