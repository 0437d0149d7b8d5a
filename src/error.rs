use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("request to {path} failed: {source}")]
    Network {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {path} failed with status {status}")]
    Fetch { path: String, status: StatusCode },

    #[error("could not parse date value: {value}")]
    DateParse { value: String },

    #[error("could not serialize calendar: {0}")]
    Serialization(String),

    #[error("no team with id {team_id}")]
    TeamNotFound { team_id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
