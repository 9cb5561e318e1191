use reqwest::StatusCode;
use thiserror::Error;

/// Error response whose body was not JSON.
///
/// PowerDNS reports most failures as JSON bodies, which the client hands
/// back as ordinary data. This error only covers 4xx/5xx responses whose
/// body fails to decode, such as HTML error pages from a proxy in front of
/// the server.
#[derive(Error, Debug)]
#[error("PowerDNS API error: {status} - {body}")]
pub struct ApiError {
    status: StatusCode,
    body: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// The status code of the failed response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The raw, undecodable response body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    PowerDns(#[from] ApiError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
    #[error("response missing field {0:?}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
