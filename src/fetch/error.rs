use reqwest::StatusCode;

#[derive(Debug)]
pub enum FetchError {
    InvalidUrl(String),
    Timeout { url: String },
    Http(reqwest::Error),
    Status { url: String, status: StatusCode },
    #[cfg(test)]
    MockMissing(String),
}

impl FetchError {
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout { url: url.to_string() }
        } else {
            FetchError::Http(err)
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::InvalidUrl(url) => write!(f, "invalid url: {url}"),
            FetchError::Timeout { url } => write!(f, "request timed out: {url}"),
            FetchError::Http(err) => write!(f, "http error: {err}"),
            FetchError::Status { url, status } => write!(f, "GET {url} returned {status}"),
            #[cfg(test)]
            FetchError::MockMissing(url) => write!(f, "no mock response for {url}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(err) => Some(err),
            _ => None,
        }
    }
}
