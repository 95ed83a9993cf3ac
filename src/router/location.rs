use std::fmt;

use thiserror::Error;
use url::form_urlencoded;
use url::Url;

/// Origin used to parse client paths; never shown or requested.
const ORIGIN: &str = "http://shop.local/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("Navigation target '{0}' is not an absolute path")]
    NotAbsolute(String),
    #[error("Navigation target '{target}' is invalid: {reason}")]
    Invalid { target: String, reason: String },
}

/// A client path plus its query parameters, e.g. `/artikelU?id=301`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

impl Location {
    /// A location without query parameters.
    pub fn at(path: &str) -> Self {
        Self {
            path: path.to_string(),
            query: Vec::new(),
        }
    }

    pub fn parse(target: &str) -> Result<Self, LocationError> {
        if !target.starts_with('/') || target.starts_with("//") {
            return Err(LocationError::NotAbsolute(target.to_string()));
        }
        let invalid = |reason: String| LocationError::Invalid {
            target: target.to_string(),
            reason,
        };
        let origin = Url::parse(ORIGIN).map_err(|e| invalid(e.to_string()))?;
        let url = origin.join(target).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            path: url.path().to_string(),
            query: url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of a query parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// This location with `name=value` appended to the query.
    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query.push((name.to_string(), value.into()));
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if self.query.is_empty() {
            return Ok(());
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.query)
            .finish();
        write!(f, "?{query}")
    }
}

/// Navigation target for `path` carrying an `id` parameter.
pub fn with_id(path: &str, id: u64) -> String {
    format!("{path}?{}={id}", super::route::ID_PARAM)
}
