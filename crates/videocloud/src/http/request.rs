//! Request description handed to the [`Connection`](super::Connection).

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};

use crate::error::{Error, InvalidInputError};

/// Request parameters: the query string of a GET, the JSON body otherwise.
pub type Params = Map<String, Value>;

/// One HTTP call: verb, absolute URL, header lines and parameters.
///
/// Headers are kept as `"Name: value"` lines in the order given and are
/// applied verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub headers: Vec<String>,
    pub params: Params,
}

impl RequestSpec {
    /// Create a request with no headers and no parameters.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            params: Params::new(),
        }
    }

    /// Append a `"Name: value"` header line.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.headers.push(line.into());
        self
    }

    /// Replace the parameters.
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Returns true if the parameters travel in the query string.
    pub fn params_in_query(&self) -> bool {
        self.method == Method::GET
    }

    /// Parse the header lines into a map, preserving repeated names.
    pub(crate) fn header_map(&self) -> Result<HeaderMap, Error> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for line in &self.headers {
            let (name, value) = parse_header_line(line)?;
            map.append(name, value);
        }
        Ok(map)
    }

    /// Render the parameters as query pairs.
    ///
    /// Strings go in verbatim, numbers and booleans as their JSON text,
    /// nested arrays and objects as compact JSON. `null` values are left out.
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .filter_map(|(key, value)| {
                let rendered = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), rendered))
            })
            .collect()
    }

    /// Encode the parameters as a JSON body, or `None` if there are none.
    pub(crate) fn json_body(&self) -> Result<Option<Vec<u8>>, Error> {
        if self.params.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::to_vec(&self.params)?))
    }
}

fn parse_header_line(line: &str) -> Result<(HeaderName, HeaderValue), Error> {
    let invalid = |reason: &str| -> Error {
        InvalidInputError::Header {
            value: line.to_string(),
            reason: reason.to_string(),
        }
        .into()
    };

    let (name, value) = line
        .split_once(':')
        .ok_or_else(|| invalid("expected 'Name: value'"))?;

    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|_| invalid("invalid header name"))?;
    let value =
        HeaderValue::from_str(value.trim()).map_err(|_| invalid("invalid header value"))?;

    Ok((name, value))
}
