use std::sync::Arc;

use crate::http::headers::HeaderSet;

/// HTTP request methods.
///
/// `UNKNOWN` stands in for any token the parser does not recognize; such
/// requests still go through route matching and are rejected there unless a
/// route accepts any method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Unrecognized method token
    UNKNOWN,
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
}

impl Method {
    /// Maps a request-line method token onto the enum.
    ///
    /// Matching is case-sensitive, as HTTP methods are; anything not in the
    /// closed set above maps to `UNKNOWN`.
    ///
    /// # Example
    ///
    /// ```
    /// # use wicket::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::UNKNOWN);
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            _ => Method::UNKNOWN,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::UNKNOWN => "UNKNOWN",
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }
}

/// The transient state of the single in-flight request.
///
/// Holds the parsed method, the raw (still percent-encoded) path and the
/// header values captured for this request. Exactly one context exists at a
/// time; it is created at the start of `Processor::process` and dropped at
/// the end of that call, releasing every captured value with it.
pub struct RequestContext {
    method: Method,
    path: String,
    filter: Arc<HeaderSet>,
    values: Vec<Option<String>>,
}

impl RequestContext {
    pub fn new(method: Method, path: String, filter: Arc<HeaderSet>) -> Self {
        let values = vec![None; filter.len()];
        Self {
            method,
            path,
            filter,
            values,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The request path exactly as it appeared on the request line, still
    /// percent-encoded. Route matching runs against this form.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Retrieves a captured header value by name.
    ///
    /// The name must match a registered one exactly (matching is
    /// case-sensitive); a header the client did not send returns `None`.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        let index = self.filter.index_of(name)?;
        self.values[index].as_deref()
    }

    /// The declared body length, from the captured `Content-Length` value.
    ///
    /// Returns 0 when the header was not captured or does not parse. The
    /// name `Content-Length` must be in the registered header set for the
    /// value to have been captured at all.
    pub fn content_length(&self) -> u64 {
        self.header_value("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    pub(crate) fn capture_index(&self, name: &str) -> Option<usize> {
        self.filter.index_of(name)
    }

    pub(crate) fn assign(&mut self, index: usize, value: String) {
        self.values[index] = Some(value);
    }
}
