/// HTTP status codes emitted by the server core.
///
/// - `Ok` (200): success; also the pre-emptive status sent by the upload
///   handler before the body is drained
/// - `NotFound` (404): no route matched the request
/// - `UriTooLong` (414): the request line did not fit the scratch buffer
/// - `ExpectationFailed` (417): the header block was malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 414 URI Too Long
    UriTooLong,
    /// 417 Expectation Failed
    ExpectationFailed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use wicket::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::UriTooLong => 414,
            StatusCode::ExpectationFailed => 417,
        }
    }
}
