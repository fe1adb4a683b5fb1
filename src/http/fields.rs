/// Returns field number `which` of a whitespace-delimited line.
///
/// The first field's index is 0. A field is a run of non-space characters
/// delimited by one or more space characters; a missing field yields `None`.
///
/// # Example
///
/// ```
/// # use wicket::http::fields::get_field;
/// let line = "GET /index.htm HTTP/1.1";
/// assert_eq!(get_field(line, 0), Some("GET"));
/// assert_eq!(get_field(line, 1), Some("/index.htm"));
/// assert_eq!(get_field(line, 3), None);
/// ```
pub fn get_field(line: &str, which: usize) -> Option<&str> {
    line.split_ascii_whitespace().nth(which)
}
