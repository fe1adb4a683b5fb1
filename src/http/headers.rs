use tokio::io::AsyncRead;

use crate::http::buffer::ScratchBuf;
use crate::http::connection::Connection;
use crate::http::request::RequestContext;

#[derive(Debug)]
pub enum ParseError {
    /// A header name or value did not fit in the scratch buffer.
    TooLong,
    /// An invalid character where a token was expected.
    Malformed,
    /// The connection went away mid-parse.
    Disconnected,
}

/// The set of header names the parser captures values for.
///
/// Supplied once at startup and never mutated. Incoming header names are
/// matched against it case-sensitively, so register names in the exact form
/// clients send them (e.g. `Content-Length`). Headers outside the set are
/// consumed and discarded without touching the scratch buffer.
pub struct HeaderSet {
    names: Vec<String>,
}

impl HeaderSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// A set that captures nothing.
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    StartLine,
    Name,
    ValueSkipSpaces,
    Value,
    IgnoreValue,
}

/// Character-at-a-time parser for one request's header block.
///
/// Feed it bytes with [`HeaderParser::step`]; it returns `Ok(true)` once the
/// blank line terminating the block has been consumed. Captured values are
/// written into the request context as each header line completes.
pub struct HeaderParser {
    state: State,
    matched: Option<usize>,
}

impl HeaderParser {
    pub fn new() -> Self {
        Self {
            state: State::StartLine,
            matched: None,
        }
    }

    /// Consumes one byte of the header block.
    pub fn step(
        &mut self,
        ch: u8,
        scratch: &mut ScratchBuf,
        ctx: &mut RequestContext,
    ) -> Result<bool, ParseError> {
        match self.state {
            State::StartLine => {
                if ch == b'\r' {
                    // Ignored; the '\n' decides.
                } else if ch == b'\n' {
                    return Ok(true);
                } else if ch.is_ascii_alphanumeric() || ch == b'-' {
                    scratch.clear();
                    scratch.push(ch);
                    self.state = State::Name;
                } else {
                    return Err(ParseError::Malformed);
                }
            }

            State::Name => {
                if scratch.is_full() {
                    return Err(ParseError::TooLong);
                }
                if ch == b':' {
                    self.matched = ctx.capture_index(&scratch.text());
                    self.state = if self.matched.is_some() {
                        State::ValueSkipSpaces
                    } else {
                        State::IgnoreValue
                    };
                    scratch.clear();
                } else if ch.is_ascii_alphanumeric() || ch == b'-' {
                    scratch.push(ch);
                } else {
                    return Err(ParseError::Malformed);
                }
            }

            State::ValueSkipSpaces => {
                // The first non-space byte starts the value.
                if ch != b' ' {
                    scratch.push(ch);
                    self.state = State::Value;
                }
            }

            State::Value => {
                if scratch.is_full() {
                    return Err(ParseError::TooLong);
                }
                if ch == b'\n' {
                    if let Some(index) = self.matched.take() {
                        ctx.assign(index, scratch.text().into_owned());
                    }
                    scratch.clear();
                    self.state = State::StartLine;
                } else if ch != b'\r' {
                    scratch.push(ch);
                }
            }

            State::IgnoreValue => {
                if ch == b'\n' {
                    self.state = State::StartLine;
                }
            }
        }
        Ok(false)
    }
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the header state machine over a connection, one byte at a time,
/// until the blank line ends the block or a violation is detected.
///
/// A connection that reaches end-of-stream mid-block surfaces as
/// [`ParseError::Disconnected`]; this is the cancellation check, re-made on
/// every iteration.
pub async fn parse_headers<S>(
    conn: &mut Connection<S>,
    scratch: &mut ScratchBuf,
    ctx: &mut RequestContext,
) -> Result<(), ParseError>
where
    S: AsyncRead + Unpin,
{
    let mut parser = HeaderParser::new();
    loop {
        let ch = match conn.read_byte().await {
            Ok(Some(ch)) => ch,
            Ok(None) | Err(_) => return Err(ParseError::Disconnected),
        };
        if parser.step(ch, scratch, ctx)? {
            return Ok(());
        }
    }
}
