//! Percent-decoding of URL paths and filename derivation.

/// Decodes one hex digit of a percent escape.
///
/// Accepts `0-9` and, case-insensitively, `a-e`. Anything else decodes as 0.
fn parse_hex_char(ch: u8) -> u8 {
    match ch {
        b'0'..=b'9' => ch - b'0',
        b'a'..=b'e' => ch - b'a' + 10,
        b'A'..=b'E' => ch - b'A' + 10,
        _ => 0,
    }
}

/// Replaces the percent escapes in `encoded` and returns the decoded string.
///
/// For example `"/index%2Ehtm"` decodes to `"/index.htm"`. A trailing `%`
/// with fewer than two characters after it is not a complete escape and is
/// copied through verbatim rather than rejected. Decoding never fails;
/// escape sequences that produce invalid UTF-8 are replaced lossily.
pub fn decode_url_encoded(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if bytes.len() - i < 3 {
                // Incomplete escape sequence; copy the rest as-is.
                out.extend_from_slice(&bytes[i..]);
                break;
            }
            out.push(parse_hex_char(bytes[i + 1]) << 4 | parse_hex_char(bytes[i + 2]));
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Derives a storage filename from the last component of a URL path.
///
/// The component is percent-decoded and upper-cased, ready to be handed to
/// the storage layer. Returns `None` when the path has no `/` at all.
pub fn file_from_path(path: &str) -> Option<String> {
    let (_, encoded_fname) = path.rsplit_once('/')?;
    Some(decode_url_encoded(encoded_fname).to_ascii_uppercase())
}
