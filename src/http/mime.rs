//! MIME type resolution from a compact packed table.
//!
//! The table is a single constant string of `EXTENSION*content/type|`
//! records. Lookups scan it linearly; the result is an offset into the
//! table rather than a copy of the content-type string, so a resolved type
//! can be emitted repeatedly without re-copying it.

/// The packed extension-to-content-type table.
const MIME_TYPES: &str = "HTM*text/html|\
                          TXT*text/plain|\
                          CSS*text/css|\
                          XML*text/xml|\
                          JS*text/javascript|\
                          GIF*image/gif|\
                          JPG*image/jpeg|\
                          PNG*image/png|\
                          ICO*image/vnd.microsoft.icon|\
                          MP3*audio/mpeg|";

/// An identifier for a MIME type. The number is opaque to a human, but it's
/// really an offset into the packed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MimeType(u16);

/// Offset of `text/html`, the fallback for unknown extensions.
pub const TEXT_HTML: MimeType = MimeType(4);

impl MimeType {
    /// The content-type string this identifier points at.
    pub fn as_str(&self) -> &'static str {
        let rest = &MIME_TYPES[self.0 as usize..];
        match rest.find('|') {
            Some(end) => &rest[..end],
            None => rest,
        }
    }
}

/// Guesses a MIME type based on the extension of `filename`.
///
/// The extension is compared case-insensitively against each record of the
/// packed table. If the filename has no extension, or the extension is not
/// in the table, the equivalent of `text/html` is returned.
///
/// # Example
///
/// ```
/// # use wicket::http::mime;
/// assert_eq!(mime::from_filename("LOGO.JPG").as_str(), "image/jpeg");
/// assert_eq!(mime::from_filename("README").as_str(), "text/html");
/// ```
pub fn from_filename(filename: &str) -> MimeType {
    let Some((_, ext)) = filename.rsplit_once('.') else {
        return TEXT_HTML;
    };

    let bytes = MIME_TYPES.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let key_start = i;
        while bytes[i] != b'*' {
            i += 1;
        }
        let key = &MIME_TYPES[key_start..i];
        // Skip past the '*' to the content-type string.
        i += 1;
        let type_start = i;
        while bytes[i] != b'|' {
            i += 1;
        }
        if key.eq_ignore_ascii_case(ext) {
            return MimeType(type_start as u16);
        }
        // Skip past the '|' to the next record.
        i += 1;
    }
    TEXT_HTML
}
