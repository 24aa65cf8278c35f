//! Percent-encoding for values placed in URL path segments and query strings.

use std::fmt::Display;

use super::errors::DecodingError;

pub struct URLHelper;

impl URLHelper {
    /// Make a scalar value safe to use inside a URL segment.
    ///
    /// Numbers and other `Display` values are rendered to a string first.
    /// Only the unreserved characters `A-Z a-z 0-9 - _ . ~` are left as is.
    pub fn encode(value: impl Display) -> String {
        urlencoding::encode(&value.to_string()).into_owned()
    }

    /// Decode a percent-encoded value back to its literal form.
    ///
    /// Every `%` must be followed by two hex digits, and the decoded bytes
    /// must be valid UTF-8.
    pub fn decode(value: &str) -> Result<String, DecodingError> {
        Self::check_escapes(value)?;

        urlencoding::decode(value)
            .map(|decoded| decoded.into_owned())
            .map_err(|_| DecodingError::InvalidUtf8)
    }

    // urlencoding passes stray '%' through untouched, so reject them up front
    fn check_escapes(value: &str) -> Result<(), DecodingError> {
        let bytes = value.as_bytes();
        let mut position = 0;

        while position < bytes.len() {
            if bytes[position] == b'%' {
                let valid = bytes
                    .get(position + 1..position + 3)
                    .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));

                if !valid {
                    return Err(DecodingError::MalformedEscape { position });
                }
                position += 3;
            } else {
                position += 1;
            }
        }

        Ok(())
    }
}
