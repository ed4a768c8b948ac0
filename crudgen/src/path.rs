//! Escaping of caller-supplied path arguments.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything but the unreserved characters of RFC 3986.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes one path segment.
///
/// Generated calls pass every resource and scope identifier through this
/// before formatting it into a path, so an id containing `/`, `?`, `#` or
/// `:` stays inside its own segment.
///
/// ## Examples
///
/// ```
/// use crudgen::path_segment;
///
/// assert_eq!(path_segment("ttcp_1234"), "ttcp_1234");
/// assert_eq!(path_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
/// ```
pub fn path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(path_segment("p_1234-a.b~c"), "p_1234-a.b~c");
    }

    #[test]
    fn delimiters_are_escaped() {
        assert_eq!(path_segment("x:add-hosts"), "x%3Aadd-hosts");
        assert_eq!(path_segment("../admin"), "..%2Fadmin");
        assert_eq!(path_segment("a b%"), "a%20b%25");
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(path_segment("é"), "%C3%A9");
    }
}
