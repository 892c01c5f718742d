//! URL component encoding shared by the provider adapters.

/// Characters left unescaped by component encoding, besides ASCII alphanumerics.
const UNRESERVED_MARKS: &[u8] = b"-_.!~*'()";

/// Percent-encode a URL component.
///
/// Matches the browser `encodeURIComponent` rules: ASCII alphanumerics and
/// `-_.!~*'()` pass through, every other byte of the UTF-8 encoding is
/// written as `%XX` with uppercase hex.
pub fn encode_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len() * 3);
    for &byte in input.as_bytes() {
        if byte.is_ascii_alphanumeric() || UNRESERVED_MARKS.contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push('%');
            encoded.push(hex_digit(byte >> 4));
            encoded.push(hex_digit(byte & 0x0F));
        }
    }
    encoded
}

/// Encode a word for use as a path segment.
///
/// `.` and `..` would be collapsed by path normalization, so they are
/// prefixed with a space, and every literal `.` is escaped as `%2E`.
pub fn encode_path_word(word: &str) -> String {
    let word = if word == "." || word == ".." {
        format!(" {}", word)
    } else {
        word.to_string()
    };
    encode_component(&word).replace('.', "%2E")
}

fn hex_digit(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('0')
}
