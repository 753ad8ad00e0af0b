//! Unicode utilities for the cuec scanner.
//!
//! Character classes for identifiers and numbers, digit values, UTF-8 rune
//! decoding over raw bytes, and the `U+XXXX 'c'` rendering used in fault
//! messages.

/// The byte order mark.
pub const BOM: char = '\u{FEFF}';

/// Checks if a character may start or continue an identifier.
///
/// ASCII letters plus any Unicode letter. `_` is handled separately by the
/// scanner because of `_|_`.
///
/// # Example
///
/// ```
/// use cuec_lex::unicode::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('ŝ'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('1'));
/// ```
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (!c.is_ascii() && c.is_alphabetic())
}

/// Checks if a character is a decimal digit in any script.
///
/// ```
/// use cuec_lex::unicode::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(is_digit('६'));
/// assert!(!is_digit('x'));
/// ```
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || (!c.is_ascii() && c.is_numeric())
}

/// Value of `c` as a digit inside a number literal.
///
/// `_` counts as a zero-valued digit so that separators stay inside the
/// mantissa; anything that is no digit yields 16, which is larger than
/// every supported base.
pub fn digit_val(c: Option<char>) -> u32 {
    match c {
        Some('_') => 0,
        Some(c) => c.to_digit(16).unwrap_or(16),
        None => 16,
    }
}

/// Value of `c` as a digit inside an escape sequence, if it is one.
pub fn escape_digit_val(c: Option<char>) -> Option<u32> {
    c.and_then(|c| c.to_digit(16))
}

/// Decodes the rune at the start of `bytes`.
///
/// Returns `None` for an invalid or truncated sequence; the caller treats
/// that as a one-byte U+FFFD.
///
/// # Example
///
/// ```
/// use cuec_lex::unicode::decode_rune;
///
/// assert_eq!(decode_rune("ŝx".as_bytes()), Some(('ŝ', 2)));
/// assert_eq!(decode_rune(b"\x80abc"), None);
/// ```
pub fn decode_rune(bytes: &[u8]) -> Option<(char, usize)> {
    let width = match *bytes.first()? {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    let encoded = bytes.get(..width)?;
    let c = std::str::from_utf8(encoded).ok()?.chars().next()?;
    Some((c, width))
}

/// Checks if a character is printable.
///
/// Printable characters are letters, marks, numbers, punctuation, symbols
/// and the ASCII space; control and format characters are not.
pub fn is_print(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control() || c.is_whitespace() || is_format(c))
}

fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{070F}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | BOM
            | '\u{FFF9}'..='\u{FFFB}'
    )
}

/// Renders a character as `U+XXXX 'c'`, dropping the quoted form when the
/// character is not printable.
///
/// # Example
///
/// ```
/// use cuec_lex::unicode::format_char;
///
/// assert_eq!(format_char('?'), "U+003F '?'");
/// assert_eq!(format_char('\u{7}'), "U+0007");
/// ```
pub fn format_char(c: char) -> String {
    if is_print(c) {
        format!("U+{:04X} '{}'", c as u32, c)
    } else {
        format!("U+{:04X}", c as u32)
    }
}
