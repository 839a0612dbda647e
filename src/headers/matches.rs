/// `token` lookup table for header name.
///
/// token   = 1*tchar
/// tchar   = "!" / "#" / "$" / "%" / "&" / "'" / "*"
///         / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
///         / DIGIT / ALPHA
const TOKEN: [bool; 256] = {
    let mut bytes = [false; 256];
    let mut i = 0u8;
    loop {
        bytes[i as usize] = matches!(
            i,
            | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*'
            | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
            | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z'
        );
        if i == 255 {
            break;
        }
        i += 1;
    }
    bytes
};

/// field-value   = *field-content
/// field-vchar   = VCHAR / obs-text
///
/// SP and HTAB are allowed in between.
const FIELD_VALUE: [bool; 256] = {
    let mut bytes = [false; 256];
    let mut i = 0u8;
    loop {
        bytes[i as usize] = matches!(i, b'\t' | b' '..=b'~' | 0x80..=0xFF);
        if i == 255 {
            break;
        }
        i += 1;
    }
    bytes
};

#[inline(always)]
pub const fn is_token(byte: u8) -> bool {
    TOKEN[byte as usize]
}

#[inline(always)]
pub const fn is_field_value(byte: u8) -> bool {
    FIELD_VALUE[byte as usize]
}

/// Compare two header names, ignoring ASCII case.
///
/// Non-ASCII bytes are compared verbatim.
pub const fn name_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i].to_ascii_lowercase() != b[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}
