/// Reads a lecture count the way a numeric form field is read: the
/// leading integer, or `0` when there is none.
///
/// `"12abc"` is 12, `"3.7"` is 3, `""` and `"abc"` are 0. Values that do
/// not fit in an `i64` saturate.
pub fn parse_count(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if negative { value.saturating_neg() } else { value }
}
