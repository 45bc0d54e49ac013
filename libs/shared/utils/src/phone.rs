use std::sync::OnceLock;

use regex::Regex;

/// Canonical form: country code 998 followed by nine digits.
pub const PHONE_LENGTH: usize = 12;

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^998\d{9}$").unwrap())
}

pub fn is_valid_phone(digits: &str) -> bool {
    phone_re().is_match(digits)
}

/// Formats a digits-only phone number for display, grouping as
/// `998 99 123 45 67`. Partial inputs are grouped as far as they go,
/// so the helper works while the user is still typing.
pub fn format_phone(input: &str) -> String {
    let d = strip_formatting(input);
    match d.len() {
        0..=3 => d,
        4..=5 => format!("{} {}", &d[..3], &d[3..]),
        6..=8 => format!("{} {} {}", &d[..3], &d[3..5], &d[5..]),
        9..=10 => format!("{} {} {} {}", &d[..3], &d[3..5], &d[5..8], &d[8..]),
        _ => format!(
            "{} {} {} {} {}",
            &d[..3],
            &d[3..5],
            &d[5..8],
            &d[8..10],
            &d[10..]
        ),
    }
}

/// Strips display formatting back to the canonical digits-only form.
/// Round-trip: `strip_formatting(&format_phone(d)) == d` for any
/// digits-only input.
pub fn strip_formatting(formatted: &str) -> String {
    formatted.chars().filter(|c| c.is_ascii_digit()).collect()
}
