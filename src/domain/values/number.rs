//! Loose numeric parsing for user-typed and hand-edited values.
//!
//! Accepts what a browser's `Number(text)` accepts: surrounding whitespace,
//! blank text (as 0), decimal and exponent forms, `0x`/`0o`/`0b` prefixes and
//! the exact spellings `Infinity`/`-Infinity`. Everything else is not a number.

/// `None` where the text is not a number at all.
pub fn parse_number_text(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&s[2..], radix);
    }

    // Rust also takes "inf"/"nan" in any case; those are not numbers here.
    let n = s.parse::<f64>().ok()?;
    if n.is_finite() {
        Some(n)
    } else {
        None
    }
}

fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
