/// Format an amount as signed USD, always showing the sign: `+$5.00`, `-$1,250.00`.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let sign = if amount < 0.0 { '-' } else { '+' };
    format!("{sign}${}", group_thousands(amount.abs()))
}

/// Format the magnitude only, e.g. `$5.00`. Used for pending bets.
pub fn format_currency_unsigned(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    format!("${}", group_thousands(amount.abs()))
}

fn group_thousands(magnitude: f64) -> String {
    let fixed = format!("{magnitude:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped}.{frac_part}")
}
