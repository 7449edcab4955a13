//! BRL display formatting for monetary amounts.
//!
//! Formatting is presentation-only: callers keep accumulating raw `f64`
//! values and only round here, when producing a display string.

/// Format an amount as Brazilian Real, e.g. `R$ 1.234,56`.
///
/// Two fractional digits, `.` as the thousands separator, `,` as the decimal
/// separator. Non-finite input renders as zero.
pub fn format_brl(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let sign = if amount < 0.0 { "-" } else { "" };
    // Rounding happens here and nowhere else.
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    format!("{sign}R$ {},{frac:02}", group_thousands(whole))
}

fn group_thousands(mut n: u64) -> String {
    let mut groups: Vec<u64> = Vec::new();
    loop {
        groups.push(n % 1000);
        n /= 1000;
        if n == 0 {
            break;
        }
    }
    let mut out = String::new();
    for (i, g) in groups.iter().enumerate().rev() {
        if i == groups.len() - 1 {
            out.push_str(&g.to_string());
        } else {
            out.push('.');
            out.push_str(&format!("{g:03}"));
        }
    }
    out
}
