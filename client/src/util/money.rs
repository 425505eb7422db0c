//! Currency display formatting.
//!
//! Two conventions, matching the two forms: the eligibility panel renders
//! rupee amounts with Indian digit grouping (12,34,567), the rate table
//! renders dollar amounts with Western grouping and two decimals.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Format a rupee amount: `₹` prefix, Indian grouping, no decimals.
///
/// Negative and non-finite inputs render as `₹0`; validation keeps them out
/// of real data, this is only display hardening.
pub fn format_rupees(amount: f64) -> String {
    let whole = if amount.is_finite() && amount > 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            amount.round() as u64
        }
    } else {
        0
    };
    format!("₹{}", group_indian(whole))
}

/// Format a dollar amount: `$` prefix, Western grouping, two decimals.
pub fn format_dollars(amount: f64) -> String {
    let safe = if amount.is_finite() && amount > 0.0 { amount } else { 0.0 };
    let cents = (safe * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = cents as u64;
    format!("${}.{:02}", group_western(cents / 100), cents % 100)
}

/// Format a percentage with two decimals, e.g. `6.35%`.
pub fn format_percent(rate: f64) -> String {
    format!("{rate:.2}%")
}

/// Indian grouping: last three digits, then groups of two (`12,34,567`).
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Western grouping: groups of three (`1,234,567`).
fn group_western(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
