//! Display formatting for money and timestamps (`en-US` shapes).

use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};

pub const INVALID_DATE: &str = "Invalid Date";

/// US dollars with comma grouping and two fraction digits: `-$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }

    let digits = round_to_cents(&amount.abs().to_string());
    let (whole, cents) = digits.split_at(digits.len() - 2);
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Rounds the shortest decimal form of a non-negative amount half away from
/// zero and returns its digits in cents.
fn round_to_cents(repr: &str) -> String {
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr, ""));
    let mut frac = fraction.bytes();
    let mut digits: Vec<u8> = whole.bytes().collect();
    digits.push(frac.next().unwrap_or(b'0'));
    digits.push(frac.next().unwrap_or(b'0'));

    if frac.next().is_some_and(|next| next >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }
    digits.into_iter().map(char::from).collect()
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `Mar 5, 2024, 02:07 PM` in the browser's local offset.
pub fn format_date(raw: &str) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    format_date_in(raw, offset)
}

/// Like [`format_date`] with an explicit local offset.
///
/// Zoned timestamps are converted to `local`; naive date-times are read as
/// `local` wall-clock; bare dates are UTC midnight.
pub fn format_date_in(raw: &str, local: UtcOffset) -> String {
    parse_timestamp(raw.trim(), local)
        .and_then(|at| {
            at.to_offset(local)
                .format(&format_description!(
                    "[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]"
                ))
                .ok()
        })
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_timestamp(raw: &str, local: UtcOffset) -> Option<OffsetDateTime> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(at);
    }
    if let Some(naive) = parse_naive(raw) {
        return Some(naive.assume_offset(local));
    }
    Date::parse(raw, &format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_utc())
}

fn parse_naive(raw: &str) -> Option<PrimitiveDateTime> {
    let normalized = raw.replacen(' ', "T", 1);
    PrimitiveDateTime::parse(
        &normalized,
        &format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            &normalized,
            &format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
    })
    .or_else(|_| {
        PrimitiveDateTime::parse(
            &normalized,
            &format_description!("[year]-[month]-[day]T[hour]:[minute]"),
        )
    })
    .ok()
}
