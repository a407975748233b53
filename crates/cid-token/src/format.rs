//! Compact display labels for token ids.
//!
//! Listing cards and the analytics dashboard show token ids inline, where a
//! 78-digit decimal would not fit. Labels are bounded at
//! [`MAX_LABEL_LEN`](crate::limits::MAX_LABEL_LEN) characters and are not
//! reversible.

use num_traits::ToPrimitive;

use crate::codec::TokenId;
use crate::limits::{
    ELLIPSIS, KILO_THRESHOLD, MEGA_THRESHOLD, TRUNCATED_HEAD_DIGITS, TRUNCATED_TAIL_DIGITS,
    TRUNCATE_THRESHOLD,
};

/// Renders a token id as a short display label.
///
/// Values below a thousand stay verbatim; the thousands and millions tiers
/// divide down to one fractional digit with a `k` or `M` suffix; anything at
/// or past a billion keeps the first and last four decimal digits around an
/// ellipsis.
///
/// The tier divisions go through `f64`; every value that reaches them fits
/// a `u64` exactly, and the label is display-only.
pub fn format_token_id(token_id: &TokenId) -> String {
    match token_id.to_u64() {
        Some(v) if v < KILO_THRESHOLD => v.to_string(),
        Some(v) if v < MEGA_THRESHOLD => format!("{:.1}k", v as f64 / KILO_THRESHOLD as f64),
        Some(v) if v < TRUNCATE_THRESHOLD => format!("{:.1}M", v as f64 / MEGA_THRESHOLD as f64),
        _ => truncated_label(token_id),
    }
}

/// First and last decimal digits around an ellipsis.
///
/// Callers guarantee at least ten digits: every id at or past the
/// truncation threshold has them.
fn truncated_label(token_id: &TokenId) -> String {
    let digits = token_id.to_string();
    let head = &digits[..TRUNCATED_HEAD_DIGITS];
    let tail = &digits[digits.len() - TRUNCATED_TAIL_DIGITS..];
    format!("{}{}{}", head, ELLIPSIS, tail)
}
