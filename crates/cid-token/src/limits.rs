//! Identifier prefix and display threshold constants.

/// Prefix carried by every encoded content identifier.
pub const IDENTIFIER_PREFIX: &str = "Qm";

/// Smallest token id rendered in the thousands tier.
pub const KILO_THRESHOLD: u64 = 1_000;

/// Smallest token id rendered in the millions tier.
pub const MEGA_THRESHOLD: u64 = 1_000_000;

/// Smallest token id rendered as truncated head and tail digits.
pub const TRUNCATE_THRESHOLD: u64 = 1_000_000_000;

/// Decimal digits kept at the front of a truncated label.
pub const TRUNCATED_HEAD_DIGITS: usize = 4;

/// Decimal digits kept at the end of a truncated label.
pub const TRUNCATED_TAIL_DIGITS: usize = 4;

/// Separator between the head and tail of a truncated label.
pub const ELLIPSIS: &str = "...";

/// Upper bound on the length of any display label.
pub const MAX_LABEL_LEN: usize = TRUNCATED_HEAD_DIGITS + ELLIPSIS.len() + TRUNCATED_TAIL_DIGITS;
