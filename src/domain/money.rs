use std::fmt;

/// Money is represented as integer cents to avoid floating-point drift when
/// summing many entries. $1500.00 = 150000 cents.
pub type Cents = i64;

/// Largest amount a single entry may carry: $999,999,999,999.99.
pub const MAX_AMOUNT_CENTS: Cents = 99_999_999_999_999;

/// Format cents with exactly two decimals.
/// Example: 129950 -> "1299.50", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Format cents as a dollar amount, the way the tracker prints every total.
/// Example: 20050 -> "$200.50", -500 -> "$-5.00"
pub fn format_dollars(cents: Cents) -> String {
    format!("${}", format_cents(cents))
}

/// Parse a non-negative decimal amount into cents.
///
/// Accepts "50", "50.5", "50.50" and ".50". Digits past the second decimal
/// place round half-up to the nearest cent ("0.125" -> 13). Amounts above
/// [`MAX_AMOUNT_CENTS`] are rejected.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    if input.starts_with('-') {
        return Err(ParseCentsError::Negative);
    }
    let input = input.strip_prefix('+').unwrap_or(input);

    let (units_str, decimal_str) = match input.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (input, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !units_str.bytes().all(|b| b.is_ascii_digit())
        || !decimal_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError::TooLarge)?
    };

    let digits = decimal_str.as_bytes();
    let digit = |i: usize| digits.get(i).map_or(0, |d| i64::from(d - b'0'));
    let mut decimal_cents = digit(0) * 10 + digit(1);
    if digit(2) >= 5 {
        decimal_cents += 1;
    }

    units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .filter(|&c| c <= MAX_AMOUNT_CENTS)
        .ok_or(ParseCentsError::TooLarge)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    Negative,
    TooLarge,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::Negative => write!(f, "amount cannot be negative"),
            ParseCentsError::TooLarge => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
