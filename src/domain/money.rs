use std::fmt;

/// Money is represented as integer hundredths to avoid floating-point
/// precision issues. For THB, 1 baht = 100 satang, so ฿50.00 = 5000 satang.
pub type Satang = i64;

/// Format satang as a human-readable amount string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_satang(satang: Satang) -> String {
    let sign = if satang < 0 { "-" } else { "" };
    let abs = satang.abs();
    let units = abs / 100;
    let remainder = abs % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Parse a user-entered amount string into satang.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// Amounts are magnitudes; the income/expense kind carries the sign,
/// so negative input is rejected along with anything non-numeric.
pub fn parse_amount(input: &str) -> Result<Satang, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    if input.starts_with('-') {
        return Err(ParseAmountError::InvalidFormat);
    }

    let parts: Vec<&str> = input.split('.').collect();
    match parts.len() {
        1 => {
            // No decimal point, treat as whole units
            let units: i64 = parts[0]
                .parse()
                .map_err(|_| ParseAmountError::InvalidFormat)?;
            units.checked_mul(100).ok_or(ParseAmountError::InvalidFormat)
        }
        2 => {
            let units: i64 = if parts[0].is_empty() {
                0
            } else {
                parts[0]
                    .parse()
                    .map_err(|_| ParseAmountError::InvalidFormat)?
            };

            // Handle decimal part - pad or truncate to 2 digits
            let decimal_str = parts[1];
            let decimal_satang: i64 = match decimal_str.len() {
                0 => 0,
                1 => {
                    // Single digit like "5" means 50 satang
                    decimal_str
                        .parse::<i64>()
                        .map_err(|_| ParseAmountError::InvalidFormat)?
                        * 10
                }
                2 => decimal_str
                    .parse()
                    .map_err(|_| ParseAmountError::InvalidFormat)?,
                _ => {
                    // More than 2 decimal places - truncate. `get` rather than
                    // indexing: byte 2 may fall inside a multi-byte character.
                    decimal_str
                        .get(..2)
                        .ok_or(ParseAmountError::InvalidFormat)?
                        .parse()
                        .map_err(|_| ParseAmountError::InvalidFormat)?
                }
            };

            units
                .checked_mul(100)
                .and_then(|satang| satang.checked_add(decimal_satang))
                .ok_or(ParseAmountError::InvalidFormat)
        }
        _ => Err(ParseAmountError::InvalidFormat),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is empty"),
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
