use serde::{Deserialize, Serialize};

/// Shown in place of amounts that are zero, missing or not finite.
pub const PLACEHOLDER: &str = "–";

pub const AMOUNT_FRACTION_DIGITS: usize = 3;
pub const PERCENT_FRACTION_DIGITS: usize = 2;
pub const CURRENCY_SUFFIX: &str = "iDNA";

/// Separators used when printing numbers. No locale data is bundled;
/// the caller picks the characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberStyle {
    pub decimal_separator: char,
    pub group_separator: Option<char>,
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: Some(','),
        }
    }
}

impl NumberStyle {
    /// Rounds half away from zero to at most `max_fraction_digits`,
    /// dropping trailing zeros.
    pub fn number(&self, value: f64, max_fraction_digits: usize) -> String {
        let (int_part, frac_part) = round_decimal(value.abs(), max_fraction_digits);
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::with_capacity(int_part.len() + frac_part.len() + 8);
        let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&self.group(&int_part));
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }

    fn group(&self, digits: &str) -> String {
        let Some(sep) = self.group_separator else {
            return digits.to_string();
        };
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(sep);
            }
            out.push(ch);
        }
        out
    }

    /// Table cell amount: zero and non-finite values become the placeholder.
    pub fn amount(&self, value: f64) -> String {
        if value == 0.0 || !value.is_finite() {
            return PLACEHOLDER.to_string();
        }
        self.number(value, AMOUNT_FRACTION_DIGITS)
    }

    /// Amount with the currency suffix. Zero prints as `0 iDNA`.
    pub fn dna(&self, value: f64) -> String {
        if !value.is_finite() {
            return PLACEHOLDER.to_string();
        }
        format!(
            "{} {}",
            self.number(value, AMOUNT_FRACTION_DIGITS),
            CURRENCY_SUFFIX
        )
    }

    /// `value` is a fraction in [0, 1].
    pub fn percent(&self, value: f64) -> String {
        if !value.is_finite() {
            return PLACEHOLDER.to_string();
        }
        let scaled = value * 100.0;
        if !scaled.is_finite() {
            return PLACEHOLDER.to_string();
        }
        format!("{}%", self.number(scaled, PERCENT_FRACTION_DIGITS))
    }
}

/// Rounds the shortest round-trip decimal form of a non-negative finite
/// `value` half-up at `digits` fractional places. Returns the integer and
/// fractional digit strings.
fn round_decimal(value: f64, digits: usize) -> (String, String) {
    // f64 Display never switches to exponent notation.
    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut int_digits: Vec<u8> = int_part.bytes().collect();
    let mut frac_digits: Vec<u8> = frac_part.bytes().take(digits).collect();
    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|d| *d >= b'5');

    if round_up {
        let mut carry = true;
        for d in frac_digits.iter_mut().rev().chain(int_digits.iter_mut().rev()) {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            int_digits.insert(0, b'1');
        }
    }

    let to_string = |digits: Vec<u8>| digits.into_iter().map(char::from).collect::<String>();
    (to_string(int_digits), to_string(frac_digits))
}

pub fn format_amount(value: f64) -> String {
    NumberStyle::default().amount(value)
}

pub fn format_dna(value: f64) -> String {
    NumberStyle::default().dna(value)
}

pub fn format_percent(value: f64) -> String {
    NumberStyle::default().percent(value)
}
