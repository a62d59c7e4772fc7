//! Money amounts held in minor currency units.
//!
//! Balances and wagers are `usize` counts of the smallest unit the currency
//! displays, so a precision of 2 means pence or cents.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::error::AmountError;

/// How amounts are shown and read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// Symbol printed before the amount.
    pub symbol: String,
    /// Number of decimal places.
    pub precision: u8,
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            symbol: String::from("£"),
            precision: 2,
        }
    }
}

impl Currency {
    /// Creates a currency.
    #[must_use]
    pub fn new(symbol: impl Into<String>, precision: u8) -> Self {
        Self {
            symbol: symbol.into(),
            precision,
        }
    }

    /// Minor units per whole unit, or `None` if that does not fit in a
    /// `usize` (more than 19 decimal places on 64-bit targets).
    #[must_use]
    pub const fn scale(&self) -> Option<usize> {
        10usize.checked_pow(self.precision as u32)
    }

    /// Formats an amount.
    ///
    /// ```
    /// use twentyone::Currency;
    ///
    /// let pounds = Currency::default();
    /// assert_eq!(pounds.format(50_000), "£500.00");
    /// assert_eq!(pounds.format(2_505), "£25.05");
    /// assert_eq!(Currency::new("$", 0).format(25), "$25");
    /// ```
    #[must_use]
    pub fn format(&self, amount: usize) -> String {
        // Past usize range every amount is below one whole unit.
        let (whole, fraction) = self
            .scale()
            .map_or((0, amount), |scale| (amount / scale, amount % scale));
        if self.precision == 0 {
            return format!("{}{whole}", self.symbol);
        }

        let width = self.precision as usize;
        format!("{}{whole}.{fraction:0width$}", self.symbol)
    }

    /// Parses a decimal amount typed by the user into minor units.
    ///
    /// A leading currency symbol is accepted.
    ///
    /// # Errors
    ///
    /// Returns an [`AmountError`] if the input is empty, not a plain decimal,
    /// more precise than the currency, or too large.
    ///
    /// ```
    /// use twentyone::{AmountError, Currency};
    ///
    /// let pounds = Currency::default();
    /// assert_eq!(pounds.parse("10"), Ok(1_000));
    /// assert_eq!(pounds.parse("£12.5"), Ok(1_250));
    /// assert_eq!(pounds.parse("1.005"), Err(AmountError::TooPrecise { precision: 2 }));
    /// ```
    pub fn parse(&self, input: &str) -> Result<usize, AmountError> {
        let input = input.trim();
        let input = input.strip_prefix(self.symbol.as_str()).unwrap_or(input).trim();
        if input.is_empty() {
            return Err(AmountError::Empty);
        }

        let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(AmountError::NotANumber);
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(AmountError::NotANumber);
        }
        if fraction.len() > self.precision as usize {
            return Err(AmountError::TooPrecise {
                precision: self.precision,
            });
        }

        let fraction_places = (self.precision as usize - fraction.len()) as u32;
        let whole = digits(whole)?;
        let fraction = digits(fraction)?;

        let minor = match self.scale() {
            Some(scale) => whole.checked_mul(scale),
            None if whole == 0 => Some(0),
            None => None,
        };
        let fraction = match fraction {
            0 => Some(0),
            _ => 10usize
                .checked_pow(fraction_places)
                .and_then(|fraction_scale| fraction.checked_mul(fraction_scale)),
        };

        minor
            .zip(fraction)
            .and_then(|(minor, fraction)| minor.checked_add(fraction))
            .ok_or(AmountError::Overflow)
    }
}

fn digits(text: &str) -> Result<usize, AmountError> {
    text.bytes().try_fold(0usize, |acc, b| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(usize::from(b - b'0')))
            .ok_or(AmountError::Overflow)
    })
}
