//! Type-safe price representation and currency formatting.
//!
//! Prices are decimal amounts in a single currency's standard unit (rands,
//! not cents). The site quotes whole units only, so formatting rounds to
//! zero fractional digits.
//!
//! ```
//! use arden_way_core::{CurrencyFormatter, Price};
//!
//! let formatter = CurrencyFormatter::default();
//! assert_eq!(formatter.format_whole(0), "R0");
//! assert_eq!(formatter.format_whole(42_000), "R42,000");
//! assert_eq!(Price::zar(95_000).display(), "R95,000");
//! ```

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing or formatting a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Amounts are never negative.
    #[error("price amount cannot be negative (got {0})")]
    Negative(Decimal),
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    ZAR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol placed before the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::ZAR => "R",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ZAR => "ZAR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Formats amounts for one fixed currency.
///
/// Output is the currency symbol, the amount rounded half away from zero to
/// whole units, and `,` as the thousands separator: `R42,000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrencyFormatter {
    currency: CurrencyCode,
}

impl CurrencyFormatter {
    /// Create a formatter for the given currency.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self { currency }
    }

    /// The currency this formatter writes.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Format a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] for amounts below zero.
    pub fn format(&self, amount: Decimal) -> Result<String, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(self.render(amount))
    }

    /// Format a whole-unit amount.
    #[must_use]
    pub fn format_whole(&self, amount: u64) -> String {
        format!("{}{}", self.currency.symbol(), group_thousands(u128::from(amount)))
    }

    /// Render an amount already known to be non-negative.
    fn render(&self, amount: Decimal) -> String {
        let whole = amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u128()
            .unwrap_or_default();
        format!("{}{}", self.currency.symbol(), group_thousands(whole))
    }
}

/// Insert `,` between every group of three digits.
fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// A non-negative price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PriceRecord")]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rands, not cents).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self {
            amount,
            currency_code,
        })
    }

    /// A whole-rand price.
    #[must_use]
    pub fn zar(rands: u64) -> Self {
        Self {
            amount: Decimal::from(rands),
            currency_code: CurrencyCode::ZAR,
        }
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency of this price.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Format for display, e.g. `R42,000`.
    #[must_use]
    pub fn display(&self) -> String {
        CurrencyFormatter::new(self.currency_code).render(self.amount)
    }
}

/// Serialized form of [`Price`], checked by [`Price::new`] on the way in.
#[derive(Deserialize)]
struct PriceRecord {
    amount: Decimal,
    currency_code: CurrencyCode,
}

impl TryFrom<PriceRecord> for Price {
    type Error = PriceError;

    fn try_from(record: PriceRecord) -> Result<Self, Self::Error> {
        Self::new(record.amount, record.currency_code)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    /// Adds amounts of the same currency.
    ///
    /// Catalogs reject mixed currencies, so both sides always agree.
    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(
            self.currency_code, rhs.currency_code,
            "adding prices in different currencies"
        );
        Self {
            amount: self.amount + rhs.amount,
            currency_code: self.currency_code,
        }
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        let mut iter = iter.peekable();
        let start = iter
            .peek()
            .map_or_else(CurrencyCode::default, |p| p.currency_code);
        iter.fold(Self::zero(start), |acc, p| acc + *p)
    }
}
