//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! bounded names, non-negative prices) so that once a value reaches the domain
//! layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length, in characters, of product and category names.
pub const MAX_NAME_LENGTH: usize = 200;

/// Upper bound (exclusive) of a `decimal(10,2)` column.
const MAX_PRICE_CENTS: i64 = 10_000_000_000;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is longer than allowed.
    #[error("value cannot be longer than {0} characters")]
    TooLong(usize),
    /// Provided quantity or amount is below zero.
    #[error("value cannot be negative")]
    Negative,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CategoryId, "Unique identifier for a category.");
id_newtype!(ProductId, "Unique identifier for a product.");

/// Wrapper for strings holding at least one non-whitespace character.
///
/// The value is stored exactly as given, surrounding whitespace included.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Rejects empty and whitespace-only inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(value))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! string_newtype {
    ($name:ident, $doc:expr, $max_len:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a non-blank value within the length limit.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?.into_inner();
                if inner.chars().count() > $max_len {
                    return Err(TypeConstraintError::TooLong($max_len));
                }
                Ok(Self(inner))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

string_newtype!(CategoryName, "Display name of a category.", MAX_NAME_LENGTH);
string_newtype!(ProductName, "Display name of a product.", MAX_NAME_LENGTH);

/// Free-form description text. Any string is accepted, including `""`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Description(String);

impl Description {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Description {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

/// Non-negative monetary amount with two fractional digits.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductPrice(Decimal);

impl ProductPrice {
    /// Rounds to cents (half away from zero) and rejects negative or
    /// out-of-range amounts.
    pub fn new(value: Decimal) -> Result<Self, TypeConstraintError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(TypeConstraintError::Negative);
        }

        let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);

        let cents = i64::try_from(rounded.mantissa())
            .ok()
            .filter(|cents| *cents < MAX_PRICE_CENTS)
            .ok_or_else(|| TypeConstraintError::InvalidValue("price is too large".to_string()))?;

        Ok(Self(Decimal::new(cents, 2)))
    }

    /// Builds a price from a whole number of cents as stored in the database.
    pub fn from_cents(cents: i64) -> Result<Self, TypeConstraintError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// Amount expressed in cents.
    pub fn cents(&self) -> i64 {
        // Scale is fixed at two digits and the range is bounded by `new`.
        i64::try_from(self.0.mantissa()).unwrap_or(i64::MAX)
    }

    /// Borrow the decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl Display for ProductPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for ProductPrice {
    type Error = TypeConstraintError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Units of a product available in stock.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StockQuantity(i32);

impl StockQuantity {
    /// Creates a stock quantity rejecting negative values.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value < 0 {
            Err(TypeConstraintError::Negative)
        } else {
            Ok(Self(value))
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for StockQuantity {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StockQuantity> for i32 {
    fn from(value: StockQuantity) -> Self {
        value.0
    }
}
