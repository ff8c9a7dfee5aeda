use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Non-negative price carried with exactly two decimal places.
///
/// Rendering rounds half-up on the second decimal (`13.125` -> `"13.13"`),
/// applied through integer cents rather than the float formatter's
/// half-to-even default.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Strict parse: the input must reproduce itself under fixed 2-decimal
    /// formatting, so `"10.50"` is accepted while `"10.5"` and `"10.125"`
    /// are rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value: f64 = input
            .parse()
            .map_err(|_| ValidationError::UnparseablePrice {
                value: input.to_owned(),
            })?;

        let price = Self::from_value(value)?;
        if price.format_fixed() != input {
            return Err(ValidationError::PriceNotCanonical {
                value: input.to_owned(),
            });
        }

        Ok(price)
    }

    /// Wrap a computed value; must be finite and non-negative.
    pub fn from_value(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFinitePrice);
        }
        if value < 0.0 {
            return Err(ValidationError::NegativePrice);
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Canonical fixed 2-decimal rendering, round-half-up.
    pub fn format_fixed(self) -> String {
        let cents = (self.0 * 100.0).round() as i64;
        format!("{}.{:02}", cents / 100, cents % 100)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_fixed())
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_fixed())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_price() {
        let parsed = Price::parse("10.50").expect("must parse");
        assert_eq!(parsed.format_fixed(), "10.50");
    }

    #[test]
    fn rejects_missing_precision() {
        let err = Price::parse("10.5").expect_err("must fail");
        assert!(matches!(err, ValidationError::PriceNotCanonical { .. }));
    }

    #[test]
    fn rejects_excess_precision() {
        let err = Price::parse("10.125").expect_err("must fail");
        assert!(matches!(err, ValidationError::PriceNotCanonical { .. }));
    }

    #[test]
    fn rejects_non_numeric() {
        let err = Price::parse("ten").expect_err("must fail");
        assert!(matches!(err, ValidationError::UnparseablePrice { .. }));
    }

    #[test]
    fn rejects_negative() {
        let err = Price::parse("-1.00").expect_err("must fail");
        assert!(matches!(err, ValidationError::NegativePrice));
    }

    #[test]
    fn rejects_non_finite() {
        let err = Price::from_value(f64::INFINITY).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFinitePrice));
    }

    #[test]
    fn rounds_half_up() {
        let price = Price::from_value(13.125).expect("must wrap");
        assert_eq!(price.format_fixed(), "13.13");
    }

    #[test]
    fn formats_zero() {
        let price = Price::from_value(0.0).expect("must wrap");
        assert_eq!(price.format_fixed(), "0.00");
    }
}
