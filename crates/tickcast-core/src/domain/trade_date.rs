use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::error::ValidationError;

const DAY_MONTH_YEAR: &[BorrowedFormatItem<'static>] = format_description!("[day]-[month]-[year]");

/// Calendar date carried by every price row, canonical form `DD-MM-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradeDate(Date);

impl TradeDate {
    /// Parse a `DD-MM-YYYY` date. The input must reproduce itself when
    /// formatted back, so only the zero-padded canonical form is accepted.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed =
            Date::parse(input, DAY_MONTH_YEAR).map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })?;

        let date = Self(parsed);
        if date.format_padded() != input {
            return Err(ValidationError::DateNotCanonical {
                value: input.to_owned(),
            });
        }

        Ok(date)
    }

    /// The next calendar day, with month and year rollover.
    pub fn next_day(self) -> Self {
        Self(
            self.0
                .next_day()
                .expect("trade dates stay far below the calendar maximum"),
        )
    }

    pub fn format_padded(self) -> String {
        self.0
            .format(DAY_MONTH_YEAR)
            .expect("TradeDate must be DD-MM-YYYY formattable")
    }

    pub fn into_inner(self) -> Date {
        self.0
    }
}

impl Display for TradeDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_padded())
    }
}

impl Serialize for TradeDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_padded())
    }
}

impl<'de> Deserialize<'de> for TradeDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
