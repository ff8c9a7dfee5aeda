use serde::{Deserialize, Serialize};

use crate::domain::{Price, Ticker, TradeDate};
use crate::error::ValidationError;

/// One line of a delimited source file, exactly as read; no parsing applied.
///
/// Raw rows are what the storage layer moves around: validated input rows are
/// echoed verbatim into the output series, so the strings are never
/// normalized in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub ticker: String,
    pub date: String,
    pub price: String,
}

impl RawRow {
    pub fn new(
        ticker: impl Into<String>,
        date: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            date: date.into(),
            price: price.into(),
        }
    }
}

/// Fully validated `(ticker, date, price)` triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub ticker: Ticker,
    pub date: TradeDate,
    pub price: Price,
}

impl PriceRecord {
    /// Strict structural parse of a raw row; every field must be canonical.
    pub fn parse(row: &RawRow) -> Result<Self, ValidationError> {
        Ok(Self {
            ticker: Ticker::parse(&row.ticker)?,
            date: TradeDate::parse(&row.date)?,
            price: Price::parse(&row.price)?,
        })
    }

    pub fn to_raw(&self) -> RawRow {
        RawRow::new(
            self.ticker.as_str(),
            self.date.format_padded(),
            self.price.format_fixed(),
        )
    }
}
