use crate::domain::{RawRow, TradeDate};
use crate::error::{PipelineError, ValidationError};

/// Number of consecutive source rows a prediction is computed from.
pub const WINDOW_LEN: usize = 10;

/// Ten consecutive source rows plus the parsed view the predictor needs.
///
/// Construction is lenient about canonical formatting (that is the
/// validator's job), but every price must still parse to a finite,
/// non-negative number and the last row must carry a usable date. A window is
/// never mutated after creation; prediction reads it and produces a disjoint
/// new sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    rows: Vec<RawRow>,
    prices: Vec<f64>,
    last_date: TradeDate,
}

impl Window {
    pub fn from_rows(rows: Vec<RawRow>) -> Result<Self, PipelineError> {
        if rows.len() != WINDOW_LEN {
            return Err(PipelineError::InsufficientData {
                available: rows.len(),
            });
        }

        let mut prices = Vec::with_capacity(WINDOW_LEN);
        for (index, row) in rows.iter().enumerate() {
            let value: f64 =
                row.price
                    .parse()
                    .map_err(|_| PipelineError::MalformedRecord {
                        index,
                        reason: ValidationError::UnparseablePrice {
                            value: row.price.clone(),
                        },
                    })?;

            if !value.is_finite() {
                return Err(PipelineError::MalformedRecord {
                    index,
                    reason: ValidationError::NonFinitePrice,
                });
            }
            if value < 0.0 {
                return Err(PipelineError::MalformedRecord {
                    index,
                    reason: ValidationError::NegativePrice,
                });
            }

            prices.push(value);
        }

        let last_index = WINDOW_LEN - 1;
        let last_date = TradeDate::parse(&rows[last_index].date).map_err(|reason| {
            PipelineError::MalformedRecord {
                index: last_index,
                reason,
            }
        })?;

        Ok(Self {
            rows,
            prices,
            last_date,
        })
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Price of the 10th (last) window row.
    pub fn last_price(&self) -> f64 {
        self.prices[WINDOW_LEN - 1]
    }

    /// Date of the 10th (last) window row.
    pub fn last_date(&self) -> TradeDate {
        self.last_date
    }

    /// Ticker of the first row, verbatim. All rows share one ticker by
    /// construction of the input files.
    pub fn ticker(&self) -> &str {
        &self.rows[0].ticker
    }

    pub fn into_rows(self) -> Vec<RawRow> {
        self.rows
    }
}
