//! Three-point price extrapolation.
//!
//! The rule is deterministic: given the same window, the same three points
//! come back. Randomness lives entirely in the sampler.

use crate::domain::{Price, RawRow, TradeDate, Window};
use crate::error::PipelineError;

/// One synthesized data point.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictedPoint {
    pub date: TradeDate,
    pub price: Price,
}

/// The three synthesized points appended after a window, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    ticker: String,
    points: Vec<PredictedPoint>,
}

impl Prediction {
    /// Ticker copied verbatim from the window's first row.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn points(&self) -> &[PredictedPoint] {
        &self.points
    }

    /// Render the prediction as output rows in the source file format.
    pub fn to_rows(&self) -> Vec<RawRow> {
        self.points
            .iter()
            .map(|point| {
                RawRow::new(
                    self.ticker.clone(),
                    point.date.format_padded(),
                    point.price.format_fixed(),
                )
            })
            .collect()
    }
}

/// Extrapolate three future points from a ten-row window.
///
/// The first prediction is the second-highest price seen in the window,
/// where every row tied with the highest is skipped. The second is the
/// average of the last window price and the first prediction. The third
/// moves a quarter of the gap between the first two predictions beyond the
/// second, away from the first. Dates advance one calendar day per point
/// starting after the last window row.
pub fn predict(window: &Window) -> Result<Prediction, PipelineError> {
    // Prices are never negative, so 0 is a safe floor for both scans.
    let mut highest = 0.0_f64;
    for &price in window.prices() {
        if price > highest {
            highest = price;
        }
    }

    let mut second_highest = 0.0_f64;
    for &price in window.prices() {
        if price > second_highest && price != highest {
            second_highest = price;
        }
    }

    if second_highest == 0.0 {
        // All prices are identical, or all are zero.
        return Err(PipelineError::DegenerateInput);
    }

    let first = second_highest;
    let second = (window.last_price() + first) / 2.0;
    let third = if second >= first {
        second + (second - first) / 4.0
    } else {
        second - (first - second) / 4.0
    };

    let mut date = window.last_date();
    let mut points = Vec::with_capacity(3);
    for value in [first, second, third] {
        date = date.next_day();
        let price = Price::from_value(value).map_err(|_| PipelineError::DegenerateInput)?;
        points.push(PredictedPoint { date, price });
    }

    Ok(Prediction {
        ticker: window.ticker().to_owned(),
        points,
    })
}
