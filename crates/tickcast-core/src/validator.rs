//! Structural validation of raw delimited rows.
//!
//! The same check backs both invocation modes: the orchestrator hands it
//! either the entire raw row set of a file or only the ten sampled rows.
//! Disabling validation altogether is the caller's choice and never reaches
//! this module.

use crate::domain::{PriceRecord, RawRow, WINDOW_LEN};
use crate::error::PipelineError;

/// Check that every row parses as a canonical `(ticker, date, price)` triple
/// and that there are at least ten rows to work with.
///
/// Short-circuits on the first failing row; the returned error names the row
/// index and the field that failed.
pub fn validate_rows(rows: &[RawRow]) -> Result<(), PipelineError> {
    if rows.len() < WINDOW_LEN {
        return Err(PipelineError::InsufficientData {
            available: rows.len(),
        });
    }

    for (index, row) in rows.iter().enumerate() {
        PriceRecord::parse(row).map_err(|reason| PipelineError::MalformedRecord { index, reason })?;
    }

    Ok(())
}

/// Boolean form of [`validate_rows`].
pub fn is_valid(rows: &[RawRow]) -> bool {
    validate_rows(rows).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn well_formed_rows() -> Vec<RawRow> {
        (1..=10)
            .map(|day| RawRow::new("IBM", format!("{day:02}-04-2021"), format!("{day}.25")))
            .collect()
    }

    #[test]
    fn accepts_well_formed_rows() {
        assert!(is_valid(&well_formed_rows()));
    }

    #[test]
    fn rejects_fewer_than_ten_rows() {
        let rows = well_formed_rows();
        let err = validate_rows(&rows[..9]).expect_err("must fail");
        assert!(matches!(
            err,
            PipelineError::InsufficientData { available: 9 }
        ));
    }

    #[test]
    fn rejects_non_alphabetic_ticker() {
        let mut rows = well_formed_rows();
        rows[4].ticker = String::from("AAPL1");
        let err = validate_rows(&rows).expect_err("must fail");
        assert!(matches!(
            err,
            PipelineError::MalformedRecord {
                index: 4,
                reason: ValidationError::TickerNotAlphabetic { .. },
            }
        ));
    }

    #[test]
    fn rejects_impossible_date() {
        let mut rows = well_formed_rows();
        rows[0].date = String::from("31-02-2021");
        let err = validate_rows(&rows).expect_err("must fail");
        assert!(matches!(
            err,
            PipelineError::MalformedRecord {
                index: 0,
                reason: ValidationError::InvalidDate { .. },
            }
        ));
    }

    #[test]
    fn rejects_wrong_price_precision() {
        let mut rows = well_formed_rows();
        rows[9].price = String::from("10.5");
        let err = validate_rows(&rows).expect_err("must fail");
        assert!(matches!(
            err,
            PipelineError::MalformedRecord {
                index: 9,
                reason: ValidationError::PriceNotCanonical { .. },
            }
        ));
    }

    #[test]
    fn exactly_ten_rows_satisfy_the_length_check() {
        assert!(validate_rows(&well_formed_rows()).is_ok());
    }
}
