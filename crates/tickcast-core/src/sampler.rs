//! Random contiguous window extraction.

use rand::Rng;

use crate::domain::{RawRow, WINDOW_LEN};
use crate::error::PipelineError;

/// Pick a uniformly random start offset in `[0, len - 10]` inclusive and
/// return the ten consecutive rows from there, in source order.
///
/// Fails with [`PipelineError::InsufficientData`] when fewer than ten rows
/// are available; that condition is reported distinctly from validation
/// failures even though both skip the file.
pub fn sample_window<R: Rng + ?Sized>(
    rows: &[RawRow],
    rng: &mut R,
) -> Result<Vec<RawRow>, PipelineError> {
    if rows.len() < WINDOW_LEN {
        return Err(PipelineError::InsufficientData {
            available: rows.len(),
        });
    }

    let start = rng.gen_range(0..=rows.len() - WINDOW_LEN);
    Ok(rows[start..start + WINDOW_LEN].to_vec())
}
