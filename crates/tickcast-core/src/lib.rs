//! Core pipeline for tickcast.
//!
//! This crate contains:
//! - Canonical row, ticker, date and price domain models with validation
//! - The random window sampler and the three-point predictor
//! - The per-file pipeline orchestrator and its outcome reporting
//! - The storage seam and its CSV filesystem adapter

pub mod adapters;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod predictor;
pub mod sampler;
pub mod store;
pub mod validator;

pub use adapters::CsvStore;
pub use domain::{Price, PriceRecord, RawRow, Ticker, TradeDate, Window, WINDOW_LEN};
pub use error::{PipelineError, StoreError, ValidationError};
pub use pipeline::{FileOutcome, FileStatus, Pipeline, PipelineConfig, ValidationMode};
pub use predictor::{predict, PredictedPoint, Prediction};
pub use sampler::sample_window;
pub use store::{MemoryStore, RecordStore};
pub use validator::{is_valid, validate_rows};
