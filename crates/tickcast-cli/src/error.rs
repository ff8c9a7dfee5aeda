use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error(transparent)]
    Store(#[from] tickcast_core::StoreError),

    #[error("strict mode failed: skipped={skipped}, warnings={warning_count}")]
    StrictModeViolation {
        skipped: usize,
        warning_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::StrictModeViolation { .. } => 5,
            Self::Store(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
