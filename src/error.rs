/// Broad failure category of a [`FuelWatchError`].
///
/// Lets the binary and tests tell a network failure apart from a bad report
/// date or a broken ledger without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Listing page or document could not be retrieved or resolved.
    Network,
    /// The downloaded document could not be read.
    Document,
    /// The report carried a date that does not exist on the calendar.
    Calendar,
    /// Local storage failed: the ledger, or the data directory it lives in.
    Ledger,
}

#[derive(Debug, thiserror::Error)]
pub enum FuelWatchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTML selector error: {0}")]
    Selector(String),

    #[error("No report link matching '{fragment}' found at {listing_url}")]
    ReportLinkNotFound {
        listing_url: String,
        fragment: String,
    },

    #[error("Document error: {0}")]
    Document(#[from] lopdf::Error),

    #[error("Invalid report date: {year}-{month:02}-{day:02}")]
    InvalidReportDate { year: i32, month: u32, day: u32 },

    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not move file into place: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Could not move file into place: {0}")]
    PathPersist(#[from] tempfile::PathPersistError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FuelWatchError {
    /// Classify this error into one of the run's failure categories.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Http(_)
            | Self::InvalidUrl(_)
            | Self::Selector(_)
            | Self::ReportLinkNotFound { .. } => FailureKind::Network,
            Self::Document(_) => FailureKind::Document,
            Self::InvalidReportDate { .. } => FailureKind::Calendar,
            Self::DuckDb(_)
            | Self::Io(_)
            | Self::Persist(_)
            | Self::PathPersist(_)
            | Self::Json(_) => FailureKind::Ledger,
        }
    }
}

pub type Result<T> = std::result::Result<T, FuelWatchError>;
