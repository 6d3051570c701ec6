//! Error types for the tour crate.

use thiserror::Error;

/// Result type alias for tour operations.
pub type Result<T> = std::result::Result<T, TourError>;

/// Errors that can occur while loading tours or driving a session.
///
/// Every session operation validates its input before touching state, so any
/// of these leaves the session exactly as it was.
#[derive(Debug, Error)]
pub enum TourError {
    /// Tour id absent from the catalog, or a tour that failed validation
    #[error("Invalid tour '{id}': {reason}")]
    InvalidTour { id: String, reason: String },

    /// Non-finite or out-of-range latitude/longitude
    #[error("Malformed position ({latitude}, {longitude})")]
    MalformedPosition { latitude: f64, longitude: f64 },

    /// A tour is already running in this session
    #[error("Tour '{0}' is already active")]
    TourAlreadyActive(String),

    /// Operation needs an active tour
    #[error("No tour is active")]
    NoActiveTour,

    /// Artwork id not part of the active tour
    #[error("Artwork '{artwork_id}' is not part of tour '{tour_id}'")]
    UnknownArtwork { tour_id: String, artwork_id: String },

    /// Configuration could not be read or is out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog could not be read or parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error code for programmatic handling.
/// Range: 11xxx for tour errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourErrorCode {
    /// Unknown or malformed tour
    InvalidTour = 11001,
    /// Rejected position update
    MalformedPosition = 11002,
    /// Tour selected twice
    TourAlreadyActive = 11003,
    /// No active tour
    NoActiveTour = 11004,
    /// Artwork not in tour
    UnknownArtwork = 11005,
    /// Configuration problem
    Config = 11006,
    /// Catalog problem
    Catalog = 11007,
    /// JSON parsing error
    JsonParsing = 11008,
    /// TOML parsing error
    TomlParsing = 11009,
    /// IO error
    Io = 11010,
}

impl TourErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }
}

impl std::fmt::Display for TourErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{:05}", self.code())
    }
}

impl TourError {
    pub(crate) fn invalid_tour(id: impl Into<String>, reason: impl Into<String>) -> Self {
        TourError::InvalidTour { id: id.into(), reason: reason.into() }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> TourErrorCode {
        match self {
            TourError::InvalidTour { .. } => TourErrorCode::InvalidTour,
            TourError::MalformedPosition { .. } => TourErrorCode::MalformedPosition,
            TourError::TourAlreadyActive(_) => TourErrorCode::TourAlreadyActive,
            TourError::NoActiveTour => TourErrorCode::NoActiveTour,
            TourError::UnknownArtwork { .. } => TourErrorCode::UnknownArtwork,
            TourError::Config(_) => TourErrorCode::Config,
            TourError::Catalog(_) => TourErrorCode::Catalog,
            TourError::Json(_) => TourErrorCode::JsonParsing,
            TourError::Toml(_) => TourErrorCode::TomlParsing,
            TourError::Io(_) => TourErrorCode::Io,
        }
    }

    /// True for errors caused by the caller's input rather than the environment.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            TourError::InvalidTour { .. }
                | TourError::MalformedPosition { .. }
                | TourError::TourAlreadyActive(_)
                | TourError::NoActiveTour
                | TourError::UnknownArtwork { .. }
        )
    }
}
