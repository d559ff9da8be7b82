use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeliodayError {
    #[error("Invalid scan window: offset_count must be at least 1")]
    InvalidScanWindow,

    #[error("Position provider failure: {0}")]
    ProviderFailure(String),

    #[error("Invalid JPL Horizons response: {0}")]
    InvalidHorizonsResponse(String),

    #[error("Invalid ephemeris source: {0}")]
    InvalidEphemerisSource(String),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] ureq::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl PartialEq for HeliodayError {
    fn eq(&self, other: &Self) -> bool {
        use HeliodayError::*;
        match (self, other) {
            (InvalidScanWindow, InvalidScanWindow) => true,
            (ProviderFailure(a), ProviderFailure(b)) => a == b,
            (InvalidHorizonsResponse(a), InvalidHorizonsResponse(b)) => a == b,
            (InvalidEphemerisSource(a), InvalidEphemerisSource(b)) => a == b,
            (InvalidDateFormat(a), InvalidDateFormat(b)) => a == b,

            // Wrapped errors are not comparable: equality means same variant
            (UreqHttpError(_), UreqHttpError(_)) => true,
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}
