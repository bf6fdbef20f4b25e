use std::fmt;
use std::io;

use sort_strategies_rs::ParseSortAlgorithmError;

#[derive(Debug)]
pub enum ReportError {
    Io(io::Error),
    Json(serde_json::Error),
    /// An environment variable held a value that could not be used.
    Config { var: &'static str, value: String },
    Algorithm(ParseSortAlgorithmError),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io(err) => write!(f, "failed to write report: {err}"),
            ReportError::Json(err) => write!(f, "failed to serialize results: {err}"),
            ReportError::Config { var, value } => write!(f, "invalid value `{value}` for {var}"),
            ReportError::Algorithm(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(err) => Some(err),
            ReportError::Json(err) => Some(err),
            ReportError::Config { .. } => None,
            ReportError::Algorithm(err) => Some(err),
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(err: io::Error) -> Self {
        ReportError::Io(err)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Json(err)
    }
}

impl From<ParseSortAlgorithmError> for ReportError {
    fn from(err: ParseSortAlgorithmError) -> Self {
        ReportError::Algorithm(err)
    }
}
