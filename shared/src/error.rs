use thiserror::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SharedError {
    fn from(error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(error.to_string())
        } else {
            Self::Io(error.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        assert!(matches!(SharedError::from(io), SharedError::NotFound(_)));
    }

    #[test]
    fn test_other_io_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SharedError::from(io);
        assert!(matches!(err, SharedError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: denied");
    }

    #[test]
    fn test_error_round_trips_through_json() {
        let err = SharedError::InvalidData("row 2: missing SKU".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"InvalidData":"row 2: missing SKU"}"#);
    }
}
