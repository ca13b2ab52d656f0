//! Storage error type

use mongodb::bson;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("no {resource} found with identifier: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid id format: {id}")]
    InvalidId {
        id: String,
        #[source]
        source: bson::oid::Error,
    },

    #[error("{operation} timed out after {seconds} seconds")]
    Timeout {
        operation: &'static str,
        seconds: u64,
    },

    #[error("store returned an unexpected id: {0}")]
    UnexpectedId(String),
}

impl DbError {
    /// True when the error means "no matching record" rather than a store failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = DbError::NotFound {
            resource: "book",
            id: "Dune".into(),
        };
        assert_eq!(err.to_string(), "no book found with identifier: Dune");
        assert!(err.is_not_found());
    }

    #[test]
    fn timeout_is_not_not_found() {
        let err = DbError::Timeout {
            operation: "list books",
            seconds: 10,
        };
        assert_eq!(err.to_string(), "list books timed out after 10 seconds");
        assert!(!err.is_not_found());
    }
}
