//! Book record and request payload

use serde::{Deserialize, Serialize};

/// A persisted book.
///
/// `id` is the store-assigned ObjectId in its 24-character hex form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Create/update request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPayload {
    pub name: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_json_shape() {
        let book = Book {
            id: "65f1c0ffee0000000000abcd".into(),
            name: "Dune".into(),
            price: 9.99,
        };
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "65f1c0ffee0000000000abcd", "name": "Dune", "price": 9.99})
        );
    }

    #[test]
    fn payload_accepts_integer_price() {
        let payload: BookPayload = serde_json::from_str(r#"{"name": "Dune", "price": 10}"#).unwrap();
        assert_eq!(payload.price, 10.0);
    }

    #[test]
    fn payload_rejects_string_price() {
        let result = serde_json::from_str::<BookPayload>(r#"{"name": "Dune", "price": "cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn payload_requires_name() {
        let result = serde_json::from_str::<BookPayload>(r#"{"price": 9.99}"#);
        assert!(result.is_err());
    }
}
