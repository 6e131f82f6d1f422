//! # Record Model
//!
//! The only persisted entity. Field order here is the field order in the
//! data file and in API responses.

use serde::{Deserialize, Serialize};

/// A persisted submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub memo: Option<String>,
    pub timestamp: String,
    pub received_at: String,
}

/// A sanitized submission that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub value: Option<f64>,
    pub memo: Option<String>,
    pub timestamp: String,
    pub received_at: String,
}

impl NewRecord {
    /// Attach the store-assigned id
    pub fn into_record(self, id: u64) -> Record {
        Record {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            value: self.value,
            memo: self.memo,
            timestamp: self.timestamp,
            received_at: self.received_at,
        }
    }
}

/// Highest id in a collection, 0 when empty
pub fn max_id(records: &[Record]) -> u64 {
    records.iter().map(|r| r.id).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> NewRecord {
        NewRecord {
            title: "Water level".to_string(),
            description: None,
            category: "river".to_string(),
            value: Some(1.25),
            memo: None,
            timestamp: "2024-05-01T09:00:00".to_string(),
            received_at: "2024-05-01T09:00:03.000000Z".to_string(),
        }
    }

    #[test]
    fn test_absent_optionals_serialize_as_null() {
        let record = draft().into_record(3);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["memo"], serde_json::Value::Null);
        assert_eq!(json["value"], 1.25);
    }

    #[test]
    fn test_field_order_matches_file_layout() {
        let text = serde_json::to_string(&draft().into_record(1)).unwrap();
        let positions: Vec<usize> = [
            "\"id\"",
            "\"title\"",
            "\"description\"",
            "\"category\"",
            "\"value\"",
            "\"memo\"",
            "\"timestamp\"",
            "\"received_at\"",
        ]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_missing_optional_keys_deserialize() {
        let record: Record = serde_json::from_value(json!({
            "id": 9,
            "title": "t",
            "category": "c",
            "timestamp": "x",
            "received_at": "y"
        }))
        .unwrap();

        assert_eq!(record.description, None);
        assert_eq!(record.value, None);
    }

    #[test]
    fn test_max_id() {
        assert_eq!(max_id(&[]), 0);
        let records = vec![draft().into_record(4), draft().into_record(2)];
        assert_eq!(max_id(&records), 4);
    }
}
