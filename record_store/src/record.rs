
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anything that can live in a [`Store`](crate::Store).
pub trait Record: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Record for T {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record together with the id its store assigned on insert.
/// Serializes flat: `{"id": "...", <record fields>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord<T> {
    pub id: RecordId,
    #[serde(flatten)]
    pub record: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Person {
        user_name: String,
        age: String,
    }

    #[test]
    fn stored_record_serializes_flat() {
        let stored = StoredRecord {
            id: RecordId::generate(),
            record: Person { user_name: "Wong".to_string(), age: "25".to_string() },
        };

        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(
            value,
            json!({
                "id": stored.id.to_string(),
                "userName": "Wong",
                "age": "25",
            })
        );
    }

    #[test]
    fn generated_ids_differ() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
        assert_eq!(a.to_string(), a.0.to_string());
    }
}
