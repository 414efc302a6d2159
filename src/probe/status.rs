// src/probe/status.rs
use serde::{Deserialize, Serialize};

/// Request body for creating a status record.
#[derive(Debug, Serialize)]
pub struct StatusRequest {
    pub client_name: String,
}

/// A status record as minted by the backend. Extra keys in the response are
/// tolerated; the three fields below must all be present.
#[derive(Debug, Deserialize)]
pub struct StatusRecord {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_requires_all_three_keys() {
        let complete = r#"{"id": "abc", "client_name": "x", "timestamp": "2024-01-01T00:00:00"}"#;
        assert!(serde_json::from_str::<StatusRecord>(complete).is_ok());

        let missing_timestamp = r#"{"id": "abc", "client_name": "x"}"#;
        assert!(serde_json::from_str::<StatusRecord>(missing_timestamp).is_err());
    }

    #[test]
    fn record_tolerates_extra_keys() {
        let with_extra = r#"{"id": "abc", "client_name": "x", "timestamp": "t", "shard": 3}"#;
        let record: StatusRecord = serde_json::from_str(with_extra).unwrap();
        assert_eq!(record.id, "abc");
    }
}
