//! Cassette data structures for replaying interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded interaction with an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number within the cassette.
    pub seq: u64,
    /// Port name (`"clock"` or `"fs"`).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was authored.
    pub recorded_at: DateTime<Utc>,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_cassette() -> Cassette {
        Cassette {
            name: "snapshot-run".into(),
            recorded_at: Utc::now(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "clock".into(),
                    method: "now".into(),
                    input: json!({}),
                    output: json!("2025-07-01T08:00:00Z"),
                },
                Interaction {
                    seq: 1,
                    port: "fs".into(),
                    method: "read_to_string".into(),
                    input: json!({"path": "/project/server.js"}),
                    output: json!({"ok": "const app = express();"}),
                },
            ],
        }
    }

    #[test]
    fn yaml_round_trip() {
        let cassette = sample_cassette();
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        let deserialized: Cassette = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(cassette, deserialized);
    }
}
