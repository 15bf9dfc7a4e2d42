//! JSON serialization of enrichment results.

use crate::result::ActivityTable;

/// Serialize an activity table to a compact JSON string.
pub fn to_json(table: &ActivityTable) -> Result<String, serde_json::Error> {
    serde_json::to_string(table)
}

/// Serialize an activity table to an indented JSON string.
pub fn to_json_pretty(table: &ActivityTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::KinaseActivity;

    #[test]
    fn round_trips_through_serde() {
        let table = ActivityTable::new(vec![KinaseActivity {
            kinase: "AKT1".to_string(),
            score: 1.25,
            p_value: 0.001,
            p_adjusted: 0.01,
            substrate_count: 7,
            significant: true,
        }]);

        let json = to_json(&table).unwrap();
        assert!(json.contains("\"AKT1\""));

        let parsed: ActivityTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn pretty_output_is_indented() {
        let json = to_json_pretty(&ActivityTable::default()).unwrap();
        assert!(json.contains('\n'));
    }
}
