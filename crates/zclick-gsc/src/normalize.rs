//! Normalization of raw Search Analytics rows into domain records.

use zclick_core::KeywordRecord;

use crate::types::ApiRow;

/// Converts raw API rows into [`KeywordRecord`]s.
///
/// One record per row, in API order. The dimension-value list is carried
/// through unchanged regardless of how many dimensions were requested, and
/// `ctr` is rescaled from a fraction to a percentage. Duplicate dimension
/// tuples pass through as-is; this pipeline does not deduplicate. An empty
/// input yields an empty record set, not an error.
#[must_use]
pub fn normalize_rows(rows: Vec<ApiRow>) -> Vec<KeywordRecord> {
    rows.into_iter()
        .map(|row| KeywordRecord {
            keys: row.keys,
            clicks: row.clicks,
            impressions: row.impressions,
            ctr: row.ctr * 100.0,
            position: row.position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(keys: &[&str], clicks: u64, impressions: u64, ctr: f64) -> ApiRow {
        ApiRow {
            keys: keys.iter().map(|k| (*k).to_string()).collect(),
            clicks,
            impressions,
            ctr,
            position: 4.5,
        }
    }

    #[test]
    fn rescales_ctr_to_percentage() {
        let records = normalize_rows(vec![raw(&["best coffee"], 10, 1000, 0.01)]);
        assert_eq!(records.len(), 1);
        assert!((records[0].ctr - 1.0).abs() < f64::EPSILON);
        assert_eq!(records[0].clicks, 10);
        assert_eq!(records[0].impressions, 1000);
    }

    #[test]
    fn carries_multi_dimension_keys_through() {
        let records = normalize_rows(vec![raw(&["best coffee", "usa"], 5, 50, 0.1)]);
        assert_eq!(records[0].keys, vec!["best coffee", "usa"]);
        assert_eq!(records[0].label(), "best coffee / usa");
    }

    #[test]
    fn preserves_api_row_order() {
        let records = normalize_rows(vec![
            raw(&["a"], 1, 10, 0.1),
            raw(&["b"], 2, 20, 0.1),
            raw(&["a"], 1, 10, 0.1),
        ]);
        let keys: Vec<_> = records.iter().map(KeywordRecord::label).collect();
        assert_eq!(keys, vec!["a", "b", "a"], "order and duplicates preserved");
    }

    #[test]
    fn empty_input_yields_empty_record_set() {
        assert!(normalize_rows(Vec::new()).is_empty());
    }
}
