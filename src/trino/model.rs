//! Wire types of the `/v1/statement` protocol.
//! Only the fields the client acts on are kept; the rest are skipped.

use serde::Deserialize;
use serde_json::Value;

/// One page of a statement's progress, as returned by `POST /v1/statement`
/// and every subsequent `nextUri`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResults {
    pub id: String,
    #[serde(default)]
    pub next_uri: Option<String>,
    #[serde(default)]
    pub columns: Option<Vec<ColumnInfo>>,
    #[serde(default)]
    pub data: Option<Vec<Vec<Value>>>,
    #[serde(default)]
    pub error: Option<QueryError>,
    #[serde(default)]
    pub update_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryError {
    pub message: String,
    #[serde(default)]
    pub error_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_queued_page() {
        let page: QueryResults = serde_json::from_str(
            r#"{
                "id": "20241019_000001_00000_abcde",
                "infoUri": "http://localhost:8080/ui/query.html?20241019_000001_00000_abcde",
                "nextUri": "http://localhost:8080/v1/statement/queued/20241019_000001_00000_abcde/y1/1",
                "stats": {"state": "QUEUED", "queued": true, "scheduled": false, "processedRows": 0},
                "warnings": []
            }"#,
        )
        .unwrap();
        assert!(page.next_uri.is_some());
        assert!(page.data.is_none());
        assert!(page.error.is_none());
    }

    #[test]
    fn parses_final_page_with_data() {
        let page: QueryResults = serde_json::from_str(
            r#"{
                "id": "q1",
                "columns": [
                    {"name": "country", "type": "varchar", "typeSignature": {"rawType": "varchar", "arguments": []}},
                    {"name": "avg_suicide_rate", "type": "double", "typeSignature": {"rawType": "double", "arguments": []}}
                ],
                "data": [["Lithuania", 40.42], ["Sri Lanka", 35.3]],
                "stats": {"state": "FINISHED", "processedRows": 27820}
            }"#,
        )
        .unwrap();
        let columns = page.columns.unwrap();
        assert_eq!(columns[1].name, "avg_suicide_rate");
        let data = page.data.unwrap();
        assert_eq!(data[0][0], "Lithuania");
        assert_eq!(data[1][1].as_f64(), Some(35.3));
        assert!(page.next_uri.is_none());
    }

    #[test]
    fn parses_failure() {
        let page: QueryResults = serde_json::from_str(
            r#"{
                "id": "q2",
                "stats": {"state": "FAILED"},
                "error": {
                    "message": "line 1:15: Table 'iceberg.suicide_data.missing' does not exist",
                    "errorCode": 46,
                    "errorName": "TABLE_NOT_FOUND",
                    "errorType": "USER_ERROR"
                }
            }"#,
        )
        .unwrap();
        let error = page.error.unwrap();
        assert_eq!(error.error_name, "TABLE_NOT_FOUND");
        assert!(error.message.ends_with("does not exist"));
    }

    #[test]
    fn parses_update_count() {
        let page: QueryResults = serde_json::from_str(
            r#"{"id": "q3", "updateType": "INSERT", "updateCount": 4000, "stats": {"state": "FINISHED"}}"#,
        )
        .unwrap();
        assert_eq!(page.update_count, Some(4000));
    }
}
