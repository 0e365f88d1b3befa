//! Row structs and operation outcomes for the `projects` table.
//!
//! Field names serialise in camelCase (`imgUrl`, `insertId`, `affectedRows`).
//! Column names differ from field names for `image_url` and `github_rep_link`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

/// The six caller-supplied fields of a project.
///
/// Used both for inserts and for full-replacement updates. Absent fields are
/// written as `NULL`; this layer performs no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub img_url: Option<String>,
    pub tech_used: Option<String>,
    pub github_url: Option<String>,
    pub live_demo_link: Option<String>,
}

/// A persisted project row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Store-assigned primary key.
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    #[sqlx(rename = "image_url")]
    pub img_url: Option<String>,
    pub tech_used: Option<String>,
    #[sqlx(rename = "github_rep_link")]
    pub github_url: Option<String>,
    pub live_demo_link: Option<String>,
}

// ---------------------------------------------------------------------------
// outcomes
// ---------------------------------------------------------------------------

/// In-band result of `save_project`. Failures are reported here, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveOutcome {
    pub fn inserted(id: i64) -> Self {
        Self { success: true, insert_id: Some(id), error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, insert_id: None, error: Some(message.into()) }
    }
}

/// Raw driver result of `update_project`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    /// Zero when no row carries the requested id.
    pub affected_rows: u64,
}

/// Message carried by a delete that matched no row.
pub const PROJECT_NOT_FOUND: &str = "Project not found.";

/// Result of `delete_project` when the statement itself ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DeleteOutcome {
    pub fn deleted() -> Self {
        Self { success: true, message: None }
    }

    pub fn not_found() -> Self {
        Self { success: false, message: Some(PROJECT_NOT_FOUND.to_string()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn save_outcome_omits_absent_fields() {
        assert_eq!(
            serde_json::to_value(SaveOutcome::inserted(7)).unwrap(),
            json!({ "success": true, "insertId": 7 })
        );
        assert_eq!(
            serde_json::to_value(SaveOutcome::failed("boom")).unwrap(),
            json!({ "success": false, "error": "boom" })
        );
    }

    #[test]
    fn delete_outcome_shapes() {
        assert_eq!(
            serde_json::to_value(DeleteOutcome::deleted()).unwrap(),
            json!({ "success": true })
        );
        assert_eq!(
            serde_json::to_value(DeleteOutcome::not_found()).unwrap(),
            json!({ "success": false, "message": "Project not found." })
        );
    }

    #[test]
    fn new_project_accepts_partial_camel_case_input() {
        let p: NewProject =
            serde_json::from_value(json!({ "title": "Site", "imgUrl": "a.png" })).unwrap();
        assert_eq!(p.title.as_deref(), Some("Site"));
        assert_eq!(p.img_url.as_deref(), Some("a.png"));
        assert!(p.github_url.is_none());
    }

    #[test]
    fn update_result_uses_affected_rows_key() {
        assert_eq!(
            serde_json::to_value(UpdateResult { affected_rows: 0 }).unwrap(),
            json!({ "affectedRows": 0 })
        );
    }
}
