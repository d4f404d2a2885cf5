use serde::{Deserialize, Serialize};

use super::Model;
use crate::record::RecordSchema;

pub const SIMILAR_FACE: RecordSchema = RecordSchema::plain("SimilarFace");
pub const GROUP_RESULT: RecordSchema = RecordSchema::plain("GroupResult");
pub const IDENTIFY_CANDIDATE: RecordSchema = RecordSchema::plain("IdentifyCandidate");
pub const IDENTIFY_RESULT: RecordSchema = RecordSchema {
    name: "IdentifyResult",
    nested: &[],
    lists: &[("candidates", &IDENTIFY_CANDIDATE)],
    each: None,
};
pub const VERIFY_RESULT: RecordSchema = RecordSchema::plain("VerifyResult");

/// One match from a find-similar call.
///
/// Exactly one of `face_id` and `persisted_face_id` is set, depending on
/// whether the search ran over face ids or over a face list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarFace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persisted_face_id: Option<String>,
    pub confidence: Option<f64>,
}

impl Model for SimilarFace {
    const SCHEMA: &'static RecordSchema = &SIMILAR_FACE;
}

/// Faces partitioned by similarity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResult {
    #[serde(default)]
    pub groups: Vec<Vec<String>>,
    /// Faces not similar to any other face.
    #[serde(default)]
    pub messy_group: Vec<String>,
}

impl Model for GroupResult {
    const SCHEMA: &'static RecordSchema = &GROUP_RESULT;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyCandidate {
    pub person_id: String,
    pub confidence: f64,
}

/// Candidates for one query face, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyResult {
    pub face_id: String,
    #[serde(default)]
    pub candidates: Vec<IdentifyCandidate>,
}

impl Model for IdentifyResult {
    const SCHEMA: &'static RecordSchema = &IDENTIFY_RESULT;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResult {
    pub is_identical: bool,
    pub confidence: f64,
}

impl Model for VerifyResult {
    const SCHEMA: &'static RecordSchema = &VERIFY_RESULT;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identify_results_keep_candidate_order() {
        let results = IdentifyResult::list_from_json(json!([
            {"faceId": "f1", "candidates": [
                {"personId": "p1", "confidence": 0.92},
                {"personId": "p2", "confidence": 0.71}
            ]},
            {"faceId": "f2", "candidates": []}
        ]))
        .unwrap();

        assert_eq!(results.len(), 2);
        let ids: Vec<&str> = results[0]
            .candidates
            .iter()
            .map(|c| c.person_id.as_str())
            .collect();
        assert_eq!(ids, ["p1", "p2"]);
        assert!(results[1].candidates.is_empty());
    }

    #[test]
    fn group_result_defaults_missing_messy_group() {
        let result = GroupResult::from_json(json!({"groups": [["a", "b"], ["c"]]})).unwrap();
        assert_eq!(result.groups.len(), 2);
        assert!(result.messy_group.is_empty());
    }

    #[test]
    fn verify_result_decodes() {
        let result =
            VerifyResult::from_json(json!({"isIdentical": true, "confidence": 0.9})).unwrap();
        assert!(result.is_identical);
    }

    #[test]
    fn list_payload_must_be_an_array() {
        assert!(SimilarFace::list_from_json(json!({"faceId": "x"})).is_err());
    }
}
