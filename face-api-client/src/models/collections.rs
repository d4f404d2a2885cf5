//! Payloads of the named collections: face lists, person groups and persons.

use serde::{Deserialize, Serialize};

use super::Model;
use super::common::{PERSISTED_FACE, PersistedFace};
use crate::record::RecordSchema;

pub const FACE_LIST: RecordSchema = RecordSchema {
    name: "FaceList",
    nested: &[],
    lists: &[("persistedFaces", &PERSISTED_FACE)],
    each: None,
};
pub const LARGE_FACE_LIST: RecordSchema = RecordSchema::plain("LargeFaceList");
pub const PERSON_GROUP: RecordSchema = RecordSchema::plain("PersonGroup");
pub const LARGE_PERSON_GROUP: RecordSchema = RecordSchema::plain("LargePersonGroup");
pub const PERSON: RecordSchema = RecordSchema::plain("Person");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceListInfo {
    pub face_list_id: Option<String>,
    pub name: Option<String>,
    pub user_data: Option<String>,
    pub recognition_model: Option<String>,
    /// Only returned by a single-list get.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persisted_faces: Option<Vec<PersistedFace>>,
}

impl Model for FaceListInfo {
    const SCHEMA: &'static RecordSchema = &FACE_LIST;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LargeFaceListInfo {
    pub large_face_list_id: Option<String>,
    pub name: Option<String>,
    pub user_data: Option<String>,
    pub recognition_model: Option<String>,
}

impl Model for LargeFaceListInfo {
    const SCHEMA: &'static RecordSchema = &LARGE_FACE_LIST;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonGroupInfo {
    pub person_group_id: Option<String>,
    pub name: Option<String>,
    pub user_data: Option<String>,
    pub recognition_model: Option<String>,
}

impl Model for PersonGroupInfo {
    const SCHEMA: &'static RecordSchema = &PERSON_GROUP;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LargePersonGroupInfo {
    pub large_person_group_id: Option<String>,
    pub name: Option<String>,
    pub user_data: Option<String>,
    pub recognition_model: Option<String>,
}

impl Model for LargePersonGroupInfo {
    const SCHEMA: &'static RecordSchema = &LARGE_PERSON_GROUP;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInfo {
    pub person_id: Option<String>,
    pub name: Option<String>,
    pub user_data: Option<String>,
    #[serde(default)]
    pub persisted_face_ids: Vec<String>,
}

impl Model for PersonInfo {
    const SCHEMA: &'static RecordSchema = &PERSON;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, Value};
    use serde_json::json;

    #[test]
    fn face_list_hydrates_persisted_faces() {
        let record = Record::hydrate(
            &FACE_LIST,
            json!({
                "faceListId": "celebrities",
                "name": "Celebrities",
                "persistedFaces": [
                    {"persistedFaceId": "a", "userData": "first"},
                    {"persistedFaceId": "b"}
                ]
            }),
        )
        .unwrap();

        let faces = record.get("persistedFaces").and_then(Value::as_records).unwrap();
        assert_eq!(faces.len(), 2);
        assert!(faces.iter().all(|f| f.type_name() == "PersistedFace"));
        assert_eq!(faces[1].get_str("persistedFaceId"), Some("b"));

        let info: FaceListInfo = record.decode().unwrap();
        assert_eq!(info.persisted_faces.map(|f| f.len()), Some(2));
    }

    #[test]
    fn person_face_ids_stay_raw() {
        let record = Record::hydrate(
            &PERSON,
            json!({"personId": "p1", "persistedFaceIds": ["a", "b"]}),
        )
        .unwrap();
        assert!(matches!(record.get("persistedFaceIds"), Some(Value::Raw(_))));

        let info = PersonInfo::from_record(&record).unwrap();
        assert_eq!(info.persisted_face_ids, ["a", "b"]);
    }
}
