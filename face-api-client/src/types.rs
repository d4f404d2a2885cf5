use serde::{Deserialize, Serialize};

// ============ Service enums ============

/// Recognition model used when extracting face features.
///
/// A face list or person group keeps the model it was created with; faces
/// compared against it must be detected with the same model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecognitionModel {
    #[default]
    #[serde(rename = "recognition_01")]
    Recognition01,
    #[serde(rename = "recognition_02")]
    Recognition02,
}

impl RecognitionModel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recognition01 => "recognition_01",
            Self::Recognition02 => "recognition_02",
        }
    }
}

/// Similarity mode for find-similar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FindSimilarMode {
    /// Same-person search, using internal thresholds.
    #[default]
    MatchPerson,
    /// Ranks purely by similarity, even across persons.
    MatchFace,
}

impl FindSimilarMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MatchPerson => "matchPerson",
            Self::MatchFace => "matchFace",
        }
    }
}

/// Attributes that detection can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FaceAttributeType {
    Age,
    Gender,
    HeadPose,
    Smile,
    FacialHair,
    Glasses,
    Emotion,
    Hair,
    Makeup,
    Occlusion,
    Accessories,
    Blur,
    Exposure,
    Noise,
}

// ============ Request parameters ============

/// Query parameters for face detection.
///
/// # Default
///
/// Returns face ids only: no landmarks, no attributes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectParams {
    pub return_face_id: bool,
    pub return_face_landmarks: bool,
    pub return_face_attributes: Vec<FaceAttributeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognition_model: Option<RecognitionModel>,
    pub return_recognition_model: bool,
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            return_face_id: true,
            return_face_landmarks: false,
            return_face_attributes: Vec::new(),
            recognition_model: None,
            return_recognition_model: false,
        }
    }
}

impl DetectParams {
    #[must_use]
    pub fn with_landmarks(mut self) -> Self {
        self.return_face_landmarks = true;
        self
    }

    #[must_use]
    pub fn with_attributes(
        mut self,
        attributes: impl IntoIterator<Item = FaceAttributeType>,
    ) -> Self {
        self.return_face_attributes = attributes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_recognition_model(mut self, model: RecognitionModel) -> Self {
        self.recognition_model = Some(model);
        self
    }
}

/// Paging for list operations.
///
/// `start` is the id after which listing begins (exclusive), `top` the
/// maximum number of entries returned. Unset values are left to the service.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_recognition_model: Option<bool>,
}

impl ListParams {
    pub fn page(start: Option<&str>, top: Option<u32>) -> Self {
        Self {
            start: start.map(str::to_string),
            top,
            return_recognition_model: None,
        }
    }
}

/// Candidate set searched by find-similar.
///
/// Exactly one source is sent; the query face comes from the handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimilarFaceSource {
    FaceIds(Vec<String>),
    FaceList(String),
    LargeFaceList(String),
}

#[derive(Debug, Clone)]
pub struct FindSimilarRequest {
    pub source: SimilarFaceSource,
    pub max_num_of_candidates_returned: Option<u32>,
    pub mode: Option<FindSimilarMode>,
}

impl FindSimilarRequest {
    pub fn new(source: SimilarFaceSource) -> Self {
        Self {
            source,
            max_num_of_candidates_returned: None,
            mode: None,
        }
    }

    #[must_use]
    pub fn with_max_candidates(mut self, max: u32) -> Self {
        self.max_num_of_candidates_returned = Some(max);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: FindSimilarMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub(crate) fn to_body(&self, face_id: &str) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert("faceId".into(), face_id.into());
        match &self.source {
            SimilarFaceSource::FaceIds(ids) => {
                body.insert("faceIds".into(), ids.clone().into());
            }
            SimilarFaceSource::FaceList(id) => {
                body.insert("faceListId".into(), id.clone().into());
            }
            SimilarFaceSource::LargeFaceList(id) => {
                body.insert("largeFaceListId".into(), id.clone().into());
            }
        }
        if let Some(max) = self.max_num_of_candidates_returned {
            body.insert("maxNumOfCandidatesReturned".into(), max.into());
        }
        if let Some(mode) = self.mode {
            body.insert("mode".into(), mode.as_str().into());
        }
        serde_json::Value::Object(body)
    }
}

/// Person container a person belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonParent {
    PersonGroup(String),
    LargePersonGroup(String),
}

impl PersonParent {
    pub fn id(&self) -> &str {
        match self {
            Self::PersonGroup(id) | Self::LargePersonGroup(id) => id,
        }
    }

    /// Attribute naming the container in request bodies.
    pub fn id_field(&self) -> &'static str {
        match self {
            Self::PersonGroup(_) => "personGroupId",
            Self::LargePersonGroup(_) => "largePersonGroupId",
        }
    }

    /// Path prefix of the persons of this container.
    pub fn scope(&self) -> String {
        match self {
            Self::PersonGroup(id) => format!("/persongroups/{id}"),
            Self::LargePersonGroup(id) => format!("/largepersongroups/{id}"),
        }
    }
}

/// Identification of query faces against one person container.
#[derive(Debug, Clone)]
pub struct IdentifyRequest {
    pub face_ids: Vec<String>,
    pub group: PersonParent,
    pub max_num_of_candidates_returned: Option<u32>,
    pub confidence_threshold: Option<f64>,
}

impl IdentifyRequest {
    pub fn new(face_ids: Vec<String>, group: PersonParent) -> Self {
        Self {
            face_ids,
            group,
            max_num_of_candidates_returned: None,
            confidence_threshold: None,
        }
    }

    #[must_use]
    pub fn with_max_candidates(mut self, max: u32) -> Self {
        self.max_num_of_candidates_returned = Some(max);
        self
    }

    #[must_use]
    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = Some(threshold);
        self
    }

    pub(crate) fn to_body(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert("faceIds".into(), self.face_ids.clone().into());
        body.insert(self.group.id_field().into(), self.group.id().into());
        if let Some(max) = self.max_num_of_candidates_returned {
            body.insert("maxNumOfCandidatesReturned".into(), max.into());
        }
        if let Some(threshold) = self.confidence_threshold {
            body.insert("confidenceThreshold".into(), threshold.into());
        }
        serde_json::Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::normalize_struct;
    use serde_json::json;

    #[test]
    fn detect_params_query() {
        let params = DetectParams::default()
            .with_landmarks()
            .with_attributes([FaceAttributeType::Age, FaceAttributeType::HeadPose])
            .with_recognition_model(RecognitionModel::Recognition02);

        let query = normalize_struct(&params).unwrap();
        let expected: Vec<(String, String)> = [
            ("returnFaceId", "true"),
            ("returnFaceLandmarks", "true"),
            ("returnFaceAttributes", "age,headPose"),
            ("recognitionModel", "recognition_02"),
            ("returnRecognitionModel", "false"),
        ]
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
        assert_eq!(query, expected);
    }

    #[test]
    fn default_detect_omits_attributes() {
        let query = normalize_struct(&DetectParams::default()).unwrap();
        assert!(query.iter().all(|(k, _)| k != "returnFaceAttributes"));
    }

    #[test]
    fn list_params_skip_unset() {
        let query = normalize_struct(&ListParams::page(Some("g1"), Some(10))).unwrap();
        assert_eq!(
            query,
            vec![
                ("start".to_string(), "g1".to_string()),
                ("top".to_string(), "10".to_string())
            ]
        );
        assert!(normalize_struct(&ListParams::default()).unwrap().is_empty());
    }

    #[test]
    fn find_similar_body() {
        let request = FindSimilarRequest::new(SimilarFaceSource::LargeFaceList("lfl".into()))
            .with_max_candidates(5)
            .with_mode(FindSimilarMode::MatchFace);
        assert_eq!(
            request.to_body("f1"),
            json!({
                "faceId": "f1",
                "largeFaceListId": "lfl",
                "maxNumOfCandidatesReturned": 5,
                "mode": "matchFace"
            })
        );
    }

    #[test]
    fn identify_body_names_container() {
        let request = IdentifyRequest::new(
            vec!["f1".into()],
            PersonParent::LargePersonGroup("lpg".into()),
        )
        .with_confidence_threshold(0.5);
        assert_eq!(
            request.to_body(),
            json!({"faceIds": ["f1"], "largePersonGroupId": "lpg", "confidenceThreshold": 0.5})
        );
    }

    #[test]
    fn person_parent_scope() {
        assert_eq!(PersonParent::PersonGroup("g".into()).scope(), "/persongroups/g");
        assert_eq!(
            PersonParent::LargePersonGroup("g".into()).scope(),
            "/largepersongroups/g"
        );
    }

    #[test]
    fn recognition_model_names() {
        assert_eq!(
            serde_json::to_value(RecognitionModel::Recognition02).unwrap(),
            json!("recognition_02")
        );
        assert_eq!(RecognitionModel::default().as_str(), "recognition_01");
    }
}
