//! Detected face payloads: rectangle, landmarks and attributes.

use serde::{Deserialize, Serialize};

use super::Model;
use crate::record::RecordSchema;

pub const FACE_RECTANGLE: RecordSchema = RecordSchema::plain("FaceRectangle");
pub const FACE_LANDMARK: RecordSchema = RecordSchema::plain("FaceLandmark");
/// Every landmark entry is a point, whatever its name.
pub const FACE_LANDMARKS: RecordSchema = RecordSchema {
    name: "FaceLandmarks",
    nested: &[],
    lists: &[],
    each: Some(&FACE_LANDMARK),
};
pub const FACIAL_HAIR: RecordSchema = RecordSchema::plain("FacialHair");
pub const HEAD_POSE: RecordSchema = RecordSchema::plain("HeadPose");
pub const EMOTION: RecordSchema = RecordSchema::plain("Emotion");
pub const HAIR_COLOR: RecordSchema = RecordSchema::plain("HairColor");
pub const HAIR: RecordSchema = RecordSchema {
    name: "Hair",
    nested: &[],
    lists: &[("hairColor", &HAIR_COLOR)],
    each: None,
};
pub const MAKEUP: RecordSchema = RecordSchema::plain("Makeup");
pub const OCCLUSION: RecordSchema = RecordSchema::plain("Occlusion");
pub const ACCESSORY: RecordSchema = RecordSchema::plain("Accessory");
pub const BLUR: RecordSchema = RecordSchema::plain("Blur");
pub const EXPOSURE: RecordSchema = RecordSchema::plain("Exposure");
pub const NOISE: RecordSchema = RecordSchema::plain("Noise");
pub const FACE_ATTRIBUTES: RecordSchema = RecordSchema {
    name: "FaceAttributes",
    nested: &[
        ("facialHair", &FACIAL_HAIR),
        ("headPose", &HEAD_POSE),
        ("emotion", &EMOTION),
        ("hair", &HAIR),
        ("makeup", &MAKEUP),
        ("occlusion", &OCCLUSION),
        ("blur", &BLUR),
        ("noise", &NOISE),
        ("exposure", &EXPOSURE),
    ],
    lists: &[("accessories", &ACCESSORY)],
    each: None,
};
pub const FACE: RecordSchema = RecordSchema {
    name: "Face",
    nested: &[
        ("faceRectangle", &FACE_RECTANGLE),
        ("faceLandmarks", &FACE_LANDMARKS),
        ("faceAttributes", &FACE_ATTRIBUTES),
    ],
    lists: &[],
    each: None,
};

/// A rectangle area for the face location on an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRectangle {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceRectangle {
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// `"left,top,width,height"`, the `targetFace` query parameter format.
    pub fn as_param(&self) -> String {
        format!("{},{},{},{}", self.left, self.top, self.width, self.height)
    }
}

impl Model for FaceRectangle {
    const SCHEMA: &'static RecordSchema = &FACE_RECTANGLE;
}

/// A single landmark point, in image pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceLandmark {
    pub x: f64,
    pub y: f64,
}

/// The 27-point face landmark set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceLandmarks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pupil_left: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pupil_right: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nose_tip: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouth_left: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouth_right: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow_left_outer: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow_left_inner: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_left_outer: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_left_top: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_left_bottom: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_left_inner: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow_right_inner: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow_right_outer: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_right_inner: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_right_top: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_right_bottom: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_right_outer: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nose_root_left: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nose_root_right: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nose_left_alar_top: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nose_right_alar_top: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nose_left_alar_out_tip: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nose_right_alar_out_tip: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_lip_top: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_lip_bottom: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub under_lip_top: Option<FaceLandmark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub under_lip_bottom: Option<FaceLandmark>,
}

impl Model for FaceLandmarks {
    const SCHEMA: &'static RecordSchema = &FACE_LANDMARKS;
}

/// Lengths in three facial hair areas, each in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacialHair {
    pub moustache: Option<f64>,
    pub beard: Option<f64>,
    pub sideburns: Option<f64>,
}

/// Roll/yaw/pitch angles for face direction. Pitch is reserved and always 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadPose {
    pub roll: Option<f64>,
    pub yaw: Option<f64>,
    pub pitch: Option<f64>,
}

/// Emotion intensities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Emotion {
    pub anger: Option<f64>,
    pub contempt: Option<f64>,
    pub disgust: Option<f64>,
    pub fear: Option<f64>,
    pub happiness: Option<f64>,
    pub neutral: Option<f64>,
    pub sadness: Option<f64>,
    pub surprise: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HairColor {
    pub color: Option<String>,
    pub confidence: Option<f64>,
}

/// Whether the hair is visible, bald, and its color candidates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hair {
    pub bald: Option<f64>,
    pub invisible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<Vec<HairColor>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Makeup {
    pub eye_makeup: Option<bool>,
    pub lip_makeup: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occlusion {
    pub forehead_occluded: Option<bool>,
    pub eye_occluded: Option<bool>,
    pub mouth_occluded: Option<bool>,
}

/// An accessory (headwear, glasses, mask) with its confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blur {
    pub blur_level: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exposure {
    pub exposure_level: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Noise {
    pub noise_level: Option<String>,
    pub value: Option<f64>,
}

/// Facial attributes requested through `returnFaceAttributes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smile: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facial_hair: Option<FacialHair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glasses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_pose: Option<HeadPose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair: Option<Hair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub makeup: Option<Makeup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occlusion: Option<Occlusion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessories: Option<Vec<Accessory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure: Option<Exposure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise: Option<Noise>,
}

impl Model for FaceAttributes {
    const SCHEMA: &'static RecordSchema = &FACE_ATTRIBUTES;
}

/// A face returned by detection.
///
/// `faceId` is only present when detection was asked for it, and expires on
/// the service side after 24 hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognition_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_rectangle: Option<FaceRectangle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_landmarks: Option<FaceLandmarks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_attributes: Option<FaceAttributes>,
}

impl Model for FaceInfo {
    const SCHEMA: &'static RecordSchema = &FACE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, Value};
    use serde_json::json;

    fn detected() -> serde_json::Value {
        json!({
            "faceId": "c5c24a82-6845-4031-9d5d-978df9175426",
            "recognitionModel": "recognition_02",
            "faceRectangle": {"width": 78, "height": 78, "left": 394, "top": 54},
            "faceLandmarks": {
                "pupilLeft": {"x": 412.7, "y": 78.4},
                "noseTip": {"x": 437.7, "y": 92.4}
            },
            "faceAttributes": {
                "age": 71.0,
                "gender": "male",
                "hair": {"bald": 0.1, "invisible": false, "hairColor": [
                    {"color": "brown", "confidence": 1.0},
                    {"color": "blond", "confidence": 0.88}
                ]},
                "accessories": [{"type": "glasses", "confidence": 1.0}],
                "headPose": {"roll": -13.2, "yaw": 13.9, "pitch": 0.0}
            }
        })
    }

    #[test]
    fn face_record_hydrates_nested_schemas() {
        let record = Record::hydrate(&FACE, detected()).unwrap();

        let rectangle = record.get("faceRectangle").and_then(Value::as_record).unwrap();
        assert_eq!(rectangle.type_name(), "FaceRectangle");

        let landmarks = record.get("faceLandmarks").and_then(Value::as_record).unwrap();
        assert_eq!(landmarks.type_name(), "FaceLandmarks");
        let nose = landmarks.get("noseTip").and_then(Value::as_record).unwrap();
        assert_eq!(nose.type_name(), "FaceLandmark");

        let attributes = record.get("faceAttributes").and_then(Value::as_record).unwrap();
        let hair = attributes.get("hair").and_then(Value::as_record).unwrap();
        let colors = hair.get("hairColor").and_then(Value::as_records).unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].get_str("color"), Some("brown"));
        assert_eq!(colors[1].get_str("color"), Some("blond"));
        assert!(attributes.get("emotion").is_none());
    }

    #[test]
    fn face_decodes_to_typed_view() {
        let face = FaceInfo::from_json(detected()).unwrap();

        assert_eq!(face.face_rectangle, Some(FaceRectangle::new(394, 54, 78, 78)));
        let landmarks = face.face_landmarks.unwrap();
        assert_eq!(landmarks.nose_tip, Some(FaceLandmark { x: 437.7, y: 92.4 }));
        assert!(landmarks.mouth_left.is_none());

        let attributes = face.face_attributes.unwrap();
        assert_eq!(attributes.gender.as_deref(), Some("male"));
        assert_eq!(attributes.accessories.unwrap()[0].kind.as_deref(), Some("glasses"));
        assert!(attributes.emotion.is_none());
    }

    #[test]
    fn face_without_optional_parts() {
        let face = FaceInfo::from_json(json!({
            "faceRectangle": {"width": 1, "height": 2, "left": 3, "top": 4}
        }))
        .unwrap();
        assert!(face.face_id.is_none());
        assert!(face.face_attributes.is_none());
    }

    #[test]
    fn rectangle_param_order() {
        assert_eq!(FaceRectangle::new(10, 20, 30, 40).as_param(), "10,20,30,40");
    }
}
