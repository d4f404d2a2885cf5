//! Typed views over service payloads.
//!
//! Every payload is first hydrated into a [`Record`] using the model's
//! [`RecordSchema`], then decoded into the typed struct. Absent attributes
//! decode to `None`; they are never an error.

mod collections;
mod common;
mod face;
mod results;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::record::{Record, RecordSchema};

pub use collections::{
    FACE_LIST, FaceListInfo, LARGE_FACE_LIST, LARGE_PERSON_GROUP, LargeFaceListInfo,
    LargePersonGroupInfo, PERSON, PERSON_GROUP, PersonGroupInfo, PersonInfo,
};
pub use common::{PERSISTED_FACE, PersistedFace, TRAINING_STATUS, TrainingState, TrainingStatus};
pub use face::{
    ACCESSORY, Accessory, BLUR, Blur, EMOTION, EXPOSURE, Emotion, Exposure, FACE,
    FACE_ATTRIBUTES, FACE_LANDMARK, FACE_LANDMARKS, FACE_RECTANGLE, FACIAL_HAIR, FaceAttributes,
    FaceInfo, FaceLandmark, FaceLandmarks, FaceRectangle, FacialHair, HAIR, HAIR_COLOR,
    HEAD_POSE, Hair, HairColor, HeadPose, MAKEUP, Makeup, NOISE, Noise, OCCLUSION, Occlusion,
};
pub use results::{
    GROUP_RESULT, GroupResult, IDENTIFY_CANDIDATE, IDENTIFY_RESULT, IdentifyCandidate,
    IdentifyResult, SIMILAR_FACE, SimilarFace, VERIFY_RESULT, VerifyResult,
};

/// A typed payload with its hydration schema.
pub trait Model: Serialize + DeserializeOwned {
    /// Schema used to hydrate raw payloads of this type.
    const SCHEMA: &'static RecordSchema;

    fn from_record(record: &Record) -> Result<Self> {
        record.decode()
    }

    fn from_json(raw: serde_json::Value) -> Result<Self> {
        Self::from_record(&Record::hydrate(Self::SCHEMA, raw)?)
    }

    fn list_from_json(raw: serde_json::Value) -> Result<Vec<Self>> {
        Record::hydrate_list(Self::SCHEMA, raw)?
            .iter()
            .map(Self::from_record)
            .collect()
    }
}
