use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Model;
use crate::record::RecordSchema;
use crate::utils::datetime::parse_service_timestamp;

pub const PERSISTED_FACE: RecordSchema = RecordSchema::plain("PersistedFace");
pub const TRAINING_STATUS: RecordSchema = RecordSchema::plain("TrainingStatus");

/// A face stored in a face list, large face list or person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedFace {
    pub persisted_face_id: Option<String>,
    pub user_data: Option<String>,
}

impl Model for PersistedFace {
    const SCHEMA: &'static RecordSchema = &PERSISTED_FACE;
}

/// Training state reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingState {
    NotStarted,
    Running,
    Succeeded,
    Failed,
    /// Any status string this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Training status of a person group, large person group or large face list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStatus {
    pub status: TrainingState,
    pub created_date_time: Option<String>,
    pub last_action_date_time: Option<String>,
    pub last_successful_training_date_time: Option<String>,
    /// Failure reason, only set when `status` is `failed`.
    pub message: Option<String>,
}

impl TrainingStatus {
    /// Training has not finished yet, either queued or in progress.
    pub fn is_running(&self) -> bool {
        matches!(self.status, TrainingState::NotStarted | TrainingState::Running)
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == TrainingState::Succeeded
    }

    pub fn is_failed(&self) -> bool {
        self.status == TrainingState::Failed
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_date_time
            .as_deref()
            .and_then(parse_service_timestamp)
    }

    pub fn last_action_at(&self) -> Option<DateTime<Utc>> {
        self.last_action_date_time
            .as_deref()
            .and_then(parse_service_timestamp)
    }

    pub fn last_successful_training_at(&self) -> Option<DateTime<Utc>> {
        self.last_successful_training_date_time
            .as_deref()
            .and_then(parse_service_timestamp)
    }
}

impl Model for TrainingStatus {
    const SCHEMA: &'static RecordSchema = &TRAINING_STATUS;
}
