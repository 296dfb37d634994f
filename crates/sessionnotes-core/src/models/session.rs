use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle of a clinical session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Recorded,
    Transcribed,
    Completed,
    Cancelled,
}

/// A clinical session and its notes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub clinician_id: Uuid,
    pub client_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: Option<u32>,
    pub status: SessionStatus,
    /// Generated filename of the stored recording, if one was uploaded
    pub audio_filename: Option<String>,
    pub transcript: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(status: SessionStatus) -> Session {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            clinician_id: Uuid::new_v4(),
            client_name: "J. Doe".to_string(),
            scheduled_at: now,
            duration_minutes: Some(50),
            status,
            audio_filename: None,
            transcript: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_value(session(SessionStatus::Recorded)).unwrap();
        assert_eq!(json["status"], "recorded");
        assert!(json["audioFilename"].is_null());
    }

    #[test]
    fn round_trips_through_json() {
        let s = session(SessionStatus::Completed);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"clientName\":\"J. Doe\""));
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, s.id);
    }
}
