use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Draft,
    Active,
    Archived,
}

/// Treatment plan derived from a session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: Uuid,
    pub session_id: Uuid,
    pub client_name: String,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub interventions: Vec<String>,
    pub review_date: Option<NaiveDate>,
    pub status: PlanStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_default_to_empty() {
        let json = serde_json::json!({
            "id": Uuid::nil(),
            "sessionId": Uuid::nil(),
            "clientName": "J. Doe",
            "reviewDate": "2026-11-01",
            "status": "draft",
            "createdAt": "2026-10-01T09:00:00Z",
            "updatedAt": "2026-10-01T09:00:00Z"
        });
        let plan: Plan = serde_json::from_value(json).unwrap();
        assert!(plan.goals.is_empty());
        assert!(plan.interventions.is_empty());
        assert_eq!(plan.status, PlanStatus::Draft);
        assert_eq!(plan.review_date, NaiveDate::from_ymd_opt(2026, 11, 1));
    }
}
