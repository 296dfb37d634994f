use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Role of an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Clinician,
    Supervisor,
    Admin,
}

/// User entity, as issued by the authentication provider
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
    /// Avatar URL from the provider
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: "dr.lee@example.com".to_string(),
            name: None,
            role: UserRole::Clinician,
            image: None,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "clinician");
        assert!(json.get("createdAt").is_some());
        assert!(json["name"].is_null());
    }
}
