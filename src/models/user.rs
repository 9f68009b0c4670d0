use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identificador interno do usuário (o nome é só um atributo)
pub type UserId = Uuid;

/// Builds the external user key, also used as the seat label.
pub fn user_key(first_name: &str, last_name: &str) -> String {
    format!("{}-{}", first_name, last_name)
}

/// User as it travels on the wire (request and response).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct User {
    pub user_first_name: String,
    pub user_last_name: String,
    #[serde(default)]
    pub user_email: String,
}

impl User {
    pub fn key(&self) -> String {
        user_key(&self.user_first_name, &self.user_last_name)
    }
}

/// Stored profile. The route is the one from the latest purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub from: String,
    pub to: String,
}

impl UserProfile {
    pub fn key(&self) -> String {
        user_key(&self.first_name, &self.last_name)
    }
}

impl From<&UserProfile> for User {
    fn from(profile: &UserProfile) -> Self {
        User {
            user_first_name: profile.first_name.clone(),
            user_last_name: profile.last_name.clone(),
            user_email: profile.email.clone(),
        }
    }
}
