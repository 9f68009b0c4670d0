use serde::{Deserialize, Serialize};

use super::{Section, User};

/// Preço fixo de qualquer passagem
pub const TICKET_PRICE: f64 = 20.0;

/// Rota devolvida pelo GetReceiptDetails quando o eco da compra está desligado
pub const DEFAULT_RECEIPT_FROM: &str = "London";
pub const DEFAULT_RECEIPT_TO: &str = "France";

// ==================== REQUEST MODELS ====================

#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct TicketRequest {
    pub from: String,
    pub to: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub user_email: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SectionRequest {
    pub section: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserSeatRequest {
    pub user_first_name: String,
    pub user_last_name: String,
    /// Informational only; the allocator decides the section.
    #[serde(default)]
    pub new_seat: String,
}

// ==================== RESPONSE MODELS ====================

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, utoipa::ToSchema)]
pub struct Receipt {
    pub from: String,
    pub to: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub user_email: String,
    pub price_paid: f64,
    pub seat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
}

#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UsersBySection {
    pub users: Vec<User>,
    pub section: Section,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, utoipa::ToSchema)]
pub struct RemoveUserResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, utoipa::ToSchema)]
pub struct ModifyUserSeatResponse {
    pub success: bool,
    pub message: String,
    pub new_seat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
}

impl ModifyUserSeatResponse {
    pub fn failed(message: &str) -> Self {
        ModifyUserSeatResponse {
            success: false,
            message: message.to_string(),
            new_seat: String::new(),
            section: None,
        }
    }
}

/// Ocupação atual, usada pelo /health
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct SeatingStats {
    pub seated: usize,
    pub section_a: usize,
    pub section_b: usize,
}
