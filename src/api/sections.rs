use actix_web::{web, HttpResponse};

use super::error_response;
use crate::{
    models::{SectionRequest, UsersBySection},
    services::TicketService,
};

#[utoipa::path(
    get,
    path = "/api/v1/sections/{section}/users",
    tag = "Sections",
    params(
        ("section" = String, Path, description = "Section label, \"A\" or \"B\"")
    ),
    responses(
        (status = 200, description = "Users seated in the section", body = UsersBySection),
        (status = 400, description = "Invalid section")
    )
)]
pub async fn get_users_by_section(
    service: web::Data<TicketService>,
    section: web::Path<String>,
) -> HttpResponse {
    let request = SectionRequest { section: section.into_inner() };
    log::info!("💺 GET /sections/{}/users", request.section);

    match service.get_users_by_section(&request) {
        Ok(response) => {
            log::info!("✅ {} users in section {}", response.users.len(), response.section);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("⚠️ Section lookup failed: {}", e);
            error_response(&e)
        }
    }
}
