use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::{models::SeatingStats, services::TicketService};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
    pub seating: Option<SeatingStats>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Booking state unavailable", body = HealthResponse)
    )
)]
pub async fn health_check(service: web::Data<TicketService>) -> impl Responder {
    let (status, seating) = match service.stats() {
        Ok(stats) => ("healthy", Some(stats)),
        Err(e) => {
            log::error!("❌ Health check failed: {}", e);
            ("unhealthy", None)
        }
    };

    let body = HealthResponse {
        status: status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        seating,
    };

    if body.seating.is_some() {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
