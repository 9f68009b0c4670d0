pub mod health;
pub mod metrics;
pub mod sections;
pub mod swagger;
pub mod tickets;
pub mod users;

use actix_web::{web, HttpResponse};

use crate::utils::error::TicketError;

/// Rotas da API de passagens (usado pelo main e pelos testes)
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/metrics", web::get().to(metrics::get_metrics))
        .service(
            web::scope("/api/v1/tickets")
                .route("", web::post().to(tickets::purchase_ticket))
                .route("/receipt", web::post().to(tickets::get_receipt_details)),
        )
        .service(
            web::scope("/api/v1/sections")
                .route("/{section}/users", web::get().to(sections::get_users_by_section)),
        )
        .service(
            web::scope("/api/v1/users")
                .route("", web::delete().to(users::remove_user))
                .route("/seat", web::put().to(users::modify_user_seat)),
        );
}

fn error_response(error: &TicketError) -> HttpResponse {
    HttpResponse::build(error.status_code()).json(serde_json::json!({
        "success": false,
        "error": error.to_string()
    }))
}
