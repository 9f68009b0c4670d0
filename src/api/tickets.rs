use actix_web::{web, HttpResponse};

use super::error_response;
use crate::{
    models::{Receipt, TicketRequest, User},
    services::TicketService,
};

#[utoipa::path(
    post,
    path = "/api/v1/tickets",
    tag = "Tickets",
    request_body = TicketRequest,
    responses(
        (status = 200, description = "Ticket purchased, seat allocated", body = Receipt),
        (status = 500, description = "Booking state unavailable")
    )
)]
pub async fn purchase_ticket(
    service: web::Data<TicketService>,
    request: web::Json<TicketRequest>,
) -> HttpResponse {
    log::info!(
        "🎫 POST /tickets - {} {} ({} -> {})",
        request.user_first_name, request.user_last_name, request.from, request.to
    );

    match service.purchase_ticket(request.into_inner()) {
        Ok(receipt) => {
            log::info!(
                "✅ Seat {} in section {}",
                receipt.seat,
                receipt.section.map(|s| s.as_str()).unwrap_or("-")
            );
            HttpResponse::Ok().json(receipt)
        }
        Err(e) => {
            log::error!("❌ Error purchasing ticket: {}", e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/tickets/receipt",
    tag = "Tickets",
    request_body = User,
    responses(
        (status = 200, description = "Receipt of the current seat", body = Receipt),
        (status = 404, description = "User or seat not found")
    )
)]
pub async fn get_receipt_details(
    service: web::Data<TicketService>,
    request: web::Json<User>,
) -> HttpResponse {
    log::info!("🧾 POST /tickets/receipt - {}", request.key());

    match service.get_receipt_details(&request) {
        Ok(receipt) => HttpResponse::Ok().json(receipt),
        Err(e) => {
            log::warn!("⚠️ Receipt lookup failed for {}: {}", request.key(), e);
            error_response(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api, config::BookingSettings, models::Section};
    use actix_web::{http::StatusCode, test, App};

    fn alice() -> TicketRequest {
        TicketRequest {
            from: "Paris".to_string(),
            to: "Lyon".to_string(),
            user_first_name: "Alice".to_string(),
            user_last_name: "Smith".to_string(),
            user_email: "a@x.com".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_purchase_then_receipt() {
        let service = web::Data::new(TicketService::new(BookingSettings::default()));
        let app = test::init_service(App::new().app_data(service.clone()).configure(api::routes)).await;

        let req = test::TestRequest::post().uri("/api/v1/tickets").set_json(alice()).to_request();
        let receipt: Receipt = test::call_and_read_body_json(&app, req).await;
        assert_eq!(receipt.seat, "Alice-Smith");
        assert_eq!(receipt.section, Some(Section::A));
        assert_eq!(receipt.price_paid, 20.0);

        let req = test::TestRequest::post()
            .uri("/api/v1/tickets/receipt")
            .set_json(serde_json::json!({
                "user_first_name": "Alice",
                "user_last_name": "Smith",
                "user_email": "a@x.com"
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["from"], "London");
        assert_eq!(body["to"], "France");
        assert_eq!(body["seat"], "Alice-Smith");
        assert!(body.get("section").is_none());
    }

    #[actix_web::test]
    async fn test_receipt_for_unknown_user_is_404() {
        let service = web::Data::new(TicketService::new(BookingSettings::default()));
        let app = test::init_service(App::new().app_data(service).configure(api::routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/tickets/receipt")
            .set_json(serde_json::json!({ "user_first_name": "No", "user_last_name": "One" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "user not found");
    }
}
