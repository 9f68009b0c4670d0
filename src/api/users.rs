use actix_web::{web, HttpResponse};

use super::error_response;
use crate::{
    models::{ModifyUserSeatResponse, RemoveUserResponse, User, UserSeatRequest},
    services::TicketService,
};

/// DELETE /api/v1/users - Remove o usuário e libera o assento
///
/// "User not found" comes back as 200 with `success: false`.
#[utoipa::path(
    delete,
    path = "/api/v1/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "Removal result", body = RemoveUserResponse)
    )
)]
pub async fn remove_user(
    service: web::Data<TicketService>,
    request: web::Json<User>,
) -> HttpResponse {
    log::info!("🗑️  DELETE /users - {}", request.key());

    match service.remove_user(&request) {
        Ok(response) => {
            if response.success {
                log::info!("✅ User {} removed", request.key());
            } else {
                log::warn!("⚠️ Failed to remove {}: {}", request.key(), response.message);
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Error removing user: {}", e);
            error_response(&e)
        }
    }
}

/// PUT /api/v1/users/seat - Troca o assento do usuário
#[utoipa::path(
    put,
    path = "/api/v1/users/seat",
    tag = "Users",
    request_body = UserSeatRequest,
    responses(
        (status = 200, description = "Reseat result", body = ModifyUserSeatResponse)
    )
)]
pub async fn modify_user_seat(
    service: web::Data<TicketService>,
    request: web::Json<UserSeatRequest>,
) -> HttpResponse {
    log::info!(
        "🔧 PUT /users/seat - {} {} (hint: {:?})",
        request.user_first_name, request.user_last_name, request.new_seat
    );

    match service.modify_user_seat(&request) {
        Ok(response) => {
            if response.success {
                log::info!("✅ {}", response.message);
            } else {
                log::warn!("⚠️ Failed to modify seat: {}", response.message);
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Error modifying seat: {}", e);
            error_response(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api, config::BookingSettings, models::{Section, TicketRequest}};
    use actix_web::{http::StatusCode, test, App};

    fn seeded_service() -> web::Data<TicketService> {
        let service = web::Data::new(TicketService::new(BookingSettings::default()));
        service
            .purchase_ticket(TicketRequest {
                from: "Paris".to_string(),
                to: "Lyon".to_string(),
                user_first_name: "Alice".to_string(),
                user_last_name: "Smith".to_string(),
                user_email: "a@x.com".to_string(),
            })
            .unwrap();
        service
    }

    #[actix_web::test]
    async fn test_remove_user_twice() {
        let app = test::init_service(App::new().app_data(seeded_service()).configure(api::routes)).await;
        let alice = serde_json::json!({
            "user_first_name": "Alice",
            "user_last_name": "Smith",
            "user_email": "a@x.com"
        });

        let req = test::TestRequest::delete().uri("/api/v1/users").set_json(&alice).to_request();
        let first: RemoveUserResponse = test::call_and_read_body_json(&app, req).await;
        assert!(first.success);

        let req = test::TestRequest::delete().uri("/api/v1/users").set_json(&alice).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let second: RemoveUserResponse = test::read_body_json(resp).await;
        assert!(!second.success);
        assert_eq!(second.message, "User not found");
    }

    #[actix_web::test]
    async fn test_modify_user_seat() {
        let app = test::init_service(App::new().app_data(seeded_service()).configure(api::routes)).await;

        let req = test::TestRequest::put()
            .uri("/api/v1/users/seat")
            .set_json(serde_json::json!({
                "user_first_name": "Alice",
                "user_last_name": "Smith",
                "new_seat": "7A"
            }))
            .to_request();
        let response: ModifyUserSeatResponse = test::call_and_read_body_json(&app, req).await;
        assert!(response.success);
        assert_eq!(response.new_seat, "Alice-Smith");
        // único passageiro: libera e volta para A
        assert_eq!(response.section, Some(Section::A));

        let req = test::TestRequest::put()
            .uri("/api/v1/users/seat")
            .set_json(serde_json::json!({ "user_first_name": "Bob", "user_last_name": "Jones" }))
            .to_request();
        let missing: ModifyUserSeatResponse = test::call_and_read_body_json(&app, req).await;
        assert!(!missing.success);
        assert_eq!(missing.message, "User not found");
        assert_eq!(missing.section, None);
    }
}
