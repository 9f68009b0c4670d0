use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Train Ticket Service API",
        version = "1.0.0",
        description = "Ticket booking for the train route. \n\n**Seating:** each purchase gets a seat in section A or B; sections alternate by the number of seats currently taken.\n\n**Price:** every ticket costs 20.0.",
        contact(
            name = "Train Ticket Service Team"
        )
    ),
    paths(
        // Tickets
        crate::api::tickets::purchase_ticket,
        crate::api::tickets::get_receipt_details,

        // Sections
        crate::api::sections::get_users_by_section,

        // Users
        crate::api::users::remove_user,
        crate::api::users::modify_user_seat,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::TicketRequest,
            crate::models::Receipt,
            crate::models::User,
            crate::models::Section,
            crate::models::UsersBySection,
            crate::models::RemoveUserResponse,
            crate::models::UserSeatRequest,
            crate::models::ModifyUserSeatResponse,
            crate::models::SeatingStats,

            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Tickets", description = "Purchase tickets and look up receipts."),
        (name = "Sections", description = "List the users seated in a section."),
        (name = "Users", description = "Remove users and change their seats."),
        (name = "Health", description = "Health check and request metrics."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_booking_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/v1/tickets",
            "/api/v1/tickets/receipt",
            "/api/v1/sections/{section}/users",
            "/api/v1/users",
            "/api/v1/users/seat",
            "/health",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {}", expected);
        }
    }
}
