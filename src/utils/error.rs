use thiserror::Error;

/// Falhas do motor de reservas. Todas são recuperáveis e voltam para o cliente.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TicketError {
    #[error("user not found")]
    UserNotFound,
    #[error("seat not found for user")]
    SeatNotFound,
    #[error("invalid section: {0:?}")]
    InvalidSection(String),
    /// Another request panicked while holding the booking lock.
    #[error("booking state unavailable")]
    StateUnavailable,
}

impl TicketError {
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            TicketError::UserNotFound | TicketError::SeatNotFound => StatusCode::NOT_FOUND,
            TicketError::InvalidSection(_) => StatusCode::BAD_REQUEST,
            TicketError::StateUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_messages() {
        assert_eq!(TicketError::UserNotFound.to_string(), "user not found");
        assert_eq!(TicketError::SeatNotFound.to_string(), "seat not found for user");
        assert_eq!(TicketError::InvalidSection("C".into()).to_string(), "invalid section: \"C\"");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(TicketError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(TicketError::InvalidSection("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(TicketError::StateUnavailable.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
