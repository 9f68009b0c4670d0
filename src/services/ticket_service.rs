// ==================== TICKET SERVICE ====================
// Único ponto de entrada do motor de reservas. Registro, assentos e seções
// ficam atrás de um só Mutex e cada operação roda inteira sob o lock.

use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::{
    config::BookingSettings,
    database::BookingState,
    models::{
        user_key, ModifyUserSeatResponse, Receipt, RemoveUserResponse, Section, SectionRequest,
        SeatingStats, TicketRequest, User, UserProfile, UserSeatRequest, UsersBySection,
        DEFAULT_RECEIPT_FROM, DEFAULT_RECEIPT_TO, TICKET_PRICE,
    },
    utils::error::TicketError,
};

const USER_NOT_FOUND: &str = "User not found";
const SEAT_NOT_FOUND: &str = "Seat not found for user";
const USER_REMOVED: &str = "User removed successfully";

pub struct TicketService {
    state: Mutex<BookingState>,
    settings: BookingSettings,
}

impl TicketService {
    pub fn new(settings: BookingSettings) -> Self {
        TicketService {
            state: Mutex::new(BookingState::new()),
            settings,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, BookingState>, TicketError> {
        self.state.lock().map_err(|_| {
            log::error!("❌ Booking state lock poisoned");
            TicketError::StateUnavailable
        })
    }

    /// Compra uma passagem. Uma segunda compra com o mesmo nome troca o assento
    /// anterior em vez de deixar um assento órfão.
    pub fn purchase_ticket(&self, request: TicketRequest) -> Result<Receipt, TicketError> {
        let key = user_key(&request.user_first_name, &request.user_last_name);

        let mut guard = self.lock()?;
        let state = &mut *guard;

        let id = state.users.resolve(&key).unwrap_or_else(Uuid::new_v4);
        if let Some(previous) = state.seats.deallocate(&id) {
            log::info!("🔁 {} already seated in {}, reallocating", key, previous);
        }
        let section = state.seats.allocate(id);

        state.users.put(
            id,
            UserProfile {
                first_name: request.user_first_name.clone(),
                last_name: request.user_last_name.clone(),
                email: request.user_email.clone(),
                from: request.from.clone(),
                to: request.to.clone(),
            },
        );
        drop(guard);

        log::debug!("🎫 Seat {} allocated in section {}", key, section);

        Ok(Receipt {
            from: request.from,
            to: request.to,
            user_first_name: request.user_first_name,
            user_last_name: request.user_last_name,
            user_email: request.user_email,
            price_paid: TICKET_PRICE,
            seat: key,
            section: Some(section),
        })
    }

    /// Lookup is by name only; the email in the request is not compared.
    pub fn get_receipt_details(&self, request: &User) -> Result<Receipt, TicketError> {
        let key = request.key();
        let state = self.lock()?;

        let id = state.users.resolve(&key).ok_or(TicketError::UserNotFound)?;
        let profile = state.users.get(&id).ok_or(TicketError::UserNotFound)?;
        state
            .seats
            .current_section(&id)
            .ok_or(TicketError::SeatNotFound)?;

        let (from, to) = if self.settings.echo_purchase_route {
            (profile.from.clone(), profile.to.clone())
        } else {
            (DEFAULT_RECEIPT_FROM.to_string(), DEFAULT_RECEIPT_TO.to_string())
        };

        Ok(Receipt {
            from,
            to,
            user_first_name: profile.first_name.clone(),
            user_last_name: profile.last_name.clone(),
            user_email: profile.email.clone(),
            price_paid: TICKET_PRICE,
            seat: key,
            section: None,
        })
    }

    /// Users seated in a section, ordered by seat.
    pub fn get_users_by_section(&self, request: &SectionRequest) -> Result<UsersBySection, TicketError> {
        let section: Section = request.section.parse()?;
        let state = self.lock()?;

        let mut users: Vec<User> = state
            .seats
            .members(section)
            .filter_map(|id| match state.users.get(id) {
                Some(profile) => Some(User::from(profile)),
                None => {
                    log::error!("❌ Seat {} in section {} has no registered user", id, section);
                    None
                }
            })
            .collect();
        drop(state);

        users.sort_by_key(User::key);

        Ok(UsersBySection { users, section })
    }

    /// "Not found" is reported in the response, never as an error.
    pub fn remove_user(&self, request: &User) -> Result<RemoveUserResponse, TicketError> {
        let key = request.key();
        let mut guard = self.lock()?;
        let state = &mut *guard;

        let Some(id) = state.users.resolve(&key) else {
            return Ok(RemoveUserResponse {
                success: false,
                message: USER_NOT_FOUND.to_string(),
            });
        };

        state.users.remove(&id);
        if let Some(section) = state.seats.deallocate(&id) {
            log::debug!("🗑️  Seat {} freed in section {}", key, section);
        }

        Ok(RemoveUserResponse {
            success: true,
            message: USER_REMOVED.to_string(),
        })
    }

    /// Troca de assento: libera o atual e aloca de novo pela regra de paridade.
    /// O `new_seat` do pedido é só informativo.
    pub fn modify_user_seat(&self, request: &UserSeatRequest) -> Result<ModifyUserSeatResponse, TicketError> {
        let key = user_key(&request.user_first_name, &request.user_last_name);
        let mut guard = self.lock()?;
        let state = &mut *guard;

        let Some(id) = state.users.resolve(&key) else {
            return Ok(ModifyUserSeatResponse::failed(USER_NOT_FOUND));
        };
        let Some(previous) = state.seats.deallocate(&id) else {
            return Ok(ModifyUserSeatResponse::failed(SEAT_NOT_FOUND));
        };
        let section = state.seats.allocate(id);
        drop(guard);

        if !request.new_seat.is_empty() {
            log::debug!("Seat hint {:?} for {} ignored by allocator", request.new_seat, key);
        }
        log::debug!("🔁 {} moved from section {} to {}", key, previous, section);

        Ok(ModifyUserSeatResponse {
            success: true,
            message: format!("Seat modified for {}", request.user_first_name),
            new_seat: key,
            section: Some(section),
        })
    }

    pub fn stats(&self) -> Result<SeatingStats, TicketError> {
        let state = self.lock()?;
        debug_assert_eq!(state.users.len(), state.seats.active_seats());

        Ok(SeatingStats {
            seated: state.seats.active_seats(),
            section_a: state.seats.section_size(Section::A),
            section_b: state.seats.section_size(Section::B),
        })
    }

    /// Panics if registry, seats and section sets disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let state = self.state.lock().unwrap();

        assert_eq!(state.users.len(), state.seats.active_seats());
        for id in state.users.ids() {
            let section = state.seats.current_section(id).expect("registered user without seat");
            assert_eq!(state.seats.indexed_section(id), Some(section));
        }
        for section in Section::ALL {
            for id in state.seats.members(section) {
                assert!(state.users.get(id).is_some(), "seat without user");
                assert_eq!(state.seats.current_section(id), Some(section));
            }
        }
        assert_eq!(
            state.seats.section_size(Section::A) + state.seats.section_size(Section::B),
            state.seats.active_seats()
        );
    }
}
