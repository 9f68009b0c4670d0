//! Estado em memória do motor de reservas.
//!
//! Nothing outside `services::ticket_service` touches these types; the
//! service keeps them together behind a single lock.

pub mod seat_allocator;
pub mod section_index;
pub mod user_registry;

pub use seat_allocator::SeatAllocator;
pub use user_registry::UserRegistry;

/// Registry and allocator, always mutated together.
#[derive(Debug)]
pub struct BookingState {
    pub users: UserRegistry,
    pub seats: SeatAllocator,
}

impl BookingState {
    pub fn new() -> Self {
        BookingState {
            users: UserRegistry::new(),
            seats: SeatAllocator::new(),
        }
    }
}
