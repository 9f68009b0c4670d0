pub mod section;
pub mod ticket;
pub mod user;

pub use section::*;
pub use ticket::*;
pub use user::*;
