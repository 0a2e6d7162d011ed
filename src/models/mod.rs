pub mod booking;
pub mod error;
pub mod restaurant;
pub mod session;

pub use booking::{Booking, BookingUser};
pub use error::{FetchError, MutationError, SessionError};
pub use restaurant::Restaurant;
pub use session::{Session, SessionUser};
